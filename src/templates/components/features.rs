use maud::{html, Markup};

/// Agency introduction block: headline, pitch, counters.
pub fn feature_block_one() -> Markup {
    html! {
        section class="feature-block" {
            div class="feature-copy" {
                span class="eyebrow" { "Who we are" }
                h2 { "An agency built around the neighborhoods we live in" }
                p {
                    "We match buyers and renters with homes we have actually walked
                     through. Every listing on this site was added by an agent or an
                     owner, not pulled from a feed."
                }
            }
            div class="feature-counters" {
                div class="counter" {
                    strong { "1.2K" }
                    span { "Listings published" }
                }
                div class="counter" {
                    strong { "460" }
                    span { "Families moved in" }
                }
                div class="counter" {
                    strong { "15" }
                    span { "Years in the market" }
                }
            }
        }
    }
}

/// Secondary block: what sellers get from listing with us.
pub fn feature_block_two() -> Markup {
    html! {
        section class="feature-block alt" {
            h2 { "Why list with us" }
            ul class="benefits" {
                li {
                    h4 { "One form, one listing" }
                    p { "Fill in the property details once and it goes live for buyers and renters alike." }
                }
                li {
                    h4 { "Your amenities, spelled out" }
                    p { "Pool, gym, garage, garden. Tick what the property has and nothing it hasn't." }
                }
                li {
                    h4 { "Pinned on the map" }
                    p { "Every listing carries its coordinates, so house hunters see exactly where home is." }
                }
            }
        }
    }
}
