use maud::{html, Markup};

const PARTNERS: &[&str] = &["Nordbank", "Keystone Legal", "UrbanNest", "Harbor Insurance"];

/// Partner logo strip.
pub fn brand_strip() -> Markup {
    html! {
        section class="brands" {
            p class="eyebrow" { "Trusted by" }
            ul {
                @for partner in PARTNERS {
                    li { (partner) }
                }
            }
        }
    }
}
