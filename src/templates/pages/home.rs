// templates/pages/home.rs

use crate::templates::{
    components::{card, fancy_banner},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        html! {
            section class="hero" {
                h1 { "Find your next home" }
                p class="lead" {
                    "Apartments, houses and villas for rent and for sale,
                     listed directly by agents and owners."
                }
                a href="/about" class="btn btn-outline" { "About the agency" }
            }

            (card("Selling or letting?", html! {
                p {
                    "Add your property in a couple of minutes. Title, price,
                     rooms, amenities and the exact spot on the map."
                }
                a href="/dashboard/add-property" { "Go to the form" }
            }))

            (fancy_banner())
        },
    )
}
