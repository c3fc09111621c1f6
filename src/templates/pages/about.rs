// templates/pages/about.rs

use crate::templates::{
    components::{brand_strip, breadcrumb, fancy_banner, feature_block_one, feature_block_two, feedback_strip},
    desktop_layout,
};
use maud::{html, Markup};

/// The about page is pure composition: title strip, two feature blocks,
/// testimonials, partners, closing banner.
pub fn about_page() -> Markup {
    desktop_layout(
        "About us",
        html! {
            (breadcrumb("About Agency", "About us"))
            (feature_block_one())
            (feature_block_two())
            (feedback_strip())
            (brand_strip())
            (fancy_banner())
        },
    )
}
