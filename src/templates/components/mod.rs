use maud::{html, Markup};

pub mod banner;
pub mod brand;
pub mod breadcrumb;
pub mod features;
pub mod feedback;
pub mod notice;

pub use banner::fancy_banner;
pub use brand::brand_strip;
pub use breadcrumb::breadcrumb;
pub use features::{feature_block_one, feature_block_two};
pub use feedback::feedback_strip;
pub use notice::failure_notice;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
