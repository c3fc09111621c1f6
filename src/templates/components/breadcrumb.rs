use maud::{html, Markup};

/// Dark page-title strip shown under the header on inner pages.
pub fn breadcrumb(title: &str, sub_title: &str) -> Markup {
    html! {
        section class="breadcrumb" {
            h2 { (title) }
            ul class="trail" {
                li { a href="/" { "Home" } }
                li { (sub_title) }
            }
        }
    }
}
