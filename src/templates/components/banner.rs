use maud::{html, Markup};

/// Call-to-action banner used at the bottom of most pages.
pub fn fancy_banner() -> Markup {
    html! {
        section class="fancy-banner" {
            h2 { "Have a property to sell or rent?" }
            p { "Put it in front of serious buyers today." }
            a href="/dashboard/add-property" class="btn" { "Add your property" }
        }
    }
}
