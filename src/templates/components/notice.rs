use maud::{html, Markup};

/// Banner shown above the form when a submission fails.
/// The message is either the API's own words or a generic transport line.
pub fn failure_notice(message: &str) -> Markup {
    html! {
        div class="notice notice-failure" role="alert" {
            (message)
        }
    }
}
