// templates/pages/submitted.rs

use crate::api::models::PropertyCreated;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Confirmation shown after the API accepted the listing.
pub fn submitted_page(created: &PropertyCreated) -> Markup {
    let message = created
        .message
        .as_deref()
        .unwrap_or("Property added successfully");

    desktop_layout(
        "Property added",
        html! {
            main class="container narrow" {
                div class="notice notice-success" role="status" {
                    (message)
                }

                @if let Some(id) = created.id {
                    p { "Listing reference: " strong { "#" (id) } }
                }

                p {
                    a href="/dashboard/add-property" { "Add another property" }
                    " or "
                    a href="/" { "go back home" }
                    "."
                }
            }
        },
    )
}
