use maud::{html, Markup};

/// Testimonial strip shown on the about page.
pub fn feedback_strip() -> Markup {
    html! {
        section class="feedback" {
            h2 { "What our clients say" }
            div class="feedback-cards" {
                blockquote {
                    p { "\"We listed the flat on a Tuesday and handed over keys within the month.\"" }
                    cite { "Maria K., sold in Riverside" }
                }
                blockquote {
                    p { "\"The agent knew the street better than we did. No surprises at the viewing.\"" }
                    cite { "Tom & Ana, bought in Old Town" }
                }
            }
        }
    }
}
