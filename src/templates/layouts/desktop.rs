use chrono::{Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Estate Front" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="logo" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#524ed2"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        h3 { "Estate Front" }
                    }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/about" { "About us" } }
                        }
                    }
                    a href="/dashboard/add-property" class="btn header-cta" { "Add Listing" }
                }

                (content)

                (footer())
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="footer-inner" {
                div {
                    h4 { "Estate Front" }
                    p { "Homes for sale and rent, listed by people who know them best." }
                }
                nav {
                    ul {
                        li { a href="/" { "Home" } }
                        li { a href="/about" { "About us" } }
                        li { a href="/dashboard/add-property" { "Add a property" } }
                    }
                }
            }
            p class="copyright" {
                "© " (Utc::now().year()) " Estate Front. All rights reserved."
            }
        }
    }
}
