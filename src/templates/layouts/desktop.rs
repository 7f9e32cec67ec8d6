use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, user_email: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " – Auction Board" }
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    h3 { a href="/" { "Auction Board" } }
                    nav {
                        ul {
                            @if user_email.is_some() {
                                li { a href="/dashboard" { "Dashboard" } }
                                li { a href="/dashboard/auctions" { "Auctions" } }
                            } @else {
                                li { a href="/" { "Home" } }
                            }
                        }
                    }

                    @match user_email {
                        Some(email) => {
                            div class="user-menu" {
                                span class="user-email" { (email) }
                                form action="/logout" method="post" class="inline" {
                                    button type="submit" class="link" { "Sign out" }
                                }
                            }
                        }
                        None => {
                            a href="/login" class="text-base font-medium hover:text-blue-600" { "Sign in" }
                        }
                    }
                }
                (content)
            }
        }
    }
}
