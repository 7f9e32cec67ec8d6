use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn login_page(error: Option<&str>) -> Markup {
    desktop_layout(
        "Sign in",
        None,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }
                p class="lead" { "Auction management system" }

                @if let Some(msg) = error {
                    div class="notice notice-error" { (msg) }
                }

                form method="post" action="/login" class="login-form" {
                    label for="email" { "Email address" }
                    input
                        type="email"
                        id="email"
                        name="email"
                        placeholder="you@domain.com"
                        autocomplete="email"
                        required;

                    label for="password" { "Password" }
                    input
                        type="password"
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        required;

                    button type="submit" class="primary" { "Sign in" }
                }
            }
        },
    )
}
