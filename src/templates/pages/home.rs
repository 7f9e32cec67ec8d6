// templates/pages/home.rs

use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        None,
        html! {
            main class="container" {
                h1 { "Auction Board" }
                p class="lead" {
                    "Browse judicial and extrajudicial real-estate auctions, "
                    "filter by price, area and rooms, and keep a list of favorites."
                }

                (card("Get started", html! {
                    p { "Sign in to browse the current listings." }
                    a href="/login" class="primary" { "Sign in" }
                }))
            }
        },
    )
}
