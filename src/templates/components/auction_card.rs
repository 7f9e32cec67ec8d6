use maud::{html, Markup};

use crate::domain::auction::{Auction, AuctionStatus};
use crate::domain::paging::discount_percent;
use crate::templates::components::{format_date, format_datetime, format_price};

/// One listing card in the browse grid. The favorite button is an htmx
/// post that swaps this card in place, so the fragment must carry a
/// stable element id. `query` is the current filter/page query string,
/// carried through so the swapped-in card keeps the right context.
pub fn auction_card(auction: &Auction, query: &str) -> Markup {
    let card_id = format!("auction-card-{}", auction.id);

    html! {
        div class="auction-card" id=(card_id) {
            @match &auction.image_url {
                Some(url) => {
                    img class="auction-image" src=(url) alt=(auction.title);
                }
                None => {
                    div class="auction-image image-placeholder" { "No photo" }
                }
            }

            div class="auction-card-header" {
                span class="badge badge-type" { (auction.auction_type.label()) }

                @if auction.has_discount() {
                    span class="badge badge-discount" {
                        (discount_percent(auction.starting_price, auction.current_price)) "%"
                    }
                }
            }

            h3 class="auction-title" { (auction.title) }

            div class="auction-rounds" {
                div {
                    div class="round-label" { "1st round" }
                    div { (format_datetime(auction.first_auction_date)) }
                    div class="round-price" { (format_price(auction.starting_price)) }
                }
                div {
                    div class="round-label" { "2nd round" }
                    div { (format_datetime(auction.second_auction_date)) }
                    div class="round-price highlight" { (format_price(auction.current_price)) }
                }
            }

            @if let Some(address) = &auction.address {
                p class="auction-address" { (address) }
            }

            ul class="auction-facts" {
                @if let Some(area) = auction.area {
                    li { (area) " m²" }
                }
                @if let Some(n) = auction.bedrooms {
                    li { (n) " bedrooms" }
                }
                @if let Some(n) = auction.bathrooms {
                    li { (n) " bathrooms" }
                }
                @if let Some(n) = auction.parking_spots {
                    li { (n) " parking spots" }
                }
            }

            div class="auction-card-actions" {
                button
                    class=(if auction.is_favorite { "favorite active" } else { "favorite" })
                    hx-post=(format!("/dashboard/auctions/{}/favorite?{query}", auction.id))
                    hx-target=(format!("#{card_id}"))
                    hx-swap="outerHTML"
                {
                    @if auction.is_favorite { "♥" } @else { "♡" }
                }

                a href=(format!("/dashboard/auctions/{}", auction.id)) { "Details" }
            }

            div class=(format!("auction-status status-{}", auction.status.as_str())) {
                (auction.status.label())
                @if auction.status == AuctionStatus::Active {
                    span { " until " (format_date(auction.end_date)) }
                }
            }
        }
    }
}
