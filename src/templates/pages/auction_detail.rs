use crate::domain::auction::{Auction, AuctionStatus};
use crate::domain::paging::discount_percent;
use crate::templates::components::{format_date, format_datetime, format_price};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn auction_detail_page(email: &str, auction: &Auction) -> Markup {
    desktop_layout(
        &auction.title,
        Some(email),
        html! {
            main class="container" {
                p {
                    a href="/dashboard/auctions" { "← Back to auctions" }
                }

                div class="detail-header" {
                    span class="badge badge-type" { (auction.auction_type.label()) " auction" }
                    @if auction.has_discount() {
                        span class="badge badge-discount" {
                            (discount_percent(auction.starting_price, auction.current_price)) "% off"
                        }
                    }
                    span class=(format!("badge status-{}", auction.status.as_str())) {
                        (auction.status.label())
                    }
                }

                h1 { (auction.title) }

                @if let Some(address) = &auction.address {
                    p class="detail-address" { (address) }
                }

                @match &auction.image_url {
                    Some(url) => {
                        img class="detail-image" src=(url) alt=(auction.title);
                    }
                    None => {
                        div class="detail-image image-placeholder" { "No photo" }
                    }
                }

                @if !auction.description.is_empty() {
                    section class="card" {
                        h2 { "Description" }
                        p { (auction.description) }
                    }
                }

                section class="card" {
                    h2 { "Auction rounds" }
                    dl class="rounds" {
                        dt { "1st round" }
                        dd {
                            (format_datetime(auction.first_auction_date))
                            " — " strong { (format_price(auction.starting_price)) }
                        }
                        dt { "2nd round" }
                        dd {
                            (format_datetime(auction.second_auction_date))
                            " — " strong { (format_price(auction.current_price)) }
                        }
                    }
                    @if auction.status == AuctionStatus::Active {
                        p { "Open until " (format_date(auction.end_date)) "." }
                    }
                }

                section class="card" {
                    h2 { "Property" }
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
                        @if !auction.location.is_empty() {
                            li { (auction.location) }
                        }
                        @if !auction.category.is_empty() {
                            li { (auction.category) }
                        }
                    }
                }
            }
        },
    )
}
