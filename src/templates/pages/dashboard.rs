use crate::db::auctions::DashboardStats;
use crate::domain::auction::Auction;
use crate::domain::filters::FilterState;
use crate::templates::components::auction_card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DashboardVm {
    pub email: String,
    pub stats: DashboardStats,
    pub total_users: i64,
    pub recent: Vec<Auction>,
}

fn stat_card(label: &str, value: i64) -> Markup {
    html! {
        div class="stat-card" {
            div class="stat-label" { (label) }
            div class="stat-value" { (value) }
        }
    }
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    // Recent cards link back here, so carry the default browse query.
    let query = FilterState::default().to_query_string(1);

    desktop_layout(
        "Dashboard",
        Some(&vm.email),
        html! {
            main class="container" {
                h1 { "Dashboard" }

                div class="stats-grid" {
                    (stat_card("Total auctions", vm.stats.total_auctions))
                    (stat_card("Active auctions", vm.stats.active_auctions))
                    (stat_card("Favorites", vm.stats.favorite_auctions))
                    (stat_card("Users", vm.total_users))
                }

                section {
                    h2 { "Recent listings" }
                    @if vm.recent.is_empty() {
                        p class="empty" { "No listings yet." }
                    } @else {
                        div class="auction-grid" {
                            @for auction in &vm.recent {
                                (auction_card(auction, &query))
                            }
                        }
                    }
                    p { a href="/dashboard/auctions" { "Browse all auctions" } }
                }
            }
        },
    )
}
