use crate::domain::auction::Auction;
use crate::domain::filters::FilterState;
use crate::domain::paging::Page;
use crate::templates::components::{auction_card, filter_form, pagination};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct AuctionsVm {
    pub email: String,
    pub filters: FilterState,
    pub page: Page<Auction>,
}

pub fn auctions_page(vm: &AuctionsVm) -> Markup {
    let query = vm.filters.to_query_string(vm.page.page);

    desktop_layout(
        "Auctions",
        Some(&vm.email),
        html! {
            main class="container wide" {
                h1 { "Auctions" }

                // Favorite toggles swap a toast in here out-of-band.
                div id="toast-area" {}

                (filter_form(&vm.filters))

                @if vm.page.items.is_empty() {
                    p class="empty" { "No listings match the current filters." }
                } @else {
                    div class="auction-grid" {
                        @for auction in &vm.page.items {
                            (auction_card(auction, &query))
                        }
                    }
                }

                (pagination(&vm.filters, vm.page.page, vm.page.total_pages))
            }
        },
    )
}
