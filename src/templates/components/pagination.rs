use maud::{html, Markup};

use crate::domain::filters::FilterState;
use crate::domain::paging::visible_pages;

fn page_href(filters: &FilterState, page: u32) -> String {
    format!("/dashboard/auctions?{}", filters.to_query_string(page))
}

/// Pagination strip: prev/next arrows, a 5-wide window of page links, and
/// first/last shortcuts with ellipses when the window is clipped.
pub fn pagination(filters: &FilterState, current_page: u32, total_pages: u32) -> Markup {
    let window = visible_pages(current_page, total_pages);
    let window_start = *window.first().unwrap_or(&1);
    let window_end = *window.last().unwrap_or(&1);

    html! {
        nav class="pagination" {
            @if current_page > 1 {
                a class="page-arrow" href=(page_href(filters, current_page - 1)) { "‹" }
            } @else {
                span class="page-arrow disabled" { "‹" }
            }

            @if window_start > 1 {
                a class="page-link" href=(page_href(filters, 1)) { "1" }
                @if window_start > 2 {
                    span class="ellipsis" { "…" }
                }
            }

            @for page in &window {
                @if *page == current_page {
                    span class="page-link current" { (page) }
                } @else {
                    a class="page-link" href=(page_href(filters, *page)) { (page) }
                }
            }

            @if window_end < total_pages {
                @if window_end < total_pages - 1 {
                    span class="ellipsis" { "…" }
                }
                a class="page-link" href=(page_href(filters, total_pages)) { (total_pages) }
            }

            @if current_page < total_pages {
                a class="page-arrow" href=(page_href(filters, current_page + 1)) { "›" }
            } @else {
                span class="page-arrow disabled" { "›" }
            }
        }
    }
}
