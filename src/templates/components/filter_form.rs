use maud::{html, Markup};

use crate::domain::filters::FilterState;

fn decimal_value(v: Option<f64>) -> String {
    match v {
        Some(n) if n.fract() == 0.0 => format!("{}", n as i64),
        Some(n) => format!("{n}"),
        None => String::new(),
    }
}

fn count_value(v: Option<i64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

fn count_select(name: &str, label: &str, selected: Option<i64>) -> Markup {
    html! {
        div class="filter-field" {
            label for=(name) { (label) }
            select name=(name) id=(name) {
                option value="" { "Any" }
                @for n in 1..=5i64 {
                    option value=(n) selected[selected == Some(n)] { (n) "+" }
                }
            }
        }
    }
}

/// Filter form for the browse page. Submits as a GET so the filter state
/// lives entirely in the URL; blank fields are treated as absent.
pub fn filter_form(filters: &FilterState) -> Markup {
    let type_is = |v: &str| filters.auction_type.map(|t| t.as_str()) == Some(v);
    let status_is = |v: &str| filters.status.map(|s| s.as_str()) == Some(v);

    html! {
        form class="filters" method="get" action="/dashboard/auctions" {
            div class="filter-row" {
                div class="filter-field" {
                    label for="search" { "Search by title" }
                    input type="text" name="search" id="search"
                        placeholder="Search listings"
                        value=(filters.search.as_deref().unwrap_or(""));
                }

                div class="filter-field" {
                    label for="type" { "Auction type" }
                    select name="type" id="type" {
                        option value="" { "All types" }
                        option value="judicial" selected[type_is("judicial")] { "Judicial" }
                        option value="extrajudicial" selected[type_is("extrajudicial")] { "Extrajudicial" }
                    }
                }

                div class="filter-field" {
                    label for="status" { "Status" }
                    select name="status" id="status" {
                        option value="" { "All" }
                        option value="active" selected[status_is("active")] { "Active" }
                        option value="ended" selected[status_is("ended")] { "Ended" }
                        option value="cancelled" selected[status_is("cancelled")] { "Cancelled" }
                    }
                }

                div class="filter-field checkbox" {
                    input type="checkbox" name="favorites" id="favorites" value="1"
                        checked[filters.only_favorites];
                    label for="favorites" { "Favorites only" }
                }
            }

            div class="filter-row advanced" {
                div class="filter-field" {
                    label for="min_price" { "Min price" }
                    input type="number" name="min_price" id="min_price" min="0"
                        value=(decimal_value(filters.min_price));
                }
                div class="filter-field" {
                    label for="max_price" { "Max price" }
                    input type="number" name="max_price" id="max_price" min="0"
                        value=(decimal_value(filters.max_price));
                }
                div class="filter-field" {
                    label for="min_area" { "Min area (m²)" }
                    input type="number" name="min_area" id="min_area" min="0"
                        value=(decimal_value(filters.min_area));
                }
                div class="filter-field" {
                    label for="max_area" { "Max area (m²)" }
                    input type="number" name="max_area" id="max_area" min="0"
                        value=(decimal_value(filters.max_area));
                }

                (count_select("bedrooms", "Bedrooms", filters.bedrooms))
                (count_select("bathrooms", "Bathrooms", filters.bathrooms))
                (count_select("parking_spots", "Parking spots", filters.parking_spots))
            }

            div class="filter-actions" {
                button type="submit" class="primary" { "Apply filters" }
                a href="/dashboard/auctions" class="secondary" { "Clear filters" }
            }
        }
    }
}
