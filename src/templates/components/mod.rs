use chrono::DateTime;
use maud::{html, Markup};

pub mod auction_card;
pub mod filter_form;
pub mod pagination;

pub use auction_card::auction_card;
pub use filter_form::filter_form;
pub use pagination::pagination;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Transient notice after an action (e.g. favorite toggled).
pub fn toast(message: &str, is_error: bool) -> Markup {
    html! {
        div class=(format!(
            "toast {}",
            if is_error { "toast-error" } else { "toast-success" }
        )) {
            (message)
        }
    }
}

/// "R$ 1.234.567" — Brazilian grouping, whole currency units.
pub fn format_price(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if whole < 0 {
        format!("R$ -{grouped}")
    } else {
        format!("R$ {grouped}")
    }
}

pub fn format_date(unix_secs: i64) -> String {
    match DateTime::from_timestamp(unix_secs, 0) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => "-".to_string(),
    }
}

pub fn format_datetime(unix_secs: i64) -> String {
    match DateTime::from_timestamp(unix_secs, 0) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => "-".to_string(),
    }
}
