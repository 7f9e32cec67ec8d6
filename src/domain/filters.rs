use std::collections::HashMap;

use crate::domain::auction::{AuctionStatus, AuctionType};
use crate::errors::ServerError;

/// Active user-chosen constraints narrowing the listing set.
///
/// Every field is optional; an absent field imposes no constraint.
/// `bedrooms`/`bathrooms`/`parking_spots` are minimums ("N or more", as the
/// filter form labels them), not exact matches. Out-of-order bounds
/// (`min > max`) are not rejected; they just match nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub auction_type: Option<AuctionType>,
    pub status: Option<AuctionStatus>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
    pub min_area: Option<f64>,
    pub max_area: Option<f64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub parking_spots: Option<i64>,
    pub only_favorites: bool,
}

impl FilterState {
    /// Build a filter state from decoded query parameters.
    /// Blank values mean "no constraint", matching an untouched form field.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let mut f = FilterState::default();

        if let Some(v) = non_blank(params, "type") {
            f.auction_type = Some(
                AuctionType::parse(v)
                    .ok_or_else(|| ServerError::BadRequest(format!("unknown type: {v}")))?,
            );
        }
        if let Some(v) = non_blank(params, "status") {
            f.status = Some(
                AuctionStatus::parse(v)
                    .ok_or_else(|| ServerError::BadRequest(format!("unknown status: {v}")))?,
            );
        }

        f.min_price = parse_decimal(params, "min_price")?;
        f.max_price = parse_decimal(params, "max_price")?;
        f.min_area = parse_decimal(params, "min_area")?;
        f.max_area = parse_decimal(params, "max_area")?;

        f.bedrooms = parse_count(params, "bedrooms")?;
        f.bathrooms = parse_count(params, "bathrooms")?;
        f.parking_spots = parse_count(params, "parking_spots")?;

        f.search = non_blank(params, "search").map(|s| s.to_string());
        f.only_favorites = non_blank(params, "favorites").is_some();

        Ok(f)
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }

    /// Query string for links that must carry the current filters
    /// (pagination, favorite-toggle redirects). Always starts with `page=`.
    pub fn to_query_string(&self, page: u32) -> String {
        let mut out = format!("page={page}");

        let mut push = |key: &str, value: String| {
            out.push('&');
            out.push_str(key);
            out.push('=');
            out.push_str(&value);
        };

        if let Some(t) = self.auction_type {
            push("type", t.as_str().to_string());
        }
        if let Some(s) = self.status {
            push("status", s.as_str().to_string());
        }
        if let Some(p) = self.min_price {
            push("min_price", trim_decimal(p));
        }
        if let Some(p) = self.max_price {
            push("max_price", trim_decimal(p));
        }
        if let Some(a) = self.min_area {
            push("min_area", trim_decimal(a));
        }
        if let Some(a) = self.max_area {
            push("max_area", trim_decimal(a));
        }
        if let Some(n) = self.bedrooms {
            push("bedrooms", n.to_string());
        }
        if let Some(n) = self.bathrooms {
            push("bathrooms", n.to_string());
        }
        if let Some(n) = self.parking_spots {
            push("parking_spots", n.to_string());
        }
        if let Some(q) = &self.search {
            push("search", urlencode(q));
        }
        if self.only_favorites {
            push("favorites", "1".to_string());
        }

        out
    }
}

fn non_blank<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// The store rejects malformed numeric predicates, so a bad number is a
/// query failure rather than a routing error.
fn parse_decimal(params: &HashMap<String, String>, key: &str) -> Result<Option<f64>, ServerError> {
    let Some(raw) = non_blank(params, key) else {
        return Ok(None);
    };
    let n: f64 = raw
        .parse()
        .map_err(|_| ServerError::QueryFailed(format!("{key} is not a number: {raw}")))?;
    if n < 0.0 || !n.is_finite() {
        return Err(ServerError::QueryFailed(format!(
            "{key} must be a non-negative number"
        )));
    }
    Ok(Some(n))
}

fn parse_count(params: &HashMap<String, String>, key: &str) -> Result<Option<i64>, ServerError> {
    let Some(raw) = non_blank(params, key) else {
        return Ok(None);
    };
    let n: i64 = raw
        .parse()
        .map_err(|_| ServerError::QueryFailed(format!("{key} is not an integer: {raw}")))?;
    if n < 0 {
        return Err(ServerError::QueryFailed(format!(
            "{key} must be non-negative"
        )));
    }
    Ok(Some(n))
}

fn trim_decimal(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Minimal percent-encoding for query values.
pub fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
