//! JSON mirror of the browse query, for clients that render their own UI.

use serde::Serialize;

use crate::db::Database;
use crate::db::auctions;
use crate::domain::auction::Auction;
use crate::domain::filters::FilterState;
use crate::errors::ServerError;
use crate::responses::{json_response, ResultResp};

#[derive(Debug, Serialize)]
struct AuctionsApiResponse {
    items: Vec<Auction>,
    page: u32,
    total_pages: u32,
}

/// `GET /api/auctions` — same filter parameters as the browse page,
/// same windowing, serialized as `{ items, page, total_pages }`.
pub fn list_auctions(db: &Database, filters: &FilterState, page: u32) -> ResultResp {
    let result = db.with_conn(|conn| auctions::fetch_page(conn, filters, page))?;

    let body = AuctionsApiResponse {
        items: result.items,
        page: result.page,
        total_pages: result.total_pages,
    };

    let json = serde_json::to_string(&body).map_err(|_| ServerError::InternalError)?;
    json_response(json)
}
