use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use crate::domain::auction::{Auction, AuctionStatus, AuctionType};
use crate::domain::filters::FilterState;
use crate::domain::paging::{self, Page, PAGE_SIZE};
use crate::errors::ServerError;

const AUCTION_COLUMNS: &str = "
    id, title, description, type, status,
    starting_price, current_price,
    first_auction_date, second_auction_date, end_date,
    location, category, address, image_url,
    area, bedrooms, bathrooms, parking_spots,
    is_favorite, created_at
";

/// Translate a `FilterState` into a conjunctive WHERE clause.
/// Each present field contributes exactly one constraint; absent fields
/// contribute nothing.
fn build_predicate(filters: &FilterState) -> (String, Vec<Value>) {
    let mut clauses: Vec<&str> = Vec::new();
    let mut args: Vec<Value> = Vec::new();

    if let Some(t) = filters.auction_type {
        clauses.push("type = ?");
        args.push(Value::from(t.as_str().to_string()));
    }
    if let Some(s) = filters.status {
        clauses.push("status = ?");
        args.push(Value::from(s.as_str().to_string()));
    }
    if let Some(p) = filters.min_price {
        clauses.push("starting_price >= ?");
        args.push(Value::from(p));
    }
    if let Some(p) = filters.max_price {
        clauses.push("starting_price <= ?");
        args.push(Value::from(p));
    }
    if let Some(q) = &filters.search {
        clauses.push("lower(title) like ?");
        args.push(Value::from(format!("%{}%", q.to_lowercase())));
    }
    if let Some(a) = filters.min_area {
        clauses.push("area >= ?");
        args.push(Value::from(a));
    }
    if let Some(a) = filters.max_area {
        clauses.push("area <= ?");
        args.push(Value::from(a));
    }
    // "N or more" semantics; see FilterState docs.
    if let Some(n) = filters.bedrooms {
        clauses.push("bedrooms >= ?");
        args.push(Value::from(n));
    }
    if let Some(n) = filters.bathrooms {
        clauses.push("bathrooms >= ?");
        args.push(Value::from(n));
    }
    if let Some(n) = filters.parking_spots {
        clauses.push("parking_spots >= ?");
        args.push(Value::from(n));
    }
    if filters.only_favorites {
        clauses.push("is_favorite = 1");
    }

    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!("where {}", clauses.join(" and "))
    };

    (where_sql, args)
}

fn row_to_auction(row: &Row) -> rusqlite::Result<Auction> {
    let type_str: String = row.get(3)?;
    let auction_type = AuctionType::parse(&type_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            format!("unknown auction type: {type_str}").into(),
        )
    })?;

    let status_str: String = row.get(4)?;
    let status = AuctionStatus::parse(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            rusqlite::types::Type::Text,
            format!("unknown auction status: {status_str}").into(),
        )
    })?;

    Ok(Auction {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        auction_type,
        status,
        starting_price: row.get(5)?,
        current_price: row.get(6)?,
        first_auction_date: row.get(7)?,
        second_auction_date: row.get(8)?,
        end_date: row.get(9)?,
        location: row.get(10)?,
        category: row.get(11)?,
        address: row.get(12)?,
        image_url: row.get(13)?,
        area: row.get(14)?,
        bedrooms: row.get(15)?,
        bathrooms: row.get(16)?,
        parking_spots: row.get(17)?,
        is_favorite: row.get(18)?,
        created_at: row.get(19)?,
    })
}

/// Fetch one page of the filtered listing set, newest first, plus the
/// total page count for the same predicate. Pure read; no side effects.
pub fn fetch_page(
    conn: &Connection,
    filters: &FilterState,
    page: u32,
) -> Result<Page<Auction>, ServerError> {
    let page = page.max(1);
    let (where_sql, args) = build_predicate(filters);

    // Count under the same predicate, not just the windowed slice.
    let count_sql = format!("select count(*) from auctions {where_sql}");
    let total_count: i64 = conn
        .query_row(&count_sql, params_from_iter(args.iter()), |r| r.get(0))
        .map_err(|e| ServerError::QueryFailed(format!("count auctions failed: {e}")))?;

    let select_sql = format!(
        "select {AUCTION_COLUMNS} from auctions {where_sql}
         order by created_at desc
         limit ? offset ?"
    );

    let mut stmt = conn
        .prepare(&select_sql)
        .map_err(|e| ServerError::QueryFailed(format!("prepare listing query failed: {e}")))?;

    // Widen before multiplying; `page` is client-supplied and unbounded.
    let offset = (page as i64 - 1) * PAGE_SIZE as i64;
    let mut window_args = args;
    window_args.push(Value::from(PAGE_SIZE as i64));
    window_args.push(Value::from(offset));

    let rows = stmt
        .query_map(params_from_iter(window_args.iter()), row_to_auction)
        .map_err(|e| ServerError::QueryFailed(format!("listing query failed: {e}")))?;

    let mut items = Vec::new();
    for row in rows {
        items.push(row.map_err(|e| ServerError::QueryFailed(format!("listing row failed: {e}")))?);
    }

    Ok(Page {
        items,
        page,
        total_pages: paging::total_pages(total_count as u32),
    })
}

pub fn get_auction(conn: &Connection, id: i64) -> Result<Auction, ServerError> {
    let sql = format!("select {AUCTION_COLUMNS} from auctions where id = ?");

    conn.query_row(&sql, params![id], row_to_auction)
        .optional()
        .map_err(|e| ServerError::QueryFailed(format!("select auction failed: {e}")))?
        .ok_or(ServerError::NotFound)
}

/// Flip `is_favorite` for one listing and return the updated record.
/// No other column is touched.
pub fn toggle_favorite(conn: &Connection, id: i64) -> Result<Auction, ServerError> {
    let updated = conn
        .execute(
            "update auctions set is_favorite = not is_favorite where id = ?",
            params![id],
        )
        .map_err(|e| ServerError::UpdateFailed(format!("favorite update failed: {e}")))?;

    if updated != 1 {
        return Err(ServerError::UpdateFailed(format!("no auction with id {id}")));
    }

    get_auction(conn, id)
}

#[derive(Debug)]
pub struct DashboardStats {
    pub total_auctions: i64,
    pub active_auctions: i64,
    pub favorite_auctions: i64,
}

pub fn dashboard_stats(conn: &Connection) -> Result<DashboardStats, ServerError> {
    conn.query_row(
        r#"
        select
          count(*),
          count(*) filter (where status = 'active'),
          count(*) filter (where is_favorite = 1)
        from auctions
        "#,
        [],
        |r| {
            Ok(DashboardStats {
                total_auctions: r.get(0)?,
                active_auctions: r.get(1)?,
                favorite_auctions: r.get(2)?,
            })
        },
    )
    .map_err(|e| ServerError::QueryFailed(format!("stats query failed: {e}")))
}

/// Newest listings for the dashboard strip.
pub fn recent_auctions(conn: &Connection, limit: u32) -> Result<Vec<Auction>, ServerError> {
    let sql = format!(
        "select {AUCTION_COLUMNS} from auctions order by created_at desc limit ?"
    );

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ServerError::QueryFailed(format!("prepare recent query failed: {e}")))?;

    let rows = stmt
        .query_map(params![limit], row_to_auction)
        .map_err(|e| ServerError::QueryFailed(format!("recent query failed: {e}")))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| ServerError::QueryFailed(format!("recent row failed: {e}")))?);
    }
    Ok(out)
}
