use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::{Body, Request, Response};
use http::Method;
use rusqlite::params;

use crate::auth::sessions::create_session;
use crate::db::{init_db, users, Database};

/// Fresh file-backed test DB using the production schema. File-backed
/// because `Database` keeps one connection per thread per path.
pub fn make_db(tag: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "auction_board_{tag}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().to_string());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize test DB");
    db
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Create an account and an active session; returns the session token.
pub fn signed_in_user(db: &Database, email: &str, password: &str) -> String {
    db.with_conn(|conn| {
        let user_id = users::create_user(conn, email, password, now_unix())?;
        create_session(conn, user_id, now_unix())
    })
    .expect("failed to create signed-in user")
}

/// Insert a listing with fixed defaults; only what tests vary is exposed.
pub fn seed_auction(db: &Database, title: &str, status: &str, created_at: i64) -> i64 {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            insert into auctions (
              title, description, type, status,
              starting_price, current_price,
              first_auction_date, second_auction_date, end_date,
              location, category,
              area, bedrooms, bathrooms, parking_spots,
              is_favorite, created_at
            ) values (?, '', 'judicial', ?, 200000, 150000,
                      2000, 3000, 4000, '', '', 80, 2, 1, 1, 0, ?)
            "#,
            params![title, status, created_at],
        )
        .map_err(|e| crate::errors::ServerError::UpdateFailed(e.to_string()))?;
        Ok(conn.last_insert_rowid())
    })
    .expect("failed to seed auction")
}

pub fn get(path: &str, session: Option<&str>) -> Request {
    build_request(Method::GET, path, session, Body::empty())
}

pub fn post(path: &str, session: Option<&str>, body: &str) -> Request {
    build_request(Method::POST, path, session, Body::from(body.to_string()))
}

fn build_request(method: Method, path: &str, session: Option<&str>, body: Body) -> Request {
    let mut req = Request::new(body);
    *req.method_mut() = method;
    *req.uri_mut() = path.parse().unwrap();

    if let Some(token) = session {
        req.headers_mut()
            .insert("Cookie", format!("session={token}").parse().unwrap());
    }

    req
}

pub fn read_body(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
