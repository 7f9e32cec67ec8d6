use std::collections::HashMap;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

use astra::Request;
use maud::html;

use crate::api;
use crate::auth::sessions::{self, SESSION_COOKIE};
use crate::db::{auctions, users, Database};
use crate::domain::filters::FilterState;
use crate::errors::ServerError;
use crate::responses::{html_response, redirect, ResultResp};
use crate::templates;
use crate::templates::components::{auction_card, toast};
use crate::templates::pages::{AuctionsVm, DashboardVm};

pub fn handle(mut req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("GET", "/login") => get_login(&req, db),
        ("POST", "/login") => post_login(&mut req, db),
        ("POST", "/logout") => post_logout(&req, db),

        ("GET", _) if path.starts_with("/static/") => serve_static(&path),

        // Everything under /dashboard and /api requires an active session.
        // The guard runs once here; handlers below it never re-check.
        _ if path.starts_with("/dashboard") || path.starts_with("/api") => {
            let Some(user) = current_user(db, &req)? else {
                // Browsers get the login page; API clients get a plain 401.
                if path.starts_with("/api") {
                    return Err(ServerError::Unauthorized("sign in required".into()));
                }
                return redirect("/login", None);
            };
            dispatch_signed_in(&req, db, &user, &method, &path)
        }

        _ => Err(ServerError::NotFound),
    }
}

struct SessionUser {
    #[allow(dead_code)]
    user_id: i64,
    email: String,
}

fn dispatch_signed_in(
    req: &Request,
    db: &Database,
    user: &SessionUser,
    method: &str,
    path: &str,
) -> ResultResp {
    match (method, path) {
        ("GET", "/dashboard") => get_dashboard(db, user),
        ("GET", "/dashboard/auctions") => get_auctions(req, db, user),
        ("GET", "/api/auctions") => {
            let params = parse_query(req);
            let filters = FilterState::from_query(&params)?;
            api::list_auctions(db, &filters, page_param(&params)?)
        }
        ("POST", _) => match parse_favorite_path(path) {
            Some(id) => post_toggle_favorite(req, db, id),
            None => Err(ServerError::NotFound),
        },
        ("GET", _) => match path.strip_prefix("/dashboard/auctions/") {
            Some(rest) => {
                let id: i64 = rest
                    .parse()
                    .map_err(|_| ServerError::BadRequest(format!("bad auction id: {rest}")))?;
                get_auction_detail(db, user, id)
            }
            None => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

// ---- auth routes ----

fn get_login(req: &Request, db: &Database) -> ResultResp {
    if current_user(db, req)?.is_some() {
        return redirect("/dashboard", None);
    }
    html_response(templates::pages::login_page(None))
}

fn post_login(req: &mut Request, db: &Database) -> ResultResp {
    let form = parse_form_body(req)?;
    let email = form
        .get("email")
        .ok_or_else(|| ServerError::BadRequest("missing email".into()))?;
    let password = form
        .get("password")
        .ok_or_else(|| ServerError::BadRequest("missing password".into()))?;

    let now = now_unix();
    let user_id = db.with_conn(|conn| users::verify_credentials(conn, email, password, now))?;

    let Some(user_id) = user_id else {
        // Same message for unknown email and wrong password.
        return html_response(templates::pages::login_page(Some(
            "Invalid email or password",
        )));
    };

    let token = db.with_conn(|conn| sessions::create_session(conn, user_id, now))?;
    let cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age=604800"
    );
    redirect("/dashboard", Some(&cookie))
}

fn post_logout(req: &Request, db: &Database) -> ResultResp {
    if let Some(token) = session_token(req) {
        db.with_conn(|conn| sessions::revoke_session(conn, &token, now_unix()))?;
    }
    let clear = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0");
    redirect("/", Some(&clear))
}

// ---- dashboard routes ----

fn get_dashboard(db: &Database, user: &SessionUser) -> ResultResp {
    let (stats, total_users, recent) = db.with_conn(|conn| {
        Ok((
            auctions::dashboard_stats(conn)?,
            users::count_users(conn)?,
            auctions::recent_auctions(conn, 4)?,
        ))
    })?;

    let vm = DashboardVm {
        email: user.email.clone(),
        stats,
        total_users,
        recent,
    };
    html_response(templates::pages::dashboard_page(&vm))
}

fn get_auctions(req: &Request, db: &Database, user: &SessionUser) -> ResultResp {
    let params = parse_query(req);
    let filters = FilterState::from_query(&params)?;
    let page = page_param(&params)?;

    let result = db.with_conn(|conn| auctions::fetch_page(conn, &filters, page))?;

    let vm = AuctionsVm {
        email: user.email.clone(),
        filters,
        page: result,
    };
    html_response(templates::pages::auctions_page(&vm))
}

fn get_auction_detail(db: &Database, user: &SessionUser, id: i64) -> ResultResp {
    let auction = db.with_conn(|conn| auctions::get_auction(conn, id))?;
    html_response(templates::pages::auction_detail_page(&user.email, &auction))
}

/// htmx endpoint: flip the favorite flag and answer with the re-rendered
/// card plus an out-of-band toast. On failure nothing is swapped, so the
/// previous card stays on screen.
fn post_toggle_favorite(req: &Request, db: &Database, id: i64) -> ResultResp {
    let params = parse_query(req);
    let filters = FilterState::from_query(&params)?;
    let query = filters.to_query_string(page_param(&params)?);

    let auction = db.with_conn(|conn| auctions::toggle_favorite(conn, id))?;

    let message = if auction.is_favorite {
        "Added to favorites"
    } else {
        "Removed from favorites"
    };

    html_response(html! {
        (auction_card(&auction, &query))
        div id="toast-area" hx-swap-oob="true" {
            (toast(message, false))
        }
    })
}

// ---- static assets ----

fn serve_static(path: &str) -> ResultResp {
    let rel = path.trim_start_matches('/');
    if rel.contains("..") {
        return Err(ServerError::NotFound);
    }

    let bytes = std::fs::read(rel).map_err(|_| ServerError::NotFound)?;

    let content_type = match rel.rsplit('.').next() {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    };

    let resp = astra::ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .body(astra::Body::from(bytes))
        .map_err(|_| ServerError::InternalError)?;
    Ok(resp)
}

// ---- request plumbing ----

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// `/dashboard/auctions/{id}/favorite`
fn parse_favorite_path(path: &str) -> Option<i64> {
    let rest = path.strip_prefix("/dashboard/auctions/")?;
    let id = rest.strip_suffix("/favorite")?;
    id.parse().ok()
}

fn current_user(db: &Database, req: &Request) -> Result<Option<SessionUser>, ServerError> {
    let Some(token) = session_token(req) else {
        return Ok(None);
    };

    let row = db.with_conn(|conn| sessions::load_user_from_session(conn, &token, now_unix()))?;

    Ok(row.map(|(user_id, email)| SessionUser { user_id, email }))
}

fn session_token(req: &Request) -> Option<String> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;

    for part in header.split(';') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix(&format!("{SESSION_COOKIE}=")) {
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

fn page_param(params: &HashMap<String, String>) -> Result<u32, ServerError> {
    match params.get("page").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        None => Ok(1),
        Some(raw) => {
            let n: u32 = raw
                .parse()
                .map_err(|_| ServerError::BadRequest(format!("bad page number: {raw}")))?;
            Ok(n.max(1))
        }
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(parse_pairs)
        .unwrap_or_default()
}

fn parse_form_body(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .map_err(|_| ServerError::BadRequest("unreadable request body".into()))?;

    let body = String::from_utf8(bytes)
        .map_err(|_| ServerError::BadRequest("request body is not utf-8".into()))?;

    Ok(parse_pairs(&body))
}

fn parse_pairs(raw: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for pair in raw.split('&') {
        let mut parts = pair.splitn(2, '=');
        if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
            map.insert(urldecode(k), urldecode(v));
        }
    }

    map
}

/// Percent-decoding plus `+` for space; bad escapes pass through verbatim.
fn urldecode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 3 <= bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
                match hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}
