// src/tests/router_tests/auth_tests.rs
use crate::db::users;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, make_db, now_unix, post, read_body, signed_in_user};

#[test]
fn login_sets_session_cookie_and_redirects() {
    let db = make_db("login_ok");
    db.with_conn(|conn| users::create_user(conn, "c@d.com", "pw123", now_unix()).map(|_| ()))
        .unwrap();

    let req = post("/login", None, "email=c@d.com&password=pw123");
    let resp = handle(req, &db).unwrap();

    assert_eq!(resp.status(), 302);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(loc, "/dashboard");

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
}

#[test]
fn wrong_password_rerenders_login_without_cookie() {
    let db = make_db("login_bad");
    db.with_conn(|conn| users::create_user(conn, "c@d.com", "right", now_unix()).map(|_| ()))
        .unwrap();

    let req = post("/login", None, "email=c@d.com&password=wrong");
    let mut resp = handle(req, &db).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(resp.headers().get("Set-Cookie").is_none());
    assert!(read_body(&mut resp).contains("Invalid email or password"));
}

#[test]
fn dashboard_redirects_to_login_without_session() {
    let db = make_db("guard");

    let resp = handle(get("/dashboard", None), &db).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers()
            .get("Location")
            .and_then(|v| v.to_str().ok())
            .unwrap_or(""),
        "/login"
    );

    // Same guard covers the JSON surface, but answers 401 instead.
    let res = handle(get("/api/auctions", None), &db);
    assert!(matches!(res, Err(ServerError::Unauthorized(_))));
}

#[test]
fn logout_revokes_the_session() {
    let db = make_db("logout");
    let token = signed_in_user(&db, "c@d.com", "pw");

    // Session works before logout.
    let resp = handle(get("/dashboard", Some(&token)), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let resp = handle(post("/logout", Some(&token), ""), &db).unwrap();
    assert_eq!(resp.status(), 302);

    // And is rejected after.
    let resp = handle(get("/dashboard", Some(&token)), &db).unwrap();
    assert_eq!(resp.status(), 302);
}

#[test]
fn unknown_route_is_not_found() {
    let db = make_db("notfound");
    let res = handle(get("/nope", None), &db);
    assert!(matches!(res, Err(ServerError::NotFound)));
}
