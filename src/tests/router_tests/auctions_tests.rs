// src/tests/router_tests/auctions_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, make_db, post, read_body, seed_auction, signed_in_user};

#[test]
fn browse_page_applies_the_search_filter() {
    let db = make_db("browse_search");
    let token = signed_in_user(&db, "u@example.com", "pw");

    seed_auction(&db, "Casa na Praia", "active", 1_000);
    seed_auction(&db, "Downtown loft", "active", 1_001);

    let req = get("/dashboard/auctions?search=praia", Some(&token));
    let mut resp = handle(req, &db).unwrap();

    assert_eq!(resp.status(), 200);
    let body = read_body(&mut resp);
    assert!(body.contains("Casa na Praia"));
    assert!(!body.contains("Downtown loft"));
}

#[test]
fn browse_page_paginates_and_links_the_next_page() {
    let db = make_db("browse_pages");
    let token = signed_in_user(&db, "u@example.com", "pw");

    for i in 0..15 {
        seed_auction(&db, &format!("Listing {i}"), "active", 1_000 + i);
    }

    let mut resp = handle(get("/dashboard/auctions", Some(&token)), &db).unwrap();
    let body = read_body(&mut resp);

    // Newest first, 12 per page, second page reachable.
    assert!(body.contains("Listing 14"));
    assert!(!body.contains("Listing 0<"));
    assert!(body.contains("page=2"));
}

#[test]
fn huge_page_number_renders_an_empty_page() {
    let db = make_db("browse_hugepage");
    let token = signed_in_user(&db, "u@example.com", "pw");
    seed_auction(&db, "Casa na Praia", "active", 1_000);

    let req = get("/dashboard/auctions?page=4294967295", Some(&token));
    let mut resp = handle(req, &db).unwrap();

    assert_eq!(resp.status(), 200);
    let body = read_body(&mut resp);
    assert!(body.contains("No listings match"));
}

#[test]
fn card_shows_the_photo_or_a_placeholder() {
    let db = make_db("card_image");
    let token = signed_in_user(&db, "u@example.com", "pw");

    let with_photo = seed_auction(&db, "Penthouse", "active", 1_001);
    seed_auction(&db, "Old farm", "active", 1_000);
    db.with_conn(|conn| {
        conn.execute(
            "update auctions set image_url = 'https://img.example/1.jpg' where id = ?",
            rusqlite::params![with_photo],
        )
        .map_err(|e| crate::errors::ServerError::UpdateFailed(e.to_string()))
        .map(|_| ())
    })
    .unwrap();

    let mut resp = handle(get("/dashboard/auctions", Some(&token)), &db).unwrap();
    let body = read_body(&mut resp);

    assert!(body.contains("https://img.example/1.jpg"));
    assert!(body.contains("image-placeholder"));
}

#[test]
fn malformed_price_filter_is_a_query_failure() {
    let db = make_db("browse_badnum");
    let token = signed_in_user(&db, "u@example.com", "pw");

    let res = handle(get("/dashboard/auctions?min_price=abc", Some(&token)), &db);
    assert!(matches!(res, Err(ServerError::QueryFailed(_))));
}

#[test]
fn favorite_toggle_swaps_the_card_and_toasts() {
    let db = make_db("favorite");
    let token = signed_in_user(&db, "u@example.com", "pw");
    let id = seed_auction(&db, "Casa na Praia", "active", 1_000);

    let path = format!("/dashboard/auctions/{id}/favorite?page=1");
    let mut resp = handle(post(&path, Some(&token), ""), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);
    assert!(body.contains(&format!("auction-card-{id}")));
    assert!(body.contains("Added to favorites"));

    // Double-toggle restores the original state.
    let mut resp = handle(post(&path, Some(&token), ""), &db).unwrap();
    assert!(read_body(&mut resp).contains("Removed from favorites"));
}

#[test]
fn favorite_toggle_on_unknown_id_is_an_update_failure() {
    let db = make_db("favorite_missing");
    let token = signed_in_user(&db, "u@example.com", "pw");

    let res = handle(
        post("/dashboard/auctions/9999/favorite", Some(&token), ""),
        &db,
    );
    assert!(matches!(res, Err(ServerError::UpdateFailed(_))));
}

#[test]
fn detail_page_renders_and_missing_listing_is_not_found() {
    let db = make_db("detail");
    let token = signed_in_user(&db, "u@example.com", "pw");
    let id = seed_auction(&db, "Casa na Praia", "active", 1_000);

    let mut resp = handle(get(&format!("/dashboard/auctions/{id}"), Some(&token)), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(&mut resp).contains("Casa na Praia"));

    let res = handle(get("/dashboard/auctions/9999", Some(&token)), &db);
    assert!(matches!(res, Err(ServerError::NotFound)));
}

#[test]
fn api_lists_auctions_as_json() {
    let db = make_db("api");
    let token = signed_in_user(&db, "u@example.com", "pw");

    seed_auction(&db, "Casa na Praia", "active", 1_000);
    seed_auction(&db, "Old farm", "ended", 999);

    let mut resp = handle(get("/api/auctions?status=active", Some(&token)), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = serde_json::from_str(&read_body(&mut resp)).unwrap();
    assert_eq!(body["page"], 1);
    assert_eq!(body["total_pages"], 1);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Casa na Praia");
    assert_eq!(items[0]["status"], "active");
}
