// src/tests/router_tests/dashboard_tests.rs
use crate::router::handle;
use crate::tests::utils::{get, make_db, read_body, seed_auction, signed_in_user};

#[test]
fn dashboard_shows_email_stats_and_recent_listings() {
    let db = make_db("dash");
    let email = "dash@example.com";
    let token = signed_in_user(&db, email, "pw");

    for i in 0..5 {
        seed_auction(
            &db,
            &format!("Listing {i}"),
            if i < 3 { "active" } else { "ended" },
            1_000 + i,
        );
    }

    let mut resp = handle(get("/dashboard", Some(&token)), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);
    assert!(body.contains(email), "dashboard should show who is signed in");
    assert!(body.contains("Total auctions"));
    assert!(body.contains("Active auctions"));

    // Recent strip is capped at 4, newest first.
    assert!(body.contains("Listing 4"));
    assert!(!body.contains("Listing 0"));
}
