mod auctions_tests;
mod auth_tests;
mod dashboard_tests;
