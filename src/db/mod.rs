pub mod auctions;
pub mod connection;
pub mod users;

pub use connection::{init_db, Database};
