pub mod auction;
pub mod filters;
pub mod paging;

pub use auction::{Auction, AuctionStatus, AuctionType};
pub use filters::FilterState;
pub use paging::{Page, PAGE_SIZE};
