pub mod auction_detail;
pub mod auctions;
pub mod dashboard;
pub mod home;
pub mod login;

pub use auction_detail::auction_detail_page;
pub use auctions::{auctions_page, AuctionsVm};
pub use dashboard::{dashboard_page, DashboardVm};
pub use home::home_page;
pub use login::login_page;
