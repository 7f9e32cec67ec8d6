pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{auction_card, card, toast};
pub use layouts::desktop::desktop_layout;
