pub mod password;
pub mod sessions;
