use astra::Response;
// errors.rs
use std::fmt;

/// Errors originating from either the server logic
/// (routing, sessions, bad input) or the listing store.
///
/// `QueryFailed` covers the read path (listing queries), `UpdateFailed`
/// the write path (favorite toggle). Both are terminal for the request
/// that triggered them; nothing retries automatically.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Unauthorized(String),
    QueryFailed(String),
    UpdateFailed(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            ServerError::QueryFailed(msg) => write!(f, "Listing query failed: {msg}"),
            ServerError::UpdateFailed(msg) => write!(f, "Listing update failed: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
