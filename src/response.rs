//! Fixed plain-text confirmations returned by the movie routes.

use axum::http::StatusCode;

pub const NOT_FOUND_MESSAGE: &str = "Movie not found";
pub const CREATED_MESSAGE: &str = "Movie added";
pub const UPDATED_MESSAGE: &str = "Movie updated successfully";
pub const DELETED_MESSAGE: &str = "Movie deleted successfully";

/// `&'static str` responds as `text/plain; charset=utf-8`.
pub type Message = (StatusCode, &'static str);

pub fn created() -> Message {
    (StatusCode::CREATED, CREATED_MESSAGE)
}

pub fn updated() -> Message {
    (StatusCode::OK, UPDATED_MESSAGE)
}

pub fn deleted() -> Message {
    (StatusCode::OK, DELETED_MESSAGE)
}
