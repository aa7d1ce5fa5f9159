//! Shared application state for all routes.

use crate::repository::MovieRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; every request borrows the same handle.
    pub movies: Arc<dyn MovieRepository>,
}

impl AppState {
    pub fn new<R: MovieRepository + 'static>(movies: R) -> Self {
        Self {
            movies: Arc::new(movies),
        }
    }
}
