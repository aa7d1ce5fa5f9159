//! Router assembly.

mod common;
mod movie;

pub use common::common_routes_with_ready;
pub use movie::movie_routes;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: common routes at the root, movie routes under `config.api_prefix`.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let movies = movie_routes(state.clone());
    let api = if config.api_prefix.is_empty() {
        movies
    } else {
        Router::new().nest(&config.api_prefix, movies)
    };

    Router::new()
        .merge(common_routes_with_ready(state))
        .merge(api)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
