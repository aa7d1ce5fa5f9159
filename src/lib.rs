//! Movie API: CRUD REST backend for the `appmovies` table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StorageKind};
pub use error::{AppError, ConfigError};
pub use model::Movie;
pub use repository::{MemoryMovieRepository, MovieRepository, PgMovieRepository};
pub use routes::{app, common_routes_with_ready, movie_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_movies_table};
