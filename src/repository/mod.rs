//! Movie persistence: one transaction per operation.

mod memory;
mod postgres;

pub use memory::MemoryMovieRepository;
pub use postgres::PgMovieRepository;

use crate::error::AppError;
use crate::model::Movie;
use async_trait::async_trait;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Every stored movie. Order is not part of the contract.
    async fn list_all(&self) -> Result<Vec<Movie>, AppError>;

    /// Point lookup; `None` when no row has this id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, AppError>;

    /// Persist a new movie under a freshly generated id and return that id.
    /// `movie.id` is ignored.
    async fn insert(&self, movie: &Movie) -> Result<i64, AppError>;

    /// Overwrite all non-id fields of the row with `movie.id`.
    /// No-op when the id is missing or matches nothing.
    async fn update(&self, movie: &Movie) -> Result<(), AppError>;

    /// Remove the movie if present; absent ids are not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Storage round-trip for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}
