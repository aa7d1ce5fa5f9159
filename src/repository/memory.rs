//! In-process repository. Each operation holds the lock for its whole duration,
//! which gives it the same all-or-nothing shape as a database transaction.

use super::MovieRepository;
use crate::error::AppError;
use crate::model::Movie;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Movie>,
    /// Last id handed out; ids are never reused, even after a delete.
    last_id: i64,
}

#[derive(Default)]
pub struct MemoryMovieRepository {
    table: RwLock<Table>,
}

impl MemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieRepository for MemoryMovieRepository {
    async fn list_all(&self) -> Result<Vec<Movie>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, movie: &Movie) -> Result<i64, AppError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        let mut stored = movie.clone();
        stored.id = Some(id);
        table.rows.insert(id, stored);
        tracing::info!(id, "movie inserted");
        Ok(id)
    }

    async fn update(&self, movie: &Movie) -> Result<(), AppError> {
        let Some(id) = movie.id else {
            return Ok(());
        };
        let mut table = self.table.write().await;
        if let Some(stored) = table.rows.get_mut(&id) {
            stored.overwrite_from(movie.clone());
            tracing::info!(id, "movie updated");
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let mut table = self.table.write().await;
        if table.rows.remove(&id).is_some() {
            tracing::info!(id, "movie deleted");
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
