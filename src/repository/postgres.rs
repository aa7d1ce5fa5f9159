//! PostgreSQL-backed repository. Each method opens its own transaction; an early
//! return drops it, which rolls back.

use super::MovieRepository;
use crate::error::AppError;
use crate::model::Movie;
use crate::store::MOVIES_TABLE;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

const COLUMNS: &str = "id, title, genre, production_year, plot, director";

#[derive(Clone)]
pub struct PgMovieRepository {
    pool: PgPool,
}

impl PgMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn list_all(&self) -> Result<Vec<Movie>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM {MOVIES_TABLE} ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        let mut tx = self.pool.begin().await?;
        let rows = sqlx::query(&sql).fetch_all(&mut *tx).await?;
        tx.commit().await?;
        rows.iter()
            .map(movie_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM {MOVIES_TABLE} WHERE id = $1");
        tracing::debug!(sql = %sql, id, "query");
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(&sql).bind(id).fetch_optional(&mut *tx).await?;
        tx.commit().await?;
        Ok(row.as_ref().map(movie_from_row).transpose()?)
    }

    async fn insert(&self, movie: &Movie) -> Result<i64, AppError> {
        let sql = format!(
            "INSERT INTO {MOVIES_TABLE} (title, genre, production_year, plot, director) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id"
        );
        tracing::debug!(sql = %sql, "query");
        let mut tx = self.pool.begin().await?;
        let row = bind_fields(sqlx::query(&sql), movie)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        let id: i64 = row.try_get("id")?;
        tracing::info!(id, "movie inserted");
        Ok(id)
    }

    async fn update(&self, movie: &Movie) -> Result<(), AppError> {
        let Some(id) = movie.id else {
            return Ok(());
        };
        let sql = format!(
            "UPDATE {MOVIES_TABLE} SET title = $1, genre = $2, production_year = $3, \
             plot = $4, director = $5 WHERE id = $6"
        );
        tracing::debug!(sql = %sql, id, "query");
        let mut tx = self.pool.begin().await?;
        let result = bind_fields(sqlx::query(&sql), movie)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(id, rows = result.rows_affected(), "movie updated");
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let lookup = format!("SELECT id FROM {MOVIES_TABLE} WHERE id = $1 FOR UPDATE");
        let delete = format!("DELETE FROM {MOVIES_TABLE} WHERE id = $1");
        tracing::debug!(sql = %delete, id, "query");
        let mut tx = self.pool.begin().await?;
        let existing: Option<(i64,)> = sqlx::query_as(&lookup)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_some() {
            sqlx::query(&delete).bind(id).execute(&mut *tx).await?;
            tracing::info!(id, "movie deleted");
        }
        tx.commit().await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

type PgQuery<'q> = sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>;

/// Bind the five non-id fields in column order (title, genre, production_year, plot, director).
fn bind_fields<'q>(query: PgQuery<'q>, movie: &'q Movie) -> PgQuery<'q> {
    query
        .bind(movie.title.as_deref())
        .bind(movie.genre.as_deref())
        .bind(movie.production_year)
        .bind(movie.plot.as_deref())
        .bind(movie.director.as_deref())
}

fn movie_from_row(row: &PgRow) -> Result<Movie, sqlx::Error> {
    Ok(Movie {
        id: Some(row.try_get("id")?),
        title: row.try_get("title")?,
        genre: row.try_get("genre")?,
        production_year: row.try_get("production_year")?,
        plot: row.try_get("plot")?,
        director: row.try_get("director")?,
    })
}
