//! Movie CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::Movie;
use crate::response::{self, Message};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state.movies.list_all().await?;
    Ok(Json(movies))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, AppError> {
    let movie = state.movies.find_by_id(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(movie))
}

/// Any `id` in the body is discarded; storage assigns one.
pub async fn create(
    State(state): State<AppState>,
    Json(mut movie): Json<Movie>,
) -> Result<Message, AppError> {
    movie.id = None;
    state.movies.insert(&movie).await?;
    Ok(response::created())
}

/// Full replacement of the five non-id fields; fields missing from the body are cleared.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(incoming): Json<Movie>,
) -> Result<Message, AppError> {
    let mut current = state.movies.find_by_id(id).await?.ok_or(AppError::NotFound)?;
    current.overwrite_from(incoming);
    state.movies.update(&current).await?;
    Ok(response::updated())
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Message, AppError> {
    if state.movies.find_by_id(id).await?.is_none() {
        return Err(AppError::NotFound);
    }
    state.movies.delete_by_id(id).await?;
    Ok(response::deleted())
}
