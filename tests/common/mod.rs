#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use movie_api::{app, AppError, AppState, MemoryMovieRepository, Movie, MovieRepository, ServerConfig, StorageKind};
use tower::ServiceExt;

/// Repository whose every call fails the way an exhausted pool does.
pub struct UnavailableRepository;

fn unavailable() -> AppError {
    AppError::Db(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl MovieRepository for UnavailableRepository {
    async fn list_all(&self) -> Result<Vec<Movie>, AppError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Movie>, AppError> {
        Err(unavailable())
    }

    async fn insert(&self, _movie: &Movie) -> Result<i64, AppError> {
        Err(unavailable())
    }

    async fn update(&self, _movie: &Movie) -> Result<(), AppError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: i64) -> Result<(), AppError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        storage: StorageKind::Memory,
        ..ServerConfig::default()
    }
}

/// Router over a fresh in-memory repository, with the same layers `main` installs.
pub fn build_test_app() -> Router {
    app(AppState::new(MemoryMovieRepository::new()), &test_config())
}

/// Router whose storage is down.
pub fn build_unavailable_app() -> Router {
    app(AppState::new(UnavailableRepository), &test_config())
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(app: &Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a movie and return the id it was stored under (the create response carries no id).
pub async fn create_movie(app: &Router, body: serde_json::Value) -> i64 {
    let before: Vec<i64> = ids(app).await;
    let response = post_json(app, "/movies", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    ids(app)
        .await
        .into_iter()
        .find(|id| !before.contains(id))
        .expect("created movie should be listed")
}

pub async fn ids(app: &Router) -> Vec<i64> {
    body_json(get(app, "/movies").await)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect()
}
