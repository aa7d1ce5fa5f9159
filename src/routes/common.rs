//! Common routes: health, readiness, version.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

/// Liveness only; says nothing about storage.
#[derive(Serialize)]
struct LivenessBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    storage: &'static str,
}

async fn health() -> Json<LivenessBody> {
    Json(LivenessBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if let Err(e) = state.movies.ping().await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                storage: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        storage: "ok",
    }))
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

/// Crate name and version baked in at compile time.
async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready (storage round-trip), GET /version.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
