//! Movie API server: reads config from env, prepares storage, serves the movie routes.

use movie_api::{
    app, ensure_database_exists, ensure_movies_table, AppState, MemoryMovieRepository,
    PgMovieRepository, ServerConfig, StorageKind,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("movie_api=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let state = match config.storage {
        StorageKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_movies_table(&pool).await?;
            AppState::new(PgMovieRepository::new(pool))
        }
        StorageKind::Memory => {
            tracing::warn!("using in-memory storage; movies are lost on restart");
            AppState::new(MemoryMovieRepository::new())
        }
    };

    let app = app(state, &config);
    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
