//! Database bootstrap: create the database and the `appmovies` table if missing.

use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Table holding movie records.
pub const MOVIES_TABLE: &str = "appmovies";

/// Create `appmovies` if it does not exist. Idempotent; existing rows are untouched.
pub async fn ensure_movies_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            title TEXT,
            genre TEXT,
            production_year INTEGER NOT NULL DEFAULT 0,
            plot TEXT,
            director TEXT
        )
        "#,
        MOVIES_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table = MOVIES_TABLE, "movies table ready");
    Ok(())
}

/// Connect to the `postgres` maintenance database and create the target database
/// named in `database_url` when it is missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "database created");
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let invalid = || sqlx::Error::Configuration("DATABASE_URL: no database path".into());
    let scheme_end = url.find("://").ok_or_else(invalid)? + 3;
    let path_start = url[scheme_end..].find('/').ok_or_else(invalid)? + scheme_end + 1;
    let path_and_query = &url[path_start..];
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, query)) => (name.trim(), Some(query)),
        None => (path_and_query.trim(), None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(query) = query {
        admin_url.push('?');
        admin_url.push_str(query);
    }
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
