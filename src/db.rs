use std::str::FromStr;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::AppConfig;

/// Open the SQLite pool described by `config`, creating the file when missing.
pub async fn connect(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("parse DATABASE_URL {}", config.database_url))?
        .foreign_keys(true)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("connect to database")?;
    Ok(pool)
}

pub async fn migrate(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(db)
        .await
        .context("run migrations")?;
    Ok(())
}

/// In-memory database with the schema applied.
///
/// An in-memory SQLite database lives and dies with its connection, so the
/// pool is pinned to a single connection that is never recycled.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    migrate(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrations_create_all_tables() {
        let pool = test_pool().await;

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name NOT LIKE '_sqlx_%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
        for expected in [
            "ans_log",
            "body_composition",
            "daily_feel",
            "daily_log",
            "daily_targets",
            "food_items",
            "meal_items",
            "meals",
            "sleep_log",
            "supplement_intake",
            "supplements",
            "training_sessions",
            "user_settings",
            "users",
            "weight_log",
        ] {
            assert!(names.contains(&expected), "missing table {expected}");
        }
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let pool = test_pool().await;
        let res = sqlx::query("INSERT INTO meals (user_id, date, meal_type) VALUES (999, '2024-01-01', 'Lunch')")
            .execute(&pool)
            .await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn connect_creates_file_database() {
        let dir = std::env::temp_dir().join(format!("spyperf-db-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.db");
        let config = AppConfig {
            database_url: format!("sqlite://{}", path.display()),
            host: "127.0.0.1".into(),
            port: 0,
            max_connections: 2,
        };

        let pool = connect(&config).await.unwrap();
        migrate(&pool).await.unwrap();
        pool.close().await;

        assert!(path.exists());
        std::fs::remove_dir_all(&dir).ok();
    }
}
