mod app;
mod body_metrics;
mod config;
mod daily;
mod db;
mod debug;
mod error;
mod foods;
mod meals;
mod recovery;
mod response;
mod state;
mod supplements;
mod targets;
mod training;
mod users;
mod validation;

#[cfg(test)]
mod test_support;

use crate::{app::build_app, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "spyperf=debug,axum=info,tower_http=info,sqlx=warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init().await?;
    let addr = state.config.bind_addr();
    tracing::info!(database = %state.config.database_url, "database ready");

    app::serve(build_app(state), &addr).await
}
