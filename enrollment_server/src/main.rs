//! Enrollment server: reads config from the environment (and `.env`), prepares the SQLite
//! database, and serves the API.
//!
//! Run from repo root: `cargo run -p enrollment-server`

use enrollment_api::{
    app, apply_migrations, connect, ensure_database_exists, load_from_env, AppState, TodoStore,
};
use tokio::net::TcpListener;

const DEFAULT_LOG_FILTER: &str = "enrollment_api=info,enrollment_server=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = connect(&config).await?;
    apply_migrations(&pool).await?;

    let todos = if config.seed_todos {
        TodoStore::seeded()
    } else {
        TodoStore::new()
    };
    let state = AppState::new(pool, todos);
    let router = app(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(prefix = %config.api_prefix, "listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
