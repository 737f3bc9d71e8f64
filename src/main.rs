//! Server: reads settings, prepares the database, mounts every route and serves until Ctrl-C.

use sandwich_api::{app, apply_migrations, ensure_database_exists, AppState, PgStore, Settings, ALL_TABLES};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sandwich_api=info,tower_http=info")),
        )
        .init();

    if settings.create_database {
        ensure_database_exists(&settings.database_url).await?;
    }
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    apply_migrations(&pool, ALL_TABLES).await?;

    let state = AppState::new(PgStore::new(pool));
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
}
