use anyhow::Context as _;
use sea_orm_migration::MigratorTrait;
use tracing::{info, warn};

use boxops_api::config::ApiConfig;
use boxops_api::router::build_router;
use boxops_api::state::AppState;
use boxops_api_migration::Migrator;
use boxops_core::gateway::SeaGateway;
use boxops_core::shutdown::shutdown_signal;
use boxops_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info,sqlx=warn");

    let config = ApiConfig::from_env()?;

    let gateway = SeaGateway::connect(&config.database_url, config.db_max_connections)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(gateway.connection(), None)
            .await
            .context("failed to apply migrations")?;
        info!("migrations applied");
    }

    let router = build_router(AppState::new(gateway.clone()));
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("api listening on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    let closed = gateway
        .close()
        .await
        .context("failed to close database pool")?;
    if !closed {
        warn!("database pool still shared at shutdown; it closes on drop");
    }
    info!("shutdown complete");
    Ok(())
}
