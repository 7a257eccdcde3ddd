use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, SessionConfig};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::routes;
use crate::state::AppState;

/// Build the router over an already-migrated database.
pub fn build_app(db: DatabaseConnection, session: SessionConfig) -> anyhow::Result<Router> {
    let state = AppState::new(db, session)?;
    Ok(routes::build_router(state))
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// `server.data_dir` plus the directory of the SQLite file when the url points elsewhere.
fn storage_dirs(cfg: &AppConfig) -> Vec<String> {
    let mut dirs = vec![cfg.server.data_dir.clone()];
    if let Some(dir) = cfg.database.sqlite_dir() {
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: prepare storage, migrate, and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    for dir in storage_dirs(&cfg) {
        common::env::ensure_data_dir(&dir).await?;
    }

    let db = models::db::connect_with_config(&cfg.database).await?;
    Migrator::up(&db, None).await?;
    info!("database schema up to date");

    let app = build_app(db, cfg.session.clone())?;

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
