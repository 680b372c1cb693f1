use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Bind the configured `host:port`; host names are resolved.
pub async fn bind(cfg: &AppConfig) -> Result<TcpListener, StartupError> {
    let addr = cfg.bind_addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

/// Open the connection pool and bring the schema up to date when configured to.
pub async fn open_database(cfg: &AppConfig) -> Result<DatabaseConnection, StartupError> {
    if cfg.database.is_sqlite() {
        common::env::ensure_database_dir(&cfg.database.url)
            .await
            .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    }
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!(service = "server", event = "migrated", "database schema up to date");
    } else {
        warn!(service = "server", event = "migrations_skipped", "auto_migrate disabled; expecting schema to exist");
    }
    Ok(db)
}

/// Completes on Ctrl+C; the server then stops accepting and drains in-flight requests.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only on process kill");
        std::future::pending::<()>().await;
    }
    info!(service = "server", event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Serve `app` on `listener` until `shutdown` completes.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Public entry: open the store, build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = open_database(&cfg).await?;

    let state = AppState::with_db(db.clone());
    let app = routes::app(state);

    let listener = match bind(&cfg).await {
        Ok(l) => l,
        Err(e) => {
            let _ = db.close().await;
            return Err(e.into());
        }
    };
    let addr = listener.local_addr()?;
    info!(service = "server", event = "listening", %addr, "employee api listening");

    let served = serve(listener, app, shutdown_signal()).await;

    // Pool lifetime ends with the server, on success and error alike.
    if let Err(e) = db.close().await {
        warn!(error = %e, "closing database pool failed");
    } else {
        info!(service = "server", event = "pool_closed", "database pool closed");
    }
    served
}
