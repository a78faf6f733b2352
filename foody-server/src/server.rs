//! Server bootstrap and graceful shutdown

use std::sync::Arc;

use crate::api::build_app;
use crate::config::Config;
use crate::db::PgGateway;
use crate::state::AppState;
use crate::BoxError;

pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Connect the pool, bind the listener and serve until Ctrl+C / SIGTERM
    pub async fn run(&self) -> Result<(), BoxError> {
        let gateway =
            PgGateway::connect(&self.config.database_url, self.config.db_max_connections).await?;
        tracing::info!(
            max_connections = self.config.db_max_connections,
            "Database pool ready"
        );

        let app = build_app(AppState::new(Arc::new(gateway)));

        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("foody-server HTTP listening on {addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
