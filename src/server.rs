//! HTTP server

use recipebook::{AppState, Config};

/// Start the web server and block until a shutdown signal arrives
pub async fn serve(config: &Config, host: &str, port: u16) -> anyhow::Result<()> {
    tracing::info!("Initializing database pool...");

    let pool = recipebook::db::create_pool(&config.database).await?;
    let state = AppState::new(config.server.environment.clone(), pool.clone());
    let app = recipebook::router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(
        environment = %config.server.environment,
        "Server listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Closing database pool...");
    pool.close().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Starting graceful shutdown...");
}
