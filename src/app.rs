/*
 * Responsibility
 * - Config -> tracing -> factory -> run (with Ctrl-C / SIGTERM shutdown)
 * - Both failure paths are logged before they end the process
 */
use anyhow::{Context, Result};

use crate::config::Config;
use crate::{factory, telemetry};

pub async fn run() -> Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    telemetry::init_tracing(config.mode);
    telemetry::init_panic_hook();

    tracing::info!(
        "starting health-service in {:?} mode on {}",
        config.mode,
        config.addr
    );

    let app = factory::build_application_with(&config)
        .inspect_err(|err| tracing::error!(error = %err, "failed to build application"))
        .context("failed to build application")?;

    app.run_until(shutdown_signal())
        .await
        .inspect_err(|err| tracing::error!(error = %err, "failed to run application"))
        .context("failed to run application")?;

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install SIGTERM handler");
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

    tracing::info!("shutdown signal received");
}
