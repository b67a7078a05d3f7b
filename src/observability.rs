use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Config;

/// Initialize tracing output.
///
/// `RUST_LOG` wins over the configured log level. Production writes JSON
/// lines, every other environment writes human-readable console output.
pub fn init_observability(
    service_name: &str,
    service_version: &str,
    config: &Config,
) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_filter(env_filter))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::info!(
        service.name = service_name,
        service.version = service_version,
        environment = %config.server.environment,
        "Observability initialized"
    );

    Ok(())
}
