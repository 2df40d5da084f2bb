use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the global logger.
///
/// With a log4rs config file, log4rs owns the `log` facade (file appenders,
/// rotation). Without one, records go to stdout through tracing-subscriber,
/// filtered by `RUST_LOG` (default `info`).
pub fn init_logging(log4rs_config: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = log4rs_config {
        log4rs::init_file(path, Default::default())
            .map_err(|e| anyhow::anyhow!("failed to load log4rs config {}: {}", path.display(), e))?;
        log::info!("logging configured from {}", path.display());
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;
    Ok(())
}
