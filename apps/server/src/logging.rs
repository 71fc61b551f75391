//! Logging and tracing setup

use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Initialize logging with tracing.
///
/// `RUST_LOG` takes precedence over the configured level. When a log file is
/// configured, lines are written there as well, without ANSI colors.
pub fn init(config: &AppConfig) -> color_eyre::eyre::Result<()> {
    let default_directives = if config.debug {
        "fyyur=debug,tower_http=debug"
    } else {
        "fyyur=info,tower_http=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .try_init()?;

    tracing::info!("Logging initialized");
    Ok(())
}
