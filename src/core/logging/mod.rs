//! Tracing subscriber setup (stdout plus optional daily rolling file)

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::config::LogConfig;
use crate::errors::ResolveError;

const LOG_FILE_PREFIX: &str = "esquery-core.log";

pub fn build_env_filter(level: &str) -> Result<EnvFilter, ResolveError> {
    EnvFilter::try_new(level)
        .map_err(|e| ResolveError::Config(format!("invalid log filter {level:?}: {e}")))
}

/// Install the global subscriber. Keep the returned guard alive so buffered
/// file output is flushed on shutdown.
pub fn init_tracing(config: &LogConfig) -> Result<Option<WorkerGuard>, ResolveError> {
    let filter = build_env_filter(&config.level)?;
    let stdout_layer = fmt::layer().with_target(true);
    let already_set = |e: tracing_subscriber::util::TryInitError| ResolveError::Config(e.to_string());

    let guard = match &config.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().with_ansi(false).with_writer(writer);

            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .with(file_layer)
                .try_init()
                .map_err(already_set)?;
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .try_init()
                .map_err(already_set)?;
            None
        }
    };

    info!(level = %config.level, dir = ?config.dir, "Logging initialized");
    Ok(guard)
}
