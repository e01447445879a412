//! Console and file logging.
//!
//! Both layers share the same filter: `RUST_LOG` when set, `info` otherwise. The file
//! layer writes plain text to `LOG_FILE` through a non-blocking writer.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::Config;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// The returned guard flushes the file writer when dropped, so it must be held for the
/// lifetime of the program.
pub fn init_tracing(config: &Config) -> WorkerGuard {
    let log_path = Path::new(&config.log_file);
    let directory = log_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "bot.log".into());

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_filter(env_filter()),
        )
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .with_filter(env_filter()),
        );

    if subscriber.try_init().is_err() {
        tracing::debug!("Global tracing subscriber already set, keeping it");
    }

    tracing::info!(log_file = %log_path.display(), "Logging initialized");

    guard
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
