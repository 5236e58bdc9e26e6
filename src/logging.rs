use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Send all tracing output to a single append-only file in `data_dir`.
///
/// `RUST_LOG` takes precedence over the configured level. Keep the returned
/// guard alive until exit so buffered lines are flushed.
pub fn init(data_dir: &Path, settings: &LogSettings) -> WorkerGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()));

    let file_appender = tracing_appender::rolling::never(data_dir, &settings.file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(false)
        .with_filter(env_filter);

    // A second init (tests driving the library in-process) is not fatal.
    let _ = tracing_subscriber::registry().with(file_layer).try_init();

    guard
}
