//! Tracing subscriber setup for the CLI

use std::path::Path;

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::config::{LOG_ENV_VAR, LOG_FILE_NAME, LogConfig, data_dir, log_path};

/// Install the global subscriber.
///
/// `VERMOUTH_LOG` takes precedence over the configured level. When logging to
/// a file, the returned guard must be held until exit so buffered lines are
/// flushed.
pub fn init(config: &LogConfig) -> std::io::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (subscriber, guard) = build_subscriber(config, filter, &data_dir())?;
    subscriber.init();

    if config.to_file {
        tracing::info!("Logging to {:?}", log_path());
    }

    Ok(guard)
}

/// Build the subscriber without installing it. File output goes to
/// `LOG_FILE_NAME` inside `log_dir`, which is created if missing.
fn build_subscriber(
    config: &LogConfig,
    filter: EnvFilter,
    log_dir: &Path,
) -> std::io::Result<(impl Subscriber + Send + Sync + 'static, Option<WorkerGuard>)> {
    let (writer, guard) = if config.to_file {
        std::fs::create_dir_all(log_dir)?;
        let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (BoxMakeWriter::new(writer), Some(guard))
    } else {
        (BoxMakeWriter::new(std::io::stderr), None)
    };

    let layer: Box<dyn Layer<Registry> + Send + Sync> = if config.json {
        fmt::layer().json().with_writer(writer).boxed()
    } else {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(!config.to_file)
            .boxed()
    };

    Ok((tracing_subscriber::registry().with(layer).with(filter), guard))
}
