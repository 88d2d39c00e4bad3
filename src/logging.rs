use crate::config::AppConfig;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to open log file {file} in {dir}")]
    FileAppender {
        dir: String,
        file: String,
        #[source]
        source: InitError,
    },

    #[error("Failed to install tracing subscriber")]
    Subscriber(#[from] TryInitError),
}

fn file_appender(config: &AppConfig) -> Result<RollingFileAppender, LoggingError> {
    let rotation = match config.rotation.as_str() {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    };

    RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(&config.log_file)
        .build(&config.log_dir)
        .map_err(|source| LoggingError::FileAppender {
            dir: config.log_dir.clone(),
            file: config.log_file.clone(),
            source,
        })
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `log_level`. When file logging is on, the returned
/// guard owns the background writer and must outlive every log call;
/// drop it before `process::exit` so buffered lines are flushed.
pub fn init_logging(config: &AppConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if !config.log_to_file {
        let stdout_layer = fmt::layer().with_target(false).with_ansi(true);
        registry.with(stdout_layer).try_init()?;
        return Ok(None);
    }

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender(config)?);

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true) // Keep target in JSON for structured queries
            .with_writer(non_blocking)
            .with_ansi(false);
        let stdout_layer = fmt::layer().with_target(false).with_ansi(true);
        registry.with(file_layer).with(stdout_layer).try_init()?;
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        let stdout_layer = fmt::layer().with_target(false).with_ansi(true);
        registry.with(file_layer).with(stdout_layer).try_init()?;
    }

    Ok(Some(guard))
}
