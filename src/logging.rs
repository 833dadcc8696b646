//! Tracing subscriber setup for the command-line tool

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingConfig, log_path};

/// Install the global subscriber described by `config`
///
/// `RUST_LOG` takes precedence over the configured filter. The returned guard
/// flushes the log file on drop and must be kept alive for the program's lifetime.
pub fn init(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))?;

    if config.file {
        let (writer, guard) = file_writer(&log_path())?;
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false);
        if config.json {
            builder.json().try_init().map_err(anyhow::Error::msg)?;
        } else {
            builder.try_init().map_err(anyhow::Error::msg)?;
        }
        return Ok(Some(guard));
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.json {
        builder.json().try_init().map_err(anyhow::Error::msg)?;
    } else {
        builder.try_init().map_err(anyhow::Error::msg)?;
    }
    Ok(None)
}

fn file_writer(
    path: &Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(directory)?;

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Log path {:?} has no file name", path))?;
    let appender = tracing_appender::rolling::never(directory, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
