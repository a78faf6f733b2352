//! Logging Infrastructure
//!
//! Console output (human-readable or JSON) plus optional daily rotating
//! JSON files, kept for 14 days.

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

/// Rotated application log files kept on disk
const MAX_LOG_FILES: usize = 14;

/// Initialize the global tracing subscriber
///
/// # Arguments
/// * `level` - Filter used when `RUST_LOG` is unset (e.g. "info", "foody_server=debug")
/// * `json_format` - JSON console output (production) instead of plain text
/// * `log_dir` - Optional directory for daily rotating log files
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// foody_server::logger::init_logger("debug", false, None)?;
///
/// // Production setup (console + file)
/// foody_server::logger::init_logger("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if json_format {
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .boxed(),
        );
    } else {
        layers.push(fmt::layer().with_target(true).boxed());
    }

    if let Some(dir) = log_dir {
        let dir = Path::new(dir);
        fs::create_dir_all(dir)?;

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("app")
            .filename_suffix("log")
            .max_log_files(MAX_LOG_FILES)
            .build(dir)?;

        layers.push(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(true)
                .with_writer(appender)
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()?;

    tracing::debug!(level, json_format, log_dir = ?log_dir, "Logger initialized");
    Ok(())
}
