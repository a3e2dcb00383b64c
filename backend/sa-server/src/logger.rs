use crate::{ServerError, ServerErrorResult};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Crates whose debug output drowns ours
const NOISY_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest", "tungstenite"];

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
#[track_caller]
pub fn initialize(
    log_level: sa_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let base_dispatch = NOISY_TARGETS
        .iter()
        .fold(Dispatch::new().level(level_filter), |dispatch, target| {
            dispatch.level_for(*target, level_filter.min(LevelFilter::Info))
        });

    let output = match log_file {
        Some(ref path) => file_output(path)?,
        None if colored => stdout_output(Some(level_colors())),
        None => stdout_output(None),
    };

    base_dispatch
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    // Bridge tracing events into log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// Plain lines appended to `path`, creating its directory if needed
fn file_output(path: &Path) -> ServerErrorResult<Dispatch> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ServerError::LogDir {
            path: dir.display().to_string(),
            source: e,
        })?;
    }

    let file = fern::log_file(path).map_err(|e| ServerError::Logger {
        message: format!("Failed to open log file {}: {}", path.display(), e),
    })?;

    Ok(Dispatch::new()
        .format(|out, message, record| write_line(out, message, record, None))
        .chain(file))
}

fn stdout_output(colors: Option<ColoredLevelConfig>) -> Dispatch {
    Dispatch::new()
        .format(move |out, message, record| write_line(out, message, record, colors.as_ref()))
        .chain(std::io::stdout())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// `[<rfc3339> - LEVEL] message [file:line]`
fn write_line(
    out: FormatCallback<'_>,
    message: &fmt::Arguments<'_>,
    record: &Record<'_>,
    colors: Option<&ColoredLevelConfig>,
) {
    let date = humantime::format_rfc3339(SystemTime::now());
    let file = record.file().unwrap_or("unknown");
    let line = record.line().unwrap_or(0);

    match colors {
        Some(colors) => out.finish(format_args!(
            "[{} - {}] {} [{}:{}]",
            date,
            colors.color(record.level()),
            message,
            file,
            line
        )),
        None => out.finish(format_args!(
            "[{} - {}] {} [{}:{}]",
            date,
            record.level(),
            message,
            file,
            line
        )),
    }
}
