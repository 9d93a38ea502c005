use crate::error::{Result as ServerErrorResult, ServerError};

use dash_config::LogLevel;

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Crates whose per-connection chatter drowns the dashboard's own lines.
const QUIET_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest"];

/// Install the global fern logger.
///
/// `log_file` = None writes to stdout (colored when `colored` is set);
/// Some writes plain lines with source locations to that file.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter: LevelFilter = log_level.into();

    let output = match log_file {
        Some(ref path) => file_output(path)?,
        None => stdout_output(colored),
    };

    QUIET_TARGETS
        .iter()
        .fold(Dispatch::new().level(level_filter), |dispatch, target| {
            dispatch.level_for(*target, LevelFilter::Warn)
        })
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!("Logging at {level_filter} to {}", path.display()),
        None => info!("Logging at {level_filter} to stdout"),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn file_output(path: &Path) -> ServerErrorResult<Dispatch> {
    let file = fern::log_file(path).map_err(|e| ServerError::Logger {
        message: format!("Failed to open log file {}: {}", path.display(), e),
    })?;

    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                humantime::format_rfc3339(SystemTime::now()),
                record.level(),
                message,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        })
        .chain(file))
}

fn stdout_output(colored: bool) -> Dispatch {
    let colors = colored.then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    Dispatch::new()
        .format(move |out, message, record| {
            let timestamp = humantime::format_rfc3339_seconds(SystemTime::now());
            match colors {
                Some(ref colors) => out.finish(format_args!(
                    "[{timestamp} - {}] {message} [{}]",
                    colors.color(record.level()),
                    record.target(),
                )),
                // systemd / container logs
                None => out.finish(format_args!(
                    "[{timestamp} - {}] {message} [{}]",
                    record.level(),
                    record.target(),
                )),
            }
        })
        .chain(std::io::stdout())
}
