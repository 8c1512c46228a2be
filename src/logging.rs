use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::LoggingConfig;
use crate::error::LoggingError;

pub const LOG_FILE_PREFIX: &str = "connect-four.log";

/// Parse a configured level name.
pub fn parse_level(level: &str) -> Result<tracing::Level, LoggingError> {
    level
        .parse()
        .map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}

/// Install a global subscriber writing to a daily rolling file, keeping the terminal
/// free for the game. Log lines are flushed until the returned guard is dropped.
pub fn init(config: &LoggingConfig) -> Result<WorkerGuard, LoggingError> {
    let level = parse_level(&config.level)?;
    ensure_dir(&config.directory)?;

    let file_appender = tracing_appender::rolling::daily(&config.directory, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(guard)
}

fn ensure_dir(dir: &Path) -> Result<(), LoggingError> {
    std::fs::create_dir_all(dir).map_err(|e| LoggingError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })
}
