// src/logging.rs

//! Log output configuration.
//!
//! Every line carries a timestamp, the level, and the call site, and is
//! written both to stdout and to the log file. File rotation is left to
//! the deployment (logrotate); the bot only appends.

use crate::error::{AppError, Result};

/// Default log file next to the working directory.
pub const LOG_FILE: &str = "hwbot.log";

/// Initialize the global logger.
///
/// Must be called once at startup before any logging occurs.
pub fn init(log_path: &str) -> Result<()> {
    let file = fern::log_file(log_path)
        .map_err(|e| AppError::config(format!("cannot open log file {log_path}: {e}")))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] [{}:{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .level_for("hwbot", log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .chain(file)
        .apply()
        .map_err(|e| AppError::config(format!("logger already initialized: {e}")))?;

    Ok(())
}
