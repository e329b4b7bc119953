#![deny(missing_docs)]
//! Shared logging utilities for the tag cloud workspace.
//!
//! This crate provides the `cloud_*` logging macros used across the codebase,
//! the logger setup used by the binary, and a minimal test initializer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

#[doc(hidden)]
pub use log;
pub use log::LevelFilter;

/// Default log file, relative to the current working directory.
pub const DEFAULT_LOG_FILE: &str = "./tagcloud.log";

/// Set once a logger that shows error records on the terminal is installed.
static TERMINAL_ERRORS: AtomicBool = AtomicBool::new(false);

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! cloud_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! cloud_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! cloud_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! cloud_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! cloud_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogDestination {
    /// Write to the given log file, truncating it.
    File(PathBuf),
    /// Write to the terminal on stderr, keeping stdout free for prompts.
    #[default]
    Terminal,
    /// Write to both file and terminal.
    Both(PathBuf),
}

/// Initialize the global logger.
///
/// A file that cannot be created is reported on stderr and skipped. Calling
/// this after a logger is already installed has no effect.
pub fn initialize(destination: &LogDestination, level: LevelFilter) {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File(path) => match create_file_logger(path, level, config) {
            Some(file_logger) => vec![file_logger],
            None => return,
        },
        LogDestination::Terminal => vec![terminal_logger(level, config)],
        LogDestination::Both(path) => {
            let mut loggers = vec![terminal_logger(level, config.clone())];
            if let Some(file_logger) = create_file_logger(path, level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let on_terminal = matches!(
        destination,
        LogDestination::Terminal | LogDestination::Both(_)
    );
    if CombinedLogger::init(loggers).is_ok() && on_terminal && level >= LevelFilter::Error {
        TERMINAL_ERRORS.store(true, Ordering::Relaxed);
    }
}

/// Whether [`initialize`] installed a logger that prints error records on the
/// terminal. When false, errors meant for the user must be printed directly.
pub fn terminal_shows_errors() -> bool {
    TERMINAL_ERRORS.load(Ordering::Relaxed)
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn terminal_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<dyn SharedLogger>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
