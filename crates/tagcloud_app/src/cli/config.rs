//! Optional RON configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes, e.g. `(font_max: 36, log_level: Debug)`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tagcloud_core::{DEFAULT_FONT_MAX, DEFAULT_FONT_MIN};
use tagcloud_engine::DEFAULT_STYLESHEET_HREF;
use tagcloud_logging::{LevelFilter, LogDestination, DEFAULT_LOG_FILE};

pub(crate) const DEFAULT_CONFIG_FILENAME: &str = "tagcloud.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub(crate) enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub(crate) enum LogOutput {
    #[default]
    Terminal,
    File,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub font_min: u32,
    pub font_max: u32,
    pub stylesheet_href: String,
    pub log_level: LogLevel,
    pub log_output: LogOutput,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            font_min: DEFAULT_FONT_MIN,
            font_max: DEFAULT_FONT_MAX,
            stylesheet_href: DEFAULT_STYLESHEET_HREF.to_string(),
            log_level: LogLevel::default(),
            log_output: LogOutput::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl AppConfig {
    pub fn log_destination(&self) -> LogDestination {
        match self.log_output {
            LogOutput::Terminal => LogDestination::Terminal,
            LogOutput::File => LogDestination::File(self.log_file.clone()),
            LogOutput::Both => LogDestination::Both(self.log_file.clone()),
        }
    }
}

pub(crate) fn parse(text: &str) -> Result<AppConfig> {
    ron::from_str(text).context("invalid configuration")
}

/// Loads `explicit` if given; otherwise `./tagcloud.ron` when it exists, else defaults.
pub(crate) fn load(explicit: Option<&Path>) -> Result<AppConfig> {
    match explicit {
        Some(path) => load_file(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILENAME);
            if path.is_file() {
                load_file(path)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

fn load_file(path: &Path) -> Result<AppConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    parse(&text).with_context(|| format!("in {}", path.display()))
}
