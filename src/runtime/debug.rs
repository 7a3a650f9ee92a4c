//! Debug logging backend
//!
//! The crate logs through the `log` facade. [`install`] wires up a small
//! logger that writes to stderr or a file. Stdout carries the terminal
//! display, so the default destination is a file.

use crate::error::TerminalError;
use log::{LevelFilter, Log, Metadata, Record};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Environment variable that turns logging on regardless of config
pub const DEBUG_ENV: &str = "JRL_DEBUG";

/// Debug log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Every step the sequencer runs
    Trace,
    /// Development debugging information
    Debug,
    /// Scene and state transitions
    Info,
    /// Recoverable problems, e.g. a failed export
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

/// Debug output destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugOutput {
    Stderr,
    File(PathBuf),
}

impl Default for DebugOutput {
    fn default() -> Self {
        DebugOutput::File(PathBuf::from("jrl-terminal.log"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    pub level: LogLevel,
    pub output: DebugOutput,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: LogLevel::Debug,
            output: DebugOutput::default(),
        }
    }
}

impl LogConfig {
    /// Enabled by config or by `JRL_DEBUG`
    pub fn is_active(&self) -> bool {
        self.enabled || std::env::var_os(DEBUG_ENV).is_some()
    }
}

/// `log::Log` implementation writing one line per record
pub struct DebugLogger {
    level: LevelFilter,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl DebugLogger {
    pub fn new(level: LevelFilter, sink: Box<dyn Write + Send>) -> Self {
        Self {
            level,
            sink: Mutex::new(sink),
        }
    }

    pub fn from_config(config: &LogConfig) -> Result<Self, TerminalError> {
        let sink: Box<dyn Write + Send> = match &config.output {
            DebugOutput::Stderr => Box::new(std::io::stderr()),
            DebugOutput::File(path) => Box::new(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| TerminalError::config(path, e.to_string()))?,
            ),
        };
        Ok(Self::new(config.level.into(), sink))
    }
}

pub fn format_record(record: &Record) -> String {
    format!(
        "[{:5}] {:10} {}",
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for DebugLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "{}", format_record(record));
        }
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.flush();
        }
    }
}

/// Install the global logger if logging is active
///
/// Returns whether a logger was installed. A logger installed earlier in
/// the process is left in place.
pub fn install(config: &LogConfig) -> Result<bool, TerminalError> {
    if !config.is_active() {
        return Ok(false);
    }

    let logger = DebugLogger::from_config(config)?;
    let level = logger.level;
    if log::set_boxed_logger(Box::new(logger)).is_err() {
        return Ok(false);
    }
    log::set_max_level(level);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn log_config_default() {
        let config = LogConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.output, DebugOutput::File(PathBuf::from("jrl-terminal.log")));
    }

    #[test]
    fn output_deserializes_from_either_form() {
        let stderr: DebugOutput = serde_json::from_str(r#""stderr""#).unwrap();
        assert_eq!(stderr, DebugOutput::Stderr);

        let file: DebugOutput = serde_json::from_str(r#"{ "file": "trace.log" }"#).unwrap();
        assert_eq!(file, DebugOutput::File(PathBuf::from("trace.log")));
    }

    #[test]
    fn logger_filters_by_level() {
        let buf = SharedBuf::default();
        let logger = DebugLogger::new(LevelFilter::Info, Box::new(buf.clone()));

        logger.log(
            &Record::builder()
                .level(log::Level::Debug)
                .target("sequencer")
                .args(format_args!("step 3"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(log::Level::Info)
                .target("session")
                .args(format_args!("Menu -> Pause"))
                .build(),
        );

        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, "[INFO ] session    Menu -> Pause\n");
    }

    #[test]
    fn inactive_config_installs_nothing() {
        if std::env::var_os(DEBUG_ENV).is_some() {
            return;
        }
        assert!(!install(&LogConfig::default()).unwrap());
    }
}
