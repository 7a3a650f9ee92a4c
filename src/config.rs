//! Terminal configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use crate::error::TerminalError;
use crate::runtime::debug::LogConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Largest accepted `delay_scale`
pub const MAX_DELAY_SCALE: f32 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Pause between revealed characters
    pub char_interval_ms: u64,
    /// Multiplier applied to every scripted delay
    pub delay_scale: f32,
    /// Where exported reports are written
    pub export_dir: PathBuf,
    pub log: LogConfig,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            char_interval_ms: 25,
            delay_scale: 1.0,
            export_dir: PathBuf::from("."),
            log: LogConfig::default(),
        }
    }
}

impl TerminalConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, TerminalError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| TerminalError::config(path, e.to_string()))?;
        let config = Self::from_json(&json).map_err(|e| TerminalError::config(path, e.to_string()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), TerminalError> {
        if !(0.0..=MAX_DELAY_SCALE).contains(&self.delay_scale) {
            return Err(TerminalError::config(
                path,
                format!(
                    "delay_scale must be between 0 and {MAX_DELAY_SCALE}, got {}",
                    self.delay_scale
                ),
            ));
        }
        Ok(())
    }

    /// No typing effect, no scripted pauses
    pub fn fast(mut self) -> Self {
        self.char_interval_ms = 0;
        self.delay_scale = 0.0;
        self
    }

    pub fn char_interval(&self) -> Duration {
        Duration::from_millis(self.char_interval_ms)
    }

    /// Scale a scripted delay
    pub fn scaled(&self, delay: Duration) -> Duration {
        scale_delay(delay, self.delay_scale)
    }
}

/// Multiply `delay` by `scale`
///
/// Negative or NaN scales count as zero; results too large for a
/// `Duration` saturate at `Duration::MAX`.
pub fn scale_delay(delay: Duration, scale: f32) -> Duration {
    let scale = scale.max(0.0);
    Duration::try_from_secs_f64(delay.as_secs_f64() * f64::from(scale)).unwrap_or(Duration::MAX)
}
