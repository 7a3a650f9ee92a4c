//! Display driver
//!
//! Writes text to a [`Surface`], either paced one character at a time
//! (`reveal`) or all at once (`write_line`). Input is disabled while a
//! reveal is in progress and re-enabled once the closing line break lands.

pub mod surface;

pub use surface::{Screen, Surface};

use crate::error::TerminalError;
use std::time::Duration;

/// Reference cadence of the typing effect
pub const DEFAULT_CHAR_INTERVAL: Duration = Duration::from_millis(25);

pub struct DisplayDriver<S: Surface> {
    surface: S,
    char_interval: Duration,
}

impl<S: Surface> DisplayDriver<S> {
    pub fn new(surface: S) -> Self {
        Self::with_interval(surface, DEFAULT_CHAR_INTERVAL)
    }

    pub fn with_interval(surface: S, char_interval: Duration) -> Self {
        Self {
            surface,
            char_interval,
        }
    }

    pub fn char_interval(&self) -> Duration {
        self.char_interval
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Type `text` out, then break the line
    ///
    /// The returned future resolving is the completion signal.
    pub async fn reveal(&mut self, text: &str) -> Result<(), TerminalError> {
        self.surface.input_mut().set_enabled(false);

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.surface.append(ch.encode_utf8(&mut buf))?;
            if !self.char_interval.is_zero() {
                tokio::time::sleep(self.char_interval).await;
            }
        }

        self.surface.append("\n")?;
        self.surface.input_mut().set_enabled(true);
        Ok(())
    }

    /// Write `text` plus a line break without pacing
    pub fn write_line(&mut self, text: &str) -> Result<(), TerminalError> {
        self.surface.append(text)?;
        self.surface.append("\n")?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), TerminalError> {
        self.surface.clear()?;
        Ok(())
    }

    pub fn scroll_to_bottom(&mut self) -> Result<(), TerminalError> {
        self.surface.scroll_to_bottom()?;
        Ok(())
    }
}
