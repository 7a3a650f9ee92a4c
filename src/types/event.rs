//! Input events delivered to the session

use serde::{Deserialize, Serialize};

/// Keyboard events from the input field
///
/// Only `Enter` drives the state machine; the others just edit the field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    /// A printable character typed into the field
    Key(char),
    /// Delete the last character
    Backspace,
    /// Submit the field
    Enter,
}

impl Event {
    /// Expand a full input line into the keystrokes that would type it,
    /// followed by Enter
    pub fn line(text: &str) -> Vec<Event> {
        text.chars()
            .filter(|c| !matches!(c, '\r' | '\n'))
            .map(Event::Key)
            .chain(std::iter::once(Event::Enter))
            .collect()
    }
}
