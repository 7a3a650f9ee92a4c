//! Session state representation

use serde::{Deserialize, Serialize};

/// Which screen the session is on, and therefore how Enter is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mode {
    /// Login scene is playing
    #[default]
    Login,
    /// Main menu is shown and waiting for a token
    Menu,
    /// A scene finished and waits for Enter to return to the menu
    Pause,
    /// Terminal shut down; nothing is accepted anymore
    Exited,
}

impl Mode {
    pub fn is_terminal(self) -> bool {
        matches!(self, Mode::Exited)
    }
}

/// Label shown in front of the input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Prompt {
    Admin,
    Busy,
    #[default]
    Hidden,
}

impl Prompt {
    pub fn label(self) -> &'static str {
        match self {
            Prompt::Admin => "JRL_ADMIN> ",
            Prompt::Busy => "...",
            Prompt::Hidden => "",
        }
    }
}

/// The single text-entry field
///
/// Keystrokes are dropped while the field is disabled. `submit` hands back
/// the pending text and leaves the field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
    enabled: bool,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn push(&mut self, ch: char) {
        if self.enabled {
            self.value.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.enabled {
            self.value.pop();
        }
    }

    /// Take the pending text, clearing the field
    pub fn submit(&mut self) -> String {
        std::mem::take(&mut self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_start_in_login() {
        assert_eq!(Mode::default(), Mode::Login);
        assert!(!Mode::Login.is_terminal());
        assert!(Mode::Exited.is_terminal());
    }

    #[test]
    fn prompt_labels() {
        assert_eq!(Prompt::Admin.label(), "JRL_ADMIN> ");
        assert_eq!(Prompt::Busy.label(), "...");
        assert_eq!(Prompt::Hidden.label(), "");
    }

    #[test]
    fn disabled_field_drops_keys() {
        let mut field = InputField::new();
        field.push('1');
        assert_eq!(field.value(), "");

        field.set_enabled(true);
        field.push('1');
        field.push('2');
        field.backspace();
        assert_eq!(field.value(), "1");
    }

    #[test]
    fn submit_clears_the_field() {
        let mut field = InputField::new();
        field.set_enabled(true);
        "hello".chars().for_each(|c| field.push(c));

        assert_eq!(field.submit(), "hello");
        assert_eq!(field.value(), "");
        assert_eq!(field.submit(), "");
    }
}
