//! Output surfaces the display driver writes to
//!
//! [`Screen`] is the in-memory surface. It tracks the visible contents, a
//! transcript that survives `clear`, the prompt label and the input field.
//! The ANSI console in [`crate::cli::console`] mirrors one of these.

use crate::types::{InputField, Prompt};
use std::io;

/// Everything the driver and the session need from the page
pub trait Surface {
    /// Append text to the output region. `\n` breaks the line.
    fn append(&mut self, text: &str) -> io::Result<()>;

    /// Reset the output region to empty
    fn clear(&mut self) -> io::Result<()>;

    fn set_prompt(&mut self, prompt: Prompt) -> io::Result<()>;

    fn prompt(&self) -> Prompt;

    fn input(&self) -> &InputField;

    fn input_mut(&mut self) -> &mut InputField;

    fn scroll_to_bottom(&mut self) -> io::Result<()>;
}

/// In-memory output surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    contents: String,
    transcript: String,
    prompt: Prompt,
    input: InputField,
    scrolls: usize,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// What is visible right now
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Everything ever written, across clears
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn is_blank(&self) -> bool {
        self.contents.is_empty()
    }

    /// How many times the view was scrolled to the bottom
    pub fn scroll_count(&self) -> usize {
        self.scrolls
    }
}

impl Surface for Screen {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.contents.push_str(text);
        self.transcript.push_str(text);
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.contents.clear();
        Ok(())
    }

    fn set_prompt(&mut self, prompt: Prompt) -> io::Result<()> {
        self.prompt = prompt;
        Ok(())
    }

    fn prompt(&self) -> Prompt {
        self.prompt
    }

    fn input(&self) -> &InputField {
        &self.input
    }

    fn input_mut(&mut self) -> &mut InputField {
        &mut self.input
    }

    fn scroll_to_bottom(&mut self) -> io::Result<()> {
        self.scrolls += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_is_idempotent() {
        let mut screen = Screen::new();
        screen.append("ACCESS GRANTED.\n").unwrap();

        for _ in 0..3 {
            screen.clear().unwrap();
            assert!(screen.is_blank());
        }
        assert_eq!(screen.contents(), "");
    }

    #[test]
    fn transcript_survives_clear() {
        let mut screen = Screen::new();
        screen.append("first\n").unwrap();
        screen.clear().unwrap();
        screen.append("second\n").unwrap();

        assert_eq!(screen.contents(), "second\n");
        assert_eq!(screen.transcript(), "first\nsecond\n");
    }

    #[test]
    fn new_screen_has_hidden_prompt_and_disabled_input() {
        let screen = Screen::new();
        assert_eq!(screen.prompt(), Prompt::Hidden);
        assert!(!screen.input().is_enabled());
        assert_eq!(screen.scroll_count(), 0);
    }
}
