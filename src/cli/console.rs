//! ANSI terminal surface
//!
//! Mirrors a [`Screen`] and writes everything through to a terminal.

use crate::display::{Screen, Surface};
use crate::types::{InputField, Prompt};
use std::io::{self, Write};

const CLEAR_SCREEN: &[u8] = b"\x1b[2J\x1b[H";

pub struct Console<W: Write> {
    screen: Screen,
    out: W,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self {
            screen: Screen::new(),
            out,
        }
    }

    /// The in-memory mirror of what has been written
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the prompt label so the operator knows input is open
    pub fn show_prompt(&mut self) -> io::Result<()> {
        self.out.write_all(self.screen.prompt().label().as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> Surface for Console<W> {
    fn append(&mut self, text: &str) -> io::Result<()> {
        self.screen.append(text)?;
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.screen.clear()?;
        self.out.write_all(CLEAR_SCREEN)?;
        self.out.flush()
    }

    fn set_prompt(&mut self, prompt: Prompt) -> io::Result<()> {
        self.screen.set_prompt(prompt)
    }

    fn prompt(&self) -> Prompt {
        self.screen.prompt()
    }

    fn input(&self) -> &InputField {
        self.screen.input()
    }

    fn input_mut(&mut self) -> &mut InputField {
        self.screen.input_mut()
    }

    fn scroll_to_bottom(&mut self) -> io::Result<()> {
        // Terminals follow the cursor; flushing is all that is needed
        self.screen.scroll_to_bottom()?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_through_and_mirrors() {
        let mut console = Console::new(Vec::new());
        console.append("ACCESS GRANTED.\n").unwrap();

        assert_eq!(console.screen().contents(), "ACCESS GRANTED.\n");
        assert_eq!(console.into_inner(), b"ACCESS GRANTED.\n");
    }

    #[test]
    fn clear_emits_ansi_reset() {
        let mut console = Console::new(Vec::new());
        console.append("menu\n").unwrap();
        console.clear().unwrap();

        assert!(console.screen().is_blank());
        assert!(console.into_inner().ends_with(CLEAR_SCREEN));
    }

    #[test]
    fn prompt_is_printed_on_request() {
        let mut console = Console::new(Vec::new());
        console.set_prompt(Prompt::Admin).unwrap();
        console.show_prompt().unwrap();

        assert_eq!(console.into_inner(), b"JRL_ADMIN> ");
    }
}
