//! Editable path input, the terminal stand-in for a browser URL bar.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBar {
    input: Option<String>,
}

impl AddressBar {
    /// Start editing, prefilled with `current`.
    pub fn open(&mut self, current: &str) {
        self.input = Some(current.to_string());
    }

    pub fn close(&mut self) {
        self.input = None;
    }

    pub fn is_open(&self) -> bool {
        self.input.is_some()
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn push(&mut self, c: char) {
        if let Some(input) = &mut self.input {
            input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = &mut self.input {
            input.pop();
        }
    }

    pub fn clear(&mut self) {
        if let Some(input) = &mut self.input {
            input.clear();
        }
    }

    /// Close the bar and hand back what was typed.
    pub fn submit(&mut self) -> Option<String> {
        self.input.take()
    }

    /// Display width of the typed text, for cursor placement.
    pub fn cursor_offset(&self) -> u16 {
        self.input
            .as_deref()
            .map(|s| UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16)
            .unwrap_or(0)
    }
}
