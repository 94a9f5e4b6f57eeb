//! Cursor over one listing line
//!
//! Every step that runs off the end of the line returns `None`, so a walk
//! written with `?` aborts cleanly on truncated input.

use std::str::FromStr;

/// Parse an unsigned number made of ASCII digits only. `str::parse` would
/// also take a leading `+`.
pub(crate) fn digits<T: FromStr>(text: &str) -> Option<T> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[derive(Debug, Clone)]
pub(crate) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Start at byte `pos`, which must lie on a char boundary.
    pub(crate) fn at(text: &'a str, pos: usize) -> Self {
        Self { text, pos }
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Step over one ASCII byte. Fails if that reaches the end of the line.
    pub(crate) fn advance(&mut self) -> Option<()> {
        self.pos += 1;
        (self.pos < self.text.len()).then_some(())
    }

    /// Move to the next `delim`, counting the current position.
    pub(crate) fn seek(&mut self, delim: u8) -> Option<()> {
        let offset = self.text.as_bytes()[self.pos..]
            .iter()
            .position(|&b| b == delim)?;
        self.pos += offset;
        Some(())
    }

    /// Text up to the next byte in `delims`; the cursor lands on the delimiter.
    pub(crate) fn take_until_any(&mut self, delims: &[u8]) -> Option<&'a str> {
        let start = self.pos;
        let offset = self.text.as_bytes()[start..]
            .iter()
            .position(|b| delims.contains(b))?;
        self.pos = start + offset;
        Some(&self.text[start..self.pos])
    }

    pub(crate) fn take_until(&mut self, delim: u8) -> Option<&'a str> {
        self.take_until_any(&[delim])
    }

    /// Skip a run of `ch`. Fails if the run reaches the end of the line.
    pub(crate) fn skip_run(&mut self, ch: u8) -> Option<()> {
        while self.peek() == Some(ch) {
            self.pos += 1;
        }
        (self.pos < self.text.len()).then_some(())
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }
}
