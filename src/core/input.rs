//! Pending input line with a caret.
//!
//! The caret is a char index so multi-byte input never splits a code point.

/// A single text-field edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    /// Pasted text
    InsertStr(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Ctrl+U
    ClearLine,
}

/// The not-yet-submitted line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    caret: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position in chars, `0..=char_len`
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole line and put the caret at the end
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = self.char_len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    /// Take the line out, leaving it empty
    pub fn take(&mut self) -> String {
        self.caret = 0;
        std::mem::take(&mut self.text)
    }

    pub fn apply(&mut self, op: &EditOp) {
        match op {
            EditOp::Insert(ch) => self.insert(*ch),
            EditOp::InsertStr(s) => {
                for ch in s.chars() {
                    self.insert(ch);
                }
            }
            EditOp::Backspace => {
                if self.caret > 0 {
                    self.caret -= 1;
                    let at = self.byte_offset(self.caret);
                    self.text.remove(at);
                }
            }
            EditOp::Delete => {
                if self.caret < self.char_len() {
                    let at = self.byte_offset(self.caret);
                    self.text.remove(at);
                }
            }
            EditOp::Left => self.caret = self.caret.saturating_sub(1),
            EditOp::Right => self.caret = (self.caret + 1).min(self.char_len()),
            EditOp::Home => self.caret = 0,
            EditOp::End => self.caret = self.char_len(),
            EditOp::ClearLine => self.clear(),
        }
    }

    /// Tabs become a space; other control characters are dropped so they
    /// never reach the host terminal.
    fn insert(&mut self, ch: char) {
        let ch = match ch {
            '\t' => ' ',
            c if c.is_control() => return,
            c => c,
        };
        let at = self.byte_offset(self.caret);
        self.text.insert(at, ch);
        self.caret += 1;
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
