//! Command history for termfolio
//!
//! Keeps every submitted line for the lifetime of the session and tracks the
//! Up/Down recall cursor. Nothing is written to disk.

/// Command history with a recall cursor
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandHistory {
    /// All submitted lines (newest last)
    entries: Vec<String>,
    /// Steps back from the newest entry; `None` when not navigating
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submitted line and stop navigating
    pub fn push(&mut self, command: String) {
        self.entries.push(command);
        self.cursor = None;
    }

    /// Step toward older entries, stopping at the oldest.
    ///
    /// Returns the entry now under the cursor, or `None` when there is no history.
    pub fn recall_previous(&mut self) -> Option<&str> {
        let oldest = self.entries.len().checked_sub(1)?;
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(oldest),
        };
        self.cursor = Some(next);
        self.at(next)
    }

    /// Step toward newer entries.
    ///
    /// Returns `None` when not navigating. Stepping past the newest entry
    /// leaves navigation and yields `Some(None)`.
    pub fn recall_next(&mut self) -> Option<Option<&str>> {
        match self.cursor? {
            0 => {
                self.cursor = None;
                Some(None)
            }
            i => {
                self.cursor = Some(i - 1);
                Some(self.at(i - 1))
            }
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[cfg(test)]
    pub fn is_navigating(&self) -> bool {
        self.cursor.is_some()
    }

    /// Entries in submission order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn at(&self, steps_back: usize) -> Option<&str> {
        let index = self.entries.len().checked_sub(steps_back + 1)?;
        self.entries.get(index).map(String::as_str)
    }
}
