//! Session state and its transitions
//!
//! A [`SessionState`] owns everything the terminal shows: scrollback, command
//! history, the pending input line, focus and the viewport offset. Input is
//! fed in as [`TerminalEvent`]s through [`SessionState::apply`], which takes
//! the old state and returns the new one without touching the screen.

use tracing::debug;

use super::clock::Clock;
use super::commands::{self, Output, PROMPT};
use super::input::{EditOp, InputLine};
use crate::history::CommandHistory;

/// Everything that can happen to the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Text-field editing on the input line
    Edit(EditOp),
    /// Enter
    Submit,
    /// Up arrow: older history entry
    RecallPrevious,
    /// Down arrow: newer history entry
    RecallNext,
    /// Mouse click anywhere in the view
    Click,
    /// The host terminal lost focus
    FocusLost,
    /// The host terminal regained focus
    FocusGained,
    /// Scroll the viewport back by n rows
    ScrollUp(usize),
    /// Scroll the viewport forward by n rows
    ScrollDown(usize),
}

/// Terminal session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Display lines, oldest first
    scrollback: Vec<String>,
    /// Submitted commands and recall cursor
    history: CommandHistory,
    /// Pending input
    input: InputLine,
    /// Whether keystrokes reach the input line
    focused: bool,
    /// Rows scrolled up from the bottom (0 = pinned to bottom)
    scroll_offset: usize,
}

impl SessionState {
    /// Create a session showing the login banner
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            scrollback: vec![
                format!("Last login: {}", clock.login_timestamp()),
                "Welcome to macOS Terminal".to_string(),
                "Type 'help' to see available commands".to_string(),
                String::new(),
            ],
            history: CommandHistory::new(),
            input: InputLine::new(),
            focused: true,
            scroll_offset: 0,
        }
    }

    /// Apply one event and return the resulting state
    pub fn apply(mut self, event: TerminalEvent, clock: &dyn Clock) -> Self {
        match event {
            TerminalEvent::Click | TerminalEvent::FocusGained => self.focused = true,
            TerminalEvent::FocusLost => self.focused = false,
            TerminalEvent::ScrollUp(n) => {
                self.scroll_offset = self.scroll_offset.saturating_add(n);
            }
            TerminalEvent::ScrollDown(n) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(n);
            }
            _ if !self.focused => {}
            TerminalEvent::Edit(op) => self.input.apply(&op),
            TerminalEvent::Submit => self.submit(clock),
            TerminalEvent::RecallPrevious => {
                if let Some(entry) = self.history.recall_previous() {
                    let entry = entry.to_string();
                    self.input.set(&entry);
                }
            }
            TerminalEvent::RecallNext => match self.history.recall_next() {
                Some(Some(entry)) => {
                    let entry = entry.to_string();
                    self.input.set(&entry);
                }
                Some(None) => self.input.clear(),
                None => {}
            },
        }
        self
    }

    fn submit(&mut self, clock: &dyn Clock) {
        if self.input.text().trim().is_empty() {
            return;
        }
        let raw = self.input.take();
        self.execute(&raw, clock);
        self.history.push(raw);
    }

    fn execute(&mut self, raw: &str, clock: &dyn Clock) {
        let command = raw.trim().to_lowercase();
        let (name, args) = split_command(&command);

        debug!(command = name, args, "executing command");

        match commands::run(name, args, clock) {
            Output::ClearScreen => {
                self.scrollback = vec![String::new()];
            }
            Output::Lines(lines) => {
                self.scrollback.push(format!("{} {}", PROMPT, raw));
                self.scrollback.push(String::new());
                self.scrollback.extend(lines);
                self.scrollback.push(String::new());
            }
        }
        self.scroll_offset = 0;
    }

    /// Keep the viewport offset within what the view can show
    pub fn clamp_scroll(&mut self, max: usize) {
        self.scroll_offset = self.scroll_offset.min(max);
    }

    pub fn scrollback(&self) -> &[String] {
        &self.scrollback
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }
}

/// Split a trimmed command line into its name and the text after the first
/// separator. Spacing inside the arguments is kept as typed.
fn split_command(command: &str) -> (&str, &str) {
    match command.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((i, sep)) => (&command[..i], &command[i + sep.len_utf8()..]),
        None => (command, ""),
    }
}
