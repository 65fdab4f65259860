//! Terminal renderer using crossterm
//!
//! Draws a [`SessionState`] onto the host terminal: scrollback lines wrapped
//! to the window width, followed by the live prompt line. The view is pinned
//! to the bottom unless the user has scrolled back.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, SetCursorStyle, Show},
    event::{
        DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
        EnableFocusChange, EnableMouseCapture,
    },
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use tracing::debug;
use unicode_width::UnicodeWidthChar;

use crate::core::commands::PROMPT;
use crate::core::SessionState;

/// Window title
pub const TITLE: &str = "Agrim Gupta | macOS Portfolio";

/// Terminal background (always dark)
const BACKGROUND: Color = Color::Rgb { r: 0, g: 0, b: 0 };
/// Terminal text, green-400
const FOREGROUND: Color = Color::Rgb { r: 74, g: 222, b: 128 };

/// Wrapped rows plus where the caret sits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Every display row, oldest first; the prompt line comes last
    pub rows: Vec<String>,
    /// Caret (row index into `rows`, column)
    pub caret: (usize, u16),
}

impl Frame {
    /// Lay out the session for a window `cols` wide
    pub fn layout(state: &SessionState, cols: u16) -> Self {
        let width = cols.max(1) as usize;
        let mut rows: Vec<String> = state
            .scrollback()
            .iter()
            .flat_map(|line| wrap(line, width))
            .collect();

        let input = state.input();
        let prompt_start = rows.len();
        let prompt_line = format!("{} {}", PROMPT, input.text());
        let caret_index = PROMPT.chars().count() + 1 + input.caret();
        let (prompt_rows, (caret_row, caret_col)) = wrap_with_caret(&prompt_line, width, caret_index);
        rows.extend(prompt_rows);

        let caret_row = prompt_start + caret_row;
        while rows.len() <= caret_row {
            rows.push(String::new());
        }

        Self {
            rows,
            caret: (caret_row, caret_col as u16),
        }
    }

    /// How far the view can scroll back in a window `height` rows tall
    pub fn max_scroll(&self, height: u16) -> usize {
        self.rows.len().saturating_sub(height as usize)
    }

    /// Index of the first row shown, given the scroll offset
    pub fn first_visible(&self, height: u16, scroll_offset: usize) -> usize {
        let max = self.max_scroll(height);
        max - scroll_offset.min(max)
    }
}

/// Split `line` into rows no wider than `width` columns.
///
/// An empty line still occupies one row.
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    wrap_with_caret(line, width, usize::MAX).0
}

/// Wrap `line` and report where the char at index `caret` lands.
///
/// A caret past the last char sits after it, or at the start of a fresh row
/// when the last row is full.
fn wrap_with_caret(line: &str, width: usize, caret: usize) -> (Vec<String>, (usize, usize)) {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    let mut caret_pos = None;

    for (i, ch) in line.chars().enumerate() {
        let w = ch.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if i == caret {
            caret_pos = Some((rows.len(), current_width));
        }
        current.push(ch);
        current_width += w;
    }
    rows.push(current);

    let caret_pos = caret_pos.unwrap_or_else(|| {
        let last = rows.len() - 1;
        if current_width >= width {
            (last + 1, 0)
        } else {
            (last, current_width)
        }
    });
    (rows, caret_pos)
}

/// Terminal renderer
pub struct Renderer {
    /// Whether the terminal has been initialized
    initialized: bool,
    /// Blinking or steady caret
    cursor_blink: bool,
}

impl Renderer {
    pub fn new(cursor_blink: bool) -> Self {
        Self {
            initialized: false,
            cursor_blink,
        }
    }

    /// Initialize the terminal for rendering
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.initialized = true;

        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            EnableBracketedPaste,
            DisableLineWrap,
            SetTitle(TITLE),
            SetBackgroundColor(BACKGROUND),
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        let style = if self.cursor_blink {
            SetCursorStyle::BlinkingBar
        } else {
            SetCursorStyle::SteadyBar
        };
        execute!(stdout, style)?;

        debug!("renderer initialized");
        Ok(())
    }

    /// Cleanup the terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;

        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            ResetColor,
            SetAttribute(Attribute::Reset),
            SetCursorStyle::DefaultUserShape,
            Show,
            EnableLineWrap,
            DisableBracketedPaste,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = stdout.flush();

        terminal::disable_raw_mode()
    }

    /// Render the session
    pub fn render(&mut self, state: &SessionState) -> io::Result<()> {
        let (cols, rows) = Self::size()?;
        let frame = Frame::layout(state, cols);
        let offset = state.scroll_offset().min(frame.max_scroll(rows));
        let first = frame.first_visible(rows, offset);

        let stdout = io::stdout();
        let mut stdout = io::BufWriter::with_capacity(65536, stdout.lock());

        // Begin synchronized update (reduces flicker)
        write!(stdout, "\x1b[?2026h")?;
        queue!(
            stdout,
            Hide,
            SetBackgroundColor(BACKGROUND),
            SetForegroundColor(FOREGROUND)
        )?;

        for y in 0..rows {
            queue!(stdout, MoveTo(0, y))?;
            if let Some(row) = frame.rows.get(first + y as usize) {
                queue!(stdout, Print(row))?;
            }
            queue!(stdout, Clear(ClearType::UntilNewLine))?;
        }

        if offset > 0 {
            queue!(
                stdout,
                MoveTo(0, 0),
                SetAttribute(Attribute::Reverse),
                Print(format!("[↑ {} lines]", offset)),
                SetAttribute(Attribute::NoReverse)
            )?;
        }

        let (caret_row, caret_col) = frame.caret;
        let caret_on_screen = caret_row >= first && caret_row < first + rows as usize;
        if state.is_focused() && caret_on_screen {
            queue!(stdout, MoveTo(caret_col, (caret_row - first) as u16), Show)?;
        }

        // End synchronized update
        write!(stdout, "\x1b[?2026l")?;
        stdout.flush()
    }

    /// Largest useful scroll offset for the current window
    pub fn max_scroll(state: &SessionState) -> io::Result<usize> {
        let (cols, rows) = Self::size()?;
        Ok(Frame::layout(state, cols).max_scroll(rows))
    }

    /// Get terminal size
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Plain-text rendering of the whole session, for batch mode
pub struct TextRenderer;

impl TextRenderer {
    /// Scrollback followed by the prompt line, one line each
    pub fn render(state: &SessionState) -> String {
        let mut output = String::new();
        for line in state.scrollback() {
            output.push_str(line);
            output.push('\n');
        }
        output.push_str(&format!("{} {}", PROMPT, state.input().text()));
        output.push('\n');
        output
    }
}
