//! Core terminal emulation components.
//!
//! This module contains everything that decides what the terminal shows,
//! independent of how it is drawn:
//!
//! - **session**: Session state plus the event transition function
//! - **commands**: Built-in command table and canned output
//! - **input**: Pending input line editing
//! - **clock**: Time source for the banner and `date`
//!
//! # Architecture
//!
//! ```text
//! SessionState
//! ├── scrollback (Vec<String>)
//! ├── CommandHistory (entries + recall cursor)
//! ├── InputLine (pending input + caret)
//! └── focus / scroll offset
//!
//! TerminalEvent ──apply──▶ SessionState ──commands::run──▶ Output
//! ```

pub mod clock;
pub mod commands;
pub mod input;
pub mod session;

pub use clock::{Clock, SystemClock};
pub use input::EditOp;
pub use session::{SessionState, TerminalEvent};
