//! User interface rendering and input handling.
//!
//! - **renderer**: Draws the session with crossterm (and a plain-text form for batch mode)
//! - **keymapper**: Keyboard, mouse and focus events to session events

pub mod keymapper;
pub mod renderer;

pub use keymapper::{Action, KeyMapper};
pub use renderer::{Renderer, TextRenderer};
