//! Key mapping for terminal input
//!
//! Converts crossterm events into session events.

use bitflags::bitflags;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::{EditOp, TerminalEvent};

/// Rows moved per PageUp/PageDown
pub const PAGE_ROWS: usize = 10;
/// Rows moved per mouse wheel notch
pub const WHEEL_ROWS: usize = 3;

bitflags! {
    /// Modifier keys
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        let mut result = Modifiers::empty();
        if mods.contains(KeyModifiers::SHIFT) {
            result |= Modifiers::SHIFT;
        }
        if mods.contains(KeyModifiers::CONTROL) {
            result |= Modifiers::CTRL;
        }
        if mods.contains(KeyModifiers::ALT) {
            result |= Modifiers::ALT;
        }
        result
    }
}

/// What the main loop should do with an input event
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Feed into the session
    Session(TerminalEvent),
    /// Repaint without changing state (resize)
    Redraw,
    /// Leave the program
    Quit,
}

/// Key mapper for converting terminal events to actions
pub struct KeyMapper;

impl KeyMapper {
    /// Map any crossterm event. `input_empty` decides whether Ctrl+D quits.
    pub fn map_event(event: &Event, input_empty: bool) -> Option<Action> {
        match event {
            Event::Key(key) => Self::map_key(key, input_empty),
            Event::Mouse(mouse) => Self::map_mouse(mouse),
            Event::Paste(text) => Some(Action::Session(TerminalEvent::Edit(
                EditOp::InsertStr(text.clone()),
            ))),
            Event::FocusLost => Some(Action::Session(TerminalEvent::FocusLost)),
            Event::FocusGained => Some(Action::Session(TerminalEvent::FocusGained)),
            Event::Resize(_, _) => Some(Action::Redraw),
        }
    }

    /// Map a key press
    pub fn map_key(event: &KeyEvent, input_empty: bool) -> Option<Action> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        let mods = Modifiers::from(event.modifiers);

        let session = match event.code {
            KeyCode::Char(ch) => return Self::map_char(ch, mods, input_empty),

            KeyCode::Enter => TerminalEvent::Submit,
            KeyCode::Up => TerminalEvent::RecallPrevious,
            KeyCode::Down => TerminalEvent::RecallNext,

            KeyCode::Backspace => TerminalEvent::Edit(EditOp::Backspace),
            KeyCode::Delete => TerminalEvent::Edit(EditOp::Delete),
            KeyCode::Left => TerminalEvent::Edit(EditOp::Left),
            KeyCode::Right => TerminalEvent::Edit(EditOp::Right),
            KeyCode::Home => TerminalEvent::Edit(EditOp::Home),
            KeyCode::End => TerminalEvent::Edit(EditOp::End),

            KeyCode::PageUp => TerminalEvent::ScrollUp(PAGE_ROWS),
            KeyCode::PageDown => TerminalEvent::ScrollDown(PAGE_ROWS),

            _ => return None,
        };
        Some(Action::Session(session))
    }

    /// Map a character with modifiers
    fn map_char(ch: char, mods: Modifiers, input_empty: bool) -> Option<Action> {
        if mods.contains(Modifiers::CTRL) {
            let op = match ch.to_ascii_lowercase() {
                'c' => return Some(Action::Quit),
                'd' if input_empty => return Some(Action::Quit),
                'd' => EditOp::Delete,
                'u' => EditOp::ClearLine,
                'a' => EditOp::Home,
                'e' => EditOp::End,
                'b' => EditOp::Left,
                'f' => EditOp::Right,
                'h' => EditOp::Backspace,
                _ => return None,
            };
            return Some(Action::Session(TerminalEvent::Edit(op)));
        }

        if mods.contains(Modifiers::ALT) {
            return None;
        }

        Some(Action::Session(TerminalEvent::Edit(EditOp::Insert(ch))))
    }

    /// Map a mouse event
    pub fn map_mouse(event: &MouseEvent) -> Option<Action> {
        let session = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => TerminalEvent::Click,
            MouseEventKind::ScrollUp => TerminalEvent::ScrollUp(WHEEL_ROWS),
            MouseEventKind::ScrollDown => TerminalEvent::ScrollDown(WHEEL_ROWS),
            _ => return None,
        };
        Some(Action::Session(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    fn session(event: TerminalEvent) -> Option<Action> {
        Some(Action::Session(event))
    }

    #[test]
    fn test_char_keys() {
        let event = key_event(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(KeyMapper::map_key(&event, true), session(TerminalEvent::Edit(EditOp::Insert('a'))));

        // Shifted characters arrive already upper-cased
        let event = key_event(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(KeyMapper::map_key(&event, true), session(TerminalEvent::Edit(EditOp::Insert('A'))));

        // Alt+x is not text
        let event = key_event(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(KeyMapper::map_key(&event, true), None);
    }

    #[test]
    fn test_control_keys() {
        let event = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyMapper::map_key(&event, false), Some(Action::Quit));

        let event = key_event(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(KeyMapper::map_key(&event, true), Some(Action::Quit));
        assert_eq!(KeyMapper::map_key(&event, false), session(TerminalEvent::Edit(EditOp::Delete)));

        let event = key_event(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(KeyMapper::map_key(&event, false), session(TerminalEvent::Edit(EditOp::ClearLine)));
    }

    #[test]
    fn test_arrow_keys() {
        let event = key_event(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(KeyMapper::map_key(&event, true), session(TerminalEvent::RecallPrevious));

        let event = key_event(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(KeyMapper::map_key(&event, true), session(TerminalEvent::RecallNext));

        let event = key_event(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(KeyMapper::map_key(&event, true), session(TerminalEvent::Edit(EditOp::Left)));
    }

    #[test]
    fn test_enter_and_paging() {
        let event = key_event(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(KeyMapper::map_key(&event, false), session(TerminalEvent::Submit));

        let event = key_event(KeyCode::PageUp, KeyModifiers::NONE);
        assert_eq!(KeyMapper::map_key(&event, false), session(TerminalEvent::ScrollUp(PAGE_ROWS)));

        let event = key_event(KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(KeyMapper::map_key(&event, false), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut event = key_event(KeyCode::Enter, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(KeyMapper::map_key(&event, false), None);
    }

    #[test]
    fn test_mouse_events() {
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(KeyMapper::map_mouse(&event), session(TerminalEvent::Click));

        let event = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(KeyMapper::map_mouse(&event), session(TerminalEvent::ScrollUp(WHEEL_ROWS)));

        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(KeyMapper::map_mouse(&event), None);
    }

    #[test]
    fn test_other_events() {
        assert_eq!(KeyMapper::map_event(&Event::Resize(80, 24), true), Some(Action::Redraw));
        assert_eq!(KeyMapper::map_event(&Event::FocusLost, true), session(TerminalEvent::FocusLost));
        assert_eq!(KeyMapper::map_event(&Event::FocusGained, true), session(TerminalEvent::FocusGained));
        assert_eq!(
            KeyMapper::map_event(&Event::Paste("ls".to_string()), true),
            session(TerminalEvent::Edit(EditOp::InsertStr("ls".to_string())))
        );
    }
}
