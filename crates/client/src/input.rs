//! Keyboard mapping for the scanner client.
//!
//! Owns every key binding so the rest of the client never looks at
//! `crossterm` events directly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use scanner_core::NavCommand;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Forward to the navigator.
    Navigate(NavCommand),
    /// Nudge the map cursor; north is `+y`.
    MoveCursor { dx: i32, dy: i32 },
    /// Re-read the world file from disk.
    Reload,
    None,
}

/// Translates `KeyEvent`s into [`KeyAction`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::PageUp => navigate(NavCommand::ChangeCategory(-1)),
            KeyCode::PageDown => navigate(NavCommand::ChangeCategory(1)),
            KeyCode::Left => cursor(-1, 0),
            KeyCode::Right => cursor(1, 0),
            KeyCode::Up => cursor(0, 1),
            KeyCode::Down => cursor(0, -1),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            '<' => navigate(NavCommand::ChangeCategory(-1)),
            '>' => navigate(NavCommand::ChangeCategory(1)),
            '[' => navigate(NavCommand::ChangeSubcategory(-1)),
            ']' => navigate(NavCommand::ChangeSubcategory(1)),
            ',' => navigate(NavCommand::ChangeGroup(-1)),
            '.' => navigate(NavCommand::ChangeGroup(1)),
            '-' => navigate(NavCommand::ChangeItem(-1)),
            '=' | '+' => navigate(NavCommand::ChangeItem(1)),
            'd' => navigate(NavCommand::AnnounceDistance),
            'm' => navigate(NavCommand::MoveCursorToItem),
            'h' => cursor(-1, 0),
            'l' => cursor(1, 0),
            'k' => cursor(0, 1),
            'j' => cursor(0, -1),
            'r' => KeyAction::Reload,
            _ => KeyAction::None,
        }
    }
}

fn navigate(command: NavCommand) -> KeyAction {
    KeyAction::Navigate(command)
}

fn cursor(dx: i32, dy: i32) -> KeyAction {
    KeyAction::MoveCursor { dx, dy }
}
