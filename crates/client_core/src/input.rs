//! Keyboard routing shared by the frontends: Shift toggles pencil mode,
//! 1-9 enter a digit, Backspace/Delete clear the selected cell.

use crate::session::{EntryAction, GameSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Digit(u8),
    Shift,
    Backspace,
    Delete,
    Other,
}

impl GameKey {
    /// Maps a key name as reported by a browser or terminal (`"7"`,
    /// `"Shift"`, `"Backspace"`, `"Delete"`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Shift" => GameKey::Shift,
            "Backspace" => GameKey::Backspace,
            "Delete" => GameKey::Delete,
            _ => match name.as_bytes() {
                [digit @ b'1'..=b'9'] => GameKey::Digit(digit - b'0'),
                _ => GameKey::Other,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEffect {
    PencilMode(bool),
    Entry(EntryAction),
    Cleared(bool),
    Unhandled,
}

impl GameSession {
    pub fn handle_key(&mut self, key: GameKey) -> KeyEffect {
        match key {
            GameKey::Shift => KeyEffect::PencilMode(self.toggle_pencil_mode()),
            GameKey::Digit(digit) => KeyEffect::Entry(self.enter_digit(digit)),
            GameKey::Backspace | GameKey::Delete => KeyEffect::Cleared(self.clear_selected()),
            GameKey::Other => KeyEffect::Unhandled,
        }
    }
}
