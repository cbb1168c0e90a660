//! Tasten und konfigurierbare Tastenbelegung.
//!
//! Die Eingabe-Erfassung liegt beim Host; hier kommen nur diskrete
//! Tastenereignisse an.

use crate::core::LatticeError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Taste, wie sie vom Host gemeldet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyCode {
    /// Enter / Return
    Enter,
    /// Leertaste
    Space,
    /// Escape
    Escape,
    /// Entf
    Delete,
    /// Rücktaste
    Backspace,
    /// Tabulator
    Tab,
    /// Zeichentaste (immer klein geschrieben gespeichert)
    Char(char),
}

impl FromStr for KeyCode {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(KeyCode::Char(c.to_ascii_lowercase()));
        }
        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Ok(KeyCode::Enter),
            "space" => Ok(KeyCode::Space),
            "escape" | "esc" => Ok(KeyCode::Escape),
            "delete" | "del" => Ok(KeyCode::Delete),
            "backspace" => Ok(KeyCode::Backspace),
            "tab" => Ok(KeyCode::Tab),
            _ => Err(LatticeError::UnknownKey(name.to_string())),
        }
    }
}

impl std::fmt::Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyCode::Enter => f.write_str("Enter"),
            KeyCode::Space => f.write_str("Space"),
            KeyCode::Escape => f.write_str("Escape"),
            KeyCode::Delete => f.write_str("Delete"),
            KeyCode::Backspace => f.write_str("Backspace"),
            KeyCode::Tab => f.write_str("Tab"),
            KeyCode::Char(c) if c.is_whitespace() => f.write_str("Space"),
            KeyCode::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
        }
    }
}

impl TryFrom<String> for KeyCode {
    type Error = LatticeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KeyCode> for String {
    fn from(key: KeyCode) -> Self {
        key.to_string()
    }
}

/// Aktionen, die per Taste ausgelöst werden können.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Nächste freie Richtung wählen
    CycleDirection,
    /// Platzierung bestätigen
    Confirm,
    /// Platzierung abbrechen
    Cancel,
    /// Selektiertes Rohr löschen
    Delete,
}

/// Tastenbelegung (1:1 auf die Platzierungs-Operationen).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Richtung wechseln
    pub cycle_direction: KeyCode,
    /// Bestätigen
    pub confirm: KeyCode,
    /// Abbrechen
    pub cancel: KeyCode,
    /// Löschen
    pub delete: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            cycle_direction: KeyCode::Char('r'),
            confirm: KeyCode::Enter,
            cancel: KeyCode::Escape,
            delete: KeyCode::Delete,
        }
    }
}

impl KeyBindings {
    /// Liefert die gebundene Aktion für eine Taste.
    pub fn action_for(&self, key: KeyCode) -> Option<KeyAction> {
        if key == self.cycle_direction {
            Some(KeyAction::CycleDirection)
        } else if key == self.confirm {
            Some(KeyAction::Confirm)
        } else if key == self.cancel {
            Some(KeyAction::Cancel)
        } else if key == self.delete {
            Some(KeyAction::Delete)
        } else {
            None
        }
    }
}
