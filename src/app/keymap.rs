//! Übersetzung von Tastenereignissen in Intents.

use super::AppIntent;
use crate::shared::{KeyAction, KeyBindings, KeyCode};

/// Liefert den Intent einer gebundenen Taste; ungebundene Tasten → `None`.
pub fn intent_for_key(bindings: &KeyBindings, key: KeyCode) -> Option<AppIntent> {
    let intent = match bindings.action_for(key)? {
        KeyAction::CycleDirection => AppIntent::CycleDirectionRequested,
        KeyAction::Confirm => AppIntent::CommitRequested,
        KeyAction::Cancel => AppIntent::CancelRequested,
        KeyAction::Delete => AppIntent::DeleteSelectedRequested,
    };
    Some(intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys_map_to_intents() {
        let bindings = KeyBindings::default();
        assert!(matches!(
            intent_for_key(&bindings, KeyCode::Char('r')),
            Some(AppIntent::CycleDirectionRequested)
        ));
        assert!(matches!(
            intent_for_key(&bindings, KeyCode::Escape),
            Some(AppIntent::CancelRequested)
        ));
        assert!(intent_for_key(&bindings, KeyCode::Tab).is_none());
    }

    #[test]
    fn test_rebound_key() {
        let bindings = KeyBindings {
            confirm: KeyCode::Space,
            ..KeyBindings::default()
        };
        assert!(matches!(
            intent_for_key(&bindings, KeyCode::Space),
            Some(AppIntent::CommitRequested)
        ));
        assert!(intent_for_key(&bindings, KeyCode::Enter).is_none());
    }
}
