//! Use-Case: Platzierungs-Ereignisse anwenden und Rohre einfügen.

use crate::app::placement::{transition, PlacementEffect, PlacementEvent, PlacementState};
use crate::app::AppState;
use crate::core::{InsertOutcome, PipeId};

/// Ergebnis eines Bestätigens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Rohr eingefügt
    Added(PipeId),
    /// Identische Strecke existierte bereits; nichts eingefügt
    Duplicate,
    /// Kein Anker oder keine Richtung gewählt
    Disabled,
}

/// Wendet ein Ereignis auf die Platzierungs-Maschine an.
///
/// Liefert bei `Commit` das Ergebnis des Einfügens, sonst `None`.
pub fn apply_event(state: &mut AppState, event: PlacementEvent) -> Option<CommitOutcome> {
    let step = transition(&state.placement, event, &state.structure);
    let length = state.placement.length();
    state.placement = step.next;

    match step.effect {
        PlacementEffect::None => None,
        PlacementEffect::CommitDisabled => {
            log::debug!("Bestätigen ohne Anker/Richtung ignoriert");
            Some(CommitOutcome::Disabled)
        }
        PlacementEffect::CommitPipe {
            start,
            axis,
            length: pipe_length,
        } => {
            let outcome = match state.structure.insert(start, axis, pipe_length) {
                InsertOutcome::Added(id) => {
                    log::info!(
                        "Rohr {} eingefügt: {} cm ab {} entlang {:?}",
                        id,
                        pipe_length.centimeters(),
                        start,
                        axis
                    );
                    CommitOutcome::Added(id)
                }
                InsertOutcome::Duplicate(existing) => {
                    log::debug!("Doppeltes Rohr verworfen (existiert als {})", existing);
                    CommitOutcome::Duplicate
                }
            };
            if state.options.keep_tool_after_commit {
                if let Some(length) = length {
                    state.placement = PlacementState::Idle { length };
                }
            }
            Some(outcome)
        }
    }
}

/// Bestätigt die laufende Platzierung.
pub fn commit(state: &mut AppState) -> CommitOutcome {
    apply_event(state, PlacementEvent::Commit).unwrap_or(CommitOutcome::Disabled)
}

/// Gleicht eine laufende Session nach einer Strukturänderung ab.
pub fn refresh_session(state: &mut AppState) {
    if let PlacementState::AnchorSelected(session) = &state.placement {
        state.placement = PlacementState::AnchorSelected(session.refreshed(&state.structure));
    }
}

/// Beendet jede laufende Platzierung.
pub fn cancel(state: &mut AppState) {
    state.placement = PlacementState::Inactive;
}
