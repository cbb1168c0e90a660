//! Handler für die Rohr-Platzierung.

use crate::app::placement::PlacementEvent;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{GridPoint, PipeLength};

/// Aktiviert ein Längen-Werkzeug (verwirft eine laufende Session).
pub fn start(state: &mut AppState, length: PipeLength) {
    use_cases::placement::apply_event(state, PlacementEvent::StartPlacement(length));
    log::info!("Werkzeug: {} cm", length.centimeters());
}

/// Setzt den Anker der laufenden Platzierung.
pub fn select_anchor(state: &mut AppState, point: GridPoint) {
    use_cases::placement::apply_event(state, PlacementEvent::SelectAnchor(point));
    log::debug!("{}", state.placement.status_text());
}

/// Schaltet zur nächsten freien Richtung.
pub fn cycle_direction(state: &mut AppState) {
    use_cases::placement::apply_event(state, PlacementEvent::CycleDirection);
    log::debug!("{}", state.placement.status_text());
}

/// Bestätigt die Platzierung und merkt sich das Ergebnis.
pub fn commit(state: &mut AppState) {
    let outcome = use_cases::placement::commit(state);
    state.last_commit = Some(outcome);
}

/// Bricht die Platzierung ab.
pub fn cancel(state: &mut AppState) {
    use_cases::placement::apply_event(state, PlacementEvent::Cancel);
}
