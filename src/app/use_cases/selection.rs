//! Use-Case: Rohr-Selektion.

use crate::app::AppState;
use crate::core::PipeId;

/// Selektiert ein Rohr; unbekannte IDs heben die Selektion auf.
pub fn select_pipe(state: &mut AppState, id: PipeId) {
    if state.structure.get(id).is_some() {
        state.selection.select(id);
    } else {
        log::debug!("Rohr {} existiert nicht, Selektion aufgehoben", id);
        state.selection.clear();
    }
}

/// Hebt die aktuelle Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}
