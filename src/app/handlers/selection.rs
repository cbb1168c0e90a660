//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PipeId;

/// Selektiert ein Rohr per ID.
pub fn select_pipe(state: &mut AppState, id: PipeId) {
    use_cases::selection::select_pipe(state, id);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
