//! Use-Case: Selektiertes Rohr löschen.

use crate::app::AppState;
use crate::core::Pipe;

/// Entfernt das selektierte Rohr und hebt die Selektion auf.
///
/// Ohne Selektion (oder bei veralteter ID) passiert nichts außer dem
/// Aufheben der Selektion.
pub fn delete_selected_pipe(state: &mut AppState) -> Option<Pipe> {
    let Some(id) = state.selection.selected_pipe_id else {
        log::debug!("Nichts zum Löschen selektiert");
        return None;
    };

    let removed = state.structure.remove(id);
    state.selection.clear();
    match &removed {
        Some(pipe) => log::info!("Rohr {} gelöscht ({} cm)", id, pipe.length.centimeters()),
        None => log::debug!("Selektiertes Rohr {} existiert nicht mehr", id),
    }
    removed
}
