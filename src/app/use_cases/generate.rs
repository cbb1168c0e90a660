//! Use-Case: Struktur durch Generator-Ausgabe ersetzen.

use crate::app::use_cases::placement;
use crate::app::AppState;
use crate::core::Pipe;
use crate::generator::{self, PartsBudget};

/// Ersetzt die Struktur durch budgetierte Quader-Rahmen.
pub fn replace_with_boxes(state: &mut AppState, budget: PartsBudget) {
    let boxes = generator::box_count(budget);
    let pipes = generator::build_structure_by_counts(budget);
    log::info!(
        "Quader-Generator: {} × 20 cm, {} × 40 cm → {} Quader, {} Rohre",
        budget.count_20,
        budget.count_40,
        boxes,
        pipes.len()
    );
    replace_structure(state, pipes);
}

/// Ersetzt die Struktur durch das Stufen-Gerüst.
pub fn replace_with_tiered(state: &mut AppState) {
    let pipes = generator::build_tiered_scaffold();
    log::info!("Stufen-Gerüst: {} Rohre", pipes.len());
    replace_structure(state, pipes);
}

/// IDs werden neu vergeben: laufende Platzierung und Selektion verfallen.
fn replace_structure(state: &mut AppState, pipes: Vec<Pipe>) {
    placement::cancel(state);
    state.selection.clear();
    let duplicates = state.structure.replace_all(pipes);
    if duplicates > 0 {
        log::debug!("{} doppelte Rohre beim Ersetzen verworfen", duplicates);
    }
}
