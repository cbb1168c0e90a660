//! Handler für die Struktur-Generatoren.

use crate::app::use_cases;
use crate::app::AppState;
use crate::generator::PartsBudget;

/// Ersetzt die Struktur durch budgetierte Quader.
pub fn generate_boxes(state: &mut AppState, budget: PartsBudget) {
    use_cases::generate::replace_with_boxes(state, budget);
}

/// Ersetzt die Struktur durch das Stufen-Gerüst.
pub fn generate_tiered(state: &mut AppState) {
    use_cases::generate::replace_with_tiered(state);
}
