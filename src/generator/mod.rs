//! Struktur-Generatoren: erzeugen komplette Rohrlisten als reine Daten.
//!
//! Die Ausgabe ersetzt die aktuelle Struktur; die Mutation erfolgt zentral
//! im Use-Case `generate`.

/// Budgetierte Quader-Rahmen.
pub mod boxes;
mod budget;
/// Festes Stufen-Gerüst.
pub mod tiered;

pub use boxes::{box_count, box_origins, build_structure_by_counts, BOX_STEP};
pub use budget::PartsBudget;
pub use tiered::build_tiered_scaffold;

use crate::core::{Axis, GridPoint, Pipe, PipeId, PipeLength};

/// Sammelt erzeugte Rohre mit fortlaufenden IDs.
pub(crate) struct PipeListBuilder {
    pipes: Vec<Pipe>,
    next_id: PipeId,
}

impl PipeListBuilder {
    pub(crate) fn new() -> Self {
        Self {
            pipes: Vec::new(),
            next_id: 1,
        }
    }

    /// Fügt ein einzelnes Rohr hinzu.
    pub(crate) fn push(&mut self, start: GridPoint, axis: Axis, length: PipeLength) {
        self.pipes.push(Pipe::new(self.next_id, start, axis, length));
        self.next_id += 1;
    }

    /// Belegt eine Strecke von `units` Einheiten mit 40-cm-Rohren und
    /// einem abschließenden 20-cm-Rohr für einen Rest von 2.
    pub(crate) fn push_run(&mut self, start: GridPoint, axis: Axis, units: i32) {
        debug_assert!(units % 2 == 0, "Strecke muss gerade Länge haben");
        let mut cursor = start;
        let mut remaining = units;
        while remaining >= PipeLength::Long.units() {
            self.push(cursor, axis, PipeLength::Long);
            cursor = cursor.offset(axis, PipeLength::Long.units());
            remaining -= PipeLength::Long.units();
        }
        if remaining == PipeLength::Short.units() {
            self.push(cursor, axis, PipeLength::Short);
        }
    }

    pub(crate) fn finish(self) -> Vec<Pipe> {
        self.pipes
    }
}
