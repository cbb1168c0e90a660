use crate::app::placement::PlacementState;
use crate::app::use_cases::placement::CommitOutcome;
use crate::app::CommandLog;
use crate::core::{PartsSummary, Structure};
use crate::shared::EditorOptions;
use std::path::PathBuf;

use super::SelectionState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Bestätigte Rohre (einzige Datenquelle)
    pub structure: Structure,
    /// Zustand der Platzierungs-Maschine
    pub placement: PlacementState,
    /// Selection-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Tastenbelegung)
    pub options: EditorOptions,
    /// Ergebnis des letzten Bestätigens
    pub last_commit: Option<CommitOutcome>,
    /// Pfad des letzten erfolgreichen Exports
    pub last_export: Option<PathBuf>,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            structure: Structure::new(),
            placement: PlacementState::Inactive,
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            last_commit: None,
            last_export: None,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Rohre zurück (für UI-Anzeige)
    pub fn pipe_count(&self) -> usize {
        self.structure.len()
    }

    /// Stückliste der aktuellen Struktur.
    pub fn parts_summary(&self) -> PartsSummary {
        PartsSummary::from_structure(&self.structure)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
