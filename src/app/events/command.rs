use crate::core::{GridPoint, PipeId, PipeLength};
use crate::generator::PartsBudget;
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Platzierung ===
    /// Längen-Werkzeug aktivieren
    StartPlacement { length: PipeLength },
    /// Anker für die laufende Platzierung setzen
    SelectAnchor { point: GridPoint },
    /// Richtung zyklisch weiterschalten
    CycleDirection,
    /// Rohr einfügen und Session beenden
    CommitPlacement,
    /// Platzierung abbrechen
    CancelPlacement,

    // === Selektion & Editing ===
    /// Rohr selektieren
    SelectPipe { id: PipeId },
    /// Selektion aufheben
    ClearSelection,
    /// Selektiertes Rohr entfernen
    DeleteSelectedPipe,

    // === Generatoren ===
    /// Struktur durch budgetierte Quader ersetzen
    GenerateBoxes { budget: PartsBudget },
    /// Struktur durch das Stufen-Gerüst ersetzen
    GenerateTiered,

    // === Export ===
    /// Snapshot rendern und als PNG schreiben
    ExportSnapshot { path: PathBuf },

    // === Optionen & Anwendungssteuerung ===
    /// Optionen übernehmen und persistieren
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und persistieren
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Stabiler Kurzname für Log und Bericht.
    pub fn kind(&self) -> &'static str {
        match self {
            AppCommand::StartPlacement { .. } => "start_placement",
            AppCommand::SelectAnchor { .. } => "select_anchor",
            AppCommand::CycleDirection => "cycle_direction",
            AppCommand::CommitPlacement => "commit_placement",
            AppCommand::CancelPlacement => "cancel_placement",
            AppCommand::SelectPipe { .. } => "select_pipe",
            AppCommand::ClearSelection => "clear_selection",
            AppCommand::DeleteSelectedPipe => "delete_selected_pipe",
            AppCommand::GenerateBoxes { .. } => "generate_boxes",
            AppCommand::GenerateTiered => "generate_tiered",
            AppCommand::ExportSnapshot { .. } => "export_snapshot",
            AppCommand::ApplyOptions { .. } => "apply_options",
            AppCommand::ResetOptions => "reset_options",
            AppCommand::RequestExit => "request_exit",
        }
    }
}
