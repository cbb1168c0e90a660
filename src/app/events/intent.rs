use crate::core::{GridPoint, PipeId, PipeLength};
use crate::shared::{EditorOptions, KeyCode};
use glam::Vec3;
use std::path::PathBuf;

/// Ergebnis einer Pick-Abfrage des Hosts (Strahl gegen Szene).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickHit {
    /// Treffer auf einen Knoten / Anker
    Anchor(GridPoint),
    /// Treffer auf ein bestätigtes Rohr
    Pipe(PipeId),
    /// Treffer auf die Arbeitsebene (Weltkoordinaten in Metern)
    Surface(Vec3),
    /// Kein Treffer
    Nothing,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Längen-Werkzeug gewählt
    StartPlacementRequested { length: PipeLength },
    /// Pick-Ergebnis aus dem Viewport
    ViewportPicked { hit: PickHit },
    /// Nächste freie Richtung
    CycleDirectionRequested,
    /// Platzierung bestätigen
    CommitRequested,
    /// Platzierung abbrechen
    CancelRequested,
    /// Selektiertes Rohr löschen
    DeleteSelectedRequested,
    /// Taste gedrückt (über Tastenbelegung aufgelöst)
    KeyPressed { key: KeyCode },
    /// Quader aus numerischem Teile-Budget erzeugen
    GenerateFromCountsRequested { count_20: i64, count_40: i64 },
    /// Quader aus Text-Eingaben erzeugen (nicht-numerisch = 0)
    GenerateFromTextRequested { count_20: String, count_40: String },
    /// Stufen-Gerüst erzeugen
    GenerateTieredRequested,
    /// Snapshot als PNG exportieren
    ExportRequested { path: PathBuf },
    /// Optionen übernehmen und speichern
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
