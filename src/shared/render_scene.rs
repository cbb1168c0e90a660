//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{ConnectionNode, Direction, GridPoint, Pipe, PipeId};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Alle bestätigten Rohre in Einfüge-Reihenfolge
    pub pipes: Vec<Pipe>,
    /// Knoten mit Grad und Verbinder-Typ (inkl. Ursprung)
    pub nodes: Vec<ConnectionNode>,
    /// Vorschau-Rohr der laufenden Platzierung
    pub ghost: Option<Pipe>,
    /// ID des selektierten Rohrs
    pub selected_pipe_id: Option<PipeId>,
    /// Gewählter Anker der laufenden Platzierung
    pub anchor: Option<GridPoint>,
    /// Freie Richtungen am Anker (für Richtungs-Pfeile)
    pub available_directions: Vec<Direction>,
    /// Änderungszähler der Struktur zum Zeitpunkt des Aufbaus
    pub structure_version: u64,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Zeichenfarbe eines Rohrs (Selektion überschreibt die Längenfarbe).
    pub fn pipe_color(&self, pipe: &Pipe) -> [f32; 4] {
        if self.selected_pipe_id == Some(pipe.id) {
            self.options.pipe_color_selected
        } else {
            self.options.pipe_color(pipe.length)
        }
    }

    /// Zeichenfarbe eines Knotens nach Verbinder-Typ.
    pub fn node_color(&self, node: &ConnectionNode) -> [f32; 4] {
        self.options.connector_color(node.kind)
    }
}
