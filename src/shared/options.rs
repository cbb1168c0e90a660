//! Zentrale Konfiguration für den Pipe Lattice Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::keys::KeyBindings;
use crate::core::{ConnectorKind, PipeLength};
use serde::{Deserialize, Serialize};

// ── Picking ─────────────────────────────────────────────────────────

/// Snap-Radius (Meter): Klick innerhalb dieses Radius rastet auf einen existierenden Knoten ein.
pub const SNAP_RADIUS_M: f32 = 0.08;

// ── Verbinder-Rendering ────────────────────────────────────────────

/// Darstellungsgröße eines Verbinders in Metern.
pub const CONNECTOR_SIZE_M: f32 = 0.04;
/// Freier Anker (RGBA: neutral, halbtransparent).
pub const CONNECTOR_COLOR_FREE: [f32; 4] = [0.85, 0.85, 0.85, 0.35];
/// 2-Wege-Verbinder (RGBA: Grün).
pub const CONNECTOR_COLOR_TWO_WAY: [f32; 4] = [0.3, 0.8, 0.4, 1.0];
/// 3-Wege-Verbinder (RGBA: Bernstein).
pub const CONNECTOR_COLOR_THREE_WAY: [f32; 4] = [1.0, 0.7, 0.1, 1.0];
/// 4-Wege-Verbinder und mehr (RGBA: Rot).
pub const CONNECTOR_COLOR_FOUR_WAY: [f32; 4] = [0.9, 0.2, 0.2, 1.0];

// ── Rohr-Rendering ─────────────────────────────────────────────────

/// Rohrdurchmesser in Metern.
pub const PIPE_THICKNESS_M: f32 = 0.02;
/// Farbe der 20-cm-Rohre (RGBA: Hellgrau).
pub const PIPE_COLOR_SHORT: [f32; 4] = [0.75, 0.78, 0.82, 1.0];
/// Farbe der 40-cm-Rohre (RGBA: Stahlblau).
pub const PIPE_COLOR_LONG: [f32; 4] = [0.45, 0.6, 0.8, 1.0];
/// Farbe des selektierten Rohrs (RGBA: Magenta).
pub const PIPE_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe der Platzierungs-Vorschau (RGBA: Cyan, halbtransparent).
pub const GHOST_COLOR: [f32; 4] = [0.0, 0.8, 1.0, 0.5];
/// Hintergrundfarbe (RGBA: Dunkelgrau).
pub const BACKGROUND_COLOR: [f32; 4] = [0.12, 0.12, 0.14, 1.0];

// ── Export ──────────────────────────────────────────────────────────

/// Exportierte Bildbreite in Pixeln.
pub const EXPORT_WIDTH_PX: u32 = 1280;
/// Exportierte Bildhöhe in Pixeln.
pub const EXPORT_HEIGHT_PX: u32 = 720;

/// Einstellungen für den Bild-Export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportOptions {
    /// Titelzeile im Bild
    pub title: String,
    /// Bildbreite in Pixeln
    pub width_px: u32,
    /// Bildhöhe in Pixeln
    pub height_px: u32,
    /// Präfix des Standard-Dateinamens
    pub file_prefix: String,
    /// Linienstärke der Rohre im Snapshot
    pub pipe_width_px: u32,
    /// Kantenlänge der Verbinder-Quadrate im Snapshot
    pub connector_size_px: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: "Rohr-Gitter".to_string(),
            width_px: EXPORT_WIDTH_PX,
            height_px: EXPORT_HEIGHT_PX,
            file_prefix: "pipe-lattice".to_string(),
            pipe_width_px: 3,
            connector_size_px: 9,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `pipe_lattice_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Verbinder ───────────────────────────────────────────────
    /// Verbinder-Größe in Metern
    pub connector_size_m: f32,
    /// Farbe freier Anker (Grad 0/1)
    pub connector_color_free: [f32; 4],
    /// Farbe der 2-Wege-Verbinder
    pub connector_color_two_way: [f32; 4],
    /// Farbe der 3-Wege-Verbinder
    pub connector_color_three_way: [f32; 4],
    /// Farbe der 4-Wege-Verbinder
    pub connector_color_four_way: [f32; 4],

    // ── Rohre ───────────────────────────────────────────────────
    /// Rohrdurchmesser in Metern
    pub pipe_thickness_m: f32,
    /// Farbe der 20-cm-Rohre
    pub pipe_color_short: [f32; 4],
    /// Farbe der 40-cm-Rohre
    pub pipe_color_long: [f32; 4],
    /// Farbe des selektierten Rohrs
    pub pipe_color_selected: [f32; 4],
    /// Farbe der Platzierungs-Vorschau
    pub ghost_color: [f32; 4],
    /// Hintergrundfarbe
    pub background_color: [f32; 4],

    // ── Platzierung ─────────────────────────────────────────────
    /// Snap-Radius in Metern
    pub snap_radius_m: f32,
    /// Längen-Werkzeug nach dem Bestätigen aktiv lassen
    #[serde(default)]
    pub keep_tool_after_commit: bool,
    /// Tastenbelegung
    #[serde(default)]
    pub key_bindings: KeyBindings,

    // ── Export ──────────────────────────────────────────────────
    /// Bild-Export
    #[serde(default)]
    pub export: ExportOptions,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            connector_size_m: CONNECTOR_SIZE_M,
            connector_color_free: CONNECTOR_COLOR_FREE,
            connector_color_two_way: CONNECTOR_COLOR_TWO_WAY,
            connector_color_three_way: CONNECTOR_COLOR_THREE_WAY,
            connector_color_four_way: CONNECTOR_COLOR_FOUR_WAY,

            pipe_thickness_m: PIPE_THICKNESS_M,
            pipe_color_short: PIPE_COLOR_SHORT,
            pipe_color_long: PIPE_COLOR_LONG,
            pipe_color_selected: PIPE_COLOR_SELECTED,
            ghost_color: GHOST_COLOR,
            background_color: BACKGROUND_COLOR,

            snap_radius_m: SNAP_RADIUS_M,
            keep_tool_after_commit: false,
            key_bindings: KeyBindings::default(),

            export: ExportOptions::default(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("pipe-lattice"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("pipe_lattice_editor.toml")
    }

    /// Feste Farbzuordnung der Verbinder-Typen.
    pub fn connector_color(&self, kind: ConnectorKind) -> [f32; 4] {
        match kind {
            ConnectorKind::FreeAnchor => self.connector_color_free,
            ConnectorKind::TwoWay => self.connector_color_two_way,
            ConnectorKind::ThreeWay => self.connector_color_three_way,
            ConnectorKind::FourWay => self.connector_color_four_way,
        }
    }

    /// Farbe eines Rohrs nach Länge.
    pub fn pipe_color(&self, length: PipeLength) -> [f32; 4] {
        match length {
            PipeLength::Short => self.pipe_color_short,
            PipeLength::Long => self.pipe_color_long,
        }
    }
}
