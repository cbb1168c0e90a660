//! Handler für den Bild-Export.

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Exportiert einen Snapshot. Fehler werden geloggt und nicht weitergereicht.
pub fn export_snapshot(state: &mut AppState, path: PathBuf) {
    match use_cases::export::export_snapshot(state, &path) {
        Ok(()) => state.last_export = Some(path),
        Err(e) => log::warn!("Export nach {} fehlgeschlagen: {:#}", path.display(), e),
    }
}
