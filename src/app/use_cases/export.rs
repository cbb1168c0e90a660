//! Use-Case: Snapshot der aktuellen Szene als beschriftetes PNG speichern.

use crate::app::{render_scene, AppState};
use crate::export::{self, ExportAnnotation};
use crate::render;
use anyhow::Result;
use std::path::Path;

/// Rendert, beschriftet und schreibt den Snapshot nach `path`.
pub fn export_snapshot(state: &AppState, path: &Path) -> Result<()> {
    let scene = render_scene::build(state);
    let frame = render::render_snapshot(&scene);
    let annotation = ExportAnnotation::new(
        &state.options.export.title,
        chrono::Local::now(),
        state.parts_summary(),
    );
    let image = export::compose(&frame, &annotation);
    export::write_png(path, &image)?;

    log::info!(
        "Snapshot exportiert: {} ({}×{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}
