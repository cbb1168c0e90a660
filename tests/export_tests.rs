//! Integrationstests für den PNG-Export über den Controller.

use pipe_lattice_editor::{AppController, AppIntent, AppState};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pipe_lattice_{}_{}.png", name, std::process::id()))
}

#[test]
fn test_export_writes_png_with_configured_size() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::GenerateTieredRequested)
        .expect("Generierung sollte gelingen");

    let path = temp_path("export");
    controller
        .handle_intent(&mut state, AppIntent::ExportRequested { path: path.clone() })
        .expect("Export-Intent sollte ohne Fehler durchlaufen");

    assert_eq!(state.last_export.as_ref(), Some(&path));
    let image = image::open(&path).expect("PNG sollte lesbar sein").to_rgba8();
    assert_eq!(image.width(), state.options.export.width_px);
    assert_eq!(image.height(), state.options.export.height_px);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_export_of_empty_structure_still_succeeds() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = temp_path("empty");

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested { path: path.clone() })
        .expect("Export-Intent sollte ohne Fehler durchlaufen");

    assert_eq!(state.last_export.as_ref(), Some(&path));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_failed_export_is_not_fatal() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir()
        .join("pipe_lattice_gibt_es_nicht")
        .join("unterordner")
        .join("bild.png");

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested { path })
        .expect("Fehlschlag wird nur geloggt");

    assert!(state.last_export.is_none());
}
