//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `export` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod keys;
pub mod options;
mod render_scene;

pub use keys::{KeyAction, KeyBindings, KeyCode};
pub use options::{EditorOptions, ExportOptions, SNAP_RADIUS_M};
pub use render_scene::RenderScene;
