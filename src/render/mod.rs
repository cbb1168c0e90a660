//! Software-Rendering der `RenderScene` für den Bild-Export.
//!
//! Konsumiert ausschließlich den `shared::RenderScene`-Vertrag; kein Zugriff
//! auf den AppState.

pub mod snapshot;
pub mod text;

pub use snapshot::{render as render_snapshot, Projection};
