//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod keymap;
pub mod placement;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Struktur, Platzierung, Selektion).
pub mod state;
pub mod use_cases;

pub use command_log::{CommandLog, CommandRecord};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PickHit};
pub use placement::{PlacementSession, PlacementState};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, SelectionState};
pub use use_cases::placement::CommitOutcome;
