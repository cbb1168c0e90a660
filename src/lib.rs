//! Pipe Lattice Editor Library.
//! Gitter-Modell, Platzierung und Generatoren als Library exportiert für Host, Tests und Benches.

pub mod app;
pub mod core;
pub mod export;
pub mod generator;
pub mod render;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommitOutcome, PickHit, PlacementState,
};
pub use core::{
    Axis, ConnectionNode, ConnectorKind, Direction, GridPoint, PartsSummary, Pipe, PipeId,
    PipeLength, Structure,
};
pub use generator::{build_structure_by_counts, build_tiered_scaffold, PartsBudget};
pub use shared::{EditorOptions, KeyCode, RenderScene};
