//! Core-Domänentypen: Rastergeometrie, Rohre, Struktur, Verbindungsgraph, Spatial-Index.

pub mod connection_graph;
mod error;
pub mod grid;
/// Rohr-Datenmodell
///
/// - Pipe: starres Rohrstück in kanonischer Form
/// - PipeLength: 20 cm oder 40 cm
pub mod pipe;
pub mod spatial;
pub mod structure;

pub use connection_graph::{
    connection_nodes, node_degrees, ConnectionNode, ConnectorKind, PartsSummary,
};
pub use error::LatticeError;
pub use grid::{Axis, Direction, GridPoint, Sign, GRID_LIMIT, GRID_UNIT_M};
pub use pipe::{Pipe, PipeId, PipeLength, SegmentKey};
pub use spatial::{NodeIndex, SpatialMatch};
pub use structure::{InsertOutcome, Structure};
