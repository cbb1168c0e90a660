//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod export;
pub mod generate;
pub mod placement;
pub mod selection;
