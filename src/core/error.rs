//! Fehlertypen der Kern-Domäne.

use thiserror::Error;

/// Fehler bei der Umwandlung roher Eingaben in Domänentypen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatticeError {
    /// Nur 2 (20 cm) und 4 (40 cm) Rastereinheiten sind gültige Rohrlängen.
    #[error("ungültige Rohrlänge: {0} Rastereinheiten (erlaubt: 2 oder 4)")]
    InvalidPipeLength(u32),
    /// Tastenname ist nicht bekannt.
    #[error("unbekannte Taste: {0:?}")]
    UnknownKey(String),
}
