//! Repräsentiert ein starres, achsparalleles Rohrstück.

use super::grid::{Axis, Direction, GridPoint, Sign};
use super::LatticeError;
use serde::{Deserialize, Serialize};

/// Eindeutige Rohr-ID innerhalb einer Struktur.
pub type PipeId = u64;

/// Physische Strecke eines Rohrs ohne ID (kanonische Form).
pub type SegmentKey = (GridPoint, Axis, PipeLength);

/// Unterstützte Rohrlängen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PipeLength {
    /// 20 cm = 2 Rastereinheiten
    Short,
    /// 40 cm = 4 Rastereinheiten
    #[default]
    Long,
}

impl PipeLength {
    /// Länge in Rastereinheiten.
    pub const fn units(self) -> i32 {
        match self {
            PipeLength::Short => 2,
            PipeLength::Long => 4,
        }
    }

    /// Länge in Zentimetern (für Stücklisten).
    pub const fn centimeters(self) -> u32 {
        self.units() as u32 * 10
    }
}

impl TryFrom<u32> for PipeLength {
    type Error = LatticeError;

    fn try_from(units: u32) -> Result<Self, Self::Error> {
        match units {
            2 => Ok(PipeLength::Short),
            4 => Ok(PipeLength::Long),
            other => Err(LatticeError::InvalidPipeLength(other)),
        }
    }
}

/// Ein Rohr von `start` nach `start + axis * length`.
///
/// Gespeicherte Rohre sind immer in positiver Achsrichtung normalisiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipe {
    /// Rohr-ID
    pub id: PipeId,
    /// Anfangspunkt (kleinere Koordinate entlang `axis`)
    pub start: GridPoint,
    /// Achse
    pub axis: Axis,
    /// Länge
    pub length: PipeLength,
}

impl Pipe {
    /// Erstellt ein Rohr in kanonischer Form.
    pub fn new(id: PipeId, start: GridPoint, axis: Axis, length: PipeLength) -> Self {
        Self {
            id,
            start,
            axis,
            length,
        }
    }

    /// Erstellt ein Rohr, das am Anker in `direction` abgeht.
    ///
    /// Bei negativer Richtung wird der Anfangspunkt auf das andere Ende
    /// verlegt, sodass das gespeicherte Rohr identisch ist zu einem, das vom
    /// anderen Endpunkt in positiver Richtung gesetzt wurde.
    pub fn from_anchor(
        id: PipeId,
        anchor: GridPoint,
        direction: Direction,
        length: PipeLength,
    ) -> Self {
        let start = match direction.sign {
            Sign::Positive => anchor,
            Sign::Negative => anchor.offset(direction.axis, -length.units()),
        };
        Self::new(id, start, direction.axis, length)
    }

    /// Berechneter Endpunkt.
    pub fn end(&self) -> GridPoint {
        self.start.offset(self.axis, self.length.units())
    }

    /// Beide Endpunkte `[start, end]`.
    pub fn endpoints(&self) -> [GridPoint; 2] {
        [self.start, self.end()]
    }

    /// Schlüssel der physischen Strecke (unabhängig von der ID).
    pub fn segment_key(&self) -> SegmentKey {
        (self.start, self.axis, self.length)
    }
}
