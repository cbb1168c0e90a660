//! Gitter-Geometrie: ganzzahlige Rasterpunkte, Achsen und Richtungen.
//!
//! Eine Rastereinheit entspricht 10 cm. Alle Rohr-Endpunkte liegen auf
//! Rasterpunkten, daher rechnet die Geometrie ausschliesslich mit `i32`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Kantenlaenge einer Rastereinheit in Metern (10 cm).
pub const GRID_UNIT_M: f32 = 0.1;

/// Betragsgrenze eingerasteter Koordinaten (100 km).
pub const GRID_LIMIT: i32 = 1_000_000;

/// Rasterpunkt (x, y, z) in Rastereinheiten.
///
/// Dient direkt als Hash-Key fuer Knoten-Maps: gleiche Tupel sind derselbe
/// physische Punkt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct GridPoint {
    /// X-Koordinate
    pub x: i32,
    /// Y-Koordinate
    pub y: i32,
    /// Z-Koordinate (Hoehe)
    pub z: i32,
}

impl GridPoint {
    /// Ursprung (0, 0, 0), an dem eine Platzierung immer beginnen kann.
    pub const ORIGIN: GridPoint = GridPoint { x: 0, y: 0, z: 0 };

    /// Erstellt einen neuen Rasterpunkt.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Verschiebt den Punkt um `amount` Einheiten entlang `axis`.
    pub fn offset(self, axis: Axis, amount: i32) -> Self {
        let [dx, dy, dz] = axis.unit();
        Self {
            x: self.x.saturating_add(dx * amount),
            y: self.y.saturating_add(dy * amount),
            z: self.z.saturating_add(dz * amount),
        }
    }

    /// Geht `units` Einheiten in die vorzeichenbehaftete Richtung.
    pub fn step(self, direction: Direction, units: i32) -> Self {
        self.offset(direction.axis, direction.sign.factor() * units)
    }

    /// Weltposition in Metern.
    pub fn to_world(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32) * GRID_UNIT_M
    }

    /// Rastet eine Weltposition auf den naechsten Rasterpunkt ein.
    ///
    /// Koordinaten werden auf `±GRID_LIMIT` begrenzt.
    pub fn snap(world: Vec3) -> Self {
        let limit = GRID_LIMIT as f32;
        let scaled = (world / GRID_UNIT_M).round().clamp(Vec3::splat(-limit), Vec3::splat(limit));
        Self {
            x: scaled.x as i32,
            y: scaled.y as i32,
            z: scaled.z as i32,
        }
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Raumachse eines Rohrs (nur achsparallel, keine Diagonalen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// X-Achse
    X,
    /// Y-Achse
    Y,
    /// Z-Achse (vertikal)
    Z,
}

impl Axis {
    /// Alle Achsen in fester Reihenfolge.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Einheitsvektor der Achse.
    pub const fn unit(self) -> [i32; 3] {
        match self {
            Axis::X => [1, 0, 0],
            Axis::Y => [0, 1, 0],
            Axis::Z => [0, 0, 1],
        }
    }
}

/// Vorzeichen einer Richtung entlang einer Achse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// In Achsrichtung
    Positive,
    /// Gegen die Achsrichtung
    Negative,
}

impl Sign {
    /// +1 oder -1.
    pub const fn factor(self) -> i32 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
}

/// Vorzeichenbehaftete Achsrichtung (eine der 6 Richtungen eines Knotens).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    /// Achse
    pub axis: Axis,
    /// Vorzeichen
    pub sign: Sign,
}

impl Direction {
    /// Feste Aufzaehlungsreihenfolge: X+, X-, Y+, Y-, Z+, Z-.
    pub const ALL: [Direction; 6] = [
        Direction::new(Axis::X, Sign::Positive),
        Direction::new(Axis::X, Sign::Negative),
        Direction::new(Axis::Y, Sign::Positive),
        Direction::new(Axis::Y, Sign::Negative),
        Direction::new(Axis::Z, Sign::Positive),
        Direction::new(Axis::Z, Sign::Negative),
    ];

    /// Erstellt eine Richtung.
    pub const fn new(axis: Axis, sign: Sign) -> Self {
        Self { axis, sign }
    }

    /// Positive Richtung entlang `axis`.
    pub const fn positive(axis: Axis) -> Self {
        Self::new(axis, Sign::Positive)
    }

    /// Negative Richtung entlang `axis`.
    pub const fn negative(axis: Axis) -> Self {
        Self::new(axis, Sign::Negative)
    }

    /// Gegenrichtung.
    pub const fn opposite(self) -> Self {
        let sign = match self.sign {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        };
        Self::new(self.axis, sign)
    }

    /// Kurzbezeichnung fuer Statustexte ("X+", "Z-").
    pub fn label(self) -> &'static str {
        match (self.axis, self.sign) {
            (Axis::X, Sign::Positive) => "X+",
            (Axis::X, Sign::Negative) => "X-",
            (Axis::Y, Sign::Positive) => "Y+",
            (Axis::Y, Sign::Negative) => "Y-",
            (Axis::Z, Sign::Positive) => "Z+",
            (Axis::Z, Sign::Negative) => "Z-",
        }
    }
}
