//! Verbindungsgraph: Knotengrade und Verbinder-Klassifikation.
//!
//! Reine Funktionen über der `Structure`. Wird bei jeder Beobachtung neu
//! berechnet und nie separat gespeichert.

use super::grid::GridPoint;
use super::pipe::PipeLength;
use super::structure::Structure;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Verbinder-Typ eines Knotens, abgeleitet aus dem Grad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorKind {
    /// Grad 0 oder 1: freier Anker, kein Verbinder nötig
    FreeAnchor,
    /// Grad 2: gerader Verbinder oder Winkel
    TwoWay,
    /// Grad 3: T-Stück
    ThreeWay,
    /// Grad ≥ 4: Kreuz
    FourWay,
}

impl ConnectorKind {
    /// Klassifiziert einen Knotengrad.
    pub fn classify(degree: u32) -> Self {
        match degree {
            0 | 1 => ConnectorKind::FreeAnchor,
            2 => ConnectorKind::TwoWay,
            3 => ConnectorKind::ThreeWay,
            _ => ConnectorKind::FourWay,
        }
    }
}

/// Ein Knoten des Verbindungsgraphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionNode {
    /// Rasterpunkt
    pub point: GridPoint,
    /// Anzahl der hier zusammentreffenden Rohr-Endpunkte
    pub degree: u32,
    /// Verbinder-Typ
    pub kind: ConnectorKind,
}

/// Berechnet den Grad jedes Rohr-Endpunkts.
///
/// Jedes Rohr zählt +1 an Anfang und Ende. Der Ursprung ist immer enthalten
/// (ggf. mit Grad 0), damit eine Platzierung dort beginnen kann.
/// Reihenfolge: erstes Auftreten.
pub fn node_degrees(structure: &Structure) -> IndexMap<GridPoint, u32> {
    let mut degrees: IndexMap<GridPoint, u32> = IndexMap::new();
    for pipe in structure.iter() {
        for point in pipe.endpoints() {
            *degrees.entry(point).or_insert(0) += 1;
        }
    }
    degrees.entry(GridPoint::ORIGIN).or_insert(0);
    degrees
}

/// Alle Knoten mit Grad und Klassifikation.
pub fn connection_nodes(structure: &Structure) -> Vec<ConnectionNode> {
    node_degrees(structure)
        .into_iter()
        .map(|(point, degree)| ConnectionNode {
            point,
            degree,
            kind: ConnectorKind::classify(degree),
        })
        .collect()
}

/// Stückliste: Rohre nach Länge, Knoten nach Verbinder-Typ.
///
/// Rein beobachtend (Anzeige, Export). Darf nie in die Platzierungslogik
/// zurückfließen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartsSummary {
    /// Anzahl 20-cm-Rohre
    pub pipes_20: usize,
    /// Anzahl 40-cm-Rohre
    pub pipes_40: usize,
    /// Knoten mit Grad 0 oder 1
    pub free_anchors: usize,
    /// 2-Wege-Verbinder
    pub two_way: usize,
    /// 3-Wege-Verbinder
    pub three_way: usize,
    /// 4-Wege-Verbinder (oder mehr)
    pub four_way: usize,
}

impl PartsSummary {
    /// Berechnet die Stückliste aus der aktuellen Struktur.
    pub fn from_structure(structure: &Structure) -> Self {
        let mut summary = Self::default();
        for pipe in structure.iter() {
            match pipe.length {
                PipeLength::Short => summary.pipes_20 += 1,
                PipeLength::Long => summary.pipes_40 += 1,
            }
        }
        for degree in node_degrees(structure).values() {
            match ConnectorKind::classify(*degree) {
                ConnectorKind::FreeAnchor => summary.free_anchors += 1,
                ConnectorKind::TwoWay => summary.two_way += 1,
                ConnectorKind::ThreeWay => summary.three_way += 1,
                ConnectorKind::FourWay => summary.four_way += 1,
            }
        }
        summary
    }

    /// Gesamtzahl verbrauchter Verbinder (freie Anker zählen nicht).
    pub fn connector_count(&self) -> usize {
        self.two_way + self.three_way + self.four_way
    }

    /// Gesamtzahl der Rohre.
    pub fn pipe_count(&self) -> usize {
        self.pipes_20 + self.pipes_40
    }
}
