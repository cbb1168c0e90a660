//! Spatial-Index (KD-Tree) über den Knoten für das Anker-Picking.

use glam::Vec3;
use kiddo::{KdTree, SquaredEuclidean};

use super::connection_graph::node_degrees;
use super::grid::GridPoint;
use super::structure::Structure;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Gefundener Knoten
    pub point: GridPoint,
    /// Euklidische Distanz zum Suchpunkt (Meter)
    pub distance: f32,
}

/// Read-only Index über allen Knoten einer Struktur (inkl. Ursprung).
#[derive(Debug, Clone)]
pub struct NodeIndex {
    tree: KdTree<f64, 3>,
    points: Vec<GridPoint>,
}

impl NodeIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 3]>::new()).into(),
            points: Vec::new(),
        }
    }

    /// Baut den Index aus den aktuellen Knoten der Struktur.
    pub fn from_structure(structure: &Structure) -> Self {
        let points: Vec<GridPoint> = node_degrees(structure).into_keys().collect();
        Self::from_points(points)
    }

    /// Baut den Index aus einer Punktliste.
    pub fn from_points(points: Vec<GridPoint>) -> Self {
        let entries: Vec<[f64; 3]> = points
            .iter()
            .map(|p| {
                let w = p.to_world();
                [w.x as f64, w.y as f64, w.z as f64]
            })
            .collect();
        let tree: KdTree<f64, 3> = (&entries).into();
        Self { tree, points }
    }

    /// Anzahl indexierter Knoten.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn kein Knoten im Index liegt.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Nächster Knoten zur Weltposition.
    pub fn nearest(&self, query: Vec3) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }
        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64, query.z as f64]);
        let point = *self.points.get(result.item as usize)?;
        Some(SpatialMatch {
            point,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Löst einen Klick auf: existierender Knoten im Snap-Radius, sonst
    /// der eingerastete Rasterpunkt.
    pub fn resolve_anchor(&self, world_pos: Vec3, snap_radius: f32) -> GridPoint {
        match self.nearest(world_pos) {
            Some(hit) if hit.distance <= snap_radius => hit.point,
            _ => GridPoint::snap(world_pos),
        }
    }
}
