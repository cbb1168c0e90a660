//! Budgetierter Generator: so viele vollständige Quader-Rahmen wie das
//! Teile-Budget erlaubt.
//!
//! Jede Kante ist 40 cm lang und wird entweder aus einem 40-cm-Rohr oder aus
//! zwei 20-cm-Rohren gebaut. 40-cm-Rohre werden zuerst verbraucht, in fester
//! Kantenreihenfolge: pro Quader 4 Boden-, 4 Deckel-, 4 Vertikalkanten,
//! Quader in Raster-Reihenfolge (x zuerst, dann y, dann z).

use super::{PartsBudget, PipeListBuilder};
use crate::core::{Axis, GridPoint, Pipe, PipeLength};

/// Kantenlänge eines Quaders in Rastereinheiten (40 cm).
pub const BOX_STEP: i32 = 4;
/// Kanten pro Quader.
pub const EDGES_PER_BOX: u64 = 12;
/// Abstand der Quader-Ursprünge pro Achse (keine gemeinsamen Kanten/Flächen).
const BOX_SPACING: i32 = 2 * BOX_STEP;

/// Anzahl vollständig baubarer Quader.
pub fn box_count(budget: PartsBudget) -> usize {
    (budget.edge_capacity() / EDGES_PER_BOX) as usize
}

/// Kleinstes `n` mit `n³ >= value`.
fn ceil_cbrt(value: usize) -> usize {
    let mut n = 0usize;
    while n.saturating_mul(n).saturating_mul(n) < value {
        n += 1;
    }
    n
}

/// Ursprungsecken der Quader in einem annähernd kubischen Raster.
///
/// `nx = ny = ceil(cbrt(boxes))`, `nz = ceil(boxes / (nx * ny))`,
/// Iteration x zuerst, dann y, dann z, Abbruch nach `boxes` Quadern.
pub fn box_origins(boxes: usize) -> Vec<GridPoint> {
    if boxes == 0 {
        return Vec::new();
    }
    let nx = ceil_cbrt(boxes);
    let ny = nx;
    let nz = boxes.div_ceil(nx * ny);

    let mut origins = Vec::with_capacity(boxes);
    'outer: for iz in 0..nz {
        for iy in 0..ny {
            for ix in 0..nx {
                if origins.len() == boxes {
                    break 'outer;
                }
                origins.push(GridPoint::new(
                    ix as i32 * BOX_SPACING,
                    iy as i32 * BOX_SPACING,
                    iz as i32 * BOX_SPACING,
                ));
            }
        }
    }
    origins
}

/// Die 12 Kanten eines Quaders (Anfangspunkt + Achse) in Bau-Reihenfolge.
fn box_edges(origin: GridPoint) -> [(GridPoint, Axis); 12] {
    let s = BOX_STEP;
    let top = origin.offset(Axis::Z, s);
    let corner = |base: GridPoint, dx: i32, dy: i32| base.offset(Axis::X, dx).offset(Axis::Y, dy);
    [
        // Boden
        (corner(origin, 0, 0), Axis::X),
        (corner(origin, 0, s), Axis::X),
        (corner(origin, 0, 0), Axis::Y),
        (corner(origin, s, 0), Axis::Y),
        // Deckel
        (corner(top, 0, 0), Axis::X),
        (corner(top, 0, s), Axis::X),
        (corner(top, 0, 0), Axis::Y),
        (corner(top, s, 0), Axis::Y),
        // Vertikalen
        (corner(origin, 0, 0), Axis::Z),
        (corner(origin, s, 0), Axis::Z),
        (corner(origin, 0, s), Axis::Z),
        (corner(origin, s, s), Axis::Z),
    ]
}

/// Erzeugt die Rohrliste für das gegebene Budget.
///
/// Reicht die Kapazität für keinen vollständigen Quader, ist das Ergebnis
/// leer. Gehen die 20-cm-Rohre während der Zuteilung aus, bleiben die
/// restlichen Kanten unbebaut; der Generator schlägt nie fehl.
pub fn build_structure_by_counts(budget: PartsBudget) -> Vec<Pipe> {
    let boxes = box_count(budget);
    if boxes == 0 {
        log::debug!(
            "Budget {:?} reicht für keinen Quader (Kapazität {})",
            budget,
            budget.edge_capacity()
        );
        return Vec::new();
    }

    let mut remaining_40 = (budget.count_40 as u64).min(EDGES_PER_BOX * boxes as u64);
    let mut remaining_20 = budget.count_20 as u64;
    let mut unbuilt = 0usize;
    let mut builder = PipeListBuilder::new();

    for origin in box_origins(boxes) {
        for (start, axis) in box_edges(origin) {
            if remaining_40 > 0 {
                builder.push(start, axis, PipeLength::Long);
                remaining_40 -= 1;
            } else if remaining_20 >= 2 {
                builder.push(start, axis, PipeLength::Short);
                builder.push(
                    start.offset(axis, PipeLength::Short.units()),
                    axis,
                    PipeLength::Short,
                );
                remaining_20 -= 2;
            } else {
                unbuilt += 1;
            }
        }
    }

    if unbuilt > 0 {
        log::debug!("{} Kanten mangels 20-cm-Rohren unbebaut", unbuilt);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceil_cbrt() {
        assert_eq!(ceil_cbrt(1), 1);
        assert_eq!(ceil_cbrt(2), 2);
        assert_eq!(ceil_cbrt(8), 2);
        assert_eq!(ceil_cbrt(9), 3);
        assert_eq!(ceil_cbrt(27), 3);
    }

    #[test]
    fn test_origins_are_raster_ordered_and_spaced() {
        let origins = box_origins(5);
        // nx = ny = 2, nz = 2
        assert_eq!(
            origins,
            vec![
                GridPoint::new(0, 0, 0),
                GridPoint::new(8, 0, 0),
                GridPoint::new(0, 8, 0),
                GridPoint::new(8, 8, 0),
                GridPoint::new(0, 0, 8),
            ]
        );
    }

    #[test]
    fn test_box_edges_form_closed_frame() {
        let edges = box_edges(GridPoint::ORIGIN);
        let mut degrees = std::collections::HashMap::new();
        for (start, axis) in edges {
            let pipe = Pipe::new(0, start, axis, PipeLength::Long);
            for p in pipe.endpoints() {
                *degrees.entry(p).or_insert(0) += 1;
            }
        }
        // 8 Ecken mit je 3 Kanten
        assert_eq!(degrees.len(), 8);
        assert!(degrees.values().all(|d| *d == 3));
    }

    #[test]
    fn test_insufficient_budget_yields_nothing() {
        assert!(build_structure_by_counts(PartsBudget::new(20, 0)).is_empty());
        assert!(build_structure_by_counts(PartsBudget::new(0, 11)).is_empty());
        assert!(build_structure_by_counts(PartsBudget::new(0, 0)).is_empty());
    }

    #[test]
    fn test_mixed_budget_prefers_long_pipes_first() {
        // Kapazität 5 + 7 = 12 → 1 Quader; 5 Kanten lang, 7 Kanten aus Paaren
        let pipes = build_structure_by_counts(PartsBudget::new(15, 5));
        let long = pipes.iter().filter(|p| p.length == PipeLength::Long).count();
        let short = pipes.iter().filter(|p| p.length == PipeLength::Short).count();
        assert_eq!(long, 5);
        assert_eq!(short, 14);
        assert!(pipes[..5].iter().all(|p| p.length == PipeLength::Long));
    }

    #[test]
    fn test_surplus_long_pipes_are_not_consumed() {
        let pipes = build_structure_by_counts(PartsBudget::new(100, 13));
        // Kapazität 63 → 5 Quader, 60 Kanten; 13 lang, 47 aus Paaren
        assert_eq!(
            pipes.iter().filter(|p| p.length == PipeLength::Long).count(),
            13
        );
        assert_eq!(
            pipes.iter().filter(|p| p.length == PipeLength::Short).count(),
            94
        );
    }
}
