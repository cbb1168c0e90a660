//! Parameterloser Generator für ein dekoratives Stufen-Gerüst.
//!
//! Drei rechteckige Ebenen, nach oben kleiner und versetzt, jeweils mit
//! Umfangsrahmen und je einer Mittelstrebe pro Ebenen-Achse. Sechs Säulen
//! (4 Ecken + 2 Mitten der Längsseiten der Basisebene) laufen von z = 0 bis
//! zur obersten Ebene. Kein Budget: es wird unbegrenzter Teilevorrat angenommen.

use super::PipeListBuilder;
use crate::core::{Axis, GridPoint, Pipe};

/// Eine Ebene des Gerüsts (alle Werte in Rastereinheiten).
#[derive(Debug, Clone, Copy)]
struct Tier {
    origin_x: i32,
    origin_y: i32,
    width: i32,
    depth: i32,
    height: i32,
}

/// Breiten und Tiefen sind Vielfache von 8, damit Mittelstreben und Säulen
/// auf Stoßstellen der 40-cm-Teilung treffen.
const TIERS: [Tier; 3] = [
    Tier {
        origin_x: 0,
        origin_y: 0,
        width: 32,
        depth: 24,
        height: 4,
    },
    Tier {
        origin_x: 4,
        origin_y: 4,
        width: 24,
        depth: 16,
        height: 8,
    },
    Tier {
        origin_x: 8,
        origin_y: 8,
        width: 16,
        depth: 8,
        height: 12,
    },
];

impl Tier {
    fn corner(&self, dx: i32, dy: i32) -> GridPoint {
        GridPoint::new(self.origin_x + dx, self.origin_y + dy, self.height)
    }

    fn push_frame(&self, builder: &mut PipeListBuilder) {
        // Umfang
        builder.push_run(self.corner(0, 0), Axis::X, self.width);
        builder.push_run(self.corner(0, self.depth), Axis::X, self.width);
        builder.push_run(self.corner(0, 0), Axis::Y, self.depth);
        builder.push_run(self.corner(self.width, 0), Axis::Y, self.depth);
        // Mittelstreben
        builder.push_run(self.corner(0, self.depth / 2), Axis::X, self.width);
        builder.push_run(self.corner(self.width / 2, 0), Axis::Y, self.depth);
    }
}

/// Erzeugt das Stufen-Gerüst. Deterministisch und nie leer.
pub fn build_tiered_scaffold() -> Vec<Pipe> {
    let mut builder = PipeListBuilder::new();
    for tier in &TIERS {
        tier.push_frame(&mut builder);
    }

    let base = TIERS[0];
    let top = TIERS[TIERS.len() - 1].height;
    let columns = [
        (0, 0),
        (base.width, 0),
        (0, base.depth),
        (base.width, base.depth),
        (base.width / 2, 0),
        (base.width / 2, base.depth),
    ];
    for (dx, dy) in columns {
        let foot = GridPoint::new(base.origin_x + dx, base.origin_y + dy, 0);
        builder.push_run(foot, Axis::Z, top);
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PartsSummary, PipeId, PipeLength, Structure};
    use std::collections::HashMap;

    #[test]
    fn test_scaffold_is_deterministic_and_non_empty() {
        let a = build_tiered_scaffold();
        let b = build_tiered_scaffold();
        assert!(!a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn test_scaffold_has_no_duplicate_segments() {
        let pipes = build_tiered_scaffold();
        let mut structure = Structure::new();
        let duplicates = structure.replace_all(pipes.clone());
        assert_eq!(duplicates, 0);
        assert_eq!(structure.len(), pipes.len());
    }

    #[test]
    fn test_columns_reach_top_tier() {
        let pipes = build_tiered_scaffold();
        let vertical: Vec<&Pipe> = pipes.iter().filter(|p| p.axis == Axis::Z).collect();
        // 6 Säulen à 12 Einheiten = 3 × 40 cm
        assert_eq!(vertical.len(), 18);
        assert!(vertical.iter().all(|p| p.length == PipeLength::Long));
        let max_z = vertical.iter().map(|p| p.end().z).max();
        assert_eq!(max_z, Some(12));
    }

    #[test]
    fn test_expected_pipe_count() {
        // Ebene 0: 3 × 8 entlang X, 3 × 6 entlang Y = 42
        // Ebene 1: 3 × 6 + 3 × 4 = 30
        // Ebene 2: 3 × 4 + 3 × 2 = 18
        // Säulen: 18
        assert_eq!(build_tiered_scaffold().len(), 42 + 30 + 18 + 18);
    }

    /// Rasterpunkte strikt zwischen den Endpunkten eines Rohrs.
    fn interior_points(pipe: &Pipe) -> Vec<GridPoint> {
        (1..pipe.length.units())
            .map(|k| pipe.start.offset(pipe.axis, k))
            .collect()
    }

    #[test]
    fn test_pipes_meet_only_at_endpoints() {
        let pipes = build_tiered_scaffold();
        let mut interior: HashMap<GridPoint, PipeId> = HashMap::new();
        for pipe in &pipes {
            for point in interior_points(pipe) {
                if let Some(other) = interior.insert(point, pipe.id) {
                    panic!("Rohre {} und {} kreuzen sich in {}", other, pipe.id, point);
                }
            }
        }

        for pipe in &pipes {
            for end in pipe.endpoints() {
                assert!(
                    !interior.contains_key(&end),
                    "Endpunkt {} von Rohr {} liegt im Inneren von Rohr {:?}",
                    end,
                    pipe.id,
                    interior.get(&end)
                );
            }
        }
    }

    #[test]
    fn test_struts_end_in_connectors() {
        let mut structure = Structure::new();
        structure.replace_all(build_tiered_scaffold());
        let summary = PartsSummary::from_structure(&structure);

        // Nur Säulenfüße und Säulenköpfe bleiben offen
        assert_eq!(summary.free_anchors, 12);
        assert_eq!(summary.three_way, 10);
        assert_eq!(summary.four_way, 9);
    }
}
