//! Die Struktur: geordnete Sammlung aller bestätigten Rohre.
//!
//! Einzige veränderliche Datenquelle. Alles Abgeleitete (Knotengrade,
//! Stückliste, Belegung) wird bei Bedarf aus den Rohren neu berechnet.

use super::grid::{Axis, Direction, GridPoint};
use super::pipe::{Pipe, PipeId, PipeLength, SegmentKey};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Ergebnis eines Einfüge-Versuchs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Neues Rohr angelegt
    Added(PipeId),
    /// Identische Strecke existiert bereits (Einfügen verworfen)
    Duplicate(PipeId),
}

/// Geordnete, ID-indexierte Rohr-Sammlung.
#[derive(Debug, Clone)]
pub struct Structure {
    /// Rohre in Einfüge-Reihenfolge
    pipes: IndexMap<PipeId, Pipe>,
    /// Strecke → ID, für Duplikat-Erkennung
    segments: HashMap<SegmentKey, PipeId>,
    /// Anzahl Rohre, die je Anker und Richtung abgehen
    occupancy: HashMap<(GridPoint, Direction), u32>,
    /// Nächste zu vergebende ID
    next_id: PipeId,
    /// Wird bei jeder Mutation erhöht
    version: u64,
}

impl Structure {
    /// Erstellt eine leere Struktur.
    pub fn new() -> Self {
        Self {
            pipes: IndexMap::new(),
            segments: HashMap::new(),
            occupancy: HashMap::new(),
            next_id: 1,
            version: 0,
        }
    }

    /// Anzahl der Rohre.
    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    /// Gibt `true` zurück, wenn keine Rohre vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    /// Änderungszähler (für Memoisierung abgeleiteter Daten).
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Iterator über alle Rohre in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.values()
    }

    /// Rohr per ID.
    pub fn get(&self, id: PipeId) -> Option<&Pipe> {
        self.pipes.get(&id)
    }

    /// Findet ein Rohr mit identischer Strecke.
    pub fn find_segment(&self, start: GridPoint, axis: Axis, length: PipeLength) -> Option<PipeId> {
        self.segments.get(&(start, axis, length)).copied()
    }

    /// Fügt ein Rohr in kanonischer Form hinzu; Duplikate werden verworfen.
    pub fn insert(&mut self, start: GridPoint, axis: Axis, length: PipeLength) -> InsertOutcome {
        let outcome = self.insert_unversioned(start, axis, length);
        if let InsertOutcome::Added(_) = outcome {
            self.version += 1;
        }
        outcome
    }

    /// Entfernt ein Rohr per ID (Reihenfolge der übrigen bleibt erhalten).
    pub fn remove(&mut self, id: PipeId) -> Option<Pipe> {
        let removed = self.pipes.shift_remove(&id)?;
        self.segments.remove(&removed.segment_key());
        for key in occupancy_keys(&removed) {
            if let Some(count) = self.occupancy.get_mut(&key) {
                *count -= 1;
                if *count == 0 {
                    self.occupancy.remove(&key);
                }
            }
        }
        self.version += 1;
        Some(removed)
    }

    /// Ersetzt den gesamten Inhalt (z.B. durch Generator-Ausgabe).
    ///
    /// IDs werden in Reihenfolge neu vergeben (1..n). Gibt die Anzahl
    /// verworfener Duplikate zurück.
    pub fn replace_all(&mut self, pipes: impl IntoIterator<Item = Pipe>) -> usize {
        self.pipes.clear();
        self.segments.clear();
        self.occupancy.clear();
        self.next_id = 1;
        let mut duplicates = 0;
        for pipe in pipes {
            if let InsertOutcome::Duplicate(_) =
                self.insert_unversioned(pipe.start, pipe.axis, pipe.length)
            {
                duplicates += 1;
            }
        }
        self.version += 1;
        duplicates
    }

    /// Richtungen, in denen am Anker bereits ein Rohr abgeht.
    ///
    /// Ein Rohr mit `start == anchor` belegt die positive Richtung seiner
    /// Achse, ein Rohr mit `end == anchor` die negative.
    pub fn occupied_directions(&self, anchor: GridPoint) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.is_occupied(anchor, *d))
            .collect()
    }

    /// Freie Richtungen am Anker in fester Reihenfolge (X+, X-, Y+, Y-, Z+, Z-).
    pub fn available_directions(&self, anchor: GridPoint) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !self.is_occupied(anchor, *d))
            .collect()
    }

    fn is_occupied(&self, anchor: GridPoint, direction: Direction) -> bool {
        self.occupancy.contains_key(&(anchor, direction))
    }

    fn insert_unversioned(
        &mut self,
        start: GridPoint,
        axis: Axis,
        length: PipeLength,
    ) -> InsertOutcome {
        let pipe = Pipe::new(self.next_id, start, axis, length);
        if let Some(existing) = self.segments.get(&pipe.segment_key()) {
            return InsertOutcome::Duplicate(*existing);
        }
        self.next_id += 1;
        self.segments.insert(pipe.segment_key(), pipe.id);
        for key in occupancy_keys(&pipe) {
            *self.occupancy.entry(key).or_insert(0) += 1;
        }
        self.pipes.insert(pipe.id, pipe);
        InsertOutcome::Added(pipe.id)
    }
}

/// Start belegt die positive, Ende die negative Richtung der Achse.
fn occupancy_keys(pipe: &Pipe) -> [(GridPoint, Direction); 2] {
    [
        (pipe.start, Direction::positive(pipe.axis)),
        (pipe.end(), Direction::negative(pipe.axis)),
    ]
}

impl Default for Structure {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut s = Structure::new();
        assert_eq!(
            s.insert(GridPoint::ORIGIN, Axis::X, PipeLength::Long),
            InsertOutcome::Added(1)
        );
        assert_eq!(
            s.insert(GridPoint::ORIGIN, Axis::Y, PipeLength::Short),
            InsertOutcome::Added(2)
        );
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_duplicate_segment_is_discarded() {
        let mut s = Structure::new();
        s.insert(GridPoint::ORIGIN, Axis::X, PipeLength::Long);
        let version = s.version();

        let outcome = s.insert(GridPoint::ORIGIN, Axis::X, PipeLength::Long);
        assert_eq!(outcome, InsertOutcome::Duplicate(1));
        assert_eq!(s.len(), 1);
        assert_eq!(s.version(), version);
    }

    #[test]
    fn test_different_length_is_not_duplicate() {
        let mut s = Structure::new();
        s.insert(GridPoint::ORIGIN, Axis::X, PipeLength::Long);
        let outcome = s.insert(GridPoint::ORIGIN, Axis::X, PipeLength::Short);
        assert_eq!(outcome, InsertOutcome::Added(2));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut s = Structure::new();
        s.insert(GridPoint::ORIGIN, Axis::X, PipeLength::Long);
        s.insert(GridPoint::ORIGIN, Axis::Y, PipeLength::Long);
        s.insert(GridPoint::ORIGIN, Axis::Z, PipeLength::Long);

        assert!(s.remove(2).is_some());
        assert!(s.remove(2).is_none());
        let ids: Vec<PipeId> = s.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_occupancy_is_per_signed_direction() {
        let mut s = Structure::new();
        let anchor = GridPoint::new(4, 0, 0);
        // Rohr (0,0,0)→(4,0,0) endet am Anker → X- belegt
        s.insert(GridPoint::ORIGIN, Axis::X, PipeLength::Long);

        assert_eq!(
            s.occupied_directions(anchor),
            vec![Direction::negative(Axis::X)]
        );
        let free = s.available_directions(anchor);
        assert_eq!(free.len(), 5);
        assert_eq!(free[0], Direction::positive(Axis::X));

        // Rohr ab Anker in +X → beide X-Richtungen belegt
        s.insert(anchor, Axis::X, PipeLength::Short);
        assert_eq!(s.available_directions(anchor)[0], Direction::positive(Axis::Y));
    }

    #[test]
    fn test_replace_all_reassigns_ids_and_drops_duplicates() {
        let mut s = Structure::new();
        s.insert(GridPoint::new(9, 9, 9), Axis::Z, PipeLength::Short);

        let pipes = vec![
            Pipe::new(40, GridPoint::ORIGIN, Axis::X, PipeLength::Long),
            Pipe::new(41, GridPoint::ORIGIN, Axis::X, PipeLength::Long),
            Pipe::new(42, GridPoint::ORIGIN, Axis::Y, PipeLength::Long),
        ];
        let duplicates = s.replace_all(pipes);

        assert_eq!(duplicates, 1);
        let ids: Vec<PipeId> = s.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_remove_frees_direction_and_segment() {
        let mut s = Structure::new();
        let anchor = GridPoint::new(0, 0, 4);
        s.insert(GridPoint::ORIGIN, Axis::Z, PipeLength::Long);
        s.insert(GridPoint::ORIGIN, Axis::Z, PipeLength::Short);

        // Zwei Rohre belegen Z+ am Ursprung, eines davon entfernen
        assert!(s.remove(2).is_some());
        assert!(!s
            .available_directions(GridPoint::ORIGIN)
            .contains(&Direction::positive(Axis::Z)));

        assert!(s.remove(1).is_some());
        assert_eq!(s.available_directions(GridPoint::ORIGIN).len(), 6);
        assert_eq!(s.available_directions(anchor).len(), 6);
        assert_eq!(s.find_segment(GridPoint::ORIGIN, Axis::Z, PipeLength::Long), None);
        assert_eq!(
            s.insert(GridPoint::ORIGIN, Axis::Z, PipeLength::Long),
            InsertOutcome::Added(3)
        );
    }

    #[test]
    fn test_replace_all_rebuilds_lookups() {
        let mut s = Structure::new();
        s.insert(GridPoint::new(9, 9, 9), Axis::Z, PipeLength::Short);

        s.replace_all(vec![Pipe::new(5, GridPoint::ORIGIN, Axis::Y, PipeLength::Long)]);

        assert_eq!(s.find_segment(GridPoint::new(9, 9, 9), Axis::Z, PipeLength::Short), None);
        assert_eq!(s.available_directions(GridPoint::new(9, 9, 9)).len(), 6);
        assert_eq!(s.find_segment(GridPoint::ORIGIN, Axis::Y, PipeLength::Long), Some(1));
        assert_eq!(
            s.occupied_directions(GridPoint::new(0, 4, 0)),
            vec![Direction::negative(Axis::Y)]
        );
    }

    #[test]
    fn test_large_replace_keeps_every_pipe() {
        let pipes: Vec<Pipe> = (0..20_000)
            .map(|i| Pipe::new(0, GridPoint::new(i * 4, 0, 0), Axis::X, PipeLength::Long))
            .collect();
        let mut s = Structure::new();
        assert_eq!(s.replace_all(pipes), 0);
        assert_eq!(s.len(), 20_000);
        assert_eq!(s.occupied_directions(GridPoint::new(40, 0, 0)).len(), 2);
    }
}
