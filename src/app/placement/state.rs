//! Zustandswerte der Rohr-Platzierung.

use crate::core::{Direction, GridPoint, Pipe, PipeLength, Structure};

/// Laufende Platzierung mit gewähltem Anker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementSession {
    /// Gewählte Rohrlänge
    pub length: PipeLength,
    /// Anker-Knoten
    pub anchor: GridPoint,
    /// Aktuelle Richtung (nur `None`, wenn am Anker keine Richtung frei ist)
    pub direction: Option<Direction>,
    /// Freie Richtungen am Anker in fester Reihenfolge
    pub available: Vec<Direction>,
}

impl PlacementSession {
    /// Öffnet eine Session am Anker; Standardrichtung ist die erste freie.
    pub fn open(length: PipeLength, anchor: GridPoint, structure: &Structure) -> Self {
        let available = structure.available_directions(anchor);
        Self {
            length,
            anchor,
            direction: available.first().copied(),
            available,
        }
    }

    /// Nächste freie Richtung (zyklisch). Bei höchstens einer Richtung unverändert.
    pub fn cycled(&self) -> Self {
        let mut next = self.clone();
        if self.available.len() > 1 {
            let index = self
                .direction
                .and_then(|d| self.available.iter().position(|a| *a == d))
                .map_or(0, |i| (i + 1) % self.available.len());
            next.direction = Some(self.available[index]);
        }
        next
    }

    /// Gleicht die freien Richtungen nach einer Strukturänderung ab.
    /// Eine weiterhin freie Richtung bleibt gewählt.
    pub fn refreshed(&self, structure: &Structure) -> Self {
        let available = structure.available_directions(self.anchor);
        let direction = self
            .direction
            .filter(|d| available.contains(d))
            .or_else(|| available.first().copied());
        Self {
            length: self.length,
            anchor: self.anchor,
            direction,
            available,
        }
    }

    /// Vorschau-Rohr (normalisiert), falls eine Richtung gewählt ist.
    pub fn ghost_pipe(&self) -> Option<Pipe> {
        self.direction
            .map(|d| Pipe::from_anchor(0, self.anchor, d, self.length))
    }
}

/// Zustand der Platzierungs-Maschine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlacementState {
    /// Kein Längen-Werkzeug aktiv (Selektionsmodus)
    #[default]
    Inactive,
    /// Werkzeug aktiv, wartet auf Anker
    Idle { length: PipeLength },
    /// Anker gewählt, Richtung wählbar
    AnchorSelected(PlacementSession),
}

impl PlacementState {
    /// Ob ein Längen-Werkzeug aktiv ist.
    pub fn is_active(&self) -> bool {
        !matches!(self, PlacementState::Inactive)
    }

    /// Gewählte Rohrlänge des aktiven Werkzeugs.
    pub fn length(&self) -> Option<PipeLength> {
        match self {
            PlacementState::Inactive => None,
            PlacementState::Idle { length } => Some(*length),
            PlacementState::AnchorSelected(session) => Some(session.length),
        }
    }

    /// Laufende Session, falls ein Anker gewählt ist.
    pub fn session(&self) -> Option<&PlacementSession> {
        match self {
            PlacementState::AnchorSelected(session) => Some(session),
            _ => None,
        }
    }

    /// Ob Bestätigen möglich ist (Anker und Richtung gesetzt).
    pub fn can_commit(&self) -> bool {
        self.session().is_some_and(|s| s.direction.is_some())
    }

    /// Vorschau-Rohr der laufenden Session.
    pub fn ghost_pipe(&self) -> Option<Pipe> {
        self.session().and_then(PlacementSession::ghost_pipe)
    }

    /// Statuszeile für den Host.
    pub fn status_text(&self) -> String {
        match self {
            PlacementState::Inactive => "Auswahl".to_string(),
            PlacementState::Idle { length } => {
                format!("{} cm: Anker wählen", length.centimeters())
            }
            PlacementState::AnchorSelected(session) => match session.direction {
                Some(direction) => format!(
                    "{} cm ab {} Richtung {}",
                    session.length.centimeters(),
                    session.anchor,
                    direction.label()
                ),
                None => format!(
                    "{} cm ab {}: keine Richtung frei",
                    session.length.centimeters(),
                    session.anchor
                ),
            },
        }
    }
}
