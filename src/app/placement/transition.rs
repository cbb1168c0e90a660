//! Reine Übergangsfunktion der Platzierungs-Maschine.

use super::state::{PlacementSession, PlacementState};
use crate::core::{Axis, GridPoint, PipeLength, Structure};

/// Eingaben der Platzierungs-Maschine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementEvent {
    /// Längen-Werkzeug wählen (startet eine neue Platzierung)
    StartPlacement(PipeLength),
    /// Anker-Knoten wählen
    SelectAnchor(GridPoint),
    /// Nächste freie Richtung
    CycleDirection,
    /// Rohr bestätigen
    Commit,
    /// Abbrechen
    Cancel,
}

/// Seiteneffekt eines Übergangs; wird vom Aufrufer auf die Struktur angewendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementEffect {
    /// Nichts zu tun
    None,
    /// Normalisiertes Rohr einfügen
    CommitPipe {
        start: GridPoint,
        axis: Axis,
        length: PipeLength,
    },
    /// Bestätigen ohne Anker oder Richtung
    CommitDisabled,
}

/// Ergebnis eines Übergangs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Folgezustand
    pub next: PlacementState,
    /// Auszuführender Effekt
    pub effect: PlacementEffect,
}

impl Transition {
    fn to(next: PlacementState) -> Self {
        Self {
            next,
            effect: PlacementEffect::None,
        }
    }

    fn stay(state: &PlacementState) -> Self {
        Self::to(state.clone())
    }
}

/// Berechnet Folgezustand und Effekt. Die Struktur wird nur gelesen.
pub fn transition(
    state: &PlacementState,
    event: PlacementEvent,
    structure: &Structure,
) -> Transition {
    match event {
        PlacementEvent::StartPlacement(length) => Transition::to(PlacementState::Idle { length }),

        PlacementEvent::SelectAnchor(point) => match state.length() {
            Some(length) => Transition::to(PlacementState::AnchorSelected(
                PlacementSession::open(length, point, structure),
            )),
            None => Transition::stay(state),
        },

        PlacementEvent::CycleDirection => match state {
            PlacementState::AnchorSelected(session) => {
                Transition::to(PlacementState::AnchorSelected(session.cycled()))
            }
            _ => Transition::stay(state),
        },

        PlacementEvent::Commit => match state.ghost_pipe() {
            Some(pipe) => Transition {
                next: PlacementState::Inactive,
                effect: PlacementEffect::CommitPipe {
                    start: pipe.start,
                    axis: pipe.axis,
                    length: pipe.length,
                },
            },
            None => Transition {
                next: state.clone(),
                effect: PlacementEffect::CommitDisabled,
            },
        },

        PlacementEvent::Cancel => Transition::to(PlacementState::Inactive),
    }
}
