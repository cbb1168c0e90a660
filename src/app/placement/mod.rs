//! Platzierungs-Maschine für einzelne Rohre.
//!
//! Ablauf: Länge wählen → Anker wählen → Richtung wechseln → bestätigen.
//! Der Zustand ist ein expliziter Wert; Übergänge sind reine Funktionen über
//! `(Zustand, Ereignis, Struktur)`, die Mutation der Struktur übernimmt der
//! Use-Case `placement`.

mod state;
mod transition;

pub use state::{PlacementSession, PlacementState};
pub use transition::{transition, PlacementEffect, PlacementEvent, Transition};
