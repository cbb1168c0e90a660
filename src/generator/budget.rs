//! Teile-Budget für den Box-Generator.

use serde::{Deserialize, Serialize};

/// Verfügbare Rohre pro Länge (nie negativ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartsBudget {
    /// Anzahl 20-cm-Rohre
    pub count_20: u32,
    /// Anzahl 40-cm-Rohre
    pub count_40: u32,
}

impl PartsBudget {
    /// Erstellt ein Budget.
    pub fn new(count_20: u32, count_40: u32) -> Self {
        Self { count_20, count_40 }
    }

    /// Übernimmt rohe (ggf. negative) Eingaben; negative Werte werden zu 0.
    pub fn from_raw(count_20: i64, count_40: i64) -> Self {
        Self {
            count_20: clamp_count(count_20),
            count_40: clamp_count(count_40),
        }
    }

    /// Parst Texteingaben; nicht-numerische Werte zählen als 0.
    pub fn parse(count_20: &str, count_40: &str) -> Self {
        Self::from_raw(parse_count(count_20), parse_count(count_40))
    }

    /// Anzahl baubarer 40-cm-Kanten: ein 40-cm-Rohr oder zwei 20-cm-Rohre je Kante.
    pub fn edge_capacity(&self) -> u64 {
        self.count_40 as u64 + self.count_20 as u64 / 2
    }
}

fn clamp_count(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

fn parse_count(text: &str) -> i64 {
    text.trim().parse::<i64>().unwrap_or(0)
}
