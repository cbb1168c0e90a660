//! Protokoll der ausgeführten App-Commands mit ihrer Wirkung auf die Struktur.

use serde::Serialize;

/// Ein protokollierter Command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandRecord {
    /// Laufende Nummer seit Programmstart
    pub sequence: u64,
    /// Kurzname des Commands (`AppCommand::kind`)
    pub kind: &'static str,
    /// Strukturversion nach der Ausführung
    pub structure_version: u64,
    /// Hat der Command die Struktur verändert?
    pub mutated: bool,
}

/// Begrenztes Protokoll in Ausführungsreihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<CommandRecord>,
    next_sequence: u64,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Protokoll.
    pub fn new() -> Self {
        Self::default()
    }

    /// Protokolliert einen ausgeführten Command.
    ///
    /// Bei `MAX_ENTRIES` wird die ältere Hälfte verworfen; die laufende
    /// Nummer zählt weiter.
    pub fn record(&mut self, kind: &'static str, version_before: u64, version_after: u64) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.next_sequence += 1;
        self.entries.push(CommandRecord {
            sequence: self.next_sequence,
            kind,
            structure_version: version_after,
            mutated: version_before != version_after,
        });
    }

    /// Anzahl der gehaltenen Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn nichts protokolliert ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CommandRecord] {
        &self.entries
    }

    /// Anzahl der Commands, die die Struktur verändert haben.
    pub fn mutation_count(&self) -> usize {
        self.entries.iter().filter(|e| e.mutated).count()
    }
}
