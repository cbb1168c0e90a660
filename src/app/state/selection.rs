use crate::core::PipeId;

/// Auswahlbezogener Anwendungszustand (höchstens ein Rohr).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Aktuell selektiertes Rohr
    pub selected_pipe_id: Option<PipeId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_pipe_id: None,
        }
    }

    /// Selektiert ein Rohr.
    pub fn select(&mut self, id: PipeId) {
        self.selected_pipe_id = Some(id);
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.selected_pipe_id = None;
    }
}
