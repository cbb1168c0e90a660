//! Handler für Editing-Operationen an der Struktur.

use crate::app::use_cases;
use crate::app::AppState;

/// Löscht das selektierte Rohr. Eine laufende Session sieht danach die
/// freigewordene Richtung.
pub fn delete_selected(state: &mut AppState) {
    if use_cases::editing::delete_selected_pipe(state).is_some() {
        use_cases::placement::refresh_session(state);
    }
}
