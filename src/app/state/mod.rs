//! Application State: zentrale Datenhaltung.

mod app_state;
mod selection;

pub use app_state::AppState;
pub use selection::SelectionState;
