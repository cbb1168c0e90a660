//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Host-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;
        let kind = command.kind();
        let version_before = state.structure.version();

        match command {
            // === Platzierung ===
            AppCommand::StartPlacement { length } => handlers::placement::start(state, length),
            AppCommand::SelectAnchor { point } => handlers::placement::select_anchor(state, point),
            AppCommand::CycleDirection => handlers::placement::cycle_direction(state),
            AppCommand::CommitPlacement => handlers::placement::commit(state),
            AppCommand::CancelPlacement => handlers::placement::cancel(state),

            // === Selektion & Editing ===
            AppCommand::SelectPipe { id } => handlers::selection::select_pipe(state, id),
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::DeleteSelectedPipe => handlers::editing::delete_selected(state),

            // === Generatoren ===
            AppCommand::GenerateBoxes { budget } => {
                handlers::generation::generate_boxes(state, budget)
            }
            AppCommand::GenerateTiered => handlers::generation::generate_tiered(state),

            // === Export ===
            AppCommand::ExportSnapshot { path } => handlers::export::export_snapshot(state, path),

            // === Optionen & Anwendungssteuerung ===
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        state
            .command_log
            .record(kind, version_before, state.structure.version());
        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
