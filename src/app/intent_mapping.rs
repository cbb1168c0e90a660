//! Mapping von UI-Intents auf mutierende App-Commands.

use super::events::PickHit;
use super::keymap;
use super::{AppCommand, AppIntent, AppState};
use crate::core::NodeIndex;
use crate::generator::PartsBudget;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::StartPlacementRequested { length } => {
            vec![AppCommand::StartPlacement { length }]
        }
        AppIntent::ViewportPicked { hit } => map_pick(state, hit),
        AppIntent::CycleDirectionRequested => vec![AppCommand::CycleDirection],
        AppIntent::CommitRequested => vec![AppCommand::CommitPlacement],
        AppIntent::CancelRequested => vec![AppCommand::CancelPlacement],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedPipe],
        AppIntent::KeyPressed { key } => {
            match keymap::intent_for_key(&state.options.key_bindings, key) {
                Some(intent) => map_intent_to_commands(state, intent),
                None => {
                    log::debug!("Taste {} ist nicht belegt", key);
                    Vec::new()
                }
            }
        }
        AppIntent::GenerateFromCountsRequested { count_20, count_40 } => {
            vec![AppCommand::GenerateBoxes {
                budget: PartsBudget::from_raw(count_20, count_40),
            }]
        }
        AppIntent::GenerateFromTextRequested { count_20, count_40 } => {
            vec![AppCommand::GenerateBoxes {
                budget: PartsBudget::parse(&count_20, &count_40),
            }]
        }
        AppIntent::GenerateTieredRequested => vec![AppCommand::GenerateTiered],
        AppIntent::ExportRequested { path } => vec![AppCommand::ExportSnapshot { path }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Pick während der Platzierung wählt Anker, sonst wird selektiert.
fn map_pick(state: &AppState, hit: PickHit) -> Vec<AppCommand> {
    if state.placement.is_active() {
        return match hit {
            PickHit::Anchor(point) => vec![AppCommand::SelectAnchor { point }],
            PickHit::Surface(world_pos) => {
                let index = NodeIndex::from_structure(&state.structure);
                let point = index.resolve_anchor(world_pos, state.options.snap_radius_m);
                vec![AppCommand::SelectAnchor { point }]
            }
            PickHit::Pipe(_) | PickHit::Nothing => {
                log::debug!("Pick {:?} während der Platzierung ignoriert", hit);
                Vec::new()
            }
        };
    }

    match hit {
        PickHit::Pipe(id) => vec![AppCommand::SelectPipe { id }],
        PickHit::Anchor(_) | PickHit::Surface(_) | PickHit::Nothing => {
            vec![AppCommand::ClearSelection]
        }
    }
}
