//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::connection_nodes;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Knotengrade werden bei jedem Aufbau vollständig neu berechnet.
pub fn build(state: &AppState) -> RenderScene {
    let session = state.placement.session();

    RenderScene {
        pipes: state.structure.iter().copied().collect(),
        nodes: connection_nodes(&state.structure),
        ghost: state.placement.ghost_pipe(),
        selected_pipe_id: state.selection.selected_pipe_id,
        anchor: session.map(|s| s.anchor),
        available_directions: session.map(|s| s.available.clone()).unwrap_or_default(),
        structure_version: state.structure.version(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::placement::{PlacementSession, PlacementState};
    use crate::app::AppState;
    use crate::core::{Axis, ConnectorKind, GridPoint, PipeLength};

    #[test]
    fn build_reports_nodes_and_ghost() {
        let mut state = AppState::new();
        state
            .structure
            .insert(GridPoint::ORIGIN, Axis::X, PipeLength::Long);
        let anchor = GridPoint::new(4, 0, 0);
        state.placement = PlacementState::AnchorSelected(PlacementSession::open(
            PipeLength::Short,
            anchor,
            &state.structure,
        ));

        let scene = build(&state);

        assert_eq!(scene.pipes.len(), 1);
        assert_eq!(scene.nodes.len(), 2);
        assert!(scene
            .nodes
            .iter()
            .all(|n| n.kind == ConnectorKind::FreeAnchor));
        assert_eq!(scene.anchor, Some(anchor));
        assert_eq!(scene.available_directions.len(), 5);
        let ghost = scene.ghost.expect("Vorschau erwartet");
        assert_eq!(ghost.start, anchor);
        assert_eq!(ghost.end(), GridPoint::new(6, 0, 0));
    }

    #[test]
    fn selected_pipe_uses_highlight_color() {
        let mut state = AppState::new();
        state
            .structure
            .insert(GridPoint::ORIGIN, Axis::Z, PipeLength::Long);
        state.selection.select(1);

        let scene = build(&state);
        assert_eq!(
            scene.pipe_color(&scene.pipes[0]),
            state.options.pipe_color_selected
        );
    }
}
