//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::options::MANUAL_POINT_LIMIT;
use crate::shared::DisplayFlag;
use glam::DVec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanView { delta }],
        AppIntent::CameraZoom { factor } => vec![AppCommand::ZoomView { factor }],
        AppIntent::ResetZoomAndPanRequested => vec![AppCommand::ResetZoomAndPan],

        AppIntent::CurveDragStarted => vec![AppCommand::BeginCurveDrag],
        AppIntent::CurveDragUpdated { a } => vec![AppCommand::DragParabolaA { value: a }],
        AppIntent::CurveDragEnded => vec![AppCommand::EndCurveDrag],
        AppIntent::CurveDragCancelled => vec![AppCommand::CancelCurveDrag],

        AppIntent::CoefficientSliderMoved { coefficient, value } => {
            vec![AppCommand::SetCoefficient {
                coefficient,
                value,
                snap: state.options.grid_snap_enabled,
            }]
        }
        AppIntent::CoefficientEntered { coefficient, value } => {
            vec![AppCommand::SetCoefficient {
                coefficient,
                value,
                snap: false,
            }]
        }
        AppIntent::CoefficientFractionEntered {
            coefficient,
            numerator,
            denominator,
        } => vec![AppCommand::SetCoefficientFraction {
            coefficient,
            numerator,
            denominator,
        }],

        AppIntent::MarkedPointAddRequested { position } => {
            vec![AppCommand::AddMarkedPoint {
                position: state.marked_point_placement(position),
            }]
        }
        AppIntent::MarkedPointRemoveRequested { index } => {
            vec![AppCommand::RemoveMarkedPoint { index }]
        }
        AppIntent::AddPointFromInputRequested { x, y } => {
            // NaN bleibt NaN und wird vom Punktspeicher abgelehnt
            let position = DVec2::new(
                x.clamp(-MANUAL_POINT_LIMIT, MANUAL_POINT_LIMIT),
                y.clamp(-MANUAL_POINT_LIMIT, MANUAL_POINT_LIMIT),
            );
            vec![AppCommand::AddMarkedPoint { position }]
        }
        AppIntent::ClearMarkedPointsRequested => vec![AppCommand::ClearMarkedPoints],
        AppIntent::CreateLineFromPointsRequested => vec![AppCommand::CreateLineFromPoints],

        AppIntent::IntersectionTapped { index } => vec![AppCommand::SelectIntersection { index }],
        AppIntent::GraphSelected { graph } => vec![AppCommand::ChooseGraph { graph }],
        AppIntent::GraphSelectionCancelled => vec![AppCommand::CancelGraphSelection],

        AppIntent::SketchPointRequested { position } => {
            vec![AppCommand::AddSketchPoint { position }]
        }
        AppIntent::SketchSegmentRequested { start, end } => {
            vec![AppCommand::AddSketchSegment { start, end }]
        }
        AppIntent::ClearGeometryRequested => vec![AppCommand::ClearGeometry],

        AppIntent::DisplayFlagChanged { flag, enabled } => {
            let mut commands = vec![AppCommand::SetDisplayFlag { flag, enabled }];
            if flag == DisplayFlag::GeometryMode && !enabled {
                commands.push(AppCommand::CancelGraphSelection);
            }
            commands
        }
        AppIntent::LabelOffsetChanged { graph, offset } => {
            vec![AppCommand::SetLabelOffset { graph, offset }]
        }
        AppIntent::ResetLabelPositionsRequested => vec![AppCommand::ResetLabelPositions],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetRequested => vec![
            AppCommand::ResetCurves,
            AppCommand::ResetDisplayFlags,
            AppCommand::ClearMarkedPoints,
            AppCommand::ClearGeometry,
            AppCommand::CancelGraphSelection,
            AppCommand::ResetZoomAndPan,
            AppCommand::ResetLabelPositions,
        ],
    }
}
