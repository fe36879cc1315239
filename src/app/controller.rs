//! Application Controller für zentrale Event-Verarbeitung.

use super::graph_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::GraphScene;

/// Orchestriert UI- und Gesten-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let mark = state.command_log.mark();
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }
        log::trace!(
            "Intent ausgeführt: {} Command(s)",
            state.command_log.since(mark).count()
        );

        Ok(())
    }

    /// Verarbeitet mehrere Intents in Reihenfolge (z.B. aus einem Gesten-Event).
    pub fn handle_intents(
        &mut self,
        state: &mut AppState,
        intents: impl IntoIterator<Item = AppIntent>,
    ) -> anyhow::Result<()> {
        for intent in intents {
            self.handle_intent(state, intent)?;
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
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zoom & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanView { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomView { factor } => handlers::view::zoom(state, factor),
            AppCommand::ResetZoomAndPan => handlers::view::reset_zoom_and_pan(state),

            // === Kurven ===
            AppCommand::BeginCurveDrag => handlers::curves::begin_drag(state),
            AppCommand::DragParabolaA { value } => handlers::curves::drag_parabola_a(state, value),
            AppCommand::EndCurveDrag => handlers::curves::end_drag(state),
            AppCommand::CancelCurveDrag => handlers::curves::cancel_drag(state),
            AppCommand::SetCoefficient {
                coefficient,
                value,
                snap,
            } => handlers::curves::set_coefficient(state, coefficient, value, snap),
            AppCommand::SetCoefficientFraction {
                coefficient,
                numerator,
                denominator,
            } => handlers::curves::set_coefficient_fraction(
                state,
                coefficient,
                numerator,
                denominator,
            ),
            AppCommand::ResetCurves => handlers::curves::reset(state),

            // === Punkte ===
            AppCommand::AddMarkedPoint { position } => handlers::points::add(state, position),
            AppCommand::RemoveMarkedPoint { index } => handlers::points::remove(state, index),
            AppCommand::ClearMarkedPoints => handlers::points::clear(state),
            AppCommand::CreateLineFromPoints => handlers::points::create_line(state),
            AppCommand::SelectIntersection { index } => {
                handlers::points::select_intersection(state, index)
            }
            AppCommand::ChooseGraph { graph } => handlers::points::choose_graph(state, graph),
            AppCommand::CancelGraphSelection => handlers::points::cancel_graph_selection(state),

            // === Skizze ===
            AppCommand::AddSketchPoint { position } => handlers::sketch::add_point(state, position),
            AppCommand::AddSketchSegment { start, end } => {
                handlers::sketch::add_segment(state, start, end)
            }
            AppCommand::ClearGeometry => handlers::sketch::clear(state),

            // === Anzeige & Optionen ===
            AppCommand::SetDisplayFlag { flag, enabled } => {
                handlers::display::set_flag(state, flag, enabled)
            }
            AppCommand::ResetDisplayFlags => handlers::display::reset_flags(state),
            AppCommand::SetLabelOffset { graph, offset } => {
                handlers::display::set_label_offset(state, graph, offset)
            }
            AppCommand::ResetLabelPositions => handlers::display::reset_label_positions(state),
            AppCommand::ApplyOptions { options } => handlers::display::apply_options(state, options),
        }

        Ok(())
    }

    /// Baut die GraphScene für den aktuellen Frame.
    pub fn build_graph_scene(&self, state: &AppState) -> GraphScene {
        graph_scene::build(state)
    }
}
