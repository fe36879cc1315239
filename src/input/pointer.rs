//! Pointer-Phasen: Press, Move, Release und Tap-Auflösung.

use super::{hit_test, GestureMachine, GestureState};
use crate::app::{AppIntent, AppState};
use crate::shared::options::SKETCH_MIN_SEGMENT_PX;
use glam::DVec2;

impl GestureMachine {
    /// Pointer gedrückt: Rubber-Band greifen oder Tap/Pan vormerken.
    pub(crate) fn handle_pointer_down(
        &mut self,
        app: &AppState,
        position: DVec2,
        intents: &mut Vec<AppIntent>,
    ) {
        match self.state {
            // Jede neue Berührung schließt die offene Kurvenwahl
            GestureState::AwaitingGraphSelection => {
                intents.push(AppIntent::GraphSelectionCancelled);
                self.reset_to_idle();
            }
            GestureState::Idle if self.press_origin.is_none() => {}
            _ => return,
        }

        if !position.is_finite() {
            return;
        }

        self.press_origin = Some(position);
        self.last_position = Some(position);

        if !app.ui.flags.geometry_mode && hit_test::is_near_parabola(app, position) {
            self.drag_start_a = app.parabola.a();
            self.transition(GestureState::DraggingCurveParameter);
            intents.push(AppIntent::CurveDragStarted);
        }
    }

    /// Pointer bewegt: Tap-Schwelle prüfen, Pan-Delta oder neues a liefern.
    pub(crate) fn handle_pointer_move(
        &mut self,
        app: &AppState,
        position: DVec2,
        intents: &mut Vec<AppIntent>,
    ) {
        let (Some(origin), Some(last)) = (self.press_origin, self.last_position) else {
            return;
        };
        if !position.is_finite() {
            return;
        }

        match self.state {
            GestureState::Idle => {
                if origin.distance(position) < app.options.tap_slop_px {
                    return;
                }
                if app.ui.flags.geometry_mode && hit_test::is_near_sketch_anchor(app, origin) {
                    self.transition(GestureState::DrawingSegment);
                } else {
                    self.transition(GestureState::Panning);
                    // Erstes Delta ab Druckpunkt, damit kein Weg verloren geht
                    intents.push(AppIntent::CameraPan {
                        delta: position - origin,
                    });
                }
            }
            GestureState::Panning => {
                intents.push(AppIntent::CameraPan {
                    delta: position - last,
                });
            }
            GestureState::DraggingCurveParameter => {
                // Screen-y wächst nach unten: nach oben ziehen öffnet die Parabel
                let dy = position.y - origin.y;
                let a = self.drag_start_a - dy * app.options.drag_sensitivity;
                intents.push(AppIntent::CurveDragUpdated { a });
            }
            _ => {}
        }

        self.last_position = Some(position);
    }

    /// Pointer losgelassen: Geste abschließen.
    pub(crate) fn handle_pointer_up(
        &mut self,
        app: &AppState,
        position: DVec2,
        intents: &mut Vec<AppIntent>,
    ) {
        let Some(origin) = self.press_origin else {
            return;
        };
        let release = if position.is_finite() {
            position
        } else {
            self.last_position.unwrap_or(origin)
        };

        match self.state {
            GestureState::Idle => {
                if app.ui.flags.geometry_mode
                    && origin.distance(release) < app.options.tap_slop_px
                {
                    self.transition(GestureState::PlacingOrRemovingPoint);
                    self.resolve_tap(app, release, intents);
                }
            }
            GestureState::DraggingCurveParameter => intents.push(AppIntent::CurveDragEnded),
            GestureState::DrawingSegment => {
                if origin.distance(release) >= SKETCH_MIN_SEGMENT_PX {
                    let cs = app.coordinate_system();
                    intents.push(AppIntent::SketchSegmentRequested {
                        start: cs.to_math(origin),
                        end: cs.to_math(release),
                    });
                }
            }
            _ => {}
        }

        if self.state == GestureState::AwaitingGraphSelection {
            self.press_origin = None;
            self.last_position = None;
        } else {
            self.reset_to_idle();
        }
    }

    /// Tap im Geometrie-Modus: Schnittpunkt > markierter Punkt > neuer Punkt.
    fn resolve_tap(&mut self, app: &AppState, position: DVec2, intents: &mut Vec<AppIntent>) {
        if let Some(index) = hit_test::hit_intersection(app, position) {
            intents.push(AppIntent::IntersectionTapped { index });
            self.transition(GestureState::AwaitingGraphSelection);
            return;
        }

        // Ein Punkt liegt gerastert ab; der zweite Tap trifft ihn auch über die Rasterposition
        let math = app.coordinate_system().to_math(position);
        let existing = hit_test::hit_marked_point(app, position)
            .or_else(|| hit_test::marked_point_at(app, app.marked_point_placement(math)));

        if let Some(index) = existing {
            intents.push(AppIntent::MarkedPointRemoveRequested { index });
        } else if app.points.is_full() {
            log::info!(
                "Punktspeicher voll ({} Punkte), Tap ignoriert",
                app.points.len()
            );
        } else {
            intents.push(AppIntent::MarkedPointAddRequested { position: math });
        }
    }
}
