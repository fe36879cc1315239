//! Pinch-Zoom: kumulative Gestenskalierung → inkrementelle Zoom-Faktoren.

use super::{GestureMachine, GestureState};
use crate::app::AppIntent;

impl GestureMachine {
    /// Pinch-Änderung: bricht laufende Gesten ab und liefert den Faktor seit dem letzten Tick.
    pub(crate) fn handle_pinch(&mut self, scale: f64, intents: &mut Vec<AppIntent>) {
        if !scale.is_finite() || scale <= 0.0 {
            log::warn!("Ungültige Pinch-Skalierung ignoriert: {scale}");
            return;
        }

        if self.state != GestureState::Zooming {
            match self.state {
                GestureState::DraggingCurveParameter => {
                    intents.push(AppIntent::CurveDragCancelled)
                }
                GestureState::AwaitingGraphSelection => {
                    intents.push(AppIntent::GraphSelectionCancelled)
                }
                _ => {}
            }
            self.reset_to_idle();
            self.transition(GestureState::Zooming);
        }

        let factor = scale / self.last_pinch_scale;
        self.last_pinch_scale = scale;
        intents.push(AppIntent::CameraZoom { factor });
    }

    /// Pinch beendet.
    pub(crate) fn handle_pinch_end(&mut self) {
        if self.state == GestureState::Zooming {
            self.reset_to_idle();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{GestureEvent, GestureMachine, GestureState};
    use crate::app::{AppIntent, AppState};
    use glam::DVec2;

    fn factors(intents: &[AppIntent]) -> Vec<f64> {
        intents
            .iter()
            .filter_map(|intent| match intent {
                AppIntent::CameraZoom { factor } => Some(*factor),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn pinch_emits_incremental_factors() {
        let app = AppState::new();
        let mut machine = GestureMachine::new();

        let first = machine.handle_event(&app, GestureEvent::PinchChanged { scale: 2.0 });
        let second = machine.handle_event(&app, GestureEvent::PinchChanged { scale: 3.0 });
        assert_eq!(factors(&first), vec![2.0]);
        assert!((factors(&second)[0] - 1.5).abs() < 1e-12);
        assert_eq!(machine.state(), GestureState::Zooming);

        machine.handle_event(&app, GestureEvent::PinchEnded);
        assert_eq!(machine.state(), GestureState::Idle);

        // Neue Geste beginnt wieder bei 1.0
        let fresh = machine.handle_event(&app, GestureEvent::PinchChanged { scale: 0.5 });
        assert_eq!(factors(&fresh), vec![0.5]);
    }

    #[test]
    fn pinch_aborts_curve_drag() {
        let mut app = AppState::new();
        app.view.viewport_size = DVec2::new(390.0, 390.0);
        let mut machine = GestureMachine::new();
        let on_curve = app.coordinate_system().to_screen(DVec2::new(1.0, 1.0));

        machine.handle_event(&app, GestureEvent::PointerDown { position: on_curve });
        assert_eq!(machine.state(), GestureState::DraggingCurveParameter);

        let intents = machine.handle_event(&app, GestureEvent::PinchChanged { scale: 1.2 });
        assert_eq!(intents[0], AppIntent::CurveDragCancelled);
        assert_eq!(factors(&intents), vec![1.2]);
        assert!(!machine.is_pressed());

        // Loslassen nach dem Pinch erzeugt nichts mehr
        machine.handle_event(&app, GestureEvent::PinchEnded);
        let up = machine.handle_event(&app, GestureEvent::PointerUp { position: on_curve });
        assert!(up.is_empty());
    }

    #[test]
    fn invalid_pinch_scale_is_ignored() {
        let app = AppState::new();
        let mut machine = GestureMachine::new();
        assert!(machine
            .handle_event(&app, GestureEvent::PinchChanged { scale: 0.0 })
            .is_empty());
        assert!(machine
            .handle_event(&app, GestureEvent::PinchChanged { scale: f64::NAN })
            .is_empty());
        assert_eq!(machine.state(), GestureState::Idle);
    }
}
