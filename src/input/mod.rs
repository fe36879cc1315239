//! Gesten-Zustandsautomat: Pointer- und Pinch-Events → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `pointer`: Press/Move/Release (Tap, Pan, Rubber-Band, Skizzen-Strecke)
//! - `pinch`: Pinch-Zoom
//! - `hit_test`: Trefferprüfung in Screen-Koordinaten
//!
//! Der Automat liest den AppState nur und liefert die resultierenden
//! Intents zurück; der Host reicht sie an den `AppController` weiter.
//! Jeder terminierende Event (Pointer-Up, Abbruch) räumt den transienten
//! Zustand vollständig ab.

mod hit_test;
mod pinch;
mod pointer;

use crate::app::{AppIntent, AppState};
use crate::core::GraphType;
use glam::DVec2;

/// Eingehender Roh-Event der Zeichenfläche (Screen-Koordinaten)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Finger/Maus gedrückt
    PointerDown { position: DVec2 },
    /// Finger/Maus bewegt
    PointerMove { position: DVec2 },
    /// Finger/Maus losgelassen
    PointerUp { position: DVec2 },
    /// Pinch-Skalierung seit Gestenbeginn (1.0 = unverändert)
    PinchChanged { scale: f64 },
    /// Pinch beendet
    PinchEnded,
    /// Geste vom System abgebrochen
    Cancelled,
    /// Kurve in der Auswahl für einen Schnittpunkt gewählt
    GraphChosen { graph: GraphType },
    /// Auswahl für einen Schnittpunkt geschlossen
    GraphSelectionDismissed,
}

/// Zustand des Automaten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// Keine Geste aktiv (ggf. Pointer gedrückt, aber noch unter der Tap-Schwelle)
    #[default]
    Idle,
    /// Ursprung wird verschoben
    Panning,
    /// Pinch-Zoom
    Zooming,
    /// Rubber-Banding von a
    DraggingCurveParameter,
    /// Skizzen-Strecke wird gezogen (Geometrie-Modus)
    DrawingSegment,
    /// Tap im Geometrie-Modus wird aufgelöst
    PlacingOrRemovingPoint,
    /// Angetippter Schnittpunkt wartet auf die Kurvenwahl
    AwaitingGraphSelection,
}

/// Gesten-Automat für die Zeichenfläche
#[derive(Debug, Clone)]
pub struct GestureMachine {
    state: GestureState,
    press_origin: Option<DVec2>,
    last_position: Option<DVec2>,
    drag_start_a: f64,
    last_pinch_scale: f64,
}

impl Default for GestureMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureMachine {
    /// Erstellt einen Automaten im Ruhezustand.
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
            press_origin: None,
            last_position: None,
            drag_start_a: 0.0,
            last_pinch_scale: 1.0,
        }
    }

    /// Aktueller Zustand
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Ist gerade ein Pointer gedrückt?
    pub fn is_pressed(&self) -> bool {
        self.press_origin.is_some()
    }

    /// Verarbeitet einen Event und gibt die resultierenden Intents zurück.
    pub fn handle_event(&mut self, app: &AppState, event: GestureEvent) -> Vec<AppIntent> {
        let mut intents = Vec::new();
        match event {
            GestureEvent::PointerDown { position } => {
                self.handle_pointer_down(app, position, &mut intents)
            }
            GestureEvent::PointerMove { position } => {
                self.handle_pointer_move(app, position, &mut intents)
            }
            GestureEvent::PointerUp { position } => {
                self.handle_pointer_up(app, position, &mut intents)
            }
            GestureEvent::PinchChanged { scale } => self.handle_pinch(scale, &mut intents),
            GestureEvent::PinchEnded => self.handle_pinch_end(),
            GestureEvent::Cancelled => self.handle_cancel(&mut intents),
            GestureEvent::GraphChosen { graph } => {
                if self.state == GestureState::AwaitingGraphSelection {
                    intents.push(AppIntent::GraphSelected { graph });
                    self.reset_to_idle();
                }
            }
            GestureEvent::GraphSelectionDismissed => {
                if self.state == GestureState::AwaitingGraphSelection {
                    intents.push(AppIntent::GraphSelectionCancelled);
                    self.reset_to_idle();
                }
            }
        }
        intents
    }

    /// Bricht jede laufende Geste ab und räumt transienten Zustand ab.
    fn handle_cancel(&mut self, intents: &mut Vec<AppIntent>) {
        match self.state {
            GestureState::DraggingCurveParameter => intents.push(AppIntent::CurveDragCancelled),
            GestureState::AwaitingGraphSelection => {
                intents.push(AppIntent::GraphSelectionCancelled)
            }
            _ => {}
        }
        self.reset_to_idle();
    }

    fn transition(&mut self, next: GestureState) {
        if self.state != next {
            log::debug!("Geste: {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    fn reset_to_idle(&mut self) {
        self.transition(GestureState::Idle);
        self.press_origin = None;
        self.last_position = None;
        self.drag_start_a = 0.0;
        self.last_pinch_scale = 1.0;
    }
}
