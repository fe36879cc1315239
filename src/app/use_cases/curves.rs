//! Use-Cases für Parabel und Gerade: Rubber-Banding, Regler, Bruch-Eingabe.

use crate::app::{AppState, Feedback};
use crate::core::{fraction_value, Coefficient, GhostState, Line, Parabola};

/// Nimmt den Geister-Schnappschuss auf und signalisiert das Greifen.
pub fn begin_drag(state: &mut AppState) {
    state.ghost = Some(GhostState {
        parabola: state.parabola,
        line: state.line,
    });
    state.push_feedback(Feedback::Medium);
    log::debug!("Parabel gegriffen bei a = {}", state.parabola.a());
}

/// Setzt a während des Drags, ohne einzurasten.
///
/// Überquert a dabei eine ganze Zahl, wird eine Rückmeldung angefordert.
pub fn drag_parabola_a(state: &mut AppState, value: f64) {
    let previous = state.parabola.a();
    if let Err(e) = state.parabola.set_a(value, false) {
        state.report_condition(e);
        return;
    }
    if previous.trunc() != state.parabola.a().trunc() {
        state.push_feedback(Feedback::Medium);
    }
}

/// Beendet den Drag: Geist verwerfen, bei Grid-Snap a auf ganze Zahl runden.
pub fn end_drag(state: &mut AppState) {
    state.ghost = None;
    if state.options.grid_snap_enabled {
        let a = state.parabola.a();
        if let Err(e) = state.parabola.set_a(a, true) {
            state.report_condition(e);
            return;
        }
        state.push_feedback(Feedback::Light);
    }
    log::info!("Parabel losgelassen, a = {}", state.parabola.a());
}

/// Bricht den Drag ab und stellt die Kurven aus dem Geist wieder her.
pub fn cancel_drag(state: &mut AppState) {
    if let Some(ghost) = state.ghost.take() {
        state.parabola = ghost.parabola;
        state.line = ghost.line;
        log::debug!("Kurven-Drag abgebrochen, Ausgangszustand wiederhergestellt");
    }
}

/// Setzt einen Koeffizienten über den validierenden Setter.
///
/// `snap` wirkt nur auf a, p und q. Manuelle Änderungen an m oder n heben
/// die Herkunft "aus Punkten" der Geraden auf.
pub fn set_coefficient(state: &mut AppState, coefficient: Coefficient, value: f64, snap: bool) {
    let result = match coefficient {
        Coefficient::A => state.parabola.set_a(value, snap),
        Coefficient::P => state.parabola.set_p(value, snap),
        Coefficient::Q => state.parabola.set_q(value, snap),
        Coefficient::M => state.line.set_m(value),
        Coefficient::N => state.line.set_n(value),
    };
    match result {
        Ok(()) => {
            if !coefficient.is_parabola() {
                state.is_line_from_points = false;
            }
        }
        Err(e) => state.report_condition(e),
    }
}

/// Setzt einen Koeffizienten aus einer Bruch-Eingabe.
pub fn set_coefficient_fraction(
    state: &mut AppState,
    coefficient: Coefficient,
    numerator: f64,
    denominator: f64,
) {
    match fraction_value(numerator, denominator) {
        Ok(value) => set_coefficient(state, coefficient, value, false),
        Err(e) => state.report_condition(e),
    }
}

/// Setzt beide Kurven auf die Startwerte aus den Optionen zurück.
pub fn reset_curves(state: &mut AppState) {
    state.parabola = Parabola::from_coefficients(state.options.default_parabola);
    state.line = Line::from_coefficients(state.options.default_line);
    state.ghost = None;
    state.is_line_from_points = false;
    state.line_creation_error = None;
    state.last_condition = None;
}

/// Liefert den aktuellen Wert eines Koeffizienten.
pub fn coefficient_value(state: &AppState, coefficient: Coefficient) -> f64 {
    match coefficient {
        Coefficient::A => state.parabola.a(),
        Coefficient::P => state.parabola.p(),
        Coefficient::Q => state.parabola.q(),
        Coefficient::M => state.line.m(),
        Coefficient::N => state.line.n(),
    }
}
