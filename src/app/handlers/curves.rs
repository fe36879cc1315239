//! Handler für Kurven-Drag und Koeffizienten-Eingabe.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Coefficient;

/// Startet das Rubber-Banding der Parabel.
pub fn begin_drag(state: &mut AppState) {
    use_cases::curves::begin_drag(state);
}

/// Setzt a während des Drags.
pub fn drag_parabola_a(state: &mut AppState, value: f64) {
    use_cases::curves::drag_parabola_a(state, value);
}

/// Beendet das Rubber-Banding.
pub fn end_drag(state: &mut AppState) {
    use_cases::curves::end_drag(state);
}

/// Bricht das Rubber-Banding ab.
pub fn cancel_drag(state: &mut AppState) {
    use_cases::curves::cancel_drag(state);
}

/// Setzt einen Koeffizienten.
pub fn set_coefficient(state: &mut AppState, coefficient: Coefficient, value: f64, snap: bool) {
    use_cases::curves::set_coefficient(state, coefficient, value, snap);
}

/// Setzt einen Koeffizienten aus Zähler und Nenner.
pub fn set_coefficient_fraction(
    state: &mut AppState,
    coefficient: Coefficient,
    numerator: f64,
    denominator: f64,
) {
    use_cases::curves::set_coefficient_fraction(state, coefficient, numerator, denominator);
}

/// Setzt beide Kurven zurück.
pub fn reset(state: &mut AppState) {
    use_cases::curves::reset_curves(state);
}
