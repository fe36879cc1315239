//! Handler für Zoom, Pan und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: DVec2) {
    use_cases::camera::resize(state, size);
}

/// Verschiebt den Ursprung um ein Screen-Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt relativ zum aktuellen Zoom.
pub fn zoom(state: &mut AppState, factor: f64) {
    use_cases::camera::zoom_by(state, factor);
}

/// Setzt Zoom und Pan zurück.
pub fn reset_zoom_and_pan(state: &mut AppState) {
    use_cases::camera::reset_zoom_and_pan(state);
}
