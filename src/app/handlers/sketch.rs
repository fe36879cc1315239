//! Handler für die freie Skizze.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Setzt einen Skizzen-Punkt.
pub fn add_point(state: &mut AppState, position: DVec2) {
    use_cases::sketch::add_sketch_point(state, position);
}

/// Zieht eine Skizzen-Strecke.
pub fn add_segment(state: &mut AppState, start: DVec2, end: DVec2) {
    use_cases::sketch::add_sketch_segment(state, start, end);
}

/// Leert die Skizze.
pub fn clear(state: &mut AppState) {
    use_cases::sketch::clear_geometry(state);
}
