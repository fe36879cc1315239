//! Use-Cases für die freie Skizze im Geometrie-Modus.

use crate::app::AppState;
use crate::core::GraphError;
use glam::DVec2;

/// Rastet eine Skizzen-Position ein.
///
/// Reihenfolge: nächster Schnittpunkt, markierter Punkt oder Skizzen-Eckpunkt
/// innerhalb des Fangradius (Screen-Punkte); sonst bei Grid-Snap die nächste
/// ganzzahlige Rasterposition; sonst unverändert.
pub fn snap_sketch_position(state: &AppState, position: DVec2) -> DVec2 {
    let cs = state.coordinate_system();
    let screen = cs.to_screen(position);
    let radius = state.options.sketch_snap_radius_px;

    let intersections = state.intersections();
    let candidates = intersections
        .iter()
        .map(|p| p.position())
        .chain(state.points.points().iter().map(|p| p.position))
        .chain(state.sketch.anchor_points());

    let nearest = candidates
        .map(|candidate| (candidate, cs.to_screen(candidate).distance(screen)))
        .filter(|(_, distance)| *distance <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1));

    match nearest {
        Some((anchor, _)) => anchor,
        None if state.options.grid_snap_enabled => position.round(),
        None => position,
    }
}

/// Setzt einen Skizzen-Punkt.
pub fn add_sketch_point(state: &mut AppState, position: DVec2) {
    if !position.is_finite() {
        state.report_condition(GraphError::NonFiniteValue);
        return;
    }
    let snapped = snap_sketch_position(state, position);
    let id = state.sketch.add_point(snapped);
    log::debug!("Skizzen-Punkt {} bei {:?}", id, snapped);
}

/// Zieht eine Skizzen-Strecke; beide Enden rasten ein.
pub fn add_sketch_segment(state: &mut AppState, start: DVec2, end: DVec2) {
    if !start.is_finite() || !end.is_finite() {
        state.report_condition(GraphError::NonFiniteValue);
        return;
    }
    let start = snap_sketch_position(state, start);
    let end = snap_sketch_position(state, end);
    let id = state.sketch.add_segment(start, end);
    log::debug!("Skizzen-Strecke {} von {:?} nach {:?}", id, start, end);
}

/// Leert die Skizze.
pub fn clear_geometry(state: &mut AppState) {
    state.sketch.clear();
    log::info!("Skizze geleert");
}
