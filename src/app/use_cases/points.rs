//! Use-Cases für markierte Punkte, Gerade aus Punkten und die Kurvenwahl.

use crate::app::{AppState, Feedback};
use crate::core::{line_from_points, GraphError, GraphType};
use glam::DVec2;

/// Fügt einen markierten Punkt hinzu.
pub fn add_marked_point(state: &mut AppState, position: DVec2) {
    match state.points.add(position) {
        Ok(_) => {
            let label = state.points.points().last().map_or("?", |p| p.label);
            log::info!(
                "Punkt {} gesetzt bei ({:.2}, {:.2})",
                label,
                position.x,
                position.y
            );
            state.push_feedback(Feedback::Light);
        }
        Err(e) => state.report_condition(e),
    }
}

/// Entfernt den markierten Punkt am Index (Labels rücken nach).
pub fn remove_marked_point(state: &mut AppState, index: usize) {
    match state.points.remove_at(index) {
        Ok(removed) => {
            log::info!("Punkt {} entfernt", removed.label);
            state.push_feedback(Feedback::Medium);
        }
        Err(e) => state.report_condition(e),
    }
}

/// Entfernt alle markierten Punkte.
pub fn clear_marked_points(state: &mut AppState) {
    state.points.clear();
    state.is_line_from_points = false;
    state.line_creation_error = None;
    log::info!("Alle Punkte entfernt");
}

/// Legt die Gerade durch die Punkte A und B.
///
/// Bei Fehlern bleibt die Gerade unverändert und die Meldung wird in
/// `line_creation_error` abgelegt.
pub fn create_line_from_points(state: &mut AppState) {
    state.line_creation_error = None;
    let coefficients = match line_from_points(&state.points) {
        Ok(c) => c,
        Err(e) => {
            state.line_creation_error = Some(e.to_string());
            state.report_condition(e);
            return;
        }
    };

    // Erst auf einer Kopie setzen, damit ein Fehler die Gerade nicht halb ändert
    let mut line = state.line;
    if let Err(e) = line.set_m(coefficients.m).and_then(|_| line.set_n(coefficients.n)) {
        state.line_creation_error = Some(e.to_string());
        state.report_condition(e);
        return;
    }
    state.line = line;
    state.is_line_from_points = true;
    state.push_feedback(Feedback::Heavy);
    log::info!(
        "Gerade aus Punkten: y = {:.3}x + {:.3}",
        state.line.m(),
        state.line.n()
    );
}

/// Merkt einen Schnittpunkt für die Kurvenwahl vor.
pub fn select_intersection(state: &mut AppState, index: usize) {
    let len = state.intersections().len();
    if index >= len {
        state.report_condition(GraphError::IntersectionIndexOutOfRange { index, len });
        return;
    }
    state.constrained.point_index = Some(index);
    state.constrained.graph = None;
    log::debug!("Schnittpunkt {} wartet auf Kurvenwahl", index);
}

/// Legt die Kurve für den vorgemerkten Schnittpunkt fest.
pub fn choose_graph(state: &mut AppState, graph: GraphType) {
    let Some(index) = state.constrained.point_index else {
        log::warn!("Kurvenwahl ohne vorgemerkten Schnittpunkt ignoriert");
        return;
    };
    state.constrained.graph = Some(graph);
    state.push_feedback(Feedback::Medium);
    log::info!("Schnittpunkt {} an {:?} gebunden", index, graph);
}

/// Verwirft die Kurvenwahl.
pub fn cancel_graph_selection(state: &mut AppState) {
    if state.constrained.point_index.is_some() {
        log::debug!("Kurvenwahl verworfen");
    }
    state.constrained.clear();
}
