//! Handler für markierte Punkte und die Kurvenwahl an Schnittpunkten.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GraphType;
use glam::DVec2;

/// Fügt einen markierten Punkt hinzu.
pub fn add(state: &mut AppState, position: DVec2) {
    use_cases::points::add_marked_point(state, position);
}

/// Entfernt einen markierten Punkt.
pub fn remove(state: &mut AppState, index: usize) {
    use_cases::points::remove_marked_point(state, index);
}

/// Entfernt alle markierten Punkte.
pub fn clear(state: &mut AppState) {
    use_cases::points::clear_marked_points(state);
}

/// Leitet die Gerade aus den Punkten A und B ab.
pub fn create_line(state: &mut AppState) {
    use_cases::points::create_line_from_points(state);
}

/// Merkt einen Schnittpunkt für die Kurvenwahl vor.
pub fn select_intersection(state: &mut AppState, index: usize) {
    use_cases::points::select_intersection(state, index);
}

/// Legt die Kurve fest.
pub fn choose_graph(state: &mut AppState, graph: GraphType) {
    use_cases::points::choose_graph(state, graph);
}

/// Verwirft die Kurvenwahl.
pub fn cancel_graph_selection(state: &mut AppState) {
    use_cases::points::cancel_graph_selection(state);
}
