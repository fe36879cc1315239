//! Trefferprüfung für Gesten in Screen-Koordinaten.

use crate::app::AppState;
use crate::core::CoordinateSystem;
use glam::DVec2;

/// Index des nächstgelegenen Kandidaten innerhalb von `radius_px` (Screen).
pub(crate) fn nearest_within(
    cs: &CoordinateSystem,
    screen: DVec2,
    candidates: impl IntoIterator<Item = DVec2>,
    radius_px: f64,
) -> Option<usize> {
    candidates
        .into_iter()
        .enumerate()
        .map(|(index, math)| (index, cs.to_screen(math).distance(screen)))
        .filter(|(_, distance)| *distance <= radius_px)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

/// Liegt die Screen-Position nah genug an der Parabel für Rubber-Banding?
pub(crate) fn is_near_parabola(app: &AppState, screen: DVec2) -> bool {
    if !app.ui.flags.show_parabola {
        return false;
    }
    let math = app.coordinate_system().to_math(screen);
    (math.y - app.parabola.evaluate(math.x)).abs() < app.options.parabola_proximity
}

/// Getroffener Schnittpunkt (Index) an der Screen-Position.
pub(crate) fn hit_intersection(app: &AppState, screen: DVec2) -> Option<usize> {
    let cs = app.coordinate_system();
    nearest_within(
        &cs,
        screen,
        app.intersections().iter().map(|p| p.position()),
        app.options.hit_radius_px,
    )
}

/// Getroffener markierter Punkt (Index) an der Screen-Position.
pub(crate) fn hit_marked_point(app: &AppState, screen: DVec2) -> Option<usize> {
    let cs = app.coordinate_system();
    nearest_within(
        &cs,
        screen,
        app.points.points().iter().map(|p| p.position),
        app.options.hit_radius_px,
    )
}

/// Markierter Punkt, der exakt an der Mathe-Position liegt.
pub(crate) fn marked_point_at(app: &AppState, math: DVec2) -> Option<usize> {
    app.points
        .points()
        .iter()
        .position(|p| p.position.distance(math) < 1e-9)
}

/// Startet an der Screen-Position eine Skizzen-Strecke?
///
/// Anker sind Schnittpunkte, markierte Punkte und vorhandene Skizzen-Elemente.
pub(crate) fn is_near_sketch_anchor(app: &AppState, screen: DVec2) -> bool {
    let cs = app.coordinate_system();
    let anchors = app
        .intersections()
        .iter()
        .map(|p| p.position())
        .chain(app.points.points().iter().map(|p| p.position))
        .chain(app.sketch.anchor_points())
        .collect::<Vec<_>>();
    nearest_within(&cs, screen, anchors, app.options.sketch_snap_radius_px).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_candidate_wins() {
        let cs = CoordinateSystem::new(DVec2::new(400.0, 400.0), 1.0, DVec2::ZERO);
        let screen = cs.to_screen(DVec2::new(0.0, 0.0));
        let candidates = [DVec2::new(1.0, 0.0), DVec2::new(0.2, 0.0)];
        assert_eq!(nearest_within(&cs, screen, candidates, 44.0), Some(1));
    }

    #[test]
    fn candidates_outside_radius_are_ignored() {
        let cs = CoordinateSystem::new(DVec2::new(400.0, 400.0), 1.0, DVec2::ZERO);
        let screen = cs.to_screen(DVec2::ZERO);
        // 5 Einheiten ≈ 167 px bei 400 px Breite
        assert_eq!(nearest_within(&cs, screen, [DVec2::new(5.0, 0.0)], 44.0), None);
    }

    #[test]
    fn parabola_proximity_respects_visibility() {
        let mut app = AppState::new();
        let on_curve = app.coordinate_system().to_screen(DVec2::new(1.0, 1.0));
        assert!(is_near_parabola(&app, on_curve));

        app.ui.flags.show_parabola = false;
        assert!(!is_near_parabola(&app, on_curve));
    }

    #[test]
    fn default_intersections_are_hit() {
        let app = AppState::new();
        let screen = app.coordinate_system().to_screen(DVec2::new(2.0, 4.0));
        assert_eq!(hit_intersection(&app, screen), Some(1));
    }

    #[test]
    fn marked_point_at_matches_stored_position_only() {
        let mut app = AppState::new();
        app.points.add(DVec2::new(0.5, -1.0)).unwrap();
        app.points.add(DVec2::new(2.0, 0.0)).unwrap();
        assert_eq!(marked_point_at(&app, DVec2::new(2.0, 0.0)), Some(1));
        assert_eq!(marked_point_at(&app, DVec2::new(2.0, 0.1)), None);
    }
}
