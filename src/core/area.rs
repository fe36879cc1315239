//! Fläche des Dreiecks Ursprung / Schnittpunkt 1 / Schnittpunkt 2.
//!
//! Liegen die Schnittpunkte auf verschiedenen Seiten der y-Achse, wird das
//! Dreieck am y-Achsenabschnitt der Geraden in eine linke und eine rechte
//! Teilfläche geteilt (der Renderer färbt beide Seiten unterschiedlich).

use super::{IntersectionPoint, Line};
use glam::DVec2;
use serde::Serialize;

/// Seite der y-Achse, auf der eine Teilfläche liegt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegionSide {
    /// x < 0
    Left,
    /// x > 0
    Right,
}

/// Einzelnes Flächendreieck in Mathe-Koordinaten
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaTriangle {
    /// Eckpunkte in Zeichenreihenfolge
    pub vertices: [DVec2; 3],
    /// Betrag der Fläche
    pub area: f64,
    /// Seite für die Einfärbung
    pub side: RegionSide,
}

impl AreaTriangle {
    fn new(vertices: [DVec2; 3], side: RegionSide) -> Self {
        Self {
            vertices,
            area: triangle_area(vertices[0], vertices[1], vertices[2]),
            side,
        }
    }
}

/// Ein Dreieck oder zwei Teildreiecke
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AreaRegions {
    /// Beide Schnittpunkte auf derselben Seite (oder einer auf der Achse)
    Single(AreaTriangle),
    /// Geteilt an der y-Achse
    Split {
        /// Teildreieck O, P_links, YI
        left: AreaTriangle,
        /// Teildreieck O, YI, P_rechts
        right: AreaTriangle,
    },
}

/// Gesamtfläche plus Teilregionen
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaResult {
    /// Summe der Teilflächen (immer ≥ 0)
    pub total: f64,
    /// Regionen für den Renderer
    pub regions: AreaRegions,
}

/// Shoelace-Formel, Vorzeichen verworfen.
pub fn triangle_area(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    0.5 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)).abs()
}

/// Berechnet die Fläche für genau zwei Schnittpunkte, sonst `None`.
pub fn compute_area(intersections: &[IntersectionPoint], line: &Line) -> Option<AreaResult> {
    let [first, second] = intersections else {
        return None;
    };
    let origin = DVec2::ZERO;
    let p1 = first.position();
    let p2 = second.position();

    let straddles = (p1.x < 0.0 && p2.x > 0.0) || (p1.x > 0.0 && p2.x < 0.0);
    if straddles {
        let y_intercept = DVec2::new(0.0, line.n());
        let (p_left, p_right) = if p1.x < 0.0 { (p1, p2) } else { (p2, p1) };
        let left = AreaTriangle::new([origin, p_left, y_intercept], RegionSide::Left);
        let right = AreaTriangle::new([origin, y_intercept, p_right], RegionSide::Right);
        return Some(AreaResult {
            total: left.area + right.area,
            regions: AreaRegions::Split { left, right },
        });
    }

    let side = if p1.x < 0.0 {
        RegionSide::Left
    } else {
        RegionSide::Right
    };
    let triangle = AreaTriangle::new([origin, p1, p2], side);
    Some(AreaResult {
        total: triangle.area,
        regions: AreaRegions::Single(triangle),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{solve_intersections, LineCoefficients, Parabola};
    use approx::assert_relative_eq;

    fn line(m: f64, n: f64) -> Line {
        Line::from_coefficients(LineCoefficients { m, n })
    }

    #[test]
    fn same_side_intersections_give_single_region() {
        // y = x² und y = 3x − 2 schneiden sich bei x = 1 und x = 2
        let lin = line(3.0, -2.0);
        let points = solve_intersections(&Parabola::default(), &lin);
        let result = compute_area(&points, &lin).expect("zwei Schnittpunkte");
        match result.regions {
            AreaRegions::Single(triangle) => assert_eq!(triangle.side, RegionSide::Right),
            other => panic!("Unerwartete Regionen: {other:?}"),
        }
        assert_relative_eq!(result.total, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn point_on_axis_is_not_split() {
        let lin = line(1.0, 0.0);
        let points = solve_intersections(&Parabola::default(), &lin);
        let result = compute_area(&points, &lin).expect("zwei Schnittpunkte");
        assert!(matches!(result.regions, AreaRegions::Single(_)));
        assert_relative_eq!(result.total, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn straddling_intersections_split_at_y_intercept() {
        // y = x² und y = x + 2 schneiden sich bei x = −1 und x = 2
        let lin = line(1.0, 2.0);
        let points = solve_intersections(&Parabola::default(), &lin);
        let result = compute_area(&points, &lin).expect("zwei Schnittpunkte");
        let AreaRegions::Split { left, right } = result.regions else {
            panic!("Fläche muss geteilt sein");
        };
        assert_eq!(left.side, RegionSide::Left);
        assert_eq!(right.side, RegionSide::Right);
        assert_relative_eq!(left.area, 1.0, epsilon = 1e-9);
        assert_relative_eq!(right.area, 2.0, epsilon = 1e-9);
        assert_relative_eq!(result.total, 3.0, epsilon = 1e-9);
        assert_eq!(left.vertices[2], DVec2::new(0.0, 2.0));
    }

    #[test]
    fn split_total_equals_whole_triangle() {
        let lin = line(0.5, 3.0);
        let points = solve_intersections(&Parabola::default(), &lin);
        let result = compute_area(&points, &lin).expect("zwei Schnittpunkte");
        let whole = triangle_area(DVec2::ZERO, points[0].position(), points[1].position());
        assert_relative_eq!(result.total, whole, epsilon = 1e-9);
    }

    #[test]
    fn fewer_than_two_intersections_have_no_area() {
        let lin = line(2.0, -1.0);
        let points = solve_intersections(&Parabola::default(), &lin);
        assert_eq!(points.len(), 1);
        assert!(compute_area(&points, &lin).is_none());
        assert!(compute_area(&[], &lin).is_none());
    }
}
