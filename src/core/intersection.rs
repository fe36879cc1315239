//! Schnittpunkte von Parabel und Gerade.
//!
//! Einsetzen der Geraden in die Parabel liefert
//! `a·x² − (2ap + m)·x + (a·p² + q − n) = 0`.

use super::{Line, Parabola};
use glam::DVec2;
use serde::Serialize;

/// Toleranz für die Diskriminante (Berührpunkt vs. kein Schnitt).
pub const DISCRIMINANT_EPSILON: f64 = 1e-9;

/// Schnittpunkt (abgeleitet, wird bei jeder Änderung neu berechnet)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntersectionPoint {
    /// x-Koordinate
    pub x: f64,
    /// y-Koordinate
    pub y: f64,
}

impl IntersectionPoint {
    /// Position als Vektor
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Berechnet 0, 1 oder 2 Schnittpunkte, aufsteigend nach x sortiert.
///
/// Der y-Wert kommt aus der Geradengleichung, nicht aus der Parabel.
pub fn solve_intersections(parabola: &Parabola, line: &Line) -> Vec<IntersectionPoint> {
    let a = parabola.a();
    let p = parabola.p();
    let b = -(2.0 * a * p + line.m());
    let c = a * p * p + parabola.q() - line.n();

    solve_quadratic_roots(a, b, c)
        .into_iter()
        .map(|x| IntersectionPoint {
            x,
            y: line.evaluate(x),
        })
        .collect()
}

/// Reelle Nullstellen von `a·x² + b·x + c`, aufsteigend.
///
/// Für |a| ≈ 0 wird auf die lineare Gleichung zurückgefallen; ist auch b ≈ 0,
/// gibt es keinen isolierten Schnittpunkt.
pub(crate) fn solve_quadratic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a.abs() < f64::EPSILON {
        if b.abs() < f64::EPSILON {
            return Vec::new();
        }
        let x = -c / b;
        return if x.is_finite() { vec![x] } else { Vec::new() };
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < -DISCRIMINANT_EPSILON {
        return Vec::new();
    }
    if discriminant.abs() <= DISCRIMINANT_EPSILON {
        return vec![-b / (2.0 * a)];
    }

    let sqrt_d = discriminant.sqrt();
    let x1 = (-b - sqrt_d) / (2.0 * a);
    let x2 = (-b + sqrt_d) / (2.0 * a);
    // Bei a < 0 kehrt sich die Reihenfolge um
    if x1 <= x2 {
        vec![x1, x2]
    } else {
        vec![x2, x1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LineCoefficients, ParabolaCoefficients};
    use approx::assert_relative_eq;

    fn parabola(a: f64, p: f64, q: f64) -> Parabola {
        Parabola::from_coefficients(ParabolaCoefficients { a, p, q })
    }

    fn line(m: f64, n: f64) -> Line {
        Line::from_coefficients(LineCoefficients { m, n })
    }

    #[test]
    fn unit_parabola_and_diagonal_meet_at_origin_and_one() {
        let points = solve_intersections(&parabola(1.0, 0.0, 0.0), &line(1.0, 0.0));
        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0].x, 0.0);
        assert_relative_eq!(points[0].y, 0.0);
        assert_relative_eq!(points[1].x, 1.0);
        assert_relative_eq!(points[1].y, 1.0);
    }

    #[test]
    fn vertex_above_line_has_no_intersection() {
        let points = solve_intersections(&parabola(1.0, 0.0, 5.0), &line(0.0, 0.0));
        assert!(points.is_empty());
    }

    #[test]
    fn tangent_line_touches_once_on_both_curves() {
        // y = x² und y = 2x − 1 berühren sich in (1, 1)
        let par = parabola(1.0, 0.0, 0.0);
        let lin = line(2.0, -1.0);
        let points = solve_intersections(&par, &lin);
        assert_eq!(points.len(), 1);
        let point = points[0];
        assert_relative_eq!(point.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(point.y, par.evaluate(point.x), epsilon = 1e-9);
        assert_relative_eq!(point.y, lin.evaluate(point.x), epsilon = 1e-9);
    }

    #[test]
    fn roots_are_ascending_for_downward_parabola() {
        let points = solve_intersections(&parabola(-1.0, 0.0, 4.0), &line(0.0, 0.0));
        assert_eq!(points.len(), 2);
        assert!(points[0].x < points[1].x);
        assert_relative_eq!(points[0].x, -2.0, epsilon = 1e-12);
        assert_relative_eq!(points[1].x, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn line_and_parabola_y_agree_on_shifted_vertex() {
        let par = parabola(0.5, -1.5, -2.0);
        let lin = line(-0.75, 1.25);
        for point in solve_intersections(&par, &lin) {
            assert_relative_eq!(point.y, par.evaluate(point.x), epsilon = 1e-9);
        }
    }

    #[test]
    fn degenerate_quadratic_falls_back_to_linear() {
        assert_eq!(solve_quadratic_roots(0.0, 2.0, -4.0), vec![2.0]);
        assert!(solve_quadratic_roots(0.0, 0.0, 1.0).is_empty());
    }
}
