//! Gerade durch die ersten beiden markierten Punkte.

use super::{GraphError, LineCoefficients, PointStore};
use glam::DVec2;

/// Abstand, unterhalb dessen Koordinaten als gleich gelten.
pub const COINCIDENCE_TOLERANCE: f64 = 1e-10;

/// Leitet m und n aus zwei Punkten ab.
///
/// Zusammenfallende Punkte werden vor der senkrechten Geraden geprüft.
pub fn derive_line_coefficients(p1: DVec2, p2: DVec2) -> Result<LineCoefficients, GraphError> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    if dx.abs() < COINCIDENCE_TOLERANCE && dy.abs() < COINCIDENCE_TOLERANCE {
        return Err(GraphError::IdenticalPoints);
    }
    if dx.abs() < COINCIDENCE_TOLERANCE {
        return Err(GraphError::VerticalLine { x: p1.x });
    }

    let m = dy / dx;
    let n = p1.y - m * p1.x;
    if !m.is_finite() || !n.is_finite() {
        return Err(GraphError::NonFiniteValue);
    }
    Ok(LineCoefficients { m, n })
}

/// Gerade durch die Punkte A und B des Speichers.
///
/// Weitere Punkte werden ignoriert. Das Ergebnis ist ungeklemmt; die
/// Übernahme in die Gerade klemmt auf den erlaubten Bereich.
pub fn line_from_points(points: &PointStore) -> Result<LineCoefficients, GraphError> {
    let (Some(first), Some(second)) = (points.get(0), points.get(1)) else {
        return Err(GraphError::InsufficientPoints);
    };
    derive_line_coefficients(first.position, second.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn store(points: &[(f64, f64)]) -> PointStore {
        let mut store = PointStore::new();
        for &(x, y) in points {
            store.add(DVec2::new(x, y)).unwrap();
        }
        store
    }

    #[test]
    fn line_through_two_points() {
        let coeffs = line_from_points(&store(&[(0.0, 1.0), (2.0, 5.0)])).unwrap();
        assert_relative_eq!(coeffs.m, 2.0);
        assert_relative_eq!(coeffs.n, 1.0);
    }

    #[test]
    fn only_first_two_points_are_used() {
        let coeffs = line_from_points(&store(&[(0.0, 0.0), (1.0, 1.0), (5.0, -3.0)])).unwrap();
        assert_relative_eq!(coeffs.m, 1.0);
        assert_relative_eq!(coeffs.n, 0.0);
    }

    #[test]
    fn fewer_than_two_points_is_insufficient() {
        assert_eq!(
            line_from_points(&store(&[(1.0, 1.0)])),
            Err(GraphError::InsufficientPoints)
        );
        assert_eq!(
            line_from_points(&PointStore::new()),
            Err(GraphError::InsufficientPoints)
        );
    }

    #[test]
    fn same_x_is_vertical() {
        assert_eq!(
            line_from_points(&store(&[(2.0, 0.0), (2.0, 3.0)])),
            Err(GraphError::VerticalLine { x: 2.0 })
        );
    }

    #[test]
    fn identical_points_are_checked_before_vertical() {
        assert_eq!(
            derive_line_coefficients(DVec2::new(1.0, 1.0), DVec2::new(1.0, 1.0)),
            Err(GraphError::IdenticalPoints)
        );
    }
}
