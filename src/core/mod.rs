//! Core-Domänenmodelle: Koordinatensystem, Kurven, Löser und Punktspeicher.

pub mod area;
pub mod coordinate_system;
pub mod curves;
pub mod error;
pub mod fraction;
pub mod geometry_element;
pub mod intersection;
pub mod line_construction;
pub mod point_store;

pub use area::{compute_area, triangle_area, AreaRegions, AreaResult, AreaTriangle, RegionSide};
pub use coordinate_system::{CoordinateSystem, MathBounds};
pub use curves::{
    Coefficient, GhostState, GraphType, Line, LineCoefficients, Parabola, ParabolaCoefficients,
    COEFFICIENT_RANGE, LINE_N_RANGE, MIN_A_MAGNITUDE,
};
pub use error::GraphError;
pub use fraction::{approximate_fraction, fraction_value};
pub use geometry_element::{GeometryElement, SketchStore};
pub use intersection::{solve_intersections, IntersectionPoint, DISCRIMINANT_EPSILON};
pub use line_construction::{derive_line_coefficients, line_from_points, COINCIDENCE_TOLERANCE};
pub use point_store::{MarkedPoint, PointDistance, PointStore, MAX_MARKED_POINTS, POINT_LABELS};
