//! Graph Lab Library.
//! Interaktive Parabel/Gerade-Engine (Schnittpunkte, Flächen, Punkte, Gesten)
//! als Library für eine beliebige Oberfläche.

pub mod app;
pub mod core;
pub mod input;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, ConstrainedSelection, Feedback, UiState,
    ViewState,
};
pub use core::{
    compute_area, line_from_points, solve_intersections, AreaResult, CoordinateSystem,
    GraphError, GraphType, IntersectionPoint, Line, MarkedPoint, Parabola, PointStore,
};
pub use input::{GestureEvent, GestureMachine, GestureState};
pub use shared::{GraphOptions, GraphScene, InputMode, Theme};
