//! Builder für Graph-Szenen aus dem AppState.

use crate::app::use_cases::curves::coefficient_value;
use crate::app::AppState;
use crate::core::{approximate_fraction, Coefficient};
use crate::shared::{
    CoefficientFractions, ConstrainedPoint, DistanceSegment, GraphScene, InputMode,
};

/// Baut eine GraphScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> GraphScene {
    let coordinate_system = state.coordinate_system();
    let intersections = state.intersections();

    let distances = if state.ui.flags.show_distances {
        state
            .points
            .pairwise_distances()
            .map(|d| DistanceSegment {
                from_label: d.from.label,
                to_label: d.to.label,
                from: d.from.position,
                to: d.to.position,
                distance: d.distance,
            })
            .collect()
    } else {
        Vec::new()
    };

    // Ein Index kann nach einer Kurvenänderung ins Leere zeigen
    let constrained_point = state.constrained.point_index.and_then(|index| {
        intersections.get(index).map(|p| ConstrainedPoint {
            index,
            position: p.position(),
            graph: state.constrained.graph,
        })
    });

    let fractions = (state.options.input_mode == InputMode::Fraction).then(|| {
        let frac = |c| approximate_fraction(coefficient_value(state, c));
        CoefficientFractions {
            a: frac(Coefficient::A),
            p: frac(Coefficient::P),
            q: frac(Coefficient::Q),
            m: frac(Coefficient::M),
            n: frac(Coefficient::N),
        }
    });

    GraphScene {
        parabola: state.parabola,
        line: state.line,
        area: state.area(),
        intersections,
        marked_points: state.points.points().to_vec(),
        distances,
        ghost: state.ghost,
        coordinate_system,
        visible_bounds: coordinate_system.visible_math_bounds(),
        flags: state.ui.flags,
        label_offsets: state.ui.label_offsets,
        sketch: state.sketch.elements().to_vec(),
        constrained_point,
        is_line_from_points: state.is_line_from_points,
        line_creation_error: state.line_creation_error.clone(),
        theme: state.options.theme,
        fractions,
    }
}
