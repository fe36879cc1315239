//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod graph_scene;
pub mod options;

pub use graph_scene::{
    CoefficientFractions, ConstrainedPoint, DisplayFlag, DisplayFlags, DistanceSegment,
    GraphScene, LabelOffsets,
};
pub use options::{GraphOptions, InputMode, Theme};
