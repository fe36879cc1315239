//! Handler für Anzeige-Schalter, Labels und Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GraphType;
use crate::shared::{DisplayFlag, GraphOptions};
use glam::DVec2;

/// Setzt einen Anzeige-Schalter.
pub fn set_flag(state: &mut AppState, flag: DisplayFlag, enabled: bool) {
    use_cases::display::set_display_flag(state, flag, enabled);
}

/// Setzt alle Anzeige-Schalter zurück.
pub fn reset_flags(state: &mut AppState) {
    use_cases::display::reset_display_flags(state);
}

/// Verschiebt ein Gleichungs-Label.
pub fn set_label_offset(state: &mut AppState, graph: GraphType, offset: DVec2) {
    use_cases::display::set_label_offset(state, graph, offset);
}

/// Setzt die Label-Verschiebungen zurück.
pub fn reset_label_positions(state: &mut AppState) {
    use_cases::display::reset_label_positions(state);
}

/// Übernimmt neue Optionen.
pub fn apply_options(state: &mut AppState, options: GraphOptions) {
    use_cases::display::apply_options(state, options);
}
