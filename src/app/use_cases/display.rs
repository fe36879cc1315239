//! Use-Cases für Anzeige-Schalter, Labels und Optionen.

use crate::app::{AppState, Feedback};
use crate::core::GraphType;
use crate::shared::{DisplayFlag, DisplayFlags, GraphOptions, LabelOffsets};
use glam::DVec2;

/// Setzt einen Anzeige-Schalter.
pub fn set_display_flag(state: &mut AppState, flag: DisplayFlag, enabled: bool) {
    state.ui.flags.set(flag, enabled);
    log::debug!("{:?} = {}", flag, enabled);
}

/// Setzt alle Anzeige-Schalter auf Standard (alle Modi aus).
pub fn reset_display_flags(state: &mut AppState) {
    state.ui.flags = DisplayFlags::default();
}

/// Verschiebt das Gleichungs-Label einer Kurve.
pub fn set_label_offset(state: &mut AppState, graph: GraphType, offset: DVec2) {
    if !offset.is_finite() {
        return;
    }
    match graph {
        GraphType::Parabola => state.ui.label_offsets.parabola = offset,
        GraphType::Line => state.ui.label_offsets.line = offset,
    }
}

/// Setzt beide Label-Verschiebungen zurück.
pub fn reset_label_positions(state: &mut AppState) {
    state.ui.label_offsets = LabelOffsets::default();
    state.push_feedback(Feedback::Medium);
}

/// Übernimmt neue Optionen; der Zoom wird auf den neuen Bereich geklemmt.
pub fn apply_options(state: &mut AppState, options: GraphOptions) {
    state.options = options.sanitized();
    state.view.zoom_scale = state.options.clamp_zoom(state.view.zoom_scale);
    log::info!("Optionen übernommen");
}
