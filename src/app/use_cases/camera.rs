//! Use-Case-Funktionen für Zoom, Pan und Viewport.

use crate::app::AppState;
use glam::DVec2;

/// Übernimmt eine neue Viewport-Größe (negative oder ungültige Größen werden ignoriert).
pub fn resize(state: &mut AppState, size: DVec2) {
    if !size.is_finite() || size.x < 0.0 || size.y < 0.0 {
        log::warn!("Ungültige Viewport-Größe ignoriert: {:?}", size);
        return;
    }
    state.view.viewport_size = size;
}

/// Addiert ein Screen-Delta direkt auf den Pan-Offset.
pub fn pan(state: &mut AppState, delta: DVec2) {
    if !delta.is_finite() {
        return;
    }
    state.view.pan_offset += delta;
}

/// Multipliziert den Zoom mit `factor` und klemmt auf den erlaubten Bereich.
pub fn zoom_by(state: &mut AppState, factor: f64) {
    if !factor.is_finite() || factor <= 0.0 {
        log::warn!("Ungültiger Zoom-Faktor ignoriert: {}", factor);
        return;
    }
    state.view.zoom_scale = state.options.clamp_zoom(state.view.zoom_scale * factor);
}

/// Setzt Zoom und Pan auf Standard zurück.
pub fn reset_zoom_and_pan(state: &mut AppState) {
    state.view.zoom_scale = 1.0;
    state.view.pan_offset = DVec2::ZERO;
    log::info!("Zoom und Verschiebung zurückgesetzt");
}
