use crate::core::CoordinateSystem;
use glam::DVec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Screen-Punkten
    pub viewport_size: DVec2,
    /// Zoom-Faktor (1.0 = ±6 Einheiten auf der kürzeren Seite)
    pub zoom_scale: f64,
    /// Verschiebung des Ursprungs in Screen-Punkten
    pub pan_offset: DVec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: DVec2::ZERO,
            zoom_scale: 1.0,
            pan_offset: DVec2::ZERO,
        }
    }

    /// Koordinatensystem für den aktuellen Frame bzw. Hit-Test.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        CoordinateSystem::new(self.viewport_size, self.zoom_scale, self.pan_offset)
    }
}
