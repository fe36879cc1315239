//! Bidirektionale Abbildung zwischen Mathe-Raum und Bildschirm-Raum.
//!
//! Zustandslos: Jede Instanz wird pro Render- oder Hit-Test-Aufruf aus
//! Viewport-Größe, Zoom und Pan neu erzeugt.

use glam::DVec2;
use serde::Serialize;

/// Sichtbarer Ausschnitt in Mathe-Koordinaten
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MathBounds {
    /// Linker Rand
    pub min_x: f64,
    /// Rechter Rand
    pub max_x: f64,
    /// Unterer Rand
    pub min_y: f64,
    /// Oberer Rand
    pub max_y: f64,
}

/// Koordinatensystem mit Zoom und Pan (Screen-Y wächst nach unten).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateSystem {
    /// Viewport-Größe in Screen-Punkten
    pub viewport_size: DVec2,
    /// Zoom-Faktor (1.0 = ±6 Einheiten auf der kürzeren Seite)
    pub zoom_scale: f64,
    /// Verschiebung des Ursprungs in Screen-Punkten
    pub pan_offset: DVec2,
}

impl CoordinateSystem {
    /// Anzahl Mathe-Einheiten über die kürzere Viewport-Seite bei Zoom 1.0.
    pub const UNITS_ACROSS: f64 = 12.0;
    /// Standard-Rand für Sichtbarkeitsprüfungen (Mathe-Einheiten).
    pub const VISIBILITY_MARGIN: f64 = 2.0;

    /// Erstellt ein Koordinatensystem für den gegebenen Viewport.
    pub fn new(viewport_size: DVec2, zoom_scale: f64, pan_offset: DVec2) -> Self {
        Self {
            viewport_size,
            zoom_scale,
            pan_offset,
        }
    }

    /// Screen-Punkte pro Mathe-Einheit.
    ///
    /// Die kürzere Seite wird auf mindestens 1 Punkt begrenzt, damit ein
    /// noch nicht vermessener Viewport keine Division durch 0 erzeugt.
    pub fn scale(&self) -> f64 {
        let shorter = self.viewport_size.x.min(self.viewport_size.y).max(1.0);
        shorter / Self::UNITS_ACROSS * self.zoom_scale
    }

    /// Screen-Position des Mathe-Ursprungs.
    pub fn center(&self) -> DVec2 {
        self.viewport_size / 2.0 + self.pan_offset
    }

    /// Mathe → Screen.
    pub fn to_screen(&self, math: DVec2) -> DVec2 {
        let center = self.center();
        let scale = self.scale();
        DVec2::new(center.x + math.x * scale, center.y - math.y * scale)
    }

    /// Screen → Mathe (exakte Umkehrung von [`Self::to_screen`]).
    pub fn to_math(&self, screen: DVec2) -> DVec2 {
        let center = self.center();
        let scale = self.scale();
        DVec2::new((screen.x - center.x) / scale, (center.y - screen.y) / scale)
    }

    /// Rechnet eine Screen-Distanz in Mathe-Einheiten um.
    pub fn screen_to_math_distance(&self, screen_distance: f64) -> f64 {
        screen_distance / self.scale()
    }

    /// Sichtbarer Ausschnitt um die aktuelle Viewport-Mitte.
    pub fn visible_math_bounds(&self) -> MathBounds {
        let scale = self.scale();
        let mid = self.to_math(self.viewport_size / 2.0);
        let half_x = self.viewport_size.x / scale / 2.0;
        let half_y = self.viewport_size.y / scale / 2.0;
        MathBounds {
            min_x: mid.x - half_x,
            max_x: mid.x + half_x,
            min_y: mid.y - half_y,
            max_y: mid.y + half_y,
        }
    }

    /// Prüft, ob ein Mathe-Punkt inklusive Rand sichtbar ist.
    pub fn is_visible(&self, math: DVec2, margin: f64) -> bool {
        let b = self.visible_math_bounds();
        math.x >= b.min_x - margin
            && math.x <= b.max_x + margin
            && math.y >= b.min_y - margin
            && math.y <= b.max_y + margin
    }
}
