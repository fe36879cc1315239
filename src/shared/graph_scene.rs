//! Graph-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der (externe) Renderer sie
//! konsumiert. Alle Werte sind Kopien, die Szene hält keine Referenzen
//! in den App-Zustand.

use super::options::Theme;
use crate::core::{
    AreaResult, CoordinateSystem, GeometryElement, GhostState, GraphType, IntersectionPoint, Line,
    MarkedPoint, MathBounds, Parabola,
};
use glam::DVec2;
use serde::Serialize;

/// Sichtbarkeits- und Modus-Schalter der Zeichenfläche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayFlags {
    /// Parabel zeichnen
    pub show_parabola: bool,
    /// Gerade zeichnen
    pub show_line: bool,
    /// Abstände zwischen markierten Punkten anzeigen
    pub show_distances: bool,
    /// Fläche zwischen Ursprung und Schnittpunkten einfärben
    pub area_mode: bool,
    /// Geometrie-Modus (Punkte setzen, Skizze)
    pub geometry_mode: bool,
    /// Scheitelform-Regler für p und q anzeigen
    pub show_advanced_parabola: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            show_parabola: true,
            show_line: true,
            show_distances: false,
            area_mode: false,
            geometry_mode: false,
            show_advanced_parabola: false,
        }
    }
}

/// Einzelner Schalter aus [`DisplayFlags`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisplayFlag {
    /// Parabel zeichnen
    ShowParabola,
    /// Gerade zeichnen
    ShowLine,
    /// Abstände anzeigen
    ShowDistances,
    /// Flächen-Modus
    AreaMode,
    /// Geometrie-Modus
    GeometryMode,
    /// Erweiterte Parabel-Regler
    ShowAdvancedParabola,
}

impl DisplayFlags {
    /// Liest einen einzelnen Schalter.
    pub fn get(&self, flag: DisplayFlag) -> bool {
        match flag {
            DisplayFlag::ShowParabola => self.show_parabola,
            DisplayFlag::ShowLine => self.show_line,
            DisplayFlag::ShowDistances => self.show_distances,
            DisplayFlag::AreaMode => self.area_mode,
            DisplayFlag::GeometryMode => self.geometry_mode,
            DisplayFlag::ShowAdvancedParabola => self.show_advanced_parabola,
        }
    }

    /// Setzt einen einzelnen Schalter.
    pub fn set(&mut self, flag: DisplayFlag, enabled: bool) {
        let slot = match flag {
            DisplayFlag::ShowParabola => &mut self.show_parabola,
            DisplayFlag::ShowLine => &mut self.show_line,
            DisplayFlag::ShowDistances => &mut self.show_distances,
            DisplayFlag::AreaMode => &mut self.area_mode,
            DisplayFlag::GeometryMode => &mut self.geometry_mode,
            DisplayFlag::ShowAdvancedParabola => &mut self.show_advanced_parabola,
        };
        *slot = enabled;
    }
}

/// Verschiebung der Gleichungs-Labels in Screen-Punkten
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LabelOffsets {
    /// Label der Parabel
    pub parabola: DVec2,
    /// Label der Geraden
    pub line: DVec2,
}

/// Abstand zwischen zwei aufeinanderfolgenden markierten Punkten
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceSegment {
    /// Label des Startpunkts
    pub from_label: &'static str,
    /// Label des Endpunkts
    pub to_label: &'static str,
    /// Startposition
    pub from: DVec2,
    /// Endposition
    pub to: DVec2,
    /// Euklidischer Abstand
    pub distance: f64,
}

/// Angetippter Schnittpunkt, der auf die Wahl einer Kurve wartet
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConstrainedPoint {
    /// Index in der Schnittpunktliste
    pub index: usize,
    /// Position des Schnittpunkts
    pub position: DVec2,
    /// Gewählte Kurve (None = Auswahl steht noch aus)
    pub graph: Option<GraphType>,
}

/// Bruch-Darstellung aller Koeffizienten als (Zähler, Nenner)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoefficientFractions {
    /// Öffnung a
    pub a: (i64, i64),
    /// Scheitel-x p
    pub p: (i64, i64),
    /// Scheitel-y q
    pub q: (i64, i64),
    /// Steigung m
    pub m: (i64, i64),
    /// y-Achsenabschnitt n
    pub n: (i64, i64),
}

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone, Serialize)]
pub struct GraphScene {
    /// Aktuelle Parabel
    pub parabola: Parabola,
    /// Aktuelle Gerade
    pub line: Line,
    /// Schnittpunkte, aufsteigend nach x
    pub intersections: Vec<IntersectionPoint>,
    /// Fläche (nur im Flächen-Modus mit zwei Schnittpunkten)
    pub area: Option<AreaResult>,
    /// Markierte Punkte mit Labels
    pub marked_points: Vec<MarkedPoint>,
    /// Abstände aufeinanderfolgender Punkte (leer wenn ausgeblendet)
    pub distances: Vec<DistanceSegment>,
    /// Kurven vor dem laufenden Drag
    pub ghost: Option<GhostState>,
    /// Koordinatensystem für diesen Frame
    pub coordinate_system: CoordinateSystem,
    /// Sichtbarer Ausschnitt in Mathe-Koordinaten
    pub visible_bounds: MathBounds,
    /// Anzeige-Schalter
    pub flags: DisplayFlags,
    /// Label-Verschiebungen
    pub label_offsets: LabelOffsets,
    /// Freie Skizzen-Elemente
    pub sketch: Vec<GeometryElement>,
    /// Laufende Graph-Auswahl für einen Schnittpunkt
    pub constrained_point: Option<ConstrainedPoint>,
    /// Gerade stammt aus "Gerade durch zwei Punkte"
    pub is_line_from_points: bool,
    /// Letzte Fehlermeldung der Geradenkonstruktion
    pub line_creation_error: Option<String>,
    /// Farbschema
    pub theme: Theme,
    /// Koeffizienten als Brüche (nur im Bruch-Eingabemodus)
    pub fractions: Option<CoefficientFractions>,
}

impl GraphScene {
    /// Serialisiert die Szene für einen Host außerhalb von Rust.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Gibt zurück, ob eine Fläche angezeigt werden soll.
    pub fn has_area(&self) -> bool {
        self.area.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_are_symmetric() {
        let mut flags = DisplayFlags::default();
        flags.set(DisplayFlag::AreaMode, true);
        flags.set(DisplayFlag::ShowLine, false);
        assert!(flags.get(DisplayFlag::AreaMode));
        assert!(!flags.get(DisplayFlag::ShowLine));
        assert!(flags.get(DisplayFlag::ShowParabola));
    }

    #[test]
    fn curves_are_visible_by_default() {
        let flags = DisplayFlags::default();
        assert!(flags.show_parabola && flags.show_line);
        assert!(!flags.geometry_mode && !flags.area_mode);
    }
}
