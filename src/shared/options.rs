//! Zentrale Konfiguration für Graph Lab.
//!
//! `GraphOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{LineCoefficients, ParabolaCoefficients};
use serde::{Deserialize, Deserializer, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const ZOOM_MIN: f64 = 0.5;
/// Maximaler Zoom-Faktor.
pub const ZOOM_MAX: f64 = 5.0;

// ── Gesten ──────────────────────────────────────────────────────────

/// Hit-Test-Radius für Schnittpunkte und markierte Punkte (Screen-Punkte).
pub const HIT_RADIUS_PX: f64 = 44.0;
/// Bewegung, unterhalb der eine Geste als Tap gilt (Screen-Punkte).
pub const TAP_SLOP_PX: f64 = 10.0;
/// Maximaler vertikaler Abstand zur Parabel für Rubber-Banding (Mathe-Einheiten).
pub const PARABOLA_PROXIMITY: f64 = 0.5;
/// Änderung von a pro Screen-Punkt vertikaler Bewegung.
pub const DRAG_SENSITIVITY: f64 = 0.01;

// ── Punkte & Skizze ─────────────────────────────────────────────────

/// Raster für neu gesetzte Punkte bei aktivem Grid-Snap (Mathe-Einheiten).
pub const POINT_GRID_STEP: f64 = 0.5;
/// Fangradius für Streckenenden in der Skizze (Screen-Punkte).
pub const SKETCH_SNAP_RADIUS_PX: f64 = 20.0;
/// Mindestlänge einer gezogenen Strecke (Screen-Punkte).
pub const SKETCH_MIN_SEGMENT_PX: f64 = 10.0;
/// Grenzwert für manuell eingegebene Punktkoordinaten.
pub const MANUAL_POINT_LIMIT: f64 = 100.0;

// ── Einstellungs-Enums ──────────────────────────────────────────────

/// Farbschema der Zeichenfläche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Theme {
    /// Heller Hintergrund
    #[default]
    Light,
    /// Dunkler Hintergrund
    Dark,
    /// Tafel-Optik
    Blackboard,
}

impl Theme {
    /// Liest einen gespeicherten Namen (inkl. Alt-Werte früherer Versionen).
    pub fn from_persisted(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Light" | "light" | "ライト" => Some(Self::Light),
            "Dark" | "dark" | "ダーク" => Some(Self::Dark),
            "Blackboard" | "blackboard" | "黒板" => Some(Self::Blackboard),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_persisted(&raw).unwrap_or_else(|| {
            log::warn!("Unbekanntes Farbschema '{}', verwende Standard", raw);
            Self::default()
        }))
    }
}

/// Eingabemodus für Koeffizienten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum InputMode {
    /// Dezimalzahlen
    #[default]
    Decimal,
    /// Brüche (Zähler / Nenner)
    Fraction,
}

impl InputMode {
    /// Liest einen gespeicherten Namen (inkl. Alt-Werte früherer Versionen).
    pub fn from_persisted(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Decimal" | "decimal" | "小数" => Some(Self::Decimal),
            "Fraction" | "fraction" | "分数" => Some(Self::Fraction),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for InputMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_persisted(&raw).unwrap_or_else(|| {
            log::warn!("Unbekannter Eingabemodus '{}', verwende Standard", raw);
            Self::default()
        }))
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `graph_lab.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    // ── Einstellungen ───────────────────────────────────────────
    /// Koeffizienten und neue Punkte auf das Raster einrasten
    pub grid_snap_enabled: bool,
    /// Haptische Rückmeldungen anfordern
    pub haptics_enabled: bool,
    /// Farbschema
    pub theme: Theme,
    /// Eingabemodus für Koeffizienten
    pub input_mode: InputMode,

    // ── Gesten ──────────────────────────────────────────────────
    /// Hit-Test-Radius in Screen-Punkten
    pub hit_radius_px: f64,
    /// Tap-Toleranz in Screen-Punkten
    pub tap_slop_px: f64,
    /// Maximaler Abstand zur Parabel für Rubber-Banding
    pub parabola_proximity: f64,
    /// Änderung von a pro Screen-Punkt
    pub drag_sensitivity: f64,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub zoom_min: f64,
    /// Maximaler Zoom-Faktor
    pub zoom_max: f64,

    // ── Punkte & Skizze ─────────────────────────────────────────
    /// Raster für neue Punkte
    pub point_grid_step: f64,
    /// Fangradius für Streckenenden
    pub sketch_snap_radius_px: f64,

    // ── Startwerte (als TOML-Tabellen zuletzt) ──────────────────
    /// Parabel beim Start und nach Reset
    pub default_parabola: ParabolaCoefficients,
    /// Gerade beim Start und nach Reset
    pub default_line: LineCoefficients,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            grid_snap_enabled: true,
            haptics_enabled: true,
            theme: Theme::default(),
            input_mode: InputMode::default(),

            hit_radius_px: HIT_RADIUS_PX,
            tap_slop_px: TAP_SLOP_PX,
            parabola_proximity: PARABOLA_PROXIMITY,
            drag_sensitivity: DRAG_SENSITIVITY,

            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,

            point_grid_step: POINT_GRID_STEP,
            sketch_snap_radius_px: SKETCH_SNAP_RADIUS_PX,

            default_parabola: ParabolaCoefficients::default(),
            default_line: LineCoefficients::default(),
        }
    }
}

impl GraphOptions {
    /// Parst Optionen aus einem TOML-String.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        Ok(opts.sanitized())
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("graph_lab"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("graph_lab.toml")
    }

    /// Ersetzt unbrauchbare Tunables durch ihre Standardwerte.
    ///
    /// Radien und Schrittweiten müssen positiv sein, der Zoom-Bereich
    /// muss aufsteigend sein.
    pub fn sanitized(mut self) -> Self {
        fn positive_or(value: f64, fallback: f64) -> f64 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        }

        self.hit_radius_px = positive_or(self.hit_radius_px, HIT_RADIUS_PX);
        self.tap_slop_px = positive_or(self.tap_slop_px, TAP_SLOP_PX);
        self.parabola_proximity = positive_or(self.parabola_proximity, PARABOLA_PROXIMITY);
        self.drag_sensitivity = positive_or(self.drag_sensitivity, DRAG_SENSITIVITY);
        self.point_grid_step = positive_or(self.point_grid_step, POINT_GRID_STEP);
        self.sketch_snap_radius_px = positive_or(self.sketch_snap_radius_px, SKETCH_SNAP_RADIUS_PX);

        let zoom_min = positive_or(self.zoom_min, ZOOM_MIN);
        let zoom_max = positive_or(self.zoom_max, ZOOM_MAX);
        if zoom_min < zoom_max {
            self.zoom_min = zoom_min;
            self.zoom_max = zoom_max;
        } else {
            log::warn!(
                "Ungültiger Zoom-Bereich {}..{}, verwende Standard",
                self.zoom_min,
                self.zoom_max
            );
            self.zoom_min = ZOOM_MIN;
            self.zoom_max = ZOOM_MAX;
        }
        self
    }

    /// Klemmt einen Zoom-Faktor auf den konfigurierten Bereich.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.zoom_min, self.zoom_max)
    }
}
