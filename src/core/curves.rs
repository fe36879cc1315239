//! Kurvenmodelle: Parabel y = a(x−p)² + q und Gerade y = mx + n.
//!
//! Beide Typen werden ausschließlich über validierende Setter verändert.
//! Werte außerhalb des erlaubten Bereichs werden geklemmt, nicht-endliche
//! Werte abgelehnt (der letzte gültige Wert bleibt erhalten).

use super::GraphError;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Erlaubter Bereich für a, p, q und m.
pub const COEFFICIENT_RANGE: RangeInclusive<f64> = -5.0..=5.0;
/// Erlaubter Bereich für den y-Achsenabschnitt n.
pub const LINE_N_RANGE: RangeInclusive<f64> = -10.0..=10.0;
/// Minimaler Betrag von a (a = 0 wäre keine Parabel mehr).
pub const MIN_A_MAGNITUDE: f64 = 0.01;

/// Einzelner editierbarer Koeffizient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coefficient {
    /// Öffnung der Parabel
    A,
    /// Scheitel-x der Parabel
    P,
    /// Scheitel-y der Parabel
    Q,
    /// Steigung der Geraden
    M,
    /// y-Achsenabschnitt der Geraden
    N,
}

impl Coefficient {
    /// Gehört der Koeffizient zur Parabel?
    pub fn is_parabola(self) -> bool {
        matches!(self, Self::A | Self::P | Self::Q)
    }
}

/// Rohwerte einer Parabel (z.B. aus der Optionen-Datei), noch unvalidiert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParabolaCoefficients {
    /// Öffnung
    pub a: f64,
    /// Scheitel-x
    pub p: f64,
    /// Scheitel-y
    pub q: f64,
}

impl Default for ParabolaCoefficients {
    fn default() -> Self {
        Self {
            a: 1.0,
            p: 0.0,
            q: 0.0,
        }
    }
}

/// Rohwerte einer Geraden, noch unvalidiert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineCoefficients {
    /// Steigung
    pub m: f64,
    /// y-Achsenabschnitt
    pub n: f64,
}

impl Default for LineCoefficients {
    fn default() -> Self {
        Self { m: 1.0, n: 2.0 }
    }
}

/// Welche der beiden Kurven gemeint ist (z.B. bei der Graph-Auswahl)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphType {
    /// Parabel
    Parabola,
    /// Gerade
    Line,
}

/// Meldet abgelehnte Startwerte; die Komponente behält ihren Default.
fn warn_rejected(curve: &str, results: &[(&str, Result<(), GraphError>)]) {
    for (name, result) in results {
        if let Err(err) = result {
            log::warn!("{curve}: Startwert für {name} verworfen ({err}), Default bleibt");
        }
    }
}

fn clamp_finite(value: f64, range: &RangeInclusive<f64>) -> Result<f64, GraphError> {
    if !value.is_finite() {
        return Err(GraphError::NonFiniteValue);
    }
    Ok(value.clamp(*range.start(), *range.end()))
}

/// Parabel in Scheitelform y = a(x−p)² + q
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Parabola {
    a: f64,
    p: f64,
    q: f64,
}

impl Default for Parabola {
    fn default() -> Self {
        Self {
            a: 1.0,
            p: 0.0,
            q: 0.0,
        }
    }
}

impl Parabola {
    /// Erstellt eine Parabel über die validierenden Setter.
    ///
    /// Nicht-endliche Komponenten behalten ihren Standardwert.
    pub fn from_coefficients(c: ParabolaCoefficients) -> Self {
        let mut parabola = Self::default();
        let results = [
            ("a", parabola.set_a(c.a, false)),
            ("p", parabola.set_p(c.p, false)),
            ("q", parabola.set_q(c.q, false)),
        ];
        warn_rejected("Parabel", &results);
        parabola
    }

    /// Öffnungsfaktor a (nie 0)
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Scheitel-x
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Scheitel-y
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Scheitelpunkt (p, q)
    pub fn vertex(&self) -> DVec2 {
        DVec2::new(self.p, self.q)
    }

    /// Rohwerte der aktuellen Parabel
    pub fn coefficients(&self) -> ParabolaCoefficients {
        ParabolaCoefficients {
            a: self.a,
            p: self.p,
            q: self.q,
        }
    }

    /// y-Wert an der Stelle x.
    pub fn evaluate(&self, x: f64) -> f64 {
        let dx = x - self.p;
        self.a * dx * dx + self.q
    }

    /// Setzt a: klemmt auf ±5, rundet optional, hält |a| ≥ 0.01.
    ///
    /// Bei |a| < 0.01 wird das Vorzeichen beibehalten, 0 wird zu +0.01.
    pub fn set_a(&mut self, value: f64, snap: bool) -> Result<(), GraphError> {
        let mut v = clamp_finite(value, &COEFFICIENT_RANGE)?;
        if snap {
            v = v.round();
        }
        if v.abs() < MIN_A_MAGNITUDE {
            v = if v >= 0.0 {
                MIN_A_MAGNITUDE
            } else {
                -MIN_A_MAGNITUDE
            };
        }
        self.a = v;
        Ok(())
    }

    /// Setzt p (geklemmt auf ±5, optional gerundet).
    pub fn set_p(&mut self, value: f64, snap: bool) -> Result<(), GraphError> {
        let v = clamp_finite(value, &COEFFICIENT_RANGE)?;
        self.p = if snap { v.round() } else { v };
        Ok(())
    }

    /// Setzt q (geklemmt auf ±5, optional gerundet).
    pub fn set_q(&mut self, value: f64, snap: bool) -> Result<(), GraphError> {
        let v = clamp_finite(value, &COEFFICIENT_RANGE)?;
        self.q = if snap { v.round() } else { v };
        Ok(())
    }
}

/// Gerade y = mx + n
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    m: f64,
    n: f64,
}

impl Default for Line {
    fn default() -> Self {
        Self { m: 1.0, n: 2.0 }
    }
}

impl Line {
    /// Erstellt eine Gerade über die validierenden Setter.
    pub fn from_coefficients(c: LineCoefficients) -> Self {
        let mut line = Self::default();
        let results = [("m", line.set_m(c.m)), ("n", line.set_n(c.n))];
        warn_rejected("Gerade", &results);
        line
    }

    /// Steigung
    pub fn m(&self) -> f64 {
        self.m
    }

    /// y-Achsenabschnitt
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Rohwerte der aktuellen Geraden
    pub fn coefficients(&self) -> LineCoefficients {
        LineCoefficients {
            m: self.m,
            n: self.n,
        }
    }

    /// y-Wert an der Stelle x.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.m * x + self.n
    }

    /// Setzt m (geklemmt auf ±5).
    pub fn set_m(&mut self, value: f64) -> Result<(), GraphError> {
        self.m = clamp_finite(value, &COEFFICIENT_RANGE)?;
        Ok(())
    }

    /// Setzt n (geklemmt auf ±10).
    pub fn set_n(&mut self, value: f64) -> Result<(), GraphError> {
        self.n = clamp_finite(value, &LINE_N_RANGE)?;
        Ok(())
    }
}

/// Schnappschuss der Kurven zu Beginn eines Drags (nur für die Geister-Darstellung).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GhostState {
    /// Parabel vor dem Drag
    pub parabola: Parabola,
    /// Gerade vor dem Drag
    pub line: Line,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_startup_values() {
        let parabola = Parabola::default();
        let line = Line::default();
        assert_eq!((parabola.a(), parabola.p(), parabola.q()), (1.0, 0.0, 0.0));
        assert_eq!((line.m(), line.n()), (1.0, 2.0));
    }

    #[test]
    fn evaluate_uses_vertex_form() {
        let parabola = Parabola::from_coefficients(ParabolaCoefficients {
            a: 2.0,
            p: 1.0,
            q: -3.0,
        });
        assert_relative_eq!(parabola.evaluate(3.0), 5.0);
        assert_relative_eq!(parabola.evaluate(1.0), -3.0);
    }

    #[test]
    fn set_a_zero_becomes_positive_minimum() {
        let mut parabola = Parabola::default();
        parabola.set_a(0.0, false).unwrap();
        assert_eq!(parabola.a(), 0.01);
    }

    #[test]
    fn set_a_small_negative_keeps_sign() {
        let mut parabola = Parabola::default();
        parabola.set_a(-0.004, false).unwrap();
        assert_eq!(parabola.a(), -0.01);
    }

    #[test]
    fn set_a_clamps_to_range() {
        let mut parabola = Parabola::default();
        parabola.set_a(100.0, false).unwrap();
        assert_eq!(parabola.a(), 5.0);
        parabola.set_a(-100.0, false).unwrap();
        assert_eq!(parabola.a(), -5.0);
    }

    #[test]
    fn set_a_snap_to_zero_is_reclamped() {
        let mut parabola = Parabola::default();
        parabola.set_a(0.4, true).unwrap();
        assert_eq!(parabola.a(), 0.01);
        parabola.set_a(1.6, true).unwrap();
        assert_eq!(parabola.a(), 2.0);
    }

    #[test]
    fn non_finite_input_keeps_previous_value() {
        let mut parabola = Parabola::default();
        parabola.set_a(3.0, false).unwrap();
        assert_eq!(
            parabola.set_a(f64::NAN, false),
            Err(GraphError::NonFiniteValue)
        );
        assert_eq!(parabola.a(), 3.0);

        let mut line = Line::default();
        assert!(line.set_n(f64::INFINITY).is_err());
        assert_eq!(line.n(), 2.0);
    }

    #[test]
    fn line_ranges_differ_for_m_and_n() {
        let mut line = Line::default();
        line.set_m(7.0).unwrap();
        line.set_n(-12.0).unwrap();
        assert_eq!(line.m(), 5.0);
        assert_eq!(line.n(), -10.0);
    }

    #[test]
    fn from_coefficients_validates_every_component() {
        let parabola = Parabola::from_coefficients(ParabolaCoefficients {
            a: 0.0,
            p: 9.0,
            q: f64::NAN,
        });
        assert_eq!(parabola.a(), 0.01);
        assert_eq!(parabola.p(), 5.0);
        assert_eq!(parabola.q(), 0.0);
    }

    #[test]
    fn from_coefficients_keeps_default_for_rejected_line_values() {
        let line = Line::from_coefficients(LineCoefficients {
            m: f64::INFINITY,
            n: -3.0,
        });
        assert_eq!(line.m(), 1.0);
        assert_eq!(line.n(), -3.0);
    }
}
