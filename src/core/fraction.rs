//! Bruch-Eingabe und Bruch-Näherung für die Koeffizienten-Anzeige.

use super::GraphError;

/// Maximale Abweichung, ab der ein Bruch als Treffer gilt.
pub const FRACTION_TOLERANCE: f64 = 0.001;
/// Größter getesteter Nenner.
pub const MAX_DENOMINATOR: i64 = 20;
/// Nenner der Rückfall-Darstellung (Hundertstel).
pub const FALLBACK_DENOMINATOR: i64 = 100;

/// Wert eines eingegebenen Bruchs.
///
/// Nenner 0 und nicht-endliche Ergebnisse werden abgelehnt, bevor der Wert
/// ein Modell erreicht.
pub fn fraction_value(numerator: f64, denominator: f64) -> Result<f64, GraphError> {
    if denominator == 0.0 {
        return Err(GraphError::ZeroDenominator);
    }
    let value = numerator / denominator;
    if !value.is_finite() {
        return Err(GraphError::NonFiniteValue);
    }
    Ok(value)
}

/// Nähert einen Wert als (Zähler, Nenner) an.
///
/// Ganze Zahlen liefern Nenner 1, sonst wird der kleinste Nenner in
/// 2..=20 gesucht; ohne Treffer wird auf Hundertstel gerundet.
pub fn approximate_fraction(value: f64) -> (i64, i64) {
    if !value.is_finite() {
        return (0, 1);
    }
    if (value - value.round()).abs() < FRACTION_TOLERANCE {
        return (value.round() as i64, 1);
    }
    (2..=MAX_DENOMINATOR)
        .find_map(|den| {
            let num = (value * den as f64).round();
            ((num / den as f64 - value).abs() < FRACTION_TOLERANCE).then_some((num as i64, den))
        })
        .unwrap_or_else(|| {
            (
                (value * FALLBACK_DENOMINATOR as f64).round() as i64,
                FALLBACK_DENOMINATOR,
            )
        })
}
