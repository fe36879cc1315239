//! Benannte, lokal behebbare Fehlerzustände des Graph-Kerns.
//!
//! Keiner dieser Zustände ist fatal: Die auslösende Operation lässt den
//! vorherigen gültigen Zustand unverändert und meldet nur die Bedingung.

/// Meldbare Bedingung einer abgelehnten Operation.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Für die Geradenkonstruktion werden mindestens zwei Punkte benötigt
    #[error("mindestens zwei Punkte benötigt")]
    InsufficientPoints,
    /// Beide Punkte fallen zusammen, die Steigung ist unbestimmt
    #[error("zwei identische Punkte gewählt, bitte zwei verschiedene Punkte angeben")]
    IdenticalPoints,
    /// Gleiche x-Koordinate: senkrechte Gerade ist nicht als y = mx + n darstellbar
    #[error("senkrechte Gerade x = {x:.1} ist nicht als y = mx + n darstellbar")]
    VerticalLine {
        /// Gemeinsame x-Koordinate beider Punkte
        x: f64,
    },
    /// Eingabe oder Rechenergebnis ist NaN oder unendlich
    #[error("nicht-endlicher Wert abgelehnt")]
    NonFiniteValue,
    /// Bruch-Eingabe mit Nenner 0
    #[error("Nenner 0 ist nicht erlaubt")]
    ZeroDenominator,
    /// Punktspeicher ist voll
    #[error("maximal {capacity} Punkte erlaubt")]
    PointCapacityReached {
        /// Maximale Anzahl Punkte
        capacity: usize,
    },
    /// Ungültiger Punkt-Index beim Entfernen
    #[error("Punkt-Index {index} außerhalb von 0..{len}")]
    PointIndexOutOfRange {
        /// Angefragter Index
        index: usize,
        /// Aktuelle Anzahl Punkte
        len: usize,
    },
    /// Ungültiger Schnittpunkt-Index bei der Graph-Auswahl
    #[error("Schnittpunkt-Index {index} außerhalb von 0..{len}")]
    IntersectionIndexOutOfRange {
        /// Angefragter Index
        index: usize,
        /// Aktuelle Anzahl Schnittpunkte
        len: usize,
    },
}
