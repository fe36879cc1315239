use crate::core::{Coefficient, GraphType};
use crate::shared::{DisplayFlag, GraphOptions};
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI, Gesten oder System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: DVec2 },
    /// Ursprung um ein Screen-Delta verschieben
    CameraPan { delta: DVec2 },
    /// Zoom relativ ändern (Verhältnis aktueller / vorheriger Pinch-Skalierung)
    CameraZoom { factor: f64 },
    /// Zoom und Pan auf Standard zurücksetzen
    ResetZoomAndPanRequested,

    /// Rubber-Banding: Parabel wurde gegriffen
    CurveDragStarted,
    /// Rubber-Banding: neuer Wert für a
    CurveDragUpdated { a: f64 },
    /// Rubber-Banding: losgelassen
    CurveDragEnded,
    /// Rubber-Banding: vom System abgebrochen
    CurveDragCancelled,

    /// Koeffizienten-Regler bewegt (rastet bei aktivem Grid-Snap ein)
    CoefficientSliderMoved {
        coefficient: Coefficient,
        value: f64,
    },
    /// Koeffizient als Dezimalzahl eingegeben
    CoefficientEntered {
        coefficient: Coefficient,
        value: f64,
    },
    /// Koeffizient als Bruch eingegeben
    CoefficientFractionEntered {
        coefficient: Coefficient,
        numerator: f64,
        denominator: f64,
    },

    /// Tap auf freie Fläche im Geometrie-Modus (Mathe-Position, ungerastert)
    MarkedPointAddRequested { position: DVec2 },
    /// Tap auf einen markierten Punkt
    MarkedPointRemoveRequested { index: usize },
    /// Punkt über die Koordinaten-Eingabe hinzufügen
    AddPointFromInputRequested { x: f64, y: f64 },
    /// Alle markierten Punkte entfernen
    ClearMarkedPointsRequested,
    /// Gerade durch die Punkte A und B legen
    CreateLineFromPointsRequested,

    /// Tap auf einen Schnittpunkt
    IntersectionTapped { index: usize },
    /// Kurve für den angetippten Schnittpunkt gewählt
    GraphSelected { graph: GraphType },
    /// Kurvenwahl abgebrochen
    GraphSelectionCancelled,

    /// Skizzen-Punkt setzen
    SketchPointRequested { position: DVec2 },
    /// Skizzen-Strecke ziehen
    SketchSegmentRequested { start: DVec2, end: DVec2 },
    /// Skizze leeren
    ClearGeometryRequested,

    /// Anzeige-Schalter geändert
    DisplayFlagChanged { flag: DisplayFlag, enabled: bool },
    /// Gleichungs-Label verschoben
    LabelOffsetChanged { graph: GraphType, offset: DVec2 },
    /// Label-Positionen zurücksetzen
    ResetLabelPositionsRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: GraphOptions },
    /// Alles auf Anfang
    ResetRequested,
}
