use crate::core::{Coefficient, GraphType};
use crate::shared::{DisplayFlag, GraphOptions};
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Viewport-Größe setzen
    SetViewportSize { size: DVec2 },
    /// Ursprung verschieben
    PanView { delta: DVec2 },
    /// Zoom mit Faktor multiplizieren (geklemmt)
    ZoomView { factor: f64 },
    /// Zoom und Pan zurücksetzen
    ResetZoomAndPan,

    /// Geister-Schnappschuss aufnehmen
    BeginCurveDrag,
    /// a während des Drags setzen (ohne Einrasten)
    DragParabolaA { value: f64 },
    /// Drag abschließen (Geist verwerfen, optional einrasten)
    EndCurveDrag,
    /// Drag abbrechen (Geist wiederherstellen)
    CancelCurveDrag,
    /// Koeffizient über den validierenden Setter setzen
    SetCoefficient {
        coefficient: Coefficient,
        value: f64,
        snap: bool,
    },
    /// Koeffizient aus Bruch setzen
    SetCoefficientFraction {
        coefficient: Coefficient,
        numerator: f64,
        denominator: f64,
    },
    /// Kurven auf die Startwerte zurücksetzen
    ResetCurves,

    /// Markierten Punkt hinzufügen
    AddMarkedPoint { position: DVec2 },
    /// Markierten Punkt entfernen
    RemoveMarkedPoint { index: usize },
    /// Alle markierten Punkte entfernen
    ClearMarkedPoints,
    /// Gerade aus den Punkten A und B ableiten
    CreateLineFromPoints,

    /// Schnittpunkt für die Kurvenwahl vormerken
    SelectIntersection { index: usize },
    /// Kurve für den vorgemerkten Schnittpunkt festlegen
    ChooseGraph { graph: GraphType },
    /// Kurvenwahl verwerfen
    CancelGraphSelection,

    /// Skizzen-Punkt hinzufügen
    AddSketchPoint { position: DVec2 },
    /// Skizzen-Strecke hinzufügen
    AddSketchSegment { start: DVec2, end: DVec2 },
    /// Skizze leeren
    ClearGeometry,

    /// Anzeige-Schalter setzen
    SetDisplayFlag { flag: DisplayFlag, enabled: bool },
    /// Alle Anzeige-Schalter auf Standard
    ResetDisplayFlags,
    /// Label-Verschiebung setzen
    SetLabelOffset { graph: GraphType, offset: DVec2 },
    /// Label-Verschiebungen zurücksetzen
    ResetLabelPositions,
    /// Optionen anwenden
    ApplyOptions { options: GraphOptions },
}
