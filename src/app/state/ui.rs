use crate::core::GraphType;
use crate::shared::{DisplayFlags, LabelOffsets};

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Sichtbarkeits- und Modus-Schalter
    pub flags: DisplayFlags,
    /// Verschiebung der Gleichungs-Labels
    pub label_offsets: LabelOffsets,
}

/// Zweistufige Auswahl "Schnittpunkt → Kurve"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstrainedSelection {
    /// Index des angetippten Schnittpunkts
    pub point_index: Option<usize>,
    /// Gewählte Kurve (None = Auswahl steht noch aus)
    pub graph: Option<GraphType>,
}

impl ConstrainedSelection {
    /// Wartet ein Schnittpunkt auf die Wahl der Kurve?
    pub fn is_pending(&self) -> bool {
        self.point_index.is_some() && self.graph.is_none()
    }

    /// Verwirft die Auswahl.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Stärke einer angeforderten haptischen Rückmeldung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Leichter Impuls (Punkt gesetzt, Einrasten)
    Light,
    /// Mittlerer Impuls (Kurve gegriffen, Punkt entfernt)
    Medium,
    /// Starker Impuls (Gerade aus Punkten erzeugt)
    Heavy,
}
