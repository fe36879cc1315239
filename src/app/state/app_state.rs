use crate::app::CommandLog;
use crate::core::{
    compute_area, solve_intersections, AreaResult, CoordinateSystem, GhostState, GraphError,
    IntersectionPoint, Line, Parabola, PointStore, SketchStore,
};
use crate::shared::GraphOptions;
use glam::DVec2;

use super::{ConstrainedSelection, Feedback, UiState, ViewState};

/// Hauptzustand der Anwendung
#[derive(Clone)]
pub struct AppState {
    /// Aktuelle Parabel
    pub parabola: Parabola,
    /// Aktuelle Gerade
    pub line: Line,
    /// Markierte Punkte (A–J)
    pub points: PointStore,
    /// Freie Skizze
    pub sketch: SketchStore,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Kurven vor dem laufenden Drag (None = kein Drag)
    pub ghost: Option<GhostState>,
    /// Auswahl "Schnittpunkt → Kurve"
    pub constrained: ConstrainedSelection,
    /// Gerade wurde aus zwei Punkten konstruiert
    pub is_line_from_points: bool,
    /// Meldung der letzten fehlgeschlagenen Geradenkonstruktion
    pub line_creation_error: Option<String>,
    /// Zuletzt gemeldete Bedingung einer abgelehnten Operation
    pub last_condition: Option<GraphError>,
    /// Laufzeit-Optionen
    pub options: GraphOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    feedback: Vec<Feedback>,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    /// Erstellt einen App-State; die Startkurven kommen aus den Optionen.
    pub fn with_options(options: GraphOptions) -> Self {
        let options = options.sanitized();
        Self {
            parabola: Parabola::from_coefficients(options.default_parabola),
            line: Line::from_coefficients(options.default_line),
            points: PointStore::new(),
            sketch: SketchStore::new(),
            view: ViewState::new(),
            ui: UiState::default(),
            ghost: None,
            constrained: ConstrainedSelection::default(),
            is_line_from_points: false,
            line_creation_error: None,
            last_condition: None,
            options,
            command_log: CommandLog::new(),
            feedback: Vec::new(),
        }
    }

    /// Aktuelle Schnittpunkte (bei jedem Aufruf neu berechnet)
    pub fn intersections(&self) -> Vec<IntersectionPoint> {
        solve_intersections(&self.parabola, &self.line)
    }

    /// Fläche, sofern der Flächen-Modus aktiv ist und zwei Schnittpunkte existieren.
    pub fn area(&self) -> Option<AreaResult> {
        if !self.ui.flags.area_mode {
            return None;
        }
        compute_area(&self.intersections(), &self.line)
    }

    /// Koordinatensystem des aktuellen Views
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.view.coordinate_system()
    }

    /// Ablageposition eines getippten Punkts (Grid-Snap laut Optionen).
    pub fn marked_point_placement(&self, position: DVec2) -> DVec2 {
        if self.options.grid_snap_enabled {
            let step = self.options.point_grid_step;
            (position / step).round() * step
        } else {
            position
        }
    }

    /// Läuft gerade ein Kurven-Drag?
    pub fn is_dragging_curve(&self) -> bool {
        self.ghost.is_some()
    }

    /// Merkt eine Bedingung für die UI vor und loggt sie.
    pub fn report_condition(&mut self, condition: GraphError) {
        log::warn!("Operation abgelehnt: {}", condition);
        self.last_condition = Some(condition);
    }

    /// Fordert eine haptische Rückmeldung an (nur wenn aktiviert).
    pub fn push_feedback(&mut self, feedback: Feedback) {
        if self.options.haptics_enabled {
            self.feedback.push(feedback);
        }
    }

    /// Noch nicht abgeholte Rückmeldungen
    pub fn pending_feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    /// Übergibt alle angeforderten Rückmeldungen an den Host.
    pub fn take_feedback(&mut self) -> Vec<Feedback> {
        std::mem::take(&mut self.feedback)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
