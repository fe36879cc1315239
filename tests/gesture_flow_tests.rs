use approx::assert_relative_eq;
use glam::DVec2;
use graph_lab::shared::DisplayFlag;
use graph_lab::{
    AppController, AppIntent, AppState, Feedback, GestureEvent, GestureMachine, GestureState,
    GraphType,
};

/// Bündelt Automat, Controller und Zustand wie ein Host-Frame.
struct Harness {
    machine: GestureMachine,
    controller: AppController,
    state: AppState,
}

impl Harness {
    fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut harness = Self {
            machine: GestureMachine::new(),
            controller: AppController::new(),
            state: AppState::new(),
        };
        harness.intent(AppIntent::ViewportResized {
            size: DVec2::new(390.0, 390.0),
        });
        harness
    }

    fn geometry_mode(mut self) -> Self {
        self.intent(AppIntent::DisplayFlagChanged {
            flag: DisplayFlag::GeometryMode,
            enabled: true,
        });
        self
    }

    fn intent(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    fn event(&mut self, event: GestureEvent) -> Vec<AppIntent> {
        let intents = self.machine.handle_event(&self.state, event);
        self.controller
            .handle_intents(&mut self.state, intents.clone())
            .expect("Gesten-Intents sollten ohne Fehler durchlaufen");
        intents
    }

    fn screen(&self, x: f64, y: f64) -> DVec2 {
        self.state.coordinate_system().to_screen(DVec2::new(x, y))
    }

    fn tap(&mut self, position: DVec2) -> Vec<AppIntent> {
        let mut intents = self.event(GestureEvent::PointerDown { position });
        intents.extend(self.event(GestureEvent::PointerUp { position }));
        intents
    }
}

#[test]
fn test_tap_twice_adds_then_removes_point() {
    let mut h = Harness::new().geometry_mode();
    let spot = h.screen(3.1, -2.9);

    h.tap(spot);
    assert_eq!(h.state.points.len(), 1);
    // Grid-Snap auf 0.5er Raster
    assert_eq!(h.state.points.points()[0].position, DVec2::new(3.0, -3.0));

    h.tap(spot);
    assert!(h.state.points.is_empty());
    assert_eq!(
        h.state.take_feedback(),
        vec![Feedback::Light, Feedback::Medium]
    );
}

#[test]
fn test_tap_twice_at_max_zoom_removes_snapped_point() {
    let mut h = Harness::new().geometry_mode();
    h.intent(AppIntent::ViewportResized {
        size: DVec2::new(390.0, 844.0),
    });
    h.intent(AppIntent::CameraZoom { factor: 5.0 });
    // Rasterversatz ≈ 55 px, größer als der Trefferradius
    let spot = h.screen(0.24, 0.24);

    h.tap(spot);
    assert_eq!(h.state.points.len(), 1);
    assert_eq!(h.state.points.points()[0].position, DVec2::ZERO);

    let second = h.tap(spot);
    assert_eq!(
        second,
        vec![AppIntent::MarkedPointRemoveRequested { index: 0 }]
    );
    assert!(h.state.points.is_empty());
}

#[test]
fn test_tap_prefers_intersection_over_marked_point() {
    let mut h = Harness::new().geometry_mode();
    h.intent(AppIntent::AddPointFromInputRequested { x: 2.0, y: 4.0 });
    let spot = h.screen(2.0, 4.0);

    let intents = h.tap(spot);
    assert_eq!(intents, vec![AppIntent::IntersectionTapped { index: 1 }]);
    assert_eq!(h.state.points.len(), 1);
    assert_eq!(h.state.constrained.point_index, Some(1));
}

#[test]
fn test_pan_accumulates_screen_deltas() {
    let mut h = Harness::new();
    let start = h.screen(3.0, -3.0);

    h.event(GestureEvent::PointerDown { position: start });
    for step in 1..=5 {
        h.event(GestureEvent::PointerMove {
            position: start + DVec2::new(step as f64 * 10.0, step as f64 * -4.0),
        });
    }
    h.event(GestureEvent::PointerUp {
        position: start + DVec2::new(50.0, -20.0),
    });

    assert_relative_eq!(h.state.view.pan_offset.x, 50.0, epsilon = 1e-9);
    assert_relative_eq!(h.state.view.pan_offset.y, -20.0, epsilon = 1e-9);
    assert_eq!(h.machine.state(), GestureState::Idle);
}

#[test]
fn test_pinch_is_clamped_by_zoom_range() {
    let mut h = Harness::new();

    for scale in [2.0, 4.0, 8.0, 16.0] {
        h.event(GestureEvent::PinchChanged { scale });
    }
    h.event(GestureEvent::PinchEnded);
    assert_relative_eq!(h.state.view.zoom_scale, 5.0);

    for scale in [0.5, 0.1, 0.01] {
        h.event(GestureEvent::PinchChanged { scale });
    }
    h.event(GestureEvent::PinchEnded);
    assert_relative_eq!(h.state.view.zoom_scale, 0.5);
}

#[test]
fn test_rubber_band_snaps_on_release() {
    let mut h = Harness::new();
    let grab = h.screen(1.0, 1.0);

    h.event(GestureEvent::PointerDown { position: grab });
    assert!(h.state.is_dragging_curve());

    // 130 px nach oben → a = 2.3 während des Drags
    h.event(GestureEvent::PointerMove {
        position: grab - DVec2::new(0.0, 130.0),
    });
    assert_relative_eq!(h.state.parabola.a(), 2.3, epsilon = 1e-9);

    h.event(GestureEvent::PointerUp {
        position: grab - DVec2::new(0.0, 130.0),
    });
    assert_relative_eq!(h.state.parabola.a(), 2.0);
    assert!(h.state.ghost.is_none());
}

#[test]
fn test_rubber_band_without_snap_keeps_value() {
    let mut h = Harness::new();
    h.state.options.grid_snap_enabled = false;
    let grab = h.screen(1.0, 1.0);

    h.event(GestureEvent::PointerDown { position: grab });
    h.event(GestureEvent::PointerMove {
        position: grab + DVec2::new(0.0, 45.0),
    });
    h.event(GestureEvent::PointerUp {
        position: grab + DVec2::new(0.0, 45.0),
    });
    assert_relative_eq!(h.state.parabola.a(), 0.55, epsilon = 1e-9);
}

#[test]
fn test_cancelled_drag_restores_ghost_and_leaves_no_state() {
    let mut h = Harness::new();
    let grab = h.screen(1.0, 1.0);

    h.event(GestureEvent::PointerDown { position: grab });
    h.event(GestureEvent::PointerMove {
        position: grab - DVec2::new(0.0, 200.0),
    });
    assert!(h.state.ghost.is_some());

    let intents = h.event(GestureEvent::Cancelled);
    assert_eq!(intents, vec![AppIntent::CurveDragCancelled]);
    assert_relative_eq!(h.state.parabola.a(), 1.0);
    assert!(h.state.ghost.is_none());
    assert_eq!(h.machine.state(), GestureState::Idle);
    assert!(!h.machine.is_pressed());

    // Ein verspäteter Move nach dem Abbruch bewirkt nichts
    let late = h.event(GestureEvent::PointerMove {
        position: grab - DVec2::new(0.0, 250.0),
    });
    assert!(late.is_empty());
}

#[test]
fn test_tap_on_intersection_binds_point_to_graph() {
    let mut h = Harness::new().geometry_mode();
    let spot = h.screen(2.0, 4.0);

    let intents = h.tap(spot);
    assert_eq!(intents, vec![AppIntent::IntersectionTapped { index: 1 }]);
    assert_eq!(h.machine.state(), GestureState::AwaitingGraphSelection);

    h.event(GestureEvent::GraphChosen {
        graph: GraphType::Line,
    });
    assert_eq!(h.state.constrained.point_index, Some(1));
    assert_eq!(h.state.constrained.graph, Some(GraphType::Line));
    assert_eq!(h.machine.state(), GestureState::Idle);
}

#[test]
fn test_dismissed_graph_selection_clears_pending_point() {
    let mut h = Harness::new().geometry_mode();
    let spot = h.screen(-1.0, 1.0);

    h.tap(spot);
    assert!(h.state.constrained.is_pending());

    h.event(GestureEvent::GraphSelectionDismissed);
    assert!(!h.state.constrained.is_pending());
    assert_eq!(h.machine.state(), GestureState::Idle);
}

#[test]
fn test_segment_drawn_from_intersection_snaps_end() {
    let mut h = Harness::new().geometry_mode();
    let start = h.screen(2.0, 4.0);
    let end = h.screen(4.1, 0.9);

    h.event(GestureEvent::PointerDown { position: start });
    h.event(GestureEvent::PointerMove { position: end });
    h.event(GestureEvent::PointerUp { position: end });

    assert_eq!(h.state.sketch.len(), 1);
    let anchors: Vec<_> = h.state.sketch.anchor_points().collect();
    assert!(anchors[0].distance(DVec2::new(2.0, 4.0)) < 1e-9);
    assert!(anchors[1].distance(DVec2::new(4.0, 1.0)) < 1e-9);
}

#[test]
fn test_tapped_points_build_line() {
    let mut h = Harness::new().geometry_mode();

    let first = h.screen(0.0, -2.0);
    let second = h.screen(-2.0, -6.0);
    h.tap(first);
    h.tap(second);
    assert_eq!(h.state.points.len(), 2);

    h.intent(AppIntent::CreateLineFromPointsRequested);
    assert_relative_eq!(h.state.line.m(), 2.0, epsilon = 1e-9);
    assert_relative_eq!(h.state.line.n(), -2.0, epsilon = 1e-9);
}
