use eframe_whiteboard::input::{Gesture, GestureState, GestureTracker, InputEvent};
use eframe_whiteboard::viewport::Viewport;
use egui::{pos2, Pos2, Rect};

fn screen() -> Rect {
    Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0))
}

fn feed(tracker: &mut GestureTracker, event: InputEvent) -> Option<Gesture> {
    tracker.handle(&event, &Viewport::default(), screen())
}

fn approx_eq(a: Pos2, b: Pos2) -> bool {
    (a - b).length() < 1e-3
}

fn assert_start_at(gesture: Option<Gesture>, expected: Pos2) {
    let Some(Gesture::Start(point)) = gesture else {
        panic!("expected a start, got {gesture:?}");
    };
    assert!(approx_eq(point, expected), "{point:?} != {expected:?}");
}

fn touches(a: Pos2, b: Pos2) -> Vec<Pos2> {
    vec![a, b]
}

fn start_pinch(tracker: &mut GestureTracker) {
    feed(
        tracker,
        InputEvent::TouchStart {
            touches: touches(pos2(0.0, 0.0), pos2(100.0, 0.0)),
        },
    );
}

#[test]
fn test_small_pinch_below_threshold_is_ignored() {
    let mut tracker = GestureTracker::default();
    start_pinch(&mut tracker);

    let gesture = feed(
        &mut tracker,
        InputEvent::TouchMove {
            touches: touches(pos2(0.0, 0.0), pos2(100.5, 0.0)),
        },
    );
    assert_eq!(gesture, None);
}

#[test]
fn test_pinch_above_threshold_zooms_at_midpoint() {
    let mut tracker = GestureTracker::default();
    start_pinch(&mut tracker);

    let gesture = feed(
        &mut tracker,
        InputEvent::TouchMove {
            touches: touches(pos2(0.0, 0.0), pos2(102.0, 0.0)),
        },
    );
    let Some(Gesture::Zoom { screen, factor }) = gesture else {
        panic!("expected a zoom, got {gesture:?}");
    };
    assert!(approx_eq(screen, pos2(51.0, 0.0)));
    assert!((factor - 1.02).abs() < 1e-5);
}

#[test]
fn test_pinch_distance_always_tracked() {
    let mut tracker = GestureTracker::default();
    start_pinch(&mut tracker);

    // Each step is under the threshold relative to the previous one
    for right in [100.5, 101.0, 101.5, 102.0] {
        let gesture = feed(
            &mut tracker,
            InputEvent::TouchMove {
                touches: touches(pos2(0.0, 0.0), pos2(right, 0.0)),
            },
        );
        assert_eq!(gesture, None);
    }
    assert_eq!(tracker.state(), GestureState::TwoFinger { last_distance: 102.0 });
}

#[test]
fn test_pointer_ignored_while_pinching() {
    let mut tracker = GestureTracker::default();
    start_pinch(&mut tracker);

    assert_eq!(feed(&mut tracker, InputEvent::PointerDown { pos: pos2(5.0, 5.0) }), None);
    assert_eq!(feed(&mut tracker, InputEvent::PointerMove { pos: pos2(6.0, 5.0) }), None);
    assert_eq!(feed(&mut tracker, InputEvent::PointerUp { pos: pos2(6.0, 5.0) }), None);

    feed(&mut tracker, InputEvent::TouchEnd { touches: vec![pos2(0.0, 0.0)] });
    assert_eq!(tracker.state(), GestureState::Idle);
    assert_start_at(
        feed(&mut tracker, InputEvent::PointerDown { pos: pos2(5.0, 5.0) }),
        pos2(5.0, 5.0),
    );
}

#[test]
fn test_pinch_cancels_pointer_gesture() {
    let mut tracker = GestureTracker::default();
    feed(&mut tracker, InputEvent::PointerDown { pos: pos2(5.0, 5.0) });
    let gesture = feed(&mut tracker, InputEvent::PointerMove { pos: pos2(8.0, 5.0) });
    let Some(Gesture::Move(point)) = gesture else {
        panic!("expected a move, got {gesture:?}");
    };
    assert!(approx_eq(point, pos2(8.0, 5.0)));

    let gesture = feed(
        &mut tracker,
        InputEvent::TouchStart {
            touches: touches(pos2(0.0, 0.0), pos2(100.0, 0.0)),
        },
    );
    assert_eq!(gesture, Some(Gesture::Cancel));
    assert!(tracker.is_pinching());
}

#[test]
fn test_pointer_leave_ends_gesture() {
    let mut tracker = GestureTracker::default();
    feed(&mut tracker, InputEvent::PointerDown { pos: pos2(5.0, 5.0) });
    assert_eq!(feed(&mut tracker, InputEvent::PointerLeave), Some(Gesture::End));
    assert_eq!(feed(&mut tracker, InputEvent::PointerUp { pos: pos2(5.0, 5.0) }), None);
    assert_eq!(feed(&mut tracker, InputEvent::PointerMove { pos: pos2(9.0, 5.0) }), None);
}

#[test]
fn test_second_pointer_down_does_not_restart_gesture() {
    let mut tracker = GestureTracker::default();
    assert_start_at(
        feed(&mut tracker, InputEvent::PointerDown { pos: pos2(5.0, 5.0) }),
        pos2(5.0, 5.0),
    );
    assert_eq!(feed(&mut tracker, InputEvent::PointerDown { pos: pos2(50.0, 50.0) }), None);
    assert_eq!(tracker.state(), GestureState::SinglePointer);
    let up = InputEvent::PointerUp { pos: pos2(50.0, 50.0) };
    assert_eq!(feed(&mut tracker, up), Some(Gesture::End));
}

#[test]
fn test_pointer_maps_through_viewport() {
    let mut tracker = GestureTracker::default();
    let mut viewport = Viewport::default();
    viewport.zoom(pos2(0.0, 0.0), 0.5);

    let event = InputEvent::PointerDown { pos: pos2(400.0, 300.0) };
    assert_start_at(tracker.handle(&event, &viewport, screen()), pos2(200.0, 150.0));
}

#[test]
fn test_wheel_factor() {
    let mut tracker = GestureTracker::default();
    let gesture = feed(
        &mut tracker,
        InputEvent::Wheel {
            pos: pos2(10.0, 20.0),
            delta_y: 100.0,
        },
    );
    let Some(Gesture::Zoom { screen, factor }) = gesture else {
        panic!("expected a zoom, got {gesture:?}");
    };
    assert_eq!(screen, pos2(10.0, 20.0));
    assert!((factor - 1.001f32.powf(100.0)).abs() < 1e-4);

    let Some(Gesture::Zoom { factor, .. }) = feed(
        &mut tracker,
        InputEvent::Wheel {
            pos: pos2(10.0, 20.0),
            delta_y: -100.0,
        },
    ) else {
        panic!("expected a zoom");
    };
    assert!(factor < 1.0);
}
