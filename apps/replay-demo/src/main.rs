//! Replays a canned gesture script through a [`GestureTracker`] and
//! logs every emitted event.
//!
//! Run with `RUST_LOG=debug` to also see the tracker's internal state
//! transitions.

use gestura_core::{Point, Rect, Size};
use gestura_input::{
    FrameInput, GestureTracker, MouseState, PointerId, PointerPhase, PointerSample, SwipeConfig,
};
use gestura_scene::{set_main_camera, Camera2d, ColliderId, RectColliderSet, SceneRaycast};
use log::info;
use std::rc::Rc;

const FRAME_MS: u64 = 16;

fn touch(id: u64, x: f32, y: f32, phase: PointerPhase) -> PointerSample {
    PointerSample::new(PointerId(id), Point::new(x, y), phase)
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // World: 800x600 viewport, origin-centered camera, one unit-square
    // "button" collider under the viewport center. The camera goes into
    // the ambient registry so the tracker resolves it lazily, the same
    // way a scene-managed host would.
    set_main_camera(Rc::new(Camera2d::new(
        Size::new(800.0, 600.0),
        Point::ZERO,
        100.0,
    )));

    let mut scene = RectColliderSet::new();
    scene.insert(ColliderId(1), Rect::new(-0.5, -0.5, 1.0, 1.0));

    let mut tracker = GestureTracker::new(SwipeConfig::new(40.0, 200));
    tracker.set_raycaster(Some(Rc::new(scene) as Rc<dyn SceneRaycast>));

    let events = tracker.events();
    events.touch_began.connect(|_| info!("event: touch began"));
    events.touch_ended.connect(|_| info!("event: touch ended"));
    events
        .touch_hit_collider
        .connect(|id| info!("event: press hit collider {:?}", id));
    events
        .swipe_detected
        .connect(|direction| info!("event: swipe {:?}", direction));

    // A finger presses the center button, swipes up, keeps dragging
    // through the cooldown window, and lifts; then a quick mouse click
    // on the same button.
    let touch_script: Vec<Vec<PointerSample>> = vec![
        vec![touch(1, 400.0, 300.0, PointerPhase::Began)],
        vec![touch(1, 400.0, 330.0, PointerPhase::Moved)],
        vec![touch(1, 400.0, 355.0, PointerPhase::Moved)],
        vec![touch(1, 400.0, 395.0, PointerPhase::Moved)],
        vec![touch(1, 400.0, 430.0, PointerPhase::Moved)],
        vec![touch(1, 400.0, 430.0, PointerPhase::Ended)],
    ];
    let mouse_script = [
        MouseState::pressed(Point::new(400.0, 300.0)),
        MouseState::dragged(Point::new(400.0, 300.0)),
        MouseState::released(Point::new(400.0, 300.0)),
    ];

    let mut uptime_ms = 0;
    for touches in &touch_script {
        tracker.tick(&FrameInput::new(uptime_ms, touches, MouseState::idle()));
        log_state(&tracker, uptime_ms);
        uptime_ms += FRAME_MS;
    }
    for mouse in mouse_script {
        tracker.tick(&FrameInput::new(uptime_ms, &[], mouse));
        log_state(&tracker, uptime_ms);
        uptime_ms += FRAME_MS;
    }
}

fn log_state(tracker: &GestureTracker, uptime_ms: u64) {
    let delta = tracker.current_swipe_delta();
    info!(
        "t={:4}ms touching={} swipe_ready={} delta=({:.0}, {:.0})",
        uptime_ms,
        tracker.is_touching(),
        tracker.is_swipe_ready(),
        delta.x,
        delta.y
    );
}
