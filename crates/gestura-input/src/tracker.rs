//! The gesture tracker state machine.
//!
//! One tracker follows at most one pointer at a time across frames. Each
//! tick it selects the relevant sample (touch input is exclusive
//! whenever any touch exists), advances the session state machine, runs
//! swipe detection under its threshold/cooldown guards, and dispatches a
//! scene hit-test on the press tick. All event emission is synchronous.

use crate::events::GestureEvents;
use crate::sample::{FrameInput, PointerId, PointerPhase, PointerSample};
use crate::swipe::{classify_swipe, SwipeConfig};
use gestura_core::Point;
use gestura_scene::{main_camera, SceneRaycast, UiOcclusion, WorldCamera};
use log::{debug, trace};
use std::rc::Rc;

/// State of the one live pointer session, from press to release/cancel.
#[derive(Clone, Copy, Debug)]
struct TouchSession {
    pointer: PointerId,
    origin: Point,
    current: Point,
    started_ms: u64,
    /// Eligible to fire a swipe. Cleared when one fires; restored when
    /// the cooldown expires while the pointer is still down.
    swipe_armed: bool,
}

/// Unified touch/mouse gesture tracker.
///
/// Drive it with one [`FrameInput`] per frame via [`tick`](Self::tick).
/// Collaborators (camera, occlusion oracle, raycaster) are optional;
/// each missing one degrades the hit-test step gracefully instead of
/// faulting.
pub struct GestureTracker {
    interactable: bool,
    config: SwipeConfig,
    session: Option<TouchSession>,
    // Orthogonal to the session: survives session turnover so a fresh
    // press cannot bypass an active suppression window.
    cooling_down: bool,
    last_swipe_ms: u64,
    // Explicitly assigned camera, or the cached main-camera fallback.
    camera: Option<Rc<dyn WorldCamera>>,
    occlusion: Option<Rc<dyn UiOcclusion>>,
    raycaster: Option<Rc<dyn SceneRaycast>>,
    events: GestureEvents,
}

impl GestureTracker {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            interactable: true,
            config,
            session: None,
            cooling_down: false,
            last_swipe_ms: 0,
            camera: None,
            occlusion: None,
            raycaster: None,
            events: GestureEvents::new(),
        }
    }

    // --- configuration -------------------------------------------------

    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    /// Enables or disables the tracker. Disabled ticks are no-ops: no
    /// state change, no events. An in-flight session is frozen until the
    /// tracker is re-enabled or the pointer situation supersedes it.
    pub fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
    }

    /// Assigns the camera used for screen-to-world conversion, or clears
    /// it so the next hit-test re-resolves the ambient main camera.
    pub fn set_camera(&mut self, camera: Option<Rc<dyn WorldCamera>>) {
        self.camera = camera;
    }

    pub fn set_occlusion(&mut self, occlusion: Option<Rc<dyn UiOcclusion>>) {
        self.occlusion = occlusion;
    }

    pub fn set_raycaster(&mut self, raycaster: Option<Rc<dyn SceneRaycast>>) {
        self.raycaster = raycaster;
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// `min_swipe_distance` must be positive; zero would fire a swipe on
    /// the press tick from a zero-magnitude delta.
    pub fn set_min_swipe_distance(&mut self, distance: f32) {
        self.config.min_swipe_distance = distance.max(f32::EPSILON);
    }

    pub fn set_cooldown_ms(&mut self, cooldown_ms: u64) {
        self.config.cooldown_ms = cooldown_ms;
    }

    // --- observable state ----------------------------------------------

    pub fn events(&self) -> &GestureEvents {
        &self.events
    }

    pub fn is_touching(&self) -> bool {
        self.session.is_some()
    }

    /// Displacement of the tracked pointer from its swipe origin; zero
    /// when not touching.
    pub fn current_swipe_delta(&self) -> Point {
        self.session
            .map(|session| session.current - session.origin)
            .unwrap_or(Point::ZERO)
    }

    /// Whether the current session may still fire a swipe.
    pub fn is_swipe_ready(&self) -> bool {
        !self.cooling_down && self.session.is_some_and(|session| session.swipe_armed)
    }

    /// Uptime at which the current session began, if one is live.
    pub fn touch_started_ms(&self) -> Option<u64> {
        self.session.map(|session| session.started_ms)
    }

    // --- per-tick update ------------------------------------------------

    /// Advances the state machine by one frame.
    ///
    /// Call exactly once per host frame with a monotonic `uptime_ms`.
    /// Emits zero or more events synchronously before returning.
    pub fn tick(&mut self, frame: &FrameInput<'_>) {
        if !self.interactable {
            return;
        }

        self.expire_cooldown(frame.uptime_ms);

        // Touch input is exclusive whenever any touch sample exists; the
        // mouse is consulted only on touch-free ticks. Never both.
        let selected = if frame.touches.is_empty() {
            frame.mouse.as_sample()
        } else {
            self.select_touch(frame.touches)
        };

        match selected {
            Some(sample) => self.process_sample(sample, frame.uptime_ms),
            None => {
                if self.session.is_some() {
                    self.lose_session();
                }
            }
        }
    }

    fn expire_cooldown(&mut self, now_ms: u64) {
        if !self.cooling_down {
            return;
        }
        if now_ms.saturating_sub(self.last_swipe_ms) >= self.config.cooldown_ms {
            self.cooling_down = false;
            if let Some(session) = self.session.as_mut() {
                // Displacement accumulated during the cooldown must not
                // re-trigger instantly: the next swipe needs a fresh run
                // of travel from here.
                session.origin = session.current;
                session.swipe_armed = true;
            }
            trace!("swipe cooldown expired; detection re-armed");
        }
    }

    /// Picks this tick's relevant touch sample: the tracked pointer's
    /// entry while a session is live, otherwise any `Began` sample.
    fn select_touch(&self, touches: &[PointerSample]) -> Option<PointerSample> {
        match &self.session {
            Some(session) => touches
                .iter()
                .find(|sample| sample.id == session.pointer)
                .copied(),
            None => touches
                .iter()
                .find(|sample| sample.phase == PointerPhase::Began)
                .copied(),
        }
    }

    fn process_sample(&mut self, sample: PointerSample, now_ms: u64) {
        match &self.session {
            None => {
                if sample.phase == PointerPhase::Began {
                    self.begin_session(sample, now_ms);
                }
            }
            Some(session) if session.pointer == sample.id => {
                self.continue_session(sample, now_ms);
            }
            // A sample from a different source while a session is live
            // (e.g. mouse activity after the tracked touch vanished):
            // the old session is lost; a fresh press edge is required.
            Some(_) => self.lose_session(),
        }
    }

    fn begin_session(&mut self, sample: PointerSample, now_ms: u64) {
        self.session = Some(TouchSession {
            pointer: sample.id,
            origin: sample.position,
            current: sample.position,
            started_ms: now_ms,
            swipe_armed: true,
        });
        debug!(
            "session began: {:?} at ({}, {})",
            sample.id, sample.position.x, sample.position.y
        );
        self.events.touch_began.emit(&());
        self.dispatch_hit_test(sample.position);
    }

    fn continue_session(&mut self, sample: PointerSample, now_ms: u64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.current = sample.position;

        match sample.phase {
            PointerPhase::Ended | PointerPhase::Canceled => self.end_session(),
            PointerPhase::Moved => {
                if session.swipe_armed && !self.cooling_down {
                    let delta = session.current - session.origin;
                    if delta.length() >= self.config.min_swipe_distance {
                        session.swipe_armed = false;
                        self.cooling_down = true;
                        self.last_swipe_ms = now_ms;
                        let direction = classify_swipe(delta);
                        debug!("swipe detected: {:?}", direction);
                        self.events.swipe_detected.emit(&direction);
                    }
                }
            }
            // A repeated Began for the tracked pointer carries only a
            // position update, already absorbed above.
            PointerPhase::Began => {}
        }
    }

    fn end_session(&mut self) {
        self.session = None;
        debug!("session ended");
        self.events.touch_ended.emit(&());
    }

    /// The tracked pointer disappeared from the sample set without an
    /// `Ended`/`Canceled` phase (some platforms drop the lift frame).
    /// Intentional: the session resets silently, with no end event —
    /// consumers of the original behavior depend on not seeing a release
    /// here.
    fn lose_session(&mut self) {
        self.session = None;
        debug!("tracked pointer vanished; session reset without an end event");
    }

    /// Hit-test dispatch: runs exactly once per session, on the press
    /// tick, and only when the press position is not over UI. A missing
    /// camera or raycaster skips the query instead of faulting.
    fn dispatch_hit_test(&mut self, screen: Point) {
        if self
            .occlusion
            .as_ref()
            .is_some_and(|oracle| oracle.is_over_ui(screen))
        {
            trace!("hit-test skipped: press is over UI");
            return;
        }
        let Some(raycaster) = self.raycaster.clone() else {
            return;
        };
        let Some(camera) = self.resolve_camera() else {
            trace!("hit-test skipped: no camera available");
            return;
        };
        let world = camera.screen_to_world(screen);
        if let Some(collider) = raycaster.raycast(world) {
            debug!("press hit {:?}", collider);
            self.events.touch_hit_collider.emit(&collider);
        }
    }

    /// Returns the assigned camera, lazily falling back to the ambient
    /// main camera and caching the result.
    fn resolve_camera(&mut self) -> Option<Rc<dyn WorldCamera>> {
        if self.camera.is_none() {
            self.camera = main_camera();
        }
        self.camera.clone()
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}
