//! The tracker's outgoing event surface.

use crate::swipe::SwipeDirection;
use gestura_core::Signal;
use gestura_scene::ColliderId;

/// Fire-and-forget gesture notifications.
///
/// All signals are emitted synchronously from within
/// [`GestureTracker::tick`](crate::GestureTracker::tick); handlers must
/// not mutate the tracker re-entrantly.
#[derive(Default)]
pub struct GestureEvents {
    /// A new pointer session started (press).
    pub touch_began: Signal<()>,
    /// The tracked session ended with an explicit release or cancel.
    pub touch_ended: Signal<()>,
    /// The press position hit an interactive shape in the scene. Fires
    /// at most once per session, on the press tick.
    pub touch_hit_collider: Signal<ColliderId>,
    /// A directional swipe crossed the distance threshold.
    pub swipe_detected: Signal<SwipeDirection>,
}

impl GestureEvents {
    pub fn new() -> Self {
        Self::default()
    }
}
