//! The normalized pointer-sample vocabulary.
//!
//! Touch screens report identified, phased samples; legacy mouse input
//! reports button edges and a position. Both are folded into
//! [`PointerSample`] so the tracker's state machine never branches on
//! the source beyond the per-tick exclusivity check.

use gestura_core::Point;
use smallvec::SmallVec;

/// Per-frame touch sample buffer for hosts that accumulate samples
/// before ticking a tracker. Inline capacity covers typical
/// simultaneous-contact counts without allocating.
pub type TouchBuffer = SmallVec<[PointerSample; 4]>;

/// Stable identity of one pointer for the duration of its contact.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PointerId(pub u64);

impl PointerId {
    /// Sentinel identity for the single mouse button. Platform touch ids
    /// are small ordinals, so the sentinel can never collide with one.
    pub const MOUSE: PointerId = PointerId(u64::MAX);

    pub fn is_mouse(self) -> bool {
        self == Self::MOUSE
    }
}

/// Lifecycle phase of a pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Began,
    Moved,
    Ended,
    Canceled,
}

/// One pointer observation for one tick. Produced fresh each frame by
/// the host's sampler; never owned across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub position: Point,
    pub phase: PointerPhase,
}

impl PointerSample {
    pub const fn new(id: PointerId, position: Point, phase: PointerPhase) -> Self {
        Self {
            id,
            position,
            phase,
        }
    }
}

/// Single-button mouse state for one tick: press/release edges plus the
/// held level, with the cursor position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseState {
    pub pressed_this_frame: bool,
    pub held: bool,
    pub released_this_frame: bool,
    pub position: Point,
}

impl MouseState {
    /// No button activity at all.
    pub const fn idle() -> Self {
        Self {
            pressed_this_frame: false,
            held: false,
            released_this_frame: false,
            position: Point::ZERO,
        }
    }

    pub const fn pressed(position: Point) -> Self {
        Self {
            pressed_this_frame: true,
            held: true,
            released_this_frame: false,
            position,
        }
    }

    pub const fn dragged(position: Point) -> Self {
        Self {
            pressed_this_frame: false,
            held: true,
            released_this_frame: false,
            position,
        }
    }

    pub const fn released(position: Point) -> Self {
        Self {
            pressed_this_frame: false,
            held: false,
            released_this_frame: true,
            position,
        }
    }

    /// Folds the button state into a synthetic sample carrying
    /// [`PointerId::MOUSE`]. A press edge wins over a same-tick release
    /// edge; the release, if still true, is observed on a later tick.
    pub fn as_sample(&self) -> Option<PointerSample> {
        let phase = if self.pressed_this_frame {
            PointerPhase::Began
        } else if self.released_this_frame {
            PointerPhase::Ended
        } else if self.held {
            PointerPhase::Moved
        } else {
            return None;
        };
        Some(PointerSample::new(PointerId::MOUSE, self.position, phase))
    }
}

/// Everything the tracker polls in one tick: a monotonic uptime, the
/// frame's touch samples, and the mouse state.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    pub uptime_ms: u64,
    pub touches: &'a [PointerSample],
    pub mouse: MouseState,
}

impl<'a> FrameInput<'a> {
    pub fn new(uptime_ms: u64, touches: &'a [PointerSample], mouse: MouseState) -> Self {
        Self {
            uptime_ms,
            touches,
            mouse,
        }
    }

    /// A tick with no pointer activity.
    pub fn empty(uptime_ms: u64) -> Self {
        Self::new(uptime_ms, &[], MouseState::idle())
    }
}
