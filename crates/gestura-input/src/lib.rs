//! Unified touch/mouse gesture recognition.
//!
//! The entry point is [`GestureTracker`]: feed it one [`FrameInput`] per
//! host frame and it emits press, release, collider-hit, and directional
//! swipe events through its [`GestureEvents`] surface. Touch and mouse
//! input are unified into a single pointer-sample vocabulary before the
//! state machine sees them, so the machine branches on phase and
//! identity only.

mod events;
mod sample;
mod swipe;
mod tracker;


pub use events::GestureEvents;
pub use sample::{FrameInput, MouseState, PointerId, PointerPhase, PointerSample, TouchBuffer};
pub use swipe::{classify_swipe, SwipeConfig, SwipeDirection};
pub use tracker::GestureTracker;

pub mod prelude {
    pub use crate::events::GestureEvents;
    pub use crate::sample::{
        FrameInput, MouseState, PointerId, PointerPhase, PointerSample, TouchBuffer,
    };
    pub use crate::swipe::{SwipeConfig, SwipeDirection};
    pub use crate::tracker::GestureTracker;
}
