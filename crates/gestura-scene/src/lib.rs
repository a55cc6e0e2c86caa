//! Scene-side collaborators for gesture input.
//!
//! Gesture tracking needs three things from the surrounding scene: a way
//! to map screen positions into world space, a way to hit-test a world
//! position against interactive shapes, and a way to ask whether a
//! screen position is covered by UI. This crate defines those
//! boundaries and ships minimal concrete implementations; the gesture
//! core treats all three as opaque.

mod camera;
mod query;

pub use camera::{clear_main_camera, main_camera, set_main_camera, Camera2d, WorldCamera};
pub use query::{ColliderId, OcclusionZones, RectColliderSet, SceneRaycast, UiOcclusion};

pub mod prelude {
    pub use crate::camera::{Camera2d, WorldCamera};
    pub use crate::query::{ColliderId, OcclusionZones, RectColliderSet, SceneRaycast, UiOcclusion};
}
