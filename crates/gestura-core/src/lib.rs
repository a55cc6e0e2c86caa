//! Core primitives shared across the Gestura crates.
//!
//! This crate contains the geometry types, the synchronous event
//! `Signal`, and collection aliases used throughout the framework. It
//! carries no gesture logic of its own.

pub mod collections;
mod geometry;
mod signal;

pub use geometry::*;
pub use signal::Signal;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::signal::Signal;
}
