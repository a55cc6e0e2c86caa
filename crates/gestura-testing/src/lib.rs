//! Headless testing harness for Gestura.
//!
//! [`GestureRobot`] wraps a [`GestureTracker`](gestura_input::GestureTracker)
//! and drives it with scripted touch/mouse frames under a controllable
//! uptime, so black-box tests can assert on the exact sequence of emitted
//! events without a windowing system.

mod recorder;
mod robot;


pub use recorder::EventRecorder;
pub use robot::GestureRobot;
