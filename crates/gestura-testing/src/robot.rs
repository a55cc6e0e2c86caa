//! Scripted gesture driver.

use crate::recorder::EventRecorder;
use gestura_core::Point;
use gestura_input::{
    FrameInput, GestureTracker, MouseState, PointerId, PointerPhase, PointerSample, TouchBuffer,
};
use std::rc::Rc;

/// Drives a [`GestureTracker`] with scripted frames.
///
/// Pointer interactions stage a sample and step one frame; between
/// explicit interactions, [`idle`](Self::idle) and
/// [`hold`](Self::hold) advance time with the staged state. After each
/// step, edge phases decay the way a real sampler's do: `Began` becomes
/// `Moved`, `Ended`/`Canceled` samples disappear, and mouse edges clear.
pub struct GestureRobot {
    tracker: GestureTracker,
    recorder: Rc<EventRecorder>,
    uptime_ms: u64,
    frame_step_ms: u64,
    touches: TouchBuffer,
    mouse: MouseState,
}

impl GestureRobot {
    pub fn new(tracker: GestureTracker) -> Self {
        let recorder = EventRecorder::subscribe(tracker.events());
        Self {
            tracker,
            recorder,
            uptime_ms: 0,
            frame_step_ms: 16,
            touches: TouchBuffer::new(),
            mouse: MouseState::idle(),
        }
    }

    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }

    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut GestureTracker {
        &mut self.tracker
    }

    pub fn uptime_ms(&self) -> u64 {
        self.uptime_ms
    }

    pub fn set_frame_step_ms(&mut self, step_ms: u64) {
        self.frame_step_ms = step_ms;
    }

    /// Jumps the clock forward without running a frame.
    pub fn advance_time(&mut self, delta_ms: u64) {
        self.uptime_ms += delta_ms;
    }

    // --- touch script ---------------------------------------------------

    pub fn touch_down(&mut self, id: u64, x: f32, y: f32) {
        self.stage_touch(id, x, y, PointerPhase::Began);
        self.step();
    }

    pub fn touch_move(&mut self, id: u64, x: f32, y: f32) {
        self.stage_touch(id, x, y, PointerPhase::Moved);
        self.step();
    }

    pub fn touch_up(&mut self, id: u64, x: f32, y: f32) {
        self.stage_touch(id, x, y, PointerPhase::Ended);
        self.step();
    }

    pub fn touch_cancel(&mut self, id: u64, x: f32, y: f32) {
        self.stage_touch(id, x, y, PointerPhase::Canceled);
        self.step();
    }

    /// Drops every staged touch without a terminal phase, as a platform
    /// that misses lift frames would, and runs a frame.
    pub fn vanish_touches(&mut self) {
        self.touches.clear();
        self.step();
    }

    // --- mouse script ---------------------------------------------------

    pub fn mouse_press(&mut self, x: f32, y: f32) {
        self.mouse = MouseState::pressed(Point::new(x, y));
        self.step();
    }

    pub fn mouse_drag(&mut self, x: f32, y: f32) {
        self.mouse = MouseState::dragged(Point::new(x, y));
        self.step();
    }

    pub fn mouse_release(&mut self, x: f32, y: f32) {
        self.mouse = MouseState::released(Point::new(x, y));
        self.step();
    }

    // --- frame stepping -------------------------------------------------

    /// Runs one frame with no staged pointer activity beyond what is
    /// already held down.
    pub fn idle(&mut self) {
        self.step();
    }

    /// Runs `frames` frames with the staged state unchanged (a finger or
    /// button held still).
    pub fn hold(&mut self, frames: usize) {
        for _ in 0..frames {
            self.step();
        }
    }

    fn stage_touch(&mut self, id: u64, x: f32, y: f32, phase: PointerPhase) {
        let sample = PointerSample::new(PointerId(id), Point::new(x, y), phase);
        if let Some(existing) = self
            .touches
            .iter_mut()
            .find(|existing| existing.id == sample.id)
        {
            *existing = sample;
        } else {
            self.touches.push(sample);
        }
    }

    fn step(&mut self) {
        let frame = FrameInput::new(self.uptime_ms, &self.touches, self.mouse);
        self.tracker.tick(&frame);
        self.uptime_ms += self.frame_step_ms;
        self.decay_edges();
    }

    fn decay_edges(&mut self) {
        self.touches.retain(|sample| {
            !matches!(
                sample.phase,
                PointerPhase::Ended | PointerPhase::Canceled
            )
        });
        for sample in &mut self.touches {
            if sample.phase == PointerPhase::Began {
                sample.phase = PointerPhase::Moved;
            }
        }
        if self.mouse.released_this_frame {
            self.mouse = MouseState::idle();
        }
        self.mouse.pressed_this_frame = false;
    }
}

impl Default for GestureRobot {
    fn default() -> Self {
        Self::new(GestureTracker::default())
    }
}
