//! Swipe classification and tuning.

use gestura_core::Point;

/// Cardinal direction of a detected swipe. Classified from a
/// displacement at detection time, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Swipe tuning: how far a pointer must travel from its origin before a
/// swipe fires, and how long new swipes stay suppressed after one does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Minimum displacement magnitude, in screen pixels. Must be positive.
    pub min_swipe_distance: f32,
    /// Suppression window after a swipe fires, in milliseconds.
    pub cooldown_ms: u64,
}

impl SwipeConfig {
    pub const fn new(min_swipe_distance: f32, cooldown_ms: u64) -> Self {
        Self {
            min_swipe_distance,
            cooldown_ms,
        }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance: 50.0,
            cooldown_ms: 300,
        }
    }
}

/// Classifies a displacement into a cardinal direction.
///
/// The dominant axis wins; an exact tie resolves to the horizontal
/// branch. The y-axis points up, so a positive `delta.y` is `Up`.
pub fn classify_swipe(delta: Point) -> SwipeDirection {
    if delta.y.abs() > delta.x.abs() {
        if delta.y > 0.0 {
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        }
    } else if delta.x > 0.0 {
        SwipeDirection::Right
    } else {
        SwipeDirection::Left
    }
}
