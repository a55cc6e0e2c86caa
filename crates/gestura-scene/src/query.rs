//! Scene hit-testing and UI-occlusion boundaries.

use gestura_core::collections::map::HashMap;
use gestura_core::{Point, Rect};
use log::trace;

/// Stable identity of an interactive shape in the scene.
///
/// Only identity is cached across frames; geometry is always resolved
/// fresh at query time, so handles stay valid through layout changes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ColliderId(pub u64);

/// Hit-tests a world position against the scene.
///
/// Implementations return the foremost intersected shape, or `None`.
/// The query is treated as opaque by the gesture core; physics engines,
/// render scenes, and plain rectangle sets are all valid backends.
pub trait SceneRaycast {
    fn raycast(&self, world: Point) -> Option<ColliderId>;
}

/// Answers whether a screen position is currently covered by
/// interactive UI. Absent an implementation, callers assume `false`.
pub trait UiOcclusion {
    fn is_over_ui(&self, screen: Point) -> bool;
}

/// A topmost-wins set of axis-aligned rectangle colliders.
///
/// Insertion order is z-order: later insertions sit on top. This is the
/// reference [`SceneRaycast`] backend used by the demo and the test
/// harness; real applications plug in their own scene.
#[derive(Default)]
pub struct RectColliderSet {
    // Bottom-to-top draw order; raycast walks it in reverse.
    order: Vec<ColliderId>,
    rects: HashMap<ColliderId, Rect>,
}

impl RectColliderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or re-inserts on top) a collider covering `rect`.
    pub fn insert(&mut self, id: ColliderId, rect: Rect) {
        if self.rects.insert(id, rect).is_some() {
            self.order.retain(|existing| *existing != id);
        }
        self.order.push(id);
    }

    pub fn remove(&mut self, id: ColliderId) {
        if self.rects.remove(&id).is_some() {
            self.order.retain(|existing| *existing != id);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl SceneRaycast for RectColliderSet {
    fn raycast(&self, world: Point) -> Option<ColliderId> {
        let hit = self
            .order
            .iter()
            .rev()
            .find(|id| {
                self.rects
                    .get(id)
                    .is_some_and(|rect| rect.contains_point(world))
            })
            .copied();
        trace!("raycast at ({}, {}) -> {:?}", world.x, world.y, hit);
        hit
    }
}

/// UI occlusion backed by a list of screen-space rectangles.
#[derive(Default)]
pub struct OcclusionZones {
    zones: Vec<Rect>,
}

impl OcclusionZones {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, zone: Rect) {
        self.zones.push(zone);
    }
}

impl UiOcclusion for OcclusionZones {
    fn is_over_ui(&self, screen: Point) -> bool {
        self.zones.iter().any(|zone| zone.contains_point(screen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raycast_returns_topmost_hit() {
        let mut scene = RectColliderSet::new();
        scene.insert(ColliderId(1), Rect::new(0.0, 0.0, 10.0, 10.0));
        scene.insert(ColliderId(2), Rect::new(5.0, 5.0, 10.0, 10.0));

        assert_eq!(scene.raycast(Point::new(7.0, 7.0)), Some(ColliderId(2)));
        assert_eq!(scene.raycast(Point::new(1.0, 1.0)), Some(ColliderId(1)));
        assert_eq!(scene.raycast(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn reinsert_moves_collider_to_top() {
        let mut scene = RectColliderSet::new();
        scene.insert(ColliderId(1), Rect::new(0.0, 0.0, 10.0, 10.0));
        scene.insert(ColliderId(2), Rect::new(0.0, 0.0, 10.0, 10.0));
        scene.insert(ColliderId(1), Rect::new(0.0, 0.0, 10.0, 10.0));

        assert_eq!(scene.raycast(Point::new(5.0, 5.0)), Some(ColliderId(1)));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn removed_collider_no_longer_hits() {
        let mut scene = RectColliderSet::new();
        scene.insert(ColliderId(1), Rect::new(0.0, 0.0, 10.0, 10.0));
        scene.remove(ColliderId(1));
        assert!(scene.is_empty());
        assert_eq!(scene.raycast(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn occlusion_zones_cover_their_rects() {
        let mut zones = OcclusionZones::new();
        zones.add(Rect::new(0.0, 0.0, 100.0, 40.0));
        assert!(zones.is_over_ui(Point::new(50.0, 20.0)));
        assert!(!zones.is_over_ui(Point::new(50.0, 60.0)));
    }
}
