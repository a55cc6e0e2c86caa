//! Screen-to-world mapping and the ambient main-camera registry.

use gestura_core::{Point, Size};
use std::cell::RefCell;
use std::rc::Rc;

/// Converts a screen position into a world-space position.
///
/// Screen positions are in pixels with a y-up axis. What "world space"
/// means is up to the host; the gesture core only forwards the result to
/// its raycaster.
pub trait WorldCamera {
    fn screen_to_world(&self, screen: Point) -> Point;
}

thread_local! {
    static MAIN_CAMERA: RefCell<Option<Rc<dyn WorldCamera>>> = const { RefCell::new(None) };
}

/// Registers the ambient main camera for this thread.
///
/// Components that were not given an explicit camera fall back to this
/// registry, lazily, the first time they need a conversion.
pub fn set_main_camera(camera: Rc<dyn WorldCamera>) {
    MAIN_CAMERA.with(|slot| *slot.borrow_mut() = Some(camera));
}

/// Returns the registered main camera, if any.
pub fn main_camera() -> Option<Rc<dyn WorldCamera>> {
    MAIN_CAMERA.with(|slot| slot.borrow().clone())
}

/// Clears the registered main camera.
pub fn clear_main_camera() {
    MAIN_CAMERA.with(|slot| *slot.borrow_mut() = None);
}

/// An orthographic 2D camera.
///
/// Maps the viewport center to `center` and scales pixels into world
/// units by `pixels_per_unit`. Both axes keep the y-up convention.
#[derive(Clone, Debug)]
pub struct Camera2d {
    viewport: Size,
    center: Point,
    pixels_per_unit: f32,
}

impl Camera2d {
    pub fn new(viewport: Size, center: Point, pixels_per_unit: f32) -> Self {
        Self {
            viewport,
            center,
            // A degenerate scale would map every pixel to infinity.
            pixels_per_unit: pixels_per_unit.max(f32::EPSILON),
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }
}

impl WorldCamera for Camera2d {
    fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            self.center.x + (screen.x - self.viewport.width * 0.5) / self.pixels_per_unit,
            self.center.y + (screen.y - self.viewport.height * 0.5) / self.pixels_per_unit,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_center_maps_to_world_center() {
        let camera = Camera2d::new(Size::new(800.0, 600.0), Point::new(5.0, -3.0), 1.0);
        assert_eq!(
            camera.screen_to_world(Point::new(400.0, 300.0)),
            Point::new(5.0, -3.0)
        );
    }

    #[test]
    fn pixels_per_unit_scales_offsets() {
        let camera = Camera2d::new(Size::new(200.0, 200.0), Point::ZERO, 100.0);
        assert_eq!(
            camera.screen_to_world(Point::new(200.0, 100.0)),
            Point::new(1.0, 0.0)
        );
    }

    #[test]
    fn registry_round_trip() {
        clear_main_camera();
        assert!(main_camera().is_none());

        let camera: Rc<dyn WorldCamera> =
            Rc::new(Camera2d::new(Size::new(100.0, 100.0), Point::ZERO, 1.0));
        set_main_camera(Rc::clone(&camera));
        assert!(main_camera().is_some());

        clear_main_camera();
        assert!(main_camera().is_none());
    }
}
