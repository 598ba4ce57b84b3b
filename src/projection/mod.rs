//! The projection seam.
//!
//! The controller never does projection math itself. It drives whatever
//! implements [`Projection`]: orthographic globes, azimuthal views, or a
//! host-side wrapper around another library's projection object.

#[cfg(test)]
pub(crate) mod testing;

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;

use crate::rotation::{GeoPoint, Rotation};

/// Capabilities the controller needs from a map projection.
pub trait Projection {
    /// Current three-axis rotation in degrees.
    fn rotation(&self) -> Rotation;

    /// Replace the rotation.
    fn set_rotation(&mut self, rotation: Rotation);

    /// Current display scale.
    fn scale(&self) -> f64;

    /// Replace the display scale.
    fn set_scale(&mut self, scale: f64);

    /// Geographic position under a screen point, or `None` when the point
    /// falls outside the visible part of the sphere.
    fn invert(&self, point: DVec2) -> Option<GeoPoint>;
}

/// Projection handle shared between the host (which renders with it) and
/// the controller (its only writer).
pub type SharedProjection = Rc<RefCell<dyn Projection>>;

/// Screen-space bounding box of the element the controller is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Viewport {
    /// Viewport from its left/top corner and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the box.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Orthographic;
    use super::*;

    #[test]
    fn viewport_center() {
        let vp = Viewport::new(10.0, 20.0, 200.0, 100.0);
        assert_eq!(vp.center(), DVec2::new(110.0, 70.0));
    }

    #[test]
    fn shared_handle_coerces_from_concrete_projection() {
        let concrete = Rc::new(RefCell::new(Orthographic::new(100.0)));
        let shared: SharedProjection = concrete.clone();
        shared.borrow_mut().set_scale(150.0);
        assert_eq!(concrete.borrow().scale(), 150.0);
    }
}
