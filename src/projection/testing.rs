//! Orthographic globe used to exercise the controller in tests.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;

use super::{Projection, SharedProjection};
use crate::rotation::{GeoPoint, Rotation};

/// Orthographic projection with a three-axis rotation, screen y down.
#[derive(Debug, Clone)]
pub(crate) struct Orthographic {
    rotation: Rotation,
    scale: f64,
    translate: DVec2,
}

impl Orthographic {
    pub(crate) fn new(scale: f64) -> Self {
        Self {
            rotation: Rotation::IDENTITY,
            scale,
            translate: DVec2::ZERO,
        }
    }

    pub(crate) fn with_translate(mut self, translate: DVec2) -> Self {
        self.translate = translate;
        self
    }

    pub(crate) fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Rotate a geographic point (radians) into the view frame.
    fn rotate(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let (sin_dp, cos_dp) = self.rotation.phi.to_radians().sin_cos();
        let (sin_dg, cos_dg) = self.rotation.gamma.to_radians().sin_cos();
        let lambda = lambda + self.rotation.lambda.to_radians();

        let cos_phi = phi.cos();
        let x = lambda.cos() * cos_phi;
        let y = lambda.sin() * cos_phi;
        let z = phi.sin();
        let k = z * cos_dp + x * sin_dp;
        (
            (y * cos_dg - k * sin_dg).atan2(x * cos_dp - z * sin_dp),
            (k * cos_dg + y * sin_dg).clamp(-1.0, 1.0).asin(),
        )
    }

    /// Inverse of [`Self::rotate`].
    fn unrotate(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let (sin_dp, cos_dp) = self.rotation.phi.to_radians().sin_cos();
        let (sin_dg, cos_dg) = self.rotation.gamma.to_radians().sin_cos();

        let cos_phi = phi.cos();
        let x = lambda.cos() * cos_phi;
        let y = lambda.sin() * cos_phi;
        let z = phi.sin();
        let k = z * cos_dg - y * sin_dg;
        let out_lambda = (y * cos_dg + z * sin_dg).atan2(x * cos_dp + k * sin_dp);
        let out_phi = (k * cos_dp - x * sin_dp).clamp(-1.0, 1.0).asin();
        (out_lambda - self.rotation.lambda.to_radians(), out_phi)
    }

    /// Screen position of a geographic point, `None` on the far side.
    pub(crate) fn project(&self, point: GeoPoint) -> Option<DVec2> {
        let (lambda, phi) =
            self.rotate(point.lambda.to_radians(), point.phi.to_radians());
        if phi.cos() * lambda.cos() < 0.0 {
            return None;
        }
        let x = phi.cos() * lambda.sin();
        let y = phi.sin();
        Some(DVec2::new(
            self.translate.x + x * self.scale,
            self.translate.y - y * self.scale,
        ))
    }
}

/// Wrap a globe for binding, keeping a concrete handle for assertions.
pub(crate) fn shared(
    globe: Orthographic,
) -> (Rc<RefCell<Orthographic>>, SharedProjection) {
    let concrete = Rc::new(RefCell::new(globe));
    let handle: SharedProjection = concrete.clone();
    (concrete, handle)
}

impl Projection for Orthographic {
    fn rotation(&self) -> Rotation {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn invert(&self, point: DVec2) -> Option<GeoPoint> {
        let x = (point.x - self.translate.x) / self.scale;
        let y = (self.translate.y - point.y) / self.scale;
        let rho_sq = x * x + y * y;
        if rho_sq > 1.0 {
            return None;
        }
        let lambda = x.atan2((1.0 - rho_sq).sqrt());
        let phi = y.clamp(-1.0, 1.0).asin();
        let (lambda, phi) = self.unrotate(lambda, phi);
        Some(GeoPoint::new(lambda.to_degrees(), phi.to_degrees()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_undoes_project() {
        let proj = Orthographic::new(100.0)
            .with_translate(DVec2::new(200.0, 150.0))
            .with_rotation(Rotation::new(-30.0, 20.0, 10.0));
        let point = GeoPoint::new(35.0, -5.0);
        let screen = proj.project(point);
        assert!(screen.is_some());
        let back = screen.and_then(|s| proj.invert(s));
        let back = back.unwrap_or_default();
        assert!((back.lambda - point.lambda).abs() < 1e-9, "{back:?}");
        assert!((back.phi - point.phi).abs() < 1e-9, "{back:?}");
    }

    #[test]
    fn outside_disk_does_not_invert() {
        let proj = Orthographic::new(100.0);
        assert!(proj.invert(DVec2::new(150.0, 0.0)).is_none());
    }

    #[test]
    fn center_is_rotation_origin() {
        let proj = Orthographic::new(100.0).with_rotation(Rotation::new(-40.0, -25.0, 0.0));
        let center = proj.invert(DVec2::ZERO).unwrap_or_default();
        assert!((center.lambda - 40.0).abs() < 1e-9);
        assert!((center.phi - 25.0).abs() < 1e-9);
    }
}
