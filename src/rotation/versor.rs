use std::ops::{Mul, Neg};

use glam::DVec3;

use super::Rotation;

/// Cross products shorter than this are treated as parallel vectors.
const DELTA_EPSILON: f64 = 1e-6;

/// Unit quaternion `(w, x, y, z)` encoding a projection rotation.
///
/// Versors are never normalized explicitly. Every constructor builds them
/// from sines and cosines of half angles, which keeps the norm at one up to
/// rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Versor {
    /// Scalar part.
    pub w: f64,
    /// First vector component (lambda axis).
    pub x: f64,
    /// Second vector component (phi axis).
    pub y: f64,
    /// Third vector component (gamma axis).
    pub z: f64,
}

impl Default for Versor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Versor {
    /// The rotation that leaves everything in place.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Versor from raw components.
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Build the versor for a projection rotation given in degrees.
    ///
    /// Spin, tilt and roll are combined in one closed-form expression
    /// rather than three sequential products, so rounding does not compound.
    pub fn from_angles(rotation: Rotation) -> Self {
        let (sl, cl) = (rotation.lambda.to_radians() / 2.0).sin_cos();
        let (sp, cp) = (rotation.phi.to_radians() / 2.0).sin_cos();
        let (sg, cg) = (rotation.gamma.to_radians() / 2.0).sin_cos();

        Self {
            w: cl * cp * cg + sl * sp * sg,
            x: sl * cp * cg - cl * sp * sg,
            y: cl * sp * cg + sl * cp * sg,
            z: cl * cp * sg - sl * sp * cg,
        }
    }

    /// Convert back to projection rotation angles in degrees.
    ///
    /// The `asin` argument is clamped to `[-1, 1]`.
    pub fn to_angles(self) -> Rotation {
        let Self { w, x, y, z } = self;
        Rotation {
            lambda: (2.0 * (w * x + y * z))
                .atan2(1.0 - 2.0 * (x * x + y * y))
                .to_degrees(),
            phi: (2.0 * (w * y - z * x)).clamp(-1.0, 1.0).asin().to_degrees(),
            gamma: (2.0 * (w * z + x * y))
                .atan2(1.0 - 2.0 * (y * y + z * z))
                .to_degrees(),
        }
    }

    /// Hamilton product `self * other`: applies `other` first, then `self`.
    #[must_use]
    pub fn multiply(self, other: Self) -> Self {
        let Self {
            w: a1,
            x: b1,
            y: c1,
            z: d1,
        } = self;
        let Self {
            w: a2,
            x: b2,
            y: c2,
            z: d2,
        } = other;
        Self {
            w: a1 * a2 - b1 * b2 - c1 * c2 - d1 * d2,
            x: a1 * b2 + b1 * a2 + c1 * d2 - d1 * c2,
            y: a1 * c2 - b1 * d2 + c1 * a2 + d1 * b2,
            z: a1 * d2 + b1 * c2 - c1 * b2 + d1 * a2,
        }
    }

    /// Minimal rotation carrying unit vector `v0` onto `v1`, scaled by
    /// `alpha` (`alpha < 1` yields that fraction of the full rotation).
    ///
    /// Near-parallel and antiparallel pairs have no well-defined axis and
    /// return [`Versor::IDENTITY`].
    pub fn delta(v0: DVec3, v1: DVec3, alpha: f64) -> Self {
        let axis = v0.cross(v1);
        let len = axis.length();
        if len < DELTA_EPSILON {
            return Self::IDENTITY;
        }

        let t = alpha * v0.dot(v1).clamp(-1.0, 1.0).acos() / 2.0;
        let s = t.sin();

        // Sphere axes (x, y, z) map onto the versor's gamma, phi and lambda
        // components respectively.
        Self {
            w: t.cos(),
            x: axis.z / len * s,
            y: -axis.y / len * s,
            z: axis.x / len * s,
        }
    }

    /// Four-dimensional dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean norm; one for every versor built by this module.
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Components as `[w, x, y, z]`.
    pub fn to_array(self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }
}

impl Neg for Versor {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl Mul for Versor {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl From<Rotation> for Versor {
    fn from(rotation: Rotation) -> Self {
        Self::from_angles(rotation)
    }
}

impl From<Versor> for Rotation {
    fn from(versor: Versor) -> Self {
        versor.to_angles()
    }
}
