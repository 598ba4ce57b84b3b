//! Rotation algebra for sphere-projected maps.
//!
//! Orientation is stored on the projection as geographic angles
//! ([`Rotation`]) but composed as unit quaternions ([`Versor`]) so that
//! drags never hit gimbal lock. Conversions are closed-form and clamp their
//! inverse-trig arguments, so floating-point overshoot never yields NaN.

/// Angle interpolation (slerp and per-axis wrapped lerp).
pub mod interpolation;
/// Unit quaternion type and its conversions.
pub mod versor;

use glam::DVec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use interpolation::{interpolate_angles, interpolate_angles_linear};
pub use versor::Versor;

/// Three-axis projection rotation in degrees.
///
/// `lambda` spins around the polar axis (longitude), `phi` tilts toward the
/// viewer (latitude) and `gamma` rolls around the view axis. No wrapping is
/// applied to any component.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
pub struct Rotation {
    /// Longitude-like spin in degrees.
    pub lambda: f64,
    /// Latitude-like tilt in degrees.
    pub phi: f64,
    /// Roll in degrees.
    pub gamma: f64,
}

impl Rotation {
    /// The unrotated orientation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0);

    /// Rotation from its three components in degrees.
    pub const fn new(lambda: f64, phi: f64, gamma: f64) -> Self {
        Self { lambda, phi, gamma }
    }

    /// Nearest level rotation: the roll is cleared.
    ///
    /// A roll beyond a quarter turn is first rewritten through the
    /// equivalent form `(λ ± 180, ±180 − φ, γ ± 180)`, so a frame that only
    /// reads as rolled because it crossed a pole keeps its orientation.
    #[must_use]
    pub fn north_up(self) -> Self {
        let roll = (self.gamma + 180.0).rem_euclid(360.0) - 180.0;
        if roll.abs() <= 90.0 {
            return Self {
                gamma: 0.0,
                ..self
            };
        }
        Self {
            lambda: if self.lambda > 0.0 {
                self.lambda - 180.0
            } else {
                self.lambda + 180.0
            },
            phi: if self.phi >= 0.0 {
                180.0 - self.phi
            } else {
                -180.0 - self.phi
            },
            gamma: 0.0,
        }
    }

    /// Components as `[lambda, phi, gamma]`.
    pub fn to_array(self) -> [f64; 3] {
        [self.lambda, self.phi, self.gamma]
    }
}

impl From<[f64; 3]> for Rotation {
    fn from([lambda, phi, gamma]: [f64; 3]) -> Self {
        Self::new(lambda, phi, gamma)
    }
}

impl From<Rotation> for [f64; 3] {
    fn from(rotation: Rotation) -> Self {
        rotation.to_array()
    }
}

/// A geographic position in degrees, as returned by a projection's inverse.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    /// Longitude in degrees.
    pub lambda: f64,
    /// Latitude in degrees.
    pub phi: f64,
}

impl GeoPoint {
    /// Point from longitude and latitude in degrees.
    pub const fn new(lambda: f64, phi: f64) -> Self {
        Self { lambda, phi }
    }
}

/// Map a geographic point onto the unit sphere.
///
/// `x` points at (0°, 0°), `y` at (90°E, 0°) and `z` at the north pole.
pub fn cartesian(point: GeoPoint) -> DVec3 {
    let (sin_l, cos_l) = point.lambda.to_radians().sin_cos();
    let (sin_p, cos_p) = point.phi.to_radians().sin_cos();
    DVec3::new(cos_p * cos_l, cos_p * sin_l, sin_p)
}
