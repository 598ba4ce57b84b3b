//! Interpolation between projection rotations.

use super::{Rotation, Versor};

/// Above this quaternion dot product the slerp denominator `sin(theta0)`
/// becomes too small to divide by; per-axis lerp is used instead.
const SLERP_THRESHOLD: f64 = 0.9995;

/// Signed difference `end - start` folded onto the shortest arc, in
/// `[-180, 180)`.
#[inline]
fn shortest_arc(start: f64, end: f64) -> f64 {
    (end - start + 180.0).rem_euclid(360.0) - 180.0
}

/// Per-axis linear interpolation, each axis taking the shortest way round.
///
/// `t = 0` yields `a` exactly; `t = 1` yields `b` modulo 360°.
pub fn interpolate_angles_linear(a: Rotation, b: Rotation, t: f64) -> Rotation {
    Rotation {
        lambda: a.lambda + shortest_arc(a.lambda, b.lambda) * t,
        phi: a.phi + shortest_arc(a.phi, b.phi) * t,
        gamma: a.gamma + shortest_arc(a.gamma, b.gamma) * t,
    }
}

/// Spherical interpolation between two rotations along the shortest arc.
///
/// Both endpoints are lifted to versors. A negative dot product flips `b`
/// so the path never goes the long way round. Nearly identical orientations
/// fall back to [`interpolate_angles_linear`].
pub fn interpolate_angles(a: Rotation, b: Rotation, t: f64) -> Rotation {
    let qa = Versor::from_angles(a);
    let mut qb = Versor::from_angles(b);

    let mut dot = qa.dot(qb);
    if dot < 0.0 {
        qb = -qb;
        dot = -dot;
    }

    if dot > SLERP_THRESHOLD {
        return interpolate_angles_linear(a, b, t);
    }

    let theta0 = dot.clamp(-1.0, 1.0).acos();
    let (sin_theta, cos_theta) = (theta0 * t).sin_cos();

    // qb - qa·dot is orthogonal to qa with length sin(theta0).
    let s0 = cos_theta;
    let s1 = sin_theta / theta0.sin();
    let q = Versor::new(
        qa.w * s0 + (qb.w - qa.w * dot) * s1,
        qa.x * s0 + (qb.x - qa.x * dot) * s1,
        qa.y * s0 + (qb.y - qa.y * dot) * s1,
        qa.z * s0 + (qb.z - qa.z * dot) * s1,
    );

    q.to_angles()
}
