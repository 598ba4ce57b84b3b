//! Animated transition between two projection rotations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::{Duration, Instant};

use super::clock::TransitionClock;
use crate::rotation::{interpolate_angles, interpolate_angles_linear, Rotation};
use crate::util::easing::EasingFunction;

/// How intermediate rotations are computed during a transition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RotationInterpolation {
    /// Quaternion slerp; all three axes move together along one arc.
    #[default]
    Slerp,
    /// Independent per-axis lerp, each axis wrapped to its shortest arc.
    PerAxis,
}

impl RotationInterpolation {
    /// Rotation at eased progress `t` between `from` and `to`.
    pub fn interpolate(self, from: Rotation, to: Rotation, t: f64) -> Rotation {
        match self {
            Self::Slerp => interpolate_angles(from, to, t),
            Self::PerAxis => interpolate_angles_linear(from, to, t),
        }
    }
}

/// The single in-flight rotation transition.
#[derive(Debug, Clone, Copy)]
pub struct RotationTransition {
    /// Rotation when the transition was requested.
    pub from: Rotation,
    /// Rotation the transition lands on.
    pub to: Rotation,
    /// How intermediate frames are computed.
    pub interpolation: RotationInterpolation,
    /// Timing of the transition.
    pub clock: TransitionClock,
}

/// Drives at most one rotation transition at a time.
///
/// Starting a new transition replaces the current one; the abandoned target
/// is never reported.
#[derive(Debug, Clone, Default)]
pub struct RotationAnimator {
    transition: Option<RotationTransition>,
    interpolation: RotationInterpolation,
    easing: EasingFunction,
}

impl RotationAnimator {
    /// Idle animator with the given interpolation policy and easing.
    pub fn new(
        interpolation: RotationInterpolation,
        easing: EasingFunction,
    ) -> Self {
        Self {
            transition: None,
            interpolation,
            easing,
        }
    }

    /// Change the interpolation policy and easing for transitions started
    /// from now on.
    pub fn configure(
        &mut self,
        interpolation: RotationInterpolation,
        easing: EasingFunction,
    ) {
        self.interpolation = interpolation;
        self.easing = easing;
    }

    /// Begin a transition with the configured interpolation, replacing any
    /// transition in flight.
    pub fn start(
        &mut self,
        from: Rotation,
        to: Rotation,
        duration: Duration,
        now: Instant,
    ) {
        self.start_with(from, to, duration, now, self.interpolation);
    }

    /// Begin a transition with an explicit interpolation for this
    /// transition only.
    pub fn start_with(
        &mut self,
        from: Rotation,
        to: Rotation,
        duration: Duration,
        now: Instant,
        interpolation: RotationInterpolation,
    ) {
        if self.transition.is_some() {
            log::debug!("rotation transition replaced before completion");
        }
        self.transition = Some(RotationTransition {
            from,
            to,
            interpolation,
            clock: TransitionClock::new(now, duration, self.easing),
        });
    }

    /// Drop the current transition without reporting its target.
    pub fn cancel(&mut self) {
        self.transition = None;
    }

    /// Whether a transition is in flight.
    pub fn is_active(&self) -> bool {
        self.transition.is_some()
    }

    /// The in-flight transition, if any.
    pub fn transition(&self) -> Option<&RotationTransition> {
        self.transition.as_ref()
    }

    /// Rotation to display at `now`, or `None` when idle.
    ///
    /// When the transition reaches its end the exact target is returned
    /// and the animator becomes idle.
    pub fn update(&mut self, now: Instant) -> Option<Rotation> {
        let transition = self.transition?;

        if transition.clock.is_complete(now) {
            self.transition = None;
            return Some(transition.to);
        }

        let t = transition.clock.eased_progress(now);
        Some(
            transition
                .interpolation
                .interpolate(transition.from, transition.to, t),
        )
    }
}
