//! Programmatic rotation: directional steps, absolute targets, reset, and
//! the per-frame tick that advances transitions.

use serde::{Deserialize, Serialize};
use web_time::Instant;

use super::GeoZoom;
use crate::animation::RotationInterpolation;
use crate::rotation::Rotation;

/// Direction of a programmatic step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Decrease lambda.
    Left,
    /// Increase lambda.
    Right,
    /// Decrease phi.
    Up,
    /// Increase phi.
    Down,
    /// Level the roll, keeping lambda and phi.
    North,
}

impl Direction {
    /// Target reached by stepping `step` degrees from `from`.
    pub fn apply(self, from: Rotation, step: f64) -> Rotation {
        let mut to = from;
        match self {
            Self::Left => to.lambda -= step,
            Self::Right => to.lambda += step,
            Self::Up => to.phi -= step,
            Self::Down => to.phi += step,
            Self::North => to.gamma = 0.0,
        }
        to
    }
}

impl GeoZoom {
    /// Animate a step of `step_degrees` in `direction` from the current
    /// rotation.
    pub fn move_by(&mut self, direction: Direction, step_degrees: f64) -> &mut Self {
        if let Some(current) = self.rotation() {
            self.start_rotation(direction.apply(current, step_degrees), Instant::now());
        }
        self
    }

    /// Animate a step of the configured move step in `direction`.
    pub fn step(&mut self, direction: Direction) -> &mut Self {
        let step = self.move_step;
        self.move_by(direction, step)
    }

    /// Animate to an absolute rotation.
    pub fn rotate_to(&mut self, target: Rotation) -> &mut Self {
        self.start_rotation(target, Instant::now());
        self
    }

    /// Animate back to the rotation recorded at first binding and to zoom
    /// factor 1.
    pub fn reset(&mut self) -> &mut Self {
        if self.projection.is_none() {
            return self;
        }
        let now = Instant::now();
        self.zoom_animator.start(
            self.recognizer.zoom_factor(),
            1.0,
            self.transition_duration,
            now,
        );
        let baseline = self.initial_rotation;
        self.start_rotation(baseline, now);
        self
    }

    /// Advance running transitions to `now` and write the result to the
    /// projection. Returns whether a transition is still running, so the
    /// host knows to keep requesting frames.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(projection) = self.projection.clone() else {
            return false;
        };

        let mut changed = false;
        if let Some(k) = self.zoom_animator.update(now) {
            self.recognizer.set_zoom_factor(k);
            self.apply_zoom_factor();
            changed = true;
        }
        if let Some(mut rotation) = self.rotation_animator.update(now) {
            if self.north_up {
                rotation = rotation.north_up();
            }
            projection.borrow_mut().set_rotation(rotation);
            changed = true;
        }

        if changed {
            self.notify_move();
            if !self.is_animating() {
                log::debug!("transition complete");
            }
        }
        self.is_animating()
    }

    fn start_rotation(&mut self, target: Rotation, now: Instant) {
        let Some(from) = self.rotation() else {
            return;
        };
        log::debug!("rotation transition {from:?} -> {target:?}");
        if self.north_up {
            // Lerping level endpoints keeps every frame level.
            self.rotation_animator.start_with(
                from.north_up(),
                target.north_up(),
                self.transition_duration,
                now,
                RotationInterpolation::PerAxis,
            );
        } else {
            self.rotation_animator
                .start(from, target, self.transition_duration, now);
        }
    }
}
