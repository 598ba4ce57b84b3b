use web_time::{Duration, Instant};

use super::clock::TransitionClock;
use crate::util::easing::EasingFunction;

/// Drives at most one zoom-factor transition, used to ease the zoom back to
/// identity on reset.
#[derive(Debug, Clone, Default)]
pub struct ZoomAnimator {
    transition: Option<(f64, f64, TransitionClock)>,
    easing: EasingFunction,
}

impl ZoomAnimator {
    /// Idle animator using `easing` for future transitions.
    pub fn new(easing: EasingFunction) -> Self {
        Self {
            transition: None,
            easing,
        }
    }

    /// Change the easing for transitions started from now on.
    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.easing = easing;
    }

    /// Begin easing the zoom factor from `from` to `to`, replacing any
    /// transition in flight.
    pub fn start(&mut self, from: f64, to: f64, duration: Duration, now: Instant) {
        self.transition =
            Some((from, to, TransitionClock::new(now, duration, self.easing)));
    }

    /// Drop the current transition.
    pub fn cancel(&mut self) {
        self.transition = None;
    }

    /// Whether a transition is in flight.
    pub fn is_active(&self) -> bool {
        self.transition.is_some()
    }

    /// Zoom factor to apply at `now`, or `None` when idle. The final value
    /// is exactly the target.
    pub fn update(&mut self, now: Instant) -> Option<f64> {
        let (from, to, clock) = self.transition?;
        if clock.is_complete(now) {
            self.transition = None;
            return Some(to);
        }
        let t = clock.eased_progress(now);
        Some(from + (to - from) * t)
    }
}
