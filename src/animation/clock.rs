//! Wall-clock progress for a single transition.

use web_time::{Duration, Instant};

use crate::util::easing::EasingFunction;

/// Start time, duration and easing of one transition.
///
/// Progress is always derived from absolute elapsed time, so a host that
/// drops frames simply sees a larger jump on the next tick rather than a
/// slower animation.
#[derive(Debug, Clone, Copy)]
pub struct TransitionClock {
    /// When the transition started.
    start_time: Instant,
    /// Total duration.
    duration: Duration,
    /// Curve applied to raw progress.
    easing: EasingFunction,
}

impl TransitionClock {
    /// Clock starting at `start_time`.
    pub fn new(
        start_time: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start_time,
            duration,
            easing,
        }
    }

    /// When the transition started.
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Total transition duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Raw progress in `[0, 1]`. Zero-length transitions are complete
    /// immediately.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Progress after applying the easing curve.
    pub fn eased_progress(&self, now: Instant) -> f64 {
        self.easing.evaluate(self.progress(now))
    }

    /// Whether `now` is at or past the end of the transition.
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
