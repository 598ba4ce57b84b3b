use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animation::RotationInterpolation;
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transitions", inline)]
#[serde(default)]
/// Timing and shape of animated rotation and zoom changes.
pub struct TransitionOptions {
    /// Length of programmatic transitions in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 5000), extend("step" = 50))]
    pub duration_ms: u64,
    /// How intermediate rotations are computed.
    #[schemars(title = "Interpolation")]
    pub interpolation: RotationInterpolation,
    /// Easing curve applied to transition progress.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl TransitionOptions {
    /// Transition length as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_ms: 750,
            interpolation: RotationInterpolation::default(),
            easing: EasingFunction::default(),
        }
    }
}
