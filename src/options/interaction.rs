use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::ScaleExtent;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Gesture and keyboard-step behavior.
pub struct InteractionOptions {
    /// Keep the roll at zero so north always points up.
    #[schemars(title = "North Up")]
    pub north_up: bool,
    /// Allowed zoom factor range `[min, max]`.
    #[schemars(title = "Scale Extent")]
    pub scale_extent: [f64; 2],
    /// Degrees moved by each directional step.
    #[schemars(title = "Move Step", range(min = 0.5, max = 90.0), extend("step" = 0.5))]
    pub move_step: f64,
}

impl InteractionOptions {
    /// The configured extent, if it is valid.
    pub fn scale_extent(&self) -> Option<ScaleExtent> {
        ScaleExtent::try_from(self.scale_extent).ok()
    }
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            north_up: false,
            scale_extent: ScaleExtent::default().to_array(),
            move_step: 10.0,
        }
    }
}
