//! Controller options with TOML preset support.
//!
//! All tweakable interaction settings (north-up, scale extent, step size,
//! transition timing) are consolidated here. Options serialize to/from TOML
//! so a host can ship presets next to its map styles.

mod interaction;
mod transition;

use std::path::Path;

pub use interaction::InteractionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::GeoZoomError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[transition]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Gesture and step behavior.
    pub interaction: InteractionOptions,
    /// Transition timing and shape.
    pub transition: TransitionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, GeoZoomError> {
        toml::from_str(content)
            .map_err(|e| GeoZoomError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GeoZoomError> {
        let content = std::fs::read_to_string(path).map_err(GeoZoomError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GeoZoomError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GeoZoomError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GeoZoomError::Io)?;
        }
        std::fs::write(path, content).map_err(GeoZoomError::Io)
    }
}
