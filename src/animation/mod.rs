//! Time-based transitions for rotation and zoom.
//!
//! Nothing here owns a scheduler. The host calls the controller's `tick`
//! once per frame with the current instant, and each animator recomputes
//! its progress from absolute elapsed time.

/// Absolute-time progress tracking.
pub mod clock;
/// Rotation transitions.
pub mod rotation;
/// Zoom-factor transitions.
pub mod zoom;

pub use clock::TransitionClock;
pub use rotation::{RotationAnimator, RotationInterpolation, RotationTransition};
pub use zoom::ZoomAnimator;
