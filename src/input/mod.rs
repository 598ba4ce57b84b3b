//! Input handling: raw pointer events, normalized gesture frames, and the
//! recognizer that converts one into the other while enforcing the zoom
//! scale extent.

/// Raw input and normalized gesture event types.
pub mod event;
/// Pointer tracking, pinch and wheel zoom.
pub mod recognizer;
/// Zoom factor and scale extent.
pub mod zoom;

pub use event::{
    centroid, GestureEvent, GestureKind, InputEvent, PointerId, WheelMode,
    MOUSE_POINTER_ID,
};
pub use recognizer::GestureRecognizer;
pub use zoom::{ScaleExtent, ZoomTransform};
