use glam::DVec2;

/// Identifier distinguishing simultaneous pointers (mouse, touch points).
pub type PointerId = u64;

/// Pointer id conventionally used for the mouse.
pub const MOUSE_POINTER_ID: PointerId = u64::MAX;

/// Unit of a wheel delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelMode {
    /// Delta in pixels (trackpads, most browsers).
    #[default]
    Pixel,
    /// Delta in lines (classic mouse wheels).
    Line,
    /// Delta in pages.
    Page,
}

impl WheelMode {
    /// Multiplier turning a delta in this unit into a base-2 zoom exponent.
    pub fn zoom_rate(self) -> f64 {
        match self {
            Self::Pixel => 0.002,
            Self::Line => 0.05,
            Self::Page => 1.0,
        }
    }
}

/// Platform-agnostic raw input events.
///
/// These are fed into a [`GestureRecognizer`](super::GestureRecognizer)
/// which turns them into [`GestureEvent`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer (mouse button or finger) went down.
    PointerDown {
        /// Pointer identifier.
        id: PointerId,
        /// Horizontal position in element pixels.
        x: f64,
        /// Vertical position in element pixels.
        y: f64,
    },
    /// A pointer moved.
    PointerMoved {
        /// Pointer identifier.
        id: PointerId,
        /// Horizontal position in element pixels.
        x: f64,
        /// Vertical position in element pixels.
        y: f64,
    },
    /// A pointer was released or cancelled.
    PointerUp {
        /// Pointer identifier.
        id: PointerId,
    },
    /// Wheel scrolled over the element (positive `delta_y` zooms out).
    Wheel {
        /// Cursor horizontal position in element pixels.
        x: f64,
        /// Cursor vertical position in element pixels.
        y: f64,
        /// Vertical scroll amount.
        delta_y: f64,
        /// Unit of `delta_y`.
        mode: WheelMode,
    },
}

/// Phase of a normalized gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// A gesture began, or the set of active pointers changed.
    Start,
    /// The pointers moved or the zoom factor changed.
    Move,
    /// All pointers were released.
    End,
}

/// A normalized gesture frame consumed by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureEvent {
    /// Phase of the gesture.
    pub kind: GestureKind,
    /// Screen positions of all active pointers.
    pub pointers: Vec<DVec2>,
    /// Current zoom multiplier relative to the projection's unity scale.
    pub zoom_factor: f64,
}

impl GestureEvent {
    /// Gesture frame with the given phase, pointers and zoom factor.
    pub fn new(kind: GestureKind, pointers: Vec<DVec2>, zoom_factor: f64) -> Self {
        Self {
            kind,
            pointers,
            zoom_factor,
        }
    }
}

/// Arithmetic mean of the given points, `None` if there are none.
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[DVec2]) -> Option<DVec2> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().copied().sum::<DVec2>() / points.len() as f64)
}

#[cfg(feature = "viewer")]
impl From<&winit::event::Touch> for InputEvent {
    fn from(touch: &winit::event::Touch) -> Self {
        use winit::event::TouchPhase;

        let (x, y) = (touch.location.x, touch.location.y);
        match touch.phase {
            TouchPhase::Started => Self::PointerDown { id: touch.id, x, y },
            TouchPhase::Moved => Self::PointerMoved { id: touch.id, x, y },
            TouchPhase::Ended | TouchPhase::Cancelled => {
                Self::PointerUp { id: touch.id }
            }
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Wheel event from a winit scroll delta at cursor position `(x, y)`.
    pub fn from_winit_scroll(
        delta: winit::event::MouseScrollDelta,
        x: f64,
        y: f64,
    ) -> Self {
        use winit::event::MouseScrollDelta;

        // winit reports positive y when scrolling up (zoom in).
        let (delta_y, mode) = match delta {
            MouseScrollDelta::LineDelta(_, dy) => (-f64::from(dy), WheelMode::Line),
            MouseScrollDelta::PixelDelta(pos) => (-pos.y, WheelMode::Pixel),
        };
        Self::Wheel {
            x,
            y,
            delta_y,
            mode,
        }
    }
}
