//! Turns raw pointer and wheel input into normalized gesture frames.
//!
//! The `GestureRecognizer` owns all transient input state (active pointers,
//! pinch reference spread) and the zoom transform with its scale extent. It
//! is the only thing between raw platform events and the controller's
//! gesture handlers.

use glam::DVec2;

use super::event::{
    centroid, GestureEvent, GestureKind, InputEvent, PointerId, WheelMode,
};
use super::zoom::{ScaleExtent, ZoomTransform};

/// Pinch spreads below this many pixels are too small to take a ratio of.
const MIN_PINCH_SPREAD: f64 = 1e-3;

/// Reference frame for a multi-pointer pinch.
#[derive(Debug, Clone, Copy)]
struct Pinch {
    /// Mean pointer distance from the centroid when the pinch was anchored.
    spread: f64,
    /// Zoom factor when the pinch was anchored.
    k: f64,
}

/// Converts [`InputEvent`]s into [`GestureEvent`]s.
///
/// Each change in the set of pressed pointers re-anchors the gesture with a
/// fresh [`GestureKind::Start`], so adding or lifting a finger never makes
/// the centroid jump. With two or more pointers the ratio of their spread to
/// the anchored spread drives the zoom factor.
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    /// Pressed pointers in press order.
    pointers: Vec<(PointerId, DVec2)>,
    /// Zoom factor and its extent.
    zoom: ZoomTransform,
    /// Pinch reference, present while two or more pointers are down.
    pinch: Option<Pinch>,
}

impl GestureRecognizer {
    /// Recognizer with the identity zoom clamped to `extent`.
    pub fn new(extent: ScaleExtent) -> Self {
        Self {
            zoom: ZoomTransform::new(extent),
            ..Self::default()
        }
    }

    /// Current zoom factor.
    pub fn zoom_factor(&self) -> f64 {
        self.zoom.k()
    }

    /// Current scale extent.
    pub fn scale_extent(&self) -> ScaleExtent {
        self.zoom.extent()
    }

    /// Replace the scale extent, re-clamping the zoom factor.
    pub fn set_scale_extent(&mut self, extent: ScaleExtent) {
        self.zoom.set_extent(extent);
        self.anchor_pinch();
    }

    /// Set the zoom factor directly (clamped), e.g. while animating a reset.
    pub fn set_zoom_factor(&mut self, k: f64) {
        self.zoom.scale_to(k);
        self.anchor_pinch();
    }

    /// Whether any pointer is pressed.
    pub fn is_active(&self) -> bool {
        !self.pointers.is_empty()
    }

    /// Screen positions of the pressed pointers, in press order.
    pub fn pointer_positions(&self) -> Vec<DVec2> {
        self.pointers.iter().map(|&(_, pos)| pos).collect()
    }

    /// Process one raw event and return the gesture frames it produces.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<GestureEvent> {
        match event {
            InputEvent::PointerDown { id, x, y } => {
                self.pointer_down(id, DVec2::new(x, y))
            }
            InputEvent::PointerMoved { id, x, y } => {
                self.pointer_moved(id, DVec2::new(x, y))
            }
            InputEvent::PointerUp { id } => self.pointer_up(id),
            InputEvent::Wheel {
                x,
                y,
                delta_y,
                mode,
            } => self.wheel(DVec2::new(x, y), delta_y, mode),
        }
    }

    /// Programmatic zoom by `factor` (e.g. a "+" button).
    ///
    /// When no pointer is pressed the frames carry a single pointer at the
    /// origin, the convention for a synthetic gesture; the controller pivots
    /// those around the element's center.
    pub fn zoom_by(&mut self, factor: f64) -> Vec<GestureEvent> {
        self.zoom.scale_by(factor);
        self.zoom_frames(DVec2::ZERO)
    }

    fn pointer_down(&mut self, id: PointerId, pos: DVec2) -> Vec<GestureEvent> {
        if let Some(entry) = self.pointers.iter_mut().find(|(pid, _)| *pid == id) {
            entry.1 = pos;
        } else {
            self.pointers.push((id, pos));
        }
        self.anchor_pinch();
        vec![self.frame(GestureKind::Start)]
    }

    fn pointer_moved(&mut self, id: PointerId, pos: DVec2) -> Vec<GestureEvent> {
        let Some(entry) = self.pointers.iter_mut().find(|(pid, _)| *pid == id)
        else {
            // Hover without a pressed pointer.
            return Vec::new();
        };
        entry.1 = pos;

        if let Some(pinch) = self.pinch {
            let spread = self.spread();
            if pinch.spread > MIN_PINCH_SPREAD {
                self.zoom.scale_to(pinch.k * spread / pinch.spread);
            }
        }
        vec![self.frame(GestureKind::Move)]
    }

    fn pointer_up(&mut self, id: PointerId) -> Vec<GestureEvent> {
        let before = self.pointers.len();
        self.pointers.retain(|(pid, _)| *pid != id);
        if self.pointers.len() == before {
            return Vec::new();
        }

        self.anchor_pinch();
        if self.pointers.is_empty() {
            vec![self.frame(GestureKind::End)]
        } else {
            vec![self.frame(GestureKind::Start)]
        }
    }

    fn wheel(&mut self, pos: DVec2, delta_y: f64, mode: WheelMode) -> Vec<GestureEvent> {
        self.zoom.scale_by((-delta_y * mode.zoom_rate()).exp2());
        self.zoom_frames(pos)
    }

    /// Frames for a zoom change pivoting at `pos`, or at the live drag if
    /// pointers are pressed.
    fn zoom_frames(&mut self, pos: DVec2) -> Vec<GestureEvent> {
        if self.is_active() {
            self.anchor_pinch();
            return vec![self.frame(GestureKind::Move)];
        }

        let k = self.zoom.k();
        [GestureKind::Start, GestureKind::Move, GestureKind::End]
            .into_iter()
            .map(|kind| GestureEvent::new(kind, vec![pos], k))
            .collect()
    }

    fn frame(&self, kind: GestureKind) -> GestureEvent {
        GestureEvent::new(kind, self.pointer_positions(), self.zoom.k())
    }

    /// Mean distance of the pressed pointers from their centroid.
    #[allow(clippy::cast_precision_loss)]
    fn spread(&self) -> f64 {
        let positions = self.pointer_positions();
        let Some(center) = centroid(&positions) else {
            return 0.0;
        };
        positions.iter().map(|p| p.distance(center)).sum::<f64>()
            / positions.len() as f64
    }

    fn anchor_pinch(&mut self) {
        self.pinch = (self.pointers.len() >= 2).then(|| Pinch {
            spread: self.spread(),
            k: self.zoom.k(),
        });
    }
}
