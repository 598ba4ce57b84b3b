//! Drag, pinch and wheel handling.
//!
//! A gesture is anchored on its first frame: the geographic point under the
//! pointer, the projection's rotation and that rotation as a versor. Every
//! later frame rotates from the anchor (never from the previous frame), so
//! rounding error does not accumulate over a long drag.

use glam::{DVec2, DVec3};

use super::GeoZoom;
use crate::input::{centroid, GestureEvent, GestureKind, InputEvent};
use crate::rotation::{cartesian, GeoPoint, Rotation, Versor};

/// Anchor captured at the start of a gesture.
#[derive(Debug, Clone, Copy)]
pub(super) struct GestureState {
    /// Unit vector of the grabbed point.
    v0: DVec3,
    /// Rotation at gesture start.
    r0: Rotation,
    /// `r0` as a versor.
    q0: Versor,
}

impl GestureState {
    fn new(grabbed: GeoPoint, rotation: Rotation) -> Self {
        Self {
            v0: cartesian(grabbed),
            r0: rotation,
            q0: Versor::from_angles(rotation),
        }
    }
}

impl GeoZoom {
    /// Feed a raw pointer or wheel event through the gesture recognizer and
    /// dispatch every gesture frame it produces.
    pub fn handle_input(&mut self, event: InputEvent) {
        let frames = self.recognizer.handle_event(event);
        for frame in &frames {
            self.handle_gesture(frame);
        }
    }

    /// Dispatch one gesture frame.
    pub fn handle_gesture(&mut self, event: &GestureEvent) {
        match event.kind {
            GestureKind::Start => self.on_gesture_start(&event.pointers),
            GestureKind::Move => {
                self.on_gesture_move(&event.pointers, event.zoom_factor);
            }
            GestureKind::End => self.on_gesture_end(),
        }
    }

    /// Anchor a gesture at the pointer centroid.
    ///
    /// Any transition in flight is cancelled. If the pointer is off the
    /// sphere no anchor is recorded; the next move frame will try again.
    pub fn on_gesture_start(&mut self, pointers: &[DVec2]) {
        if self.is_animating() {
            log::debug!("gesture start cancels running transition");
        }
        self.rotation_animator.cancel();
        self.zoom_animator.cancel();
        self.gesture = self.anchor(pointers);
        if self.gesture.is_none() {
            log::debug!("gesture start off the sphere");
        }
    }

    /// Apply one gesture frame: set the scale from `zoom_factor`, then
    /// rotate so the anchored point sits under the pointer centroid.
    pub fn on_gesture_move(&mut self, pointers: &[DVec2], zoom_factor: f64) {
        let Some(projection) = self.projection.clone() else {
            return;
        };

        let previous_scale = self.current_scale;
        if zoom_factor.is_finite() {
            self.recognizer.set_zoom_factor(zoom_factor);
        }
        self.apply_zoom_factor();
        let scale_changed = self.current_scale != previous_scale;

        let Some(state) = self.gesture else {
            // First frame without a usable start: anchor here, rotate next.
            self.gesture = self.anchor(pointers);
            if scale_changed {
                self.notify_move();
            }
            return;
        };

        let rotated = {
            let mut p = projection.borrow_mut();
            let previous = p.rotation();
            p.set_rotation(state.r0);
            match self.resolve_pointer(pointers).and_then(|pt| p.invert(pt)) {
                Some(grabbed) => {
                    let v1 = cartesian(grabbed);
                    let q1 = state.q0 * Versor::delta(state.v0, v1, 1.0);
                    let mut rotation = q1.to_angles();
                    if self.north_up {
                        rotation = rotation.north_up();
                    }
                    p.set_rotation(rotation);
                    true
                }
                None => {
                    p.set_rotation(previous);
                    false
                }
            }
        };

        if rotated || scale_changed {
            self.notify_move();
        }
    }

    /// Discard the gesture anchor.
    pub fn on_gesture_end(&mut self) {
        if self.gesture.take().is_some() {
            log::debug!("gesture ended");
        }
    }

    /// Zoom by `factor` around the viewport center, as a complete synthetic
    /// gesture. Clamped to the scale extent.
    pub fn zoom_by(&mut self, factor: f64) -> &mut Self {
        let frames = self.recognizer.zoom_by(factor);
        for frame in &frames {
            self.handle_gesture(frame);
        }
        self
    }

    fn anchor(&self, pointers: &[DVec2]) -> Option<GestureState> {
        let projection = self.projection.as_ref()?;
        let point = self.resolve_pointer(pointers)?;
        let p = projection.borrow();
        let grabbed = p.invert(point)?;
        Some(GestureState::new(grabbed, p.rotation()))
    }

    /// Screen point a gesture frame refers to. A lone pointer at the exact
    /// origin comes from a synthetic event and maps to the viewport center.
    fn resolve_pointer(&self, pointers: &[DVec2]) -> Option<DVec2> {
        match pointers {
            [] => None,
            [single] if *single == DVec2::ZERO => Some(self.viewport.center()),
            [single] => Some(*single),
            many => centroid(many),
        }
    }
}
