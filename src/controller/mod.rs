//! Gesture-driven rotation and zoom controller for a projected globe.
//!
//! [`GeoZoom`] binds to one [`Projection`](crate::projection::Projection)
//! at a time and is its only writer. Pointer gestures rotate the globe so
//! the grabbed point stays under the pointer; pinch and wheel gestures
//! change the display scale relative to the projection's own base scale;
//! programmatic calls ([`GeoZoom::rotate_to`], [`GeoZoom::move_by`],
//! [`GeoZoom::reset`]) start animated transitions that the host advances
//! with [`GeoZoom::tick`].
//!
//! # Usage
//!
//! ```ignore
//! let mut zoom = GeoZoom::new();
//! let _ = zoom
//!     .set_projection(globe.clone())
//!     .set_viewport(Viewport::new(0.0, 0.0, 800.0, 600.0))
//!     .set_north_up(true)
//!     .on_move(|ev| log::info!("scale {} rotation {:?}", ev.scale, ev.rotation));
//!
//! // In the event loop:
//! zoom.handle_input(InputEvent::PointerDown { id: 0, x: 400.0, y: 300.0 });
//! // Once per frame:
//! zoom.tick(Instant::now());
//! ```

mod gesture;
mod movement;

use std::fmt;
use std::rc::Rc;

use web_time::Duration;

pub use movement::Direction;

use self::gesture::GestureState;
use crate::animation::{RotationAnimator, ZoomAnimator};
use crate::input::{GestureRecognizer, ScaleExtent};
use crate::options::{InteractionOptions, Options, TransitionOptions};
use crate::projection::{SharedProjection, Viewport};
use crate::rotation::Rotation;

/// Payload delivered to the move callback after every change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveEvent {
    /// Display scale now set on the projection.
    pub scale: f64,
    /// Rotation now set on the projection.
    pub rotation: Rotation,
}

type MoveCallback = Box<dyn FnMut(&MoveEvent)>;

/// Interactive rotation and zoom controller for one bound element.
pub struct GeoZoom {
    /// The bound projection, shared with the host.
    projection: Option<SharedProjection>,
    /// Bounding box of the element, used to pivot synthetic gestures.
    viewport: Viewport,
    /// Pointer tracking and zoom factor with its scale extent.
    recognizer: GestureRecognizer,
    /// Base scale of the bound projection (zoom factor 1).
    unity_scale: f64,
    /// Scale last written to the projection.
    current_scale: f64,
    /// Rotation recorded when the first projection was bound.
    initial_rotation: Rotation,
    /// Whether roll is pinned to zero.
    north_up: bool,
    /// Default step for [`GeoZoom::step`], in degrees.
    move_step: f64,
    /// Duration used by transitions started from now on.
    transition_duration: Duration,
    /// Interpolation and easing last applied to the animators.
    transition: TransitionOptions,
    /// The single rotation transition.
    rotation_animator: RotationAnimator,
    /// The single zoom transition (reset).
    zoom_animator: ZoomAnimator,
    /// Anchor of the gesture in progress.
    gesture: Option<GestureState>,
    /// Single-slot move observer.
    on_move: Option<MoveCallback>,
}

impl Default for GeoZoom {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoZoom {
    /// Controller with default options and no projection bound.
    pub fn new() -> Self {
        Self::with_options(&Options::default())
    }

    /// Controller configured from `options`.
    pub fn with_options(options: &Options) -> Self {
        let transition = &options.transition;
        let mut zoom = Self {
            projection: None,
            viewport: Viewport::default(),
            recognizer: GestureRecognizer::default(),
            unity_scale: 1.0,
            current_scale: 1.0,
            initial_rotation: Rotation::IDENTITY,
            north_up: false,
            move_step: InteractionOptions::default().move_step,
            transition_duration: transition.duration(),
            transition: transition.clone(),
            rotation_animator: RotationAnimator::new(
                transition.interpolation,
                transition.easing,
            ),
            zoom_animator: ZoomAnimator::new(transition.easing),
            gesture: None,
            on_move: None,
        };
        zoom.apply_options(options);
        zoom
    }

    // ── Configuration ───────────────────────────────────────────────────

    /// Bind a projection.
    ///
    /// The first binding records the projection's scale as the unity scale
    /// and its rotation as the reset baseline. Later bindings carry the
    /// current rotation and the relative zoom over to the new projection,
    /// so switching projections mid-interaction is seamless.
    pub fn set_projection(&mut self, projection: SharedProjection) -> &mut Self {
        let (base_scale, rotation) = {
            let p = projection.borrow();
            (p.scale(), p.rotation())
        };

        match self.projection.take() {
            None => {
                self.unity_scale = base_scale;
                self.initial_rotation = rotation;
                // Identity zoom, unless the extent excludes it.
                self.recognizer.set_zoom_factor(1.0);
                self.current_scale = self.recognizer.zoom_factor() * base_scale;
                if self.current_scale != base_scale {
                    projection.borrow_mut().set_scale(self.current_scale);
                }
                log::debug!(
                    "bound projection: unity scale {base_scale}, baseline {rotation:?}"
                );
            }
            Some(previous) if Rc::ptr_eq(&previous, &projection) => {
                log::debug!("projection already bound");
            }
            Some(previous) => {
                let ratio = if self.unity_scale.is_finite() && self.unity_scale > 0.0 {
                    self.current_scale / self.unity_scale
                } else {
                    1.0
                };
                let carried = previous.borrow().rotation();
                let scale = base_scale * ratio;
                {
                    let mut p = projection.borrow_mut();
                    p.set_scale(scale);
                    p.set_rotation(carried);
                }
                self.unity_scale = base_scale;
                self.current_scale = scale;
                log::debug!(
                    "rebound projection: unity scale {base_scale}, zoom ratio {ratio}"
                );
            }
        }

        self.projection = Some(projection);
        if self.north_up {
            self.enforce_north_up();
        }
        self
    }

    /// Record the element's screen bounds. Synthetic gestures reported at
    /// the origin pivot around its center.
    pub fn set_viewport(&mut self, viewport: Viewport) -> &mut Self {
        self.viewport = viewport;
        self
    }

    /// Pin (or release) the roll at zero. Enabling it levels the current
    /// rotation immediately.
    pub fn set_north_up(&mut self, enabled: bool) -> &mut Self {
        self.north_up = enabled;
        if enabled {
            self.enforce_north_up();
        }
        self
    }

    /// Limit the zoom factor. Accepts a [`ScaleExtent`] or a `[min, max]`
    /// array; invalid extents are ignored.
    pub fn set_scale_extent<E>(&mut self, extent: E) -> &mut Self
    where
        E: TryInto<ScaleExtent>,
    {
        match extent.try_into() {
            Ok(extent) => self.apply_scale_extent(extent),
            Err(_) => log::warn!("ignoring invalid scale extent"),
        }
        self
    }

    /// Duration of transitions started after this call. A transition
    /// already in flight keeps the duration it started with.
    pub fn set_transition_duration(&mut self, duration: Duration) -> &mut Self {
        self.transition_duration = duration;
        self
    }

    /// Register the move observer, replacing any previous one.
    pub fn on_move<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(&MoveEvent) + 'static,
    {
        self.on_move = Some(Box::new(callback));
        self
    }

    /// Remove the move observer.
    pub fn clear_on_move(&mut self) -> &mut Self {
        self.on_move = None;
        self
    }

    /// Apply a full set of options.
    pub fn set_options(&mut self, options: &Options) -> &mut Self {
        self.apply_options(options);
        self
    }

    /// Snapshot of the current configuration as [`Options`].
    pub fn options(&self) -> Options {
        let transition = TransitionOptions {
            duration_ms: u64::try_from(self.transition_duration.as_millis())
                .unwrap_or(u64::MAX),
            ..self.transition.clone()
        };
        Options {
            interaction: InteractionOptions {
                north_up: self.north_up,
                scale_extent: self.recognizer.scale_extent().to_array(),
                move_step: self.move_step,
            },
            transition,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// The bound projection, if any.
    pub fn projection(&self) -> Option<&SharedProjection> {
        self.projection.as_ref()
    }

    /// Current rotation of the bound projection.
    pub fn rotation(&self) -> Option<Rotation> {
        self.projection.as_ref().map(|p| p.borrow().rotation())
    }

    /// Scale last written to the projection.
    pub fn scale(&self) -> f64 {
        self.current_scale
    }

    /// Base scale of the bound projection.
    pub fn unity_scale(&self) -> f64 {
        self.unity_scale
    }

    /// Current zoom factor relative to the unity scale.
    pub fn zoom_factor(&self) -> f64 {
        self.recognizer.zoom_factor()
    }

    /// Current scale extent.
    pub fn scale_extent(&self) -> ScaleExtent {
        self.recognizer.scale_extent()
    }

    /// Whether roll is pinned to zero.
    pub fn north_up(&self) -> bool {
        self.north_up
    }

    /// Duration used for new transitions.
    pub fn transition_duration(&self) -> Duration {
        self.transition_duration
    }

    /// Element bounds.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether a gesture is anchored.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Whether a rotation or zoom transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.rotation_animator.is_active() || self.zoom_animator.is_active()
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn apply_options(&mut self, options: &Options) {
        let interaction = &options.interaction;
        self.north_up = interaction.north_up;
        if self.north_up {
            self.enforce_north_up();
        }
        match interaction.scale_extent() {
            Some(extent) => self.apply_scale_extent(extent),
            None => log::warn!(
                "ignoring invalid scale extent {:?}",
                interaction.scale_extent
            ),
        }
        if interaction.move_step.is_finite() && interaction.move_step > 0.0 {
            self.move_step = interaction.move_step;
        } else {
            log::warn!("ignoring invalid move step {}", interaction.move_step);
        }

        let transition = &options.transition;
        self.transition_duration = transition.duration();
        self.rotation_animator
            .configure(transition.interpolation, transition.easing);
        self.zoom_animator.set_easing(transition.easing);
        self.transition = transition.clone();
    }

    fn apply_scale_extent(&mut self, extent: ScaleExtent) {
        let before = self.recognizer.zoom_factor();
        self.recognizer.set_scale_extent(extent);
        if self.recognizer.zoom_factor() != before {
            self.apply_zoom_factor();
            self.notify_move();
        }
    }

    /// Write the recognizer's zoom factor to the projection as a scale.
    fn apply_zoom_factor(&mut self) {
        self.current_scale = self.recognizer.zoom_factor() * self.unity_scale;
        if let Some(projection) = &self.projection {
            projection.borrow_mut().set_scale(self.current_scale);
        }
    }

    /// Zero the roll on the bound projection, notifying if it changed.
    fn enforce_north_up(&mut self) {
        let Some(projection) = &self.projection else {
            return;
        };
        let changed = {
            let mut p = projection.borrow_mut();
            let rotation = p.rotation();
            p.set_rotation(rotation.north_up());
            rotation.gamma != 0.0
        };
        if changed {
            self.notify_move();
        }
    }

    /// Invoke the move observer with the projection's current state.
    ///
    /// No projection borrow is held during the call, so the observer may
    /// read the projection.
    fn notify_move(&mut self) {
        let Some(rotation) = self.rotation() else {
            return;
        };
        let event = MoveEvent {
            scale: self.current_scale,
            rotation,
        };
        if let Some(callback) = self.on_move.as_mut() {
            callback(&event);
        }
    }
}

impl fmt::Debug for GeoZoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoZoom")
            .field("bound", &self.projection.is_some())
            .field("viewport", &self.viewport)
            .field("unity_scale", &self.unity_scale)
            .field("current_scale", &self.current_scale)
            .field("zoom_factor", &self.recognizer.zoom_factor())
            .field("north_up", &self.north_up)
            .field("dragging", &self.gesture.is_some())
            .field("animating", &self.is_animating())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::DVec2;

    use super::*;
    use crate::input::InputEvent;
    use crate::projection::testing::{shared, Orthographic};
    use crate::projection::Projection;

    fn bound(globe: Orthographic) -> (GeoZoom, Rc<RefCell<Orthographic>>) {
        let _ = env_logger::builder().is_test(true).try_init();
        let (concrete, handle) = shared(globe);
        let mut zoom = GeoZoom::new();
        let _ = zoom.set_projection(handle);
        (zoom, concrete)
    }

    fn recorder(zoom: &mut GeoZoom) -> Rc<RefCell<Vec<MoveEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let _ = zoom.on_move(move |ev| sink.borrow_mut().push(*ev));
        events
    }

    #[test]
    fn unbound_controller_is_inert() {
        let mut zoom = GeoZoom::new();
        assert!(zoom.projection().is_none());
        assert!(zoom.rotation().is_none());
        zoom.on_gesture_start(&[DVec2::new(1.0, 1.0)]);
        zoom.on_gesture_move(&[DVec2::new(2.0, 2.0)], 2.0);
        assert!(!zoom.is_dragging());
        assert!(!zoom.is_animating());
    }

    #[test]
    fn first_binding_records_unity_scale_and_baseline() {
        let start = Rotation::new(10.0, -20.0, 5.0);
        let (zoom, globe) = bound(Orthographic::new(250.0).with_rotation(start));
        assert_eq!(zoom.unity_scale(), 250.0);
        assert_eq!(zoom.scale(), 250.0);
        assert_eq!(zoom.zoom_factor(), 1.0);
        assert_eq!(zoom.initial_rotation, start);
        // Binding alone writes nothing.
        assert_eq!(globe.borrow().rotation(), start);
        assert_eq!(globe.borrow().scale(), 250.0);
    }

    #[test]
    fn first_binding_honours_extent_excluding_identity() {
        let (globe, handle) = shared(Orthographic::new(100.0));
        let mut zoom = GeoZoom::new();
        let _ = zoom.set_scale_extent([2.0, 4.0]).set_projection(handle);

        assert_eq!(zoom.zoom_factor(), 2.0);
        assert_eq!(zoom.unity_scale(), 100.0);
        assert_eq!(zoom.scale(), 200.0);
        assert_eq!(globe.borrow().scale(), 200.0);

        // A plain drag keeps the scale it started with.
        zoom.handle_input(InputEvent::PointerDown { id: 1, x: 10.0, y: 5.0 });
        zoom.handle_input(InputEvent::PointerMoved { id: 1, x: 12.0, y: 5.0 });
        zoom.handle_input(InputEvent::PointerUp { id: 1 });
        assert_eq!(globe.borrow().scale(), 200.0);
        assert_eq!(zoom.scale(), 200.0);
    }

    #[test]
    fn rebinding_preserves_relative_zoom_and_rotation() {
        let tilted = Rotation::new(30.0, -10.0, 0.0);
        let (mut zoom, a) = bound(Orthographic::new(100.0).with_rotation(tilted));
        zoom.on_gesture_move(&[DVec2::new(1.0, 1.0)], 2.0);
        assert_eq!(a.borrow().scale(), 200.0);

        let (b, handle) = shared(Orthographic::new(50.0));
        let _ = zoom.set_projection(handle);
        assert_eq!(b.borrow().scale(), 100.0);
        assert_eq!(b.borrow().rotation(), tilted);
        assert_eq!(zoom.unity_scale(), 50.0);
        assert_eq!(zoom.scale(), 100.0);
        assert_eq!(zoom.zoom_factor(), 2.0);
        // The old projection is left as it was.
        assert_eq!(a.borrow().scale(), 200.0);
    }

    #[test]
    fn rebinding_same_handle_does_not_compound() {
        let (globe, handle) = shared(Orthographic::new(100.0));
        let mut zoom = GeoZoom::new();
        let _ = zoom.set_projection(handle.clone());
        zoom.on_gesture_move(&[DVec2::new(1.0, 1.0)], 2.0);
        let _ = zoom.set_projection(handle);
        assert_eq!(globe.borrow().scale(), 200.0);
        assert_eq!(zoom.unity_scale(), 100.0);
    }

    #[test]
    fn enabling_north_up_levels_the_roll() {
        let (mut zoom, globe) =
            bound(Orthographic::new(100.0).with_rotation(Rotation::new(20.0, 10.0, 30.0)));
        let events = recorder(&mut zoom);

        let _ = zoom.set_north_up(true);
        assert_eq!(globe.borrow().rotation(), Rotation::new(20.0, 10.0, 0.0));
        assert_eq!(events.borrow().len(), 1);

        // Already level: nothing to report.
        let _ = zoom.set_north_up(true);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn north_up_applies_when_binding_later() {
        let mut zoom = GeoZoom::new();
        let (globe, handle) =
            shared(Orthographic::new(100.0).with_rotation(Rotation::new(0.0, 0.0, 45.0)));
        let _ = zoom.set_north_up(true).set_projection(handle);
        assert_eq!(globe.borrow().rotation().gamma, 0.0);
    }

    #[test]
    fn invalid_scale_extent_is_ignored() {
        let (mut zoom, _) = bound(Orthographic::new(100.0));
        let before = zoom.scale_extent();
        let _ = zoom.set_scale_extent([4.0, 1.0]);
        assert_eq!(zoom.scale_extent(), before);
        let _ = zoom.set_scale_extent([0.0, 2.0]);
        assert_eq!(zoom.scale_extent(), before);
    }

    #[test]
    fn narrowing_extent_reclamps_current_zoom() {
        let (mut zoom, globe) = bound(Orthographic::new(100.0));
        let events = recorder(&mut zoom);

        let _ = zoom.set_scale_extent([2.0, 4.0]);
        assert_eq!(zoom.zoom_factor(), 2.0);
        assert_eq!(globe.borrow().scale(), 200.0);
        assert_eq!(events.borrow().len(), 1);
        assert_eq!(events.borrow()[0].scale, 200.0);

        let extent = ScaleExtent::new(0.5, 8.0);
        assert!(extent.is_some());
        if let Some(extent) = extent {
            let _ = zoom.set_scale_extent(extent);
        }
        assert_eq!(zoom.scale_extent().to_array(), [0.5, 8.0]);
        assert_eq!(zoom.zoom_factor(), 2.0);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn options_snapshot_reflects_applied_options() {
        let mut opts = Options::default();
        opts.interaction.north_up = true;
        opts.interaction.scale_extent = [0.5, 8.0];
        opts.interaction.move_step = 5.0;
        opts.transition.duration_ms = 300;

        let zoom = GeoZoom::with_options(&opts);
        assert!(zoom.north_up());
        assert_eq!(zoom.transition_duration(), Duration::from_millis(300));
        assert_eq!(zoom.options(), opts);
    }

    #[test]
    fn invalid_option_values_keep_previous_settings() {
        let mut opts = Options::default();
        opts.interaction.scale_extent = [3.0, 1.0];
        opts.interaction.move_step = -1.0;

        let mut zoom = GeoZoom::new();
        let _ = zoom.set_options(&opts);
        let applied = zoom.options();
        assert_eq!(applied.interaction.scale_extent, [0.1, 1000.0]);
        assert_eq!(applied.interaction.move_step, 10.0);
    }

    #[test]
    fn observer_may_read_the_projection() {
        let (mut zoom, globe) = bound(Orthographic::new(100.0));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let reader = Rc::clone(&globe);
        let _ = zoom.on_move(move |ev| {
            sink.borrow_mut().push((ev.scale, reader.borrow().scale()));
        });

        let _ = zoom.zoom_by(2.0);
        assert_eq!(*seen.borrow(), vec![(200.0, 200.0)]);
    }

    #[test]
    fn cleared_observer_is_not_called() {
        let (mut zoom, _) = bound(Orthographic::new(100.0));
        let events = recorder(&mut zoom);
        let _ = zoom.clear_on_move().zoom_by(2.0);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn replacing_observer_keeps_only_the_latest() {
        let (mut zoom, _) = bound(Orthographic::new(100.0));
        let first = recorder(&mut zoom);
        let second = recorder(&mut zoom);
        let _ = zoom.zoom_by(2.0);
        assert!(first.borrow().is_empty());
        assert_eq!(second.borrow().len(), 1);
    }
}
