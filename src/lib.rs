// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Rotation math compares against exact constants and uses short names.
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]

//! Quaternion-based rotate and zoom interaction for sphere-projected maps.
//!
//! A [`GeoZoom`] controller binds to a host-owned [`Projection`] and turns
//! pointer drags, pinches and wheel steps into rotation and scale updates.
//! Drags are composed as unit quaternions ([`Versor`]) so the grabbed point
//! stays under the pointer at every orientation without gimbal lock.
//! Programmatic moves are animated and advanced by the host's frame loop.
//!
//! # Key entry points
//!
//! - [`GeoZoom`] - the interaction controller
//! - [`Projection`] - what the controller needs from a map projection
//! - [`input::GestureRecognizer`] - raw pointer events to gesture frames
//! - [`Options`] - runtime configuration with TOML presets
//! - [`rotation`] - angle/versor conversions and interpolation
//!
//! # Threading
//!
//! Everything here is single-threaded. The projection is shared with the
//! host as [`SharedProjection`] (`Rc<RefCell<dyn Projection>>`); the
//! controller never holds a borrow across the move callback.

pub mod animation;
pub mod controller;
pub mod error;
pub mod input;
pub mod options;
pub mod projection;
pub mod rotation;
pub mod util;

pub use controller::{Direction, GeoZoom, MoveEvent};
pub use error::GeoZoomError;
pub use input::{InputEvent, ScaleExtent};
pub use options::Options;
pub use projection::{Projection, SharedProjection, Viewport};
pub use rotation::{GeoPoint, Rotation, Versor};
