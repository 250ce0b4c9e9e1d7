// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petaview View: headless cover-fit pan/zoom state for a fixed content surface.
//!
//! This crate models the view transform of a map or chart of known pixel size
//! shown inside a resizable viewport. It focuses on:
//! - Cover fitting: the minimum scale always makes the content span the
//!   viewport exactly along its constraining ("minor") dimension.
//! - Center-anchored pan and zoom in discrete, rate-scaled steps.
//! - Edge clamping: the pan range shrinks and grows with the zoom level so
//!   the area past the content edge is never exposed.
//! - Emitting a [`ViewTransform`] descriptor for an externally owned
//!   rendering surface to apply.
//!
//! It does **not** draw anything and never touches pixels or markup. Callers
//! are expected to:
//! - Own the rendering surface and apply emitted transforms to it, for
//!   example through the [`TransformSink`] trait.
//! - Deliver viewport resize notifications via [`MapViewport::resize`].
//! - Wire input events into [`MapViewport::pan`] / [`MapViewport::zoom`] at a
//!   higher layer (for example with `petaview_keys`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use petaview_view::{Axis, Direction, MapViewport, Speed};
//!
//! // A 960x600 map shown through an 800x400 viewport.
//! let mut view = MapViewport::new(Size::new(800.0, 400.0), Size::new(960.0, 600.0)).unwrap();
//!
//! // The content starts covering the viewport at the minimum scale, centered.
//! assert_eq!(view.scale(), view.scale_min());
//!
//! // Zoom in one step, then pan right; each change emits a new transform.
//! view.zoom(Direction::Positive, Speed::Normal);
//! if let Some(t) = view.pan(Axis::Horizontal, Direction::Positive, Speed::Normal) {
//!     // Hand the descriptor to the rendering surface.
//!     let _affine = t.affine();
//! }
//! ```
//!
//! ## Design notes
//!
//! - Scale is uniform; the content aspect ratio is never distorted.
//! - `translate` is expressed in content units (pre-scale), matching a
//!   surface transform of the form `scale(s) translate(x, y)`.
//! - The centering offset is constant in viewport pixels and is compensated
//!   for being applied after the scale; see
//!   [`ViewTransform::effective_translate`].
//! - Continuous (pointer-driven) pan/zoom and anchor points other than the
//!   view center are out of scope for this crate.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("petaview_view requires either the `std` or the `libm` feature");

mod error;
mod params;
mod viewport;

pub use error::DimensionError;
pub use params::{Axis, Direction, Rates, Speed};
pub use viewport::{MapViewport, TransformSink, ViewTransform};
