// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petaview Scale: headless scale primitives for chart encodings and legends.
//!
//! Data visualizations keep mapping values to positions, colors, and
//! opacities. This crate provides the small amount of arithmetic behind those
//! mappings without touching any drawing surface:
//!
//! - [`LinearScale`]: affine domain-to-range interpolation, for legend axes
//!   and continuous encodings such as tile opacity.
//! - [`BucketScale`]: equal-width value buckets over a domain, with the
//!   boundary tick values a legend axis labels.
//! - [`LightnessRamp`]: a discrete color ladder at fixed hue and saturation
//!   with lightness descending across the steps.
//! - [`OrdinalScale`]: first-seen-order categorical mapping onto a palette
//!   of known size.
//!
//! ## Minimal example
//!
//! ```rust
//! use petaview_scale::{BucketScale, LightnessRamp};
//!
//! // Seven equal-width buckets over the observed percentage range.
//! let scale = BucketScale::new(2.6, 75.1, 7);
//! let ramp = LightnessRamp::default();
//!
//! // One color per bucket, darkest for the highest values.
//! let color = ramp.color(scale.bucket_of(40.0));
//! assert_eq!(color.hue, 120.0);
//!
//! // Legend axes label the bucket boundaries.
//! assert_eq!(scale.tick_values().len(), 8);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod bucket;
mod linear;
mod ordinal;
mod ramp;

pub use bucket::BucketScale;
pub use linear::LinearScale;
pub use ordinal::OrdinalScale;
pub use ramp::{Hsl, LightnessRamp};
