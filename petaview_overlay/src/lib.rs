// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petaview Overlay: geometry for the chrome drawn around a chart.
//!
//! Legends and hover callouts sit on top of a visualization but never move
//! with its view transform. This crate computes where that chrome goes and
//! leaves the drawing to the host:
//!
//! - [`SwatchStrip`]: a horizontal run of color cells with an axis band
//!   below it, as used by choropleth legends.
//! - [`LegendGrid`]: swatch-plus-label items flowing left-to-right into a
//!   fixed number of columns, as used by treemap legends.
//! - [`CalloutPlacement`]: cursor-anchored placement for a hover callout,
//!   flipping to the other side of the cursor when the callout would leave
//!   the view.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use petaview_overlay::{CalloutPlacement, LegendGrid};
//!
//! // Third legend item of a three-column grid: first column, second row.
//! let grid = LegendGrid::default();
//! let origin = grid.item_origin(3);
//! assert_eq!(origin, Point::new(60.0, 70.0));
//!
//! // A 120px-wide callout near the right edge flips behind the cursor.
//! let placement = CalloutPlacement::default();
//! let at = placement.place(Point::new(900.0, 300.0), 120.0, 960.0);
//! assert!(at.x < 900.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod callout;
mod legend;

pub use callout::{CalloutPlacement, place_offset};
pub use legend::{LegendGrid, SwatchStrip};
