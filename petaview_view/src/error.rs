// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

/// Error returned when a viewport or content dimension is not a positive,
/// finite number.
///
/// Scale and pan limits are ratios of these dimensions, so a zero, negative,
/// or non-finite extent would silently propagate NaN/infinity through every
/// later transform. [`crate::MapViewport::new`] and
/// [`crate::MapViewport::resize`] reject such input instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionError {
    /// The viewport size supplied by the caller.
    pub view: Size,
    /// The content size in effect for the operation.
    pub content: Size,
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "viewport ({} x {}) and content ({} x {}) dimensions must be positive and finite",
            self.view.width, self.view.height, self.content.width, self.content.height
        )
    }
}

impl core::error::Error for DimensionError {}
