// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size, Vec2};

use crate::error::DimensionError;
use crate::params::{Axis, Direction, Rates, Speed};

#[cfg(feature = "std")]
#[inline]
fn powf(x: f64, e: f64) -> f64 {
    x.powf(e)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn powf(x: f64, e: f64) -> f64 {
    libm::pow(x, e)
}

/// Transform descriptor emitted after a view change.
///
/// The descriptor is meant for a surface transform of the form
/// `scale(s) translate(x, y)`: the scale is applied first, so the constant
/// pixel-space centering offset has to be divided by the scale before it is
/// folded into the translate. [`Self::effective_translate`] performs that
/// composition and [`Self::affine`] packages the whole transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Pan offset in content units (pre-scale).
    pub translate: Vec2,
    /// Centering offset in viewport pixels.
    pub offset: Vec2,
}

impl ViewTransform {
    /// Returns the translate to apply after the scale, with the centering
    /// offset compensated for being drawn in scaled space.
    #[must_use]
    pub fn effective_translate(&self) -> Vec2 {
        self.translate + self.offset / self.scale
    }

    /// Returns the full transform as an affine map from content space to
    /// viewport space.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::scale(self.scale) * Affine::translate(self.effective_translate())
    }
}

/// Rendering-surface capability: anything that can apply an emitted transform.
///
/// Implemented for closures, so a host can pass `|t| svg.set_transform(t)`
/// without a dedicated adapter type.
pub trait TransformSink {
    /// Applies a freshly emitted transform to the surface.
    fn apply_transform(&mut self, transform: ViewTransform);
}

impl<F: FnMut(ViewTransform)> TransformSink for F {
    fn apply_transform(&mut self, transform: ViewTransform) {
        self(transform);
    }
}

/// Cover-fit pan/zoom state for fixed-size content inside a viewport.
///
/// `MapViewport` owns the scale and translate of the view and the dimensions
/// they are derived from. All mutating operations keep two invariants:
/// - `scale` stays in `[scale_min, scale_max]`, where `scale_min` is the
///   smallest scale at which the content spans the viewport along its
///   constraining dimension.
/// - `translate` stays inside the symmetric pan limits computed for the
///   current scale, so the view never shows past the content edge on an axis
///   where the content overflows, and never pans at all on an axis where it
///   does not.
#[derive(Clone, Debug)]
pub struct MapViewport {
    view: Size,
    content: Size,
    offset: Vec2,
    minor: Axis,
    scale: f64,
    scale_min: f64,
    scale_max: f64,
    translate: Vec2,
    limit: Vec2,
    rates: Rates,
}

/// Default upper bound on the scale factor.
const MAX_SCALE: f64 = 40.0;

fn check_dims(view: Size, content: Size) -> Result<(), DimensionError> {
    fn positive(size: Size) -> bool {
        size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
    }
    if positive(view) && positive(content) {
        Ok(())
    } else {
        Err(DimensionError { view, content })
    }
}

impl MapViewport {
    /// Creates a viewport over `content` and fits the content to cover it.
    ///
    /// The initial scale is the computed minimum and the content is centered
    /// (`translate` is zero).
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] if either size has a non-positive or
    /// non-finite extent.
    pub fn new(view: Size, content: Size) -> Result<Self, DimensionError> {
        check_dims(view, content)?;
        let mut vp = Self {
            view,
            content,
            offset: Vec2::ZERO,
            minor: Axis::Horizontal,
            scale: 0.0,
            scale_min: 0.0,
            scale_max: MAX_SCALE,
            translate: Vec2::ZERO,
            limit: Vec2::ZERO,
            rates: Rates::default(),
        };
        vp.refit();
        vp.reset();
        Ok(vp)
    }

    /// Returns the current viewport size.
    #[must_use]
    pub fn view(&self) -> Size {
        self.view
    }

    /// Returns the content size.
    #[must_use]
    pub fn content(&self) -> Size {
        self.content
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the minimum scale at which the content covers the viewport
    /// along its constraining dimension.
    #[must_use]
    pub fn scale_min(&self) -> f64 {
        self.scale_min
    }

    /// Returns the maximum scale factor.
    #[must_use]
    pub fn scale_max(&self) -> f64 {
        self.scale_max
    }

    /// Returns the current pan offset in content units.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    /// Returns the symmetric pan limit for the given axis at the current
    /// scale; the translate component is kept in `[-limit, limit]`.
    #[must_use]
    pub fn pan_limit(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.limit.x,
            Axis::Vertical => self.limit.y,
        }
    }

    /// Returns the constraining ("minor") axis: the one the content spans
    /// exactly at the minimum scale.
    #[must_use]
    pub fn minor_axis(&self) -> Axis {
        self.minor
    }

    /// Returns the current step rates.
    #[must_use]
    pub fn rates(&self) -> Rates {
        self.rates
    }

    /// Replaces the step rates used by [`Self::pan`] and [`Self::zoom`].
    pub fn set_rates(&mut self, rates: Rates) {
        self.rates = rates;
    }

    /// Sets the maximum scale factor, clamping the current scale if needed.
    ///
    /// Values below the minimum scale are raised to it.
    pub fn set_scale_max(&mut self, max: f64) {
        self.scale_max = max.max(self.scale_min);
        if self.scale > self.scale_max {
            self.scale = self.scale_max;
            self.update_limits();
        }
    }

    /// Handles a viewport resize.
    ///
    /// Recomputes the centering offsets, the constraining axis, and the
    /// minimum scale; raises the current scale to the new minimum if it fell
    /// below it; re-clamps the translate against the new pan limits. Always
    /// emits, since the centering offsets change with the viewport even when
    /// scale and translate do not.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] if the new size has a non-positive or
    /// non-finite extent; the viewport state is left untouched.
    pub fn resize(&mut self, view: Size) -> Result<ViewTransform, DimensionError> {
        check_dims(view, self.content)?;
        self.view = view;
        self.refit();
        Ok(self.transform())
    }

    /// Pans one step along `axis`.
    ///
    /// The step is a fixed fraction of the viewport's minor dimension,
    /// divided by the current scale so a step covers the same on-screen
    /// distance at every zoom level. The result is clamped to the pan limits;
    /// if clamping leaves the translate unchanged this is a no-op and nothing
    /// is emitted. [`Speed::Fast`] steps commit but defer emission.
    pub fn pan(&mut self, axis: Axis, direction: Direction, speed: Speed) -> Option<ViewTransform> {
        let minor_len = match self.minor {
            Axis::Horizontal => self.view.width,
            Axis::Vertical => self.view.height,
        };
        let mult = match speed {
            Speed::Normal => 1.0,
            Speed::Fast => self.rates.fast,
        };
        let step = direction.signum() * self.rates.pan * minor_len * mult / self.scale;
        let (current, bound) = match axis {
            Axis::Horizontal => (self.translate.x, self.limit.x),
            Axis::Vertical => (self.translate.y, self.limit.y),
        };
        let next = (current + step).clamp(-bound, bound);
        if (next - current).abs() < f64::EPSILON {
            return None;
        }
        match axis {
            Axis::Horizontal => self.translate.x = next,
            Axis::Vertical => self.translate.y = next,
        }
        matches!(speed, Speed::Normal).then(|| self.transform())
    }

    /// Zooms one step in (`Positive`) or out (`Negative`).
    ///
    /// The scale is multiplied or divided by the zoom rate and clamped to
    /// `[scale_min, scale_max]`. On a change the pan limits are recomputed
    /// and the translate re-clamped into them. A step fully absorbed by
    /// clamping is a no-op and emits nothing. [`Speed::Fast`] steps use the
    /// zoom rate raised to the fast exponent and defer emission.
    pub fn zoom(&mut self, direction: Direction, speed: Speed) -> Option<ViewTransform> {
        let factor = match speed {
            Speed::Normal => self.rates.zoom,
            Speed::Fast => powf(self.rates.zoom, self.rates.fast),
        };
        let proposed = match direction {
            Direction::Positive => self.scale * factor,
            Direction::Negative => self.scale / factor,
        };
        let next = proposed.clamp(self.scale_min, self.scale_max);
        if (next - self.scale).abs() < f64::EPSILON {
            return None;
        }
        self.scale = next;
        self.update_limits();
        matches!(speed, Speed::Normal).then(|| self.transform())
    }

    /// Resets the view to the minimum scale.
    ///
    /// The pan limits collapse to zero on every axis the content no longer
    /// overflows, which pulls the translate back to center. Always emits.
    pub fn reset(&mut self) -> ViewTransform {
        self.scale = self.scale_min;
        self.update_limits();
        self.transform()
    }

    /// Returns the current transform descriptor without mutating anything.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            scale: self.scale,
            translate: self.translate,
            offset: self.offset,
        }
    }

    /// Recomputes the dimension-derived state: centering offsets, the
    /// constraining axis, and the minimum scale. Raises the scale to the new
    /// minimum if it fell below it, then refreshes the pan limits.
    fn refit(&mut self) {
        self.offset = Vec2::new(
            (self.view.width - self.content.width) / 2.0,
            (self.view.height - self.content.height) / 2.0,
        );

        let ratio_w = self.view.width / self.content.width;
        let ratio_h = self.view.height / self.content.height;
        if ratio_w > ratio_h {
            self.minor = Axis::Vertical;
            self.scale_min = ratio_h;
        } else {
            self.minor = Axis::Horizontal;
            self.scale_min = ratio_w;
        }

        if self.scale < self.scale_min {
            self.scale = self.scale_min;
        }
        self.update_limits();
    }

    /// Recomputes the symmetric pan limits for the current scale and clamps
    /// the translate into them.
    ///
    /// With the content centered, the overflow past the viewport on one side
    /// is `(content * scale - view) / 2` in screen pixels, or that divided by
    /// `scale` in content units; axes without overflow get a zero limit.
    fn update_limits(&mut self) {
        let s = self.scale;
        let d = 2.0 * s;
        let w = ((self.content.width * s - self.view.width) / d).max(0.0);
        let h = ((self.content.height * s - self.view.height) / d).max(0.0);
        self.limit = Vec2::new(w, h);
        self.translate = Vec2::new(
            self.translate.x.clamp(-w, w),
            self.translate.y.clamp(-h, h),
        );
    }
}
