// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Axis of a pan operation or of the viewport's constraining dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The X / width axis.
    Horizontal,
    /// The Y / height axis.
    Vertical,
}

/// Direction of a discrete pan or zoom step.
///
/// For panning, `Positive` increases the translate component on the chosen
/// axis, which moves the content toward positive X/Y (the view appears to
/// move left/up). For zooming, `Positive` zooms in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Step toward larger values (pan: positive translate; zoom: in).
    Positive,
    /// Step toward smaller values (pan: negative translate; zoom: out).
    Negative,
}

impl Direction {
    /// Returns `1.0` for `Positive` and `-1.0` for `Negative`.
    #[must_use]
    pub fn signum(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// Speed class of a control step.
///
/// `Fast` steps are smaller per invocation (they are meant to fire many times
/// per second while a key repeats) and defer transform emission to the caller
/// so a whole repeat tick produces a single emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Speed {
    /// One-shot step; emits a transform when the state changes.
    #[default]
    Normal,
    /// Repeated step at a reduced rate; commits the change but never emits.
    Fast,
}

/// Step rates for pan and zoom controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rates {
    /// Multiplier applied to the scale per zoom step.
    pub zoom: f64,
    /// Pan step as a fraction of the viewport's minor dimension.
    pub pan: f64,
    /// Adjustment for [`Speed::Fast`] steps: the pan rate is multiplied by
    /// this value and the zoom multiplier is raised to this exponent.
    pub fast: f64,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            zoom: 1.25,
            pan: 0.2,
            fast: 0.5,
        }
    }
}
