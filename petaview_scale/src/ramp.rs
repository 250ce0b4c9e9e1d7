// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A color in HSL space.
///
/// The `Display` impl renders the CSS `hsl(...)` functional form, which is
/// what web-facing hosts feed straight into a style attribute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation in percent.
    pub saturation: f64,
    /// Lightness in percent.
    pub lightness: f64,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({},{}%,{}%)", self.hue, self.saturation, self.lightness)
    }
}

/// A discrete color ladder at fixed hue and saturation.
///
/// Lightness descends in equal steps from `light_max` at index `0` to
/// `light_min` at the last index, so higher bucket indices read as darker,
/// more saturated cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightnessRamp {
    /// Hue in degrees shared by every step.
    pub hue: f64,
    /// Saturation in percent shared by every step.
    pub saturation: f64,
    /// Lightness of the first (lightest) step, in percent.
    pub light_max: f64,
    /// Lightness of the last (darkest) step, in percent.
    pub light_min: f64,
    /// Number of steps in the ladder.
    pub steps: usize,
}

impl Default for LightnessRamp {
    /// The conventional green choropleth ladder: seven steps of hue 120 at
    /// 50% saturation, lightness from 90% down to 20%.
    fn default() -> Self {
        Self {
            hue: 120.0,
            saturation: 50.0,
            light_max: 90.0,
            light_min: 20.0,
            steps: 7,
        }
    }
}

impl LightnessRamp {
    /// Returns the color at `index`; indices past the end clamp to the
    /// darkest step.
    #[must_use]
    pub fn color(&self, index: usize) -> Hsl {
        let last = self.steps.saturating_sub(1);
        let step = if last == 0 {
            0.0
        } else {
            (self.light_max - self.light_min) / last as f64
        };
        Hsl {
            hue: self.hue,
            saturation: self.saturation,
            lightness: self.light_max - step * index.min(last) as f64,
        }
    }

    /// Iterates over every step from lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = Hsl> + '_ {
        (0..self.steps).map(|i| self.color(i))
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::LightnessRamp;

    #[test]
    fn default_ladder_spans_ninety_to_twenty() {
        let ramp = LightnessRamp::default();
        let colors: Vec<_> = ramp.iter().collect();
        assert_eq!(colors.len(), 7);
        assert!((colors[0].lightness - 90.0).abs() < 1e-12);
        assert!((colors[6].lightness - 20.0).abs() < 1e-9);
        for pair in colors.windows(2) {
            assert!(
                pair[0].lightness > pair[1].lightness,
                "lightness must descend along the ladder"
            );
        }
    }

    #[test]
    fn out_of_range_index_clamps_to_darkest() {
        let ramp = LightnessRamp::default();
        assert_eq!(ramp.color(100), ramp.color(6));
    }

    #[test]
    fn single_step_ramp_is_flat() {
        let ramp = LightnessRamp {
            steps: 1,
            ..LightnessRamp::default()
        };
        assert!((ramp.color(0).lightness - 90.0).abs() < 1e-12);
    }

    #[test]
    fn displays_css_functional_form() {
        let ramp = LightnessRamp::default();
        assert_eq!(format!("{}", ramp.color(0)), "hsl(120,50%,90%)");
    }
}
