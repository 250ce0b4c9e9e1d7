// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Affine mapping from a value domain to an output range.
///
/// `map` interpolates linearly and, like the common charting-library scale,
/// extrapolates past the domain ends; use [`Self::map_clamped`] when the
/// output must stay inside the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Creates a scale mapping `domain` onto `range`.
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Returns the value domain.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the output range.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Maps `value` into the range, extrapolating outside the domain.
    ///
    /// A degenerate (zero-width) domain maps every value to the range start.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Maps `value` into the range and clamps the result to it.
    #[must_use]
    pub fn map_clamped(&self, value: f64) -> f64 {
        let (lo, hi) = if self.range.0 <= self.range.1 {
            (self.range.0, self.range.1)
        } else {
            (self.range.1, self.range.0)
        };
        self.map(value).clamp(lo, hi)
    }

    /// Maps a range value back into the domain.
    ///
    /// A degenerate range maps every value to the domain start.
    #[must_use]
    pub fn invert(&self, value: f64) -> f64 {
        let span = self.range.1 - self.range.0;
        if span == 0.0 {
            return self.domain.0;
        }
        let t = (value - self.range.0) / span;
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn maps_midpoint_and_endpoints() {
        // The tile-opacity scale from a treemap: values 10..30 to 0.5..1.0.
        let s = LinearScale::new((10.0, 30.0), (0.5, 1.0));
        assert!((s.map(10.0) - 0.5).abs() < 1e-12);
        assert!((s.map(20.0) - 0.75).abs() < 1e-12);
        assert!((s.map(30.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn extrapolates_unless_clamped() {
        let s = LinearScale::new((10.0, 30.0), (0.5, 1.0));
        assert!((s.map(50.0) - 1.5).abs() < 1e-12);
        assert!((s.map_clamped(50.0) - 1.0).abs() < 1e-12);
        assert!((s.map_clamped(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn invert_roundtrips() {
        // A legend axis: percentages onto a 280px track.
        let s = LinearScale::new((2.6, 75.1), (0.0, 280.0));
        let x = s.map(40.0);
        assert!((s.invert(x) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn descending_range_clamps_correctly() {
        let s = LinearScale::new((0.0, 1.0), (100.0, 0.0));
        assert!((s.map(0.25) - 75.0).abs() < 1e-12);
        assert!((s.map_clamped(2.0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = LinearScale::new((5.0, 5.0), (0.0, 280.0));
        assert!((s.map(99.0) - 0.0).abs() < 1e-12);
    }
}
