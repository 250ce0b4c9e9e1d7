// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Equal-width value buckets over a `[min, max]` domain.
///
/// A choropleth splits its observed value range into a handful of cells, one
/// per legend color. `BucketScale` owns that split: [`Self::bucket_of`]
/// assigns a value to a cell and [`Self::tick_values`] yields the
/// `buckets + 1` boundary values a legend axis labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BucketScale {
    min: f64,
    max: f64,
    buckets: usize,
}

impl BucketScale {
    /// Creates a scale with `buckets` equal-width cells over `[min, max]`.
    ///
    /// A bucket count of zero is raised to one.
    #[must_use]
    pub fn new(min: f64, max: f64, buckets: usize) -> Self {
        Self {
            min,
            max,
            buckets: buckets.max(1),
        }
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets
    }

    /// Returns the `i`-th boundary value; boundary `0` is the domain minimum
    /// and boundary `bucket_count()` the maximum.
    #[must_use]
    pub fn tick(&self, i: usize) -> f64 {
        let width = (self.max - self.min) / self.buckets as f64;
        self.min + width * i as f64
    }

    /// Returns all `bucket_count() + 1` boundary values in ascending order.
    #[must_use]
    pub fn tick_values(&self) -> Vec<f64> {
        (0..=self.buckets).map(|i| self.tick(i)).collect()
    }

    /// Returns the index of the cell `value` falls into.
    ///
    /// A value below the first interior boundary lands in cell `0`; values at
    /// or above the last interior boundary (including anything past the
    /// domain maximum) land in the final cell.
    #[must_use]
    pub fn bucket_of(&self, value: f64) -> usize {
        for i in 1..self.buckets {
            if value < self.tick(i) {
                return i - 1;
            }
        }
        self.buckets - 1
    }
}
