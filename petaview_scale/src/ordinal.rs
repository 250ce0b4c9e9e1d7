// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// First-seen-order categorical mapping onto a fixed-size palette.
///
/// Categories are assigned palette indices in the order they are first
/// looked up, wrapping around when there are more categories than palette
/// entries. This mirrors how charting libraries hand out scheme colors to
/// treemap groups or series.
#[derive(Clone, Debug)]
pub struct OrdinalScale<T> {
    seen: Vec<T>,
    palette_len: usize,
}

impl<T: PartialEq + Clone> OrdinalScale<T> {
    /// Creates a scale over a palette of `palette_len` entries.
    ///
    /// A palette length of zero is raised to one.
    #[must_use]
    pub fn new(palette_len: usize) -> Self {
        Self {
            seen: Vec::new(),
            palette_len: palette_len.max(1),
        }
    }

    /// Returns the palette index for `category`, registering it on first use.
    pub fn index_of(&mut self, category: &T) -> usize {
        let position = match self.seen.iter().position(|c| c == category) {
            Some(i) => i,
            None => {
                self.seen.push(category.clone());
                self.seen.len() - 1
            }
        };
        position % self.palette_len
    }

    /// Returns the palette index for `category` without registering it.
    #[must_use]
    pub fn get(&self, category: &T) -> Option<usize> {
        self.seen
            .iter()
            .position(|c| c == category)
            .map(|i| i % self.palette_len)
    }

    /// Returns how many distinct categories have been registered.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::OrdinalScale;

    #[test]
    fn assigns_indices_in_first_seen_order() {
        let mut scale = OrdinalScale::new(20);
        assert_eq!(scale.index_of(&"Action"), 0);
        assert_eq!(scale.index_of(&"Drama"), 1);
        assert_eq!(scale.index_of(&"Comedy"), 2);
        // Lookups are stable.
        assert_eq!(scale.index_of(&"Drama"), 1);
        assert_eq!(scale.category_count(), 3);
    }

    #[test]
    fn wraps_around_a_small_palette() {
        let mut scale = OrdinalScale::new(3);
        for (i, name) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            assert_eq!(scale.index_of(name), i % 3);
        }
    }

    #[test]
    fn get_does_not_register() {
        let mut scale = OrdinalScale::new(20);
        assert_eq!(scale.get(&"Action"), None);
        scale.index_of(&"Action");
        assert_eq!(scale.get(&"Action"), Some(0));
        assert_eq!(scale.category_count(), 1);
    }
}
