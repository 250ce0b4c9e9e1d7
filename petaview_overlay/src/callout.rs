// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Cursor-anchored placement for a hover callout.
///
/// The callout normally sits ahead (to the right) of the cursor. When its
/// far edge would leave the view, it flips behind (to the left of) the
/// cursor instead. The vertical position always follows the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalloutPlacement {
    /// Gap between the cursor and the callout's near edge when placed ahead.
    pub lead_gap: f64,
    /// Gap between the cursor and the callout's near edge when placed behind.
    pub trail_gap: f64,
    /// Slack added to the overflow test so the flip happens slightly before
    /// the callout actually touches the view edge.
    pub overflow_pad: f64,
}

impl Default for CalloutPlacement {
    fn default() -> Self {
        Self {
            lead_gap: 25.0,
            trail_gap: 15.0,
            overflow_pad: 45.0,
        }
    }
}

impl CalloutPlacement {
    /// Places a callout of `width` for a cursor at `cursor` inside a view of
    /// `view_width`, returning the callout's top-left anchor.
    #[must_use]
    pub fn place(&self, cursor: Point, width: f64, view_width: f64) -> Point {
        let overflows = cursor.x + width + self.overflow_pad > view_width;
        let x = if overflows {
            cursor.x - self.trail_gap - width
        } else {
            cursor.x + self.lead_gap
        };
        Point::new(x, cursor.y)
    }
}

/// Places a callout at a fixed offset from the cursor, with no edge
/// handling. Suits layouts whose content keeps clear of the view edges.
#[must_use]
pub fn place_offset(cursor: Point, offset: Vec2) -> Point {
    cursor + offset
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{CalloutPlacement, place_offset};

    #[test]
    fn places_ahead_of_the_cursor_with_room() {
        let placement = CalloutPlacement::default();
        let at = placement.place(Point::new(100.0, 300.0), 120.0, 960.0);
        assert_eq!(at, Point::new(125.0, 300.0));
    }

    #[test]
    fn flips_behind_near_the_view_edge() {
        let placement = CalloutPlacement::default();
        let at = placement.place(Point::new(900.0, 300.0), 120.0, 960.0);
        assert_eq!(at, Point::new(900.0 - 15.0 - 120.0, 300.0));
    }

    #[test]
    fn flip_threshold_includes_the_pad() {
        let placement = CalloutPlacement::default();
        // 795 + 120 + 45 = 960: not yet past the edge test.
        let ahead = placement.place(Point::new(795.0, 0.0), 120.0, 960.0);
        assert_eq!(ahead.x, 820.0);
        // One pixel further and the callout flips.
        let behind = placement.place(Point::new(796.0, 0.0), 120.0, 960.0);
        assert!(behind.x < 796.0);
    }

    #[test]
    fn fixed_offset_follows_the_cursor() {
        let at = place_offset(Point::new(40.0, 60.0), Vec2::new(20.0, -30.0));
        assert_eq!(at, Point::new(60.0, 30.0));
    }
}
