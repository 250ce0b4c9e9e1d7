// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// A horizontal strip of equal-sized color cells with an axis band below.
///
/// This is the classic quantized-legend layout: one cell per value bucket,
/// the cells flush against each other, and a labeled axis running along the
/// cell bottoms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwatchStrip {
    /// Size of one color cell.
    pub cell: Size,
    /// Horizontal inset of the first cell from the surface edge.
    pub inset: f64,
    /// Extra width reserved after the last cell (keeps the final axis label
    /// inside the surface).
    pub trailing: f64,
    /// Height reserved below the cells for the axis ticks and labels.
    pub label_band: f64,
}

impl Default for SwatchStrip {
    fn default() -> Self {
        Self {
            cell: Size::new(40.0, 12.0),
            inset: 10.0,
            trailing: 20.0,
            label_band: 25.0,
        }
    }
}

impl SwatchStrip {
    /// Returns the rectangle of cell `i`.
    #[must_use]
    pub fn cell_rect(&self, i: usize) -> Rect {
        let x0 = self.inset + self.cell.width * i as f64;
        Rect::new(x0, 0.0, x0 + self.cell.width, self.cell.height)
    }

    /// Returns the width of the axis track spanning `cells` cells.
    #[must_use]
    pub fn track_width(&self, cells: usize) -> f64 {
        self.cell.width * cells as f64
    }

    /// Returns where the axis group is anchored: at the first cell's left
    /// edge, level with the cell bottoms.
    #[must_use]
    pub fn axis_origin(&self) -> Point {
        Point::new(self.inset, self.cell.height)
    }

    /// Returns the surface size needed to hold `cells` cells and the axis.
    #[must_use]
    pub fn surface_size(&self, cells: usize) -> Size {
        Size::new(
            self.inset + self.track_width(cells) + self.trailing,
            self.cell.height + self.label_band,
        )
    }
}

/// Swatch-plus-label legend items flowing into a fixed number of columns.
///
/// Items are placed left-to-right, top-to-bottom: item `i` lands in column
/// `i % columns` and row `i / columns`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendGrid {
    /// Number of columns before wrapping to the next row.
    pub columns: usize,
    /// Horizontal and vertical distance between item origins.
    pub stride: Vec2,
    /// Origin of the first item.
    pub origin: Point,
    /// Edge length of the square color swatch.
    pub swatch: f64,
    /// Label position relative to the item origin.
    pub label_offset: Vec2,
}

impl Default for LegendGrid {
    fn default() -> Self {
        Self {
            columns: 3,
            stride: Vec2::new(140.0, 40.0),
            origin: Point::new(60.0, 30.0),
            swatch: 15.0,
            label_offset: Vec2::new(20.0, 13.0),
        }
    }
}

impl LegendGrid {
    /// Returns the origin of item `i`.
    #[must_use]
    pub fn item_origin(&self, i: usize) -> Point {
        let columns = self.columns.max(1);
        let col = i % columns;
        let row = i / columns;
        self.origin + Vec2::new(self.stride.x * col as f64, self.stride.y * row as f64)
    }

    /// Returns the color-swatch rectangle of item `i`.
    #[must_use]
    pub fn swatch_rect(&self, i: usize) -> Rect {
        let origin = self.item_origin(i);
        Rect::new(
            origin.x,
            origin.y,
            origin.x + self.swatch,
            origin.y + self.swatch,
        )
    }

    /// Returns the label anchor of item `i`.
    #[must_use]
    pub fn label_origin(&self, i: usize) -> Point {
        self.item_origin(i) + self.label_offset
    }

    /// Returns how many rows `items` items occupy.
    #[must_use]
    pub fn rows(&self, items: usize) -> usize {
        items.div_ceil(self.columns.max(1))
    }
}
