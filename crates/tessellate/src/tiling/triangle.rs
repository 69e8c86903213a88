//! Alternating up/down equilateral triangle tiling.
//!
//! Columns are half a side apart and rows one triangle height apart. A cell whose
//! `|q| + |r|` is odd points down and is lifted by half a circumradius so it
//! interlocks with its upward neighbors.
use glam::Vec2;

use crate::shapes::TriangleMetrics;
use crate::tiling::{round_half_up, LogicalAddress, TileLayout, TilingKind};

/// Which way a triangle cell points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleOrientation {
    Up,
    Down,
}

impl TriangleOrientation {
    /// Orientation of the cell at `(q, r)`.
    #[inline]
    pub fn of(q: i32, r: i32) -> Self {
        // |q| + |r| and q ^ r share the low bit.
        if (q ^ r) & 1 != 0 {
            TriangleOrientation::Down
        } else {
            TriangleOrientation::Up
        }
    }
}

/// Equilateral triangles with side `cell_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleLayout {
    pub metrics: TriangleMetrics,
}

impl TriangleLayout {
    pub fn new(cell_size: f32) -> Self {
        Self {
            metrics: TriangleMetrics::new(cell_size),
        }
    }
}

impl TileLayout for TriangleLayout {
    fn kind(&self) -> TilingKind {
        TilingKind::Triangle
    }

    fn to_pixel(&self, q: i32, r: i32) -> Vec2 {
        let m = &self.metrics;
        let mut y = r as f32 * m.height;
        if TriangleOrientation::of(q, r) == TriangleOrientation::Down {
            y -= 0.5 * m.radius;
        }
        Vec2::new(q as f32 * (m.side * 0.5), y)
    }

    /// Rounds both axes independently.
    ///
    /// This is exact at cell centers but only approximate near slanted edges,
    /// where a point may resolve to a neighbor.
    fn to_logical(&self, p: Vec2) -> LogicalAddress {
        let m = &self.metrics;
        let r = round_half_up(p.y / m.height);
        let q = round_half_up(p.x / (m.side * 0.5));
        LogicalAddress::new(q, r)
    }
}
