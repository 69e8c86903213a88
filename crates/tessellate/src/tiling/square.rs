//! Orthogonal square tiling.
use glam::Vec2;

use crate::tiling::{round_half_up, LogicalAddress, TileLayout, TilingKind};

/// Square cells on an orthogonal lattice with an optional gap between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareLayout {
    /// Edge length.
    pub cell_size: f32,
    /// Spacing between neighboring squares.
    pub gap: f32,
}

impl SquareLayout {
    pub fn new(cell_size: f32, gap: f32) -> Self {
        Self { cell_size, gap }
    }

    /// Center-to-center distance between neighbors.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.cell_size + self.gap
    }
}

impl TileLayout for SquareLayout {
    fn kind(&self) -> TilingKind {
        TilingKind::Square
    }

    fn to_pixel(&self, q: i32, r: i32) -> Vec2 {
        Vec2::new(q as f32, r as f32) * self.pitch()
    }

    fn to_logical(&self, p: Vec2) -> LogicalAddress {
        let pitch = self.pitch();
        LogicalAddress::new(round_half_up(p.x / pitch), round_half_up(p.y / pitch))
    }
}
