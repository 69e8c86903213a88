//! Pointy-top hexagon tiling in axial coordinates.
//!
//! Picking converts a pixel to fractional axial `(q, r)` and snaps it with
//! [`axial_round`], which keeps the cube constraint `q + r + s = 0` intact.
use glam::Vec2;

use crate::tiling::{round_half_up, LogicalAddress, TileLayout, TilingKind};

/// Pointy-top hexagons sized by outer radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexagonLayout {
    /// Outer (center-to-vertex) radius.
    pub cell_size: f32,
}

impl HexagonLayout {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Fractional axial coordinates of a pixel position.
    pub fn fractional_axial(&self, p: Vec2) -> Vec2 {
        let sqrt3 = 3.0_f32.sqrt();
        let q = (sqrt3 / 3.0 * p.x - p.y / 3.0) / self.cell_size;
        let r = (2.0 / 3.0 * p.y) / self.cell_size;
        Vec2::new(q, r)
    }
}

impl TileLayout for HexagonLayout {
    fn kind(&self) -> TilingKind {
        TilingKind::Hexagon
    }

    fn to_pixel(&self, q: i32, r: i32) -> Vec2 {
        let sqrt3 = 3.0_f32.sqrt();
        let (q, r) = (q as f32, r as f32);
        Vec2::new(
            self.cell_size * (sqrt3 * q + sqrt3 * 0.5 * r),
            self.cell_size * 1.5 * r,
        )
    }

    fn to_logical(&self, p: Vec2) -> LogicalAddress {
        let frac = self.fractional_axial(p);
        let (q, r) = axial_round(frac.x, frac.y);
        LogicalAddress::new(q, r)
    }
}

/// Snaps fractional axial coordinates to the containing hex.
///
/// Rounds `q`, `r` and `s = -q - r` independently, then recomputes whichever
/// component moved the most from the other two.
pub fn axial_round(q: f32, r: f32) -> (i32, i32) {
    let s = -q - r;
    let mut rq = round_half_up(q);
    let mut rr = round_half_up(r);
    let rs = round_half_up(s);

    let q_diff = (rq as f32 - q).abs();
    let r_diff = (rr as f32 - r).abs();
    let s_diff = (rs as f32 - s).abs();

    // Saturating so that non-finite input cannot overflow.
    if q_diff > r_diff && q_diff > s_diff {
        rq = rr.saturating_neg().saturating_sub(rs);
    } else if r_diff > s_diff {
        rr = rq.saturating_neg().saturating_sub(rs);
    }

    (rq, rr)
}
