//! Truncated-square tiling: octagons on a square lattice with diamond gap cells.
//!
//! Each diamond sits at the shared corner of four octagons and is owned by the one
//! up-left of it, so the diamond of octagon `(q, r)` is centered at the octagon's
//! bottom-right corner.
use glam::Vec2;

use crate::shapes::OctagonMetrics;
use crate::tiling::{round_half_up, LogicalAddress, SubKind, TileLayout, TilingKind};

/// Octagons sized by outer diameter, with diamond sub-cells in the gaps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctagonLayout {
    pub metrics: OctagonMetrics,
}

impl OctagonLayout {
    pub fn new(cell_size: f32) -> Self {
        Self {
            metrics: OctagonMetrics::new(cell_size),
        }
    }
}

impl TileLayout for OctagonLayout {
    fn kind(&self) -> TilingKind {
        TilingKind::Octagon
    }

    fn to_pixel(&self, q: i32, r: i32) -> Vec2 {
        Vec2::new(q as f32, r as f32) * self.metrics.width
    }

    fn to_logical(&self, p: Vec2) -> LogicalAddress {
        let width = self.metrics.width;
        let q = round_half_up(p.x / width);
        let r = round_half_up(p.y / width);

        let center = self.to_pixel(q, r);
        let d = (p - center).abs();
        if d.x + d.y <= self.metrics.limit {
            return LogicalAddress::new(q, r);
        }

        // Outside the corner cut: the point is in one of the four diamonds
        // touching this octagon.
        let dq = if p.x > center.x { q } else { q.saturating_sub(1) };
        let dr = if p.y > center.y { r } else { r.saturating_sub(1) };
        LogicalAddress::diamond(dq, dr)
    }

    fn address_to_pixel(&self, address: &LogicalAddress) -> Vec2 {
        let center = self.to_pixel(address.q, address.r);
        match address.sub_kind {
            Some(SubKind::Diamond) => center + self.metrics.diamond_offset(),
            None => center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> OctagonLayout {
        OctagonLayout::new(40.0)
    }

    #[test]
    fn center_resolves_to_octagon() {
        assert_eq!(layout().to_logical(Vec2::ZERO), LogicalAddress::new(0, 0));
    }

    #[test]
    fn flat_side_stays_inside_octagon() {
        let l = layout();
        let half = l.metrics.width * 0.5 - 0.5;
        assert_eq!(l.to_logical(Vec2::new(half, 0.0)), LogicalAddress::new(0, 0));
        assert_eq!(l.to_logical(Vec2::new(0.0, -half)), LogicalAddress::new(0, 0));
    }

    #[test]
    fn corners_resolve_to_up_left_owned_diamonds() {
        let l = layout();
        // 17 + 17 exceeds the cut at ~26.13 while staying within the rounding box.
        assert_eq!(
            l.to_logical(Vec2::new(17.0, 17.0)),
            LogicalAddress::diamond(0, 0)
        );
        assert_eq!(
            l.to_logical(Vec2::new(-17.0, 17.0)),
            LogicalAddress::diamond(-1, 0)
        );
        assert_eq!(
            l.to_logical(Vec2::new(17.0, -17.0)),
            LogicalAddress::diamond(0, -1)
        );
        assert_eq!(
            l.to_logical(Vec2::new(-17.0, -17.0)),
            LogicalAddress::diamond(-1, -1)
        );
    }

    #[test]
    fn limit_matches_octagon_geometry() {
        let m = layout().metrics;
        assert!((m.width - 36.955_18).abs() < 1e-3);
        assert!((m.edge - 15.307_34).abs() < 1e-3);
        assert!((m.limit - 26.131_26).abs() < 1e-3);
    }

    #[test]
    fn diamond_center_round_trips() {
        let l = layout();
        for q in -3..=3 {
            for r in -3..=3 {
                let diamond = LogicalAddress::diamond(q, r);
                assert_eq!(l.to_logical(l.address_to_pixel(&diamond)), diamond);
            }
        }
    }

    #[test]
    fn neighbor_octagon_is_picked_past_the_midline() {
        let l = layout();
        assert_eq!(l.to_logical(Vec2::new(40.0, 0.0)), LogicalAddress::new(1, 0));
        assert_eq!(l.to_logical(Vec2::new(0.0, -40.0)), LogicalAddress::new(0, -1));
    }
}
