//! Tiling geometries and the coordinate transforms between logical cells and pixels.
//!
//! This module defines the tiling vocabulary shared by the whole crate:
//! - [`TilingKind`] and [`SubKind`] name the supported geometries.
//! - [`LogicalAddress`] and [`CellKey`] identify one cell.
//! - [`GridConfig`] describes one concrete tiling.
//! - [`TileLayout`] is implemented once per geometry and dispatched by [`TessellationGrid`].
//!
//! All coordinates are in the grid's own local space: callers undo any pan or zoom
//! before picking.
use std::fmt;
use std::str::FromStr;

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub mod address;
pub mod config;
pub mod grid;
pub mod hexagon;
pub mod octagon;
pub mod square;
pub mod triangle;

pub use address::{CellKey, LogicalAddress};
pub use config::GridConfig;
pub use grid::{Layout, TessellationGrid};
pub use hexagon::{axial_round, HexagonLayout};
pub use octagon::OctagonLayout;
pub use square::SquareLayout;
pub use triangle::{TriangleLayout, TriangleOrientation};

/// The supported tessellation geometries.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TilingKind {
    Square,
    Hexagon,
    Triangle,
    /// Truncated-square tiling. The gaps between octagons are [`SubKind::Diamond`] cells.
    Octagon,
}

impl TilingKind {
    /// Every tiling kind, in toolbar order.
    pub const ALL: [TilingKind; 4] = [
        TilingKind::Square,
        TilingKind::Hexagon,
        TilingKind::Triangle,
        TilingKind::Octagon,
    ];

    /// Canonical upper-case name, as stored in project documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            TilingKind::Square => "SQUARE",
            TilingKind::Hexagon => "HEXAGON",
            TilingKind::Triangle => "TRIANGLE",
            TilingKind::Octagon => "OCTAGON",
        }
    }

    /// Number of sides of the primary cell polygon.
    pub const fn sides(self) -> u32 {
        match self {
            TilingKind::Square => 4,
            TilingKind::Hexagon => 6,
            TilingKind::Triangle => 3,
            TilingKind::Octagon => 8,
        }
    }

    /// Whether this tiling has secondary sub-cells filling its gaps.
    pub const fn has_sub_cells(self) -> bool {
        matches!(self, TilingKind::Octagon)
    }
}

impl fmt::Display for TilingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TilingKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TilingKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownTilingKind { name: s.to_owned() })
    }
}

impl TryFrom<String> for TilingKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TilingKind> for &'static str {
    fn from(kind: TilingKind) -> Self {
        kind.as_str()
    }
}

/// Secondary cell kinds that share the address space of a primary cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubKind {
    /// Square gap cell of the octagon tiling, owned by the octagon up-left of it.
    #[cfg_attr(feature = "serde", serde(alias = "DIAMOND"))]
    Diamond,
}

impl SubKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            SubKind::Diamond => "Diamond",
        }
    }
}

impl fmt::Display for SubKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(SubKind::Diamond.as_str()) {
            Ok(SubKind::Diamond)
        } else {
            Err(Error::Other(format!("unknown sub-cell kind '{s}'")))
        }
    }
}

/// Coordinate transforms for one tiling geometry.
///
/// Implementations are pure: no call mutates the layout or reads ambient state.
pub trait TileLayout: Send + Sync {
    /// The geometry this layout implements.
    fn kind(&self) -> TilingKind;

    /// Pixel center of the primary cell at `(q, r)`.
    fn to_pixel(&self, q: i32, r: i32) -> Vec2;

    /// Resolves a local pixel position to the cell under it.
    fn to_logical(&self, p: Vec2) -> LogicalAddress;

    /// Pixel center of any cell, including sub-cells.
    fn address_to_pixel(&self, address: &LogicalAddress) -> Vec2 {
        self.to_pixel(address.q, address.r)
    }
}

/// Rounds to the nearest integer, with exact halves going toward positive infinity.
///
/// Non-finite input saturates (NaN becomes 0).
#[inline]
pub fn round_half_up(v: f32) -> i32 {
    let f = v.floor();
    if v - f >= 0.5 {
        (f + 1.0) as i32
    } else {
        f as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_parse_case_insensitively() {
        assert_eq!("hexagon".parse::<TilingKind>().unwrap(), TilingKind::Hexagon);
        assert_eq!("OCTAGON".parse::<TilingKind>().unwrap(), TilingKind::Octagon);
        assert_eq!(" Square ".parse::<TilingKind>().unwrap(), TilingKind::Square);
        let err = "PENTAGON".parse::<TilingKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownTilingKind { ref name } if name == "PENTAGON"));
    }

    #[test]
    fn kind_display_round_trips() {
        for kind in TilingKind::ALL {
            assert_eq!(kind.to_string().parse::<TilingKind>().unwrap(), kind);
        }
    }

    #[test]
    fn side_counts_match_geometry() {
        let sides: Vec<u32> = TilingKind::ALL.iter().map(|k| k.sides()).collect();
        assert_eq!(sides, vec![4, 6, 3, 8]);
        assert!(TilingKind::Octagon.has_sub_cells());
        assert!(!TilingKind::Hexagon.has_sub_cells());
    }

    #[test]
    fn sub_kind_accepts_legacy_spelling() {
        assert_eq!("DIAMOND".parse::<SubKind>().unwrap(), SubKind::Diamond);
        assert_eq!("Diamond".parse::<SubKind>().unwrap(), SubKind::Diamond);
        assert!("Kite".parse::<SubKind>().is_err());
    }

    #[test]
    fn round_half_up_breaks_ties_upward() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-1.5), -1);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(f32::NAN), 0);
        assert_eq!(round_half_up(f32::INFINITY), i32::MAX);
    }
}
