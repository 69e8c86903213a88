//! Grid configuration.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::shapes::shape_info;
use crate::tiling::TilingKind;

/// Configuration of one concrete tiling.
///
/// `cell_size` is the characteristic length of the kind: edge length for squares
/// and triangles, outer radius for hexagons, outer diameter for octagons. `gap`
/// only affects square spacing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub kind: TilingKind,
    pub cell_size: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gap: f32,
}

impl GridConfig {
    /// Creates a config with the given kind and cell size and no gap.
    pub fn new(kind: TilingKind, cell_size: f32) -> Self {
        Self {
            kind,
            cell_size,
            gap: 0.0,
        }
    }

    /// Creates a config using the kind's default cell size from the shape table.
    pub fn for_kind(kind: TilingKind) -> Self {
        Self::new(kind, shape_info(kind).base_size as f32)
    }

    /// Sets the gap between square cells.
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Returns the same config with a different tiling kind.
    pub fn with_kind(mut self, kind: TilingKind) -> Self {
        self.kind = kind;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "cell_size must be finite and > 0, got {}",
                self.cell_size
            )));
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "gap must be finite and >= 0, got {}",
                self.gap
            )));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::for_kind(TilingKind::Square)
    }
}
