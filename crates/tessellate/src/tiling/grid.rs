//! The tessellation grid: a validated [`GridConfig`] bound to its layout.
use glam::Vec2;
use mint::Vector2;

use crate::error::Result;
use crate::tiling::{
    GridConfig, HexagonLayout, LogicalAddress, OctagonLayout, SquareLayout, TileLayout,
    TilingKind, TriangleLayout,
};

/// Per-kind layout, selected once when the grid is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Layout {
    Square(SquareLayout),
    Hexagon(HexagonLayout),
    Triangle(TriangleLayout),
    Octagon(OctagonLayout),
}

impl Layout {
    /// Builds the layout matching `config.kind`.
    pub fn from_config(config: &GridConfig) -> Self {
        match config.kind {
            TilingKind::Square => Layout::Square(SquareLayout::new(config.cell_size, config.gap)),
            TilingKind::Hexagon => Layout::Hexagon(HexagonLayout::new(config.cell_size)),
            TilingKind::Triangle => Layout::Triangle(TriangleLayout::new(config.cell_size)),
            TilingKind::Octagon => Layout::Octagon(OctagonLayout::new(config.cell_size)),
        }
    }

    fn as_dyn(&self) -> &dyn TileLayout {
        match self {
            Layout::Square(l) => l,
            Layout::Hexagon(l) => l,
            Layout::Triangle(l) => l,
            Layout::Octagon(l) => l,
        }
    }
}

impl TileLayout for Layout {
    fn kind(&self) -> TilingKind {
        self.as_dyn().kind()
    }

    #[inline]
    fn to_pixel(&self, q: i32, r: i32) -> Vec2 {
        self.as_dyn().to_pixel(q, r)
    }

    #[inline]
    fn to_logical(&self, p: Vec2) -> LogicalAddress {
        self.as_dyn().to_logical(p)
    }

    #[inline]
    fn address_to_pixel(&self, address: &LogicalAddress) -> Vec2 {
        self.as_dyn().address_to_pixel(address)
    }
}

/// Converts between logical cells and grid-local pixel coordinates for one configuration.
///
/// A grid is immutable; a configuration change builds a new one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TessellationGrid {
    config: GridConfig,
    layout: Layout,
}

impl TessellationGrid {
    /// Validates `config` and builds the grid.
    pub fn try_new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Builds the grid without validation.
    pub fn new(config: GridConfig) -> Self {
        debug_assert!(
            config.cell_size.is_finite() && config.cell_size > 0.0,
            "cell_size must be > 0"
        );
        debug_assert!(config.gap >= 0.0, "gap must be >= 0");

        Self {
            layout: Layout::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn kind(&self) -> TilingKind {
        self.config.kind
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Pixel center of the primary cell at `(q, r)`.
    pub fn logical_to_pixel(&self, q: i32, r: i32) -> Vec2 {
        self.layout.to_pixel(q, r)
    }

    /// Pixel center of any cell, including diamond sub-cells.
    pub fn address_to_pixel(&self, address: &LogicalAddress) -> Vec2 {
        self.layout.address_to_pixel(address)
    }

    /// Resolves a grid-local position to the cell under it.
    ///
    /// Accepts [`Vec2`] or any other [`mint::Vector2<f32>`] source. Boundary ties always
    /// resolve to exactly one cell; non-finite input saturates instead of failing.
    pub fn pixel_to_logical(&self, position: impl Into<Vector2<f32>>) -> LogicalAddress {
        self.layout.to_logical(Vec2::from(position.into()))
    }
}
