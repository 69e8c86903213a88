//! Enumeration of the visible window of cells.
//!
//! The logical domain is unbounded; renderers draw a `rows × cols` window centered
//! near the origin. Hexagon rows are shifted by `-floor(r / 2)` to cancel the axial
//! skew, so the drawn silhouette stays rectangular. Octagon windows also yield each
//! octagon's diamond gap cell.
use glam::Vec2;

use crate::error::{Error, Result};
use crate::shapes::CellShape;
use crate::tiling::{LogicalAddress, TessellationGrid, TilingKind, TriangleOrientation};

/// Size of the visible window in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleRange {
    pub rows: u32,
    pub cols: u32,
}

impl VisibleRange {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Validates the range, returning an error if either dimension is zero.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidConfig(
                "grid_rows and grid_cols must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Row indices covered by the window.
    pub fn row_range(&self) -> std::ops::Range<i32> {
        let rows = self.rows.min(i32::MAX as u32) as i32;
        let mid = rows / 2;
        -mid..rows - mid
    }

    /// Column indices covered in row `r` for the given tiling.
    pub fn col_range(&self, kind: TilingKind, r: i32) -> std::ops::Range<i32> {
        let cols = self.cols.min(i32::MAX as u32) as i32;
        let mid = cols / 2;
        let shift = match kind {
            TilingKind::Hexagon => r.div_euclid(2),
            _ => 0,
        };
        (-mid - shift)..(cols - mid - shift)
    }

    /// Number of primary cells in the window.
    pub fn primary_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

impl Default for VisibleRange {
    fn default() -> Self {
        Self::new(15, 15)
    }
}

/// One drawable cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleCell {
    pub address: LogicalAddress,
    /// Pixel center in grid-local space.
    pub center: Vec2,
    pub shape: CellShape,
}

impl VisibleCell {
    /// Polygon vertices in grid-local space.
    pub fn polygon(&self, cell_size: f32) -> Vec<Vec2> {
        self.shape
            .polygon(cell_size)
            .into_iter()
            .map(|v| v + self.center)
            .collect()
    }
}

/// Shape of the primary cell at `(q, r)` for `kind`.
pub fn primary_shape(kind: TilingKind, q: i32, r: i32) -> CellShape {
    match kind {
        TilingKind::Square => CellShape::Square,
        TilingKind::Hexagon => CellShape::Hexagon,
        TilingKind::Triangle => CellShape::Triangle(TriangleOrientation::of(q, r)),
        TilingKind::Octagon => CellShape::Octagon,
    }
}

/// Iterates the cells of `range` in row-major order.
///
/// For octagon tilings each octagon is immediately followed by the diamond it owns.
pub fn visible_cells(
    grid: &TessellationGrid,
    range: VisibleRange,
) -> impl Iterator<Item = VisibleCell> + '_ {
    let kind = grid.kind();
    range.row_range().flat_map(move |r| {
        range.col_range(kind, r).flat_map(move |q| {
            let primary = VisibleCell {
                address: LogicalAddress::new(q, r),
                center: grid.logical_to_pixel(q, r),
                shape: primary_shape(kind, q, r),
            };
            let diamond = kind.has_sub_cells().then(|| {
                let address = LogicalAddress::diamond(q, r);
                VisibleCell {
                    address,
                    center: grid.address_to_pixel(&address),
                    shape: CellShape::Diamond,
                }
            });
            std::iter::once(primary).chain(diamond)
        })
    })
}
