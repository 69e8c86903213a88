#![forbid(unsafe_code)]
//! tessellate: Tessellation grid engine with picking and per-tiling paint state.
//!
//! Modules:
//! - tiling: tiling kinds, logical addresses, cell keys, and the pixel <-> cell transforms
//! - shapes: shape metadata, shared metrics, and polygon vertex tables
//! - placement: per-kind paint partitions with toggle semantics
//! - visible: enumeration of the visible window of cells
//! - session: presentation-layer state tying picking to painting
//! - document: JSON project documents (feature `serde`)
//!
//! For examples, see the `tessellate_examples` crate.
#[cfg(feature = "serde")]
pub mod document;
pub mod error;
pub mod placement;
pub mod session;
pub mod shapes;
pub mod tiling;
pub mod visible;

/// Convenient re-exports for common types. Import with `use tessellate::prelude::*;`.
pub mod prelude {
    #[cfg(feature = "serde")]
    pub use crate::document::{ProjectDocument, FORMAT_VERSION};
    pub use crate::error::{Error, Result};
    pub use crate::placement::{
        Color, PlacedCell, PlacementSnapshot, PlacementStore, ToggleOutcome,
    };
    pub use crate::session::{CanvasConfig, DesignSession, RenderCell};
    pub use crate::shapes::{shape_info, CellShape, OctagonMetrics, ShapeInfo, TriangleMetrics};
    pub use crate::tiling::{
        axial_round, CellKey, GridConfig, LogicalAddress, SubKind, TessellationGrid, TileLayout,
        TilingKind, TriangleOrientation,
    };
    pub use crate::visible::{visible_cells, VisibleCell, VisibleRange};
}
