//! Design session: the state a painting front end holds for one project.
//!
//! A [`DesignSession`] ties the active [`CanvasConfig`] and color to a
//! [`TessellationGrid`] and a [`PlacementStore`]. Pointer positions passed in must
//! already be in grid-local space; the session never knows about pan or zoom.
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::placement::{Color, PlacedCell, PlacementStore, ToggleOutcome};
use crate::tiling::{GridConfig, LogicalAddress, TessellationGrid, TilingKind};
use crate::visible::{visible_cells, VisibleCell, VisibleRange};

pub const DEFAULT_COLOR: &str = "#ffcc00";

/// Canvas settings as edited in the toolbar.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: TilingKind,
    /// Cell size in whole pixels.
    pub cell_size: u32,
    pub grid_rows: u32,
    pub grid_cols: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gap: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            kind: TilingKind::Hexagon,
            cell_size: 45,
            grid_rows: 15,
            grid_cols: 15,
            gap: 0.0,
        }
    }
}

impl CanvasConfig {
    /// Creates a [`CanvasConfig`] for the given kind with default sizes.
    pub fn new(kind: TilingKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Sets rows and columns of the visible window.
    pub fn with_grid(mut self, rows: u32, cols: u32) -> Self {
        self.grid_rows = rows;
        self.grid_cols = cols;
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn grid_config(&self) -> GridConfig {
        GridConfig::new(self.kind, self.cell_size as f32).with_gap(self.gap)
    }

    pub fn visible_range(&self) -> VisibleRange {
        VisibleRange::new(self.grid_rows, self.grid_cols)
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.grid_config().validate()?;
        self.visible_range().validate()
    }
}

/// A visible cell joined with its paint state.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderCell {
    pub cell: VisibleCell,
    /// `None` when the cell is unpainted.
    pub fill: Option<Color>,
}

/// Presentation-layer state for one project.
#[derive(Clone, Debug)]
pub struct DesignSession {
    canvas: CanvasConfig,
    grid: TessellationGrid,
    active_color: Color,
    store: PlacementStore,
    /// Palette data from the last loaded project, written back on save.
    #[cfg(feature = "serde")]
    custom_palettes: Option<serde_json::Value>,
}

impl DesignSession {
    /// Creates a session with an empty store, returning an error if `canvas` is invalid.
    pub fn try_new(canvas: CanvasConfig) -> Result<Self> {
        canvas.validate()?;
        Ok(Self {
            grid: TessellationGrid::new(canvas.grid_config()),
            canvas,
            active_color: Color::from(DEFAULT_COLOR),
            store: PlacementStore::new(),
            #[cfg(feature = "serde")]
            custom_palettes: None,
        })
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn grid(&self) -> &TessellationGrid {
        &self.grid
    }

    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    pub fn active_kind(&self) -> TilingKind {
        self.canvas.kind
    }

    pub fn active_color(&self) -> &Color {
        &self.active_color
    }

    pub fn set_active_color(&mut self, color: impl Into<Color>) {
        self.active_color = color.into();
    }

    /// Switches the tiling kind. Paint history of every kind is kept.
    pub fn select_kind(&mut self, kind: TilingKind) {
        if kind == self.canvas.kind {
            return;
        }
        debug!(from = %self.canvas.kind, to = %kind, "switching tiling kind");
        self.canvas.kind = kind;
        self.grid = TessellationGrid::new(self.canvas.grid_config());
    }

    /// Replaces the canvas settings. On error nothing changes.
    pub fn set_canvas(&mut self, canvas: CanvasConfig) -> Result<()> {
        let grid = TessellationGrid::try_new(canvas.grid_config())?;
        canvas.visible_range().validate()?;
        info!(
            kind = %canvas.kind,
            cell_size = canvas.cell_size,
            rows = canvas.grid_rows,
            cols = canvas.grid_cols,
            "canvas updated"
        );
        self.canvas = canvas;
        self.grid = grid;
        Ok(())
    }

    /// Picks the cell at a grid-local position and toggles it with the active color.
    pub fn place_at(
        &mut self,
        position: impl Into<Vector2<f32>>,
    ) -> (LogicalAddress, ToggleOutcome) {
        let address = self.grid.pixel_to_logical(position);
        let outcome = self.toggle(&address);
        (address, outcome)
    }

    /// Toggles `address` in the active kind's partition with the active color.
    pub fn toggle(&mut self, address: &LogicalAddress) -> ToggleOutcome {
        self.store
            .toggle(self.canvas.kind, address, self.active_color.clone())
    }

    /// Clears the active kind's partition only.
    pub fn clear_active(&mut self) {
        debug!(kind = %self.canvas.kind, "clearing active partition");
        self.store.clear(self.canvas.kind);
    }

    /// Placed cell at `address` in the active kind.
    pub fn placed(&self, address: &LogicalAddress) -> Option<&PlacedCell> {
        self.store.get(self.canvas.kind, address)
    }

    /// Cells of the visible window with their fill colors.
    pub fn visible_cells(&self) -> Vec<RenderCell> {
        let kind = self.canvas.kind;
        visible_cells(&self.grid, self.canvas.visible_range())
            .map(|cell| RenderCell {
                fill: self
                    .store
                    .get(kind, &cell.address)
                    .map(|placed| placed.color.clone()),
                cell,
            })
            .collect()
    }

    /// Opaque palette data carried between project loads and saves.
    #[cfg(feature = "serde")]
    pub fn custom_palettes(&self) -> Option<&serde_json::Value> {
        self.custom_palettes.as_ref()
    }

    #[cfg(feature = "serde")]
    pub fn set_custom_palettes(&mut self, palettes: Option<serde_json::Value>) {
        self.custom_palettes = palettes;
    }

    /// Replaces canvas and paint state together. On error nothing changes.
    pub fn replace_state(&mut self, canvas: CanvasConfig, store: PlacementStore) -> Result<()> {
        canvas
            .validate()
            .map_err(|e| Error::Document(format!("grid config: {e}")))?;
        self.grid = TessellationGrid::new(canvas.grid_config());
        self.canvas = canvas;
        self.store = store;
        Ok(())
    }
}

impl Default for DesignSession {
    fn default() -> Self {
        let canvas = CanvasConfig::default();
        Self {
            grid: TessellationGrid::new(canvas.grid_config()),
            canvas,
            active_color: Color::from(DEFAULT_COLOR),
            store: PlacementStore::new(),
            #[cfg(feature = "serde")]
            custom_palettes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn default_session_matches_canvas_defaults() {
        let session = DesignSession::default();
        assert_eq!(session.active_kind(), TilingKind::Hexagon);
        assert_eq!(session.canvas().cell_size, 45);
        assert_eq!(session.active_color().as_str(), DEFAULT_COLOR);
        assert_eq!(session.visible_cells().len(), 225);
    }

    #[test]
    fn try_new_rejects_invalid_canvas() {
        let err = DesignSession::try_new(CanvasConfig::default().with_cell_size(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        let err = DesignSession::try_new(CanvasConfig::default().with_grid(0, 4)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn place_at_toggles_picked_cell() {
        let mut session =
            DesignSession::try_new(CanvasConfig::new(TilingKind::Square).with_cell_size(50)).unwrap();
        let (addr, outcome) = session.place_at(Vec2::new(100.0, -50.0));
        assert_eq!(addr, LogicalAddress::new(2, -1));
        assert_eq!(outcome, ToggleOutcome::Painted);

        let (_, outcome) = session.place_at(Vec2::new(110.0, -40.0));
        assert_eq!(outcome, ToggleOutcome::Erased);
        assert!(session.placed(&addr).is_none());

        let (addr, outcome) = session.place_at(Vector2 { x: -24.0_f32, y: 26.0 });
        assert_eq!(addr, LogicalAddress::new(0, 1));
        assert_eq!(outcome, ToggleOutcome::Painted);
    }

    #[test]
    fn switching_kinds_preserves_history() {
        let mut session = DesignSession::default();
        session.toggle(&LogicalAddress::new(1, 1));

        session.select_kind(TilingKind::Octagon);
        assert_eq!(session.grid().kind(), TilingKind::Octagon);
        assert!(session.placed(&LogicalAddress::new(1, 1)).is_none());
        session.set_active_color("#336699");
        session.place_at(Vec2::new(17.0, 17.0));

        session.select_kind(TilingKind::Hexagon);
        assert!(session.placed(&LogicalAddress::new(1, 1)).is_some());
        assert_eq!(session.store().len(TilingKind::Octagon), 1);
    }

    #[test]
    fn clear_active_only_clears_current_kind() {
        let mut session = DesignSession::default();
        session.toggle(&LogicalAddress::new(0, 0));
        session.select_kind(TilingKind::Square);
        session.toggle(&LogicalAddress::new(0, 0));
        session.clear_active();

        assert_eq!(session.store().len(TilingKind::Square), 0);
        assert_eq!(session.store().len(TilingKind::Hexagon), 1);
    }

    #[test]
    fn visible_cells_carry_fill() {
        let mut session =
            DesignSession::try_new(CanvasConfig::new(TilingKind::Octagon).with_grid(2, 2)).unwrap();
        session.toggle(&LogicalAddress::diamond(0, 0));
        let cells = session.visible_cells();
        assert_eq!(cells.len(), 8);
        let filled: Vec<_> = cells.iter().filter(|c| c.fill.is_some()).collect();
        assert_eq!(filled.len(), 1);
        assert_eq!(filled[0].cell.address, LogicalAddress::diamond(0, 0));
    }

    #[test]
    fn set_canvas_is_all_or_nothing() {
        let mut session = DesignSession::default();
        let before = *session.canvas();
        assert!(session
            .set_canvas(CanvasConfig::new(TilingKind::Square).with_grid(3, 0))
            .is_err());
        assert_eq!(session.canvas(), &before);
        assert_eq!(session.grid().kind(), TilingKind::Hexagon);

        session
            .set_canvas(CanvasConfig::new(TilingKind::Triangle).with_cell_size(30))
            .unwrap();
        assert_eq!(session.grid().kind(), TilingKind::Triangle);
        assert_eq!(session.grid().config().cell_size, 30.0);
    }
}
