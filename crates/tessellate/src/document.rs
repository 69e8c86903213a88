//! JSON project documents.
//!
//! A document stores the canvas configuration, the active tiling kind and the full
//! set of paint partitions. Palette data is carried through untouched as opaque JSON.
//! Loading either applies everything or nothing.
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::placement::{PlacementSnapshot, PlacementStore};
use crate::session::{CanvasConfig, DesignSession};
use crate::tiling::TilingKind;

/// Version tag written into new documents.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    #[serde(default)]
    pub version: u32,
    /// Milliseconds since the Unix epoch at save time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    pub grid_config: CanvasConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_shape: Option<TilingKind>,
    pub layout_shapes: PlacementSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_palettes: Option<serde_json::Value>,
}

impl ProjectDocument {
    /// Parses and validates a document.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: ProjectDocument = serde_json::from_str(text)?;
        doc.validate()?;
        Ok(doc)
    }

    /// Serializes the document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the grid configuration. Cell keys were already checked while parsing.
    pub fn validate(&self) -> Result<()> {
        self.grid_config
            .validate()
            .map_err(|e| Error::Document(format!("gridConfig: {e}")))
    }

    /// Active kind: the explicit `activeShape`, falling back to the grid config kind.
    pub fn active_kind(&self) -> TilingKind {
        self.active_shape.unwrap_or(self.grid_config.kind)
    }
}

fn now_millis() -> Option<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| d.as_millis() as u64)
}

impl DesignSession {
    /// Captures the session as a document.
    pub fn to_document(&self) -> ProjectDocument {
        ProjectDocument {
            version: FORMAT_VERSION,
            timestamp: now_millis(),
            grid_config: *self.canvas(),
            active_shape: Some(self.active_kind()),
            layout_shapes: self.store().snapshot(),
            custom_palettes: self.custom_palettes().cloned(),
        }
    }

    /// Replaces canvas and paint state with the document's. On error nothing changes.
    pub fn load_document(&mut self, doc: ProjectDocument) -> Result<()> {
        if let Err(e) = doc.validate() {
            warn!(error = %e, "rejected project document");
            return Err(e);
        }

        let mut canvas = doc.grid_config;
        canvas.kind = doc.active_kind();
        let cells = doc.layout_shapes.total_cells();
        self.replace_state(canvas, PlacementStore::from(doc.layout_shapes))?;
        self.set_custom_palettes(doc.custom_palettes);
        info!(kind = %canvas.kind, cells, "loaded project document");
        Ok(())
    }

    /// Parses `text` and loads it. On error nothing changes.
    pub fn load_json(&mut self, text: &str) -> Result<()> {
        let doc = ProjectDocument::from_json(text).inspect_err(|e| {
            warn!(error = %e, "failed to parse project document");
        })?;
        self.load_document(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiling::LogicalAddress;

    const SAMPLE: &str = r##"{
        "version": 1,
        "timestamp": 1700000000000,
        "gridConfig": { "type": "OCTAGON", "cellSize": 40, "gridRows": 10, "gridCols": 12 },
        "activeShape": "OCTAGON",
        "layoutShapes": {
            "SQUARE": { "0,0": { "type": "SQUARE", "color": "#112233" } },
            "HEXAGON": {},
            "TRIANGLE": {},
            "OCTAGON": {
                "1,-1": { "type": "OCTAGON", "color": "#ffcc00" },
                "2,3:DIAMOND": { "type": "OCTAGON", "color": "#ff0000" }
            }
        },
        "customPalettes": [{ "id": "1", "name": "warm", "colors": ["#ff0000"] }]
    }"##;

    #[test]
    fn parses_legacy_document() {
        let doc = ProjectDocument::from_json(SAMPLE).unwrap();
        assert_eq!(doc.grid_config.kind, TilingKind::Octagon);
        assert_eq!(doc.grid_config.cell_size, 40);
        assert_eq!(doc.grid_config.gap, 0.0);
        assert_eq!(doc.active_kind(), TilingKind::Octagon);
        assert_eq!(doc.layout_shapes.total_cells(), 3);
        assert!(doc.custom_palettes.is_some());
    }

    #[test]
    fn load_applies_everything() {
        let mut session = DesignSession::default();
        session.load_json(SAMPLE).unwrap();

        assert_eq!(session.active_kind(), TilingKind::Octagon);
        assert_eq!(session.grid().kind(), TilingKind::Octagon);
        assert_eq!(session.canvas().grid_cols, 12);
        let diamond = session.placed(&LogicalAddress::diamond(2, 3)).unwrap();
        assert_eq!(diamond.color.as_str(), "#ff0000");
        assert_eq!(session.store().len(TilingKind::Square), 1);
    }

    #[test]
    fn round_trips_through_json() {
        let mut session = DesignSession::default();
        session.toggle(&LogicalAddress::new(1, 1));
        session.select_kind(TilingKind::Octagon);
        session.toggle(&LogicalAddress::diamond(0, 0));

        let json = session.to_document().to_json_pretty().unwrap();
        assert!(json.contains("\"0,0:Diamond\""));
        assert!(json.contains("\"gridConfig\""));

        let mut restored = DesignSession::default();
        restored.load_json(&json).unwrap();
        assert_eq!(restored.store(), session.store());
        assert_eq!(restored.canvas(), session.canvas());
    }

    #[test]
    fn palettes_survive_load_and_save() {
        let mut session = DesignSession::default();
        session.load_json(SAMPLE).unwrap();

        let saved = session.to_document();
        let palettes = saved.custom_palettes.as_ref().unwrap();
        assert_eq!(palettes[0]["name"], "warm");
        assert_eq!(palettes[0]["colors"][0], "#ff0000");

        let json = saved.to_json_pretty().unwrap();
        assert!(json.contains("\"customPalettes\""));
    }

    #[test]
    fn palettes_are_omitted_when_never_loaded() {
        let session = DesignSession::default();
        assert!(session.to_document().custom_palettes.is_none());
        let json = session.to_document().to_json_pretty().unwrap();
        assert!(!json.contains("customPalettes"));
    }

    #[test]
    fn missing_sections_are_document_errors() {
        let no_grid = r#"{ "version": 1, "layoutShapes": {} }"#;
        let no_shapes = r#"{ "version": 1, "gridConfig": { "type": "SQUARE", "cellSize": 10, "gridRows": 2, "gridCols": 2 } }"#;
        for text in [no_grid, no_shapes, "not json"] {
            let err = ProjectDocument::from_json(text).unwrap_err();
            assert!(matches!(err, Error::Document(_)), "{text}");
        }
    }

    #[test]
    fn bad_keys_and_kinds_are_rejected() {
        let bad_key = r##"{ "gridConfig": { "type": "SQUARE", "cellSize": 10, "gridRows": 2, "gridCols": 2 },
                           "layoutShapes": { "SQUARE": { "x,y": { "type": "SQUARE", "color": "#000" } } } }"##;
        let bad_kind = r#"{ "gridConfig": { "type": "PENTAGON", "cellSize": 10, "gridRows": 2, "gridCols": 2 },
                           "layoutShapes": {} }"#;
        assert!(matches!(
            ProjectDocument::from_json(bad_key).unwrap_err(),
            Error::Document(_)
        ));
        assert!(matches!(
            ProjectDocument::from_json(bad_kind).unwrap_err(),
            Error::Document(_)
        ));
    }

    #[test]
    fn failed_load_leaves_session_untouched() {
        let mut session = DesignSession::default();
        session.toggle(&LogicalAddress::new(3, 3));
        let store_before = session.store().clone();
        let canvas_before = *session.canvas();

        let zero_size = r##"{ "gridConfig": { "type": "SQUARE", "cellSize": 0, "gridRows": 2, "gridCols": 2 },
                             "layoutShapes": { "SQUARE": { "0,0": { "type": "SQUARE", "color": "#000" } } } }"##;
        let err = session.load_json(zero_size).unwrap_err();
        assert!(matches!(err, Error::Document(_)));
        assert_eq!(session.store(), &store_before);
        assert_eq!(session.canvas(), &canvas_before);
    }
}
