use std::fs;

use glam::Vec2;
use tessellate::prelude::*;
use tessellate_examples::{init_tracing, render_session_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut session = DesignSession::try_new(
        CanvasConfig::new(TilingKind::Octagon)
            .with_cell_size(40)
            .with_grid(8, 8),
    )?;

    // Ring of diamonds around the origin plus a recolored octagon.
    for (x, y) in [(17.0, 17.0), (-17.0, 17.0), (17.0, -17.0), (-17.0, -17.0)] {
        session.place_at(Vec2::new(x, y));
    }
    session.place_at(Vec2::ZERO);
    session.set_active_color("#17bebb");
    session.place_at(Vec2::ZERO);

    let path = "project-save-load.json";
    fs::write(path, session.to_document().to_json_pretty()?)?;

    let mut restored = DesignSession::default();
    restored.load_json(&fs::read_to_string(path)?)?;
    anyhow::ensure!(
        restored.store() == session.store(),
        "restored paint state differs"
    );

    render_session_to_png(
        &restored,
        &RenderConfig::new((600, 600)).with_zoom(1.8),
        "project-save-load.png",
    )?;
    Ok(())
}
