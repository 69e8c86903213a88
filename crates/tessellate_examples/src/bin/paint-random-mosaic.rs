use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tessellate::prelude::*;
use tessellate_examples::{init_tracing, render_session_to_png, RenderConfig};

const PALETTE: [&str; 5] = ["#ffcc00", "#e4572e", "#17bebb", "#76b041", "#f3f3f3"];

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(7);

    // One session, four tilings: each kind keeps its own partition while the
    // others are inactive.
    let mut session = DesignSession::try_new(CanvasConfig::default().with_grid(12, 12))?;
    let render = RenderConfig::new((900, 900)).with_zoom(1.4);

    for kind in TilingKind::ALL {
        session.select_kind(kind);
        let cells: Vec<LogicalAddress> = session
            .visible_cells()
            .into_iter()
            .map(|c| c.cell.address)
            .collect();

        for address in &cells {
            // Paint roughly 40% of the window.
            if rng.random_bool(0.4) {
                let color = PALETTE[rng.random_range(0..PALETTE.len())];
                session.set_active_color(color);
                session.toggle(address);
            }
        }

        let out = format!("paint-random-mosaic-{}.png", kind.as_str().to_lowercase());
        render_session_to_png(&session, &render, &out)?;
    }

    for kind in TilingKind::ALL {
        println!("{kind}: {} painted cells", session.store().len(kind));
    }
    Ok(())
}
