use glam::Vec2;
use tessellate::prelude::*;
use tessellate_examples::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let probes = [
        Vec2::ZERO,
        Vec2::new(17.0, 17.0),
        Vec2::new(-17.0, -17.0),
        Vec2::new(40.0, -10.0),
        Vec2::new(-61.0, 33.0),
    ];

    for kind in TilingKind::ALL {
        let shape = shape_info(kind);
        let grid = TessellationGrid::try_new(GridConfig::new(kind, 40.0))?;
        info!(kind = %kind, name = shape.name, sides = shape.sides, "grid ready");

        for p in probes {
            let address = grid.pixel_to_logical(p);
            let center = grid.address_to_pixel(&address);
            println!(
                "{:<8} ({:>6.1}, {:>6.1}) -> {:<14} center ({:>7.2}, {:>7.2})",
                kind.as_str(),
                p.x,
                p.y,
                address.key().as_str(),
                center.x,
                center.y
            );
        }
    }

    // Fractional axial coordinates near a hex boundary.
    for (q, r) in [(0.49_f32, 0.49_f32), (0.51, 0.49)] {
        println!("axial_round({q}, {r}) = {:?}", axial_round(q, r));
    }
    Ok(())
}
