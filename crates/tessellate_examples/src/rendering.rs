//! PNG rendering of design sessions for the example binaries.
use std::path::Path;

use glam::Vec2;
use image::{Rgb, RgbImage};
use tessellate::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a formatted subscriber honoring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Output image settings.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    /// Pixels per grid-local unit.
    pub zoom: f32,
    pub background: [u8; 3],
    pub outline: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32)) -> Self {
        Self {
            image_size,
            zoom: 1.0,
            background: [26, 26, 26],
            outline: [51, 51, 51],
        }
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    /// Maps a grid-local point to image pixels, with the grid origin at the image center.
    fn to_image(&self, p: Vec2) -> Vec2 {
        let center = Vec2::new(self.image_size.0 as f32, self.image_size.1 as f32) * 0.5;
        center + p * self.zoom
    }
}

/// Renders the session's visible window and writes it to `out_path`.
pub fn render_session_to_png(
    session: &DesignSession,
    config: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));
    let cell_size = session.grid().config().cell_size;

    let cells = session.visible_cells();
    for cell in &cells {
        let polygon: Vec<Vec2> = cell
            .cell
            .polygon(cell_size)
            .into_iter()
            .map(|v| config.to_image(v))
            .collect();
        if let Some(rgb) = cell.fill.as_ref().and_then(Color::to_rgb) {
            fill_convex(&mut img, &polygon, rgb);
        }
        stroke(&mut img, &polygon, config.outline);
    }

    img.save(out_path.as_ref())?;
    info!(
        path = %out_path.as_ref().display(),
        cells = cells.len(),
        kind = %session.active_kind(),
        "rendered session"
    );
    Ok(())
}

fn fill_convex(img: &mut RgbImage, polygon: &[Vec2], rgb: [u8; 3]) {
    let (min, max) = polygon
        .iter()
        .fold((Vec2::MAX, Vec2::MIN), |(lo, hi), &p| (lo.min(p), hi.max(p)));
    let x0 = min.x.floor().max(0.0) as u32;
    let y0 = min.y.floor().max(0.0) as u32;
    let x1 = (max.x.ceil() as i64).clamp(0, img.width() as i64) as u32;
    let y1 = (max.y.ceil() as i64).clamp(0, img.height() as i64) as u32;

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if inside_convex(polygon, p) {
                img.put_pixel(x, y, Rgb(rgb));
            }
        }
    }
}

fn inside_convex(polygon: &[Vec2], p: Vec2) -> bool {
    let mut sign = 0.0_f32;
    for (i, &a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        let cross = (b - a).perp_dot(p - a);
        if cross != 0.0 {
            if sign != 0.0 && cross.signum() != sign {
                return false;
            }
            sign = cross.signum();
        }
    }
    true
}

fn stroke(img: &mut RgbImage, polygon: &[Vec2], rgb: [u8; 3]) {
    for (i, &a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        let steps = a.distance(b).ceil().max(1.0) as u32;
        for s in 0..=steps {
            let p = a.lerp(b, s as f32 / steps as f32);
            if p.x >= 0.0 && p.y >= 0.0 && (p.x as u32) < img.width() && (p.y as u32) < img.height() {
                img.put_pixel(p.x as u32, p.y as u32, Rgb(rgb));
            }
        }
    }
}
