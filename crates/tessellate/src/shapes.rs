//! Shape tables for each tiling kind.
//!
//! Provides display metadata ([`ShapeInfo`]), the derived lengths the picking code and
//! renderers both need ([`TriangleMetrics`], [`OctagonMetrics`]), and polygon vertex
//! generation in cell-local coordinates (origin at the cell's pixel center, +y down).
use std::f32::consts::{FRAC_PI_8, SQRT_2};

use glam::Vec2;

use crate::tiling::{TilingKind, TriangleOrientation};

/// Display metadata for a tiling kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeInfo {
    pub kind: TilingKind,
    /// Human-readable name shown in the toolbar.
    pub name: &'static str,
    pub sides: u32,
    /// Interior angle step in degrees.
    pub angle: u32,
    /// Default cell size in pixels.
    pub base_size: u32,
}

const SHAPES: [ShapeInfo; 4] = [
    ShapeInfo {
        kind: TilingKind::Square,
        name: "Classic Square",
        sides: 4,
        angle: 90,
        base_size: 60,
    },
    ShapeInfo {
        kind: TilingKind::Hexagon,
        name: "Honeycomb Hex",
        sides: 6,
        angle: 60,
        base_size: 40,
    },
    ShapeInfo {
        kind: TilingKind::Triangle,
        name: "Triangle",
        sides: 3,
        angle: 60,
        base_size: 60,
    },
    ShapeInfo {
        kind: TilingKind::Octagon,
        name: "Octagon",
        sides: 8,
        angle: 45,
        base_size: 40,
    },
];

/// Returns the shape table entry for `kind`.
pub fn shape_info(kind: TilingKind) -> &'static ShapeInfo {
    match kind {
        TilingKind::Square => &SHAPES[0],
        TilingKind::Hexagon => &SHAPES[1],
        TilingKind::Triangle => &SHAPES[2],
        TilingKind::Octagon => &SHAPES[3],
    }
}

/// Returns all shape table entries in toolbar order.
pub fn all_shapes() -> &'static [ShapeInfo] {
    &SHAPES
}

/// Lengths of an equilateral triangle with side `side`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleMetrics {
    pub side: f32,
    /// Row pitch: `side * sqrt(3) / 2`.
    pub height: f32,
    /// Circumradius: `side / sqrt(3)`.
    pub radius: f32,
}

impl TriangleMetrics {
    pub fn new(side: f32) -> Self {
        let sqrt3 = 3.0_f32.sqrt();
        Self {
            side,
            height: side * sqrt3 * 0.5,
            radius: side / sqrt3,
        }
    }
}

/// Lengths of a regular octagon in a truncated-square tiling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctagonMetrics {
    /// Outer vertex-to-vertex diameter.
    pub diameter: f32,
    /// Flat-to-flat width, which is also the center spacing of the tiling.
    pub width: f32,
    /// Edge length, shared with the diamond gap cells.
    pub edge: f32,
    /// Bound on `|dx| + |dy|` from the center for points inside the octagon.
    pub limit: f32,
}

impl OctagonMetrics {
    pub fn new(diameter: f32) -> Self {
        let outer_radius = diameter * 0.5;
        let width = diameter * FRAC_PI_8.cos();
        let edge = 2.0 * outer_radius * FRAC_PI_8.sin();
        Self {
            diameter,
            width,
            edge,
            limit: width * 0.5 + edge * 0.5,
        }
    }

    /// Offset from an octagon center to the center of the diamond it owns.
    pub fn diamond_offset(&self) -> Vec2 {
        Vec2::splat(self.width * 0.5)
    }

    /// Distance from a diamond center to each of its vertices.
    pub fn diamond_half_diagonal(&self) -> f32 {
        self.edge * 0.5 * SQRT_2
    }
}

/// Which polygon to draw for a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellShape {
    Square,
    Hexagon,
    Triangle(TriangleOrientation),
    Octagon,
    Diamond,
}

impl CellShape {
    /// Builds the polygon for this shape with the given tiling cell size.
    pub fn polygon(self, cell_size: f32) -> Vec<Vec2> {
        match self {
            CellShape::Square => square_points(cell_size),
            CellShape::Hexagon => hexagon_points(cell_size),
            CellShape::Triangle(orientation) => triangle_points(cell_size, orientation),
            CellShape::Octagon => octagon_points(cell_size),
            CellShape::Diamond => diamond_points(cell_size),
        }
    }
}

fn ring(radius: f32, degrees: impl IntoIterator<Item = f32>) -> Vec<Vec2> {
    degrees
        .into_iter()
        .map(|deg| Vec2::from_angle(deg.to_radians()) * radius)
        .collect()
}

/// Axis-aligned square with edge `size`.
pub fn square_points(size: f32) -> Vec<Vec2> {
    let half = size * 0.5;
    vec![
        Vec2::new(-half, -half),
        Vec2::new(half, -half),
        Vec2::new(half, half),
        Vec2::new(-half, half),
    ]
}

/// Pointy-top hexagon with outer radius `size`.
pub fn hexagon_points(size: f32) -> Vec<Vec2> {
    ring(size, (0..6).map(|i| 30.0 + 60.0 * i as f32))
}

/// Equilateral triangle with side `size`, pointing up or down.
pub fn triangle_points(size: f32, orientation: TriangleOrientation) -> Vec<Vec2> {
    let radius = TriangleMetrics::new(size).radius;
    match orientation {
        TriangleOrientation::Up => ring(radius, [270.0, 30.0, 150.0]),
        TriangleOrientation::Down => ring(radius, [90.0, 210.0, 330.0]),
    }
}

/// Regular octagon with outer diameter `size`, flat sides facing the axes.
pub fn octagon_points(size: f32) -> Vec<Vec2> {
    ring(size * 0.5, (0..8).map(|i| 22.5 + 45.0 * i as f32))
}

/// Diamond gap cell of an octagon tiling with octagon diameter `size`,
/// relative to the diamond's own center.
pub fn diamond_points(size: f32) -> Vec<Vec2> {
    let h = OctagonMetrics::new(size).diamond_half_diagonal();
    vec![
        Vec2::new(0.0, -h),
        Vec2::new(h, 0.0),
        Vec2::new(0.0, h),
        Vec2::new(-h, 0.0),
    ]
}
