//! Hand-enumerated box and pyramid tables.
//!
//! Unlike the sphere these shapes are not parametric: every corner and
//! index is listed literally, and the builders only scale the unit tables
//! by the requested size and move them to the requested center.

use crate::error::MeshError;
use crate::math::Vec3;

use super::data::FaceRange;

/// Geometry of a hand-built shape.
///
/// `tex_coords` and `edge_indices` are empty for shapes that do not carry them.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGeometry {
    pub positions: Vec<[f32; 3]>,
    pub tex_coords: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
    pub edge_indices: Vec<u32>,
    pub faces: Vec<FaceRange>,
}

impl ShapeGeometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_textured(&self) -> bool {
        !self.tex_coords.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Box
// ---------------------------------------------------------------------------

/// Corner signs of the untextured box, four per face.
/// Face order: +Z, -Z, -X, +X, +Y, -Y.
#[rustfmt::skip]
const BOX_CORNERS: [[f32; 3]; 24] = [
    [-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0], [-1.0,  1.0,  1.0],
    [-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0],
    [-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0], [-1.0,  1.0, -1.0],
    [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0],
    [-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0], [-1.0,  1.0,  1.0],
    [-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0], [-1.0, -1.0,  1.0],
];

/// Per-face fan: `a b c c d a`.
const BOX_FACE_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Corner signs and texture coordinates of the textured box.
/// Each face lists top-left, top-right, bottom-left, bottom-right.
/// Face order: -Z, +Z, +Y, -Y, +X, -X.
#[rustfmt::skip]
const TEXTURED_BOX_CORNERS: [([f32; 3], [f32; 2]); 24] = [
    ([-1.0,  1.0, -1.0], [0.0, 0.0]), ([ 1.0,  1.0, -1.0], [1.0, 0.0]),
    ([-1.0, -1.0, -1.0], [0.0, 1.0]), ([ 1.0, -1.0, -1.0], [1.0, 1.0]),

    ([-1.0,  1.0,  1.0], [0.0, 0.0]), ([ 1.0,  1.0,  1.0], [1.0, 0.0]),
    ([-1.0, -1.0,  1.0], [0.0, 1.0]), ([ 1.0, -1.0,  1.0], [1.0, 1.0]),

    ([-1.0,  1.0,  1.0], [0.0, 0.0]), ([ 1.0,  1.0,  1.0], [1.0, 0.0]),
    ([-1.0,  1.0, -1.0], [0.0, 1.0]), ([ 1.0,  1.0, -1.0], [1.0, 1.0]),

    ([-1.0, -1.0,  1.0], [0.0, 0.0]), ([ 1.0, -1.0,  1.0], [1.0, 0.0]),
    ([-1.0, -1.0, -1.0], [0.0, 1.0]), ([ 1.0, -1.0, -1.0], [1.0, 1.0]),

    ([ 1.0,  1.0, -1.0], [0.0, 0.0]), ([ 1.0,  1.0,  1.0], [1.0, 0.0]),
    ([ 1.0, -1.0, -1.0], [0.0, 1.0]), ([ 1.0, -1.0,  1.0], [1.0, 1.0]),

    ([-1.0,  1.0, -1.0], [0.0, 0.0]), ([-1.0,  1.0,  1.0], [1.0, 0.0]),
    ([-1.0, -1.0, -1.0], [0.0, 1.0]), ([-1.0, -1.0,  1.0], [1.0, 1.0]),
];

/// Per-face split of the textured box quad: `a b c c d b`.
const TEXTURED_BOX_FACE_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 1];

const BOX_FACE_LABELS: [&str; 6] = ["front", "back", "left", "right", "top", "bottom"];
const TEXTURED_BOX_FACE_LABELS: [&str; 6] = ["front", "back", "top", "bottom", "right", "left"];

/// Untextured box of the given size centered at `center`.
pub fn box_geometry(center: Vec3, size: Vec3) -> Result<ShapeGeometry, MeshError> {
    let half = half_extents(size)?;
    let positions = BOX_CORNERS
        .iter()
        .map(|corner| place(center, half, corner))
        .collect();

    Ok(ShapeGeometry {
        positions,
        tex_coords: Vec::new(),
        indices: repeat_per_face(&BOX_FACE_INDICES, 6, 4),
        edge_indices: Vec::new(),
        faces: face_ranges(&BOX_FACE_LABELS, 6),
    })
}

/// Box with one full `[0, 1]` texture per face.
pub fn textured_box_geometry(center: Vec3, size: Vec3) -> Result<ShapeGeometry, MeshError> {
    let half = half_extents(size)?;
    let (positions, tex_coords) = TEXTURED_BOX_CORNERS
        .iter()
        .map(|(corner, uv)| (place(center, half, corner), *uv))
        .unzip();

    Ok(ShapeGeometry {
        positions,
        tex_coords,
        indices: repeat_per_face(&TEXTURED_BOX_FACE_INDICES, 6, 4),
        edge_indices: Vec::new(),
        faces: face_ranges(&TEXTURED_BOX_FACE_LABELS, 6),
    })
}

fn half_extents(size: Vec3) -> Result<Vec3, MeshError> {
    for (axis, value) in ["width", "height", "depth"].iter().zip(size.iter()) {
        positive(axis, *value)?;
    }
    Ok(size * 0.5)
}

fn place(center: Vec3, half: Vec3, corner: &[f32; 3]) -> [f32; 3] {
    [
        center.x + corner[0] * half.x,
        center.y + corner[1] * half.y,
        center.z + corner[2] * half.z,
    ]
}

fn repeat_per_face(pattern: &[u32], faces: u32, vertices_per_face: u32) -> Vec<u32> {
    (0..faces)
        .flat_map(|face| pattern.iter().map(move |i| face * vertices_per_face + i))
        .collect()
}

fn face_ranges(labels: &[&'static str], indices_per_face: u32) -> Vec<FaceRange> {
    labels
        .iter()
        .zip(0u32..)
        .map(|(label, face)| FaceRange::new(*label, face * indices_per_face, indices_per_face))
        .collect()
}

// ---------------------------------------------------------------------------
// Pyramid
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum PyramidCorner {
    /// Base corner given by the signs of its x and z offsets.
    Base(f32, f32),
    Apex,
}

use PyramidCorner::{Apex, Base};

const PYRAMID_CORNERS: [PyramidCorner; 5] = [
    Base(-1.0, -1.0),
    Base(1.0, -1.0),
    Base(1.0, 1.0),
    Base(-1.0, 1.0),
    Apex,
];

#[rustfmt::skip]
const PYRAMID_INDICES: [u32; 18] = [
    0, 1, 2, 0, 2, 3,
    0, 1, 4,
    1, 2, 4,
    2, 3, 4,
    3, 0, 4,
];

#[rustfmt::skip]
const PYRAMID_EDGES: [u32; 16] = [
    0, 1, 1, 2, 2, 3, 3, 0,
    0, 4, 1, 4, 2, 4, 3, 4,
];

/// Textured pyramid: a four-vertex base followed by one triangle per side,
/// each side with its own copy of the apex.
#[rustfmt::skip]
const TEXTURED_PYRAMID_CORNERS: [(PyramidCorner, [f32; 2]); 16] = [
    (Base(-1.0, -1.0), [0.0, 0.0]),
    (Base(-1.0,  1.0), [1.0, 0.0]),
    (Base( 1.0,  1.0), [1.0, 1.0]),
    (Base( 1.0, -1.0), [0.0, 1.0]),

    (Base(-1.0, -1.0), [0.0, 0.0]),
    (Base( 1.0, -1.0), [1.0, 0.0]),
    (Apex,             [0.5, 1.0]),

    (Base(-1.0,  1.0), [0.0, 0.0]),
    (Base( 1.0,  1.0), [1.0, 0.0]),
    (Apex,             [0.5, 1.0]),

    (Base(-1.0, -1.0), [0.0, 0.0]),
    (Base(-1.0,  1.0), [1.0, 0.0]),
    (Apex,             [0.5, 1.0]),

    (Base( 1.0,  1.0), [0.0, 0.0]),
    (Base( 1.0, -1.0), [1.0, 0.0]),
    (Apex,             [0.5, 1.0]),
];

#[rustfmt::skip]
const TEXTURED_PYRAMID_INDICES: [u32; 18] = [
    0, 1, 3, 2, 3, 1,
    4, 5, 6,
    7, 8, 9,
    10, 11, 12,
    13, 14, 15,
];

/// Square pyramid standing on the plane `y = center.y`, apex `height` above it.
pub fn pyramid_geometry(
    center: Vec3,
    base_size: f32,
    height: f32,
) -> Result<ShapeGeometry, MeshError> {
    let half = positive("base size", base_size)? * 0.5;
    positive("height", height)?;

    let positions = PYRAMID_CORNERS
        .iter()
        .map(|corner| match *corner {
            Base(sx, sz) => [center.x + sx * half, center.y, center.z + sz * half],
            Apex => [center.x, center.y + height, center.z],
        })
        .collect();

    Ok(ShapeGeometry {
        positions,
        tex_coords: Vec::new(),
        indices: PYRAMID_INDICES.to_vec(),
        edge_indices: PYRAMID_EDGES.to_vec(),
        faces: pyramid_faces(),
    })
}

/// Textured pyramid with a separate face range per side so each face can
/// bind its own texture.
///
/// The base sits half a base size below `center.y`; the apex is `height`
/// above `center.y`.
pub fn textured_pyramid_geometry(
    center: Vec3,
    base_size: f32,
    height: f32,
) -> Result<ShapeGeometry, MeshError> {
    let half = positive("base size", base_size)? * 0.5;
    positive("height", height)?;
    let base_y = center.y - half;

    let (positions, tex_coords) = TEXTURED_PYRAMID_CORNERS
        .iter()
        .map(|(corner, uv)| {
            let position = match *corner {
                Base(sx, sz) => [center.x + sx * half, base_y, center.z + sz * half],
                Apex => [center.x, center.y + height, center.z],
            };
            (position, *uv)
        })
        .unzip();

    Ok(ShapeGeometry {
        positions,
        tex_coords,
        indices: TEXTURED_PYRAMID_INDICES.to_vec(),
        edge_indices: Vec::new(),
        faces: pyramid_faces(),
    })
}

fn pyramid_faces() -> Vec<FaceRange> {
    let mut faces = vec![FaceRange::new("base", 0, 6)];
    faces.extend(
        ["side_0", "side_1", "side_2", "side_3"]
            .iter()
            .zip(0u32..)
            .map(|(label, side)| FaceRange::new(*label, 6 + side * 3, 3)),
    );
    faces
}

fn positive(name: &str, value: f32) -> Result<f32, MeshError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MeshError::invalid(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}
