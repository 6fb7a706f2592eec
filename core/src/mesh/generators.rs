//! Mesh generators for the demo shapes.
//!
//! These generators produce [`CpuMesh`] values that a rendering layer can
//! upload as-is. Textured meshes use [`VertexLayout::position_uv_split`]
//! (positions in buffer 0, texcoords in buffer 1); untextured meshes use
//! [`VertexLayout::position_only`].

use crate::error::MeshError;
use crate::math::Vec3;

use super::data::{CpuMesh, PrimitiveTopology};
use super::layout::VertexLayout;
use super::shapes::{self, ShapeGeometry};
use super::sphere::{EdgeRings, SphereGeometry, SphereParams};

/// Filled sphere and its wireframe overlay, sharing one set of vertex buffers.
#[derive(Debug, Clone)]
pub struct SphereMeshes {
    pub faces: CpuMesh,
    pub edges: CpuMesh,
}

/// Generate a textured UV sphere as a triangle list.
///
/// # Arguments
///
/// * `radius` - Sphere radius, must be positive
/// * `sectors` - Number of longitudinal slices, at least 3
/// * `stacks` - Number of latitudinal rings, at least 1
pub fn generate_sphere(radius: f32, sectors: u32, stacks: u32) -> Result<CpuMesh, MeshError> {
    let params = SphereParams::new(radius, sectors, stacks)?;
    let geometry = SphereGeometry::generate(&params, EdgeRings::default());
    Ok(sphere_face_mesh(&geometry))
}

/// Generate a textured sphere together with its line-list edge mesh.
pub fn generate_sphere_with_edges(
    params: &SphereParams,
    rings: EdgeRings,
) -> Result<SphereMeshes, MeshError> {
    let geometry = SphereGeometry::generate(params, rings);
    let faces = sphere_face_mesh(&geometry);
    let edges = faces.share_vertices(
        PrimitiveTopology::LineList,
        geometry.edge_indices,
        "sphere_edges",
    );
    faces.validate()?;
    edges.validate()?;
    Ok(SphereMeshes { faces, edges })
}

/// Generate only the wireframe overlay of a sphere.
pub fn generate_sphere_edges(
    radius: f32,
    sectors: u32,
    stacks: u32,
    rings: EdgeRings,
) -> Result<CpuMesh, MeshError> {
    let params = SphereParams::new(radius, sectors, stacks)?;
    Ok(generate_sphere_with_edges(&params, rings)?.edges)
}

fn sphere_face_mesh(geometry: &SphereGeometry) -> CpuMesh {
    CpuMesh::new(VertexLayout::position_uv_split())
        .with_vertices(0, &geometry.positions)
        .with_vertices(1, &geometry.tex_coords)
        .with_indices(geometry.indices.clone())
        .with_label("sphere")
}

/// Generate an untextured box.
pub fn generate_box(center: Vec3, size: Vec3) -> Result<CpuMesh, MeshError> {
    shape_mesh(shapes::box_geometry(center, size)?, "box")
}

/// Generate a box with one texture per face.
pub fn generate_textured_box(center: Vec3, size: Vec3) -> Result<CpuMesh, MeshError> {
    shape_mesh(shapes::textured_box_geometry(center, size)?, "textured_box")
}

/// Generate an untextured square pyramid.
pub fn generate_pyramid(center: Vec3, base_size: f32, height: f32) -> Result<CpuMesh, MeshError> {
    shape_mesh(
        shapes::pyramid_geometry(center, base_size, height)?,
        "pyramid",
    )
}

/// Generate the line-list outline of a square pyramid.
pub fn generate_pyramid_edges(
    center: Vec3,
    base_size: f32,
    height: f32,
) -> Result<CpuMesh, MeshError> {
    let geometry = shapes::pyramid_geometry(center, base_size, height)?;
    let mesh = CpuMesh::new(VertexLayout::position_only())
        .with_vertices(0, &geometry.positions)
        .with_topology(PrimitiveTopology::LineList)
        .with_indices(geometry.edge_indices)
        .with_label("pyramid_edges");
    mesh.validate()?;
    Ok(mesh)
}

/// Generate a textured pyramid with one face range per side plus the base.
pub fn generate_textured_pyramid(
    center: Vec3,
    base_size: f32,
    height: f32,
) -> Result<CpuMesh, MeshError> {
    shape_mesh(
        shapes::textured_pyramid_geometry(center, base_size, height)?,
        "textured_pyramid",
    )
}

fn shape_mesh(geometry: ShapeGeometry, label: &str) -> Result<CpuMesh, MeshError> {
    let mesh = if geometry.is_textured() {
        CpuMesh::new(VertexLayout::position_uv_split())
            .with_vertices(0, &geometry.positions)
            .with_vertices(1, &geometry.tex_coords)
    } else {
        CpuMesh::new(VertexLayout::position_only()).with_vertices(0, &geometry.positions)
    };

    let mesh = mesh
        .with_indices(geometry.indices)
        .with_faces(geometry.faces)
        .with_label(label);
    mesh.validate()?;
    Ok(mesh)
}
