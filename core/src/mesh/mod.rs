//! CPU-side mesh types and generators.
//!
//! This module provides GPU-agnostic mesh data:
//!
//! - [`sphere`] - Parametric UV-sphere positions, texcoords, triangle and edge indices
//! - [`shapes`] - Literal box and pyramid tables
//! - [`VertexLayout`] - Describes vertex attributes across multiple buffers
//! - [`CpuMesh`] - CPU-side mesh data (vertex bytes, indices, layout)
//! - [`generators`] - Ready-to-upload [`CpuMesh`] values for every demo shape

mod data;
pub mod generators;
mod layout;
pub mod shapes;
pub mod sphere;

pub use data::{CpuMesh, FaceRange, PrimitiveTopology};
pub use layout::{
    VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexBufferLayout,
    VertexLayout,
};
pub use shapes::ShapeGeometry;
pub use sphere::{EdgeRings, SphereGeometry, SphereGrid, SphereParams};
