//! CPU-side mesh data structures.
//!
//! This module provides:
//! - [`PrimitiveTopology`] - How indices are assembled into primitives
//! - [`FaceRange`] - A named slice of the index buffer drawn on its own
//! - [`CpuMesh`] - CPU-side mesh holding raw vertex bytes and u32 indices

use std::sync::Arc;

use crate::error::MeshError;

use super::layout::VertexLayout;

/// Primitive topology describing how vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// Every two indices form a line.
    LineList,
    /// Every three indices form a triangle.
    #[default]
    TriangleList,
}

impl PrimitiveTopology {
    /// Get the number of vertices per primitive.
    pub fn vertices_per_primitive(&self) -> u32 {
        match self {
            Self::LineList => 2,
            Self::TriangleList => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LineList => "line list",
            Self::TriangleList => "triangle list",
        }
    }
}

/// A contiguous range of the index buffer, e.g. one face of a pyramid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceRange {
    pub label: String,
    /// First index of the range.
    pub start: u32,
    /// Number of indices in the range.
    pub count: u32,
}

impl FaceRange {
    pub fn new(label: impl Into<String>, start: u32, count: u32) -> Self {
        Self {
            label: label.into(),
            start,
            count,
        }
    }

    /// One past the last index, or `None` when it does not fit in u32.
    pub fn end(&self) -> Option<u32> {
        self.start.checked_add(self.count)
    }
}

/// A CPU-side mesh holding raw vertex and index data.
///
/// This is the GPU-agnostic representation handed to a rendering layer.
/// Each buffer slot of the [`VertexLayout`] gets its own byte vector, so
/// positions and texture coordinates can live in separate buffers.
/// Two meshes may share vertex data and differ only in topology and
/// indices (a filled sphere and its wireframe overlay).
#[derive(Clone)]
pub struct CpuMesh {
    layout: Arc<VertexLayout>,
    topology: PrimitiveTopology,
    vertex_buffers: Vec<Arc<Vec<u8>>>,
    vertex_count: u32,
    indices: Option<Vec<u32>>,
    faces: Vec<FaceRange>,
    label: Option<String>,
}

impl CpuMesh {
    /// Create a new empty CpuMesh with the given layout.
    pub fn new(layout: Arc<VertexLayout>) -> Self {
        let buffer_count = layout.buffer_count();
        Self {
            layout,
            topology: PrimitiveTopology::TriangleList,
            vertex_buffers: vec![Arc::new(Vec::new()); buffer_count],
            vertex_count: 0,
            indices: None,
            faces: Vec::new(),
            label: None,
        }
    }

    /// Set raw vertex data for a specific buffer slot.
    ///
    /// Vertex count is inferred from the data length and stride.
    pub fn with_vertex_data(mut self, buffer_index: usize, data: Vec<u8>) -> Self {
        let stride = self.layout.buffer_stride(buffer_index) as usize;
        if stride > 0 {
            self.vertex_count = (data.len() / stride) as u32;
        }
        if buffer_index < self.vertex_buffers.len() {
            self.vertex_buffers[buffer_index] = Arc::new(data);
        }
        self
    }

    /// Set typed vertex data for a buffer slot.
    pub fn with_vertices<T: bytemuck::Pod>(self, buffer_index: usize, vertices: &[T]) -> Self {
        self.with_vertex_data(buffer_index, bytemuck::cast_slice(vertices).to_vec())
    }

    /// Set index data.
    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = Some(indices);
        self
    }

    /// Set the primitive topology.
    pub fn with_topology(mut self, topology: PrimitiveTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Set the face ranges.
    pub fn with_faces(mut self, faces: Vec<FaceRange>) -> Self {
        self.faces = faces;
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Create a mesh over the same vertex buffers with different indices and topology.
    pub fn share_vertices(
        &self,
        topology: PrimitiveTopology,
        indices: Vec<u32>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            layout: self.layout.clone(),
            topology,
            vertex_buffers: self.vertex_buffers.clone(),
            vertex_count: self.vertex_count,
            indices: Some(indices),
            faces: Vec::new(),
            label: Some(label.into()),
        }
    }

    /// Get the vertex layout.
    pub fn layout(&self) -> &Arc<VertexLayout> {
        &self.layout
    }

    /// Get the primitive topology.
    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    /// Get raw vertex data for a specific buffer slot.
    pub fn vertex_buffer_data(&self, index: usize) -> Option<&[u8]> {
        self.vertex_buffers.get(index).map(|v| v.as_slice())
    }

    /// Whether `other` reads the very same vertex buffer allocations.
    pub fn shares_vertices_with(&self, other: &CpuMesh) -> bool {
        self.vertex_buffers.len() == other.vertex_buffers.len()
            && self
                .vertex_buffers
                .iter()
                .zip(&other.vertex_buffers)
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Get the index data.
    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    /// Get the index data as bytes.
    pub fn index_bytes(&self) -> Option<&[u8]> {
        self.indices.as_deref().map(bytemuck::cast_slice)
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> u32 {
        self.indices.as_ref().map_or(0, |i| i.len() as u32)
    }

    /// Number of complete primitives described by the indices.
    pub fn primitive_count(&self) -> u32 {
        self.index_count() / self.topology.vertices_per_primitive()
    }

    /// Check if this mesh uses indexed drawing.
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Get the face ranges.
    pub fn faces(&self) -> &[FaceRange] {
        &self.faces
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the number of vertex buffers.
    pub fn buffer_count(&self) -> usize {
        self.vertex_buffers.len()
    }

    /// Check the mesh is safe to hand to a rendering layer.
    ///
    /// Verifies the layout, that every buffer holds exactly `vertex_count`
    /// elements, that the index count matches the topology, that every
    /// index addresses an existing vertex, and that face ranges stay inside
    /// the index buffer.
    pub fn validate(&self) -> Result<(), MeshError> {
        self.layout.validate()?;

        for (slot, data) in self.vertex_buffers.iter().enumerate() {
            let stride = self.layout.buffer_stride(slot) as usize;
            if data.len() != self.vertex_count as usize * stride {
                return Err(MeshError::InvalidLayout(format!(
                    "buffer {slot} holds {} bytes, expected {} vertices of {stride} bytes",
                    data.len(),
                    self.vertex_count
                )));
            }
        }

        let Some(indices) = &self.indices else {
            return Ok(());
        };

        let count = indices.len() as u32;
        if count % self.topology.vertices_per_primitive() != 0 {
            return Err(MeshError::IncompletePrimitive {
                count,
                topology: self.topology.name(),
            });
        }

        if let Some((position, &index)) = indices
            .iter()
            .enumerate()
            .find(|(_, i)| **i >= self.vertex_count)
        {
            return Err(MeshError::IndexOutOfRange {
                index,
                position,
                vertex_count: self.vertex_count,
            });
        }

        for face in &self.faces {
            match face.end() {
                Some(end) if end <= count => {}
                Some(end) => {
                    return Err(MeshError::invalid(format!(
                        "face range '{}' ends at {end} past {count} indices",
                        face.label
                    )));
                }
                None => {
                    return Err(MeshError::invalid(format!(
                        "face range '{}' starting at {} with {} indices overflows u32",
                        face.label, face.start, face.count
                    )));
                }
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for CpuMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuMesh")
            .field("label", &self.label)
            .field("topology", &self.topology)
            .field("vertex_count", &self.vertex_count)
            .field("buffer_count", &self.vertex_buffers.len())
            .field("index_count", &self.index_count())
            .field("faces", &self.faces.len())
            .field("layout", &self.layout.label)
            .finish()
    }
}
