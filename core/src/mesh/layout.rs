//! Vertex layout definitions for meshes.
//!
//! Vertex layouts describe the structure of vertex data across one or more
//! buffers. The demos keep positions and texture coordinates in separate
//! buffers, so the common textured layout uses two slots:
//!
//! ```ignore
//! // Buffer 0: positions (float3, stride 12)  -> shader location 0
//! // Buffer 1: texcoords (float2, stride 8)   -> shader location 1
//! let layout = VertexLayout::position_uv_split();
//! ```
//!
//! Layouts are shared via `Arc` since there are only a few combinations.

use std::sync::Arc;

use crate::error::MeshError;

/// Semantic meaning of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position (float3).
    Position,
    /// Texture coordinates set 0 (float2).
    TexCoord0,
}

impl VertexAttributeSemantic {
    /// Shader input location this semantic is bound to.
    pub fn location(&self) -> u32 {
        match self {
            Self::Position => 0,
            Self::TexCoord0 => 1,
        }
    }
}

/// Format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
}

impl VertexAttributeFormat {
    /// Get the size in bytes of this format.
    pub fn size(&self) -> usize {
        match self {
            Self::Float2 => 8,
            Self::Float3 => 12,
        }
    }

    /// Number of float components.
    pub fn components(&self) -> usize {
        self.size() / 4
    }
}

/// Describes a single vertex buffer binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexBufferLayout {
    /// Stride in bytes between consecutive elements.
    pub stride: u32,
}

impl VertexBufferLayout {
    /// Create a new vertex buffer layout with the given stride.
    pub fn new(stride: u32) -> Self {
        Self { stride }
    }
}

/// A single vertex attribute description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Semantic meaning of this attribute.
    pub semantic: VertexAttributeSemantic,
    /// Data format of this attribute.
    pub format: VertexAttributeFormat,
    /// Byte offset within the vertex buffer.
    pub offset: u32,
    /// Index of the vertex buffer this attribute reads from.
    pub buffer_index: u32,
}

impl VertexAttribute {
    /// Create a new vertex attribute.
    pub fn new(
        semantic: VertexAttributeSemantic,
        format: VertexAttributeFormat,
        offset: u32,
        buffer_index: u32,
    ) -> Self {
        Self {
            semantic,
            format,
            offset,
            buffer_index,
        }
    }

    /// Create a position attribute (float3) at buffer 0.
    pub fn position(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Position,
            VertexAttributeFormat::Float3,
            offset,
            0,
        )
    }

    /// Create a texcoord0 attribute (float2) at buffer 0.
    pub fn texcoord0(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::TexCoord0,
            VertexAttributeFormat::Float2,
            offset,
            0,
        )
    }

    /// Set the buffer index for this attribute.
    pub fn at_buffer(mut self, buffer_index: u32) -> Self {
        self.buffer_index = buffer_index;
        self
    }

    /// Shader input location of this attribute.
    pub fn location(&self) -> u32 {
        self.semantic.location()
    }
}

/// Describes the layout of vertex data across one or more buffers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VertexLayout {
    /// Descriptions of each vertex buffer binding.
    pub buffers: Vec<VertexBufferLayout>,
    /// The vertex attributes, each referencing a buffer by index.
    pub attributes: Vec<VertexAttribute>,
    /// Optional label for debugging.
    pub label: Option<String>,
}

impl VertexLayout {
    /// Create a new empty vertex layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex buffer binding.
    pub fn with_buffer(mut self, buffer: VertexBufferLayout) -> Self {
        self.buffers.push(buffer);
        self
    }

    /// Add a vertex attribute.
    pub fn with_attribute(mut self, attribute: VertexAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the number of vertex buffers.
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Get the stride for a specific buffer.
    pub fn buffer_stride(&self, buffer_index: usize) -> u32 {
        self.buffers
            .get(buffer_index)
            .map(|b| b.stride)
            .unwrap_or(0)
    }

    /// Check if this layout has a specific semantic.
    pub fn has_semantic(&self, semantic: VertexAttributeSemantic) -> bool {
        self.attributes.iter().any(|attr| attr.semantic == semantic)
    }

    /// Get an attribute by semantic.
    pub fn get_attribute(&self, semantic: VertexAttributeSemantic) -> Option<&VertexAttribute> {
        self.attributes
            .iter()
            .find(|attr| attr.semantic == semantic)
    }

    /// Get all attributes for a specific buffer.
    pub fn attributes_for_buffer(
        &self,
        buffer_index: u32,
    ) -> impl Iterator<Item = &VertexAttribute> {
        self.attributes
            .iter()
            .filter(move |attr| attr.buffer_index == buffer_index)
    }

    /// Check that every attribute references a defined buffer and fits in its stride.
    pub fn validate(&self) -> Result<(), MeshError> {
        for attr in &self.attributes {
            let Some(buffer) = self.buffers.get(attr.buffer_index as usize) else {
                return Err(MeshError::InvalidLayout(format!(
                    "attribute {:?} references buffer {} but only {} buffers defined",
                    attr.semantic,
                    attr.buffer_index,
                    self.buffers.len()
                )));
            };
            if attr.offset as usize + attr.format.size() > buffer.stride as usize {
                return Err(MeshError::InvalidLayout(format!(
                    "attribute {:?} at offset {} overruns stride {}",
                    attr.semantic, attr.offset, buffer.stride
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Common Layouts
// ============================================================================

impl VertexLayout {
    /// Position-only layout (12 bytes per vertex, single buffer).
    pub fn position_only() -> Arc<Self> {
        Arc::new(
            Self::new()
                .with_buffer(VertexBufferLayout::new(12))
                .with_attribute(VertexAttribute::position(0))
                .with_label("position_only"),
        )
    }

    /// Positions in buffer 0 (stride 12), texcoords in buffer 1 (stride 8).
    pub fn position_uv_split() -> Arc<Self> {
        Arc::new(
            Self::new()
                .with_buffer(VertexBufferLayout::new(12))
                .with_buffer(VertexBufferLayout::new(8))
                .with_attribute(VertexAttribute::position(0).at_buffer(0))
                .with_attribute(VertexAttribute::texcoord0(0).at_buffer(1))
                .with_label("position_uv_split"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_attribute_format_size() {
        assert_eq!(VertexAttributeFormat::Float2.size(), 8);
        assert_eq!(VertexAttributeFormat::Float3.size(), 12);
        assert_eq!(VertexAttributeFormat::Float3.components(), 3);
    }

    #[test]
    fn test_split_layout() {
        let layout = VertexLayout::position_uv_split();
        assert_eq!(layout.buffer_count(), 2);
        assert_eq!(layout.buffer_stride(0), 12);
        assert_eq!(layout.buffer_stride(1), 8);
        assert!(layout.validate().is_ok());

        let buffer1: Vec<_> = layout.attributes_for_buffer(1).collect();
        assert_eq!(buffer1.len(), 1);
        assert_eq!(buffer1[0].semantic, VertexAttributeSemantic::TexCoord0);
        assert_eq!(buffer1[0].location(), 1);
    }

    #[test]
    fn test_vertex_layout_validation() {
        let invalid_layout = VertexLayout::new()
            .with_buffer(VertexBufferLayout::new(12))
            .with_attribute(VertexAttribute::position(0).at_buffer(5)); // Invalid!
        assert!(invalid_layout.validate().is_err());

        let overrun = VertexLayout::new()
            .with_buffer(VertexBufferLayout::new(8))
            .with_attribute(VertexAttribute::position(0));
        assert!(matches!(
            overrun.validate(),
            Err(MeshError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_position_only_layout() {
        let layout = VertexLayout::position_only();
        assert!(layout.has_semantic(VertexAttributeSemantic::Position));
        assert!(!layout.has_semantic(VertexAttributeSemantic::TexCoord0));
        assert_eq!(
            layout
                .get_attribute(VertexAttributeSemantic::Position)
                .map(|a| a.format),
            Some(VertexAttributeFormat::Float3)
        );
    }
}
