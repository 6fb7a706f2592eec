//! Mesh error types.

use thiserror::Error;

/// Errors that can occur while generating or validating mesh data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// A generator was called with parameters that would produce degenerate geometry.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The mesh needs more vertices than a u32 index can address.
    #[error("mesh needs {vertices} vertices, which does not fit in u32 indices")]
    IndexOverflow {
        /// Number of vertices the mesh would need.
        vertices: u64,
    },
    /// An index buffer references a vertex that does not exist.
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// The offending index value.
        index: u32,
        /// Position of the index inside the index buffer.
        position: usize,
        /// Number of vertices in the mesh.
        vertex_count: u32,
    },
    /// The index count does not match the primitive topology.
    #[error("{count} indices do not form whole {topology} primitives")]
    IncompletePrimitive {
        /// Number of indices in the buffer.
        count: u32,
        /// Name of the topology.
        topology: &'static str,
    },
    /// A vertex layout is inconsistent with the data supplied for it.
    #[error("invalid vertex layout: {0}")]
    InvalidLayout(String),
}

impl MeshError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
