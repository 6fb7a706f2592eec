//! Error types for the application layer.

use orbmesh_core::MeshError;
use thiserror::Error;

/// Errors raised while configuring the renderer or running the frame loop.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AppError {
    /// Mesh data was rejected before upload.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// The render backend refused an operation.
    #[error("backend error: {0}")]
    Backend(String),

    /// The renderer configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A mesh without an index buffer was handed to the indexed renderer.
    #[error("mesh '{0}' has no index buffer")]
    MissingIndices(String),
}

impl AppError {
    pub(crate) fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
