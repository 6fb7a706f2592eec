//! Rendering backend abstraction.
//!
//! A [`RenderBackend`] owns GPU objects and hands out small copyable
//! handles for them. The [`MeshRenderer`](crate::MeshRenderer) drives a
//! backend through this trait only, so the demos run unchanged on the
//! recording [`DummyBackend`] or on a real graphics API.

mod dummy;

pub use dummy::{BackendCommand, DummyBackend};

use orbmesh_core::mesh::PrimitiveTopology;

use crate::config::ShaderStageSource;
use crate::error::AppError;

/// Handle to a compiled shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(u32);

impl ProgramHandle {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Handle to a vertex or index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(u32);

impl BufferHandle {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

/// One indexed draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub program: ProgramHandle,
    pub topology: PrimitiveTopology,
    pub vertex_buffers: Vec<BufferHandle>,
    pub index_buffer: BufferHandle,
    /// First index to read.
    pub first_index: u32,
    /// Number of indices to read.
    pub index_count: u32,
    /// Model-view-projection matrix, column major.
    pub mvp: [[f32; 4]; 4],
}

impl DrawCommand {
    /// Number of primitives this draw assembles.
    pub fn primitive_count(&self) -> u32 {
        self.index_count / self.topology.vertices_per_primitive()
    }
}

/// Operations a graphics API must provide to render the demos.
pub trait RenderBackend {
    /// Human-readable backend name.
    fn name(&self) -> &'static str;

    /// Size the presentation surface and choose whether presents wait for vsync.
    fn configure_surface(&mut self, width: u32, height: u32, vsync: bool) -> Result<(), AppError>;

    /// Compile and link a shader program.
    fn create_program(
        &mut self,
        label: &str,
        source: &ShaderStageSource,
    ) -> Result<ProgramHandle, AppError>;

    /// Create a vertex buffer bound to the given shader input location.
    fn create_vertex_buffer(
        &mut self,
        label: &str,
        data: &[u8],
        stride: u32,
        location: u32,
    ) -> Result<BufferHandle, AppError>;

    /// Create a u32 index buffer.
    fn create_index_buffer(&mut self, label: &str, indices: &[u32])
    -> Result<BufferHandle, AppError>;

    /// Record an indexed draw.
    fn draw_indexed(&mut self, command: &DrawCommand) -> Result<(), AppError>;

    /// Present the finished frame.
    fn present(&mut self) -> Result<(), AppError>;
}
