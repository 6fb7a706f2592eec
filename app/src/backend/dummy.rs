//! Dummy backend for testing and headless runs.
//!
//! This backend doesn't touch a GPU. It records every call so tests and
//! the demos can inspect exactly what the renderer asked for, and it checks
//! draws against the buffers it created.

use std::collections::HashMap;

use crate::config::ShaderStageSource;
use crate::error::AppError;

use super::{BufferHandle, DrawCommand, ProgramHandle, RenderBackend};

/// A call recorded by the [`DummyBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    ConfigureSurface {
        width: u32,
        height: u32,
        vsync: bool,
    },
    CreateProgram {
        handle: ProgramHandle,
        label: String,
    },
    CreateVertexBuffer {
        handle: BufferHandle,
        label: String,
        size: usize,
        stride: u32,
        location: u32,
    },
    CreateIndexBuffer {
        handle: BufferHandle,
        label: String,
        count: usize,
    },
    Draw(DrawCommand),
    Present,
}

#[derive(Debug, Clone)]
enum DummyBuffer {
    Vertex { elements: usize },
    Index { indices: Vec<u32> },
}

/// Recording backend without a GPU.
#[derive(Debug, Default)]
pub struct DummyBackend {
    commands: Vec<BackendCommand>,
    programs: Vec<ProgramHandle>,
    buffers: HashMap<BufferHandle, DummyBuffer>,
    next_id: u32,
    fail_programs: bool,
}

impl DummyBackend {
    /// Create a new dummy backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `create_program` call fail, as a driver rejecting a shader would.
    pub fn with_failing_programs(mut self) -> Self {
        self.fail_programs = true;
        self
    }

    /// All recorded calls in order.
    pub fn commands(&self) -> &[BackendCommand] {
        &self.commands
    }

    /// Recorded draws in order.
    pub fn draws(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter_map(|c| match c {
            BackendCommand::Draw(draw) => Some(draw),
            _ => None,
        })
    }

    /// Number of presented frames.
    pub fn present_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, BackendCommand::Present))
            .count()
    }

    /// Vsync setting of the last surface configuration, if any.
    pub fn vsync(&self) -> Option<bool> {
        self.commands.iter().rev().find_map(|c| match c {
            BackendCommand::ConfigureSurface { vsync, .. } => Some(*vsync),
            _ => None,
        })
    }

    /// Number of live buffers.
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Forget recorded calls, keeping created objects alive.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

impl RenderBackend for DummyBackend {
    fn name(&self) -> &'static str {
        "Dummy Backend"
    }

    fn configure_surface(&mut self, width: u32, height: u32, vsync: bool) -> Result<(), AppError> {
        if width == 0 || height == 0 {
            return Err(AppError::backend(format!(
                "cannot configure a {width}x{height} surface"
            )));
        }
        log::trace!("DummyBackend: configuring surface {width}x{height} (vsync: {vsync})");
        self.commands.push(BackendCommand::ConfigureSurface {
            width,
            height,
            vsync,
        });
        Ok(())
    }

    fn create_program(
        &mut self,
        label: &str,
        source: &ShaderStageSource,
    ) -> Result<ProgramHandle, AppError> {
        if self.fail_programs {
            return Err(AppError::backend(format!(
                "failed to link program '{label}'"
            )));
        }
        if source.vertex.trim().is_empty() || source.fragment.trim().is_empty() {
            return Err(AppError::backend(format!(
                "program '{label}' has an empty stage"
            )));
        }

        let handle = ProgramHandle::new(self.next_id());
        log::trace!("DummyBackend: creating program {label:?} ({handle:?})");
        self.programs.push(handle);
        self.commands.push(BackendCommand::CreateProgram {
            handle,
            label: label.to_string(),
        });
        Ok(handle)
    }

    fn create_vertex_buffer(
        &mut self,
        label: &str,
        data: &[u8],
        stride: u32,
        location: u32,
    ) -> Result<BufferHandle, AppError> {
        if stride == 0 || data.len() % stride as usize != 0 {
            return Err(AppError::backend(format!(
                "vertex buffer '{label}' of {} bytes does not match stride {stride}",
                data.len()
            )));
        }

        let handle = BufferHandle::new(self.next_id());
        log::trace!(
            "DummyBackend: creating vertex buffer {label:?} (size: {}, location: {location})",
            data.len()
        );
        self.buffers.insert(
            handle,
            DummyBuffer::Vertex {
                elements: data.len() / stride as usize,
            },
        );
        self.commands.push(BackendCommand::CreateVertexBuffer {
            handle,
            label: label.to_string(),
            size: data.len(),
            stride,
            location,
        });
        Ok(handle)
    }

    fn create_index_buffer(
        &mut self,
        label: &str,
        indices: &[u32],
    ) -> Result<BufferHandle, AppError> {
        let handle = BufferHandle::new(self.next_id());
        log::trace!(
            "DummyBackend: creating index buffer {label:?} ({} indices)",
            indices.len()
        );
        self.buffers.insert(
            handle,
            DummyBuffer::Index {
                indices: indices.to_vec(),
            },
        );
        self.commands.push(BackendCommand::CreateIndexBuffer {
            handle,
            label: label.to_string(),
            count: indices.len(),
        });
        Ok(handle)
    }

    fn draw_indexed(&mut self, command: &DrawCommand) -> Result<(), AppError> {
        if !self.programs.contains(&command.program) {
            return Err(AppError::backend(format!(
                "unknown program {:?}",
                command.program
            )));
        }

        let Some(DummyBuffer::Index { indices }) = self.buffers.get(&command.index_buffer) else {
            return Err(AppError::backend(format!(
                "{:?} is not an index buffer",
                command.index_buffer
            )));
        };
        let start = command.first_index as usize;
        let end = start + command.index_count as usize;
        let Some(range) = indices.get(start..end) else {
            return Err(AppError::backend(format!(
                "draw reads indices up to {end} but the buffer holds {}",
                indices.len()
            )));
        };
        let max_index = range.iter().copied().max();

        for handle in &command.vertex_buffers {
            match self.buffers.get(handle) {
                Some(DummyBuffer::Vertex { elements }) if *elements > 0 => {
                    if let Some(max) = max_index.filter(|&max| max as usize >= *elements) {
                        return Err(AppError::backend(format!(
                            "draw reads vertex {max} but {handle:?} holds {elements}"
                        )));
                    }
                }
                _ => {
                    return Err(AppError::backend(format!(
                        "{handle:?} is not a non-empty vertex buffer"
                    )));
                }
            }
        }

        log::trace!(
            "DummyBackend: draw {} primitives of {}",
            command.primitive_count(),
            command.topology.name()
        );
        self.commands.push(BackendCommand::Draw(command.clone()));
        Ok(())
    }

    fn present(&mut self) -> Result<(), AppError> {
        self.commands.push(BackendCommand::Present);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use orbmesh_core::mesh::PrimitiveTopology;

    use super::*;
    use crate::config::ShaderSources;

    fn draw(program: ProgramHandle, vertices: BufferHandle, indices: BufferHandle) -> DrawCommand {
        DrawCommand {
            program,
            topology: PrimitiveTopology::TriangleList,
            vertex_buffers: vec![vertices],
            index_buffer: indices,
            first_index: 0,
            index_count: 3,
            mvp: [[0.0; 4]; 4],
        }
    }

    #[test]
    fn test_records_calls() {
        let mut backend = DummyBackend::new();
        let program = backend
            .create_program("faces", &ShaderSources::solid_color().face_program())
            .unwrap();
        let vertices = backend
            .create_vertex_buffer("positions", &[0u8; 36], 12, 0)
            .unwrap();
        let indices = backend.create_index_buffer("indices", &[0, 1, 2]).unwrap();
        backend.draw_indexed(&draw(program, vertices, indices)).unwrap();
        backend.present().unwrap();

        assert_eq!(backend.commands().len(), 5);
        assert_eq!(backend.draws().count(), 1);
        assert_eq!(backend.present_count(), 1);
        assert_eq!(backend.buffer_count(), 2);
        assert_ne!(vertices, indices);
    }

    #[test]
    fn test_failing_programs() {
        let mut backend = DummyBackend::new().with_failing_programs();
        let result = backend.create_program("faces", &ShaderSources::textured().face_program());
        assert!(matches!(result, Err(AppError::Backend(_))));
        assert!(backend.commands().is_empty());
    }

    #[test]
    fn test_rejects_bad_draws() {
        let mut backend = DummyBackend::new();
        let program = backend
            .create_program("faces", &ShaderSources::solid_color().face_program())
            .unwrap();
        let vertices = backend
            .create_vertex_buffer("positions", &[0u8; 24], 12, 0)
            .unwrap();
        let indices = backend.create_index_buffer("indices", &[0, 1]).unwrap();

        // Index buffer too short
        assert!(backend.draw_indexed(&draw(program, vertices, indices)).is_err());
        // Vertex and index buffers swapped
        assert!(backend.draw_indexed(&draw(program, indices, vertices)).is_err());
        assert_eq!(backend.draws().count(), 0);
    }

    #[test]
    fn test_rejects_index_past_vertex_buffer() {
        let mut backend = DummyBackend::new();
        let program = backend
            .create_program("faces", &ShaderSources::solid_color().face_program())
            .unwrap();
        let vertices = backend
            .create_vertex_buffer("positions", &[0u8; 36], 12, 0)
            .unwrap();
        let indices = backend
            .create_index_buffer("indices", &[0, 1, 2, 1, 2, 3])
            .unwrap();

        let mut command = draw(program, vertices, indices);
        backend.draw_indexed(&command).unwrap();

        // Vertex 3 does not exist in a three-vertex buffer
        command.first_index = 3;
        let err = backend.draw_indexed(&command).unwrap_err();
        assert!(err.to_string().contains("vertex 3"), "{err}");
        assert_eq!(backend.draws().count(), 1);
    }

    #[test]
    fn test_records_surface_configuration() {
        let mut backend = DummyBackend::new();
        assert_eq!(backend.vsync(), None);
        backend.configure_surface(640, 480, false).unwrap();
        assert_eq!(backend.vsync(), Some(false));
        assert_eq!(
            backend.commands(),
            &[BackendCommand::ConfigureSurface {
                width: 640,
                height: 480,
                vsync: false,
            }]
        );
        assert!(backend.configure_surface(0, 480, true).is_err());
    }

    #[test]
    fn test_rejects_stride_mismatch() {
        let mut backend = DummyBackend::new();
        assert!(backend.create_vertex_buffer("bad", &[0u8; 10], 12, 0).is_err());
        assert!(backend.create_vertex_buffer("bad", &[0u8; 12], 0, 0).is_err());
    }
}
