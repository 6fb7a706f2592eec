//! Mesh renderer.
//!
//! [`MeshRenderer`] turns [`CpuMesh`] values into backend buffers and
//! issues indexed draws with a model-view-projection matrix. It owns two
//! programs: one for filled faces and, when the shader sources provide an
//! edge fragment stage, one for the wireframe overlay.

use orbmesh_core::math::{Mat4, mat4_to_cols_array_2d};
use orbmesh_core::mesh::{CpuMesh, FaceRange, PrimitiveTopology};

use crate::backend::{BufferHandle, DrawCommand, ProgramHandle, RenderBackend};
use crate::config::RendererConfig;
use crate::error::AppError;

/// Which program a draw uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawPass {
    /// Filled faces with the face program.
    #[default]
    Faces,
    /// Wireframe overlay with the edge program.
    Edges,
}

/// A mesh living in backend buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuMesh {
    label: String,
    topology: PrimitiveTopology,
    vertex_buffers: Vec<BufferHandle>,
    index_buffer: BufferHandle,
    index_count: u32,
    vertex_count: u32,
    faces: Vec<FaceRange>,
}

impl GpuMesh {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    pub fn vertex_buffers(&self) -> &[BufferHandle] {
        &self.vertex_buffers
    }

    pub fn index_buffer(&self) -> BufferHandle {
        self.index_buffer
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Vertices held by each of the vertex buffers.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn faces(&self) -> &[FaceRange] {
        &self.faces
    }
}

/// Renders [`GpuMesh`] values through a [`RenderBackend`].
pub struct MeshRenderer<B: RenderBackend> {
    backend: B,
    config: RendererConfig,
    face_program: ProgramHandle,
    edge_program: Option<ProgramHandle>,
    frame_number: u64,
}

impl<B: RenderBackend> MeshRenderer<B> {
    /// Validate the config, configure the surface and compile the face and edge programs.
    pub fn new(mut backend: B, config: RendererConfig) -> Result<Self, AppError> {
        config.validate()?;
        backend.configure_surface(config.window.width, config.window.height, config.window.vsync)?;

        let face_program = backend.create_program("faces", &config.shaders.face_program())?;
        let edge_program = config
            .shaders
            .edge_program()
            .map(|source| backend.create_program("edges", &source))
            .transpose()?;

        log::info!(
            "Renderer ready on {} ({}x{}, vsync: {}, edge program: {})",
            backend.name(),
            config.window.width,
            config.window.height,
            config.window.vsync,
            edge_program.is_some()
        );

        Ok(Self {
            backend,
            config,
            face_program,
            edge_program,
            frame_number: 0,
        })
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Give the backend back, dropping the renderer.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Number of frames presented so far.
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn has_edge_program(&self) -> bool {
        self.edge_program.is_some()
    }

    /// Upload a mesh: one vertex buffer per layout slot plus an index buffer.
    pub fn upload(&mut self, mesh: &CpuMesh) -> Result<GpuMesh, AppError> {
        mesh.validate()?;
        let label = mesh_label(mesh);

        let mut vertex_buffers = Vec::with_capacity(mesh.buffer_count());
        for slot in 0..mesh.buffer_count() {
            let layout = mesh.layout();
            let location = layout
                .attributes_for_buffer(slot as u32)
                .map(|attr| attr.location())
                .min()
                .ok_or_else(|| {
                    AppError::config(format!("buffer {slot} of '{label}' feeds no attribute"))
                })?;
            let data = mesh.vertex_buffer_data(slot).unwrap_or_default();
            let handle = self.backend.create_vertex_buffer(
                &format!("{label}.vertices{slot}"),
                data,
                layout.buffer_stride(slot),
                location,
            )?;
            vertex_buffers.push(handle);
        }

        let gpu = self.upload_indices(mesh, &label, vertex_buffers, mesh.vertex_count())?;
        log::debug!(
            "Uploaded '{}': {} vertices, {} indices, {} face ranges",
            gpu.label,
            gpu.vertex_count,
            gpu.index_count,
            gpu.faces.len()
        );
        Ok(gpu)
    }

    /// Upload only the indices of `mesh`, drawing from `base`'s vertex buffers.
    ///
    /// Used for a wireframe overlay built with
    /// [`CpuMesh::share_vertices`]. `mesh` must describe the same vertices
    /// as `base`: equal buffer and vertex counts, every index below the
    /// vertex count.
    pub fn upload_shared(&mut self, mesh: &CpuMesh, base: &GpuMesh) -> Result<GpuMesh, AppError> {
        mesh.validate()?;
        let label = mesh_label(mesh);
        if mesh.buffer_count() != base.vertex_buffers.len() {
            return Err(AppError::config(format!(
                "'{label}' has {} vertex buffers but '{}' provides {}",
                mesh.buffer_count(),
                base.label,
                base.vertex_buffers.len()
            )));
        }
        if mesh.vertex_count() != base.vertex_count {
            return Err(AppError::config(format!(
                "'{label}' has {} vertices but '{}' provides {}",
                mesh.vertex_count(),
                base.label,
                base.vertex_count
            )));
        }
        if let Some(max) = mesh
            .indices()
            .and_then(|indices| indices.iter().copied().max())
            .filter(|&max| max >= base.vertex_count)
        {
            return Err(AppError::config(format!(
                "'{label}' reads vertex {max} but '{}' provides {}",
                base.label, base.vertex_count
            )));
        }

        let gpu = self.upload_indices(mesh, &label, base.vertex_buffers.clone(), base.vertex_count)?;
        log::debug!(
            "Uploaded '{}' over the vertices of '{}': {} indices",
            gpu.label,
            base.label,
            gpu.index_count
        );
        Ok(gpu)
    }

    fn upload_indices(
        &mut self,
        mesh: &CpuMesh,
        label: &str,
        vertex_buffers: Vec<BufferHandle>,
        vertex_count: u32,
    ) -> Result<GpuMesh, AppError> {
        let indices = mesh
            .indices()
            .ok_or_else(|| AppError::MissingIndices(label.to_string()))?;
        let index_buffer = self
            .backend
            .create_index_buffer(&format!("{label}.indices"), indices)?;

        Ok(GpuMesh {
            label: label.to_string(),
            topology: mesh.topology(),
            vertex_buffers,
            index_buffer,
            index_count: mesh.index_count(),
            vertex_count,
            faces: mesh.faces().to_vec(),
        })
    }

    /// Draw the whole index buffer of `mesh` in one call.
    pub fn draw(&mut self, mesh: &GpuMesh, pass: DrawPass, mvp: &Mat4) -> Result<(), AppError> {
        self.draw_range(mesh, pass, mvp, 0, mesh.index_count)
    }

    /// Draw each face range of `mesh` in its own call.
    ///
    /// A mesh without face ranges is drawn whole.
    pub fn draw_faces(
        &mut self,
        mesh: &GpuMesh,
        pass: DrawPass,
        mvp: &Mat4,
    ) -> Result<(), AppError> {
        if mesh.faces.is_empty() {
            return self.draw(mesh, pass, mvp);
        }
        for face in &mesh.faces {
            self.draw_range(mesh, pass, mvp, face.start, face.count)?;
        }
        Ok(())
    }

    fn draw_range(
        &mut self,
        mesh: &GpuMesh,
        pass: DrawPass,
        mvp: &Mat4,
        first_index: u32,
        index_count: u32,
    ) -> Result<(), AppError> {
        let program = match pass {
            DrawPass::Faces => self.face_program,
            DrawPass::Edges => self.edge_program.ok_or_else(|| {
                AppError::config(format!(
                    "cannot draw edges of '{}' without an edge fragment shader",
                    mesh.label
                ))
            })?,
        };

        self.backend.draw_indexed(&DrawCommand {
            program,
            topology: mesh.topology,
            vertex_buffers: mesh.vertex_buffers.clone(),
            index_buffer: mesh.index_buffer,
            first_index,
            index_count,
            mvp: mat4_to_cols_array_2d(mvp),
        })
    }

    /// Present the frame.
    pub fn end_frame(&mut self) -> Result<(), AppError> {
        self.backend.present()?;
        self.frame_number += 1;
        Ok(())
    }
}

fn mesh_label(mesh: &CpuMesh) -> String {
    mesh.label().unwrap_or("mesh").to_string()
}
