//! Square pyramid lowered half a unit and turning a little every frame.

use clap::Parser;

use orbmesh_app::{
    AppContext, AppError, AppHandler, DrawPass, GpuMesh, RenderBackend, ShaderSources, WindowArgs,
};
use orbmesh_core::camera::FixedCamera;
use orbmesh_core::math::{Mat4, Vec3, mat4_from_rotation_y, mat4_from_translation};
use orbmesh_core::mesh::generators::{
    generate_pyramid, generate_pyramid_edges, generate_textured_pyramid,
};

use crate::impl_app_args;

/// Rotation added each frame, in degrees.
pub const PYRAMID_STEP_DEGREES: f32 = 0.5;

const BASE_SIZE: f32 = 1.0;
const HEIGHT: f32 = 1.5;

/// Command line of `pyramid_demo`.
#[derive(Parser, Debug, Clone)]
#[command(name = "pyramid_demo", about = "Square pyramid turning in place", version)]
pub struct PyramidArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Texture each side instead of drawing red faces with black edges.
    #[arg(long)]
    pub textured: bool,
}

impl_app_args!(PyramidArgs, "Pyramid");

/// Model matrix while drawing frame `frame` (0-based).
///
/// The first frame is already turned by one step.
pub fn pyramid_model(frame: u64) -> Mat4 {
    let angle = (frame + 1) as f32 * PYRAMID_STEP_DEGREES.to_radians();
    mat4_from_translation(Vec3::new(0.0, -0.5, 0.0)) * mat4_from_rotation_y(angle)
}

pub struct PyramidDemo {
    textured: bool,
    camera: FixedCamera,
    faces: Option<GpuMesh>,
    edges: Option<GpuMesh>,
}

impl PyramidDemo {
    pub fn new(args: &PyramidArgs) -> Self {
        Self {
            textured: args.textured,
            camera: FixedCamera::default(),
            faces: None,
            edges: None,
        }
    }

    pub fn shaders(&self) -> ShaderSources {
        if self.textured {
            ShaderSources::textured().without_edges()
        } else {
            ShaderSources::solid_color()
        }
    }
}

impl<B: RenderBackend> AppHandler<B> for PyramidDemo {
    fn on_init(&mut self, ctx: &mut AppContext<B>) -> Result<(), AppError> {
        log::info!("Initializing Pyramid Demo (textured: {})", self.textured);
        self.camera = self.camera.with_viewport(ctx.width(), ctx.height());

        let renderer = ctx.renderer_mut();
        if self.textured {
            let mesh = generate_textured_pyramid(Vec3::zeros(), BASE_SIZE, HEIGHT)?;
            self.faces = Some(renderer.upload(&mesh)?);
        } else {
            let faces = generate_pyramid(Vec3::zeros(), BASE_SIZE, HEIGHT)?;
            let edges = generate_pyramid_edges(Vec3::zeros(), BASE_SIZE, HEIGHT)?;
            self.faces = Some(renderer.upload(&faces)?);
            self.edges = Some(renderer.upload(&edges)?);
        }
        Ok(())
    }

    fn on_draw(&mut self, ctx: &mut AppContext<B>) -> Result<(), AppError> {
        let mvp = self.camera.mvp(&pyramid_model(ctx.frame_number()));
        let renderer = ctx.renderer_mut();

        if let Some(faces) = &self.faces {
            if self.textured {
                // One texture per side
                renderer.draw_faces(faces, DrawPass::Faces, &mvp)?;
            } else {
                renderer.draw(faces, DrawPass::Faces, &mvp)?;
            }
        }
        if let Some(edges) = &self.edges {
            renderer.draw(edges, DrawPass::Edges, &mvp)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use orbmesh_app::{App, AppArgs, DummyBackend, RendererConfig};
    use orbmesh_core::math::project_point;
    use orbmesh_core::mesh::PrimitiveTopology;

    use super::*;

    fn run(textured: bool, frames: u64) -> DummyBackend {
        let args = PyramidArgs {
            window: WindowArgs::default(),
            textured,
        };
        let demo = PyramidDemo::new(&args);
        let config = RendererConfig::new(args.window_config(), demo.shaders());
        let mut app = App::new(demo, DummyBackend::new(), config)
            .unwrap()
            .with_max_frames(frames);
        app.run().unwrap();
        app.into_parts().1.into_renderer().into_backend()
    }

    #[test]
    fn test_model_lowers_and_turns() {
        let apex = project_point(&pyramid_model(0), &Vec3::new(0.0, 1.5, 0.0));
        assert!((apex - Vec3::new(0.0, 1.0, 0.0)).norm() < 1e-6);

        // 180 steps of half a degree make a quarter turn
        let corner = project_point(&pyramid_model(179), &Vec3::new(1.0, 0.0, 0.0));
        assert!((corner - Vec3::new(0.0, -0.5, -1.0)).norm() < 1e-4);
    }

    #[test]
    fn test_textured_draws_each_side() {
        let backend = run(true, 2);
        let ranges: Vec<_> = backend
            .draws()
            .map(|d| (d.first_index, d.index_count))
            .collect();
        assert_eq!(ranges.len(), 10);
        assert_eq!(&ranges[..5], &[(0, 6), (6, 3), (9, 3), (12, 3), (15, 3)]);
    }

    #[test]
    fn test_solid_draws_faces_then_edges() {
        let backend = run(false, 1);
        let draws: Vec<_> = backend.draws().collect();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].topology, PrimitiveTopology::TriangleList);
        assert_eq!(draws[0].index_count, 18);
        assert_eq!(draws[1].topology, PrimitiveTopology::LineList);
        assert_eq!(draws[1].index_count, 16);
        assert_ne!(draws[0].program, draws[1].program);
    }

    #[test]
    fn test_parse() {
        let args = PyramidArgs::try_parse_from(["pyramid_demo", "--width", "640"]).unwrap();
        assert!(!args.textured);
        assert_eq!(args.window_width(), 640);
        assert_eq!(args.window_title(), "Pyramid");
    }
}
