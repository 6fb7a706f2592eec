//! Unit box spinning about +Y.

use clap::Parser;

use orbmesh_app::{
    AppContext, AppError, AppHandler, DrawPass, GpuMesh, RenderBackend, ShaderSources, WindowArgs,
};
use orbmesh_core::camera::FixedCamera;
use orbmesh_core::math::{Mat4, Vec3, mat4_from_rotation_y};
use orbmesh_core::mesh::generators::{generate_box, generate_textured_box};

use crate::impl_app_args;

/// Spin speed in radians per second.
pub const BOX_SPIN_SPEED: f32 = 0.5;

/// Command line of `box_demo`.
#[derive(Parser, Debug, Clone)]
#[command(name = "box_demo", about = "Box spinning about the vertical axis", version)]
pub struct BoxArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Texture each face instead of filling it with a solid color.
    #[arg(long)]
    pub textured: bool,
}

impl_app_args!(BoxArgs, "Box");

/// Model matrix after `elapsed` seconds.
pub fn box_model(elapsed: f32) -> Mat4 {
    mat4_from_rotation_y(elapsed * BOX_SPIN_SPEED)
}

pub struct BoxDemo {
    textured: bool,
    camera: FixedCamera,
    mesh: Option<GpuMesh>,
}

impl BoxDemo {
    pub fn new(args: &BoxArgs) -> Self {
        Self {
            textured: args.textured,
            camera: FixedCamera::default(),
            mesh: None,
        }
    }

    pub fn shaders(&self) -> ShaderSources {
        if self.textured {
            ShaderSources::textured().without_edges()
        } else {
            ShaderSources::solid_color().without_edges()
        }
    }
}

impl<B: RenderBackend> AppHandler<B> for BoxDemo {
    fn on_init(&mut self, ctx: &mut AppContext<B>) -> Result<(), AppError> {
        log::info!("Initializing Box Demo (textured: {})", self.textured);
        self.camera = self.camera.with_viewport(ctx.width(), ctx.height());

        let size = Vec3::new(1.0, 1.0, 1.0);
        let mesh = if self.textured {
            generate_textured_box(Vec3::zeros(), size)?
        } else {
            generate_box(Vec3::zeros(), size)?
        };
        self.mesh = Some(ctx.renderer_mut().upload(&mesh)?);
        Ok(())
    }

    fn on_draw(&mut self, ctx: &mut AppContext<B>) -> Result<(), AppError> {
        let mvp = self.camera.mvp(&box_model(ctx.elapsed_time()));
        match &self.mesh {
            Some(mesh) => ctx.renderer_mut().draw(mesh, DrawPass::Faces, &mvp),
            None => Ok(()),
        }
    }
}
