//! Textured UV sphere with a black wireframe overlay.

use clap::Parser;

use orbmesh_app::{
    AppContext, AppError, AppHandler, DrawPass, GpuMesh, RenderBackend, ShaderSources, WindowArgs,
};
use orbmesh_core::camera::FixedCamera;
use orbmesh_core::math::Mat4;
use orbmesh_core::mesh::generators::generate_sphere_with_edges;
use orbmesh_core::mesh::{EdgeRings, SphereParams};

use crate::impl_app_args;

/// Command line of `sphere_demo`.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sphere_demo",
    about = "Textured UV sphere with a wireframe overlay",
    version
)]
pub struct SphereArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Sphere radius.
    #[arg(long, default_value = "1.0")]
    pub radius: f32,

    /// Longitudinal slices, at least 3.
    #[arg(long, default_value = "36")]
    pub sectors: u32,

    /// Latitudinal rings, at least 1.
    #[arg(long, default_value = "18")]
    pub stacks: u32,

    /// Also outline the last latitude ring.
    #[arg(long)]
    pub close_edge_rings: bool,

    /// Skip the wireframe overlay.
    #[arg(long)]
    pub no_edges: bool,
}

impl_app_args!(SphereArgs, "Textured Sphere");

pub struct SphereDemo {
    params: SphereParams,
    rings: EdgeRings,
    draw_edges: bool,
    camera: FixedCamera,
    faces: Option<GpuMesh>,
    edges: Option<GpuMesh>,
}

impl SphereDemo {
    pub fn new(args: &SphereArgs) -> Result<Self, AppError> {
        let params = SphereParams::new(args.radius, args.sectors, args.stacks)?;
        let rings = if args.close_edge_rings {
            EdgeRings::Closed
        } else {
            EdgeRings::OmitLastRing
        };

        Ok(Self {
            params,
            rings,
            draw_edges: !args.no_edges,
            camera: FixedCamera::default(),
            faces: None,
            edges: None,
        })
    }

    /// Textured faces, plus the edge program unless edges are disabled.
    pub fn shaders(&self) -> ShaderSources {
        if self.draw_edges {
            ShaderSources::textured()
        } else {
            ShaderSources::textured().without_edges()
        }
    }
}

impl<B: RenderBackend> AppHandler<B> for SphereDemo {
    fn on_init(&mut self, ctx: &mut AppContext<B>) -> Result<(), AppError> {
        log::info!(
            "Initializing Sphere Demo (radius {}, {}x{} grid)",
            self.params.radius(),
            self.params.grid().sectors(),
            self.params.grid().stacks()
        );
        self.camera = self.camera.with_viewport(ctx.width(), ctx.height());

        let meshes = generate_sphere_with_edges(&self.params, self.rings)?;
        let renderer = ctx.renderer_mut();
        let faces = renderer.upload(&meshes.faces)?;
        if self.draw_edges {
            self.edges = Some(renderer.upload_shared(&meshes.edges, &faces)?);
        }
        self.faces = Some(faces);
        Ok(())
    }

    fn on_draw(&mut self, ctx: &mut AppContext<B>) -> Result<(), AppError> {
        let mvp = self.camera.mvp(&Mat4::identity());
        let renderer = ctx.renderer_mut();

        if let Some(faces) = &self.faces {
            renderer.draw(faces, DrawPass::Faces, &mvp)?;
        }
        if let Some(edges) = &self.edges {
            renderer.draw(edges, DrawPass::Edges, &mvp)?;
        }
        Ok(())
    }

    fn on_shutdown(&mut self, _ctx: &mut AppContext<B>) {
        log::info!("Shutting down Sphere Demo");
    }
}
