//! Frame loop tests against the recording backend.

use rstest::rstest;

use orbmesh_app::{
    App, AppContext, AppError, AppHandler, BackendCommand, DefaultAppArgs, DrawPass,
    DummyBackend, GpuMesh, RenderBackend, RendererConfig, ShaderSources,
};
use orbmesh_core::camera::FixedCamera;
use orbmesh_core::math::Mat4;
use orbmesh_core::mesh::generators::generate_sphere_with_edges;
use orbmesh_core::mesh::{EdgeRings, PrimitiveTopology, SphereParams};

/// Draws a sphere and its edges every frame.
#[derive(Default)]
struct SphereHandler {
    params: Option<SphereParams>,
    faces: Option<GpuMesh>,
    edges: Option<GpuMesh>,
    updates: u64,
    stop_after: Option<u64>,
    shutdown: bool,
}

impl SphereHandler {
    fn new(sectors: u32, stacks: u32) -> Self {
        Self {
            params: SphereParams::new(1.0, sectors, stacks).ok(),
            ..Default::default()
        }
    }
}

impl<B: RenderBackend> AppHandler<B> for SphereHandler {
    fn on_init(&mut self, ctx: &mut AppContext<B>) -> Result<(), AppError> {
        let params = self
            .params
            .ok_or_else(|| AppError::InvalidConfig("bad sphere".into()))?;
        let meshes = generate_sphere_with_edges(&params, EdgeRings::OmitLastRing)?;
        let renderer = ctx.renderer_mut();
        let faces = renderer.upload(&meshes.faces)?;
        self.edges = Some(renderer.upload_shared(&meshes.edges, &faces)?);
        self.faces = Some(faces);
        Ok(())
    }

    fn on_update(&mut self, _ctx: &mut AppContext<B>) -> bool {
        self.updates += 1;
        self.stop_after.is_none_or(|n| self.updates <= n)
    }

    fn on_draw(&mut self, ctx: &mut AppContext<B>) -> Result<(), AppError> {
        let camera = FixedCamera::default().with_viewport(ctx.width(), ctx.height());
        let mvp = camera.mvp(&Mat4::identity());
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
        self.shutdown = true;
    }
}

fn textured_app(handler: SphereHandler, frames: u64) -> App<SphereHandler, DummyBackend> {
    let config = RendererConfig::default().with_shaders(ShaderSources::textured());
    App::new(handler, DummyBackend::new(), config)
        .unwrap()
        .with_max_frames(frames)
        .with_fixed_timestep(1.0 / 60.0)
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(10)]
fn test_runs_requested_frames(#[case] frames: u64) {
    let mut app = textured_app(SphereHandler::new(36, 18), frames);
    assert_eq!(app.run().unwrap(), frames);

    let (handler, ctx) = app.into_parts();
    assert!(handler.shutdown);
    assert_eq!(ctx.frame_number(), frames);

    let backend = ctx.renderer().backend();
    assert_eq!(backend.present_count() as u64, frames);
    assert_eq!(backend.draws().count() as u64, 2 * frames);
}

#[rstest]
#[case(4, 2)]
#[case(36, 18)]
fn test_edges_share_face_vertex_buffers(#[case] sectors: u32, #[case] stacks: u32) {
    let mut app = textured_app(SphereHandler::new(sectors, stacks), 1);
    app.run().unwrap();
    let (_, ctx) = app.into_parts();
    let backend = ctx.renderer().backend();

    let vertex_buffers = backend
        .commands()
        .iter()
        .filter(|c| matches!(c, BackendCommand::CreateVertexBuffer { .. }))
        .count();
    assert_eq!(vertex_buffers, 2);

    let draws: Vec<_> = backend.draws().collect();
    assert_eq!(draws[0].topology, PrimitiveTopology::TriangleList);
    assert_eq!(draws[1].topology, PrimitiveTopology::LineList);
    assert_eq!(draws[0].vertex_buffers, draws[1].vertex_buffers);
    assert_ne!(draws[0].program, draws[1].program);
    assert_eq!(draws[0].index_count, 6 * sectors * stacks);
    assert_eq!(
        draws[1].index_count,
        2 * (sectors * stacks + (sectors + 1) * stacks)
    );
}

#[test]
fn test_handler_can_stop_the_loop() {
    let handler = SphereHandler {
        stop_after: Some(4),
        ..SphereHandler::new(8, 4)
    };
    let mut app = textured_app(handler, 100);
    assert_eq!(app.run().unwrap(), 4);
    assert!(app.handler().shutdown);
}

#[test]
fn test_init_failure_still_shuts_down() {
    let mut app = textured_app(SphereHandler::default(), 5);
    assert!(matches!(app.run(), Err(AppError::InvalidConfig(_))));
    assert!(app.handler().shutdown);
    assert_eq!(app.context().renderer().backend().present_count(), 0);
}

#[test]
fn test_missing_edge_program_fails_the_frame() {
    let config =
        RendererConfig::default().with_shaders(ShaderSources::textured().without_edges());
    let mut app = App::new(SphereHandler::new(8, 4), DummyBackend::new(), config)
        .unwrap()
        .with_max_frames(3);
    assert!(matches!(app.run(), Err(AppError::InvalidConfig(_))));
    assert_eq!(app.context().frame_number(), 0);
}

#[test]
fn test_from_args_applies_window_and_limit() {
    let args = DefaultAppArgs::with_title("sphere")
        .with_size(800, 600)
        .with_max_frames(2);
    let mut app = App::from_args(
        SphereHandler::new(8, 4),
        DummyBackend::new(),
        &args,
        ShaderSources::textured(),
    )
    .unwrap();

    assert_eq!(app.context().width(), 800);
    assert_eq!(app.context().height(), 600);
    assert_eq!(app.run().unwrap(), 2);
}

#[test]
fn test_fixed_timestep_advances_time() {
    struct Clock(Vec<f32>);

    impl AppHandler<DummyBackend> for Clock {
        fn on_draw(&mut self, ctx: &mut AppContext<DummyBackend>) -> Result<(), AppError> {
            self.0.push(ctx.elapsed_time());
            Ok(())
        }
    }

    let mut app = App::new(Clock(Vec::new()), DummyBackend::new(), RendererConfig::default())
        .unwrap()
        .with_max_frames(3)
        .with_fixed_timestep(0.5);
    app.run().unwrap();
    assert_eq!(app.handler().0, vec![0.0, 0.5, 1.0]);
}

#[test]
fn test_zero_sized_window_is_rejected() {
    let args = DefaultAppArgs::default().with_size(0, 768);
    let result = App::from_args(
        SphereHandler::new(8, 4),
        DummyBackend::new(),
        &args,
        ShaderSources::textured(),
    );
    assert!(matches!(result, Err(AppError::InvalidConfig(_))));
}

#[rstest]
#[case(&["orbmesh"], true)]
#[case(&["orbmesh", "--no-vsync"], false)]
fn test_vsync_flag_reaches_backend(#[case] argv: &[&str], #[case] vsync: bool) {
    let args = DefaultAppArgs::try_parse_from(argv.iter().copied()).unwrap();
    let app = App::from_args(
        SphereHandler::new(8, 4),
        DummyBackend::new(),
        &args,
        ShaderSources::textured(),
    )
    .unwrap();
    assert_eq!(app.context().renderer().backend().vsync(), Some(vsync));
}
