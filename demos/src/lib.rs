//! # orbmesh Demos
//!
//! Demo scenes for the orbmesh mesh generators.
//!
//! ## Available Demos
//!
//! - `sphere_demo` - Textured UV sphere with a wireframe overlay
//! - `box_demo` - Box spinning about +Y, solid or textured per face
//! - `pyramid_demo` - Square pyramid turning in place, outlined or textured per side
//!
//! Every demo renders through the recording [`DummyBackend`], so a run
//! without `--max-frames` stops after [`HEADLESS_FRAME_LIMIT`] frames.

use orbmesh_app::{App, AppArgs, AppError, AppHandler, DummyBackend, ShaderSources};

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Frames rendered when no `--max-frames` is given.
pub const HEADLESS_FRAME_LIMIT: u64 = 120;

/// Run a demo handler on the dummy backend and return the presented frame count.
pub fn run_headless<H, A>(handler: H, args: &A, shaders: ShaderSources) -> Result<u64, AppError>
where
    H: AppHandler<DummyBackend>,
    A: AppArgs,
{
    let app = App::from_args(handler, DummyBackend::new(), args, shaders)?;
    let mut app = match args.max_frames() {
        Some(_) => app,
        None => app.with_max_frames(HEADLESS_FRAME_LIMIT),
    };
    app.run()
}

/// Implement [`AppArgs`] for a clap parser that flattens a `window: WindowArgs` field.
macro_rules! impl_app_args {
    ($args:ty, $title:expr) => {
        impl orbmesh_app::AppArgs for $args {
            fn parse() -> Self {
                <Self as clap::Parser>::parse()
            }

            fn window_width(&self) -> u32 {
                self.window.width
            }

            fn window_height(&self) -> u32 {
                self.window.height
            }

            fn window_title(&self) -> &str {
                $title
            }

            fn vsync(&self) -> bool {
                !self.window.no_vsync
            }

            fn max_frames(&self) -> Option<u64> {
                self.window.max_frames
            }
        }
    };
}

pub(crate) use impl_app_args;

pub mod box_scene;
pub mod pyramid_scene;
pub mod sphere_scene;
