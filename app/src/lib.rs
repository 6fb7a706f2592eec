//! # orbmesh App
//!
//! Application framework for rendering the orbmesh demo meshes.
//!
//! The crate draws the boundary between CPU mesh data from `orbmesh-core`
//! and a graphics API. The API sits behind the [`RenderBackend`] trait;
//! [`DummyBackend`] records calls instead of touching a GPU.
//!
//! ## Overview
//!
//! - [`RendererConfig`] - Window settings and shader sources, passed explicitly
//! - [`MeshRenderer`] - Uploads [`CpuMesh`](orbmesh_core::mesh::CpuMesh) values and issues draws
//! - [`AppHandler`] - Trait for per-frame application logic
//! - [`AppArgs`] - Trait for parsing command line arguments
//! - [`App`] - Frame loop driving a handler
//!
//! ## Example
//!
//! ```ignore
//! use orbmesh_app::{App, AppArgs, DefaultAppArgs, DummyBackend, ShaderSources};
//!
//! fn main() -> Result<(), orbmesh_app::AppError> {
//!     orbmesh_app::init_logging();
//!     let args = DefaultAppArgs::parse();
//!     let mut app = App::from_args(MyApp::default(), DummyBackend::new(), &args, ShaderSources::textured())?;
//!     app.run()?;
//!     Ok(())
//! }
//! ```

mod app;
mod args;
mod backend;
mod config;
mod context;
mod error;
mod handler;
mod renderer;

pub use app::App;
pub use args::{AppArgs, DefaultAppArgs, WindowArgs};
pub use backend::{
    BackendCommand, BufferHandle, DrawCommand, DummyBackend, ProgramHandle, RenderBackend,
};
pub use config::{RendererConfig, ShaderSources, ShaderStageSource, WindowConfig};
pub use context::AppContext;
pub use error::AppError;
pub use handler::AppHandler;
pub use renderer::{DrawPass, GpuMesh, MeshRenderer};

/// App library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the app subsystem.
pub fn init() {
    log::info!("orbmesh App v{} initialized", VERSION);
}

/// Install the env_logger backend with an `info` default filter.
///
/// Binaries call this once at startup; later calls are ignored.
pub fn init_logging() {
    let result =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    if result.is_err() {
        log::debug!("Logger already initialized");
    }

    orbmesh_core::init();
    init();
}
