//! Application handler trait.

use crate::backend::RenderBackend;
use crate::context::AppContext;
use crate::error::AppError;

/// Trait for handling application events and draw requests.
///
/// # Lifecycle
///
/// 1. `on_init` - Called once before the first frame
/// 2. `on_update` - Called every frame before drawing
/// 3. `on_draw` - Called every frame to render
/// 4. `on_shutdown` - Called once when the loop ends, even after an error
///
/// # Example
///
/// ```ignore
/// use orbmesh_app::{AppContext, AppError, AppHandler, DrawPass, RenderBackend};
///
/// struct Spinner {
///     mesh: Option<GpuMesh>,
/// }
///
/// impl<B: RenderBackend> AppHandler<B> for Spinner {
///     fn on_init(&mut self, ctx: &mut AppContext<B>) -> Result<(), AppError> {
///         let mesh = generate_sphere(1.0, 36, 18)?;
///         self.mesh = Some(ctx.renderer_mut().upload(&mesh)?);
///         Ok(())
///     }
///
///     fn on_draw(&mut self, ctx: &mut AppContext<B>) -> Result<(), AppError> {
///         // Issue draws, the App presents afterwards
///         Ok(())
///     }
/// }
/// ```
pub trait AppHandler<B: RenderBackend> {
    /// Called once when the application initializes.
    ///
    /// Use this to upload meshes.
    fn on_init(&mut self, _ctx: &mut AppContext<B>) -> Result<(), AppError> {
        Ok(())
    }

    /// Called every frame before drawing.
    ///
    /// Returns `true` to continue running, `false` to exit.
    fn on_update(&mut self, _ctx: &mut AppContext<B>) -> bool {
        true
    }

    /// Called every frame to render.
    fn on_draw(&mut self, ctx: &mut AppContext<B>) -> Result<(), AppError>;

    /// Called when the application is closing.
    fn on_shutdown(&mut self, _ctx: &mut AppContext<B>) {}
}
