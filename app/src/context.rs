//! Per-frame application context.

use crate::backend::RenderBackend;
use crate::renderer::MeshRenderer;

/// Context handed to every [`AppHandler`](crate::AppHandler) callback.
///
/// Provides the renderer together with frame timing.
pub struct AppContext<B: RenderBackend> {
    pub(crate) renderer: MeshRenderer<B>,
    /// Current frame number.
    pub(crate) frame_number: u64,
    /// Delta time since last frame in seconds.
    pub(crate) delta_time: f32,
    /// Time since application start in seconds.
    pub(crate) elapsed_time: f32,
}

impl<B: RenderBackend> AppContext<B> {
    pub(crate) fn new(renderer: MeshRenderer<B>) -> Self {
        Self {
            renderer,
            frame_number: 0,
            delta_time: 0.0,
            elapsed_time: 0.0,
        }
    }

    /// Get the renderer.
    pub fn renderer(&self) -> &MeshRenderer<B> {
        &self.renderer
    }

    /// Get the renderer for uploads and draws.
    pub fn renderer_mut(&mut self) -> &mut MeshRenderer<B> {
        &mut self.renderer
    }

    /// Give the renderer back, dropping the context.
    pub fn into_renderer(self) -> MeshRenderer<B> {
        self.renderer
    }

    /// Get the window width in pixels.
    pub fn width(&self) -> u32 {
        self.renderer.config().window.width
    }

    /// Get the window height in pixels.
    pub fn height(&self) -> u32 {
        self.renderer.config().window.height
    }

    /// Width over height of the window.
    pub fn aspect_ratio(&self) -> f32 {
        self.renderer.config().window.aspect_ratio()
    }

    /// Get the current frame number.
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Get the delta time since last frame in seconds.
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the elapsed time since application start in seconds.
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }
}
