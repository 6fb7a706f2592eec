//! Main application struct.

use std::time::Instant;

use crate::args::AppArgs;
use crate::backend::RenderBackend;
use crate::config::{RendererConfig, ShaderSources};
use crate::context::AppContext;
use crate::error::AppError;
use crate::handler::AppHandler;
use crate::renderer::MeshRenderer;

/// Main application driving a handler through the frame loop.
///
/// The loop runs `on_update`, `on_draw` and presents, until the handler
/// asks to stop or the frame limit is reached.
pub struct App<H, B>
where
    H: AppHandler<B>,
    B: RenderBackend,
{
    handler: H,
    context: AppContext<B>,
    max_frames: Option<u64>,
    fixed_timestep: Option<f32>,
}

impl<H, B> App<H, B>
where
    H: AppHandler<B>,
    B: RenderBackend,
{
    /// Create an application over an explicit renderer config.
    pub fn new(handler: H, backend: B, config: RendererConfig) -> Result<Self, AppError> {
        let renderer = MeshRenderer::new(backend, config)?;
        Ok(Self {
            handler,
            context: AppContext::new(renderer),
            max_frames: None,
            fixed_timestep: None,
        })
    }

    /// Create an application from parsed arguments and the given shaders.
    pub fn from_args<A: AppArgs>(
        handler: H,
        backend: B,
        args: &A,
        shaders: ShaderSources,
    ) -> Result<Self, AppError> {
        let config = RendererConfig::new(args.window_config(), shaders);
        let app = Self::new(handler, backend, config)?;
        Ok(match args.max_frames() {
            Some(max_frames) => app.with_max_frames(max_frames),
            None => app,
        })
    }

    /// Stop after `max_frames` frames.
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    /// Advance time by `seconds` per frame instead of reading the clock.
    pub fn with_fixed_timestep(mut self, seconds: f32) -> Self {
        self.fixed_timestep = Some(seconds);
        self
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn context(&self) -> &AppContext<B> {
        &self.context
    }

    /// Split the application into its handler and context.
    pub fn into_parts(self) -> (H, AppContext<B>) {
        (self.handler, self.context)
    }

    /// Run the frame loop and return the number of presented frames.
    ///
    /// `on_shutdown` runs even when initialization or a frame fails; the
    /// first error is returned afterwards.
    pub fn run(&mut self) -> Result<u64, AppError> {
        log::info!(
            "Starting '{}' on {}",
            self.context.renderer.config().window.title,
            self.context.renderer.backend().name()
        );
        if self.max_frames.is_none() {
            log::warn!("No frame limit set, running until the handler stops");
        }

        let result = self
            .handler
            .on_init(&mut self.context)
            .and_then(|()| self.run_frames());

        self.handler.on_shutdown(&mut self.context);

        match &result {
            Ok(frames) => log::info!("Finished after {frames} frames"),
            Err(e) => log::error!("Stopped on error: {e}"),
        }
        result
    }

    fn run_frames(&mut self) -> Result<u64, AppError> {
        let start = Instant::now();
        let mut last_frame = start;

        loop {
            if let Some(max_frames) = self.max_frames
                && self.context.frame_number >= max_frames
            {
                log::info!("Reached max frames limit ({max_frames}), exiting");
                break;
            }

            match self.fixed_timestep {
                Some(step) => {
                    self.context.delta_time = step;
                    self.context.elapsed_time = step * self.context.frame_number as f32;
                }
                None => {
                    let now = Instant::now();
                    self.context.delta_time = (now - last_frame).as_secs_f32();
                    self.context.elapsed_time = (now - start).as_secs_f32();
                    last_frame = now;
                }
            }

            if !self.handler.on_update(&mut self.context) {
                log::info!("Handler requested exit");
                break;
            }

            self.handler.on_draw(&mut self.context)?;
            self.context.renderer.end_frame()?;
            self.context.frame_number += 1;
        }

        Ok(self.context.frame_number)
    }
}
