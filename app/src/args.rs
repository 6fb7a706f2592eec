//! Command line arguments trait and default implementation.
//!
//! Uses clap for CLI parsing with:
//! - Help text (`--help`)
//! - Validation and clear error messages
//! - [`WindowArgs`] that demos flatten into their own parsers

use clap::Parser;

use crate::config::WindowConfig;

/// Trait for parsing command line arguments.
///
/// Implement this trait to customize how your application handles
/// command line arguments. The trait provides defaults for all methods,
/// making it easy to override only the options you need.
pub trait AppArgs: Sized {
    /// Parse command line arguments.
    fn parse() -> Self;

    /// Get the initial window width.
    ///
    /// Default: 1024
    fn window_width(&self) -> u32 {
        1024
    }

    /// Get the initial window height.
    ///
    /// Default: 768
    fn window_height(&self) -> u32 {
        768
    }

    /// Get the window title.
    ///
    /// Default: "orbmesh"
    fn window_title(&self) -> &str {
        "orbmesh"
    }

    /// Get whether VSync is enabled.
    ///
    /// Default: true
    fn vsync(&self) -> bool {
        true
    }

    /// Get the maximum number of frames to process before auto-exit.
    ///
    /// Default: `None` (run until the handler stops)
    fn max_frames(&self) -> Option<u64> {
        None
    }

    /// Window settings assembled from the other methods.
    fn window_config(&self) -> WindowConfig {
        WindowConfig::with_title(self.window_title())
            .with_size(self.window_width(), self.window_height())
            .with_vsync(self.vsync())
    }
}

/// Window and frame-loop flags shared by every binary.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct WindowArgs {
    /// Initial window width in pixels.
    #[arg(long, default_value = "1024")]
    pub width: u32,

    /// Initial window height in pixels.
    #[arg(long, default_value = "768")]
    pub height: u32,

    /// Disable vertical sync (may cause tearing).
    #[arg(long)]
    pub no_vsync: bool,

    /// Exit after rendering N frames.
    #[arg(long)]
    pub max_frames: Option<u64>,
}

impl Default for WindowArgs {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            no_vsync: false,
            max_frames: None,
        }
    }
}

/// Default command line arguments implementation.
///
/// # Examples
///
/// ```bash
/// # Show help
/// ./my_app --help
///
/// # Render 100 frames into a 800x600 window, then exit
/// ./my_app --width 800 --height 600 --max-frames 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultAppArgs {
    title: String,
    window: WindowArgs,
}

impl Default for DefaultAppArgs {
    fn default() -> Self {
        Self {
            title: "orbmesh".to_string(),
            window: WindowArgs::default(),
        }
    }
}

impl DefaultAppArgs {
    /// Create new default args with a custom title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the maximum number of frames.
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.window.max_frames = Some(max_frames);
        self
    }

    /// Parse from an explicit argument list, first item being the binary name.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        ClapArgs::try_parse_from(args).map(Self::from)
    }
}

/// orbmesh application arguments.
#[derive(Parser, Debug)]
#[command(name = "orbmesh", about = "orbmesh demo application", version)]
struct ClapArgs {
    #[command(flatten)]
    window: WindowArgs,
}

impl From<ClapArgs> for DefaultAppArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            window: args.window,
            ..Default::default()
        }
    }
}

impl AppArgs for DefaultAppArgs {
    fn parse() -> Self {
        ClapArgs::parse().into()
    }

    fn window_width(&self) -> u32 {
        self.window.width
    }

    fn window_height(&self) -> u32 {
        self.window.height
    }

    fn window_title(&self) -> &str {
        &self.title
    }

    fn vsync(&self) -> bool {
        !self.window.no_vsync
    }

    fn max_frames(&self) -> Option<u64> {
        self.window.max_frames
    }
}
