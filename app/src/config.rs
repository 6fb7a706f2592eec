//! Renderer configuration.
//!
//! Window settings and shader sources are grouped in a [`RendererConfig`]
//! handed to [`MeshRenderer::new`](crate::MeshRenderer::new). Nothing here is
//! global: two renderers may run with different shaders side by side.

/// Window settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "orbmesh".to_string(),
            width: 1024,
            height: 768,
            vsync: true,
        }
    }
}

impl WindowConfig {
    /// Create a window config with a custom title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Enable or disable vertical sync.
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Width over height, or 1.0 for a zero-height window.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Vertex and fragment source of one shader program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderStageSource {
    pub vertex: String,
    pub fragment: String,
}

const TEXTURED_VERTEX: &str = r#"#version 330 core
layout(location = 0) in vec3 vertexPosition_modelspace;
layout(location = 1) in vec2 vertexTexCoord;

out vec2 fragmentTexCoord;
uniform mat4 MVP;

void main()
{
    gl_Position = MVP * vec4(vertexPosition_modelspace, 1.0);
    fragmentTexCoord = vertexTexCoord;
}
"#;

const TEXTURED_FRAGMENT: &str = r#"#version 330 core
in vec2 fragmentTexCoord;
out vec4 FragColor;
uniform sampler2D textureSampler;

void main()
{
    FragColor = vec4(texture(textureSampler, fragmentTexCoord).rgb, 1.0);
}
"#;

const SOLID_VERTEX: &str = r#"#version 330 core
layout(location = 0) in vec3 vertexPosition_modelspace;
uniform mat4 MVP;

void main()
{
    gl_Position = MVP * vec4(vertexPosition_modelspace, 1);
}
"#;

const SOLID_FRAGMENT: &str = r#"#version 330 core
out vec3 color;

void main()
{
    color = vec3(1, 0, 0);
}
"#;

const EDGE_FRAGMENT: &str = r#"#version 330 core
out vec3 color;

void main()
{
    color = vec3(0, 0, 0);
}
"#;

/// Shader sources for the face program and the optional edge program.
///
/// The edge program reuses the vertex stage and swaps in `edge_fragment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
    pub edge_fragment: Option<String>,
}

impl ShaderSources {
    /// Texture-sampling faces with black edges.
    pub fn textured() -> Self {
        Self {
            vertex: TEXTURED_VERTEX.to_string(),
            fragment: TEXTURED_FRAGMENT.to_string(),
            edge_fragment: Some(EDGE_FRAGMENT.to_string()),
        }
    }

    /// Red faces with black edges.
    pub fn solid_color() -> Self {
        Self {
            vertex: SOLID_VERTEX.to_string(),
            fragment: SOLID_FRAGMENT.to_string(),
            edge_fragment: Some(EDGE_FRAGMENT.to_string()),
        }
    }

    /// Drop the edge program.
    pub fn without_edges(mut self) -> Self {
        self.edge_fragment = None;
        self
    }

    pub fn face_program(&self) -> ShaderStageSource {
        ShaderStageSource {
            vertex: self.vertex.clone(),
            fragment: self.fragment.clone(),
        }
    }

    pub fn edge_program(&self) -> Option<ShaderStageSource> {
        self.edge_fragment.as_ref().map(|fragment| ShaderStageSource {
            vertex: self.vertex.clone(),
            fragment: fragment.clone(),
        })
    }
}

impl Default for ShaderSources {
    fn default() -> Self {
        Self::solid_color()
    }
}

/// Everything a [`MeshRenderer`](crate::MeshRenderer) needs to start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RendererConfig {
    pub window: WindowConfig,
    pub shaders: ShaderSources,
}

impl RendererConfig {
    pub fn new(window: WindowConfig, shaders: ShaderSources) -> Self {
        Self { window, shaders }
    }

    /// Set the window settings.
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Set the shader sources.
    pub fn with_shaders(mut self, shaders: ShaderSources) -> Self {
        self.shaders = shaders;
        self
    }

    /// Reject zero-sized windows and empty shader sources.
    pub fn validate(&self) -> Result<(), crate::AppError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(crate::AppError::config(format!(
                "window size {}x{} has a zero dimension",
                self.window.width, self.window.height
            )));
        }

        let stages = [
            ("vertex", Some(&self.shaders.vertex)),
            ("fragment", Some(&self.shaders.fragment)),
            ("edge fragment", self.shaders.edge_fragment.as_ref()),
        ];
        for (stage, source) in stages {
            if source.is_some_and(|s| s.trim().is_empty()) {
                return Err(crate::AppError::config(format!("{stage} shader source is empty")));
            }
        }

        Ok(())
    }
}
