//! # orbmesh core
//!
//! CPU-side geometry for the orbmesh demos: the parametric UV sphere,
//! literal box and pyramid tables, the [`mesh::CpuMesh`] container a
//! rendering layer uploads, and the fixed camera every demo looks through.
//!
//! Nothing here touches a GPU or a window.

pub mod camera;
pub mod error;
pub mod math;
pub mod mesh;

pub use error::MeshError;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core version once at startup.
pub fn init() {
    log::info!("orbmesh core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
