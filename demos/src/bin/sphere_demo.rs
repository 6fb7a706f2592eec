//! # Sphere Demo
//!
//! Textured UV sphere with a black wireframe overlay, viewed from (3, 3, 3).
//!
//! ```bash
//! sphere_demo --sectors 72 --stacks 36 --close-edge-rings --max-frames 10
//! ```

use std::process::ExitCode;

use orbmesh_app::AppArgs;
use orbmesh_demos::sphere_scene::{SphereArgs, SphereDemo};

fn main() -> ExitCode {
    orbmesh_app::init_logging();
    let args = SphereArgs::parse();

    let result = SphereDemo::new(&args).and_then(|demo| {
        let shaders = demo.shaders();
        orbmesh_demos::run_headless(demo, &args, shaders)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Sphere demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}
