//! # Pyramid Demo
//!
//! Square pyramid turning half a degree per frame. Red faces with black
//! edges by default, one textured draw per side with `--textured`.

use std::process::ExitCode;

use orbmesh_app::AppArgs;
use orbmesh_demos::pyramid_scene::{PyramidArgs, PyramidDemo};

fn main() -> ExitCode {
    orbmesh_app::init_logging();
    let args = PyramidArgs::parse();

    let demo = PyramidDemo::new(&args);
    let shaders = demo.shaders();
    match orbmesh_demos::run_headless(demo, &args, shaders) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Pyramid demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}
