//! # Box Demo
//!
//! Unit box spinning about +Y at half a radian per second.
//! `--textured` samples a texture on every face.

use std::process::ExitCode;

use orbmesh_app::AppArgs;
use orbmesh_demos::box_scene::{BoxArgs, BoxDemo};

fn main() -> ExitCode {
    orbmesh_app::init_logging();
    let args = BoxArgs::parse();

    let demo = BoxDemo::new(&args);
    let shaders = demo.shaders();
    match orbmesh_demos::run_headless(demo, &args, shaders) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Box demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}
