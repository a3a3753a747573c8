//! # Orbis Viewer
//!
//! Opens a window, optionally loads an OBJ mesh and drives the camera
//! pipeline every frame. Matrices are logged instead of drawn.
//!
//! ## Usage:
//! ```bash
//! RUST_LOG=orbis=debug cargo run --example viewer -- [model.obj] [--orbit] [--spin]
//! ```
//!
//! ## Controls:
//! - `W`/`S` move forward/back, `A`/`D` strafe, `E`/`Space` up, `Q` down
//! - right drag looks around (free-fly) or orbits (orbital)
//! - left drag rotates the object
//! - `Escape` quits

use anyhow::Context;
use orbis::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut mesh_path = None;
    let mut config = ViewerConfig::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--orbit" => config = config.with_camera_mode(CameraMode::Orbital),
            "--spin" => config = config.with_object_auto_rotate(true),
            _ if arg.starts_with("--") => anyhow::bail!("unknown flag: {arg}"),
            _ => mesh_path = Some(arg),
        }
    }

    let mut app = ViewerApp::new(config).context("failed to start the viewer")?;
    if let Some(path) = mesh_path {
        let mesh = app
            .load_mesh(&path)
            .with_context(|| format!("failed to load {path}"))?;
        if let Some(texture) = &mesh.diffuse_texture {
            log::info!("Diffuse texture: {}", texture.display());
        }
    }

    app.run()?;
    Ok(())
}
