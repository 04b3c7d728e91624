//! Vitrine - interactive 3D model viewer
//!
//! Headless entry point: loads a model by URL, polls the viewer exactly as
//! a rendering surface would, and reports the computed camera framing and
//! time-of-day orientation.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use vitrine_core::rotation_angle;
use vitrine_viewer::{Viewer, ViewerConfig, ViewerState};

#[derive(Parser)]
#[command(name = "vitrine", about = "Load a model and report its viewer framing")]
struct Args {
    /// URL of the scene file to load
    url: String,

    /// Time of day in hours (0-24) applied to the model's orientation
    #[arg(long, default_value_t = 12.0)]
    time: f32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 50.0)]
    fov: f32,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let args = Args::parse();

    let config = ViewerConfig {
        fov_degrees: args.fov,
        ..Default::default()
    };
    let mut viewer = Viewer::with_config(config).context("Failed to create viewer")?;
    viewer.set_time_of_day(args.time);
    viewer.select_asset(args.url);

    let mut last_phase = None;
    loop {
        viewer.tick();
        match viewer.state() {
            ViewerState::Idle | ViewerState::Loading { .. } => {
                let phase = viewer.load_phase();
                if phase != last_phase {
                    if let Some(phase) = phase {
                        info!("{}", phase.description());
                    }
                    last_phase = phase;
                }
                std::thread::sleep(Duration::from_millis(16));
            }
            ViewerState::Ready { mesh, frame } => {
                info!(
                    "Loaded '{}': {} vertices, {} triangles",
                    mesh.name,
                    mesh.vertex_count(),
                    mesh.triangle_count()
                );
                info!(
                    "Camera at ({:.3}, {:.3}, {:.3}), distance {:.3}, fov {:.1} deg",
                    frame.position.x,
                    frame.position.y,
                    frame.position.z,
                    frame.distance,
                    frame.fov_y_radians.to_degrees()
                );
                info!(
                    "Orientation at {:.1}h: {:.3} rad about the vertical axis",
                    viewer.time_of_day(),
                    rotation_angle(viewer.time_of_day())
                );
                break;
            }
            ViewerState::Error { url, cause } => {
                bail!("Failed to load '{}': {}", url, cause);
            }
        }
    }

    Ok(())
}
