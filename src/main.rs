//! Seashade - procedural ocean surface preview
//!
//! Builds the ocean mesh once, feeds time and camera position every frame,
//! and writes the shaded surface to PNG.

use clap::Parser;

use seashade::camera::CameraSystem;
use seashade::cli::Args;
use seashade::ocean::OceanSystem;
use seashade::params::OceanPalette;
use seashade::rendering::RenderSystem;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Initialize systems
    let mut ocean = OceanSystem::new(&args.surface_config(), OceanPalette::default())?;
    let camera = CameraSystem::new(args.parse_camera_preset());
    let renderer = RenderSystem::new(args.render_config())?;

    match args.recording_config() {
        Some(recording) => {
            let frames = renderer.record(&mut ocean, &camera, &recording)?;
            println!(
                "Wrote {} frames to {}",
                frames,
                recording.output_dir.display()
            );
        }
        None => {
            let path = args.still_path();
            renderer.render_to_file(&mut ocean, &camera, args.time, &path)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
