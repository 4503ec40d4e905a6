//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{
    CameraPreset, FixedCamera, OrbitCamera, RecordingConfig, RenderConfig, SurfaceConfig,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "seashade")]
#[command(about = "Procedural ocean surface preview renderer", long_about = None)]
pub struct Args {
    /// Shading time of the still frame (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    pub time: f32,

    /// Record a frame sequence instead of a still (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,

    /// Recording frame rate
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Output PNG (still) or directory (recording)
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Image width (pixels)
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Image height (pixels)
    #[arg(long, default_value_t = 360)]
    pub height: u32,

    /// Camera preset: fixed (default), orbit
    #[arg(long, value_name = "PRESET", default_value = "fixed")]
    pub camera_preset: String,

    /// Mesh subdivisions per side
    #[arg(long, default_value_t = 128)]
    pub segments: u32,

    /// Seed for the mesh height jitter
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Height jitter half-range (meters)
    #[arg(long, value_name = "METERS", default_value_t = 0.05)]
    pub jitter: f32,
}

impl Args {
    /// Parse camera preset from command-line arguments
    pub fn parse_camera_preset(&self) -> CameraPreset {
        match self.camera_preset.to_lowercase().as_str() {
            "fixed" => CameraPreset::Fixed(FixedCamera::default()),
            "orbit" => CameraPreset::Orbit(OrbitCamera::default()),
            other => {
                log::warn!("Unknown camera preset '{}', using fixed", other);
                CameraPreset::Fixed(FixedCamera::default())
            }
        }
    }

    /// Surface mesh configuration with command-line overrides
    pub fn surface_config(&self) -> SurfaceConfig {
        SurfaceConfig {
            width_segments: self.segments,
            height_segments: self.segments,
            height_jitter_range: self.jitter,
            seed: self.seed,
            ..SurfaceConfig::default()
        }
    }

    /// Render configuration with command-line overrides
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width,
            window_height: self.height,
            ..RenderConfig::default()
        }
    }

    /// Create recording configuration if recording mode is enabled
    pub fn recording_config(&self) -> Option<RecordingConfig> {
        self.record.map(|duration| {
            let output_dir = self
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from("recording"));
            let mut config = RecordingConfig::new(duration, output_dir);
            config.fps = self.fps;
            config
        })
    }

    /// Output path of the still frame
    pub fn still_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from("ocean.png"))
    }
}
