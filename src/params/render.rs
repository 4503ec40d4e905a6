//! Rendering and recording configuration.

use std::path::PathBuf;

use glam::Vec3;

use crate::error::RenderConfigError;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width (pixels)
    pub window_width: u32,

    /// Image height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (meters)
    pub near_plane_m: f32,

    /// Far clipping plane (meters)
    pub far_plane_m: f32,

    /// Color behind the (partially transparent) water surface
    pub background: Vec3,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 75.0,
            near_plane_m: 0.1,
            far_plane_m: 1000.0,
            background: Vec3::new(0.53, 0.81, 0.92), // Pale sky blue
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }

    /// Validate configuration (non-empty image, sane projection)
    pub fn validate(&self) -> Result<(), RenderConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(RenderConfigError::EmptyImage {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(RenderConfigError::InvalidFov(self.fov_degrees));
        }
        if !(self.near_plane_m > 0.0 && self.far_plane_m > self.near_plane_m) {
            return Err(RenderConfigError::InvalidClipPlanes {
                near: self.near_plane_m,
                far: self.far_plane_m,
            });
        }
        Ok(())
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            duration_secs,
            output_dir: output_dir.into(),
            fps: 30,
        }
    }

    /// Validate recording settings (positive frame rate, sane duration)
    pub fn validate(&self) -> Result<(), RenderConfigError> {
        if self.fps == 0 {
            return Err(RenderConfigError::ZeroFps);
        }
        if !(self.duration_secs.is_finite() && self.duration_secs >= 0.0) {
            return Err(RenderConfigError::InvalidDuration(self.duration_secs));
        }
        Ok(())
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil().max(0.0) as usize
    }

    /// Shading time of a frame (seconds since recording start)
    ///
    /// Requires a validated config (`fps >= 1`).
    pub fn frame_time(&self, frame_num: usize) -> f32 {
        frame_num as f32 / self.fps as f32
    }

    /// Frame file path
    pub fn frame_path(&self, frame_num: usize) -> PathBuf {
        self.output_dir.join(format!("frame_{:05}.png", frame_num))
    }
}
