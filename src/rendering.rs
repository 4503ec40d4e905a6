//! CPU preview renderer: casts one ray per pixel onto the ocean surface.
//!
//! Stands in for a host graphics pipeline. Each pixel is intersected with
//! the mesh plane, the hit is turned into a [`SurfacePoint`] by interpolating
//! the mesh, shaded, and alpha-blended over the background. Rows are shaded
//! in parallel; all of them share the frame's [`ParameterSet`].

use glam::{Mat4, Vec2, Vec3};
use image::RgbaImage;
use rayon::prelude::*;

use crate::camera::CameraSystem;
use crate::error::{Error, Result};
use crate::ocean::{OceanSystem, ParameterSet, SurfacePoint};
use crate::params::{RecordingConfig, RenderConfig};

const BYTES_PER_PIXEL: usize = 4; // RGBA8

/// Software rendering system for still frames and recordings
pub struct RenderSystem {
    config: RenderConfig,
}

impl RenderSystem {
    /// Create new rendering system
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Pixel value of the background (where no surface is hit)
    pub fn background_pixel(&self) -> [u8; 4] {
        to_rgba8(self.config.background)
    }

    /// World-space ray through the center of pixel (x, y)
    ///
    /// # Returns
    /// Tuple of (origin on the near plane, unit direction)
    pub fn pixel_ray(&self, inv_view_proj: Mat4, x: u32, y: u32) -> (Vec3, Vec3) {
        let ndc = Vec2::new(
            (x as f32 + 0.5) / self.config.window_width as f32 * 2.0 - 1.0,
            1.0 - (y as f32 + 0.5) / self.config.window_height as f32 * 2.0,
        );

        // perspective_rh maps depth to [0, 1]
        let near = inv_view_proj.project_point3(ndc.extend(0.0));
        let far = inv_view_proj.project_point3(ndc.extend(1.0));
        (near, (far - near).normalize_or_zero())
    }

    /// Surface point seen through a ray, if the ray meets the ocean
    fn trace(&self, ocean: &OceanSystem, origin: Vec3, dir: Vec3) -> Option<SurfacePoint> {
        // Jitter is a few centimeters: intersect the undisturbed plane
        let plane_y = ocean.mesh.base_height();
        if dir.y.abs() < 1e-6 {
            return None;
        }
        let t = (plane_y - origin.y) / dir.y;
        if t <= 0.0 || t > self.config.far_plane_m {
            return None;
        }

        let hit = origin + dir * t;
        ocean.mesh.surface_point_at(hit.x, hit.z)
    }

    /// Render one frame into an RGBA image
    pub fn render(
        &self,
        ocean: &OceanSystem,
        params: &ParameterSet,
        view_proj: Mat4,
    ) -> Result<RgbaImage> {
        let width = self.config.window_width;
        let height = self.config.window_height;
        let row_bytes = width as usize * BYTES_PER_PIXEL;
        let inv_view_proj = view_proj.inverse();
        let background = self.config.background;

        let mut pixels = vec![0u8; row_bytes * height as usize];
        pixels
            .par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                    let (origin, dir) = self.pixel_ray(inv_view_proj, x as u32, y as u32);
                    let color = match self.trace(ocean, origin, dir) {
                        Some(point) => {
                            let rgba = ocean.shade(&point, params);
                            rgba.truncate().lerp(background, 1.0 - rgba.w)
                        }
                        None => background,
                    };
                    pixel.copy_from_slice(&to_rgba8(color));
                }
            });

        RgbaImage::from_raw(width, height, pixels)
            .ok_or(Error::PixelBuffer { width, height })
    }

    /// Render the frame at `time_s` and save it as PNG
    pub fn render_to_file(
        &self,
        ocean: &mut OceanSystem,
        camera: &CameraSystem,
        time_s: f32,
        path: &std::path::Path,
    ) -> Result<()> {
        let (view_proj, eye) = camera.create_view_proj_matrix(time_s, &self.config);
        let params = ocean.update(time_s, eye);
        let image = self.render(ocean, &params, view_proj)?;
        image.save(path)?;
        log::info!("Saved frame t={:.2}s to {}", time_s, path.display());
        Ok(())
    }

    /// Render a fixed-rate frame sequence into the recording directory
    ///
    /// # Returns
    /// * Number of frames written
    pub fn record(
        &self,
        ocean: &mut OceanSystem,
        camera: &CameraSystem,
        recording: &RecordingConfig,
    ) -> Result<usize> {
        recording.validate()?;
        std::fs::create_dir_all(&recording.output_dir)?;

        let total = recording.total_frames();
        log::info!(
            "Recording {} frames at {} fps into {}",
            total,
            recording.fps,
            recording.output_dir.display()
        );

        for frame_num in 0..total {
            let time_s = recording.frame_time(frame_num);
            let (view_proj, eye) = camera.create_view_proj_matrix(time_s, &self.config);
            let params = ocean.update(time_s, eye);
            let image = self.render(ocean, &params, view_proj)?;
            image.save(recording.frame_path(frame_num))?;

            if frame_num % recording.fps as usize == 0 {
                log::info!("Frame {}/{}", frame_num + 1, total);
            }
        }

        Ok(total)
    }
}

/// Clamp a linear color into 8-bit RGBA (opaque)
fn to_rgba8(color: Vec3) -> [u8; 4] {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    [c.x as u8, c.y as u8, c.z as u8, 255]
}
