//! Camera presets for the preview host.

use glam::{Mat4, Vec3};

use crate::params::{CameraPreset, FixedCamera, OrbitCamera, RenderConfig};

/// Camera system producing eye position and view-projection per frame
pub struct CameraSystem {
    preset: CameraPreset,
}

impl CameraSystem {
    /// Create new camera system with specified preset
    pub fn new(preset: CameraPreset) -> Self {
        Self { preset }
    }

    /// Compute camera position and look-at target for given time
    ///
    /// # Arguments
    /// * `time_s` - Current time in seconds
    ///
    /// # Returns
    /// Tuple of (eye_position, target_position)
    pub fn compute_position_and_target(&self, time_s: f32) -> (Vec3, Vec3) {
        match &self.preset {
            CameraPreset::Fixed(params) => Self::compute_fixed_path(params),
            CameraPreset::Orbit(params) => Self::compute_orbit_path(params, time_s),
        }
    }

    fn compute_fixed_path(p: &FixedCamera) -> (Vec3, Vec3) {
        let eye = Vec3::from_array(p.position);
        let target = Vec3::from_array(p.target);
        (eye, target)
    }

    /// Circle the target at constant radius and altitude, starting on +Z
    fn compute_orbit_path(p: &OrbitCamera, time_s: f32) -> (Vec3, Vec3) {
        let target = Vec3::from_array(p.target);
        let angle = time_s * p.angular_speed_rad_per_s;
        let offset = Vec3::new(
            angle.sin() * p.radius_m,
            p.altitude_m,
            angle.cos() * p.radius_m,
        );
        let eye = target + offset;
        (eye, target)
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn create_view_proj_matrix(
        &self,
        time_s: f32,
        render_config: &RenderConfig,
    ) -> (Mat4, Vec3) {
        let (eye, target) = self.compute_position_and_target(time_s);

        // Always keep Y as up vector (camera never rolls)
        let up = Vec3::Y;

        let view = Mat4::look_at_rh(eye, target, up);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane_m,
            render_config.far_plane_m,
        );

        (proj * view, eye)
    }
}
