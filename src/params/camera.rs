//! Camera configuration and presets.

/// Fixed camera position
#[derive(Debug, Clone)]
pub struct FixedCamera {
    /// Camera position (meters)
    pub position: [f32; 3],

    /// Look-at target (meters)
    pub target: [f32; 3],
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            position: [0.0, 5.0, 10.0], // Elevated, looking back over the water
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Slow circular orbit around a target point
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Horizontal distance from the target (meters)
    pub radius_m: f32,

    /// Height above the target (meters)
    pub altitude_m: f32,

    /// Orbit speed (radians per second)
    pub angular_speed_rad_per_s: f32,

    /// Orbit center and look-at point (meters)
    pub target: [f32; 3],
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius_m: 11.2, // Same distance as the fixed preset
            altitude_m: 5.0,
            angular_speed_rad_per_s: 0.1,
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Camera preset selection
#[derive(Debug, Clone)]
pub enum CameraPreset {
    /// Fixed preset: stationary camera
    Fixed(FixedCamera),

    /// Orbit preset: circles the target at constant altitude
    Orbit(OrbitCamera),
}

impl Default for CameraPreset {
    fn default() -> Self {
        Self::Fixed(FixedCamera::default())
    }
}
