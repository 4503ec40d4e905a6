//! Ocean surface geometry and palette parameters.

use glam::Vec3;

use crate::error::MeshConfigError;

/// Surface mesh construction parameters
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Plane extent along X (meters)
    pub width: f32,

    /// Plane extent along Z (meters)
    pub height: f32,

    /// Number of cells along X
    pub width_segments: u32,

    /// Number of cells along Z
    pub height_segments: u32,

    /// Half-width of the uniform height jitter (meters)
    /// Each vertex height is drawn from [-range, range]
    pub height_jitter_range: f32,

    /// Seed for the jitter generator (same seed = same mesh)
    pub seed: u64,

    /// World-space position of the plane center
    /// The surface sits 2m below the scene origin by default
    pub origin: [f32; 3],
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 50.0,
            width_segments: 128,
            height_segments: 128,
            height_jitter_range: 0.05,
            seed: 42,
            origin: [0.0, -2.0, 0.0],
        }
    }
}

impl SurfaceConfig {
    /// Square plane of `size` meters with `segments` cells per side, centered at the origin
    pub fn square(size: f32, segments: u32) -> Self {
        Self {
            width: size,
            height: size,
            width_segments: segments,
            height_segments: segments,
            origin: [0.0; 3],
            ..Self::default()
        }
    }

    /// Number of vertices the mesh will contain
    pub fn vertex_count(&self) -> usize {
        (self.width_segments as usize + 1) * (self.height_segments as usize + 1)
    }

    /// Number of triangles the mesh will contain
    pub fn triangle_count(&self) -> usize {
        self.width_segments as usize * self.height_segments as usize * 2
    }

    /// Smaller of the two grid spacings (meters)
    pub fn cell_size(&self) -> f32 {
        let along_x = self.width / self.width_segments as f32;
        let along_z = self.height / self.height_segments as f32;
        along_x.min(along_z)
    }

    /// Validate configuration (segment counts, extents, jitter range)
    pub fn validate(&self) -> Result<(), MeshConfigError> {
        if self.width_segments == 0 {
            return Err(MeshConfigError::ZeroSegments {
                axis: "width",
                value: self.width_segments,
            });
        }
        if self.height_segments == 0 {
            return Err(MeshConfigError::ZeroSegments {
                axis: "height",
                value: self.height_segments,
            });
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(MeshConfigError::InvalidExtent {
                axis: "width",
                value: self.width,
            });
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(MeshConfigError::InvalidExtent {
                axis: "height",
                value: self.height,
            });
        }
        if !(self.height_jitter_range.is_finite() && self.height_jitter_range >= 0.0) {
            return Err(MeshConfigError::InvalidJitter(self.height_jitter_range));
        }
        let cell_size = self.cell_size();
        if self.height_jitter_range >= cell_size {
            return Err(MeshConfigError::JitterExceedsCell {
                range: self.height_jitter_range,
                cell_size,
            });
        }
        if self.vertex_count() > u32::MAX as usize {
            return Err(MeshConfigError::TooManyVertices {
                width_segments: self.width_segments,
                height_segments: self.height_segments,
            });
        }
        Ok(())
    }
}

/// Constant shading colors and light direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OceanPalette {
    /// Deep water tint (linear RGB, 0..1)
    pub water_color: Vec3,

    /// Foam tint on wave crests (linear RGB, 0..1)
    pub foam_color: Vec3,

    /// Direction towards the sun (unit length)
    pub sun_direction: Vec3,
}

impl Default for OceanPalette {
    fn default() -> Self {
        Self {
            water_color: Self::rgb_from_hex(0x006994),
            foam_color: Vec3::ONE,
            sun_direction: Vec3::ONE.normalize(),
        }
    }
}

impl OceanPalette {
    /// Convert a 0xRRGGBB color into 0..1 RGB
    pub fn rgb_from_hex(hex: u32) -> Vec3 {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Vec3::new(r, g, b)
    }

    /// Palette with the sun direction normalized (zero input falls back to +Y)
    pub fn normalized(self) -> Self {
        Self {
            sun_direction: self.sun_direction.try_normalize().unwrap_or(Vec3::Y),
            ..self
        }
    }
}
