//! High-level ocean system tying the mesh, feed and shader together.

use glam::Vec3;

use super::feed::ParameterFeed;
use super::mesh::SurfaceMesh;
use super::shading::{OceanShader, ParameterSet, Rgba};
use super::SurfacePoint;
use crate::error::MeshConfigError;
use crate::params::{OceanPalette, SurfaceConfig};

/// Ocean surface with its static mesh, per-frame feed and shader
pub struct OceanSystem {
    pub mesh: SurfaceMesh,
    pub feed: ParameterFeed,
    shader: OceanShader,
}

impl OceanSystem {
    /// Build the mesh once and start the feed clock
    pub fn new(config: &SurfaceConfig, palette: OceanPalette) -> Result<Self, MeshConfigError> {
        let mesh = SurfaceMesh::new(config)?;
        Ok(Self {
            mesh,
            feed: ParameterFeed::new(palette),
            shader: OceanShader::default(),
        })
    }

    /// Replace the shader (e.g. a custom wave cascade)
    pub fn with_shader(mut self, shader: OceanShader) -> Self {
        self.shader = shader;
        self
    }

    pub fn shader(&self) -> &OceanShader {
        &self.shader
    }

    /// Advance to a frame at an explicit time
    ///
    /// # Arguments
    /// * `time_s` - Seconds since pipeline start
    /// * `camera_pos` - Camera world position
    ///
    /// # Returns
    /// * Parameter snapshot shared by every fragment of this frame
    pub fn update(&mut self, time_s: f32, camera_pos: Vec3) -> ParameterSet {
        self.feed.frame_at(time_s, camera_pos)
    }

    /// Shade the mesh at world (x, z); `None` outside the surface
    pub fn shade_at(&self, world_x: f32, world_z: f32, params: &ParameterSet) -> Option<Rgba> {
        self.mesh
            .surface_point_at(world_x, world_z)
            .map(|point| self.shade(&point, params))
    }

    /// Shade one fragment
    pub fn shade(&self, point: &SurfacePoint, params: &ParameterSet) -> Rgba {
        self.shader.shade(point, params)
    }
}
