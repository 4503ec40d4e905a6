//! Procedural ocean surface: mesh, wave field, shading and parameter feed.

mod feed;
mod mesh;
mod shading;
mod system;
mod uniforms;
mod wave;

use glam::{Vec2, Vec3};

// Re-export public types
pub use feed::ParameterFeed;
pub use mesh::{compute_vertex_normals, SurfaceMesh, Vertex};
pub use shading::{
    alpha, base_color, caustics, foam_mask, fresnel, shading_coord, sparkle, OceanShader,
    ParameterSet, Rgba, ShadingTerms,
};
pub use system::OceanSystem;
pub use uniforms::{ShaderUniforms, OCEAN_SHADER_WGSL};
pub use wave::{wave, WaveCascade, WaveOctave, WAVE_AMPLITUDE_BOUND};

/// A point on the surface as seen by the fragment stage
///
/// Produced per evaluation by interpolating mesh vertices; never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePoint {
    pub world_position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}
