//! GPU-facing uniform block and WGSL shader source.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::shading::ParameterSet;

/// WGSL implementation of the ocean shading pipeline
///
/// Entry points `vs_main` / `fs_main`, uniform block at group 0 binding 0
/// laid out as [`ShaderUniforms`], vertex layout as [`super::Vertex`].
pub const OCEAN_SHADER_WGSL: &str = include_str!("../shader.wgsl");

/// Uniform buffer for ocean shader (view-projection matrix + frame parameters)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ShaderUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 3],
    pub time: f32,
    pub water_color: [f32; 3],
    pub _padding0: f32, // vec3 slots are 16-byte aligned
    pub foam_color: [f32; 3],
    pub _padding1: f32,
    pub sun_direction: [f32; 3],
    pub _padding2: f32,
}

impl ShaderUniforms {
    pub fn new(params: &ParameterSet, view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            camera_position: params.camera_position.to_array(),
            time: params.time,
            water_color: params.water_color.to_array(),
            _padding0: 0.0,
            foam_color: params.foam_color.to_array(),
            _padding1: 0.0,
            sun_direction: params.sun_direction.to_array(),
            _padding2: 0.0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::OceanPalette;
    use glam::Vec3;
    use std::mem::{offset_of, size_of};

    fn parse_shader() -> naga::Module {
        match naga::front::wgsl::parse_str(OCEAN_SHADER_WGSL) {
            Ok(module) => module,
            Err(e) => panic!("{}", e.emit_to_string(OCEAN_SHADER_WGSL)),
        }
    }

    #[test]
    fn test_uniform_size() {
        assert_eq!(size_of::<ShaderUniforms>(), 128);
    }

    #[test]
    fn test_uniforms_from_parameters() {
        let params = ParameterSet::new(3.5, Vec3::new(1.0, 2.0, 3.0), &OceanPalette::default());
        let uniforms = ShaderUniforms::new(&params, Mat4::IDENTITY);
        assert_eq!(uniforms.time, 3.5);
        assert_eq!(uniforms.camera_position, [1.0, 2.0, 3.0]);
        assert_eq!(uniforms.water_color, params.water_color.to_array());
        assert_eq!(uniforms.view_proj, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(uniforms.as_bytes().len(), 128);
    }

    #[test]
    fn test_shader_parses_and_validates() {
        let module = parse_shader();
        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        if let Err(e) = validator.validate(&module) {
            panic!("WGSL validation failed: {:?}", e);
        }

        let entry_points: Vec<&str> = module
            .entry_points
            .iter()
            .map(|ep| ep.name.as_str())
            .collect();
        assert!(entry_points.contains(&"vs_main"));
        assert!(entry_points.contains(&"fs_main"));
    }

    #[test]
    fn test_shader_uniform_layout_matches() {
        let module = parse_shader();
        let (_, ty) = module
            .types
            .iter()
            .find(|(_, ty)| ty.name.as_deref() == Some("Uniforms"))
            .expect("Uniforms struct in shader");

        let naga::TypeInner::Struct { ref members, span } = ty.inner else {
            panic!("Uniforms is not a struct");
        };
        assert_eq!(span as usize, size_of::<ShaderUniforms>());

        let offset = |name: &str| {
            members
                .iter()
                .find(|m| m.name.as_deref() == Some(name))
                .map(|m| m.offset as usize)
                .expect("member present")
        };
        assert_eq!(offset("view_proj"), offset_of!(ShaderUniforms, view_proj));
        assert_eq!(offset("camera_position"), offset_of!(ShaderUniforms, camera_position));
        assert_eq!(offset("time"), offset_of!(ShaderUniforms, time));
        assert_eq!(offset("water_color"), offset_of!(ShaderUniforms, water_color));
        assert_eq!(offset("foam_color"), offset_of!(ShaderUniforms, foam_color));
        assert_eq!(offset("sun_direction"), offset_of!(ShaderUniforms, sun_direction));
    }

    #[test]
    fn test_shader_hash_clamped_like_cpu() {
        let module = parse_shader();
        let (_, hash) = module
            .functions
            .iter()
            .find(|(_, f)| f.name.as_deref() == Some("hash"))
            .expect("hash function in shader");

        let clamps_below_one = hash.expressions.iter().any(|(_, expr)| {
            matches!(
                expr,
                naga::Expression::Literal(naga::Literal::F32(v))
                    if *v == crate::noise::ONE_MINUS_EPSILON
            )
        });
        let uses_min = hash.expressions.iter().any(|(_, expr)| {
            matches!(
                expr,
                naga::Expression::Math {
                    fun: naga::MathFunction::Min,
                    ..
                }
            )
        });
        assert!(clamps_below_one && uses_min);
    }
}
