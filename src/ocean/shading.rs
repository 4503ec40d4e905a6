//! Per-fragment shading: foam, fresnel, caustics, sparkle and final color.
//!
//! Every function here is pure. A frame's [`ParameterSet`] is built once by
//! the feed and then shared read-only by all fragment evaluations, so
//! fragments can be shaded in any order and in parallel.

use glam::{Vec2, Vec3, Vec4};

use super::wave::WaveCascade;
use super::SurfacePoint;
use crate::noise::{fbm, smooth_noise, smoothstep};
use crate::params::OceanPalette;

/// Final fragment color (RGB + alpha)
pub type Rgba = Vec4;

/// World XZ to shading-space scale
pub const SHADING_SCALE: f32 = 0.1;

/// Wave heights where foam starts and saturates
pub const FOAM_THRESHOLD: (f32, f32) = (0.1, 0.2);

/// Foam never covers more than this fraction of the water tint
pub const FOAM_OPACITY: f32 = 0.8;

/// How far the wave signal displaces the caustic lookup
pub const CAUSTIC_DISPLACEMENT: f32 = 0.5;

/// Caustic lookup frequency
pub const CAUSTIC_SCALE: f32 = 3.0;

/// Caustic drift along +X (shading units per second)
pub const CAUSTIC_DRIFT: f32 = 0.5;

/// Water brightness where caustics are strongest
pub const CAUSTIC_BRIGHTEN: f32 = 1.2;

/// Sparkle lookup frequency
pub const SPARKLE_SCALE: f32 = 20.0;

/// Sparkle drift (shading units per second, both axes)
pub const SPARKLE_SPEED: f32 = 3.0;

/// Sparkle sharpness: only noise values near 1 survive
pub const SPARKLE_EXPONENT: f32 = 10.0;

/// Sparkle contribution added to every channel
pub const SPARKLE_INTENSITY: f32 = 0.3;

/// Alpha at normal incidence
pub const ALPHA_BASE: f32 = 0.7;

/// Extra alpha at grazing angles
pub const ALPHA_FRESNEL: f32 = 0.3;

/// Immutable per-frame shading inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    /// Seconds since pipeline start
    pub time: f32,

    /// Camera world position
    pub camera_position: Vec3,

    /// Deep water tint (RGB)
    pub water_color: Vec3,

    /// Foam tint (RGB)
    pub foam_color: Vec3,

    /// Direction towards the sun (unit length)
    pub sun_direction: Vec3,
}

impl ParameterSet {
    pub fn new(time: f32, camera_position: Vec3, palette: &OceanPalette) -> Self {
        Self {
            time,
            camera_position,
            water_color: palette.water_color,
            foam_color: palette.foam_color,
            sun_direction: palette.sun_direction,
        }
    }
}

/// Intermediate shading terms of one fragment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingTerms {
    pub total_wave: f32,
    pub foam: f32,
    pub fresnel: f32,
    pub caustics: f32,
    pub sparkle: f32,
}

/// Project a world position into shading space (XZ plane)
#[inline]
pub fn shading_coord(world_position: Vec3) -> Vec2 {
    Vec2::new(world_position.x, world_position.z) * SHADING_SCALE
}

/// Soft crest threshold: 0 below 0.1, 1 above 0.2
#[inline]
pub fn foam_mask(total_wave: f32) -> f32 {
    smoothstep(FOAM_THRESHOLD.0, FOAM_THRESHOLD.1, total_wave)
}

/// View-angle term: 0 looking straight down the normal, 1 at grazing angles
///
/// A camera sitting on the point (or any degenerate input) counts as a
/// straight-on view.
pub fn fresnel(normal: Vec3, world_position: Vec3, camera_position: Vec3) -> f32 {
    let (Some(normal), Some(view_dir)) = (
        normal.try_normalize(),
        (camera_position - world_position).try_normalize(),
    ) else {
        return 0.0;
    };

    let facing = normal.dot(view_dir).max(0.0);
    (1.0 - facing).powi(2)
}

/// Wave-displaced, drifting fractal tint, squared for contrast
pub fn caustics(p: Vec2, total_wave: f32, time_s: f32) -> f32 {
    let drift = Vec2::new(time_s * CAUSTIC_DRIFT, 0.0);
    let uv = (p + Vec2::splat(total_wave * CAUSTIC_DISPLACEMENT) + drift) * CAUSTIC_SCALE;
    fbm(uv).powi(2)
}

/// Sparse moving highlights
pub fn sparkle(p: Vec2, time_s: f32) -> f32 {
    let uv = p * SPARKLE_SCALE + Vec2::splat(time_s * SPARKLE_SPEED);
    smooth_noise(uv).powf(SPARKLE_EXPONENT)
}

/// Opacity from the fresnel term, always within [0.7, 1.0]
#[inline]
pub fn alpha(fresnel: f32) -> f32 {
    ALPHA_BASE + fresnel.clamp(0.0, 1.0) * ALPHA_FRESNEL
}

/// Water tint with caustics and foam, before the additive sparkle
pub fn base_color(water_color: Vec3, foam_color: Vec3, caustics: f32, foam: f32) -> Vec3 {
    let tinted = water_color.lerp(water_color * CAUSTIC_BRIGHTEN, caustics);
    tinted.lerp(foam_color, foam * FOAM_OPACITY)
}

/// Ocean fragment shader
#[derive(Debug, Clone, Default)]
pub struct OceanShader {
    cascade: WaveCascade,
}

impl OceanShader {
    pub fn new(cascade: WaveCascade) -> Self {
        Self { cascade }
    }

    pub fn cascade(&self) -> &WaveCascade {
        &self.cascade
    }

    /// Evaluate every intermediate term for one fragment
    pub fn terms(&self, point: &SurfacePoint, params: &ParameterSet) -> ShadingTerms {
        let p = shading_coord(point.world_position);
        let total_wave = self.cascade.total_wave(p, params.time);

        ShadingTerms {
            total_wave,
            foam: foam_mask(total_wave),
            fresnel: fresnel(point.normal, point.world_position, params.camera_position),
            caustics: caustics(p, total_wave, params.time),
            sparkle: sparkle(p, params.time),
        }
    }

    /// Shade one fragment
    pub fn shade(&self, point: &SurfacePoint, params: &ParameterSet) -> Rgba {
        Self::compose(&self.terms(point, params), params)
    }

    /// Blend precomputed terms into the final color
    pub fn compose(terms: &ShadingTerms, params: &ParameterSet) -> Rgba {
        let color = base_color(
            params.water_color,
            params.foam_color,
            terms.caustics,
            terms.foam,
        ) + Vec3::splat(terms.sparkle * SPARKLE_INTENSITY);

        color.extend(alpha(terms.fresnel))
    }
}
