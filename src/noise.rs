//! Noise generation for ocean shading.
//!
//! Provides the same noise construction on the CPU (Rust) and GPU (WGSL):
//! a sine hash, a smoothstep-interpolated lattice noise built on it, and a
//! fractal sum of that lattice noise.

use glam::Vec2;

/// Fixed direction the input coordinate is projected onto before hashing
pub const HASH_DIRECTION: Vec2 = Vec2::new(12.9898, 78.233);

/// Scale applied to the sine before taking the fractional part
pub const HASH_SCALE: f32 = 43758.5453;

/// Number of octaves summed by [`fbm`]
pub const FBM_OCTAVES: usize = 4;

/// Largest f32 strictly below 1.0
pub(crate) const ONE_MINUS_EPSILON: f32 = 1.0 - f32::EPSILON / 2.0;

/// GLSL-style `fract`: `x - floor(x)`, always non-negative
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Hermite smoothstep between `edge0` and `edge1`
///
/// Returns 0 below `edge0`, 1 above `edge1`, `3t² - 2t³` in between.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Sine hash of a 2D coordinate
///
/// Returns value in range [0, 1). Uncorrelated between neighbouring
/// integer cells, identical for identical inputs.
#[inline]
pub fn hash(p: Vec2) -> f32 {
    // `x - floor(x)` can round up to exactly 1.0 for tiny negative x
    fract(p.dot(HASH_DIRECTION).sin() * HASH_SCALE).min(ONE_MINUS_EPSILON)
}

/// Lattice noise with smoothstep-weighted bilinear interpolation
///
/// Samples [`hash`] at the four integer corners around `p`. The result is
/// C¹-continuous across cell boundaries and stays within [0, 1).
pub fn smooth_noise(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p - i;
    let f = f * f * (Vec2::splat(3.0) - 2.0 * f);

    let a = hash(i);
    let b = hash(i + Vec2::new(1.0, 0.0));
    let c = hash(i + Vec2::new(0.0, 1.0));
    let d = hash(i + Vec2::new(1.0, 1.0));

    let bottom = a + (b - a) * f.x;
    let top = c + (d - c) * f.x;
    bottom + (top - bottom) * f.y
}

/// Fractal Brownian motion over [`smooth_noise`]
///
/// Amplitude starts at 0.5 and halves, frequency starts at 1.0 and doubles,
/// for [`FBM_OCTAVES`] octaves. Not normalized: the upper bound is the
/// amplitude sum (0.9375).
pub fn fbm(p: Vec2) -> f32 {
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut frequency = 1.0;

    for _ in 0..FBM_OCTAVES {
        value += amplitude * smooth_noise(p * frequency);
        amplitude *= 0.5;
        frequency *= 2.0;
    }

    value
}
