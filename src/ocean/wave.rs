//! Closed-form wave field and its multi-scale cascade.

use glam::Vec2;

/// Sum of three sinusoids along X, Z and a diagonal
///
/// `p` is a shading-space coordinate, `time_s` is in seconds. The terms use
/// spatial frequencies 2, 3 and (5, 2) with phase speeds 1, 1.5 and 2 and
/// amplitudes 0.1, 0.05 and 0.02.
#[inline]
pub fn wave(p: Vec2, time_s: f32) -> f32 {
    (p.x * 2.0 + time_s).sin() * 0.1
        + (p.y * 3.0 + time_s * 1.5).sin() * 0.05
        + (p.x * 5.0 + p.y * 2.0 + time_s * 2.0).sin() * 0.02
}

/// One layer of the wave cascade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveOctave {
    /// Multiplier on the shading-space coordinate
    pub coord_scale: f32,

    /// Multiplier on time
    pub time_rate: f32,

    /// Contribution to the total wave signal
    pub weight: f32,
}

impl WaveOctave {
    pub const fn new(coord_scale: f32, time_rate: f32, weight: f32) -> Self {
        Self {
            coord_scale,
            time_rate,
            weight,
        }
    }

    /// Weighted contribution of this layer at `p` and `time_s`
    #[inline]
    pub fn sample(&self, p: Vec2, time_s: f32) -> f32 {
        wave(p * self.coord_scale, time_s * self.time_rate) * self.weight
    }
}

/// Ordered list of wave layers: progressively finer detail, smaller contribution
#[derive(Debug, Clone, PartialEq)]
pub struct WaveCascade {
    octaves: Vec<WaveOctave>,
}

impl Default for WaveCascade {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OCTAVES.to_vec())
    }
}

impl WaveCascade {
    /// Coordinate ×1, ×2, ×4; time ×1, ×1.3, ×0.7; weights 1, 0.5, 0.25
    pub const DEFAULT_OCTAVES: [WaveOctave; 3] = [
        WaveOctave::new(1.0, 1.0, 1.0),
        WaveOctave::new(2.0, 1.3, 0.5),
        WaveOctave::new(4.0, 0.7, 0.25),
    ];

    pub fn new(octaves: Vec<WaveOctave>) -> Self {
        Self { octaves }
    }

    pub fn octaves(&self) -> &[WaveOctave] {
        &self.octaves
    }

    /// Composite wave signal: sum of every layer's weighted sample
    pub fn total_wave(&self, p: Vec2, time_s: f32) -> f32 {
        self.octaves
            .iter()
            .map(|octave| octave.sample(p, time_s))
            .sum()
    }

    /// Upper bound of `|total_wave|` (each `wave` call is bounded by 0.17)
    pub fn amplitude_bound(&self) -> f32 {
        self.octaves.iter().map(|o| o.weight.abs()).sum::<f32>() * WAVE_AMPLITUDE_BOUND
    }
}

/// Upper bound of `|wave(p, t)|`: 0.1 + 0.05 + 0.02
pub const WAVE_AMPLITUDE_BOUND: f32 = 0.17;

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_wave_golden_origin() {
        assert_eq!(wave(Vec2::ZERO, 0.0), 0.0);
    }

    #[test]
    fn test_wave_baseline_is_deterministic() {
        let p = Vec2::new(0.3, -1.7);
        assert_eq!(wave(p, 0.0).to_bits(), wave(p, 0.0).to_bits());

        let expected = (0.6f32).sin() * 0.1 + (-5.1f32).sin() * 0.05 + (1.5f32 - 3.4).sin() * 0.02;
        assert!((wave(p, 0.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_wave_periodic_in_time() {
        // Phase speeds 1, 1.5 and 2 share the period 4π
        let p = Vec2::new(0.8, 2.1);
        for i in 0..10 {
            let t = i as f32 * 0.37;
            assert!((wave(p, t) - wave(p, t + 4.0 * PI)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_wave_periodic_in_space() {
        // Along X with y fixed, frequencies 2 and 5 share the period 2π;
        // along Y with x fixed, frequencies 3 and 2 share the period 2π.
        let p = Vec2::new(0.4, -0.9);
        assert!((wave(p, 1.0) - wave(p + Vec2::new(2.0 * PI, 0.0), 1.0)).abs() < 1e-4);
        assert!((wave(p, 1.0) - wave(p + Vec2::new(0.0, 2.0 * PI), 1.0)).abs() < 1e-4);
    }

    #[test]
    fn test_wave_bounded() {
        for i in 0..1000 {
            let p = Vec2::new(i as f32 * 0.13, i as f32 * -0.07);
            assert!(wave(p, i as f32 * 0.05).abs() <= WAVE_AMPLITUDE_BOUND + 1e-6);
        }
    }

    #[test]
    fn test_default_cascade_weights() {
        let cascade = WaveCascade::default();
        let scales: Vec<f32> = cascade.octaves().iter().map(|o| o.coord_scale).collect();
        let rates: Vec<f32> = cascade.octaves().iter().map(|o| o.time_rate).collect();
        let weights: Vec<f32> = cascade.octaves().iter().map(|o| o.weight).collect();
        assert_eq!(scales, vec![1.0, 2.0, 4.0]);
        assert_eq!(rates, vec![1.0, 1.3, 0.7]);
        assert_eq!(weights, vec![1.0, 0.5, 0.25]);
    }

    #[test]
    fn test_total_wave_matches_manual_sum() {
        let cascade = WaveCascade::default();
        let p = Vec2::new(1.2, 0.4);
        let t = 2.5;
        let manual = wave(p, t) + wave(p * 2.0, t * 1.3) * 0.5 + wave(p * 4.0, t * 0.7) * 0.25;
        assert!((cascade.total_wave(p, t) - manual).abs() < 1e-6);
    }

    #[test]
    fn test_octaves_sample_independently() {
        let cascade = WaveCascade::default();
        let p = Vec2::new(-0.6, 3.3);
        let t = 0.9;
        let third = cascade.octaves()[2];
        assert!((third.sample(p, t) - wave(p * 4.0, t * 0.7) * 0.25).abs() < 1e-6);

        let summed: f32 = cascade.octaves().iter().map(|o| o.sample(p, t)).sum();
        assert!((summed - cascade.total_wave(p, t)).abs() < 1e-6);
    }

    #[test]
    fn test_empty_cascade_is_flat() {
        let cascade = WaveCascade::new(Vec::new());
        assert_eq!(cascade.total_wave(Vec2::new(3.0, 4.0), 10.0), 0.0);
        assert_eq!(cascade.amplitude_bound(), 0.0);
    }

    #[test]
    fn test_default_cascade_bound() {
        let bound = WaveCascade::default().amplitude_bound();
        assert!((bound - 1.75 * 0.17).abs() < 1e-6);
    }
}
