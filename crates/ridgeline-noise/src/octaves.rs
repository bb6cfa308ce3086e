//! Multi-octave terrain displacement profile.
//!
//! Three octaves of simplex noise at increasing frequency and decreasing
//! amplitude give sharp peaks on top of broad swells. The time terms scroll
//! the field along the second axis so the ridges appear to drift, and the
//! layer depth offsets the third axis so no two layers show the same terrain.

use crate::simplex::snoise;
use glam::Vec3;

/// Sum of per-octave amplitude gains: 1.0 + 0.6 + 0.3.
///
/// `|displacement| <= OCTAVE_GAIN_SUM * |amplitude_for_depth(depth)|` for all
/// inputs, since each octave's noise is bounded by ±1.
pub const OCTAVE_GAIN_SUM: f32 = 1.9;

/// Base spatial frequency for a layer at the given depth.
pub fn frequency_for_depth(depth: f32) -> f32 {
    0.5 + depth * 0.15
}

/// Base displacement amplitude for a layer at the given depth.
pub fn amplitude_for_depth(depth: f32) -> f32 {
    1.2 + depth * 0.4
}

/// Vertical displacement of a terrain vertex at local position `(x, y)` on a
/// layer at `depth`, at animation time `t`.
///
/// Mirror of the vertex-stage computation in the terrain shader; both must
/// use these exact octave constants.
pub fn displacement(x: f32, y: f32, depth: f32, t: f32) -> f32 {
    let freq = frequency_for_depth(depth);
    let amp = amplitude_for_depth(depth);

    let mut d = snoise(Vec3::new(x * freq, y * freq - t * 0.12, depth)) * amp;
    d += snoise(Vec3::new(x * freq * 2.5, y * freq * 2.5 - t * 0.12, depth)) * (amp * 0.6);
    d += snoise(Vec3::new(x * freq * 5.0, y * freq * 5.0 - t * 0.08, depth)) * (amp * 0.3);
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYER_DEPTHS: [f32; 3] = [-3.0, -5.0, -7.0];

    #[test]
    fn test_displacement_bounded_by_octave_sum() {
        for depth in LAYER_DEPTHS {
            let bound = OCTAVE_GAIN_SUM * amplitude_for_depth(depth).abs() + 1e-3;
            for step in 0..200 {
                let t = step as f32 * 7.3;
                let x = (step % 17) as f32 * 0.9 - 7.0;
                let y = (step % 13) as f32 * 1.1 - 6.0;
                let d = displacement(x, y, depth, t);
                assert!(
                    d.abs() <= bound,
                    "displacement {d} exceeds bound {bound} at depth {depth}"
                );
            }
        }
    }

    #[test]
    fn test_frequency_increases_toward_camera() {
        // Depths are negative and decrease away from the camera, so the
        // front layer carries the highest base frequency.
        assert!(frequency_for_depth(-3.0) > frequency_for_depth(-5.0));
        assert!(frequency_for_depth(-5.0) > frequency_for_depth(-7.0));
    }

    #[test]
    fn test_front_layer_amplitude_is_degenerate_zero() {
        // 1.2 + (-3.0) * 0.4 cancels exactly; the front layer keeps its
        // silhouette from the two finer octaves scaling the same zero base.
        assert_eq!(amplitude_for_depth(-3.0), 0.0);
        for step in 0..50 {
            let x = step as f32 * 0.37;
            assert_eq!(displacement(x, -x, -3.0, step as f32), 0.0);
        }
    }

    #[test]
    fn test_displacement_varies_over_time() {
        let depth = -5.0;
        let a = displacement(1.0, 2.0, depth, 0.0);
        let b = displacement(1.0, 2.0, depth, 50.0);
        assert!(
            (a - b).abs() > 1e-4,
            "time scrolling has no effect: {a} vs {b}"
        );
    }

    #[test]
    fn test_layers_sample_distinct_slices() {
        let mut differing = 0usize;
        for step in 0..100 {
            let x = step as f32 * 0.31 - 15.0;
            let y = step as f32 * 0.17 - 8.0;
            let mid = displacement(x, y, -5.0, 1.0);
            let back = displacement(x, y, -7.0, 1.0);
            if (mid - back).abs() > 1e-3 {
                differing += 1;
            }
        }
        assert!(differing > 50, "layer slices look identical");
    }

    #[test]
    fn test_displacement_is_deterministic() {
        let a = displacement(3.2, -1.7, -5.0, 123.4);
        let b = displacement(3.2, -1.7, -5.0, 123.4);
        assert_eq!(a, b);
    }
}
