//! Pointer-to-light mapping.
//!
//! Converts a pointer position in viewport pixels into the 3-D position of
//! the scene's point light. The mapping is pure and linear, so repeated
//! events at the same position always yield the same light position.

use glam::Vec3;

/// Map pointer coordinates `(px, py)` over a `width` × `height` viewport to
/// a light position.
///
/// Pixel coordinates are normalized to `[-1, 1]` with y inverted to match
/// the scene's up axis, then scaled into the light's travel volume:
/// `(x·6, y·3 + 4, 4 − y·2)`. Returns `None` when the viewport has a zero
/// dimension (already torn down or never laid out).
pub fn pointer_to_light(px: f64, py: f64, width: f64, height: f64) -> Option<Vec3> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    let x = ((px / width) * 2.0 - 1.0) as f32;
    let y = (-(py / height) * 2.0 + 1.0) as f32;

    Some(Vec3::new(x * 6.0, y * 3.0 + 4.0, 4.0 - y * 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_rest_position() {
        let pos = pointer_to_light(400.0, 300.0, 800.0, 600.0).unwrap();
        assert!((pos - Vec3::new(0.0, 4.0, 4.0)).length() < 1e-6);
    }

    #[test]
    fn test_top_right_corner() {
        // Normalized (1, 1): pointer at the right edge, top edge.
        let pos = pointer_to_light(800.0, 0.0, 800.0, 600.0).unwrap();
        assert!((pos - Vec3::new(6.0, 7.0, 2.0)).length() < 1e-6);
    }

    #[test]
    fn test_bottom_left_corner() {
        // Normalized (-1, -1): pointer at the left edge, bottom edge.
        let pos = pointer_to_light(0.0, 600.0, 800.0, 600.0).unwrap();
        assert!((pos - Vec3::new(-6.0, 1.0, 6.0)).length() < 1e-6);
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let a = pointer_to_light(123.0, 456.0, 1920.0, 1080.0).unwrap();
        let b = pointer_to_light(123.0, 456.0, 1920.0, 1080.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mapping_is_linear_in_x() {
        let w = 1000.0;
        let h = 500.0;
        let left = pointer_to_light(250.0, 250.0, w, h).unwrap();
        let mid = pointer_to_light(500.0, 250.0, w, h).unwrap();
        let right = pointer_to_light(750.0, 250.0, w, h).unwrap();
        let step_a = mid - left;
        let step_b = right - mid;
        assert!((step_a - step_b).length() < 1e-6, "x response is not linear");
    }

    #[test]
    fn test_zero_viewport_yields_none() {
        assert!(pointer_to_light(10.0, 10.0, 0.0, 600.0).is_none());
        assert!(pointer_to_light(10.0, 10.0, 800.0, 0.0).is_none());
    }
}
