//! Scene fog descriptor.

use glam::Vec3;

/// Linear fog: geometry fades toward `color` between `near` and `far`
/// world-space distance from the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    /// Fog color, linear RGB. Doubles as the frame clear color.
    pub color: Vec3,
    /// Distance where fog starts.
    pub near: f32,
    /// Distance of full fog.
    pub far: f32,
}

impl Fog {
    /// The night-sky fog of the backdrop scene (#0a1929, 8..20).
    pub fn backdrop() -> Self {
        Self {
            color: Vec3::new(0x0a as f32 / 255.0, 0x19 as f32 / 255.0, 0x29 as f32 / 255.0),
            near: 8.0,
            far: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_fog_range() {
        let fog = Fog::backdrop();
        assert_eq!(fog.near, 8.0);
        assert_eq!(fog.far, 20.0);
        assert!(fog.near < fog.far);
    }

    #[test]
    fn test_backdrop_fog_is_dark_blue() {
        let fog = Fog::backdrop();
        assert!(fog.color.z > fog.color.x, "fog should lean blue");
        assert!(fog.color.max_element() < 0.2, "fog should be dark");
    }
}
