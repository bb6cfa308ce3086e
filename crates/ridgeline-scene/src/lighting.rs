//! Lighting rig: one pointer-driven point light, one ambient fill, one
//! directional accent on the peaks.

use glam::Vec3;

/// The pointer-controlled point light.
///
/// Its position is the scene's single light-state source of truth: every
/// layer's uniform block and the visible light are derived from it when a
/// frame is encoded, so no two layers can ever observe divergent positions
/// mid-frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    pub range: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 4.0, 5.0),
            color: Vec3::ONE,
            intensity: 2.5,
            range: 100.0,
        }
    }
}

/// Constant ambient fill (#4a5568).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: Vec3::new(0x4a as f32 / 255.0, 0x55 as f32 / 255.0, 0x68 as f32 / 255.0),
            intensity: 0.4,
        }
    }
}

/// Directional light (#7dd3fc) aimed from high on the left, brightening the
/// peaks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(-5.0, 6.0, 5.0),
            color: Vec3::new(0x7d as f32 / 255.0, 0xd3 as f32 / 255.0, 0xfc as f32 / 255.0),
            intensity: 1.2,
        }
    }
}

/// The scene's three lights. Only the point light's position mutates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LightingRig {
    pub point: PointLight,
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
}
