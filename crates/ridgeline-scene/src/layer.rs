//! Terrain layer construction.
//!
//! The scene is exactly three layers, front to back. Their order is fixed at
//! construction: it assigns parallax speed (the front layer advances time
//! fastest) and the depth value parameterizes both displacement and fog in
//! the shader, so the sequence must never be reordered.

use crate::plane::PlaneMesh;
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Number of terrain layers in the scene. Fixed; layers are never added or
/// removed after construction.
pub const LAYER_COUNT: usize = 3;

/// Per-layer time multipliers, front to back. The speed differential is what
/// produces the parallax depth cue.
pub const TIME_SCALES: [f64; LAYER_COUNT] = [1.0, 0.75, 0.5];

/// Subdivision count of each layer's plane mesh.
pub const LAYER_SEGMENTS: u32 = 180;

/// Static parameters of one terrain layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerParams {
    /// Z position; negative, increasing in magnitude with distance.
    pub depth: f32,
    /// Horizontal scale applied to the base 16×12 plane.
    pub scale: f32,
    /// Base color, linear RGB.
    pub color: Vec3,
    /// Output alpha of the layer. Lighting never affects alpha.
    pub opacity: f32,
    /// Vertical offset of the plane.
    pub y_offset: f32,
}

/// The literal parameter sets of the three layers, front to back. Scale and
/// opacity decrease monotonically with depth, encoding atmospheric
/// perspective.
pub fn layer_params() -> [LayerParams; LAYER_COUNT] {
    [
        LayerParams {
            depth: -3.0,
            scale: 1.3,
            color: hex_color(0x4a90c8),
            opacity: 0.85,
            y_offset: -1.5,
        },
        LayerParams {
            depth: -5.0,
            scale: 1.1,
            color: hex_color(0x5ba3d9),
            opacity: 0.80,
            y_offset: -1.2,
        },
        LayerParams {
            depth: -7.0,
            scale: 0.9,
            color: hex_color(0x7dbce8),
            opacity: 0.75,
            y_offset: -0.8,
        },
    ]
}

/// One terrain layer: its parameters, its mesh, and its current animation
/// time. Only `time` mutates after construction.
pub struct Layer {
    pub params: LayerParams,
    pub mesh: PlaneMesh,
    /// Scaled elapsed time fed to the displacement shader.
    pub time: f32,
}

impl Layer {
    /// Build a layer: a 16·scale × 12·scale plane with 180×180 segments,
    /// lying in the local XY plane until the model transform lays it flat.
    pub fn new(params: LayerParams) -> Self {
        let mesh = PlaneMesh::subdivided(
            16.0 * params.scale,
            12.0 * params.scale,
            LAYER_SEGMENTS,
        );
        Self {
            params,
            mesh,
            time: 0.0,
        }
    }

    /// Model transform: rotate the plane horizontal, then place it at
    /// `(0, y_offset, depth)`.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.params.y_offset, self.params.depth))
            * Mat4::from_rotation_x(-FRAC_PI_2)
    }
}

/// Expand a 24-bit hex color into linear-ish RGB in `[0, 1]`.
fn hex_color(rgb: u32) -> Vec3 {
    Vec3::new(
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_three_layers() {
        assert_eq!(layer_params().len(), LAYER_COUNT);
        assert_eq!(LAYER_COUNT, 3);
    }

    #[test]
    fn test_scale_and_opacity_strictly_decrease_with_depth() {
        let params = layer_params();
        for pair in params.windows(2) {
            assert!(
                pair[0].scale > pair[1].scale,
                "scale must strictly decrease front to back"
            );
            assert!(
                pair[0].opacity > pair[1].opacity,
                "opacity must strictly decrease front to back"
            );
            assert!(
                pair[0].depth > pair[1].depth,
                "depth must grow more negative front to back"
            );
        }
        assert_eq!(
            params.map(|p| (p.scale, p.opacity)),
            [(1.3, 0.85), (1.1, 0.80), (0.9, 0.75)]
        );
    }

    #[test]
    fn test_time_scales_front_to_back() {
        assert_eq!(TIME_SCALES, [1.0, 0.75, 0.5]);
    }

    #[test]
    fn test_layer_mesh_dimensions_follow_scale() {
        let layer = Layer::new(layer_params()[0]);
        assert!((layer.mesh.width - 16.0 * 1.3).abs() < 1e-5);
        assert!((layer.mesh.height - 12.0 * 1.3).abs() < 1e-5);
        assert_eq!(layer.mesh.segments, LAYER_SEGMENTS);
    }

    #[test]
    fn test_model_matrix_lays_plane_horizontal() {
        let layer = Layer::new(layer_params()[1]);
        let model = layer.model_matrix();
        // A local +Z normal becomes world +Y after the rotation.
        let normal = model.transform_vector3(Vec3::Z);
        assert!((normal - Vec3::Y).length() < 1e-5);
        // Local origin lands at (0, y_offset, depth).
        let origin = model.transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(0.0, -1.2, -5.0)).length() < 1e-5);
    }

    #[test]
    fn test_hex_color_expansion() {
        let c = hex_color(0x4a90c8);
        assert!((c.x - 0x4a as f32 / 255.0).abs() < 1e-6);
        assert!((c.y - 0x90 as f32 / 255.0).abs() < 1e-6);
        assert!((c.z - 0xc8 as f32 / 255.0).abs() < 1e-6);
    }
}
