//! Perspective camera for the backdrop scene.

use glam::{Mat4, Quat, Vec3};

/// A perspective camera with a fixed position and pitch.
///
/// The aspect ratio is the only field mutated after construction; the
/// viewport manager updates it on host resize events.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Position in world space.
    pub position: Vec3,
    /// Rotation as a unit quaternion.
    pub rotation: Quat,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
}

impl Camera {
    /// The scene camera: 60° field of view, 0.1/100 clip planes, raised
    /// slightly above the horizon with a small downward pitch.
    pub fn backdrop(aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.5, 5.0),
            rotation: Quat::from_rotation_x(-0.15),
            fov_y: 60f32.to_radians(),
            aspect_ratio,
            near: 0.1,
            far: 100.0,
        }
    }

    /// Compute the view matrix (inverse of the camera transform).
    pub fn view_matrix(&self) -> Mat4 {
        (Mat4::from_translation(self.position) * Mat4::from_quat(self.rotation)).inverse()
    }

    /// Compute the projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect_ratio, self.near, self.far)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio from viewport dimensions.
    ///
    /// A zero dimension would make the projection degenerate, so the update
    /// is skipped and the prior aspect ratio is kept.
    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            log::warn!("ignoring degenerate aspect ratio {width}x{height}");
            return;
        }
        self.aspect_ratio = width / height;
    }
}
