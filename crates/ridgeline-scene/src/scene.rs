//! Scene composition and shared state.

use crate::camera::Camera;
use crate::fog::Fog;
use crate::layer::{LAYER_COUNT, Layer, layer_params};
use crate::lighting::LightingRig;
use crate::scheduler::{AnimationScheduler, FrameUpdate};
use crate::starfield::StarField;
use glam::Vec3;

/// The whole backdrop scene, owned as one value.
///
/// There are no module-level singletons: the winit shell owns a `SceneState`
/// and passes it by reference to the scheduler, the viewport manager, the
/// pointer mapper, and the renderer. Lifetime is one mount-to-unmount cycle.
pub struct SceneState {
    pub fog: Fog,
    pub camera: Camera,
    pub stars: StarField,
    /// The three terrain layers in fixed front-to-back order.
    pub layers: [Layer; LAYER_COUNT],
    pub lights: LightingRig,
    pub scheduler: AnimationScheduler,
}

impl SceneState {
    /// Pure construction of the scene for a viewport of the given logical
    /// size. No event wiring and no GPU work happens here.
    ///
    /// Returns `None` when either dimension is zero: a missing or collapsed
    /// mount is a silent no-op, not an error.
    pub fn build(width: u32, height: u32, star_seed: u64) -> Option<Self> {
        if width == 0 || height == 0 {
            log::warn!("no viewport area ({width}x{height}); scene not built");
            return None;
        }

        let params = layer_params();
        Some(Self {
            fog: Fog::backdrop(),
            camera: Camera::backdrop(width as f32 / height as f32),
            stars: StarField::generate(star_seed),
            layers: params.map(Layer::new),
            lights: LightingRig::default(),
            scheduler: AnimationScheduler::new(),
        })
    }

    /// Apply one frame's animation state: per-layer times and star opacity.
    pub fn apply_frame(&mut self, update: FrameUpdate) {
        for (layer, time) in self.layers.iter_mut().zip(update.layer_times) {
            layer.time = time;
        }
        self.stars.opacity = update.star_opacity;
    }

    /// Move the point light. Single writer: only the pointer mapper path
    /// calls this, and every reader derives from `lights.point.position`.
    pub fn set_light_position(&mut self, position: Vec3) {
        self.lights.point.position = position;
    }
}
