//! Scene data model for the mountain backdrop.
//!
//! Everything in this crate is plain data and pure functions: camera and fog
//! descriptors, the three terrain layers, the star field, the lighting rig,
//! the animation scheduler, the viewport manager, and the pointer-to-light
//! mapper. No GPU types appear here; `ridgeline-render` uploads and draws
//! what this crate describes.

pub mod camera;
pub mod fog;
pub mod layer;
pub mod lighting;
pub mod plane;
pub mod pointer;
pub mod scene;
pub mod scheduler;
pub mod starfield;
pub mod viewport;

pub use camera::Camera;
pub use fog::Fog;
pub use layer::{LAYER_COUNT, Layer, LayerParams};
pub use lighting::{AmbientLight, DirectionalLight, LightingRig, PointLight};
pub use plane::{PlaneMesh, PlaneVertex};
pub use pointer::pointer_to_light;
pub use scene::SceneState;
pub use scheduler::{AnimationScheduler, FrameUpdate};
pub use starfield::{STAR_COUNT, StarField};
pub use viewport::{Viewport, ViewportUpdate};
