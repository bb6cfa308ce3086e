//! wgpu rendering for the mountain backdrop: GPU context and surface
//! management, frame encoding, and the terrain and star pipelines.

pub mod buffer;
pub mod frame;
pub mod gpu;
pub mod renderer;
pub mod stars;
pub mod terrain;

pub use buffer::{BufferAllocator, MeshBuffer};
pub use frame::{FrameEncoder, RenderPassBuilder};
pub use gpu::{FrameError, RenderContext, RenderContextError, init_render_context_blocking};
pub use renderer::SceneRenderer;
pub use stars::{STAR_SHADER_SOURCE, StarPipeline, StarUniform};
pub use terrain::{LayerUniform, TERRAIN_SHADER_SOURCE, TerrainPipeline};
