//! Scene renderer: owns pipelines and per-layer GPU resources, encodes one
//! frame from a [`SceneState`].

use glam::{Vec3, Vec4};
use ridgeline_scene::layer::LAYER_COUNT;
use ridgeline_scene::scene::SceneState;

use crate::buffer::{BufferAllocator, MeshBuffer};
use crate::frame::{FrameEncoder, RenderPassBuilder};
use crate::gpu::{FrameError, RenderContext};
use crate::stars::{STAR_SHADER_SOURCE, StarPipeline, StarUniform};
use crate::terrain::{LayerUniform, TERRAIN_SHADER_SOURCE, TerrainPipeline};

struct LayerResources {
    mesh: MeshBuffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct StarResources {
    vertex_buffer: wgpu::Buffer,
    star_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// All GPU-side scene resources. Built once per mount; geometry is static,
/// only uniform buffers are rewritten each frame.
pub struct SceneRenderer {
    terrain_pipeline: TerrainPipeline,
    star_pipeline: StarPipeline,
    layers: [LayerResources; LAYER_COUNT],
    stars: StarResources,
    pass_builder: RenderPassBuilder,
}

impl SceneRenderer {
    /// Upload scene geometry and build both pipelines.
    pub fn new(gpu: &RenderContext, scene: &SceneState) -> Self {
        let terrain_shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("terrain-shader"),
                source: wgpu::ShaderSource::Wgsl(TERRAIN_SHADER_SOURCE.into()),
            });
        let star_shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("star-shader"),
                source: wgpu::ShaderSource::Wgsl(STAR_SHADER_SOURCE.into()),
            });

        let terrain_pipeline =
            TerrainPipeline::new(&gpu.device, &terrain_shader, gpu.surface_format);
        let star_pipeline = StarPipeline::new(&gpu.device, &star_shader, gpu.surface_format);

        let allocator = BufferAllocator::new(&gpu.device);

        let layers = std::array::from_fn(|i| {
            let layer = &scene.layers[i];
            let label = format!("layer-{i}");
            let mesh = allocator.create_mesh(&label, layer.mesh.vertex_bytes(), &layer.mesh.indices);
            let uniform_buffer =
                allocator.create_uniform(&format!("{label}-uniform"), LayerUniform::SIZE);
            let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&format!("{label}-bind-group")),
                layout: &terrain_pipeline.layer_bind_group_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
            LayerResources {
                mesh,
                uniform_buffer,
                bind_group,
            }
        });

        let star_vertex_buffer = allocator.create_points("stars", scene.stars.vertex_bytes());
        let star_uniform_buffer = allocator.create_uniform("star-uniform", StarUniform::SIZE);
        let star_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("star-bind-group"),
            layout: &star_pipeline.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: star_uniform_buffer.as_entire_binding(),
            }],
        });

        let stars = StarResources {
            vertex_buffer: star_vertex_buffer,
            star_count: scene.stars.len(),
            uniform_buffer: star_uniform_buffer,
            bind_group: star_bind_group,
        };

        let pass_builder = RenderPassBuilder::with_fog_clear(&scene.fog);

        log::info!(
            "scene renderer ready: {} layers, {} stars",
            LAYER_COUNT,
            stars.star_count
        );

        Self {
            terrain_pipeline,
            star_pipeline,
            layers,
            stars,
            pass_builder,
        }
    }

    /// Rewrite every uniform buffer from the current scene state.
    ///
    /// All layers read the light position from the same `SceneState` field
    /// within this one call, so no frame can mix old and new positions.
    pub fn update(&self, queue: &wgpu::Queue, scene: &SceneState) {
        let view_proj = scene.camera.view_projection_matrix().to_cols_array_2d();
        let camera_pos = vec4_of(scene.camera.position);
        let light_pos = vec4_of(scene.lights.point.position);

        for (layer, resources) in scene.layers.iter().zip(&self.layers) {
            let uniform = LayerUniform {
                model: layer.model_matrix().to_cols_array_2d(),
                view_proj,
                camera_pos,
                light_pos,
                color_opacity: [
                    layer.params.color.x,
                    layer.params.color.y,
                    layer.params.color.z,
                    layer.params.opacity,
                ],
                time_depth: [layer.time, layer.params.depth, 0.0, 0.0],
            };
            queue.write_buffer(
                &resources.uniform_buffer,
                0,
                bytemuck::bytes_of(&uniform),
            );
        }

        let star_uniform = StarUniform {
            view_proj,
            opacity: [scene.stars.opacity, 0.0, 0.0, 0.0],
        };
        queue.write_buffer(
            &self.stars.uniform_buffer,
            0,
            bytemuck::bytes_of(&star_uniform),
        );
    }

    /// Encode and present one frame: stars first, then terrain layers back
    /// to front so alpha blending composites correctly without a depth
    /// buffer.
    pub fn render(&self, gpu: &RenderContext) -> Result<(), FrameError> {
        let surface_texture = gpu.acquire_frame()?;
        let mut frame = FrameEncoder::new(&gpu.device, surface_texture);

        {
            let view = frame.view().clone();
            let mut pass = self.pass_builder.begin(frame.encoder_mut(), &view);

            pass.set_pipeline(&self.star_pipeline.pipeline);
            pass.set_bind_group(0, &self.stars.bind_group, &[]);
            pass.set_vertex_buffer(0, self.stars.vertex_buffer.slice(..));
            pass.draw(0..self.stars.star_count, 0..1);

            pass.set_pipeline(&self.terrain_pipeline.pipeline);
            for resources in self.layers.iter().rev() {
                pass.set_bind_group(0, &resources.bind_group, &[]);
                resources.mesh.draw(&mut pass);
            }
        }

        frame.finish(&gpu.queue);
        Ok(())
    }
}

fn vec4_of(v: Vec3) -> [f32; 4] {
    Vec4::new(v.x, v.y, v.z, 0.0).to_array()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_padding() {
        let v = vec4_of(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v, [1.0, 2.0, 3.0, 0.0]);
    }
}
