//! Frame encoding: command encoder lifecycle and render pass construction.

use ridgeline_scene::fog::Fog;

/// Builds the backdrop's single render pass.
///
/// There is no depth attachment: layers are composited back to front with
/// alpha blending, so painter's order replaces the depth test.
pub struct RenderPassBuilder {
    clear_color: wgpu::Color,
}

impl RenderPassBuilder {
    /// Clear to the fog color so unpainted sky and fogged horizon agree.
    pub fn with_fog_clear(fog: &Fog) -> Self {
        Self {
            clear_color: wgpu::Color {
                r: fog.color.x as f64,
                g: fog.color.y as f64,
                b: fog.color.z as f64,
                a: 1.0,
            },
        }
    }

    pub fn clear_color(&self) -> wgpu::Color {
        self.clear_color
    }

    /// Begin the pass targeting `view`, clearing to the configured color.
    pub fn begin<'a>(
        &self,
        encoder: &'a mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) -> wgpu::RenderPass<'a> {
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("backdrop-pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}

/// One frame's command encoder and surface texture, submitted and presented
/// together in [`FrameEncoder::finish`].
pub struct FrameEncoder {
    encoder: wgpu::CommandEncoder,
    surface_texture: wgpu::SurfaceTexture,
    view: wgpu::TextureView,
}

impl FrameEncoder {
    pub fn new(device: &wgpu::Device, surface_texture: wgpu::SurfaceTexture) -> Self {
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame-encoder"),
        });
        Self {
            encoder,
            surface_texture,
            view,
        }
    }

    /// The surface texture view this frame draws into.
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn encoder_mut(&mut self) -> &mut wgpu::CommandEncoder {
        &mut self.encoder
    }

    /// Submit recorded commands and present the frame.
    pub fn finish(self, queue: &wgpu::Queue) {
        queue.submit(std::iter::once(self.encoder.finish()));
        self.surface_texture.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_color_matches_fog() {
        let builder = RenderPassBuilder::with_fog_clear(&Fog::backdrop());
        let clear = builder.clear_color();
        assert!((clear.r - 0x0a as f64 / 255.0).abs() < 1e-6);
        assert!((clear.g - 0x19 as f64 / 255.0).abs() < 1e-6);
        assert!((clear.b - 0x29 as f64 / 255.0).abs() < 1e-6);
        assert_eq!(clear.a, 1.0);
    }
}
