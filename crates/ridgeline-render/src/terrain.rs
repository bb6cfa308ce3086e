//! Terrain layer pipeline: noise displacement in the vertex stage, lighting,
//! fresnel, elevation tint, and fog in the fragment stage.

use bytemuck::{Pod, Zeroable};
use std::num::NonZeroU64;

use crate::buffer::terrain_vertex_layout;

/// Per-layer uniform block, 192 bytes, std140-compatible.
///
/// Typed schema for the WGSL `LayerUniform` struct: the Rust and shader
/// field orders must stay in lockstep. Written once per layer per frame.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LayerUniform {
    /// Local-to-world transform of the layer's plane.
    pub model: [[f32; 4]; 4],
    /// Camera view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// xyz = camera world position, w unused.
    pub camera_pos: [f32; 4],
    /// xyz = shared point-light world position, w unused.
    pub light_pos: [f32; 4],
    /// rgb = base color, a = layer opacity.
    pub color_opacity: [f32; 4],
    /// x = elapsed layer time, y = layer depth, zw unused.
    pub time_depth: [f32; 4],
}

impl LayerUniform {
    /// Buffer size of one uniform block.
    pub const SIZE: u64 = std::mem::size_of::<LayerUniform>() as u64;
}

/// Pipeline drawing one transparent, double-sided terrain layer.
pub struct TerrainPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub layer_bind_group_layout: wgpu::BindGroupLayout,
}

impl TerrainPipeline {
    /// Create the terrain pipeline for the given surface format.
    ///
    /// Layers are alpha-blended back to front with no depth buffer; culling
    /// is disabled because displaced ridges show their underside at grazing
    /// angles.
    pub fn new(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        let layer_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("layer-bind-group-layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(LayerUniform::SIZE),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("terrain-pipeline-layout"),
            bind_group_layouts: &[&layer_bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("terrain-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[terrain_vertex_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None, // double-sided
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview_mask: None,
            cache: None,
        });

        Self {
            pipeline,
            layer_bind_group_layout,
        }
    }
}

/// WGSL source of the terrain shader.
///
/// The vertex stage is the GPU side of the displacement contract mirrored by
/// `ridgeline-noise`: identical simplex kernel, identical octave constants.
/// The fragment stage applies, in this exact order: diffuse + ambient,
/// fresnel rim, elevation tint toward the peak color, then distance fog.
/// Reordering those steps changes the blend result.
pub const TERRAIN_SHADER_SOURCE: &str = r#"
struct LayerUniform {
    model: mat4x4<f32>,
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
    light_pos: vec4<f32>,
    color_opacity: vec4<f32>,
    time_depth: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> layer: LayerUniform;

// 3-D simplex noise, period-289 lattice hash.
fn mod289_v3(x: vec3<f32>) -> vec3<f32> {
    return x - floor(x * (1.0 / 289.0)) * 289.0;
}

fn mod289_v4(x: vec4<f32>) -> vec4<f32> {
    return x - floor(x * (1.0 / 289.0)) * 289.0;
}

fn permute(x: vec4<f32>) -> vec4<f32> {
    return mod289_v4(((x * 34.0) + 1.0) * x);
}

fn taylor_inv_sqrt(r: vec4<f32>) -> vec4<f32> {
    return 1.79284291400159 - 0.85373472095314 * r;
}

fn snoise(v: vec3<f32>) -> f32 {
    let C = vec2<f32>(1.0 / 6.0, 1.0 / 3.0);
    let D = vec4<f32>(0.0, 0.5, 1.0, 2.0);

    var i = floor(v + dot(v, C.yyy));
    let x0 = v - i + dot(i, C.xxx);

    let g = step(x0.yzx, x0.xyz);
    let l = 1.0 - g;
    let i1 = min(g.xyz, l.zxy);
    let i2 = max(g.xyz, l.zxy);

    let x1 = x0 - i1 + C.xxx;
    let x2 = x0 - i2 + C.yyy;
    let x3 = x0 - D.yyy;

    i = mod289_v3(i);
    let p = permute(permute(permute(
              i.z + vec4<f32>(0.0, i1.z, i2.z, 1.0))
            + i.y + vec4<f32>(0.0, i1.y, i2.y, 1.0))
            + i.x + vec4<f32>(0.0, i1.x, i2.x, 1.0));

    let n_ = 0.142857142857;
    let ns = n_ * D.wyz - D.xzx;
    let j = p - 49.0 * floor(p * ns.z * ns.z);

    let x_ = floor(j * ns.z);
    let y_ = floor(j - 7.0 * x_);

    let x = x_ * ns.x + ns.yyyy;
    let y = y_ * ns.x + ns.yyyy;
    let h = 1.0 - abs(x) - abs(y);

    let b0 = vec4<f32>(x.xy, y.xy);
    let b1 = vec4<f32>(x.zw, y.zw);

    let s0 = floor(b0) * 2.0 + 1.0;
    let s1 = floor(b1) * 2.0 + 1.0;
    let sh = -step(h, vec4<f32>(0.0));

    let a0 = b0.xzyw + s0.xzyw * sh.xxyy;
    let a1 = b1.xzyw + s1.xzyw * sh.zzww;

    var p0 = vec3<f32>(a0.xy, h.x);
    var p1 = vec3<f32>(a0.zw, h.y);
    var p2 = vec3<f32>(a1.xy, h.z);
    var p3 = vec3<f32>(a1.zw, h.w);

    let norm = taylor_inv_sqrt(vec4<f32>(dot(p0, p0), dot(p1, p1), dot(p2, p2), dot(p3, p3)));
    p0 = p0 * norm.x;
    p1 = p1 * norm.y;
    p2 = p2 * norm.z;
    p3 = p3 * norm.w;

    var m = max(0.6 - vec4<f32>(dot(x0, x0), dot(x1, x1), dot(x2, x2), dot(x3, x3)), vec4<f32>(0.0));
    m = m * m;
    return 42.0 * dot(m * m, vec4<f32>(dot(p0, x0), dot(p1, x1), dot(p2, x2), dot(p3, x3)));
}

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
    @location(1) world_position: vec3<f32>,
    @location(2) elevation: f32,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    let t = layer.time_depth.x;
    let depth = layer.time_depth.y;

    let freq = 0.5 + depth * 0.15;
    let amp = 1.2 + depth * 0.4;

    // Three octaves: sharp peaks over broad swells, drifting with time.
    var displacement = snoise(vec3<f32>(in.position.x * freq, in.position.y * freq - t * 0.12, depth)) * amp;
    displacement = displacement + snoise(vec3<f32>(in.position.x * freq * 2.5, in.position.y * freq * 2.5 - t * 0.12, depth)) * (amp * 0.6);
    displacement = displacement + snoise(vec3<f32>(in.position.x * freq * 5.0, in.position.y * freq * 5.0 - t * 0.08, depth)) * (amp * 0.3);

    let displaced = in.position + in.normal * displacement;
    let world = layer.model * vec4<f32>(displaced, 1.0);

    var out: VertexOutput;
    out.clip_position = layer.view_proj * world;
    out.world_normal = normalize((layer.model * vec4<f32>(in.normal, 0.0)).xyz);
    out.world_position = world.xyz;
    out.elevation = displacement;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let normal = normalize(in.world_normal);
    let light_dir = normalize(layer.light_pos.xyz - in.world_position);

    // 1. Diffuse + ambient.
    let diffuse = max(dot(normal, light_dir), 0.0);
    let ambient = 0.25;

    // 2. Fresnel rim on silhouette edges.
    let view_dir = normalize(layer.camera_pos.xyz - in.world_position);
    let fresnel = pow(1.0 - max(dot(normal, view_dir), 0.0), 2.5);

    // 3. Elevation tint: higher terrain reads as snow-capped.
    let elevation_factor = smoothstep(-0.3, 1.2, in.elevation);
    let peak_color = vec3<f32>(0.85, 0.92, 1.0);
    let mixed = mix(layer.color_opacity.rgb, peak_color, elevation_factor * 0.5);

    var final_color = mixed * (diffuse * 0.8 + ambient) + mixed * fresnel * 0.7;

    // 4. Atmospheric fog toward the horizon.
    let dist = distance(in.world_position, layer.camera_pos.xyz);
    let fog_factor = smoothstep(8.0, 20.0, dist);
    let fog_color = vec3<f32>(0.04, 0.1, 0.16);
    final_color = mix(final_color, fog_color, fog_factor * 0.25);

    return vec4<f32>(final_color, layer.color_opacity.a);
}
"#;
