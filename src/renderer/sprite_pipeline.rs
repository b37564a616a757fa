//! WebGPU sprite pipeline
//!
//! Sprites queued between `clear` and `display` are turned into one vertex
//! buffer; consecutive sprites sharing a texture are drawn with one call.

use std::ops::Range;

use anyhow::Context;
use glam::Vec2;
use wgpu::util::DeviceExt;

use super::Canvas;
use super::shapes::sprite_quad;
use super::texture::{GpuTexture, TextureData};
use super::vertex::Vertex;
use crate::sprite::{Sprite, TextureHandle};

/// A run of vertices drawn with one texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub texture: u32,
    pub vertices: Range<u32>,
}

/// CPU-side contents of one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub batches: Vec<Batch>,
}

impl DrawList {
    pub fn reset(&mut self, clear_color: [f32; 4]) {
        self.clear_color = clear_color;
        self.vertices.clear();
        self.batches.clear();
    }

    pub fn push(&mut self, sprite: &Sprite, viewport: Vec2) {
        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&sprite_quad(sprite, viewport));
        let end = self.vertices.len() as u32;

        let texture = sprite.texture().id;
        match self.batches.last_mut() {
            Some(batch) if batch.texture == texture => batch.vertices.end = end,
            _ => self.batches.push(Batch {
                texture,
                vertices: start..end,
            }),
        }
    }
}

pub struct SpriteRenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,

    texture_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    textures: Vec<GpuTexture>,

    draw_list: DrawList,

    /// Viewport size in pixels
    pub size: (u32, u32),
}

impl SpriteRenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("ball-drop-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await
            .context("failed to create device")?;

        let surface_caps = surface.get_capabilities(adapter);
        log::info!("Surface formats: {:?}", surface_caps.formats);

        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprite_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("sprite.wgsl").into()),
        });

        let texture_layout = GpuTexture::bind_group_layout(&device);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprite_pipeline_layout"),
            bind_group_layouts: &[&texture_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sprite_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sprite_sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            texture_layout,
            sampler,
            textures: Vec::new(),
            draw_list: DrawList::default(),
            size: (width, height),
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Upload a texture; the handle stays valid for the renderer's lifetime
    pub fn create_texture(&mut self, data: &TextureData) -> TextureHandle {
        let texture = GpuTexture::upload(
            &self.device,
            &self.queue,
            &self.texture_layout,
            &self.sampler,
            data,
        );
        self.textures.push(texture);
        TextureHandle {
            id: (self.textures.len() - 1) as u32,
            width: data.width,
            height: data.height,
        }
    }

    fn viewport(&self) -> Vec2 {
        Vec2::new(self.size.0 as f32, self.size.1 as f32)
    }
}

impl Canvas for SpriteRenderState {
    type Error = wgpu::SurfaceError;

    fn clear(&mut self, color: [f32; 4]) {
        self.draw_list.reset(color);
    }

    fn draw(&mut self, sprite: &Sprite) {
        let viewport = self.viewport();
        self.draw_list.push(sprite, viewport);
    }

    fn display(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let vertex_buffer = (!self.draw_list.vertices.is_empty()).then(|| {
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("sprite_vertex_buffer"),
                    contents: bytemuck::cast_slice(&self.draw_list.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                })
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("sprite_encoder"),
            });

        {
            let [r, g, b, a] = self.draw_list.clear_color;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sprite_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if let Some(buffer) = &vertex_buffer {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                for batch in &self.draw_list.batches {
                    // Unknown texture ids are skipped
                    if let Some(texture) = self.textures.get(batch.texture as usize) {
                        render_pass.set_bind_group(0, &texture.bind_group, &[]);
                        render_pass.draw(batch.vertices.clone(), 0..1);
                    }
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
