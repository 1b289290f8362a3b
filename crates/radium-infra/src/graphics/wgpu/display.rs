// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The `wgpu` implementation of [`DisplayDevice`].

use super::context::WgpuGraphicsContext;
use super::conversions::{quad_vertex_layout, IntoWgpu};
use super::TEXTURED_QUAD_WGSL;
use crate::platform::WinitWindow;
use radium_core::config::AppConfig;
use radium_core::error::{RaError, RaResult};
use radium_core::renderer::{
    check_texture_size, check_texture_write, AddressMode, DisplayDevice, FilterMode,
    MeshDescriptor, MeshId, TextureDescriptor, TextureId,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use wgpu::util::DeviceExt;

/// Display textures hold sRGB-encoded RGBA8, the layout of the drawing surface.
const DISPLAY_TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

#[derive(Debug)]
struct WgpuTextureEntry {
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    size: (u32, u32),
}

#[derive(Debug)]
struct WgpuMeshEntry {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

/// A display device that draws textured quads with `wgpu` and presents them
/// to a window surface.
///
/// Draws are queued by [`DisplayDevice::draw_textured`] and recorded into a
/// single render pass by [`DisplayDevice::present`].
#[derive(Debug)]
pub struct WgpuDisplay {
    context: Mutex<WgpuGraphicsContext>,
    bind_group_layout: wgpu::BindGroupLayout,
    pipeline: wgpu::RenderPipeline,
    samplers: Mutex<HashMap<(AddressMode, FilterMode), Arc<wgpu::Sampler>>>,
    textures: Mutex<HashMap<TextureId, WgpuTextureEntry>>,
    meshes: Mutex<HashMap<MeshId, WgpuMeshEntry>>,
    queued_draws: Mutex<Vec<(TextureId, MeshId)>>,
    next_texture_id: AtomicUsize,
    next_mesh_id: AtomicUsize,
    clear_color: wgpu::Color,
}

impl WgpuDisplay {
    /// Creates the graphics context for `window` and the triangle-strip
    /// textured-quad pipeline.
    pub fn new(window: &WinitWindow, config: &AppConfig) -> anyhow::Result<Self> {
        let context = WgpuGraphicsContext::new(window, config.vsync)?;
        let device = &context.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Radium Textured Quad Shader"),
            source: wgpu::ShaderSource::Wgsl(TEXTURED_QUAD_WGSL.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Radium Display Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Radium Display Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline =
            create_quad_pipeline(device, &layout, &shader, context.surface_config.format);
        log::info!(
            "WgpuDisplay ready on \"{}\" ({:?})",
            context.adapter_name,
            context.adapter_backend
        );

        Ok(Self {
            context: Mutex::new(context),
            bind_group_layout,
            pipeline,
            samplers: Mutex::new(HashMap::new()),
            textures: Mutex::new(HashMap::new()),
            meshes: Mutex::new(HashMap::new()),
            queued_draws: Mutex::new(Vec::new()),
            next_texture_id: AtomicUsize::new(0),
            next_mesh_id: AtomicUsize::new(0),
            clear_color: config.clear_color.into_wgpu(),
        })
    }

    fn sampler(
        &self,
        device: &wgpu::Device,
        address_mode: AddressMode,
        filter: FilterMode,
    ) -> RaResult<Arc<wgpu::Sampler>> {
        let mut samplers = lock(&self.samplers, "samplers")?;
        let sampler = samplers.entry((address_mode, filter)).or_insert_with(|| {
            log::debug!("WgpuDisplay: Creating sampler {address_mode:?}/{filter:?}");
            let address_mode = address_mode.into_wgpu();
            let filter = filter.into_wgpu();
            Arc::new(device.create_sampler(&wgpu::SamplerDescriptor {
                label: Some("Radium Display Sampler"),
                address_mode_u: address_mode,
                address_mode_v: address_mode,
                address_mode_w: address_mode,
                mag_filter: filter,
                min_filter: filter,
                ..Default::default()
            }))
        });
        Ok(Arc::clone(sampler))
    }
}

fn create_quad_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Radium Textured Quad Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            buffers: &[quad_vertex_layout()],
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleStrip,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                // The drawing surface stores premultiplied alpha.
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        multiview: None,
        cache: None,
    })
}

fn lock<'a, T>(mutex: &'a Mutex<T>, what: &str) -> RaResult<MutexGuard<'a, T>> {
    mutex
        .lock()
        .map_err(|e| RaError::fail(format!("Mutex poisoned ({what}): {e}")))
}

impl DisplayDevice for WgpuDisplay {
    fn create_texture(&self, descriptor: &TextureDescriptor) -> RaResult<TextureId> {
        let context = lock(&self.context, "context")?;
        check_texture_size(
            descriptor.width,
            descriptor.height,
            context.max_texture_dimension(),
        )?;

        let sampler = self.sampler(&context.device, descriptor.address_mode, descriptor.filter)?;
        let (texture, bind_group) = context.validated("texture creation", |device, _| {
            let texture = device.create_texture(&wgpu::TextureDescriptor {
                label: descriptor.label.as_deref(),
                size: [descriptor.width, descriptor.height].into_wgpu(),
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: DISPLAY_TEXTURE_FORMAT,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            });
            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: descriptor.label.as_deref(),
                layout: &self.bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            });
            (texture, bind_group)
        })?;

        let id = TextureId(self.next_texture_id.fetch_add(1, Ordering::Relaxed));
        lock(&self.textures, "textures")?.insert(
            id,
            WgpuTextureEntry {
                texture,
                bind_group,
                size: (descriptor.width, descriptor.height),
            },
        );
        log::debug!(
            "WgpuDisplay: Created texture {:?} ({}x{}) with ID: {id:?}",
            descriptor.label.as_deref().unwrap_or_default(),
            descriptor.width,
            descriptor.height
        );
        Ok(id)
    }

    fn destroy_texture(&self, id: TextureId) -> RaResult<()> {
        let entry = lock(&self.textures, "textures")?
            .remove(&id)
            .ok_or_else(|| RaError::invalid_argument(format!("unknown texture {id:?}")))?;
        entry.texture.destroy();
        log::debug!("WgpuDisplay: Destroyed texture with ID: {id:?}");
        Ok(())
    }

    fn write_texture(
        &self,
        id: TextureId,
        data: &[u8],
        bytes_per_row: u32,
        origin: [u32; 2],
        size: [u32; 2],
    ) -> RaResult<()> {
        let context = lock(&self.context, "context")?;
        let textures = lock(&self.textures, "textures")?;
        let entry = textures
            .get(&id)
            .ok_or_else(|| RaError::invalid_argument(format!("unknown texture {id:?}")))?;
        check_texture_write(entry.size, data.len(), bytes_per_row, origin, size)?;

        context.validated("texture upload", |_, queue| {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &entry.texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d {
                        x: origin[0],
                        y: origin[1],
                        z: 0,
                    },
                    aspect: wgpu::TextureAspect::All,
                },
                data,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(bytes_per_row),
                    rows_per_image: Some(size[1]),
                },
                size.into_wgpu(),
            )
        })?;
        log::trace!(
            "WgpuDisplay: Wrote {} bytes to texture ID: {id:?} at {origin:?}",
            data.len()
        );
        Ok(())
    }

    fn texture_size(&self, id: TextureId) -> RaResult<(u32, u32)> {
        lock(&self.textures, "textures")?
            .get(&id)
            .map(|entry| entry.size)
            .ok_or_else(|| RaError::invalid_argument(format!("unknown texture {id:?}")))
    }

    fn create_mesh(&self, descriptor: &MeshDescriptor) -> RaResult<MeshId> {
        if descriptor.vertices.is_empty() {
            return Err(RaError::invalid_argument("a mesh needs at least one vertex"));
        }

        let context = lock(&self.context, "context")?;
        let buffer = context.validated("mesh creation", |device, _| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: descriptor.label.as_deref(),
                contents: bytemuck::cast_slice(&descriptor.vertices[..]),
                usage: wgpu::BufferUsages::VERTEX,
            })
        })?;

        let id = MeshId(self.next_mesh_id.fetch_add(1, Ordering::Relaxed));
        lock(&self.meshes, "meshes")?.insert(
            id,
            WgpuMeshEntry {
                buffer,
                vertex_count: descriptor.vertices.len() as u32,
            },
        );
        log::debug!(
            "WgpuDisplay: Created mesh {:?} ({} vertices) with ID: {id:?}",
            descriptor.label.as_deref().unwrap_or_default(),
            descriptor.vertices.len()
        );
        Ok(id)
    }

    fn destroy_mesh(&self, id: MeshId) -> RaResult<()> {
        let entry = lock(&self.meshes, "meshes")?
            .remove(&id)
            .ok_or_else(|| RaError::invalid_argument(format!("unknown mesh {id:?}")))?;
        entry.buffer.destroy();
        log::debug!("WgpuDisplay: Destroyed mesh with ID: {id:?}");
        Ok(())
    }

    fn draw_textured(&self, texture: TextureId, mesh: MeshId) -> RaResult<()> {
        if !lock(&self.textures, "textures")?.contains_key(&texture) {
            return Err(RaError::invalid_argument(format!("unknown texture {texture:?}")));
        }
        if !lock(&self.meshes, "meshes")?.contains_key(&mesh) {
            return Err(RaError::invalid_argument(format!("unknown mesh {mesh:?}")));
        }
        lock(&self.queued_draws, "queued draws")?.push((texture, mesh));
        Ok(())
    }

    fn present(&self) -> RaResult<()> {
        let draws = std::mem::take(&mut *lock(&self.queued_draws, "queued draws")?);
        let context = lock(&self.context, "context")?;

        let frame = match context.get_current_texture() {
            Ok(frame) => frame,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::warn!("WgpuDisplay: Surface {e}, reconfiguring and skipping the frame");
                context.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("WgpuDisplay: Timed out acquiring a frame, skipping it");
                return Ok(());
            }
            Err(e) => return Err(RaError::fail(format!("failed to acquire a frame: {e}"))),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Radium Frame Encoder"),
            });
        {
            let textures = lock(&self.textures, "textures")?;
            let meshes = lock(&self.meshes, "meshes")?;
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Radium Display Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
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
            });

            for (texture_id, mesh_id) in &draws {
                let (Some(texture), Some(mesh)) = (textures.get(texture_id), meshes.get(mesh_id))
                else {
                    log::warn!("WgpuDisplay: Skipping draw of released {texture_id:?}/{mesh_id:?}");
                    continue;
                };
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &texture.bind_group, &[]);
                pass.set_vertex_buffer(0, mesh.buffer.slice(..));
                pass.draw(0..mesh.vertex_count, 0..1);
            }
        }

        context.queue.submit(Some(encoder.finish()));
        frame.present();
        log::trace!("WgpuDisplay: Presented {} draw(s)", draws.len());
        Ok(())
    }

    fn resize(&self, width: u32, height: u32) -> RaResult<()> {
        lock(&self.context, "context")?.resize(width, height);
        Ok(())
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        match self.context.lock() {
            Ok(context) => context.size(),
            Err(_) => (0, 0),
        }
    }
}
