// SPDX-License-Identifier: GPL-3.0-only

//! GPU presenter
//!
//! Owns the texture/pipeline lifecycle on the render thread and draws the
//! mode-resolved latest frame as a full-screen quad each surface refresh.
//! The frame texture has a fixed size independent of the surface; incoming
//! frames are normalized to RGBA and rescaled to it, then uploaded with a
//! sub-image update into the same texture every frame.
//!
//! Lifecycle: `Uninitialized -> Ready` via [`Presenter::on_surface_created`],
//! back to `Uninitialized` via [`Presenter::on_surface_destroyed`]. Every
//! entry point is safe to call in any state; a draw before init or after
//! destroy is a no-op. A failed init leaves the presenter inert rather than
//! crashing the render loop, and any per-frame failure degrades to "skip this
//! frame, keep the previous texture contents on screen".

use crate::config::{Config, SamplerFiltering};
use crate::errors::PresentError;
use crate::frame::{FrameBuffer, PixelLayout};
use crate::gpu;
use crate::session::{CameraSession, Orientation, RenderMode};
use std::sync::Arc;
use tracing::{debug, error, info, trace, warn};

/// Vertex for the two-triangle strip covering the viewport
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct QuadVertex {
    position: [f32; 2],
    tex_coord: [f32; 2],
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

/// GPU resources owned by a ready presenter
struct GpuContext {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    frame_texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    target: wgpu::Texture,
    target_view: wgpu::TextureView,
    surface_size: (u32, u32),
    /// Reusable CPU-side upload buffer, texture_width x texture_height x 4
    upload: Vec<u8>,
}

enum PresenterState {
    Uninitialized,
    Ready(Box<GpuContext>),
}

/// Renders the latest stored frame onto a fixed-size GPU texture
pub struct Presenter {
    session: Arc<CameraSession>,
    config: Config,
    state: PresenterState,
}

impl Presenter {
    /// Create an uninitialized presenter bound to a session
    pub fn new(session: Arc<CameraSession>, config: Config) -> Self {
        Self {
            session,
            config,
            state: PresenterState::Uninitialized,
        }
    }

    /// True once surface creation succeeded and resources exist
    pub fn is_ready(&self) -> bool {
        matches!(self.state, PresenterState::Ready(_))
    }

    /// Host surface came up: create device, pipeline, textures and buffers
    ///
    /// On failure the presenter stays inert; subsequent draw calls no-op
    /// safely instead of crashing the render loop.
    pub fn on_surface_created(&mut self) {
        match self.init_gpu() {
            Ok(ctx) => {
                info!(
                    texture_width = self.config.texture_width,
                    texture_height = self.config.texture_height,
                    filtering = self.config.filtering.display_name(),
                    "presenter initialized"
                );
                self.state = PresenterState::Ready(Box::new(ctx));
            }
            Err(e) => {
                error!(error = %e, "presenter init failed, staying inert");
                self.state = PresenterState::Uninitialized;
            }
        }
    }

    /// Host surface changed size: update the render target only
    ///
    /// The frame texture is never reallocated here; the draw quad covers the
    /// full target in normalized device coordinates regardless of its size.
    pub fn on_surface_resized(&mut self, width: u32, height: u32) {
        let PresenterState::Ready(ctx) = &mut self.state else {
            trace!(width, height, "resize before init, ignoring");
            return;
        };

        let width = width.max(1);
        let height = height.max(1);
        let (target, target_view) = create_target(&ctx.device, width, height);
        ctx.target = target;
        ctx.target_view = target_view;
        ctx.surface_size = (width, height);
        debug!(width, height, "surface resized");
    }

    /// Draw one frame: fetch, normalize, rescale, upload, draw
    ///
    /// Called once per display refresh. Every failure path skips this frame
    /// and leaves the previous texture contents on screen.
    pub fn on_draw_frame(&mut self) {
        let mode = self.session.render_mode();
        let orientation = self.session.orientation();
        let (texture_width, texture_height) =
            (self.config.texture_width, self.config.texture_height);

        let PresenterState::Ready(ctx) = &mut self.state else {
            trace!("draw before init, ignoring");
            return;
        };

        let frame = self.session.store().read_latest(mode);
        if frame.is_empty() {
            // Nothing to show; clear the target and keep going
            submit_pass(ctx, false);
            return;
        }

        let (frame_width, frame_height) = (frame.width(), frame.height());
        let mut rgba = normalize_rgba(&frame);

        if (frame_width, frame_height) != (texture_width, texture_height) {
            rgba = match rescale_rgba(rgba, frame_width, frame_height, texture_width, texture_height)
            {
                Ok(scaled) => scaled,
                Err(e) => {
                    warn!(
                        error = %e,
                        frame_width,
                        frame_height,
                        "rescale failed, skipping frame"
                    );
                    return;
                }
            };
        }

        let expected = texture_width as usize * texture_height as usize * 4;
        if rgba.len() != expected {
            warn!(
                expected,
                actual = rgba.len(),
                "upload size mismatch, skipping frame"
            );
            return;
        }

        ctx.upload.copy_from_slice(&rgba);
        if mode == RenderMode::BorderFix {
            clear_border(&mut ctx.upload, texture_width, texture_height);
        }

        // Sub-image update into the persistent texture; never reallocated
        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &ctx.frame_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &ctx.upload,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(texture_width * 4),
                rows_per_image: Some(texture_height),
            },
            wgpu::Extent3d {
                width: texture_width,
                height: texture_height,
                depth_or_array_layers: 1,
            },
        );

        let vertices = quad_vertices(
            orientation,
            mode == RenderMode::Inset,
            texture_width,
            texture_height,
        );
        ctx.queue
            .write_buffer(&ctx.vertex_buffer, 0, bytemuck::cast_slice(&vertices));

        submit_pass(ctx, true);
    }

    /// Host surface went away: release GPU resources and the upload buffer
    pub fn on_surface_destroyed(&mut self) {
        if matches!(self.state, PresenterState::Ready(_)) {
            info!("presenter destroyed, GPU resources released");
        }
        self.state = PresenterState::Uninitialized;
    }

    /// Read back the current render target as an RGBA frame
    ///
    /// Expensive; intended for tests and the demo's snapshot output, not the
    /// per-frame path.
    pub fn read_target_rgba(&self) -> Result<FrameBuffer, PresentError> {
        let PresenterState::Ready(ctx) = &self.state else {
            return Err(PresentError::NotReady);
        };
        let (width, height) = ctx.surface_size;

        let padded_bytes_per_row = (width * 4 + 255) & !255; // Align to 256 bytes

        let staging_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("edgecam_readback_staging"),
            size: (padded_bytes_per_row * height) as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("edgecam_readback_encoder"),
            });

        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &ctx.target,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &staging_buffer,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_bytes_per_row),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        ctx.queue.submit(std::iter::once(encoder.finish()));

        let buffer_slice = staging_buffer.slice(..);
        let (sender, receiver) = futures::channel::oneshot::channel();
        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = sender.send(result);
        });

        let _ = ctx.device.poll(wgpu::PollType::wait_indefinitely());

        pollster::block_on(receiver)
            .map_err(|_| PresentError::Gpu("buffer mapping channel closed".into()))?
            .map_err(|e| PresentError::Gpu(format!("failed to map staging buffer: {:?}", e)))?;

        let data = buffer_slice.get_mapped_range();
        let mut out = Vec::with_capacity((width * height * 4) as usize);
        if padded_bytes_per_row == width * 4 {
            out.extend_from_slice(&data[..(width * height * 4) as usize]);
        } else {
            for row in 0..height {
                let start = (row * padded_bytes_per_row) as usize;
                out.extend_from_slice(&data[start..start + (width * 4) as usize]);
            }
        }
        drop(data);
        staging_buffer.unmap();

        FrameBuffer::new(width, height, PixelLayout::Rgba, out)
            .map_err(|e| PresentError::Gpu(e.to_string()))
    }

    fn init_gpu(&self) -> Result<GpuContext, String> {
        let (device, queue, gpu_info) = gpu::create_render_device("edgecam_presenter")?;

        info!(
            adapter_name = %gpu_info.adapter_name,
            adapter_backend = ?gpu_info.backend,
            "GPU device created for presenter"
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("edgecam_quad_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("quad.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("edgecam_quad_bind_group_layout"),
            entries: &[
                // Frame texture
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
                // Sampler
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("edgecam_quad_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("edgecam_quad_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRIBUTES,
                }],
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: wgpu::TextureFormat::Rgba8Unorm,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            multiview: None,
            cache: None,
        });

        let (texture_width, texture_height) =
            (self.config.texture_width, self.config.texture_height);

        let frame_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("edgecam_frame_texture"),
            size: wgpu::Extent3d {
                width: texture_width,
                height: texture_height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let frame_view = frame_texture.create_view(&wgpu::TextureViewDescriptor::default());

        let filter = match self.config.filtering {
            SamplerFiltering::Nearest => wgpu::FilterMode::Nearest,
            SamplerFiltering::Linear => wgpu::FilterMode::Linear,
        };
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("edgecam_frame_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: filter,
            min_filter: filter,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("edgecam_quad_bind_group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&frame_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("edgecam_quad_vertex_buffer"),
            size: (std::mem::size_of::<QuadVertex>() * 4) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let vertices = quad_vertices(Orientation::default(), false, texture_width, texture_height);
        queue.write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(&vertices));

        let (surface_width, surface_height) =
            (self.config.fallback_width, self.config.fallback_height);
        let (target, target_view) = create_target(&device, surface_width, surface_height);

        Ok(GpuContext {
            device,
            queue,
            pipeline,
            vertex_buffer,
            frame_texture,
            bind_group,
            target,
            target_view,
            surface_size: (surface_width, surface_height),
            upload: vec![0u8; texture_width as usize * texture_height as usize * 4],
        })
    }
}

/// Create the offscreen color target standing in for the display surface
fn create_target(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::Texture, wgpu::TextureView) {
    let target = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("edgecam_surface_target"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });
    let view = target.create_view(&wgpu::TextureViewDescriptor::default());
    (target, view)
}

/// Encode and submit one pass: clear to black, optionally draw the quad
fn submit_pass(ctx: &GpuContext, draw: bool) {
    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("edgecam_present_encoder"),
        });

    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("edgecam_present_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &ctx.target_view,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if draw {
            pass.set_pipeline(&ctx.pipeline);
            pass.set_bind_group(0, Some(&ctx.bind_group), &[]);
            pass.set_vertex_buffer(0, ctx.vertex_buffer.slice(..));
            pass.draw(0..4, 0..1);
        }
    }

    ctx.queue.submit(std::iter::once(encoder.finish()));
}

/// Normalize any supported frame layout to packed RGBA
fn normalize_rgba(frame: &FrameBuffer) -> Vec<u8> {
    let data = frame.data();
    match frame.layout() {
        PixelLayout::Gray => {
            let mut out = Vec::with_capacity(data.len() * 4);
            for &v in data {
                out.extend_from_slice(&[v, v, v, 255]);
            }
            out
        }
        PixelLayout::Rgb => {
            let mut out = Vec::with_capacity(data.len() / 3 * 4);
            for p in data.chunks_exact(3) {
                out.extend_from_slice(&[p[0], p[1], p[2], 255]);
            }
            out
        }
        PixelLayout::Rgba => data.to_vec(),
    }
}

/// Rescale packed RGBA to the fixed texture dimensions
///
/// Always rescales, never crops, so aspect ratio is not preserved at this
/// layer.
fn rescale_rgba(
    data: Vec<u8>,
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
) -> Result<Vec<u8>, PresentError> {
    let expected = src_width as usize * src_height as usize * 4;
    let actual = data.len();
    let img = image::RgbaImage::from_raw(src_width, src_height, data)
        .ok_or(PresentError::SizeMismatch { expected, actual })?;
    let scaled = image::imageops::resize(
        &img,
        dst_width,
        dst_height,
        image::imageops::FilterType::Triangle,
    );
    Ok(scaled.into_raw())
}

/// Overwrite the 1-px border of an RGBA buffer with opaque black
///
/// Prevents edge-sampling artifacts from bleeding in from the texture border.
fn clear_border(buf: &mut [u8], width: u32, height: u32) {
    let w = width as usize;
    let h = height as usize;
    let black = [0u8, 0, 0, 255];

    for x in 0..w {
        buf[x * 4..x * 4 + 4].copy_from_slice(&black);
        let bottom = ((h - 1) * w + x) * 4;
        buf[bottom..bottom + 4].copy_from_slice(&black);
    }
    for y in 0..h {
        let left = y * w * 4;
        buf[left..left + 4].copy_from_slice(&black);
        let right = (y * w + w - 1) * 4;
        buf[right..right + 4].copy_from_slice(&black);
    }
}

/// Build the strip vertices for the given orientation and draw style
///
/// Vertex order is bottom-left, bottom-right, top-left, top-right. `inset`
/// pulls every texture coordinate half a texel inward to avoid boundary
/// sampling.
fn quad_vertices(
    orientation: Orientation,
    inset: bool,
    texture_width: u32,
    texture_height: u32,
) -> [QuadVertex; 4] {
    // Texture coordinates per screen corner: [top-left, top-right,
    // bottom-left, bottom-right]. v = 0 samples the first image row.
    let [tl, tr, bl, br] = match orientation {
        Orientation::Normal => [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
        Orientation::FlippedVertical => [[0.0, 1.0], [1.0, 1.0], [0.0, 0.0], [1.0, 0.0]],
        Orientation::Rotated90 => [[0.0, 1.0], [0.0, 0.0], [1.0, 1.0], [1.0, 0.0]],
        Orientation::Rotated180 => [[1.0, 1.0], [0.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
        Orientation::Rotated270 => [[1.0, 0.0], [1.0, 1.0], [0.0, 0.0], [0.0, 1.0]],
    };

    let apply = |coord: [f32; 2]| -> [f32; 2] {
        if !inset {
            return coord;
        }
        let half_u = 0.5 / texture_width as f32;
        let half_v = 0.5 / texture_height as f32;
        [
            if coord[0] == 0.0 { half_u } else { 1.0 - half_u },
            if coord[1] == 0.0 { half_v } else { 1.0 - half_v },
        ]
    };

    [
        QuadVertex {
            position: [-1.0, -1.0],
            tex_coord: apply(bl),
        },
        QuadVertex {
            position: [1.0, -1.0],
            tex_coord: apply(br),
        },
        QuadVertex {
            position: [-1.0, 1.0],
            tex_coord: apply(tl),
        },
        QuadVertex {
            position: [1.0, 1.0],
            tex_coord: apply(tr),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::FramePipeline;

    #[test]
    fn test_lifecycle_calls_are_safe_in_any_state() {
        let session = Arc::new(CameraSession::new());
        let mut presenter = Presenter::new(session, Config::default());

        // Before init: every entry point no-ops
        presenter.on_draw_frame();
        presenter.on_surface_resized(320, 240);
        assert!(!presenter.is_ready());
        assert_eq!(
            presenter.read_target_rgba().unwrap_err(),
            PresentError::NotReady
        );

        // Destroy without init is also a no-op
        presenter.on_surface_destroyed();
        presenter.on_draw_frame();
    }

    #[test]
    fn test_offscreen_render_smoke() {
        let session = Arc::new(CameraSession::new());
        let mut presenter = Presenter::new(session.clone(), Config::default());

        presenter.on_surface_created();
        if !presenter.is_ready() {
            // No GPU in this environment
            println!("Skipping test (no GPU)");
            return;
        }

        let pipeline = FramePipeline::new(session.clone());
        let width = 64usize;
        let height = 32usize;
        let mut data = vec![128u8; width * height];
        data.resize(width * height + width * height / 2, 128);
        pipeline.ingest(&data, 64, 32, 0).unwrap();

        presenter.on_surface_resized(320, 240);
        presenter.on_draw_frame();

        let target = presenter.read_target_rgba().unwrap();
        assert_eq!(target.width(), 320);
        assert_eq!(target.height(), 240);
        assert_eq!(target.layout(), PixelLayout::Rgba);

        presenter.on_surface_destroyed();
        assert!(!presenter.is_ready());
        presenter.on_draw_frame();
    }

    #[test]
    fn test_normalize_rgba_expands_channels() {
        let gray = FrameBuffer::new(2, 1, PixelLayout::Gray, vec![10, 20]).unwrap();
        assert_eq!(
            normalize_rgba(&gray),
            vec![10, 10, 10, 255, 20, 20, 20, 255]
        );

        let rgb = FrameBuffer::new(1, 1, PixelLayout::Rgb, vec![1, 2, 3]).unwrap();
        assert_eq!(normalize_rgba(&rgb), vec![1, 2, 3, 255]);

        let rgba = FrameBuffer::new(1, 1, PixelLayout::Rgba, vec![4, 5, 6, 7]).unwrap();
        assert_eq!(normalize_rgba(&rgba), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_rescale_changes_dimensions() {
        let data = vec![255u8; 4 * 4 * 4];
        let scaled = rescale_rgba(data, 4, 4, 8, 2).unwrap();
        assert_eq!(scaled.len(), 8 * 2 * 4);
    }

    #[test]
    fn test_clear_border_blacks_out_edges() {
        let mut buf = vec![200u8; 4 * 3 * 4];
        clear_border(&mut buf, 4, 3);

        // Corners and edges are black, center is untouched
        assert_eq!(&buf[0..4], &[0, 0, 0, 255]);
        let last = (4 * 3 - 1) * 4;
        assert_eq!(&buf[last..last + 4], &[0, 0, 0, 255]);
        let center = (1 * 4 + 1) * 4;
        assert_eq!(&buf[center..center + 4], &[200, 200, 200, 200]);
    }

    #[test]
    fn test_quad_vertices_orientations_are_distinct() {
        let coords: Vec<_> = Orientation::ALL
            .iter()
            .map(|&o| quad_vertices(o, false, 1024, 512).map(|v| v.tex_coord))
            .collect();
        for i in 0..coords.len() {
            for j in (i + 1)..coords.len() {
                assert_ne!(coords[i], coords[j], "orientations {i} and {j} collide");
            }
        }
    }

    #[test]
    fn test_quad_vertices_inset_pulls_coords_inward() {
        let verts = quad_vertices(Orientation::Normal, true, 1024, 512);
        for v in verts {
            assert!(v.tex_coord[0] > 0.0 && v.tex_coord[0] < 1.0);
            assert!(v.tex_coord[1] > 0.0 && v.tex_coord[1] < 1.0);
        }
        assert!((verts[2].tex_coord[0] - 0.5 / 1024.0).abs() < f32::EPSILON);
        assert!((verts[2].tex_coord[1] - 0.5 / 512.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_flipped_vertical_mirrors_v() {
        let normal = quad_vertices(Orientation::Normal, false, 1024, 512);
        let flipped = quad_vertices(Orientation::FlippedVertical, false, 1024, 512);
        for (n, f) in normal.iter().zip(flipped.iter()) {
            assert_eq!(n.tex_coord[0], f.tex_coord[0]);
            assert_eq!(n.tex_coord[1], 1.0 - f.tex_coord[1]);
        }
    }
}
