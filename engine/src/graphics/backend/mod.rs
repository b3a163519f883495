use std::mem;
use std::num::NonZeroU32;
use std::ops::Range;

use anyhow::{anyhow, Context as _};
use cgmath::Matrix4;
use wgpu::util::DeviceExt;

use super::matrix::ColorMatrix;
use super::{DrawCommand, DrawList, Texture, TextureFactory, TextureId};

/// Offscreen render targets and uploaded textures share this format; the
/// window surface keeps whatever format the adapter prefers.
const OFFSCREEN_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Matches the default `min_uniform_buffer_offset_alignment`.
const UNIFORM_STRIDE: usize = 256;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

impl Uniforms {
    /// Top-left-origin pixel coordinates, like the drawing API.
    fn ortho(width: f32, height: f32) -> Self {
        let m: Matrix4<f32> = cgmath::ortho(0.0, width, height, 0.0, -1.0, 1.0);
        Uniforms { view_proj: m.into() }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ColorTransform {
    mul: [[f32; 4]; 4],
    add: [f32; 4],
}

impl ColorTransform {
    const IDENTITY: ColorTransform = ColorTransform {
        mul: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
        add: [0.0; 4],
    };

    fn from_matrix(matrix: &ColorMatrix) -> Self {
        ColorTransform {
            mul: matrix.mul_array(),
            add: matrix.add_array(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct TexVertex {
    position: [f32; 3],
    tex_coords: [f32; 2],
}

impl TexVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<TexVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

struct TextureEntry {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

/// One replayable slice of a frame: either a run of colored quads or a
/// single textured quad. Order is the recorded draw order.
enum Batch {
    Rects(Range<u32>),
    Texture {
        texture: usize,
        vertices: Range<u32>,
        transform: u32,
    },
}

pub struct State {
    surface: wgpu::Surface,
    config: wgpu::SurfaceConfiguration,
    device: wgpu::Device,
    queue: wgpu::Queue,

    rect_pipeline: wgpu::RenderPipeline,
    texture_pipeline: wgpu::RenderPipeline,
    present_pipeline: wgpu::RenderPipeline,

    texture_layout: wgpu::BindGroupLayout,
    transform_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,

    screen_uniforms: wgpu::BindGroup,
    window_uniforms: wgpu::BindGroup,
    blit_vertices: wgpu::Buffer,

    offscreen_view: wgpu::TextureView,
    offscreen_handle: Texture,
    textures: Vec<TextureEntry>,

    screen_width: u32,
    screen_height: u32,
}

impl State {
    pub async fn new(
        window: &winit::window::Window,
        screen_width: u32,
        screen_height: u32,
        scale: u32,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::Backends::PRIMARY);
        let surface = unsafe { instance.create_surface(window) };

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptionsBase {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow!("no suitable graphics adapter"))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default(), None)
            .await
            .context("unable to create device")?;

        let format = surface
            .get_preferred_format(&adapter)
            .ok_or_else(|| anyhow!("surface is incompatible with the adapter"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
        };
        surface.configure(&device, &config);

        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("Uniform Bind Group Layout"),
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
            label: Some("Texture Bind Group Layout"),
        });

        let transform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(
                        mem::size_of::<ColorTransform>() as u64
                    ),
                },
                count: None,
            }],
            label: Some("Color Transform Bind Group Layout"),
        });

        let rect_shader = device.create_shader_module(&wgpu::ShaderModuleDescriptor {
            label: Some("Rect Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });
        let texture_shader = device.create_shader_module(&wgpu::ShaderModuleDescriptor {
            label: Some("Texture Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("texture.wgsl").into()),
        });

        let rect_pipeline = create_pipeline(
            &device,
            "Rect Pipeline",
            &[&uniform_layout],
            &rect_shader,
            Vertex::desc(),
            OFFSCREEN_FORMAT,
        );
        let texture_pipeline = create_pipeline(
            &device,
            "Texture Pipeline",
            &[&uniform_layout, &texture_layout, &transform_layout],
            &texture_shader,
            TexVertex::desc(),
            OFFSCREEN_FORMAT,
        );
        let present_pipeline = create_pipeline(
            &device,
            "Present Pipeline",
            &[&uniform_layout, &texture_layout, &transform_layout],
            &texture_shader,
            TexVertex::desc(),
            config.format,
        );

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Nearest Sampler"),
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let screen_uniforms = create_uniforms(
            &device,
            &uniform_layout,
            Uniforms::ortho(screen_width as f32, screen_height as f32),
        );
        let (window_width, window_height) = (screen_width * scale, screen_height * scale);
        let window_uniforms = create_uniforms(
            &device,
            &uniform_layout,
            Uniforms::ortho(window_width as f32, window_height as f32),
        );

        // The present pass always draws the same quad: the offscreen image
        // scaled to the logical window size.
        let blit_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Blit Vertex Buffer"),
            contents: bytemuck::cast_slice(&quad_tex_vertices([
                (0.0, 0.0),
                (window_width as f32, 0.0),
                (0.0, window_height as f32),
                (window_width as f32, window_height as f32),
            ])),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let offscreen = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Offscreen Target"),
            size: wgpu::Extent3d {
                width: screen_width,
                height: screen_height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: OFFSCREEN_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        });
        let offscreen_view = offscreen.create_view(&wgpu::TextureViewDescriptor::default());
        let offscreen_bind_group =
            create_texture_bind_group(&device, &texture_layout, &offscreen_view, &sampler);

        let textures = vec![TextureEntry {
            _texture: offscreen,
            bind_group: offscreen_bind_group,
            width: screen_width,
            height: screen_height,
        }];
        let offscreen_handle = Texture {
            id: TextureId(0),
            width: screen_width,
            height: screen_height,
        };

        Ok(State {
            surface,
            config,
            device,
            queue,
            rect_pipeline,
            texture_pipeline,
            present_pipeline,
            texture_layout,
            transform_layout,
            sampler,
            screen_uniforms,
            window_uniforms,
            blit_vertices,
            offscreen_view,
            offscreen_handle,
            textures,
            screen_width,
            screen_height,
        })
    }

    /// Handle for the offscreen target every frame is drawn into.
    pub fn offscreen(&self) -> Texture {
        self.offscreen_handle
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Replay one frame's draw list into the offscreen target, then present
    /// it scaled to the window.
    pub fn render(&mut self, list: &DrawList) -> Result<(), wgpu::SurfaceError> {
        let mut commands = list.commands();

        // A leading fill becomes the clear color for the whole pass.
        let mut clear = wgpu::Color::BLACK;
        if let Some(DrawCommand::Fill(color)) = commands.first() {
            clear = wgpu::Color::from(*color);
            commands = &commands[1..];
        }

        let mut rect_vertices: Vec<Vertex> = Vec::new();
        let mut rect_indices: Vec<u16> = Vec::new();
        let mut tex_vertices: Vec<TexVertex> = Vec::new();
        let mut transforms = vec![ColorTransform::IDENTITY];
        let mut batches: Vec<Batch> = Vec::new();

        for command in commands {
            match command {
                DrawCommand::Fill(color) => {
                    push_rect(
                        &mut rect_vertices,
                        &mut rect_indices,
                        &mut batches,
                        0.0,
                        0.0,
                        self.screen_width as f64,
                        self.screen_height as f64,
                        *color,
                    );
                }
                DrawCommand::Rect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => {
                    push_rect(
                        &mut rect_vertices,
                        &mut rect_indices,
                        &mut batches,
                        *x,
                        *y,
                        *width,
                        *height,
                        *color,
                    );
                }
                DrawCommand::Texture {
                    texture,
                    geometry,
                    color,
                } => {
                    let entry = &self.textures[texture.0];
                    let (w, h) = (f64::from(entry.width), f64::from(entry.height));
                    let corners = [
                        geometry.transform(0.0, 0.0),
                        geometry.transform(w, 0.0),
                        geometry.transform(0.0, h),
                        geometry.transform(w, h),
                    ]
                    .map(|(x, y)| (x as f32, y as f32));

                    let transform = if color.is_identity() {
                        0
                    } else {
                        transforms.push(ColorTransform::from_matrix(color));
                        (transforms.len() - 1) as u32
                    };

                    let start = tex_vertices.len() as u32;
                    tex_vertices.extend_from_slice(&quad_tex_vertices(corners));
                    batches.push(Batch::Texture {
                        texture: texture.0,
                        vertices: start..tex_vertices.len() as u32,
                        transform,
                    });
                }
            }
        }

        let frame = self.surface.get_current_texture()?;
        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let rect_buffers = if rect_vertices.is_empty() {
            None
        } else {
            let vertices = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Rect Vertex Buffer"),
                    contents: bytemuck::cast_slice(&rect_vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
            let indices = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Rect Index Buffer"),
                    contents: bytemuck::cast_slice(&rect_indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
            Some((vertices, indices))
        };
        let tex_buffer = if tex_vertices.is_empty() {
            None
        } else {
            Some(
                self.device
                    .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("Texture Vertex Buffer"),
                        contents: bytemuck::cast_slice(&tex_vertices),
                        usage: wgpu::BufferUsages::VERTEX,
                    }),
            )
        };

        let mut transform_bytes = vec![0u8; transforms.len() * UNIFORM_STRIDE];
        for (i, transform) in transforms.iter().enumerate() {
            let start = i * UNIFORM_STRIDE;
            transform_bytes[start..start + mem::size_of::<ColorTransform>()]
                .copy_from_slice(bytemuck::bytes_of(transform));
        }
        let transform_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Color Transform Buffer"),
                contents: &transform_bytes,
                usage: wgpu::BufferUsages::UNIFORM,
            });
        let transform_bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &self.transform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &transform_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(mem::size_of::<ColorTransform>() as u64),
                }),
            }],
            label: Some("Color Transform Bind Group"),
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Offscreen Pass"),
                color_attachments: &[wgpu::RenderPassColorAttachment {
                    view: &self.offscreen_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: true,
                    },
                }],
                depth_stencil_attachment: None,
            });

            for batch in &batches {
                match batch {
                    Batch::Rects(range) => {
                        let (vertices, indices) =
                            rect_buffers.as_ref().expect("rect batch without buffers");
                        pass.set_pipeline(&self.rect_pipeline);
                        pass.set_bind_group(0, &self.screen_uniforms, &[]);
                        pass.set_vertex_buffer(0, vertices.slice(..));
                        pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint16);
                        pass.draw_indexed(range.clone(), 0, 0..1);
                    }
                    Batch::Texture {
                        texture,
                        vertices,
                        transform,
                    } => {
                        let buffer = tex_buffer.as_ref().expect("texture batch without buffer");
                        pass.set_pipeline(&self.texture_pipeline);
                        pass.set_bind_group(0, &self.screen_uniforms, &[]);
                        pass.set_bind_group(1, &self.textures[*texture].bind_group, &[]);
                        pass.set_bind_group(
                            2,
                            &transform_bind_group,
                            &[transform * UNIFORM_STRIDE as u32],
                        );
                        pass.set_vertex_buffer(0, buffer.slice(..));
                        pass.draw(vertices.clone(), 0..1);
                    }
                }
            }
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Present Pass"),
                color_attachments: &[wgpu::RenderPassColorAttachment {
                    view: &frame_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: true,
                    },
                }],
                depth_stencil_attachment: None,
            });

            pass.set_pipeline(&self.present_pipeline);
            pass.set_bind_group(0, &self.window_uniforms, &[]);
            pass.set_bind_group(1, &self.textures[0].bind_group, &[]);
            pass.set_bind_group(2, &transform_bind_group, &[0]);
            pass.set_vertex_buffer(0, self.blit_vertices.slice(..));
            pass.draw(0..6, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }
}

impl TextureFactory for State {
    fn texture_from_image(&mut self, image: &image::DynamicImage) -> anyhow::Result<Texture> {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();

        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Game Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: OFFSCREEN_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        });
        self.queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &rgba,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: NonZeroU32::new(4 * width),
                rows_per_image: NonZeroU32::new(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group =
            create_texture_bind_group(&self.device, &self.texture_layout, &view, &self.sampler);

        let id = TextureId(self.textures.len());
        self.textures.push(TextureEntry {
            _texture: texture,
            bind_group,
            width,
            height,
        });

        Ok(Texture { id, width, height })
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    label: &str,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
    shader: &wgpu::ShaderModule,
    vertex_layout: wgpu::VertexBufferLayout,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts,
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: "vs_main",
            buffers: &[vertex_layout],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: "fs_main",
            targets: &[wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            }],
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    })
}

fn create_uniforms(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    uniforms: Uniforms,
) -> wgpu::BindGroup {
    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Uniform Buffer"),
        contents: bytemuck::cast_slice(&[uniforms]),
        usage: wgpu::BufferUsages::UNIFORM,
    });
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
        label: Some("Uniform Bind Group"),
    })
}

fn create_texture_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
        label: Some("Texture Bind Group"),
    })
}

#[allow(clippy::too_many_arguments)]
fn push_rect(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u16>,
    batches: &mut Vec<Batch>,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: super::Color,
) {
    let color = color.linear();
    let (x, y) = (x as f32, y as f32);
    let (width, height) = (width as f32, height as f32);
    let base = vertices.len() as u16;

    vertices.extend_from_slice(&[
        // Top left, 0
        Vertex {
            position: [x, y, 0.0],
            color,
        },
        // Top right, 1
        Vertex {
            position: [x + width, y, 0.0],
            color,
        },
        // Bot left, 2
        Vertex {
            position: [x, y + height, 0.0],
            color,
        },
        // Bot right, 3
        Vertex {
            position: [x + width, y + height, 0.0],
            color,
        },
    ]);
    let start = indices.len() as u32;
    indices.extend_from_slice(&[
        base,
        base + 2,
        base + 3, // Top triangle
        base + 3,
        base + 1,
        base, // Bot triangle
    ]);
    let end = indices.len() as u32;

    // Consecutive rects extend the previous batch.
    if let Some(Batch::Rects(range)) = batches.last_mut() {
        range.end = end;
    } else {
        batches.push(Batch::Rects(start..end));
    }
}

/// Corner order: top left, top right, bottom left, bottom right.
fn quad_tex_vertices(corners: [(f32, f32); 4]) -> [TexVertex; 6] {
    let v = |corner: (f32, f32), u: f32, vv: f32| TexVertex {
        position: [corner.0, corner.1, 0.0],
        tex_coords: [u, vv],
    };
    let tl = v(corners[0], 0.0, 0.0);
    let tr = v(corners[1], 1.0, 0.0);
    let bl = v(corners[2], 0.0, 1.0);
    let br = v(corners[3], 1.0, 1.0);
    [tl, bl, br, br, tr, tl]
}
