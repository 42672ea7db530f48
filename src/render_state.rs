use failure::{format_err, Error};
use glam::Mat4;
use log::info;
use wgpu::{
    BindGroup, BindGroupLayout, Buffer, Device, Queue, Surface, SurfaceConfiguration, Texture,
    TextureFormat, TextureView,
};
use winit::window::Window;

/// The device, surface and the bind group every pipeline shares: a single
/// transform matrix at binding 0.
pub struct RenderState {
    pub surface: Surface,
    pub config: SurfaceConfiguration,
    pub surface_format: TextureFormat,
    pub queue: Queue,
    pub device: Device,
    pub transform_layout: BindGroupLayout,
    pub transform_bind_group: BindGroup,
    pub transform_buffer: Buffer,
    pub depth_buffer: Texture,
    pub depth_buffer_view: TextureView,
}

impl RenderState {
    pub async fn new(window: &Window) -> Result<Self, Error> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(wgpu::Backends::all());
        let surface = unsafe { instance.create_surface(window) };
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or_else(|| format_err!("no adapter can render to this window"))?;
        info!("Using adapter {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    features: wgpu::Features::empty(),
                    limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
                },
                None,
            )
            .await?;

        let surface_format = *surface
            .get_supported_formats(&adapter)
            .first()
            .ok_or_else(|| format_err!("surface reports no supported formats"))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
        };
        surface.configure(&device, &config);

        let transform_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Transform Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(64),
                    },
                    count: None,
                }],
            });

        let transform_buffer = crate::util::mat4_buffer(&device, "Transform", Mat4::IDENTITY);

        let transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &transform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_buffer.as_entire_binding(),
            }],
            label: Some("Transform"),
        });

        let (depth_buffer, depth_buffer_view) =
            crate::util::generate_depth_buffer(&device, &config);

        Ok(RenderState {
            surface,
            config,
            surface_format,
            queue,
            device,
            transform_layout,
            transform_bind_group,
            transform_buffer,
            depth_buffer,
            depth_buffer_view,
        })
    }

    pub fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height as f32
    }

    pub fn set_transform(&self, transform: Mat4) {
        self.queue.write_buffer(
            &self.transform_buffer,
            0,
            bytemuck::cast_slice(&transform.to_cols_array()),
        );
    }

    pub fn reconfigure(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            // Minimized.
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        let (depth_buffer, depth_buffer_view) =
            crate::util::generate_depth_buffer(&self.device, &self.config);
        self.depth_buffer = depth_buffer;
        self.depth_buffer_view = depth_buffer_view;
    }
}
