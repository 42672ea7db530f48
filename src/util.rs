use glam::Mat4;
use wgpu::{util::DeviceExt, Buffer, Device, Texture, TextureView};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A uniform buffer holding a single matrix, writable from the queue.
pub fn mat4_buffer(device: &Device, label: &str, matrix: Mat4) -> Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&matrix.to_cols_array()),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn generate_depth_buffer(
    device: &Device,
    config: &wgpu::SurfaceConfiguration,
) -> (Texture, TextureView) {
    let depth_buffer = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Buffer"),
        size: wgpu::Extent3d {
            width: config.width.max(1),
            height: config.height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
    });
    let view = depth_buffer.create_view(&wgpu::TextureViewDescriptor::default());
    (depth_buffer, view)
}
