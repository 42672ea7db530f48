use log::debug;
use std::borrow::Cow;
use std::mem;

use wgpu::{
    util::DeviceExt, BindGroupLayout, Buffer, Device, Queue, RenderPass, RenderPipeline,
    TextureFormat, VertexAttribute, VertexBufferLayout,
};

use crate::cell::FaceDims;
use crate::mesh::{CubeMesh, Vertex};
use crate::sync::Color;
use crate::util::DEPTH_FORMAT;

/// Draws the cube mesh, re-uploading its vertex colors whenever the color
/// table changes.
pub struct CubeRenderer {
    pipeline: RenderPipeline,
    mesh: CubeMesh,
    vertices: Buffer,
    indices: Buffer,
    index_count: u32,
}

impl CubeRenderer {
    fn desc<'a>() -> VertexBufferLayout<'a> {
        const ATTRS: [VertexAttribute; 3] =
            wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x3, 2 => Float32x3];
        VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRS,
        }
    }

    pub fn new(
        device: &Device,
        bind_group_layout: &BindGroupLayout,
        surface_format: TextureFormat,
        dims: &FaceDims,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Cube Shader"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!("../shaders/cube.wgsl"))),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: None,
            bind_group_layouts: &[bind_group_layout],
            push_constant_ranges: &[],
        });

        debug!("Vertex buffer stride: {:?}", mem::size_of::<Vertex>());

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Cube Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Self::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(surface_format.into())],
            }),
            // Faces wind differently depending on which side of the cube
            // they sit on, so both sides are drawn.
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let mesh = CubeMesh::new(dims);

        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertices"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Indices"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            pipeline,
            index_count: mesh.indices.len() as u32,
            mesh,
            vertices,
            indices,
        }
    }

    /// Copies a complete color table into the vertex buffer.
    pub fn upload(&mut self, queue: &Queue, colors: &[Color]) {
        self.mesh.apply_colors(colors);
        queue.write_buffer(&self.vertices, 0, bytemuck::cast_slice(&self.mesh.vertices));
    }

    pub fn draw<'pass>(&'pass self, pass: &mut RenderPass<'pass>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.vertices.slice(..));
        pass.set_index_buffer(self.indices.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
