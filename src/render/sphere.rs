use super::helpers;
use crate::scene::{SphereMesh, SphereVertex};
use wgpu::util::DeviceExt;

const SPHERE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

pub(crate) struct SphereResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) shadow_pipeline: wgpu::RenderPipeline,
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

pub(crate) fn create_sphere_resources(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    uniform_buffer: &wgpu::Buffer,
    backdrop_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    mesh: &SphereMesh,
) -> SphereResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("sphere_shader"),
        source: wgpu::ShaderSource::Wgsl(super::SPHERE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("sphere_bgl"),
        entries: &[
            helpers::uniform_entry(0),
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("sphere_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let vertex_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SphereVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &SPHERE_ATTRS,
    };
    let pipeline = helpers::make_pipeline(
        device,
        "sphere_pipeline",
        &pl,
        &shader,
        "vs_sphere",
        "fs_sphere",
        &[vertex_layout],
        surface_format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
    );
    let shadow_pipeline = helpers::make_pipeline(
        device,
        "shadow_pipeline",
        &pl,
        &shader,
        "vs_shadow",
        "fs_shadow",
        &[],
        surface_format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
    );
    let bind_group = create_bind_group(device, &bgl, uniform_buffer, backdrop_view, sampler);
    let (vertex_buffer, index_buffer, index_count) = upload_mesh(device, mesh);

    SphereResources {
        pipeline,
        shadow_pipeline,
        bgl,
        bind_group,
        vertex_buffer,
        index_buffer,
        index_count,
    }
}

impl SphereResources {
    pub(crate) fn replace_mesh(&mut self, device: &wgpu::Device, mesh: &SphereMesh) {
        (self.vertex_buffer, self.index_buffer, self.index_count) = upload_mesh(device, mesh);
    }

    pub(crate) fn rebind(
        &mut self,
        device: &wgpu::Device,
        uniform_buffer: &wgpu::Buffer,
        backdrop_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) {
        self.bind_group = create_bind_group(device, &self.bgl, uniform_buffer, backdrop_view, sampler);
    }
}

fn create_bind_group(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    uniform_buffer: &wgpu::Buffer,
    backdrop_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("sphere_bg"),
        layout: bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(backdrop_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

fn upload_mesh(device: &wgpu::Device, mesh: &SphereMesh) -> (wgpu::Buffer, wgpu::Buffer, u32) {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_vb"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_ib"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    (vertex_buffer, index_buffer, mesh.indices.len() as u32)
}
