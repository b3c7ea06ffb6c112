use super::helpers;
use super::targets::TRANSMISSION_FORMAT;
use crate::scene::ParticleInstance;

const PARTICLE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32];

/// Instanced particle quads. The instance buffer is sized once for the full
/// population; lower tiers upload and draw a prefix.
pub(crate) struct ParticleResources {
    pub(crate) surface_pipeline: wgpu::RenderPipeline,
    pub(crate) transmission_pipeline: wgpu::RenderPipeline,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) capacity: u32,
    pub(crate) count: u32,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    uniform_buffer: &wgpu::Buffer,
    capacity: u32,
) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(super::PARTICLES_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("particles_bgl"),
        entries: &[helpers::uniform_entry(0)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particles_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let instance_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ParticleInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &PARTICLE_ATTRS,
    };
    let surface_pipeline = helpers::make_pipeline(
        device,
        "particles_surface_pipeline",
        &pl,
        &shader,
        "vs_particle",
        "fs_particle",
        &[instance_layout.clone()],
        surface_format,
        Some(helpers::ADDITIVE_BLEND),
    );
    let transmission_pipeline = helpers::make_pipeline(
        device,
        "particles_transmission_pipeline",
        &pl,
        &shader,
        "vs_particle",
        "fs_particle",
        &[instance_layout],
        TRANSMISSION_FORMAT,
        Some(helpers::ADDITIVE_BLEND),
    );
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("particles_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let capacity = capacity.max(1);
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("particles_instances"),
        size: (capacity as usize * std::mem::size_of::<ParticleInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    ParticleResources {
        surface_pipeline,
        transmission_pipeline,
        bind_group,
        instance_buffer,
        capacity,
        count: 0,
    }
}

impl ParticleResources {
    pub(crate) fn upload(&mut self, queue: &wgpu::Queue, instances: &[ParticleInstance]) {
        let n = instances.len().min(self.capacity as usize);
        if n > 0 {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances[..n]));
        }
        self.count = n as u32;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, to_surface: bool) {
        if self.count == 0 {
            return;
        }
        let pipeline = if to_surface {
            &self.surface_pipeline
        } else {
            &self.transmission_pipeline
        };
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
