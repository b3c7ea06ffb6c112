use crate::constants::{SHADOW_HALF_EXTENT, SHADOW_Y};
use crate::scene::{self, Camera, ParticleInstance, SceneBudget};
use glam::Mat4;
use web_sys as web;

mod helpers;
mod particles;
mod sphere;
mod targets;

use particles::{create_particle_resources, ParticleResources};
use sphere::{create_sphere_resources, SphereResources};
use targets::TransmissionTarget;

pub(crate) static SPHERE_WGSL: &str = include_str!("../shaders/sphere.wgsl");
pub(crate) static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    eye: [f32; 4],
    // time, transmission samples, transmission resolution, shadows on
    params: [f32; 4],
    // surface width, surface height, shadow half-extent, shadow plane y
    resolution: [f32; 4],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    uniform_buffer: wgpu::Buffer,
    linear_sampler: wgpu::Sampler,
    sphere: SphereResources,
    particles: ParticleResources,
    transmission: TransmissionTarget,
    // What the GPU resources above were built for
    budget: SceneBudget,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        budget: SceneBudget,
        particle_capacity: u32,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let transmission = TransmissionTarget::new(&device, budget.transmission_resolution);
        let mesh = scene::uv_sphere(budget.sphere_segments, budget.sphere_rings);
        let sphere = create_sphere_resources(
            &device,
            format,
            &uniform_buffer,
            &transmission.view,
            &linear_sampler,
            &mesh,
        );
        let particles = create_particle_resources(&device, format, &uniform_buffer, particle_capacity);
        log::info!(
            "[gpu] surface {}x{} {:?}, sphere {}x{}, transmission {}px",
            width,
            height,
            format,
            budget.sphere_segments,
            budget.sphere_rings,
            budget.transmission_resolution
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            uniform_buffer,
            linear_sampler,
            sphere,
            particles,
            transmission,
            budget,
            width: width.max(1),
            height: height.max(1),
            clear_color: wgpu::Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 1.0,
            },
        })
    }

    /// Rebuild whatever GPU resources depend on a changed budget.
    pub fn apply_budget(&mut self, budget: SceneBudget) {
        if budget == self.budget {
            return;
        }
        if self.budget.mesh_differs(&budget) {
            let mesh = scene::uv_sphere(budget.sphere_segments, budget.sphere_rings);
            self.sphere.replace_mesh(&self.device, &mesh);
        }
        if self
            .transmission
            .ensure_size(&self.device, budget.transmission_resolution)
        {
            self.sphere.rebind(
                &self.device,
                &self.uniform_buffer,
                &self.transmission.view,
                &self.linear_sampler,
            );
        }
        log::debug!(
            "[gpu] budget: sphere {}x{}, {} particles, {} samples @ {}px, shadows {}",
            budget.sphere_segments,
            budget.sphere_rings,
            budget.particle_count,
            budget.transmission_samples,
            budget.transmission_resolution,
            budget.shadows
        );
        self.budget = budget;
    }

    pub fn upload_particles(&mut self, instances: &[ParticleInstance]) {
        self.particles.upload(&self.queue, instances);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Re-apply the surface configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, time: f32, sphere_model: Mat4) -> Result<(), wgpu::SurfaceError> {
        let camera = Camera::new(self.width as f32 / self.height as f32);
        let uniforms = SceneUniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
            model: sphere_model.to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            params: [
                time,
                self.budget.transmission_samples as f32,
                self.budget.transmission_resolution as f32,
                if self.budget.shadows { 1.0 } else { 0.0 },
            ],
            resolution: [
                self.width as f32,
                self.height as f32,
                SHADOW_HALF_EXTENT,
                SHADOW_Y,
            ],
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: backdrop into the transmission target
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("transmission_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.transmission.view,
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
            self.particles.draw(&mut rpass, false);
        }

        // Pass 2: shadow, particles, then the refracting sphere on top
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
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
            if self.budget.shadows {
                rpass.set_pipeline(&self.sphere.shadow_pipeline);
                rpass.set_bind_group(0, &self.sphere.bind_group, &[]);
                rpass.draw(0..6, 0..1);
            }
            self.particles.draw(&mut rpass, true);

            rpass.set_pipeline(&self.sphere.pipeline);
            rpass.set_bind_group(0, &self.sphere.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.sphere.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.sphere.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.sphere.index_count, 0, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
