// Platform-free scene data: work sizes derived from quality settings, the
// hero sphere mesh, the particle field and the camera.
//
// Nothing here touches the browser or the GPU so it can be exercised by
// host-side tests.

use crate::constants::*;
use glam::{Mat4, Vec3};
use quality_core::QualitySettings;
use rand::prelude::*;

/// Per-frame work sizes for one set of quality settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneBudget {
    pub sphere_segments: u32,
    pub sphere_rings: u32,
    pub particle_count: u32,
    pub transmission_samples: u32,
    pub transmission_resolution: u32,
    pub shadows: bool,
    /// Frames between particle-field recomputations.
    pub particle_throttle: u32,
    /// Frames between hero animation updates; skips less than the particles.
    pub hero_throttle: u32,
}

impl SceneBudget {
    pub fn from_settings(settings: &QualitySettings) -> Self {
        Self::compose(settings, settings)
    }

    /// Sphere work from `hero`, particle and shadow work from `ambient`.
    /// The two differ when the hero is pinned on a compact layout.
    pub fn compose(hero: &QualitySettings, ambient: &QualitySettings) -> Self {
        Self {
            sphere_segments: hero.scale_segments(SPHERE_BASE_SEGMENTS, SPHERE_MIN_SEGMENTS),
            sphere_rings: hero.scale_segments(SPHERE_BASE_RINGS, SPHERE_MIN_RINGS),
            particle_count: ambient
                .scale_particles(PARTICLE_BASE_COUNT)
                .min(PARTICLE_BASE_COUNT),
            // Hero material samples follow geometry detail as well.
            transmission_samples: hero
                .scale_samples(hero.transmission_samples, MIN_TRANSMISSION_SAMPLES),
            transmission_resolution: hero.transmission_resolution.max(1),
            shadows: ambient.shadows_enabled,
            particle_throttle: ambient.update_throttle.max(1),
            hero_throttle: hero.relaxed_throttle(),
        }
    }

    /// True when the sphere mesh has to be regenerated to move to `other`.
    #[inline]
    pub fn mesh_differs(&self, other: &SceneBudget) -> bool {
        self.sphere_segments != other.sphere_segments || self.sphere_rings != other.sphere_rings
    }
}

#[inline]
pub fn is_compact_viewport(css_width: f64) -> bool {
    css_width < COMPACT_VIEWPORT_PX
}

// ----------------------------- sphere mesh -----------------------------

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub struct SphereMesh {
    pub vertices: Vec<SphereVertex>,
    pub indices: Vec<u32>,
}

/// Unit UV sphere with `segments` longitude slices and `rings` latitude bands.
pub fn uv_sphere(segments: u32, rings: u32) -> SphereMesh {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
    for r in 0..=rings {
        let phi = std::f32::consts::PI * r as f32 / rings as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for s in 0..=segments {
            let theta = std::f32::consts::TAU * s as f32 / segments as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let n = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
            vertices.push(SphereVertex {
                position: n,
                normal: n,
            });
        }
    }
    let stride = segments + 1;
    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
    for r in 0..rings {
        for s in 0..segments {
            let a = r * stride + s;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    SphereMesh { vertices, indices }
}

// ---------------------------- particle field ---------------------------

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
}

#[derive(Clone, Debug)]
struct ParticleSeed {
    radius: f32,
    angle: f32,
    height: f32,
    speed: f32,
    bob_phase: f32,
    size: f32,
}

/// A fixed population of orbiting particles; consumers draw a prefix of it.
pub struct ParticleField {
    seeds: Vec<ParticleSeed>,
}

impl ParticleField {
    pub fn new(capacity: u32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let seeds = (0..capacity)
            .map(|_| ParticleSeed {
                radius: rng.gen_range(PARTICLE_INNER_RADIUS..PARTICLE_OUTER_RADIUS),
                angle: rng.gen_range(0.0..std::f32::consts::TAU),
                height: rng.gen_range(-PARTICLE_HEIGHT..PARTICLE_HEIGHT),
                speed: rng.gen_range(-PARTICLE_ORBIT_SPEED_MAX..PARTICLE_ORBIT_SPEED_MAX),
                bob_phase: rng.gen_range(0.0..std::f32::consts::TAU),
                size: rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            })
            .collect();
        Self { seeds }
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.seeds.len() as u32
    }

    /// Positions of the first `count` particles at `time` seconds.
    pub fn write_instances(&self, count: u32, time: f32, out: &mut Vec<ParticleInstance>) {
        out.clear();
        let n = (count as usize).min(self.seeds.len());
        out.extend(self.seeds[..n].iter().map(|p| {
            let a = p.angle + p.speed * time;
            let bob = (time * 0.5 + p.bob_phase).sin() * 0.15;
            ParticleInstance {
                position: [p.radius * a.cos(), p.height + bob, p.radius * a.sin() - 2.0],
                size: p.size,
            }
        }));
    }
}

// -------------------------------- camera -------------------------------

#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub aspect: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            aspect: aspect.max(1e-3),
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(
            CAMERA_FOVY_DEG.to_radians(),
            self.aspect,
            CAMERA_ZNEAR,
            CAMERA_ZFAR,
        );
        proj * Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }
}

/// Hero sphere transform at `time` seconds: slow spin with a gentle wobble.
pub fn sphere_model(time: f32) -> Mat4 {
    Mat4::from_rotation_y(time * SPHERE_SPIN_PER_SEC)
        * Mat4::from_rotation_x((time * SPHERE_WOBBLE_FREQ).sin() * SPHERE_WOBBLE_AMP)
        * Mat4::from_scale(Vec3::splat(SPHERE_RADIUS))
}
