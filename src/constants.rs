// Scene sizing and layout constants for the web front-end.
//
// Base counts are the High-tier workload; the active quality settings scale
// them down per frame.

// Hero sphere
pub const SPHERE_RADIUS: f32 = 1.6;
pub const SPHERE_BASE_SEGMENTS: u32 = 96; // longitude slices at full detail
pub const SPHERE_MIN_SEGMENTS: u32 = 12;
pub const SPHERE_BASE_RINGS: u32 = 48; // latitude rings at full detail
pub const SPHERE_MIN_RINGS: u32 = 6;
pub const SPHERE_SPIN_PER_SEC: f32 = 0.2; // radians around Y
pub const SPHERE_WOBBLE_FREQ: f32 = 0.3;
pub const SPHERE_WOBBLE_AMP: f32 = 0.1;

// Transmission (refraction of the particle backdrop through the sphere)
pub const MIN_TRANSMISSION_SAMPLES: u32 = 2;

// Particle field
pub const PARTICLE_BASE_COUNT: u32 = 4000;
pub const PARTICLE_FIELD_SEED: u64 = 7;
pub const PARTICLE_INNER_RADIUS: f32 = 2.2;
pub const PARTICLE_OUTER_RADIUS: f32 = 7.5;
pub const PARTICLE_HEIGHT: f32 = 3.5; // half-extent along Y
pub const PARTICLE_SIZE_MIN: f32 = 0.006;
pub const PARTICLE_SIZE_MAX: f32 = 0.02;
pub const PARTICLE_ORBIT_SPEED_MAX: f32 = 0.12; // radians per second

// Ground shadow
pub const SHADOW_Y: f32 = -2.1;
pub const SHADOW_HALF_EXTENT: f32 = 2.4;

// Camera
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Layout: below this CSS width the hero is pinned to full quality.
pub const COMPACT_VIEWPORT_PX: f64 = 768.0;

// HUD refresh cadence (frames)
pub const HUD_REFRESH_FRAMES: u32 = 30;
