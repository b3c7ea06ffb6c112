// Host-side tests for scene constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn sphere_detail_floors_sit_below_base() {
    assert!(SPHERE_MIN_SEGMENTS >= 3);
    assert!(SPHERE_MIN_RINGS >= 2);
    assert!(SPHERE_MIN_SEGMENTS < SPHERE_BASE_SEGMENTS);
    assert!(SPHERE_MIN_RINGS < SPHERE_BASE_RINGS);
    assert!(SPHERE_RADIUS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_shell_surrounds_the_sphere() {
    assert!(PARTICLE_INNER_RADIUS > SPHERE_RADIUS);
    assert!(PARTICLE_OUTER_RADIUS > PARTICLE_INNER_RADIUS);
    assert!(PARTICLE_SIZE_MAX > PARTICLE_SIZE_MIN && PARTICLE_SIZE_MIN > 0.0);
    assert!(PARTICLE_BASE_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sees_the_hero() {
    assert!(CAMERA_Z > SPHERE_RADIUS);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    // shadow plane sits under the sphere
    assert!(SHADOW_Y < -SPHERE_RADIUS);
    assert!(SHADOW_HALF_EXTENT > SPHERE_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cadences_are_positive() {
    assert!(HUD_REFRESH_FRAMES > 0);
    assert!(MIN_TRANSMISSION_SAMPLES >= 1);
    assert!(COMPACT_VIEWPORT_PX > 0.0);
}
