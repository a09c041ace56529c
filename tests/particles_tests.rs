// Host-side tests for the particle field data and projection.

use agency_core::constants::PARTICLE_COUNT;
use agency_core::{generate_points, ParticleField, ParticleParams, ProjectedPoint, Projection};
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

fn projection() -> Projection {
    Projection {
        camera_z: 12.0,
        fovy_radians: 60f32.to_radians(),
        viewport: Vec2::new(800.0, 600.0),
    }
}

#[test]
fn default_field_has_two_thousand_points() {
    let field = ParticleField::default();
    assert_eq!(PARTICLE_COUNT, 2000);
    assert_eq!(field.points().len(), 2000);
}

#[test]
fn points_are_generated_lazily_and_once() {
    let field = ParticleField::default();
    assert!(!field.is_generated());
    let first = field.points().as_ptr();
    assert!(field.is_generated());
    let second = field.points().as_ptr();
    assert_eq!(first, second);
}

#[test]
fn points_stay_inside_the_cube() {
    let params = ParticleParams::default();
    let h = params.half_extent;
    for p in generate_points(&params) {
        assert!(p.x.abs() <= h && p.y.abs() <= h && p.z.abs() <= h, "{:?}", p);
    }
}

#[test]
fn same_seed_same_cloud() {
    let params = ParticleParams::default();
    assert_eq!(generate_points(&params), generate_points(&params));
    let other = ParticleParams {
        seed: params.seed + 1,
        ..params
    };
    assert_ne!(generate_points(&params), generate_points(&other));
}

#[test]
fn zero_extent_collapses_to_origin() {
    let params = ParticleParams {
        count: 5,
        half_extent: 0.0,
        ..ParticleParams::default()
    };
    assert!(generate_points(&params).iter().all(|p| *p == Vec3::ZERO));
}

#[test]
fn rotation_advances_at_the_configured_rate() {
    let mut field = ParticleField::default();
    let spin = field.params().spin;
    field.advance(0.5);
    let expected = (spin * 0.5).to_array().map(|a| a.rem_euclid(TAU));
    assert!((field.rotation().x - expected[0]).abs() < 1e-5);
    assert!((field.rotation().y - expected[1]).abs() < 1e-5);
    assert!(field.rotation().x >= 0.0 && field.rotation().x < TAU);
}

#[test]
fn still_field_does_not_rotate() {
    let mut field = ParticleField::default();
    field.set_spinning(false);
    field.advance(1.0);
    assert_eq!(field.rotation(), Vec2::ZERO);
}

#[test]
fn bad_dt_is_ignored() {
    let mut field = ParticleField::default();
    field.advance(f32::NAN);
    field.advance(-1.0);
    assert_eq!(field.rotation(), Vec2::ZERO);
}

#[test]
fn origin_projects_to_viewport_centre() {
    let p = projection().project(Vec3::ZERO).expect("in front of camera");
    assert!((p.x - 400.0).abs() < 1e-3);
    assert!((p.y - 300.0).abs() < 1e-3);
}

#[test]
fn points_at_or_behind_camera_are_culled() {
    assert!(projection().project(Vec3::new(0.0, 0.0, 12.0)).is_none());
    assert!(projection().project(Vec3::new(0.0, 0.0, 20.0)).is_none());
}

#[test]
fn up_is_up_on_screen() {
    let p = projection().project(Vec3::new(0.0, 1.0, 0.0)).unwrap();
    assert!(p.y < 300.0);
    let p = projection().project(Vec3::new(1.0, 0.0, 0.0)).unwrap();
    assert!(p.x > 400.0);
}

#[test]
fn project_into_keeps_every_point_in_front_of_the_camera() {
    let field = ParticleField::default();
    let mut out: Vec<ProjectedPoint> = Vec::new();
    field.project_into(&projection(), &mut out);
    // Camera sits outside the cloud's bounding sphere, so nothing is culled.
    assert_eq!(out.len(), field.points().len());
    assert!(out.iter().all(|p| (0.0..=1.0).contains(&p.nearness)));
    // Reuses the buffer instead of appending.
    field.project_into(&projection(), &mut out);
    assert_eq!(out.len(), field.points().len());
}
