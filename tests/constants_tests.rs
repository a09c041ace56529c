// Host-side tests for constants and pure painting helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod paint {
    include!("../src/paint.rs");
}

use agency_core::constants as core_constants;
use constants::*;
use paint::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_match_the_page_design() {
    assert_eq!(core_constants::LINK_CURSOR_SCALE, 1.5);
    assert_eq!(core_constants::LINK_CURSOR_ROTATION_DEG, 45.0);
    assert_eq!(core_constants::TEXT_HOVER_MIN_CHARS, 10);
    assert_eq!(core_constants::HERO_SCALE_INPUT, [0.0, 0.2]);
    assert_eq!(core_constants::HERO_SCALE_OUTPUT, [1.0, 1.2]);
    assert_eq!(core_constants::HERO_OPACITY_INPUT, [0.0, 0.15]);
    assert_eq!(core_constants::HERO_OPACITY_OUTPUT, [1.0, 0.0]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_camera_sits_outside_the_cloud() {
    let bounding_radius = core_constants::PARTICLE_HALF_EXTENT * 3f32.sqrt();
    assert!(PARTICLE_CAMERA_Z > bounding_radius);
    assert!(PARTICLE_FOVY_DEG > 0.0 && PARTICLE_FOVY_DEG < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alpha_range_is_valid() {
    assert!(PARTICLE_ALPHA_MIN >= 0.0);
    assert!(PARTICLE_ALPHA_MAX <= 1.0);
    assert!(PARTICLE_ALPHA_MIN < PARTICLE_ALPHA_MAX);
}

#[test]
fn point_alpha_spans_min_to_max() {
    assert_eq!(point_alpha(0.0), PARTICLE_ALPHA_MIN);
    assert!((point_alpha(1.0) - PARTICLE_ALPHA_MAX).abs() < 1e-6);
    assert_eq!(point_alpha(-3.0), PARTICLE_ALPHA_MIN);
    assert_eq!(point_alpha(f32::NAN), PARTICLE_ALPHA_MIN);
}

#[test]
fn alpha_buckets_cover_the_range() {
    assert_eq!(alpha_bucket(0.0), 0);
    assert_eq!(alpha_bucket(1.0), ALPHA_BUCKETS - 1);
    assert_eq!(alpha_bucket(2.0), ALPHA_BUCKETS - 1);
    assert_eq!(alpha_bucket(f32::NAN), 0);
    for b in 0..ALPHA_BUCKETS {
        assert_eq!(alpha_bucket(bucket_nearness(b)), b);
    }
}

#[test]
fn nearer_points_are_larger_and_scale_with_dpr() {
    assert!(point_size_px(1.0, 1.0) > point_size_px(0.0, 1.0));
    assert_eq!(point_size_px(1.0, 2.0), 2.0 * point_size_px(1.0, 1.0));
    // sub-1 ratios never shrink points below their CSS size
    assert_eq!(point_size_px(0.5, 0.5), point_size_px(0.5, 1.0));
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [CURSOR_ID, CURSOR_LABEL_ID, HERO_ORB_ID, PARTICLE_CANVAS_ID];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
