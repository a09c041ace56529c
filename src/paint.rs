// Pure helpers for painting the particle field; no DOM access here so the
// host-side tests can include this file directly.

use crate::constants::{PARTICLE_ALPHA_MAX, PARTICLE_ALPHA_MIN, PARTICLE_SIZE_PX};

pub const ALPHA_BUCKETS: usize = 8;

/// Depth fade: far points at `PARTICLE_ALPHA_MIN`, near points at `PARTICLE_ALPHA_MAX`.
#[inline]
pub fn point_alpha(nearness: f32) -> f32 {
    let t = if nearness.is_finite() {
        nearness.clamp(0.0, 1.0)
    } else {
        0.0
    };
    PARTICLE_ALPHA_MIN + (PARTICLE_ALPHA_MAX - PARTICLE_ALPHA_MIN) * t
}

/// Quantize nearness so the canvas fill style changes at most `ALPHA_BUCKETS` times a frame.
#[inline]
pub fn alpha_bucket(nearness: f32) -> usize {
    let t = if nearness.is_finite() {
        nearness.clamp(0.0, 1.0)
    } else {
        0.0
    };
    ((t * ALPHA_BUCKETS as f32) as usize).min(ALPHA_BUCKETS - 1)
}

/// Representative nearness of a bucket (its centre).
#[inline]
pub fn bucket_nearness(bucket: usize) -> f32 {
    (bucket.min(ALPHA_BUCKETS - 1) as f32 + 0.5) / ALPHA_BUCKETS as f32
}

/// Square side in backing pixels; nearer points draw slightly larger.
#[inline]
pub fn point_size_px(nearness: f32, device_pixel_ratio: f64) -> f64 {
    let t = nearness.clamp(0.0, 1.0) as f64;
    PARTICLE_SIZE_PX * (0.5 + 0.5 * t) * device_pixel_ratio.max(1.0)
}
