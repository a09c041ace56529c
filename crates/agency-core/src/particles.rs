//! Decorative particle cloud behind the hero.
//!
//! Points are generated once from a fixed seed the first time they are
//! requested, then only the rotation changes frame to frame.

use crate::constants::{
    PARTICLE_COUNT, PARTICLE_HALF_EXTENT, PARTICLE_SEED, PARTICLE_SPIN_X_RAD_PER_SEC,
    PARTICLE_SPIN_Y_RAD_PER_SEC,
};
use glam::{Mat3, Vec2, Vec3};
use rand::prelude::*;
use std::cell::OnceCell;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleParams {
    pub count: usize,
    pub half_extent: f32,
    pub seed: u64,
    /// Radians per second around X and Y.
    pub spin: Vec2,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            half_extent: PARTICLE_HALF_EXTENT,
            seed: PARTICLE_SEED,
            spin: Vec2::new(PARTICLE_SPIN_X_RAD_PER_SEC, PARTICLE_SPIN_Y_RAD_PER_SEC),
        }
    }
}

/// A point after rotation and perspective projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub screen: Vec2,
    /// 0 at the far edge of the cloud, 1 at the near edge.
    pub nearness: f32,
}

/// Pinhole camera looking down -Z from `camera_z`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub camera_z: f32,
    pub fovy_radians: f32,
    pub viewport: Vec2,
}

impl Projection {
    pub fn project(&self, p: Vec3) -> Option<Vec2> {
        let depth = self.camera_z - p.z;
        if depth <= 1e-3 || self.viewport.y <= 0.0 {
            return None;
        }
        let f = 1.0 / (self.fovy_radians * 0.5).tan();
        let aspect = self.viewport.x / self.viewport.y;
        let ndc = Vec2::new(p.x * f / (depth * aspect), p.y * f / depth);
        Some(Vec2::new(
            (ndc.x * 0.5 + 0.5) * self.viewport.x,
            (0.5 - ndc.y * 0.5) * self.viewport.y,
        ))
    }
}

#[derive(Debug)]
pub struct ParticleField {
    params: ParticleParams,
    points: OnceCell<Vec<Vec3>>,
    rotation: Vec2,
    spinning: bool,
}

impl ParticleField {
    pub fn new(params: ParticleParams) -> Self {
        Self {
            params,
            points: OnceCell::new(),
            rotation: Vec2::ZERO,
            spinning: true,
        }
    }

    #[inline]
    pub fn params(&self) -> &ParticleParams {
        &self.params
    }

    /// Stop or resume rotation (reduced-motion users get a still field).
    pub fn set_spinning(&mut self, spinning: bool) {
        self.spinning = spinning;
    }

    #[inline]
    pub fn is_generated(&self) -> bool {
        self.points.get().is_some()
    }

    pub fn points(&self) -> &[Vec3] {
        self.points.get_or_init(|| {
            let points = generate_points(&self.params);
            log::info!("[particles] generated {} points", points.len());
            points
        })
    }

    /// Current (x, y) rotation in radians.
    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn advance(&mut self, dt_sec: f32) {
        if !self.spinning || !dt_sec.is_finite() || dt_sec <= 0.0 {
            return;
        }
        self.rotation += self.params.spin * dt_sec;
        self.rotation.x = self.rotation.x.rem_euclid(std::f32::consts::TAU);
        self.rotation.y = self.rotation.y.rem_euclid(std::f32::consts::TAU);
    }

    pub fn rotation_matrix(&self) -> Mat3 {
        Mat3::from_rotation_y(self.rotation.y) * Mat3::from_rotation_x(self.rotation.x)
    }

    /// Rotate and project every point, skipping those behind the camera.
    pub fn project_into(&self, projection: &Projection, out: &mut Vec<ProjectedPoint>) {
        out.clear();
        let rot = self.rotation_matrix();
        // Rotation keeps points inside the bounding sphere of the cube.
        let radius = self.params.half_extent * 3f32.sqrt();
        for p in self.points() {
            let r = rot * *p;
            if let Some(screen) = projection.project(r) {
                let nearness = if radius > 0.0 {
                    ((r.z + radius) / (2.0 * radius)).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                out.push(ProjectedPoint { screen, nearness });
            }
        }
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new(ParticleParams::default())
    }
}

/// Uniform points in the cube `[-half_extent, half_extent]^3`.
pub fn generate_points(params: &ParticleParams) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let h = params.half_extent.abs();
    (0..params.count)
        .map(|_| {
            if h == 0.0 {
                return Vec3::ZERO;
            }
            Vec3::new(
                rng.gen_range(-h..=h),
                rng.gen_range(-h..=h),
                rng.gen_range(-h..=h),
            )
        })
        .collect()
}
