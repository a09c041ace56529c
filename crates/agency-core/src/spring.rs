//! Damped spring used to smooth scroll progress.
//!
//! Integrates `m·a = k·(target − x) − c·v` with semi-implicit Euler, splitting
//! each frame into substeps no longer than `SPRING_MAX_SUBSTEP_SEC` so large
//! frame times stay stable; one step never integrates more than
//! `SPRING_MAX_STEP_SEC`, which bounds the substep count. Settles exactly on the target once both the
//! displacement and the speed fall under their rest thresholds.

use crate::constants::{
    MAX_FRAME_DT_SEC, SCROLL_SPRING_DAMPING, SCROLL_SPRING_MASS, SCROLL_SPRING_STIFFNESS,
    SPRING_MAX_STEP_SEC, SPRING_MAX_SUBSTEP_SEC, SPRING_REST_DELTA, SPRING_REST_SPEED,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SCROLL_SPRING_STIFFNESS,
            damping: SCROLL_SPRING_DAMPING,
            mass: SCROLL_SPRING_MASS,
            rest_delta: SPRING_REST_DELTA,
            rest_speed: SPRING_REST_SPEED,
        }
    }
}

impl SpringConfig {
    /// ζ = c / (2·√(k·m)); 1 is critical, above 1 is overdamped.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    pub config: SpringConfig,
    position: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jump to `value` with no motion.
    pub fn snap_to(&mut self, value: f32) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == 0.0 && self.position == self.target
    }

    /// Advance by `dt_sec`, capped at `SPRING_MAX_STEP_SEC`. Returns whether
    /// the position moved.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        if self.is_at_rest() || !dt_sec.is_finite() || dt_sec <= 0.0 {
            return false;
        }
        let before = self.position;
        let k = self.config.stiffness;
        let c = self.config.damping;
        let m = self.config.mass.max(1e-6);
        let dt_sec = dt_sec.min(SPRING_MAX_STEP_SEC);

        let substeps = (dt_sec / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt_sec / substeps as f32;
        for _ in 0..substeps {
            let accel = (k * (self.target - self.position) - c * self.velocity) / m;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }

        if (self.target - self.position).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position != before
    }
}

/// Frame time fed to springs and rotations: non-finite or negative becomes 0,
/// long gaps (backgrounded tab) are capped at `MAX_FRAME_DT_SEC`.
#[inline]
pub fn clamp_frame_dt(dt_sec: f32) -> f32 {
    if !dt_sec.is_finite() || dt_sec <= 0.0 {
        return 0.0;
    }
    dt_sec.min(MAX_FRAME_DT_SEC)
}
