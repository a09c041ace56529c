//! Scroll progress → hero scale/opacity.

use crate::constants::{
    HERO_OPACITY_INPUT, HERO_OPACITY_OUTPUT, HERO_SCALE_INPUT, HERO_SCALE_OUTPUT,
};
use crate::reactive::Tracked;
use crate::spring::{Spring, SpringConfig};

/// Linear map of `value` from `input` to `output`, clamped to the output
/// endpoints. A zero-width input range yields the output start below it and
/// the output end at or above it.
pub fn map_range(value: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    let [i0, i1] = input;
    let [o0, o1] = output;
    let span = i1 - i0;
    if span == 0.0 {
        return if value < i0 { o0 } else { o1 };
    }
    let t = ((value - i0) / span).clamp(0.0, 1.0);
    o0 + (o1 - o0) * t
}

/// Normalized vertical scroll position. Pages that cannot scroll report 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    let range = scroll_height - viewport_height;
    if !range.is_finite() || range <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / range).clamp(0.0, 1.0) as f32
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub spring: SpringConfig,
    pub scale_input: [f32; 2],
    pub scale_output: [f32; 2],
    pub opacity_input: [f32; 2],
    pub opacity_output: [f32; 2],
    /// Skip smoothing and follow the raw value (reduced-motion users).
    pub reduced_motion: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::default(),
            scale_input: HERO_SCALE_INPUT,
            scale_output: HERO_SCALE_OUTPUT,
            opacity_input: HERO_OPACITY_INPUT,
            opacity_output: HERO_OPACITY_OUTPUT,
            reduced_motion: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
    pub scale: f32,
    pub opacity: f32,
}

impl Default for HeroTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl MotionConfig {
    pub fn hero_scale(&self, progress: f32) -> f32 {
        map_range(progress, self.scale_input, self.scale_output)
    }

    pub fn hero_opacity(&self, progress: f32) -> f32 {
        map_range(progress, self.opacity_input, self.opacity_output)
    }

    pub fn hero_transform(&self, progress: f32) -> HeroTransform {
        HeroTransform {
            scale: self.hero_scale(progress),
            opacity: self.hero_opacity(progress),
        }
    }
}

/// Raw progress goes in from scroll events, smoothed progress and the hero
/// transform come out once per frame.
#[derive(Clone, Debug)]
pub struct ScrollMapper {
    config: MotionConfig,
    raw: f32,
    spring: Spring,
    hero: Tracked<HeroTransform>,
}

impl ScrollMapper {
    pub fn new(config: MotionConfig) -> Self {
        let spring = Spring::new(config.spring, 0.0);
        let hero = Tracked::new(config.hero_transform(0.0));
        Self {
            config,
            raw: 0.0,
            spring,
            hero,
        }
    }

    #[inline]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Feed the latest raw progress; clamped into [0, 1].
    pub fn set_raw_progress(&mut self, progress: f32) {
        if !progress.is_finite() {
            return;
        }
        self.raw = progress.clamp(0.0, 1.0);
        if self.config.reduced_motion {
            self.spring.snap_to(self.raw);
        } else {
            self.spring.set_target(self.raw);
        }
    }

    #[inline]
    pub fn raw_progress(&self) -> f32 {
        self.raw
    }

    #[inline]
    pub fn smoothed_progress(&self) -> f32 {
        self.spring.position()
    }

    /// Advance the spring and recompute the hero transform.
    /// Returns the new transform only when it changed.
    pub fn tick(&mut self, dt_sec: f32) -> Option<HeroTransform> {
        self.spring.step(dt_sec);
        let next = self.config.hero_transform(self.spring.position());
        self.hero.set(next).then_some(next)
    }

    #[inline]
    pub fn hero(&self) -> HeroTransform {
        self.hero.get()
    }
}

impl Default for ScrollMapper {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}
