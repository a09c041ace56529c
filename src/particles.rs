use crate::constants::{PARTICLE_CAMERA_Z, PARTICLE_FOVY_DEG};
use crate::paint::{self, ALPHA_BUCKETS};
use agency_core::theme::LIME;
use agency_core::{ParticleField, ProjectedPoint, Projection};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D-canvas painter for the particle field.
pub struct ParticleCanvas {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    fill_styles: Vec<String>,
    projected: Vec<ProjectedPoint>,
    buckets: Vec<Vec<usize>>,
}

impl ParticleCanvas {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let fill_styles = (0..ALPHA_BUCKETS)
            .map(|b| LIME.to_css_rgba(paint::point_alpha(paint::bucket_nearness(b))))
            .collect();
        Ok(Self {
            canvas,
            ctx,
            fill_styles,
            projected: Vec::new(),
            buckets: vec![Vec::new(); ALPHA_BUCKETS],
        })
    }

    pub fn draw(&mut self, field: &ParticleField, device_pixel_ratio: f64) {
        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);

        let projection = Projection {
            camera_z: PARTICLE_CAMERA_Z,
            fovy_radians: PARTICLE_FOVY_DEG.to_radians(),
            viewport: Vec2::new(w, h),
        };
        field.project_into(&projection, &mut self.projected);

        for b in &mut self.buckets {
            b.clear();
        }
        for (i, p) in self.projected.iter().enumerate() {
            self.buckets[paint::alpha_bucket(p.nearness)].push(i);
        }

        for (bucket, indices) in self.buckets.iter().enumerate() {
            if indices.is_empty() {
                continue;
            }
            self.ctx.set_fill_style_str(&self.fill_styles[bucket]);
            let size = paint::point_size_px(paint::bucket_nearness(bucket), device_pixel_ratio);
            let half = size * 0.5;
            for &i in indices {
                let p = self.projected[i].screen;
                self.ctx.fill_rect(p.x as f64 - half, p.y as f64 - half, size, size);
            }
        }
    }
}
