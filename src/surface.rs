use crate::core::{Blend, Canvas, GradientStop, Rgba, SurfaceMetrics};
use crate::dom;
use anyhow::anyhow;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The `<canvas>` the starfield draws on, kept at native pixel density.
pub struct DrawingSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    metrics: SurfaceMetrics,
}

impl DrawingSurface {
    /// `Ok(None)` when the element is absent; an error when it exists but
    /// cannot be drawn on.
    pub fn attach(document: &web::Document, element_id: &str) -> anyhow::Result<Option<Self>> {
        let Some(el) = document.get_element_by_id(element_id) else {
            return Ok(None);
        };
        let canvas = el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow!("#{} is not a canvas: {:?}", element_id, e))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("no 2d context for #{}", element_id))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        let mut surface = Self {
            canvas,
            ctx,
            metrics: SurfaceMetrics::default(),
        };
        surface.resize()?;
        Ok(Some(surface))
    }

    /// Re-measure the viewport and device pixel ratio and rebuild the
    /// backing store and transform.
    pub fn resize(&mut self) -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let size = dom::viewport_size(&window);
        self.apply(SurfaceMetrics::measure(
            size.x as f64,
            size.y as f64,
            window.device_pixel_ratio(),
        ))
    }

    pub fn apply(&mut self, metrics: SurfaceMetrics) -> anyhow::Result<()> {
        let (w_px, h_px) = metrics.backing_size();
        // Setting the backing size also resets context state, transform included.
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        let style = self.canvas.style();
        style
            .set_property("width", &format!("{}px", metrics.width))
            .map_err(|e| anyhow!("{:?}", e))?;
        style
            .set_property("height", &format!("{}px", metrics.height))
            .map_err(|e| anyhow!("{:?}", e))?;
        let [a, b, c, d, e, f] = metrics.transform();
        self.ctx
            .set_transform(a, b, c, d, e, f)
            .map_err(|e| anyhow!("{:?}", e))?;
        self.metrics = metrics;
        log::debug!(
            "[surface] {}x{} css, ratio {:.2}, backing {}x{}",
            metrics.width,
            metrics.height,
            metrics.ratio,
            w_px,
            h_px
        );
        Ok(())
    }

    pub fn metrics(&self) -> SurfaceMetrics {
        self.metrics
    }

    fn arc_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }
}

impl Canvas for DrawingSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.metrics.width, self.metrics.height);
    }

    fn set_blend(&mut self, blend: Blend) {
        _ = self.ctx.set_global_composite_operation(blend.as_str());
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[GradientStop; 3]) {
        let (x, y) = (center.x as f64, center.y as f64);
        let Ok(gradient) = self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, radius.max(0.0) as f64)
        else {
            return;
        };
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset, &stop.color.css());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.arc_path(center, radius);
        self.ctx.fill();
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.arc_path(center, radius);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}
