use crate::constants::DEBUG_FONT;
use crate::viewport;
use backdrop_core::{ColorStop, Hsla, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D drawing target. Geometry is in CSS px; `resize` installs the
/// device-pixel-ratio transform.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            canvas,
            ctx,
            width: 0.0,
            height: 0.0,
        })
    }
}

impl Surface for CanvasSurface {
    // None when the browser refused to build it; the glow is skipped
    type Gradient = Option<web::CanvasGradient>;

    fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64) {
        self.width = width;
        self.height = height;
        let (w_px, h_px) = viewport::backing_size(width, height, device_pixel_ratio);
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        let style = self.canvas.style();
        _ = style.set_property("width", &viewport::css_px(width));
        _ = style.set_property("height", &viewport::css_px(height));
        _ = self
            .ctx
            .set_transform(device_pixel_ratio, 0.0, 0.0, device_pixel_ratio, 0.0, 0.0);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]) -> Self::Gradient {
        let (cx, cy) = (center.x as f64, center.y as f64);
        let gradient = match self
            .ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, radius.max(1.0) as f64)
        {
            Ok(g) => g,
            Err(e) => {
                log::warn!("[surface] radial gradient failed: {:?}", e);
                return None;
            }
        };
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset, &stop.color.to_string());
        }
        Some(gradient)
    }

    fn fill_with_gradient(&mut self, gradient: &Self::Gradient) {
        if let Some(g) = gradient {
            self.ctx.set_fill_style_canvas_gradient(g);
            self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.set_fill_style_str(&color.to_string());
            self.ctx.fill();
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Hsla) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.stroke();
    }

    fn fill_text(&mut self, at: Vec2, text: &str, color: Hsla) {
        self.ctx.set_font(DEBUG_FONT);
        self.ctx.set_fill_style_str(&color.to_string());
        _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
