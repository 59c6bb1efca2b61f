//! Canvas 2D backend
//!
//! Maps `Surface` calls onto `CanvasRenderingContext2d`. Every canvas call is
//! fire-and-forget; errors from the browser are dropped.

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Fill, Glyph, LinearGradient, Paint, Shadow, Stroke, Surface};

/// Font family for floating symbols
const SYMBOL_FONT: &str = "'JetBrains Mono'";

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Get the 2D context of `canvas`, if the browser provides one
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self::new(ctx))
    }

    fn gradient(&self, gradient: &LinearGradient) -> CanvasGradient {
        let g = self.ctx.create_linear_gradient(
            gradient.start.x as f64,
            gradient.start.y as f64,
            gradient.end.x as f64,
            gradient.end.y as f64,
        );
        for stop in &gradient.stops {
            let _ = g.add_color_stop(stop.offset, &stop.color.css());
        }
        g
    }

    fn apply_shadow(&self, shadow: Option<Shadow>) {
        match shadow {
            Some(shadow) => {
                self.ctx.set_shadow_blur(shadow.blur as f64);
                self.ctx.set_shadow_color(&shadow.color.css());
            }
            None => self.ctx.set_shadow_blur(0.0),
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        match &stroke.paint {
            Paint::Solid(color) => self.ctx.set_stroke_style_str(&color.css()),
            Paint::Linear(gradient) => {
                let g = self.gradient(gradient);
                self.ctx.set_stroke_style_canvas_gradient(&g);
            }
        }
        self.ctx.set_line_width(stroke.width as f64);
        self.ctx
            .set_line_cap(if stroke.round_cap { "round" } else { "butt" });

        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: &Fill) {
        self.apply_shadow(fill.shadow);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&fill.color.css());
        self.ctx.fill();
        self.ctx.set_shadow_blur(0.0);
    }

    fn glyph(&mut self, glyph: &Glyph) {
        self.ctx.save();
        let _ = self.ctx.translate(glyph.pos.x as f64, glyph.pos.y as f64);
        let _ = self.ctx.rotate(glyph.rotation as f64);

        self.apply_shadow(glyph.fill.shadow);
        self.ctx
            .set_font(&format!("bold {}px {}", glyph.size, SYMBOL_FONT));
        self.ctx.set_fill_style_str(&glyph.fill.color.css());
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");

        let mut buf = [0u8; 4];
        let _ = self.ctx.fill_text(glyph.ch.encode_utf8(&mut buf), 0.0, 0.0);

        self.ctx.set_shadow_blur(0.0);
        self.ctx.restore();
    }
}
