//! Canvas2D surface.
//!
//! Forwards every surface call to a `CanvasRenderingContext2d`. Calls
//! that return `Result` only fail for non-finite arguments, which the
//! sprite passes through unchecked, so their errors are dropped.

use racer_core::{Color, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        let _ = self.ctx.translate(x, y);
    }

    fn rotate(&mut self, angle: f64) {
        let _ = self.ctx.rotate(angle);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        let _ = self.ctx.scale(sx, sy);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_hex());
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_hex());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        let _ = self.ctx.arc(x, y, radius, start_angle, end_angle);
    }

    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    ) {
        let _ = self
            .ctx
            .ellipse(x, y, radius_x, radius_y, rotation, start_angle, end_angle);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
