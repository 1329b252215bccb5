//! The drawing surface the sprite paints onto.
//!
//! Modeled on an immediate-mode 2D context: transform state with a
//! save/restore stack, a single current path, and current fill/stroke
//! styles. Angles are radians. Coordinates passed to path calls are in
//! the current transform's local space.

use crate::model::Color;

pub trait Surface {
    /// Full surface size in pixels, `(width, height)`.
    fn size(&self) -> (f64, f64);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn scale(&mut self, sx: f64, sy: f64);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    );

    fn fill(&mut self);
    fn stroke(&mut self);

    /// Clear the whole surface.
    fn clear(&mut self) {
        let (w, h) = self.size();
        self.clear_rect(0.0, 0.0, w, h);
    }
}
