//! Canvas-style state machine on top of kurbo paths.
//!
//! [`PathSurface`] tracks the current transform (with a save/restore
//! stack), the current fill/stroke styles and one path under
//! construction. Path points are mapped to device space as they are
//! added, matching immediate-mode canvas semantics. Finished fills and
//! strokes go to a [`PathSink`].

use kurbo::{Affine, Arc, BezPath, PathEl, Point, Rect, Vec2};
use racer_core::{Color, Surface};
use std::f64::consts::TAU;

const ARC_TOLERANCE: f64 = 0.05;

/// Receives finished device-space geometry.
pub trait PathSink {
    fn clear(&mut self, rect: Rect);
    fn fill(&mut self, path: &BezPath, color: Color);
    fn stroke(&mut self, path: &BezPath, color: Color, width: f64);
}

/// State saved and restored by `save`/`restore`.
#[derive(Debug, Clone, Copy)]
struct DrawState {
    transform: Affine,
    fill: Color,
    stroke: Color,
    line_width: f64,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            fill: Color::rgb(0, 0, 0),
            stroke: Color::rgb(0, 0, 0),
            line_width: 1.0,
        }
    }
}

pub struct PathSurface<B> {
    width: f64,
    height: f64,
    state: DrawState,
    stack: Vec<DrawState>,
    path: BezPath,
    has_current_point: bool,
    sink: B,
}

impl<B: PathSink> PathSurface<B> {
    pub fn new(width: f64, height: f64, sink: B) -> Self {
        Self {
            width,
            height,
            state: DrawState::default(),
            stack: Vec::new(),
            path: BezPath::new(),
            has_current_point: false,
            sink,
        }
    }

    pub fn sink(&self) -> &B {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut B {
        &mut self.sink
    }

    pub fn into_sink(self) -> B {
        self.sink
    }

    pub fn transform(&self) -> Affine {
        self.state.transform
    }

    /// Device-space path under construction.
    pub fn current_path(&self) -> &BezPath {
        &self.path
    }

    fn push_el(&mut self, el: PathEl) {
        let t = self.state.transform;
        let mapped = match el {
            PathEl::MoveTo(p) => PathEl::MoveTo(t * p),
            PathEl::LineTo(p) => PathEl::LineTo(t * p),
            PathEl::QuadTo(a, b) => PathEl::QuadTo(t * a, t * b),
            PathEl::CurveTo(a, b, c) => PathEl::CurveTo(t * a, t * b, t * c),
            PathEl::ClosePath => PathEl::ClosePath,
        };
        self.path.push(mapped);
    }

    /// Append an elliptical arc, joining it to the current point.
    fn push_arc(&mut self, center: Point, radii: Vec2, start: f64, end: f64, x_rotation: f64) {
        let sweep = if end - start >= TAU {
            TAU
        } else {
            (end - start).rem_euclid(TAU)
        };
        let arc = Arc {
            center,
            radii,
            start_angle: start,
            sweep_angle: sweep,
            x_rotation,
        };

        let (sin_r, cos_r) = x_rotation.sin_cos();
        let (vx, vy) = (radii.x * start.cos(), radii.y * start.sin());
        let first = center + Vec2::new(vx * cos_r - vy * sin_r, vx * sin_r + vy * cos_r);
        if self.has_current_point {
            self.push_el(PathEl::LineTo(first));
        } else {
            self.push_el(PathEl::MoveTo(first));
        }
        for el in arc.append_iter(ARC_TOLERANCE) {
            self.push_el(el);
        }
        self.has_current_point = true;
    }

    /// Uniform scale of the current transform, applied to line widths.
    fn stroke_scale(&self) -> f64 {
        self.state.transform.determinant().abs().sqrt()
    }
}

impl<B: PathSink> Surface for PathSurface<B> {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let rect = self
            .state
            .transform
            .transform_rect_bbox(Rect::new(x, y, x + width, y + height));
        self.sink.clear(rect);
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.state.transform *= Affine::translate((x, y));
    }

    fn rotate(&mut self, angle: f64) {
        self.state.transform *= Affine::rotate(angle);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform *= Affine::scale_non_uniform(sx, sy);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn begin_path(&mut self) {
        self.path = BezPath::new();
        self.has_current_point = false;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push_el(PathEl::MoveTo(Point::new(x, y)));
        self.has_current_point = true;
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if self.has_current_point {
            self.push_el(PathEl::LineTo(Point::new(x, y)));
        } else {
            self.move_to(x, y);
        }
    }

    fn close_path(&mut self) {
        if self.has_current_point {
            self.path.close_path();
        }
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.push_arc(
            Point::new(x, y),
            Vec2::new(radius, radius),
            start_angle,
            end_angle,
            0.0,
        );
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
        self.push_arc(
            Point::new(x, y),
            Vec2::new(radius_x, radius_y),
            start_angle,
            end_angle,
            rotation,
        );
    }

    fn fill(&mut self) {
        if self.path.elements().is_empty() {
            return;
        }
        self.sink.fill(&self.path, self.state.fill);
    }

    fn stroke(&mut self) {
        if self.path.elements().is_empty() {
            return;
        }
        let width = self.state.line_width * self.stroke_scale();
        self.sink.stroke(&self.path, self.state.stroke, width);
    }
}
