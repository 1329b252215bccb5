//! Headless surface that records every call.
//!
//! Used to compare a rendered frame against an expected primitive
//! sequence, and by hosts that want to inspect a frame without pixels.

use crate::model::Color;
use crate::surface::Surface;

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Rotate(f64),
    Scale { sx: f64, sy: f64 },
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f64),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start: f64,
        end: f64,
    },
    Ellipse {
        x: f64,
        y: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start: f64,
        end: f64,
    },
    Fill,
    Stroke,
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn take_commands(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }

    /// Rotations recorded inside a per-part `save`/`restore` pair, in order.
    ///
    /// The first `Rotate` of a frame belongs to the whole-sprite transform
    /// and is skipped.
    pub fn part_rotations(&self) -> Vec<f64> {
        let mut depth = 0usize;
        let mut out = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCmd::Save => depth += 1,
                DrawCmd::Restore => depth = depth.saturating_sub(1),
                DrawCmd::Rotate(a) if depth >= 2 => out.push(*a),
                _ => {}
            }
        }
        out
    }

    fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(DrawCmd::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn save(&mut self) {
        self.push(DrawCmd::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCmd::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.push(DrawCmd::Translate { x, y });
    }

    fn rotate(&mut self, angle: f64) {
        self.push(DrawCmd::Rotate(angle));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.push(DrawCmd::Scale { sx, sy });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.push(DrawCmd::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.push(DrawCmd::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCmd::LineWidth(width));
    }

    fn begin_path(&mut self) {
        self.push(DrawCmd::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCmd::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCmd::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.push(DrawCmd::ClosePath);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        self.push(DrawCmd::Arc {
            x,
            y,
            radius,
            start,
            end,
        });
    }

    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, rotation: f64, start: f64, end: f64) {
        self.push(DrawCmd::Ellipse {
            x,
            y,
            rx,
            ry,
            rotation,
            start,
            end,
        });
    }

    fn fill(&mut self) {
        self.push(DrawCmd::Fill);
    }

    fn stroke(&mut self) {
        self.push(DrawCmd::Stroke);
    }
}
