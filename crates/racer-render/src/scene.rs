//! Sprite frames → Vello scene.
//!
//! Paths are already in device space, so every fill and stroke is
//! encoded with an identity transform. The caller presents the scene
//! via wgpu.

use crate::path::{PathSink, PathSurface};
use kurbo::{BezPath, Rect, Stroke};
use peniko::Fill;
use racer_core::Color;
use vello::Scene;

/// Surface that encodes each frame into a [`vello::Scene`].
pub type SceneSurface = PathSurface<SceneSink>;

#[derive(Default)]
pub struct SceneSink {
    scene: Scene,
    paths: usize,
}

impl SceneSink {
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Fills and strokes encoded since the last clear.
    pub fn path_count(&self) -> usize {
        self.paths
    }
}

impl PathSink for SceneSink {
    /// A scene cannot erase a region; any clear starts a fresh frame.
    fn clear(&mut self, rect: Rect) {
        log::trace!("SCENE reset ({}x{})", rect.width(), rect.height());
        self.scene.reset();
        self.paths = 0;
    }

    fn fill(&mut self, path: &BezPath, color: Color) {
        self.scene
            .fill(Fill::NonZero, kurbo::Affine::IDENTITY, to_peniko(color), None, path);
        self.paths += 1;
    }

    fn stroke(&mut self, path: &BezPath, color: Color, width: f64) {
        self.scene.stroke(
            &Stroke::new(width),
            kurbo::Affine::IDENTITY,
            to_peniko(color),
            None,
            path,
        );
        self.paths += 1;
    }
}

impl SceneSurface {
    pub fn with_size(width: f64, height: f64) -> Self {
        PathSurface::new(width, height, SceneSink::default())
    }

    pub fn scene(&self) -> &Scene {
        self.sink().scene()
    }
}

fn to_peniko(c: Color) -> peniko::Color {
    peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}
