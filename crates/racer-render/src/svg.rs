//! Single-frame SVG export.

use crate::path::{PathSink, PathSurface};
use kurbo::{BezPath, Rect};
use racer_core::{Color, Palette, Pose, Sprite, SpriteSize};

pub type SvgSurface = PathSurface<SvgSink>;

/// Collects one `<path>` element per fill or stroke.
#[derive(Debug, Default)]
pub struct SvgSink {
    elements: Vec<String>,
}

impl SvgSink {
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn to_svg(&self, width: f64, height: f64) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">\n"
        );
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

fn opacity_attr(name: &str, c: Color) -> String {
    if c.a == 255 {
        String::new()
    } else {
        format!(" {name}=\"{:.3}\"", c.a as f64 / 255.0)
    }
}

fn rgb_hex(c: Color) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}

impl PathSink for SvgSink {
    fn clear(&mut self, _rect: Rect) {
        self.elements.clear();
    }

    fn fill(&mut self, path: &BezPath, color: Color) {
        self.elements.push(format!(
            "<path d=\"{}\" fill=\"{}\"{}/>",
            path.to_svg(),
            rgb_hex(color),
            opacity_attr("fill-opacity", color)
        ));
    }

    fn stroke(&mut self, path: &BezPath, color: Color, width: f64) {
        self.elements.push(format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{width}\"{}/>",
            path.to_svg(),
            rgb_hex(color),
            opacity_attr("stroke-opacity", color)
        ));
    }
}

impl SvgSurface {
    pub fn with_size(width: f64, height: f64) -> Self {
        PathSurface::new(width, height, SvgSink::default())
    }

    pub fn to_svg(&self) -> String {
        let (w, h) = racer_core::Surface::size(self);
        self.sink().to_svg(w, h)
    }
}

/// Render one still frame of `pose` at `scale`, sized to fit the sprite.
pub fn render_svg(pose: Pose, palette: &Palette, scale: f64) -> String {
    let SpriteSize { width, height } = SpriteSize::NOMINAL;
    let (w, h) = (width * scale, height * scale);

    let mut sprite = Sprite::new(SvgSurface::with_size(w, h));
    sprite.set_animation(false);
    sprite.set_palette(*palette);
    sprite.set_state(pose);
    sprite.set_scale(scale);
    // Scaling pivots on the sprite center; shift so the scaled box starts at 0,0.
    sprite.set_position((w - width) / 2.0, (h - height) / 2.0);
    sprite.draw();

    log::debug!("SVG export {pose:?} at {scale}x");
    sprite.surface().to_svg()
}
