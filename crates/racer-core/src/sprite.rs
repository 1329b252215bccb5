//! The racer sprite: visual state plus the paint routine.

use crate::layout::{self, Part};
use crate::model::{Palette, Point, Pose, SpriteSize};
use crate::surface::Surface;
use std::f64::consts::TAU;

/// Wheel spin per animation tick, radians.
pub const WHEEL_SPIN: f64 = 0.01;
/// Hub spin per animation tick, radians.
pub const HUB_SPIN: f64 = 0.015;

const SMALL_WHEEL_RADIUS: f64 = 3.0;
const LARGE_WHEEL_RADIUS: f64 = 4.0;
const HUB_RADIUS: f64 = 2.0;
const DIAMOND_HALF: f64 = 6.0;

/// A racing-car sprite bound to the surface it paints onto.
pub struct Sprite<S> {
    surface: S,
    state: Pose,
    rotation: f64,
    scale: f64,
    position: Point,
    animation_enabled: bool,
    animation_clock: u64,
    palette: Palette,
}

impl<S: Surface> Sprite<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: Pose::Normal,
            rotation: 0.0,
            scale: 1.0,
            position: Point::default(),
            animation_enabled: true,
            animation_clock: 0,
            palette: Palette::default(),
        }
    }

    // ─── State ───────────────────────────────────────────────────────────

    pub fn set_state(&mut self, state: impl Into<Pose>) {
        let state = state.into();
        if state != self.state {
            log::debug!("sprite pose {:?} -> {:?}", self.state, state);
        }
        self.state = state;
    }

    pub fn state(&self) -> Pose {
        self.state
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.set_position(x, y);
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Set the whole-sprite rotation in degrees, pivoting on the sprite center.
    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees.to_radians();
    }

    pub fn rotate(&mut self, degrees: f64) {
        self.set_rotation(degrees);
    }

    /// Current rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_scale(&mut self, factor: f64) {
        self.scale = factor;
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_animation(&mut self, enabled: bool) {
        if enabled != self.animation_enabled {
            log::debug!("sprite animation {}", if enabled { "on" } else { "off" });
        }
        self.animation_enabled = enabled;
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    /// Frames rendered while animation was enabled.
    pub fn animation_clock(&self) -> u64 {
        self.animation_clock
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn size(&self) -> SpriteSize {
        SpriteSize::NOMINAL
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    // ─── Painting ────────────────────────────────────────────────────────

    /// Clear the surface and paint one frame, then advance the clock.
    pub fn draw(&mut self) {
        log::trace!(
            "DRAW {:?} at ({}, {}) rot={} scale={} tick={}",
            self.state,
            self.position.x,
            self.position.y,
            self.rotation,
            self.scale,
            self.animation_clock
        );

        self.surface.clear();

        let (half_w, half_h) = self.size().center();
        let (cx, cy) = (self.position.x + half_w, self.position.y + half_h);
        self.surface.save();
        self.surface.translate(cx, cy);
        self.surface.rotate(self.rotation);
        self.surface.scale(self.scale, self.scale);
        self.surface.translate(-half_w, -half_h);

        for part in layout::parts(self.state) {
            self.paint_part(part);
        }

        self.surface.restore();

        if self.animation_enabled {
            self.animation_clock += 1;
        }
    }

    fn spin(&self, rate: f64) -> f64 {
        if self.animation_enabled {
            self.animation_clock as f64 * rate
        } else {
            0.0
        }
    }

    fn paint_part(&mut self, part: &Part) {
        log::trace!("PAINT {part:?}");
        match *part {
            Part::SmallWheel { x, y } => self.paint_small_wheel(x, y),
            Part::LargeWheel { x, y } => self.paint_large_wheel(x, y),
            Part::EllipseWheel { x, y, rx, ry } => self.paint_ellipse_wheel(x, y, rx, ry),
            Part::Hub { x, y } => self.paint_hub(x, y),
            Part::Diamond { x, y } => self.paint_diamond(x, y),
        }
    }

    fn paint_small_wheel(&mut self, x: f64, y: f64) {
        let angle = self.spin(WHEEL_SPIN);
        let palette = self.palette;
        let s = &mut self.surface;
        s.save();
        s.translate(x, y);
        s.rotate(angle);
        s.set_fill_color(palette.small_wheel);
        s.set_stroke_color(palette.wheel_stroke);
        s.set_line_width(0.5);
        s.begin_path();
        s.arc(0.0, 0.0, SMALL_WHEEL_RADIUS, 0.0, TAU);
        s.fill();
        s.stroke();
        s.restore();
    }

    fn paint_large_wheel(&mut self, x: f64, y: f64) {
        let angle = self.spin(WHEEL_SPIN);
        let palette = self.palette;
        let s = &mut self.surface;
        s.save();
        s.translate(x, y);
        s.rotate(angle);
        s.set_stroke_color(palette.large_wheel);
        s.set_line_width(1.5);
        s.begin_path();
        s.arc(0.0, 0.0, LARGE_WHEEL_RADIUS, 0.0, TAU);
        s.stroke();
        s.restore();
    }

    fn paint_ellipse_wheel(&mut self, x: f64, y: f64, rx: f64, ry: f64) {
        let angle = self.spin(WHEEL_SPIN);
        let palette = self.palette;
        let s = &mut self.surface;
        s.save();
        s.translate(x, y);
        s.rotate(angle);
        s.set_fill_color(palette.small_wheel);
        s.set_stroke_color(palette.wheel_stroke);
        s.set_line_width(0.5);
        s.begin_path();
        s.ellipse(0.0, 0.0, rx, ry, 0.0, 0.0, TAU);
        s.fill();
        s.stroke();
        s.restore();
    }

    fn paint_hub(&mut self, x: f64, y: f64) {
        let angle = self.spin(HUB_SPIN);
        let palette = self.palette;
        let s = &mut self.surface;
        s.save();
        s.translate(x, y);
        s.rotate(angle);
        s.set_fill_color(palette.center_body);
        s.set_stroke_color(palette.hub_stroke);
        s.set_line_width(0.5);
        s.begin_path();
        s.arc(0.0, 0.0, HUB_RADIUS, 0.0, TAU);
        s.fill();
        s.stroke();
        s.restore();
    }

    /// The body does not spin and is drawn directly in sprite space.
    fn paint_diamond(&mut self, x: f64, y: f64) {
        let palette = self.palette;
        let s = &mut self.surface;
        s.set_fill_color(palette.diamond);
        s.set_stroke_color(palette.small_wheel);
        s.set_line_width(1.0);
        s.begin_path();
        s.move_to(x, y - DIAMOND_HALF);
        s.line_to(x + DIAMOND_HALF, y);
        s.line_to(x, y + DIAMOND_HALF);
        s.line_to(x - DIAMOND_HALF, y);
        s.close_path();
        s.fill();
        s.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DrawCmd, RecordingSurface};
    use pretty_assertions::assert_eq;
    use std::f64::consts::FRAC_PI_2;

    fn sprite() -> Sprite<RecordingSurface> {
        Sprite::new(RecordingSurface::new(400.0, 300.0))
    }

    #[test]
    fn rotation_is_stored_in_radians() {
        let mut s = sprite();
        s.set_rotation(90.0);
        assert!((s.rotation() - FRAC_PI_2).abs() < 1e-12);
        s.rotate(0.0);
        assert_eq!(s.rotation(), 0.0);
    }

    #[test]
    fn size_is_fixed() {
        let mut s = sprite();
        s.set_state(Pose::Damaged);
        s.set_position(99.0, -3.0);
        s.set_rotation(45.0);
        s.set_scale(3.0);
        s.draw();
        assert_eq!(
            s.size(),
            SpriteSize {
                width: 40.0,
                height: 54.0,
            }
        );
    }

    #[test]
    fn clock_advances_once_per_frame() {
        let mut s = sprite();
        for _ in 0..5 {
            s.draw();
        }
        assert_eq!(s.animation_clock(), 5);

        s.set_animation(false);
        s.draw();
        s.draw();
        assert_eq!(s.animation_clock(), 5);
    }

    #[test]
    fn frame_starts_with_clear_and_transform() {
        let mut s = sprite();
        s.set_position(10.0, 20.0);
        s.set_scale(2.0);
        s.draw();

        let cmds = s.surface().commands();
        assert_eq!(
            &cmds[..6],
            &[
                DrawCmd::ClearRect {
                    x: 0.0,
                    y: 0.0,
                    width: 400.0,
                    height: 300.0,
                },
                DrawCmd::Save,
                DrawCmd::Translate { x: 30.0, y: 47.0 },
                DrawCmd::Rotate(0.0),
                DrawCmd::Scale { sx: 2.0, sy: 2.0 },
                DrawCmd::Translate { x: -20.0, y: -27.0 },
            ]
        );
        assert_eq!(cmds.last(), Some(&DrawCmd::Restore));
    }

    #[test]
    fn disabled_animation_has_no_micro_rotation() {
        let mut s = sprite();
        for _ in 0..3 {
            s.draw();
        }
        s.set_animation(false);
        s.surface_mut().clear_commands();
        s.draw();
        let rotations = s.surface().part_rotations();
        assert_eq!(rotations.len(), 6);
        assert!(rotations.iter().all(|a| *a == 0.0));
    }

    #[test]
    fn hubs_spin_faster_than_wheels() {
        let mut s = sprite();
        for _ in 0..10 {
            s.draw();
        }
        s.surface_mut().clear_commands();
        s.draw();
        // Normal paints wheel, hub, wheel on each wheel row.
        let r = s.surface().part_rotations();
        assert!((r[0] - 0.1).abs() < 1e-12);
        assert!((r[1] - 0.15).abs() < 1e-12);
        assert!((r[2] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn hollow_and_oval_wheels_spin() {
        for pose in [Pose::Damaged, Pose::FacingLeft] {
            let mut s = sprite();
            s.set_state(pose);
            for _ in 0..10 {
                s.draw();
            }
            s.surface_mut().clear_commands();
            s.draw();
            let r = s.surface().part_rotations();
            let expected = [0.1, 0.15, 0.1, 0.1, 0.15, 0.1];
            assert_eq!(r.len(), expected.len(), "{pose:?}");
            for (got, want) in r.iter().zip(expected) {
                assert!((got - want).abs() < 1e-12, "{pose:?}: {r:?}");
            }
        }
    }

    #[test]
    fn palette_flows_into_fills() {
        let mut s = sprite();
        let mut palette = Palette::default();
        palette.diamond = crate::model::Color::rgb(1, 2, 3);
        s.set_palette(palette);
        s.draw();
        assert!(
            s.surface()
                .commands()
                .contains(&DrawCmd::FillColor(crate::model::Color::rgb(1, 2, 3)))
        );
    }
}
