//! Integration tests: sprite frames through the kurbo-backed surfaces.

use kurbo::Shape;
use pretty_assertions::assert_eq;
use racer_core::{Color, Controller, ManualScheduler, Pose, Sprite};
use racer_render::{PathSink, PathSurface, SceneSurface, SvgSurface};

#[test]
fn scene_counts_reset_each_frame() {
    let mut sprite = Sprite::new(SceneSurface::with_size(200.0, 200.0));
    sprite.draw();
    assert_eq!(sprite.surface().sink().path_count(), 12);
    sprite.draw();
    assert_eq!(sprite.surface().sink().path_count(), 12);

    sprite.set_state(Pose::FacingRight);
    sprite.draw();
    assert_eq!(sprite.surface().sink().path_count(), 14);
}

#[test]
fn controller_drives_a_scene() {
    let scheduler = ManualScheduler::new();
    let controller = Controller::new(SceneSurface::with_size(400.0, 300.0), scheduler.clone());
    controller.show_left();
    scheduler.run_frame();
    assert_eq!(controller.sprite().surface().sink().path_count(), 14);
}

#[test]
fn quarter_turn_swaps_the_box() {
    // Sprite center is (100, 100); after a quarter turn the y=6 wheel row
    // sits on the right side of the box.
    let mut sprite = Sprite::new(PathSurface::new(
        200.0,
        200.0,
        Boxes::default(),
    ));
    sprite.set_animation(false);
    sprite.set_position(80.0, 73.0);
    sprite.set_rotation(90.0);
    sprite.draw();

    let first = sprite.surface().sink().0[0];
    // Small wheel at local (8, 6): offset (-12, -21) from center rotates to (21, -12).
    let center = first.center();
    assert!((center.x - 121.0).abs() < 0.1, "{center:?}");
    assert!((center.y - 88.0).abs() < 0.1, "{center:?}");
}

#[derive(Default)]
struct Boxes(Vec<kurbo::Rect>);

impl PathSink for Boxes {
    fn clear(&mut self, _rect: kurbo::Rect) {
        self.0.clear();
    }
    fn fill(&mut self, path: &kurbo::BezPath, _color: Color) {
        self.0.push(path.bounding_box());
    }
    fn stroke(&mut self, _path: &kurbo::BezPath, _color: Color, _width: f64) {}
}

#[test]
fn svg_surface_reuses_one_document() {
    let mut sprite = Sprite::new(SvgSurface::with_size(100.0, 100.0));
    sprite.draw();
    sprite.draw();
    assert_eq!(sprite.surface().sink().elements().len(), 12);
}
