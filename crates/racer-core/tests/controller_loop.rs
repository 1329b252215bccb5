//! Integration tests: controller façade driving the repaint loop.

use pretty_assertions::assert_eq;
use racer_core::layout::{BOTTOM_ROW, TOP_ROW};
use racer_core::{Controller, DrawCmd, ManualScheduler, Point, Pose, RecordingSurface};

fn make_controller() -> (Controller<RecordingSurface, ManualScheduler>, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    let controller = Controller::new(RecordingSurface::new(400.0, 300.0), scheduler.clone());
    (controller, scheduler)
}

/// x coordinates of the per-part translations on `row_y` in the last frame.
fn row_xs(cmds: &[DrawCmd], row_y: f64) -> Vec<f64> {
    let start = cmds
        .iter()
        .rposition(|c| matches!(c, DrawCmd::ClearRect { .. }))
        .unwrap_or(0);
    cmds[start..]
        .iter()
        .filter_map(|c| match c {
            DrawCmd::Translate { x, y } if *y == row_y => Some(*x),
            _ => None,
        })
        .collect()
}

#[test]
fn sprite_starts_centered() {
    let (controller, _) = make_controller();
    assert_eq!(controller.sprite().position(), Point::new(180.0, 123.0));
}

#[test]
fn construction_starts_the_loop() {
    let (controller, scheduler) = make_controller();
    assert_eq!(controller.sprite().animation_clock(), 1);
    assert_eq!(scheduler.pending(), 1);

    scheduler.run_frame();
    scheduler.run_frame();
    assert_eq!(controller.sprite().animation_clock(), 3);
}

#[test]
fn show_commands_select_poses() {
    let (controller, _) = make_controller();
    controller.show_knocked();
    assert_eq!(controller.sprite().state(), Pose::Damaged);
    controller.show_left();
    assert_eq!(controller.sprite().state(), Pose::FacingLeft);
    controller.show_right();
    assert_eq!(controller.sprite().state(), Pose::FacingRight);
    controller.show_normal();
    assert_eq!(controller.sprite().state(), Pose::Normal);
}

#[test]
fn knocked_frame_has_uneven_wheel_gaps() {
    let (controller, _) = make_controller();
    controller.set_animation(false);

    controller.draw();
    let normal = controller.sprite().surface().commands().to_vec();
    assert_eq!(row_xs(&normal, TOP_ROW), vec![8.0, 20.0, 32.0]);
    assert_eq!(row_xs(&normal, BOTTOM_ROW), vec![8.0, 20.0, 32.0]);

    controller.show_knocked();
    controller.draw();
    let knocked = controller.sprite().surface().commands().to_vec();
    assert_eq!(row_xs(&knocked, TOP_ROW), vec![6.0, 20.0, 34.0]);
    assert_eq!(row_xs(&knocked, BOTTOM_ROW), vec![8.0, 20.0, 32.0]);
}

#[test]
fn transforms_pass_through() {
    let (controller, _) = make_controller();
    controller.move_to(5.0, 7.0);
    controller.rotate(180.0);
    controller.scale(0.5);

    let sprite = controller.sprite();
    assert_eq!(sprite.position(), Point::new(5.0, 7.0));
    assert!((sprite.rotation() - std::f64::consts::PI).abs() < 1e-12);
    assert_eq!(sprite.scale(), 0.5);
}

#[test]
fn disable_then_restart() {
    let (controller, scheduler) = make_controller();
    controller.set_animation(false);
    scheduler.run_frame();
    assert_eq!(scheduler.pending(), 0);

    controller.set_animation(true);
    controller.start_animation();
    assert_eq!(scheduler.pending(), 1);
    assert_eq!(controller.sprite().animation_clock(), 2);
}

#[test]
fn dropping_the_controller_ends_the_loop() {
    let (controller, scheduler) = make_controller();
    scheduler.run_frame();
    assert_eq!(scheduler.pending(), 1);

    drop(controller);
    scheduler.run_frame();
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn degenerate_inputs_still_draw() {
    let (controller, scheduler) = make_controller();
    controller.scale(-1.0);
    controller.rotate(f64::NAN);
    controller.move_to(f64::INFINITY, 0.0);
    scheduler.run_frame();
    assert!(controller.sprite().rotation().is_nan());
    assert_eq!(controller.sprite().animation_clock(), 2);
}
