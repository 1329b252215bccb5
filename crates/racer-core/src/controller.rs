//! Narrow command façade over a [`Sprite`].
//!
//! Centers the sprite on its surface, starts the repaint loop, and
//! forwards pose and transform commands.

use crate::model::{Palette, Pose};
use crate::schedule::{self, FrameScheduler};
use crate::sprite::Sprite;
use crate::surface::Surface;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Dropping the controller turns animation off, so a pending frame ends
/// the loop instead of rescheduling.
pub struct Controller<S: Surface, F> {
    sprite: Rc<RefCell<Sprite<S>>>,
    scheduler: F,
}

impl<S, F> Controller<S, F>
where
    S: Surface + 'static,
    F: FrameScheduler + Clone + 'static,
{
    pub fn new(surface: S, scheduler: F) -> Self {
        let (surface_w, surface_h) = surface.size();
        let mut sprite = Sprite::new(surface);
        let size = sprite.size();
        sprite.set_position(
            surface_w / 2.0 - size.width / 2.0,
            surface_h / 2.0 - size.height / 2.0,
        );

        let controller = Self {
            sprite: Rc::new(RefCell::new(sprite)),
            scheduler,
        };
        controller.start_animation();
        controller
    }

    pub fn show_normal(&self) {
        self.set_state(Pose::Normal);
    }

    pub fn show_knocked(&self) {
        self.set_state(Pose::Damaged);
    }

    pub fn show_left(&self) {
        self.set_state(Pose::FacingLeft);
    }

    pub fn show_right(&self) {
        self.set_state(Pose::FacingRight);
    }

    pub fn set_state(&self, state: impl Into<Pose>) {
        self.sprite.borrow_mut().set_state(state);
    }

    pub fn set_animation(&self, enabled: bool) {
        self.sprite.borrow_mut().set_animation(enabled);
    }

    /// Restart the repaint loop, e.g. after re-enabling animation.
    pub fn start_animation(&self) {
        schedule::start_animation(&self.sprite, &self.scheduler);
    }

    pub fn rotate(&self, degrees: f64) {
        self.sprite.borrow_mut().set_rotation(degrees);
    }

    pub fn move_to(&self, x: f64, y: f64) {
        self.sprite.borrow_mut().set_position(x, y);
    }

    pub fn scale(&self, factor: f64) {
        self.sprite.borrow_mut().set_scale(factor);
    }

    pub fn set_palette(&self, palette: Palette) {
        self.sprite.borrow_mut().set_palette(palette);
    }

    pub fn draw(&self) {
        self.sprite.borrow_mut().draw();
    }

    pub fn sprite(&self) -> Ref<'_, Sprite<S>> {
        self.sprite.borrow()
    }
}

impl<S: Surface, F> Drop for Controller<S, F> {
    fn drop(&mut self) {
        if let Ok(mut sprite) = self.sprite.try_borrow_mut() {
            sprite.set_animation(false);
        }
    }
}
