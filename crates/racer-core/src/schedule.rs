//! Per-frame repaint loop.
//!
//! The loop draws one frame and, while animation stays enabled, asks the
//! host for the next frame. Turning animation off stops it on the next
//! tick; nothing is cancelled and no handle is kept.

use crate::sprite::Sprite;
use crate::surface::Surface;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Callback run once on the next display frame.
pub type FrameCallback = Box<dyn FnOnce()>;

/// A host's "call me on the next paint" primitive.
pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback);
}

/// Draw now, then keep redrawing once per frame while animation is enabled.
///
/// Calling this again after animation was turned off and back on starts
/// a new loop.
pub fn start_animation<S, F>(sprite: &Rc<RefCell<Sprite<S>>>, scheduler: &F)
where
    S: Surface + 'static,
    F: FrameScheduler + Clone + 'static,
{
    log::debug!("animation loop started");
    tick(Rc::clone(sprite), scheduler.clone());
}

fn tick<S, F>(sprite: Rc<RefCell<Sprite<S>>>, scheduler: F)
where
    S: Surface + 'static,
    F: FrameScheduler + Clone + 'static,
{
    let keep_going = {
        let mut s = sprite.borrow_mut();
        s.draw();
        s.animation_enabled()
    };

    if keep_going {
        let next = scheduler.clone();
        scheduler.request_frame(Box::new(move || tick(sprite, next)));
    } else {
        log::debug!("animation loop stopped");
    }
}

/// Scheduler that queues frames until the host pumps them.
///
/// Clones share one queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<VecDeque<FrameCallback>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run every callback queued before this call. Returns how many ran.
    ///
    /// Callbacks queued while running wait for the next frame.
    pub fn run_frame(&self) -> usize {
        let batch: Vec<FrameCallback> = self.queue.borrow_mut().drain(..).collect();
        let n = batch.len();
        for callback in batch {
            callback();
        }
        n
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        self.queue.borrow_mut().push_back(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordingSurface;

    fn shared() -> Rc<RefCell<Sprite<RecordingSurface>>> {
        Rc::new(RefCell::new(Sprite::new(RecordingSurface::new(100.0, 100.0))))
    }

    #[test]
    fn first_frame_draws_immediately() {
        let sprite = shared();
        let scheduler = ManualScheduler::new();
        start_animation(&sprite, &scheduler);
        assert_eq!(sprite.borrow().animation_clock(), 1);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn each_frame_draws_once() {
        let sprite = shared();
        let scheduler = ManualScheduler::new();
        start_animation(&sprite, &scheduler);
        for _ in 0..4 {
            assert_eq!(scheduler.run_frame(), 1);
        }
        assert_eq!(sprite.borrow().animation_clock(), 5);
    }

    #[test]
    fn disabling_stops_rescheduling() {
        let sprite = shared();
        let scheduler = ManualScheduler::new();
        start_animation(&sprite, &scheduler);
        sprite.borrow_mut().set_animation(false);

        assert_eq!(scheduler.run_frame(), 1);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.run_frame(), 0);
        assert_eq!(sprite.borrow().animation_clock(), 1);
    }

    #[test]
    fn restart_after_reenable() {
        let sprite = shared();
        let scheduler = ManualScheduler::new();
        start_animation(&sprite, &scheduler);
        sprite.borrow_mut().set_animation(false);
        scheduler.run_frame();

        sprite.borrow_mut().set_animation(true);
        assert_eq!(scheduler.pending(), 0, "re-enabling does not resume by itself");

        start_animation(&sprite, &scheduler);
        scheduler.run_frame();
        assert_eq!(sprite.borrow().animation_clock(), 3);
        assert_eq!(scheduler.pending(), 1);
    }
}
