//! `requestAnimationFrame` scheduling.

use racer_core::{FrameCallback, FrameScheduler};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

#[derive(Debug, Clone, Copy, Default)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window; animation frame dropped");
            return;
        };
        let closure = Closure::once_into_js(move || callback());
        let frame_fn: &js_sys::Function = closure.unchecked_ref();
        if let Err(err) = window.request_animation_frame(frame_fn) {
            log::warn!("requestAnimationFrame failed: {err:?}");
        }
    }
}
