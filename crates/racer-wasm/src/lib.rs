//! WASM bridge for the racer sprite, drawing onto an HTML `<canvas>`.
//!
//! Compiled via `wasm-pack build --target web`.

mod canvas;
mod raf;

pub use canvas::CanvasSurface;
pub use raf::RafScheduler;

use racer_core::{Controller, Palette, Pose, SpriteSize};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// JS-facing car controller bound to one canvas.
///
/// Construction centers the sprite and starts the repaint loop. Calling
/// `free()` from JS drops the controller, which stops the loop.
#[wasm_bindgen]
pub struct RacerCanvas {
    controller: Controller<CanvasSurface, RafScheduler>,
}

#[wasm_bindgen]
impl RacerCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<RacerCanvas, JsValue> {
        console_error_panic_hook_setup();

        let surface = CanvasSurface::from_canvas(canvas)?;
        Ok(Self {
            controller: Controller::new(surface, RafScheduler),
        })
    }

    pub fn show_normal(&self) {
        self.controller.show_normal();
    }

    pub fn show_knocked(&self) {
        self.controller.show_knocked();
    }

    pub fn show_left(&self) {
        self.controller.show_left();
    }

    pub fn show_right(&self) {
        self.controller.show_right();
    }

    /// Select a pose by name (`normal`, `knocked`, `left`, `right`).
    /// Unknown names show the normal pose.
    pub fn set_state(&self, name: &str) {
        self.controller.set_state(Pose::from_name(name));
    }

    /// Turning animation back on needs a `start_animation` call to resume.
    pub fn set_animation(&self, enabled: bool) {
        self.controller.set_animation(enabled);
    }

    pub fn start_animation(&self) {
        self.controller.start_animation();
    }

    /// Rotate the whole sprite, in degrees.
    pub fn rotate(&self, degrees: f64) {
        self.controller.rotate(degrees);
    }

    #[wasm_bindgen(js_name = "move")]
    pub fn move_to(&self, x: f64, y: f64) {
        self.controller.move_to(x, y);
    }

    pub fn scale(&self, factor: f64) {
        self.controller.scale(factor);
    }

    /// Paint one frame by hand.
    pub fn draw(&self) {
        self.controller.draw();
    }

    /// Nominal sprite size as JSON: `{"width":40.0,"height":54.0}`.
    pub fn get_size(&self) -> String {
        size_json(self.controller.sprite().size())
    }

    /// Replace the palette from a JSON object of hex colors.
    /// Returns `false` and keeps the current palette on bad input.
    pub fn set_palette(&self, json: &str) -> bool {
        match parse_palette(json) {
            Ok(palette) => {
                self.controller.set_palette(palette);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("racer WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone functions (no canvas needed) ─────────────────────────────

/// Parse a palette JSON object; missing colors keep their defaults.
pub fn parse_palette(json: &str) -> Result<Palette, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid palette: {e}"))
}

fn size_json(size: SpriteSize) -> String {
    serde_json::to_string(&size)
        .unwrap_or_else(|e| format!(r#"{{"error":"Serialization error: {e}"}}"#))
}

/// Default palette as JSON, for hosts building a color picker.
#[wasm_bindgen]
pub fn default_palette() -> String {
    serde_json::to_string(&Palette::default())
        .unwrap_or_else(|e| format!(r#"{{"error":"Serialization error: {e}"}}"#))
}

/// Render one still frame of the named pose as an SVG document.
///
/// `palette_json` may be empty for the default colors.
#[wasm_bindgen]
pub fn render_svg(state: &str, scale: f64, palette_json: &str) -> String {
    let palette = if palette_json.trim().is_empty() {
        Palette::default()
    } else {
        parse_palette(palette_json).unwrap_or_else(|e| {
            log::warn!("{e}; using default palette");
            Palette::default()
        })
    };
    racer_render::render_svg(Pose::from_name(state), &palette, scale)
}
