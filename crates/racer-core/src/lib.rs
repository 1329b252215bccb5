pub mod controller;
pub mod layout;
pub mod model;
pub mod record;
pub mod schedule;
pub mod sprite;
pub mod surface;

pub use controller::Controller;
pub use model::*;
pub use record::{DrawCmd, RecordingSurface};
pub use schedule::{FrameCallback, FrameScheduler, ManualScheduler, start_animation};
pub use sprite::Sprite;
pub use surface::Surface;
