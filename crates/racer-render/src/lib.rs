//! Native backends for the racer sprite.
//!
//! Both backends share [`path::PathSurface`], which turns surface calls
//! into device-space kurbo paths.

pub mod path;
pub mod scene;
pub mod svg;

pub use path::{PathSink, PathSurface};
pub use scene::{SceneSink, SceneSurface};
pub use svg::{SvgSink, SvgSurface, render_svg};
