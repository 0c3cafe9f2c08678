//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod overlay_render;
mod render;
mod simulation;
mod window;

pub use overlay_render::{OverlayFrame, OverlayRenderer, OverlayStyle, WIDE_BREAKPOINT};
pub use render::{RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::{map_theme, WindowError, WindowSystem};
