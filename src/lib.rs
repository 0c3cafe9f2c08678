//! glyphfield - animated binary-glyph particle background
//!
//! The binary wires these modules to a winit event loop; they live in a
//! library so integration tests can reach them.

pub mod config;
pub mod input;
pub mod overlay;
pub mod systems;
