//! Rendering pipeline components
//!
//! Glyphs are drawn as instanced quads sampled from the glyph atlas.

pub mod glyph_pipeline;
pub mod types;

pub use glyph_pipeline::GlyphPipeline;
pub use types::{GlyphInstance, GlyphUniforms};
