//! Glyph rendering library
//!
//! This crate provides the wgpu-based renderer that draws a particle field
//! as instanced, textured glyph quads.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`atlas::GlyphAtlas`] - Bitmap font for the `0`/`1` glyphs
//! - [`pipeline::GlyphPipeline`] - Instanced glyph rendering
//! - [`batch::GlyphBatch`] - CPU-side frame recording, implements `DrawSurface`

pub mod atlas;
pub mod batch;
pub mod context;
pub mod pipeline;

pub use atlas::GlyphAtlas;
pub use batch::GlyphBatch;
pub use context::{ContextError, RenderContext};
pub use pipeline::{GlyphInstance, GlyphPipeline, GlyphUniforms};
