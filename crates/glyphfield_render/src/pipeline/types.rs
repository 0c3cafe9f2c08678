//! GPU-compatible data types for the glyph pipeline
//!
//! These types are designed to match the shader layouts exactly.

use bytemuck::{Pod, Zeroable};
use glyphfield_core::{Color, Glyph};
use glyphfield_math::Vec2;

use crate::atlas::GLYPH_COUNT;

/// One glyph to draw, uploaded as per-instance vertex data
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct GlyphInstance {
    /// Baseline anchor in surface pixels (x centre, y baseline)
    pub position: [f32; 2],
    /// Font size in pixels (glyph height)
    pub size: f32,
    /// Atlas cell index
    pub glyph: u32,
    /// RGBA colour with opacity applied
    pub color: [f32; 4],
}

impl GlyphInstance {
    pub fn new(position: Vec2, size: f32, glyph: Glyph, color: Color) -> Self {
        Self {
            position: position.to_array(),
            size,
            glyph: glyph.index(),
            color: color.to_array(),
        }
    }
}

/// Uniforms shared by every glyph in a frame
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct GlyphUniforms {
    /// Surface size in pixels
    pub surface_size: [f32; 2],
    /// Size of one atlas cell in texture coordinates
    pub cell_uv: [f32; 2],
}

impl GlyphUniforms {
    pub fn new(surface_size: [f32; 2]) -> Self {
        Self {
            surface_size,
            cell_uv: [1.0 / GLYPH_COUNT as f32, 1.0],
        }
    }
}

impl Default for GlyphUniforms {
    fn default() -> Self {
        Self::new([1.0, 1.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_glyph_instance_size() {
        // 2 floats position + 1 float size + 1 u32 glyph + 4 floats color = 32 bytes
        assert_eq!(size_of::<GlyphInstance>(), 32);
        assert_eq!(align_of::<GlyphInstance>(), 4);
    }

    #[test]
    fn test_uniforms_size() {
        // Uniform buffers need 16-byte multiples
        assert_eq!(size_of::<GlyphUniforms>(), 16);
    }

    #[test]
    fn test_cell_uv_splits_atlas() {
        let uniforms = GlyphUniforms::new([800.0, 600.0]);
        assert_eq!(uniforms.cell_uv, [0.5, 1.0]);
        assert_eq!(uniforms.surface_size, [800.0, 600.0]);
    }

    #[test]
    fn test_instance_from_glyph() {
        let instance = GlyphInstance::new(
            Vec2::new(3.0, 4.0),
            10.0,
            Glyph::Zero,
            Color::WHITE.with_opacity(0.5),
        );
        assert_eq!(instance.glyph, 0);
        assert_eq!(instance.color[3], 0.5);
    }
}
