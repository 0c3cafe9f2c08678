//! CPU-side recording of one frame

use glyphfield_core::{Color, DrawSurface, Glyph};
use glyphfield_math::Vec2;

use crate::pipeline::GlyphInstance;

/// Collects the clear colour and glyph instances for a frame
///
/// The field paints into a batch through [`DrawSurface`]; the render system
/// then uploads the instances in one go.
#[derive(Debug, Clone, Default)]
pub struct GlyphBatch {
    background: Color,
    instances: Vec<GlyphInstance>,
}

impl GlyphBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn instances(&self) -> &[GlyphInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Background as a wgpu clear colour
    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.background.to_array();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

impl DrawSurface for GlyphBatch {
    fn clear(&mut self, background: Color) {
        self.background = background;
        self.instances.clear();
    }

    fn draw_glyph(&mut self, glyph: Glyph, position: Vec2, size: f32, color: Color) {
        self.instances
            .push(GlyphInstance::new(position, size, glyph, color));
    }
}
