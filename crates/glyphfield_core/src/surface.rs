//! Drawing surface abstraction

use glyphfield_math::Vec2;

use crate::particle::Glyph;
use crate::theme::Color;

/// A 2D surface the field paints onto each frame
pub trait DrawSurface {
    /// Clear the whole surface and fill it with `background`
    fn clear(&mut self, background: Color);

    /// Draw `glyph` horizontally centred on `position.x` with its baseline at
    /// `position.y`. `color` already carries the particle's opacity.
    fn draw_glyph(&mut self, glyph: Glyph, position: Vec2, size: f32, color: Color);
}
