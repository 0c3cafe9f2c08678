//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Glyph pipeline
//! - Welcome overlay pass
//! - Frame rendering

use std::sync::Arc;
use winit::event::WindowEvent;
use winit::window::Window;
use glyphfield_render::{ContextError, GlyphBatch, GlyphPipeline, GlyphUniforms, RenderContext};

use super::overlay_render::{OverlayFrame, OverlayRenderer};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: GlyphPipeline,
    overlay: OverlayRenderer,
}

impl RenderSystem {
    /// Create render system for `window`
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window.clone(), vsync))?;
        let pipeline = GlyphPipeline::new(&context.device, &context.queue, context.config.format);
        pipeline.update_uniforms(&context.queue, &GlyphUniforms::new(context.surface_size()));
        let overlay = OverlayRenderer::new(&context.device, context.config.format, window);

        Ok(Self {
            context,
            pipeline,
            overlay,
        })
    }

    /// Pass a window event to the overlay
    ///
    /// Returns true if the overlay consumed it.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.overlay.on_window_event(event)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.update_uniforms(
            &self.context.queue,
            &GlyphUniforms::new(self.context.surface_size()),
        );
    }

    /// Reconfigure the surface at its current size
    pub fn recover_surface(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Upload and draw one recorded frame, then the overlay on top
    pub fn render_frame(
        &mut self,
        batch: &GlyphBatch,
        overlay: &OverlayFrame<'_>,
    ) -> Result<(), RenderError> {
        let output = self.context.surface.get_current_texture()?;

        self.pipeline
            .upload_instances(&self.context.device, &self.context.queue, batch.instances());

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, batch.clear_color());

        let size = [self.context.config.width, self.context.config.height];
        let callbacks = self.overlay.draw(
            &self.context.device,
            &self.context.queue,
            &mut encoder,
            &view,
            size,
            overlay,
        );

        self.context
            .queue
            .submit(callbacks.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_error_mapping() {
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::Lost),
            RenderError::SurfaceLost
        ));
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::Outdated),
            RenderError::SurfaceLost
        ));
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::OutOfMemory),
            RenderError::OutOfMemory
        ));
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::Timeout),
            RenderError::Other(_)
        ));
    }

    #[test]
    fn test_render_error_display() {
        assert_eq!(RenderError::SurfaceLost.to_string(), "Surface lost");
        assert_eq!(
            RenderError::Other("boom".into()).to_string(),
            "Render error: boom"
        );
    }
}
