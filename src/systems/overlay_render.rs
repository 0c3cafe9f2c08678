//! Welcome overlay rendering
//!
//! Draws the welcome message centred over the glyph field with egui. The
//! overlay pass loads the frame the glyph pipeline just wrote and paints
//! text on top of it.

use std::sync::Arc;
use winit::window::Window;
use glyphfield_core::{Color, Palette, Theme};

use crate::overlay::WelcomeMessage;

/// Viewport width (in points) from which the large type is used
pub const WIDE_BREAKPOINT: f32 = 768.0;

/// What the overlay pass draws this frame
pub struct OverlayFrame<'a> {
    /// `None` draws nothing
    pub message: Option<WelcomeMessage>,
    pub palette: &'a Palette,
    pub theme: Theme,
}

/// Colours and type sizes for the welcome text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub text: egui::Color32,
    /// Label colour on the call-to-action button, which is filled with `text`
    pub button_text: egui::Color32,
    pub headline_size: f32,
    pub tagline_size: f32,
}

impl OverlayStyle {
    /// Style for `theme` on a viewport `viewport_width` points wide
    ///
    /// Text takes the theme's particle colour at full opacity. The button
    /// label takes the other theme's particle colour.
    pub fn new(palette: &Palette, theme: Theme, viewport_width: f32) -> Self {
        let wide = viewport_width >= WIDE_BREAKPOINT;
        Self {
            text: color32(palette.particle(theme)),
            button_text: color32(palette.particle(theme.toggled())),
            headline_size: if wide { 72.0 } else { 48.0 },
            tagline_size: if wide { 24.0 } else { 20.0 },
        }
    }
}

fn color32(color: Color) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgb(channel(color.r), channel(color.g), channel(color.b))
}

fn show_message(ctx: &egui::Context, message: WelcomeMessage, style: &OverlayStyle) {
    egui::Area::new(egui::Id::new("welcome_overlay"))
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .interactable(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(message.headline)
                            .size(style.headline_size)
                            .strong()
                            .color(style.text),
                    )
                    .wrap_mode(egui::TextWrapMode::Extend),
                );
                ui.add_space(24.0);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(message.tagline)
                            .size(style.tagline_size)
                            .color(style.text),
                    )
                    .wrap_mode(egui::TextWrapMode::Extend),
                );

                if let Some(label) = message.call_to_action {
                    ui.add_space(32.0);
                    ui.spacing_mut().button_padding = egui::vec2(24.0, 12.0);
                    ui.add(
                        egui::Button::new(
                            egui::RichText::new(label)
                                .size(style.tagline_size * 0.8)
                                .color(style.button_text),
                        )
                        .fill(style.text),
                    );
                }
            });
        });
}

/// egui context, winit input state and wgpu renderer for the overlay
pub struct OverlayRenderer {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    window: Arc<Window>,
}

impl OverlayRenderer {
    pub fn new(device: &wgpu::Device, output_format: wgpu::TextureFormat, window: Arc<Window>) -> Self {
        let ctx = egui::Context::default();

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let renderer = egui_wgpu::Renderer::new(
            device,
            output_format,
            None,  // depth format
            1,     // msaa samples
            false, // dithering
        );

        Self {
            ctx,
            state,
            renderer,
            window,
        }
    }

    /// Feed a winit event to egui
    ///
    /// Returns true if egui consumed the event.
    pub fn on_window_event(&mut self, event: &winit::event::WindowEvent) -> bool {
        self.state.on_window_event(&self.window, event).consumed
    }

    /// Lay out the overlay and record its render pass into `encoder`
    ///
    /// Returns command buffers egui needs submitted before `encoder`.
    pub fn draw(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size_in_pixels: [u32; 2],
        frame: &OverlayFrame<'_>,
    ) -> Vec<wgpu::CommandBuffer> {
        let raw_input = self.state.take_egui_input(&self.window);
        let full_output = self.ctx.run(raw_input, |ctx| {
            if let Some(message) = frame.message {
                let style = OverlayStyle::new(frame.palette, frame.theme, ctx.screen_rect().width());
                show_message(ctx, message, &style);
            }
        });
        self.state
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }
        let callbacks =
            self.renderer
                .update_buffers(device, queue, encoder, &paint_jobs, &screen_descriptor);

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Overlay Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();
            self.renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        callbacks
    }
}
