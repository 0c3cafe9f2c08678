//! glyphfield - animated binary-glyph particle background
//!
//! Drifting `0`/`1` glyphs that scatter away from the pointer and burst
//! outward on click.

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use glyphfield::config::AppConfig;
use glyphfield::input::{InputAction, InputMapper};
use glyphfield::overlay::WelcomeOverlay;
use glyphfield::systems::{
    map_theme, OverlayFrame, RenderError, RenderSystem, SimulationSystem, WindowSystem,
};
use glyphfield_core::Theme;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    overlay: WelcomeOverlay,
    /// Set once the user picks a theme, so system changes stop applying
    theme_pinned: bool,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let (params, rejected) = config.field.resolve_lenient();
        for e in rejected {
            log::warn!("{}. Using the default colour.", e);
        }

        let overlay = WelcomeOverlay::new(config.window.height as f32)
            .with_hidden(params.hide_welcome);
        let theme_pinned = config.appearance.theme.is_some();
        let simulation = SimulationSystem::new(params, Theme::resolve(config.appearance.theme));

        Self {
            config,
            window: None,
            render: None,
            simulation,
            overlay,
            theme_pinned,
        }
    }

    fn update_title(&self) {
        if let Some(window) = &self.window {
            window.update_title(self.overlay.message(), self.simulation.field().particle_count());
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        self.simulation.field_mut().set_theme(theme);
        log::info!("Theme: {:?}", theme);
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.simulation.unmount();
        event_loop.exit();
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => self.shutdown(event_loop),
            InputAction::ToggleTheme => {
                self.theme_pinned = true;
                let theme = self.simulation.field().theme().toggled();
                self.set_theme(theme);
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::Regenerate => {
                self.simulation.field_mut().regenerate();
                self.update_title();
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let mut out_of_memory = false;
        if self.simulation.update(Instant::now()) {
            if let Some(render) = &mut self.render {
                let field = self.simulation.field();
                let overlay = OverlayFrame {
                    message: self.overlay.message(),
                    palette: &field.params().palette,
                    theme: field.theme(),
                };
                match render.render_frame(self.simulation.batch(), &overlay) {
                    Ok(()) => {}
                    Err(RenderError::SurfaceLost) => render.recover_surface(),
                    Err(RenderError::OutOfMemory) => out_of_memory = true,
                    Err(e) => log::warn!("Surface error: {}", e),
                }
            }
        }

        if out_of_memory {
            log::error!("GPU out of memory");
            self.shutdown(event_loop);
            return;
        }

        // Request next frame
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(window.window().clone(), self.config.window.vsync) {
            Ok(render) => render,
            Err(e) => {
                log::error!("Failed to initialise renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        if !self.theme_pinned {
            if let Some(theme) = window.system_theme() {
                self.simulation.field_mut().set_theme(theme);
            }
        }

        let (width, height) = window.surface_size();
        self.overlay.set_viewport_height(height);
        self.simulation.mount(width, height);

        self.window = Some(window);
        self.render = Some(render);
        self.update_title();

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(render) = &mut self.render {
            if render.handle_window_event(&event) {
                return;
            }
        }

        if self.simulation.handle_window_event(&event, Instant::now()) {
            // A click may have added particles
            if matches!(event, WindowEvent::MouseInput { .. } | WindowEvent::Touch(_)) {
                self.update_title();
            }
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                let (width, height) = (physical_size.width as f32, physical_size.height as f32);
                self.simulation.resize(width, height);
                self.overlay.set_viewport_height(height);
                self.update_title();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                    }
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.overlay.wheel(delta);
                self.update_title();
            }

            WindowEvent::ThemeChanged(theme) => {
                if !self.theme_pinned {
                    self.set_theme(map_theme(theme));
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.simulation.unmount();
    }
}

fn main() {
    let config = AppConfig::load();

    let log_level = match &config {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => "info".to_string(),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting glyphfield");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Create event loop
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
