//! Particle simulation system
//!
//! Owns the particle field and feeds it:
//! - Surface size changes
//! - Pointer input (through the pointer tracker)
//! - Frame ticks, recorded into a glyph batch

use std::time::Instant;
use winit::event::WindowEvent;
use glyphfield_core::{FieldParams, ParticleField, Theme};
use glyphfield_input::{PointerEvent, PointerTracker};
use glyphfield_render::GlyphBatch;

/// Drives the particle field from window events
pub struct SimulationSystem {
    field: ParticleField,
    pointer: PointerTracker,
    batch: GlyphBatch,
}

impl SimulationSystem {
    /// Create a simulation for an unmounted field
    pub fn new(params: FieldParams, theme: Theme) -> Self {
        Self::from_field(ParticleField::new(params).with_theme(theme))
    }

    /// Wrap an existing field (tests use a seeded one)
    pub fn from_field(field: ParticleField) -> Self {
        Self {
            field,
            pointer: PointerTracker::new(),
            batch: GlyphBatch::new(),
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    /// Batch recorded by the last frame that ran
    pub fn batch(&self) -> &GlyphBatch {
        &self.batch
    }

    /// Attach the field to a surface of the given size
    pub fn mount(&mut self, width: f32, height: f32) {
        self.field.mount(width, height);
    }

    pub fn unmount(&mut self) {
        self.field.unmount();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.field.resize(width, height);
    }

    /// Forward pointer input to the field
    ///
    /// Returns true when the event was pointer input the field acted on.
    pub fn handle_window_event(&mut self, event: &WindowEvent, now: Instant) -> bool {
        match self.pointer.process_window_event(event) {
            Some(pointer) => {
                self.handle_pointer(pointer, now);
                true
            }
            None => false,
        }
    }

    /// Apply a surface-local pointer event
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) {
        match event {
            PointerEvent::Moved(at) => self.field.pointer_moved(at, now),
            PointerEvent::Pressed(at) => self.field.inject(at),
        }
    }

    /// Run one frame into the batch
    ///
    /// Returns true when the batch holds a new frame to present.
    pub fn update(&mut self, now: Instant) -> bool {
        self.field.frame(now, Some(&mut self.batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphfield_math::Vec2;
    use std::time::Duration;

    fn seeded(width: f32, height: f32) -> SimulationSystem {
        let field = ParticleField::with_seed(FieldParams::default(), 9);
        let mut sim = SimulationSystem::from_field(field);
        sim.mount(width, height);
        sim
    }

    #[test]
    fn test_update_records_every_particle() {
        let mut sim = seeded(400.0, 400.0);
        assert!(sim.update(Instant::now()));
        assert_eq!(sim.batch().len(), sim.field().particle_count());
    }

    #[test]
    fn test_unmounted_update_draws_nothing() {
        let mut sim = SimulationSystem::from_field(ParticleField::with_seed(FieldParams::default(), 1));
        assert!(!sim.update(Instant::now()));
        assert!(sim.batch().is_empty());
    }

    #[test]
    fn test_click_injects_burst() {
        let mut sim = seeded(400.0, 400.0);
        let before = sim.field().particle_count();

        sim.handle_pointer(PointerEvent::Pressed(Vec2::new(50.0, 60.0)), Instant::now());
        assert_eq!(sim.field().particle_count(), before + glyphfield_core::BURST_SIZE);
    }

    #[test]
    fn test_teardown_stops_frames() {
        let mut sim = seeded(300.0, 300.0);
        let now = Instant::now();
        sim.handle_pointer(PointerEvent::Moved(Vec2::new(10.0, 10.0)), now);
        assert!(sim.field().is_repelling());
        assert!(sim.update(now + Duration::from_millis(16)));

        sim.unmount();
        assert_eq!(sim.field().pending_frames(), 0);
        assert!(!sim.update(now + Duration::from_millis(32)));
    }
}
