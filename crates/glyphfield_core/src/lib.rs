//! Particle field engine for glyphfield
//!
//! This crate provides the glyph particle simulation, including:
//! - Particles with drift, transient velocity and a return-to-origin pull
//! - Pointer repulsion as a timed, cancellable frame task
//! - Click/tap bursts that inject particles
//! - Configuration with alias resolution and light/dark theming
//!
//! Rendering goes through the [`DrawSurface`] trait, so the engine runs
//! headless in tests and on top of wgpu in the application.

pub mod field;
pub mod params;
pub mod particle;
pub mod repulsion;
pub mod scheduler;
pub mod surface;
pub mod theme;

// Re-export commonly used types
pub use field::{particle_count_for, ParticleField, AREA_PER_PARTICLE, BURST_SIZE};
pub use params::{FieldOptions, FieldParams, ParamsError};
pub use particle::{Glyph, Particle, VELOCITY_DAMPING};
pub use repulsion::{repulsion_impulse, Repulsion, IMPULSE_GAIN};
pub use scheduler::{FrameKey, FrameScheduler, FrameTask};
pub use surface::DrawSurface;
pub use theme::{Color, ColorParseError, Palette, Theme};
pub use glyphfield_math::Vec2;
