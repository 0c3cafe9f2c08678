//! The particle field
//!
//! [`ParticleField`] owns every particle plus the two frame-driven loops
//! that move them: the animation loop (integrate and draw) and the repulsion
//! chain (pointer impulses). Both loops are callbacks in a
//! [`FrameScheduler`] that re-request themselves each frame, and both are
//! cancelled on [`ParticleField::unmount`].
//!
//! Until the field is mounted every operation is a no-op.

use std::time::Instant;

use glyphfield_math::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::params::FieldParams;
use crate::particle::Particle;
use crate::repulsion::{repulsion_impulse, Repulsion};
use crate::scheduler::{FrameKey, FrameScheduler, FrameTask};
use crate::surface::DrawSurface;
use crate::theme::Theme;

/// Surface area, in square pixels, that one particle occupies at density 1
pub const AREA_PER_PARTICLE: f64 = 40000.0;

/// Number of particles injected per click or tap
pub const BURST_SIZE: usize = 4;

/// Particle count for a surface of `size` at `density`
///
/// `floor(width * height / (40000 / density))`. A non-positive or
/// non-finite result gives an empty field.
pub fn particle_count_for(size: Vec2, density: f32) -> usize {
    let area = size.x as f64 * size.y as f64;
    let count = (area / (AREA_PER_PARTICLE / density as f64)).floor();
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}

/// Animated field of glyph particles
pub struct ParticleField {
    params: FieldParams,
    theme: Theme,
    /// Surface size; `None` while unmounted
    size: Option<Vec2>,
    particles: Vec<Particle>,
    scheduler: FrameScheduler,
    /// Pending animation loop callback
    animation: Option<FrameKey>,
    /// Active repulsion, if any
    repulsion: Option<Repulsion>,
    rng: StdRng,
}

impl ParticleField {
    /// Create an unmounted field seeded from system entropy
    pub fn new(params: FieldParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }

    /// Create an unmounted field with a deterministic random sequence
    pub fn with_seed(params: FieldParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: FieldParams, rng: StdRng) -> Self {
        Self {
            params,
            theme: Theme::default(),
            size: None,
            particles: Vec::new(),
            scheduler: FrameScheduler::new(),
            animation: None,
            repulsion: None,
            rng,
        }
    }

    /// Builder: set the initial theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Attach the field to a surface of the given size and start animating
    ///
    /// Mounting an already mounted field behaves like a resize.
    pub fn mount(&mut self, width: f32, height: f32) {
        if self.is_mounted() {
            self.resize(width, height);
            return;
        }

        self.size = Some(Vec2::new(width, height));
        self.regenerate();
        self.animation = Some(self.scheduler.request(FrameTask::Animate));
        log::info!(
            "Mounted field '{}' at {}x{} with {} particles",
            self.params.id,
            width,
            height,
            self.particles.len()
        );
    }

    /// Detach from the surface, cancelling every pending callback
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }

        self.scheduler.cancel_all();
        self.animation = None;
        self.repulsion = None;
        self.size = None;
        self.particles.clear();
        log::info!("Unmounted field '{}'", self.params.id);
    }

    /// Resize the surface and regenerate every particle from scratch
    pub fn resize(&mut self, width: f32, height: f32) {
        if !self.is_mounted() {
            return;
        }

        self.size = Some(Vec2::new(width, height));
        self.regenerate();
    }

    /// Discard all particles and spawn a fresh set for the current size
    pub fn regenerate(&mut self) {
        let Some(size) = self.size else {
            return;
        };

        let count = particle_count_for(size, self.params.density);
        let params = &self.params;
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle::ambient(rng, params, size))
            .collect();
        log::debug!(
            "Regenerated {} particles for {}x{}",
            count,
            size.x,
            size.y
        );
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Handle a pointer or touch move at surface-local `at`
    ///
    /// Starts a new repulsion centred on `at`, replacing any active one.
    pub fn pointer_moved(&mut self, at: Vec2, now: Instant) {
        if !self.is_mounted() {
            return;
        }

        if let Some(previous) = self.repulsion.take() {
            self.scheduler.cancel(previous.key);
        }
        let key = self.scheduler.request(FrameTask::Repulse { origin: at });
        self.repulsion = Some(Repulsion::new(at, now, key));
    }

    /// Handle a click or tap at surface-local `at`
    ///
    /// Injects [`BURST_SIZE`] particles that fly outward and spring back to `at`.
    pub fn inject(&mut self, at: Vec2) {
        if !self.is_mounted() {
            return;
        }

        for _ in 0..BURST_SIZE {
            let particle = Particle::burst(&mut self.rng, &self.params, at);
            self.particles.push(particle);
        }
        log::debug!("Injected {} particles at ({:.0}, {:.0})", BURST_SIZE, at.x, at.y);
    }

    /// Add a single particle to a mounted field
    pub fn push_particle(&mut self, particle: Particle) {
        if self.is_mounted() {
            self.particles.push(particle);
        }
    }

    /// Run every callback due this frame
    ///
    /// With no surface available the frame is skipped and pending callbacks
    /// stay armed. Returns true if the frame ran.
    pub fn frame(&mut self, now: Instant, surface: Option<&mut dyn DrawSurface>) -> bool {
        let (Some(size), Some(surface)) = (self.size, surface) else {
            return false;
        };

        for (key, task) in self.scheduler.take_due() {
            match task {
                FrameTask::Animate => {
                    self.animate(size, surface);
                    self.animation = Some(self.scheduler.request(FrameTask::Animate));
                }
                FrameTask::Repulse { origin } => self.repulse(key, origin, now),
            }
        }
        true
    }

    fn animate(&mut self, size: Vec2, surface: &mut dyn DrawSurface) {
        surface.clear(self.params.palette.background(self.theme));

        let color = self.params.palette.particle(self.theme);
        let return_speed = self.params.return_speed;
        for particle in &mut self.particles {
            particle.integrate(return_speed);
            particle.reflect(size);
            surface.draw_glyph(
                particle.glyph,
                particle.position,
                particle.size,
                color.with_opacity(particle.opacity),
            );
        }
    }

    fn repulse(&mut self, key: FrameKey, origin: Vec2, now: Instant) {
        // Superseded chains are cancelled on re-arm, so this only guards
        // against a stale key.
        let Some(active) = self.repulsion.filter(|r| r.key == key) else {
            return;
        };

        let Some(time_factor) = active.time_factor(now, self.params.repulse_duration) else {
            self.repulsion = None;
            log::trace!("Repulsion at ({:.0}, {:.0}) expired", origin.x, origin.y);
            return;
        };

        let radius = self.params.repulse_distance;
        let strength = self.params.repulsion_strength;
        for particle in &mut self.particles {
            if let Some(impulse) =
                repulsion_impulse(particle.position, origin, radius, strength, time_factor)
            {
                particle.apply_impulse(impulse);
            }
        }

        let next = self.scheduler.request(FrameTask::Repulse { origin });
        self.repulsion = Some(Repulsion { key: next, ..active });
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn is_mounted(&self) -> bool {
        self.size.is_some()
    }

    /// Whether the animation loop has a callback armed
    pub fn is_animating(&self) -> bool {
        self.animation
            .map(|key| self.scheduler.is_pending(key))
            .unwrap_or(false)
    }

    /// Whether a repulsion is still pushing particles
    pub fn is_repelling(&self) -> bool {
        self.repulsion.is_some()
    }

    /// Current repulsion origin, if one is active
    pub fn repulsion_origin(&self) -> Option<Vec2> {
        self.repulsion.map(|r| r.origin)
    }

    /// Number of callbacks armed for the next frame
    pub fn pending_frames(&self) -> usize {
        self.scheduler.len()
    }

    pub fn size(&self) -> Option<Vec2> {
        self.size
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }
}
