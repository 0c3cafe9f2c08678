//! Glyph particles and their per-frame integration

use glyphfield_math::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::params::FieldParams;

/// Per-frame multiplier applied to transient velocity
pub const VELOCITY_DAMPING: f32 = 0.9;

/// Range of the per-particle drift multiplier, `[min, min + span)`
const DRIFT_FACTOR_MIN: f32 = 0.2;
const DRIFT_FACTOR_SPAN: f32 = 0.5;

/// Random opacity range, `[min, min + span)`
const OPACITY_MIN: f32 = 0.1;
const OPACITY_SPAN: f32 = 0.7;

/// Burst particle launch speed range, `[min, min + span)`
const BURST_SPEED_MIN: f32 = 1.0;
const BURST_SPEED_SPAN: f32 = 2.0;

/// The symbol a particle is drawn as
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    Zero,
    One,
}

impl Glyph {
    /// Pick either glyph with equal probability
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<f32>() > 0.5 {
            Glyph::One
        } else {
            Glyph::Zero
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Glyph::Zero => '0',
            Glyph::One => '1',
        }
    }

    /// Index into the glyph atlas
    pub fn index(self) -> u32 {
        match self {
            Glyph::Zero => 0,
            Glyph::One => 1,
        }
    }
}

/// A single glyph particle
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Position in surface coordinates
    pub position: Vec2,
    /// Glyph height in pixels
    pub size: f32,
    pub glyph: Glyph,
    /// Opacity in [0, 1]
    pub opacity: f32,
    /// Constant ambient motion (pixels per frame)
    pub drift: Vec2,
    /// Interaction-induced velocity, damped every frame
    pub velocity: Vec2,
    /// Anchor the particle is pulled back toward
    pub origin: Vec2,
}

impl Particle {
    /// Create a particle at rest at `position`, anchored there
    pub fn new(position: Vec2, size: f32, glyph: Glyph, opacity: f32) -> Self {
        Self {
            position,
            size,
            glyph,
            opacity,
            drift: Vec2::ZERO,
            velocity: Vec2::ZERO,
            origin: position,
        }
    }

    /// Set the drift velocity
    pub fn with_drift(mut self, drift: Vec2) -> Self {
        self.drift = drift;
        self
    }

    /// Spawn an ambient particle uniformly inside `bounds`
    pub fn ambient<R: Rng + ?Sized>(rng: &mut R, params: &FieldParams, bounds: Vec2) -> Self {
        let size = random_size(rng, params);
        let position = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let drift_factor = rng.gen::<f32>() * DRIFT_FACTOR_SPAN + DRIFT_FACTOR_MIN;
        let glyph = Glyph::random(rng);
        let opacity = random_opacity(rng, params);
        let drift = Vec2::new(
            (rng.gen::<f32>() - 0.5) * params.speed * drift_factor,
            (rng.gen::<f32>() - 0.5) * params.speed * drift_factor,
        );

        Self::new(position, size, glyph, opacity).with_drift(drift)
    }

    /// Spawn a burst particle at `at`, launched in a random direction
    ///
    /// The origin is pinned to `at`, so the particle springs back to where it
    /// was created.
    pub fn burst<R: Rng + ?Sized>(rng: &mut R, params: &FieldParams, at: Vec2) -> Self {
        let size = random_size(rng, params);
        let angle = rng.gen::<f32>() * std::f32::consts::TAU;
        let speed = rng.gen::<f32>() * BURST_SPEED_SPAN + BURST_SPEED_MIN;
        let glyph = Glyph::random(rng);
        let opacity = random_opacity(rng, params);

        Self::new(at, size, glyph, opacity).with_drift(Vec2::from_angle(angle) * speed)
    }

    /// Advance one frame: move, pull toward origin, damp transient velocity
    pub fn integrate(&mut self, return_speed: f32) {
        self.position += self.drift + self.velocity;
        self.position += (self.origin - self.position) * return_speed;
        self.velocity *= VELOCITY_DAMPING;
    }

    /// Keep the particle inside `[0, bounds]`
    ///
    /// A coordinate past an edge is clamped to it and the matching drift
    /// component is inverted. Transient velocity is left alone.
    pub fn reflect(&mut self, bounds: Vec2) {
        if self.position.x < 0.0 {
            self.position.x = 0.0;
            self.drift.x = -self.drift.x;
        } else if self.position.x > bounds.x {
            self.position.x = bounds.x;
            self.drift.x = -self.drift.x;
        }

        if self.position.y < 0.0 {
            self.position.y = 0.0;
            self.drift.y = -self.drift.y;
        } else if self.position.y > bounds.y {
            self.position.y = bounds.y;
            self.drift.y = -self.drift.y;
        }
    }

    /// Add an impulse to the transient velocity
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse;
    }
}

fn random_size<R: Rng + ?Sized>(rng: &mut R, params: &FieldParams) -> f32 {
    rng.gen::<f32>() * (params.max_size - params.min_size) + params.min_size
}

fn random_opacity<R: Rng + ?Sized>(rng: &mut R, params: &FieldParams) -> f32 {
    match params.opacity {
        Some(fixed) => fixed,
        None => rng.gen::<f32>() * OPACITY_SPAN + OPACITY_MIN,
    }
}
