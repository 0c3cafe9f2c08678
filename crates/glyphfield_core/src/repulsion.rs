//! Pointer repulsion
//!
//! A repulsion is a timed task: it starts when the pointer moves, pushes
//! nearby particles every frame with a strength that fades linearly to zero,
//! and ends once its duration has elapsed. Only one repulsion is active at a
//! time; a newer pointer event replaces it.

use std::time::{Duration, Instant};

use glyphfield_math::Vec2;

use crate::scheduler::FrameKey;

/// Extra gain applied on top of the configured strength
pub const IMPULSE_GAIN: f32 = 1.5;

/// An active repulsion and the handle of its pending frame callback
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repulsion {
    pub origin: Vec2,
    pub started: Instant,
    /// Pending `FrameTask::Repulse` callback, cancelled on re-arm or teardown
    pub key: FrameKey,
}

impl Repulsion {
    pub fn new(origin: Vec2, started: Instant, key: FrameKey) -> Self {
        Self { origin, started, key }
    }

    /// Remaining fraction of the effect at `now`
    ///
    /// Returns `Some(remaining / duration)` in (0, 1] while active and `None`
    /// once `duration` has elapsed.
    pub fn time_factor(&self, now: Instant, duration: Duration) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= duration {
            return None;
        }
        Some((duration - elapsed).as_secs_f32() / duration.as_secs_f32())
    }
}

/// Impulse pushed onto a particle at `position` by a repulsion at `origin`
///
/// Particles exactly on the origin or farther than `radius` are unaffected.
/// Inside the radius the magnitude is
/// `(radius / r)^2 * time_factor * strength * IMPULSE_GAIN`, directed away
/// from the origin.
pub fn repulsion_impulse(
    position: Vec2,
    origin: Vec2,
    radius: f32,
    strength: f32,
    time_factor: f32,
) -> Option<Vec2> {
    let offset = position - origin;
    let distance = offset.length();
    if distance <= 0.0 || distance > radius {
        return None;
    }

    let force = (radius / distance).powi(2) * time_factor * strength;
    Some(offset * (force / distance * IMPULSE_GAIN))
}
