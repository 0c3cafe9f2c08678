//! Integration tests for the particle field
//!
//! These tests drive a mounted field frame by frame and check:
//! 1. Particle counts for initial mount, resize and click bursts
//! 2. Pointer repulsion radius, falloff and expiry
//! 3. Convergence back toward origin and the bounds invariant

use std::time::{Duration, Instant};

use glyphfield_core::{
    particle_count_for, Color, DrawSurface, FieldParams, Glyph, Particle, ParticleField, Vec2,
    BURST_SIZE,
};

const FRAME: Duration = Duration::from_millis(16);

/// Surface that only counts what it is asked to draw
#[derive(Default)]
struct CountingSurface {
    frames: usize,
    glyphs: usize,
}

impl DrawSurface for CountingSurface {
    fn clear(&mut self, _background: Color) {
        self.frames += 1;
    }

    fn draw_glyph(&mut self, _glyph: Glyph, _position: Vec2, _size: f32, _color: Color) {
        self.glyphs += 1;
    }
}

/// Mounted field with no ambient particles, for hand-placed particles
fn empty_field(params: FieldParams) -> ParticleField {
    let mut field = ParticleField::with_seed(params.with_density(0.0), 17);
    field.mount(800.0, 600.0);
    assert_eq!(field.particle_count(), 0);
    field
}

/// A motionless particle at `position`
fn resting(position: Vec2) -> Particle {
    Particle::new(position, 12.0, Glyph::One, 1.0)
}

fn step(field: &mut ParticleField, surface: &mut CountingSurface, now: Instant) {
    assert!(field.frame(now, Some(surface)));
}

// ==================== Particle Count Tests ====================

#[test]
fn test_initial_count_matches_density_formula() {
    for (width, height) in [(800.0, 600.0), (1920.0, 1080.0), (333.0, 777.0), (50.0, 50.0)] {
        for density in [1.0f32, 7.5, 30.0, 100.0] {
            let mut field =
                ParticleField::with_seed(FieldParams::default().with_density(density), 1);
            field.mount(width, height);

            let expected =
                ((width as f64 * height as f64) / (40000.0 / density as f64)).floor() as usize;
            assert_eq!(
                field.particle_count(),
                expected,
                "count for {}x{} at density {}",
                width,
                height,
                density
            );
        }
    }
}

#[test]
fn test_resize_regenerates_from_new_dimensions() {
    let params = FieldParams::default().with_density(30.0);
    let mut field = ParticleField::with_seed(params, 2);
    field.mount(800.0, 600.0);

    let click = Vec2::new(400.0, 300.0);
    field.inject(click);

    field.resize(1024.0, 768.0);
    assert_eq!(
        field.particle_count(),
        particle_count_for(Vec2::new(1024.0, 768.0), 30.0)
    );
    assert_eq!(field.size(), Some(Vec2::new(1024.0, 768.0)));
    // Burst particles did not survive the regeneration
    assert!(field.particles().iter().all(|p| p.origin != click));
}

#[test]
fn test_click_adds_burst_pinned_to_click_point() {
    let mut field = ParticleField::with_seed(FieldParams::default(), 3);
    field.mount(640.0, 480.0);
    let before = field.particle_count();

    let click = Vec2::new(120.0, 45.0);
    field.inject(click);

    assert_eq!(field.particle_count(), before + BURST_SIZE);
    assert_eq!(BURST_SIZE, 4);
    for particle in &field.particles()[before..] {
        assert_eq!(particle.origin, click);
        assert_eq!(particle.position, click);
        let speed = particle.drift.length();
        assert!((1.0 - 1e-4..=3.0 + 1e-4).contains(&speed));
    }
}

#[test]
fn test_count_only_grows_between_regenerations() {
    let mut field = ParticleField::with_seed(FieldParams::default(), 4);
    field.mount(640.0, 480.0);
    let mut surface = CountingSurface::default();
    let start = Instant::now();

    let mut last = field.particle_count();
    for i in 0..20u32 {
        if i % 5 == 0 {
            field.inject(Vec2::new(10.0 * i as f32, 20.0));
        }
        field.pointer_moved(Vec2::new(5.0 * i as f32, 100.0), start + FRAME * i);
        step(&mut field, &mut surface, start + FRAME * i);
        assert!(field.particle_count() >= last);
        last = field.particle_count();
    }
    assert_eq!(surface.frames, 20);
}

// ==================== Repulsion Tests ====================

#[test]
fn test_particle_beyond_radius_is_untouched() {
    let mut field = empty_field(FieldParams::default());
    let pointer = Vec2::new(400.0, 300.0);
    field.push_particle(resting(pointer + Vec2::new(151.0, 0.0)));
    field.push_particle(resting(pointer + Vec2::new(0.0, -250.0)));

    let start = Instant::now();
    let mut surface = CountingSurface::default();
    field.pointer_moved(pointer, start);
    for i in 0..10u32 {
        step(&mut field, &mut surface, start + FRAME * i);
    }

    for particle in field.particles() {
        assert_eq!(particle.velocity, Vec2::ZERO);
    }
}

#[test]
fn test_particle_at_pointer_is_untouched() {
    let mut field = empty_field(FieldParams::default());
    let pointer = Vec2::new(400.0, 300.0);
    field.push_particle(resting(pointer));

    let start = Instant::now();
    let mut surface = CountingSurface::default();
    field.pointer_moved(pointer, start);
    step(&mut field, &mut surface, start);

    assert_eq!(field.particles()[0].velocity, Vec2::ZERO);
}

#[test]
fn test_impulse_falls_off_with_distance() {
    let mut field = empty_field(FieldParams::default());
    let pointer = Vec2::new(400.0, 300.0);
    for r in [10.0, 40.0, 90.0, 149.0] {
        field.push_particle(resting(pointer + Vec2::new(r, 0.0)));
    }

    let start = Instant::now();
    let mut surface = CountingSurface::default();
    field.pointer_moved(pointer, start);
    step(&mut field, &mut surface, start);

    let speeds: Vec<f32> = field.particles().iter().map(|p| p.velocity.length()).collect();
    for pair in speeds.windows(2) {
        assert!(pair[0] > pair[1], "speeds not decreasing: {:?}", speeds);
    }
    // Every particle is pushed away from the pointer (+x)
    assert!(field.particles().iter().all(|p| p.velocity.x > 0.0));
}

#[test]
fn test_impulse_fades_over_duration() {
    let pointer = Vec2::new(400.0, 300.0);
    let start = Instant::now();

    let first_impulse = |elapsed: Duration| {
        let mut field = empty_field(FieldParams::default());
        field.push_particle(resting(pointer + Vec2::new(0.0, 50.0)));
        field.pointer_moved(pointer, start);
        let mut surface = CountingSurface::default();
        step(&mut field, &mut surface, start + elapsed);
        field.particles()[0].velocity.length()
    };

    let early = first_impulse(Duration::from_millis(50));
    let middle = first_impulse(Duration::from_millis(300));
    let late = first_impulse(Duration::from_millis(550));
    assert!(early > middle && middle > late && late > 0.0);
}

#[test]
fn test_repulsion_stops_after_duration() {
    let params = FieldParams::default().with_repulsion(150.0, Duration::from_millis(600), 5.0);
    let mut field = empty_field(params);
    let pointer = Vec2::new(400.0, 300.0);
    field.push_particle(resting(pointer + Vec2::new(30.0, 0.0)));

    let start = Instant::now();
    let mut surface = CountingSurface::default();
    field.pointer_moved(pointer, start);
    step(&mut field, &mut surface, start);
    assert!(field.is_repelling());

    // Once the duration has elapsed velocity only decays
    let mut now = start + Duration::from_millis(600);
    for _ in 0..30 {
        let before = field.particles()[0].velocity;
        step(&mut field, &mut surface, now);
        let after = field.particles()[0].velocity;
        assert!((after.x - before.x * 0.9).abs() < 1e-4);
        assert!(!field.is_repelling());
        now += FRAME;
    }
    assert_eq!(field.pending_frames(), 1, "only the animation loop remains");
}

#[test]
fn test_new_pointer_event_supersedes_old() {
    let mut field = empty_field(FieldParams::default());
    let near_old = Vec2::new(100.0, 100.0);
    field.push_particle(resting(near_old + Vec2::new(20.0, 0.0)));

    let start = Instant::now();
    let mut surface = CountingSurface::default();
    field.pointer_moved(near_old, start);
    // Move far away before the first repulsion frame runs
    field.pointer_moved(Vec2::new(700.0, 500.0), start);
    step(&mut field, &mut surface, start);

    assert_eq!(field.particles()[0].velocity, Vec2::ZERO);
    assert_eq!(field.repulsion_origin(), Some(Vec2::new(700.0, 500.0)));
}

// ==================== Dynamics Tests ====================

#[test]
fn test_undisturbed_particles_stay_near_origin() {
    let mut field = ParticleField::with_seed(FieldParams::default(), 5);
    field.mount(640.0, 480.0);
    let mut surface = CountingSurface::default();
    let start = Instant::now();

    for i in 0..300u32 {
        step(&mut field, &mut surface, start + FRAME * i);
    }

    for p in field.particles() {
        assert_eq!(p.velocity, Vec2::ZERO);
        // Steady drift offset of the return pull is 9 * drift per axis
        assert!((p.position.x - p.origin.x).abs() <= 9.0 * p.drift.x.abs() + 1e-3);
        assert!((p.position.y - p.origin.y).abs() <= 9.0 * p.drift.y.abs() + 1e-3);
    }
}

#[test]
fn test_disturbed_particles_settle_back() {
    let mut field = ParticleField::with_seed(FieldParams::default(), 6);
    field.mount(640.0, 480.0);
    let mut surface = CountingSurface::default();
    let start = Instant::now();

    field.pointer_moved(Vec2::new(320.0, 240.0), start);
    field.inject(Vec2::new(100.0, 100.0));
    let mut now = start;
    for _ in 0..600 {
        step(&mut field, &mut surface, now);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x <= 640.0);
            assert!(p.position.y >= 0.0 && p.position.y <= 480.0);
        }
        now += FRAME;
    }

    for p in field.particles() {
        assert!(p.velocity.length() < 1e-6);
        assert!((p.position.x - p.origin.x).abs() <= 9.0 * p.drift.x.abs() + 1e-2);
        assert!((p.position.y - p.origin.y).abs() <= 9.0 * p.drift.y.abs() + 1e-2);
    }
}

#[test]
fn test_every_particle_drawn_each_frame() {
    let mut field = ParticleField::with_seed(FieldParams::default(), 8);
    field.mount(500.0, 500.0);
    let mut surface = CountingSurface::default();
    let start = Instant::now();

    for i in 0..5u32 {
        step(&mut field, &mut surface, start + FRAME * i);
    }
    assert_eq!(surface.frames, 5);
    assert_eq!(surface.glyphs, 5 * field.particle_count());
}
