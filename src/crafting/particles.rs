//! Disintegration particles
//!
//! Every pixel of a consumed ingredient's icon becomes a particle that bursts
//! outward and is then pulled toward the convergence point with a force that
//! grows quadratically with the elapsed transition time.

use std::f32::consts::TAU;
use macroquad::prelude::{draw_rectangle, vec2, Color, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ParticleConfig;
use crate::game::IconBitmap;

/// Width of the band the shimmering size is folded into
const SHIMMER_BAND: f32 = 3.0;

/// Reference frame rate for time-scaled decay
const DECAY_REFERENCE_FPS: f32 = 60.0;

/// A single colored pixel in flight
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Color,
    /// Size rolled at spawn
    pub base_size: f32,
    /// Size after the latest shimmer step
    pub size: f32,
}

/// Owns every live particle and advances them once per frame
pub struct ParticleField {
    particles: Vec<Particle>,
    config: ParticleConfig,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Spawn one particle per bitmap pixel, laid out from `origin` with `pixel_scale`
    /// screen units between neighbouring pixels. Returns the number spawned.
    ///
    /// Transparent pixels are not skipped.
    pub fn spawn_from_bitmap(&mut self, bitmap: Option<&IconBitmap>, origin: Vec2, pixel_scale: f32) -> usize {
        let Some(bitmap) = bitmap else {
            return 0;
        };

        self.particles.reserve(bitmap.len());
        for (x, y, color) in bitmap.pixels() {
            let angle = self.rng.gen_range(0.0..TAU);
            let speed = self.rng.gen_range(self.config.speed_min..self.config.speed_max);
            let size = self.rng.gen_range(self.config.size_min..self.config.size_max);

            self.particles.push(Particle {
                position: origin + vec2(x as f32, y as f32) * pixel_scale,
                velocity: Vec2::from_angle(angle) * speed,
                color,
                base_size: size,
                size,
            });
        }

        bitmap.len()
    }

    /// Advance every particle by `dt` seconds. `elapsed` is the time since the
    /// transition started and drives both the shimmer and the pull strength.
    /// Returns the number of particles that arrived this frame.
    pub fn update(&mut self, dt: f32, elapsed: f32, target: Vec2) -> usize {
        let elapsed = elapsed.max(0.0);
        let pull = elapsed * elapsed;
        let shimmer = (elapsed * self.config.shimmer_rate).sin();
        let decay = if self.config.time_scaled_decay {
            self.config.decay_per_frame.powf(dt * DECAY_REFERENCE_FPS)
        } else {
            self.config.decay_per_frame
        };
        let radius = self.config.termination_radius;

        let before = self.particles.len();
        self.particles.retain_mut(|p| {
            p.size = (p.base_size + shimmer - SHIMMER_BAND) % SHIMMER_BAND + SHIMMER_BAND;
            p.position += p.velocity * dt;

            let to_target = target - p.position;
            let dist = to_target.length();
            // dist of zero yields a NaN direction; the particle is dropped below either way
            p.velocity = p.velocity * decay + to_target / dist * pull;

            !(dist < radius || dist.is_nan())
        });

        before - self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Drop every particle without letting it arrive
    pub fn clear(&mut self) -> usize {
        let dropped = self.particles.len();
        self.particles.clear();
        dropped
    }

    pub fn draw(&self) {
        for p in &self.particles {
            draw_rectangle(p.position.x, p.position.y, p.size, p.size, p.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::{BLUE, GREEN, RED, WHITE};
    use crate::game::{IconSampler, ItemKind, ProceduralIcons, ICON_SIZE};

    const DT: f32 = 1.0 / 60.0;

    fn field() -> ParticleField {
        ParticleField::new(ParticleConfig::default(), 7)
    }

    fn still_particle(position: Vec2) -> Particle {
        Particle {
            position,
            velocity: Vec2::ZERO,
            color: WHITE,
            base_size: 4.0,
            size: 4.0,
        }
    }

    #[test]
    fn test_spawn_one_particle_per_pixel() {
        let mut field = field();
        let bitmap = ProceduralIcons.sample_icon(ItemKind(768)).unwrap();
        let spawned = field.spawn_from_bitmap(Some(&bitmap), vec2(100.0, 100.0), 4.0);
        assert_eq!(spawned, ICON_SIZE * ICON_SIZE);
        assert_eq!(field.len(), ICON_SIZE * ICON_SIZE);

        // Non-square bitmap
        let bitmap = IconBitmap::filled(3, 5, RED);
        assert_eq!(field.spawn_from_bitmap(Some(&bitmap), Vec2::ZERO, 4.0), 15);
        assert_eq!(field.len(), ICON_SIZE * ICON_SIZE + 15);
    }

    #[test]
    fn test_spawn_without_bitmap_is_noop() {
        let mut field = field();
        assert_eq!(field.spawn_from_bitmap(None, vec2(10.0, 10.0), 4.0), 0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_spawn_keeps_transparent_pixels() {
        let mut field = field();
        let bitmap = IconBitmap::filled(2, 2, Color::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(field.spawn_from_bitmap(Some(&bitmap), Vec2::ZERO, 1.0), 4);
    }

    #[test]
    fn test_spawn_layout_and_ranges() {
        let mut field = field();
        let bitmap = IconBitmap::filled(16, 16, BLUE);
        let origin = vec2(50.0, 80.0);
        field.spawn_from_bitmap(Some(&bitmap), origin, 4.0);

        let config = ParticleConfig::default();
        for (i, p) in field.particles().iter().enumerate() {
            let expected = origin + vec2((i % 16) as f32, (i / 16) as f32) * 4.0;
            assert_eq!(p.position, expected);
            assert_eq!(p.color, BLUE);

            let speed = p.velocity.length();
            assert!(speed >= config.speed_min - 1e-3 && speed < config.speed_max + 1e-3);
            assert!(p.base_size >= config.size_min && p.base_size < config.size_max);
        }
    }

    #[test]
    fn test_same_seed_same_particles() {
        let bitmap = IconBitmap::filled(4, 4, GREEN);
        let mut a = ParticleField::new(ParticleConfig::default(), 42);
        let mut b = ParticleField::new(ParticleConfig::default(), 42);
        a.spawn_from_bitmap(Some(&bitmap), Vec2::ZERO, 4.0);
        b.spawn_from_bitmap(Some(&bitmap), Vec2::ZERO, 4.0);
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.velocity, pb.velocity);
            assert_eq!(pa.base_size, pb.base_size);
        }
    }

    #[test]
    fn test_all_particles_converge() {
        let mut field = field();
        let target = vec2(400.0, 265.0);
        let icons = ProceduralIcons;

        // Six batches on a ring around the target
        for i in 0..6 {
            let angle = TAU / 6.0 * i as f32;
            let slot = target + Vec2::from_angle(angle) * 200.0 - vec2(32.0, 32.0);
            let bitmap = icons.sample_icon(ItemKind(760 + i)).unwrap();
            field.spawn_from_bitmap(Some(&bitmap), slot + vec2(16.0, 16.0), 4.0);
        }
        assert_eq!(field.len(), 6 * 256);

        let mut elapsed = 0.0;
        let mut frames = 0;
        while !field.is_empty() && frames < 1200 {
            elapsed += DT;
            field.update(DT, elapsed, target);
            frames += 1;
        }
        assert!(field.is_empty(), "{} particles never arrived", field.len());
    }

    #[test]
    fn test_particle_on_target_is_removed() {
        // Degenerate geometry: zero distance to the target gives a NaN direction
        let mut field = field();
        let target = vec2(10.0, 10.0);
        field.particles.push(still_particle(target));
        let removed = field.update(DT, 0.5, target);
        assert_eq!(removed, 1);
        assert!(field.is_empty());
    }

    #[test]
    fn test_nan_position_is_removed() {
        let mut field = field();
        field.particles.push(still_particle(vec2(f32::NAN, 0.0)));
        field.update(DT, 0.5, vec2(10.0, 10.0));
        assert!(field.is_empty());
    }

    #[test]
    fn test_particle_outside_radius_survives() {
        let mut field = field();
        field.particles.push(still_particle(vec2(100.0, 0.0)));
        field.update(DT, 0.0, Vec2::ZERO);
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_shimmer_stays_in_band() {
        let mut field = field();
        let bitmap = IconBitmap::filled(8, 8, WHITE);
        field.spawn_from_bitmap(Some(&bitmap), vec2(1000.0, 1000.0), 4.0);

        let mut elapsed = 0.0;
        for _ in 0..60 {
            elapsed += DT;
            field.update(DT, elapsed, Vec2::ZERO);
            for p in field.particles() {
                assert!(p.size > 2.0 - 1e-4 && p.size < 6.0 + 1e-4, "size {}", p.size);
            }
        }
    }

    #[test]
    fn test_decay_is_per_frame_by_default() {
        let mut field = field();
        let mut p = still_particle(vec2(1000.0, 0.0));
        p.velocity = vec2(0.0, 100.0);
        field.particles.push(p);

        // No pull at elapsed = 0, so only decay acts. A long frame decays the same as a short one.
        field.update(0.5, 0.0, Vec2::ZERO);
        assert!((field.particles()[0].velocity.y - 99.0).abs() < 1e-3);
    }

    #[test]
    fn test_time_scaled_decay() {
        let config = ParticleConfig {
            time_scaled_decay: true,
            ..ParticleConfig::default()
        };
        let mut field = ParticleField::new(config, 1);
        let mut p = still_particle(vec2(1000.0, 0.0));
        p.velocity = vec2(0.0, 100.0);
        field.particles.push(p);

        // Two reference frames worth of time
        field.update(2.0 / 60.0, 0.0, Vec2::ZERO);
        assert!((field.particles()[0].velocity.y - 100.0 * 0.99 * 0.99).abs() < 1e-2);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut field = field();
        field.spawn_from_bitmap(Some(&IconBitmap::filled(2, 3, WHITE)), Vec2::ZERO, 4.0);
        assert_eq!(field.clear(), 6);
        assert!(field.is_empty());
    }
}
