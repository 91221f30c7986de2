use super::constants::{
  CELL_SIZE, MAX_PARTICLES, PARTICLE_FADE_BASE, PARTICLE_LIFETIME_SPREAD, PARTICLE_MIN_LIFETIME,
};
use super::types::Cell;
use crate::render::palette::{scale_color, Color};
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, Default)]
pub struct Particle {
  pub x: f32,
  pub y: f32,
  pub vx: f32,
  pub vy: f32,
  pub lifetime: i32,
  pub color: Color,
  pub active: bool,
}

/// Fixed pool of short-lived point sprites. Slots are reused once inactive;
/// when the pool is full further spawns are silently dropped.
#[derive(Debug, Clone)]
pub struct ParticlePool {
  slots: [Particle; MAX_PARTICLES],
}

impl ParticlePool {
  pub fn new() -> Self {
    ParticlePool {
      slots: [Particle::default(); MAX_PARTICLES],
    }
  }

  pub fn clear(&mut self) {
    for slot in self.slots.iter_mut() {
      slot.active = false;
    }
  }

  /// Spawn an outward burst at the pixel centre of a cell. Each activated
  /// slot flips a coin on whether to stop, which bounds how many particles a
  /// single event produces.
  pub fn spawn_burst(&mut self, cell: Cell, color: Color, rng: &mut StdRng) {
    let px = (cell.x * CELL_SIZE) as f32 + CELL_SIZE as f32 / 2.0;
    let py = (cell.y * CELL_SIZE) as f32 + CELL_SIZE as f32 / 2.0;
    for slot in self.slots.iter_mut() {
      if slot.active {
        continue;
      }
      let angle = rng.gen::<f32>() * 2.0 * PI;
      let speed = 0.5 + rng.gen::<f32>() * 1.5;
      *slot = Particle {
        x: px,
        y: py,
        vx: angle.cos() * speed,
        vy: angle.sin() * speed,
        lifetime: PARTICLE_MIN_LIFETIME + rng.gen_range(0..PARTICLE_LIFETIME_SPREAD),
        color,
        active: true,
      };
      if rng.gen_bool(0.5) {
        break;
      }
    }
  }

  /// Integrate positions, expire dead slots and fade the survivors toward
  /// black in proportion to remaining lifetime.
  pub fn update(&mut self) {
    for particle in self.slots.iter_mut() {
      if !particle.active {
        continue;
      }
      particle.x += particle.vx;
      particle.y += particle.vy;
      particle.lifetime -= 1;
      if particle.lifetime <= 0 {
        particle.active = false;
        continue;
      }
      let t = particle.lifetime as f32 / PARTICLE_FADE_BASE;
      particle.color = scale_color(particle.color, t);
    }
  }

  pub fn active(&self) -> impl Iterator<Item = &Particle> {
    self.slots.iter().filter(|particle| particle.active)
  }
}
