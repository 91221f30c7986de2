use super::constants::{
  BASE_MOVE_INTERVAL, GRID_H, GRID_W, MAX_SNAKE_LENGTH, PHASE_DURATION, POWERUP_PROBABILITY,
  SCORE_PER_FOOD, SPEED_DURATION,
};
use super::obstacles::ObstacleGrid;
use super::particles::ParticlePool;
use super::snake::Snake;
use super::types::{Cell, Direction, GameState, Item, ItemKind};
use crate::render::palette::{FOOD_COLOR, PHASE_COLOR, SPEED_COLOR};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// The complete mutable simulation state, owned exclusively and threaded
/// through tick, render and serialize. There are no ambient globals.
#[derive(Debug)]
pub struct World {
  pub snake: Snake,
  pub direction: Direction,
  pub pending_direction: Direction,
  pub food: Cell,
  pub item: Option<Item>,
  pub phase_timer: i32,
  pub speed_timer: i32,
  pub score: u32,
  pub high_score: u32,
  pub state: GameState,
  pub move_counter: i32,
  pub frame_count: u64,
  pub obstacles: ObstacleGrid,
  pub particles: ParticlePool,
  rng: StdRng,
}

impl World {
  pub fn new() -> Self {
    Self::from_rng(StdRng::from_entropy())
  }

  pub fn with_seed(seed: u64) -> Self {
    Self::from_rng(StdRng::seed_from_u64(seed))
  }

  fn from_rng(rng: StdRng) -> Self {
    let mut world = World {
      snake: Snake::spawn_centered(),
      direction: Direction::Right,
      pending_direction: Direction::Right,
      food: Cell { x: 0, y: 0 },
      item: None,
      phase_timer: 0,
      speed_timer: 0,
      score: 0,
      high_score: 0,
      state: GameState::Title,
      move_counter: BASE_MOVE_INTERVAL,
      frame_count: 0,
      obstacles: ObstacleGrid::empty(),
      particles: ParticlePool::new(),
      rng,
    };
    world.reset();
    world
  }

  /// Re-initialize everything except the high score and the top-level state.
  /// Runs on first load, explicit reset, and the Title/GameOver -> Playing
  /// transitions.
  pub fn reset(&mut self) {
    self.snake = Snake::spawn_centered();
    self.direction = Direction::Right;
    self.pending_direction = Direction::Right;
    self.score = 0;
    self.phase_timer = 0;
    self.speed_timer = 0;
    self.item = None;
    self.move_counter = BASE_MOVE_INTERVAL;
    self.frame_count = 0;
    self.particles.clear();
    self.obstacles = ObstacleGrid::empty();
    self.food = self.random_free_cell();
    self.obstacles = ObstacleGrid::generate(&mut self.rng, self.snake.head(), self.food, self.item);
    debug!("world reset");
  }

  /// Advance one host frame. Effect timers, the movement countdown and the
  /// particle pool only run while playing; the frame counter always advances
  /// because the renderer's blink cadence is keyed to it.
  pub fn advance_frame(&mut self) {
    if self.state == GameState::Playing {
      if self.phase_timer > 0 {
        self.phase_timer -= 1;
      }
      if self.speed_timer > 0 {
        self.speed_timer -= 1;
      }
      let interval = if self.speed_timer > 0 {
        BASE_MOVE_INTERVAL / 2
      } else {
        BASE_MOVE_INTERVAL
      };
      self.move_counter -= 1;
      if self.move_counter <= 0 {
        self.tick();
        self.move_counter = interval;
      }
      self.particles.update();
    }
    self.frame_count += 1;
  }

  /// One simulation step: apply the buffered direction, resolve collisions,
  /// commit the move, then handle food and item contact.
  pub fn tick(&mut self) {
    self.direction = self.pending_direction;
    let (dx, dy) = self.direction.offset();
    let head = self.snake.head();
    let mut candidate = Cell {
      x: head.x + dx,
      y: head.y + dy,
    };

    let phasing = self.phase_timer > 0;
    if phasing {
      candidate = wrap_candidate(candidate);
    } else if !in_bounds(candidate) {
      self.game_over("wall");
      return;
    }

    if !phasing && self.snake.contains(candidate) {
      self.game_over("self");
      return;
    }

    if self.obstacles.is_blocked(candidate) {
      self.game_over("obstacle");
      return;
    }

    let ate = candidate == self.food;
    let grow = ate && self.snake.len() < MAX_SNAKE_LENGTH;
    self.snake.advance(candidate, grow);

    if ate {
      self.score += SCORE_PER_FOOD;
      if self.score > self.high_score {
        self.high_score = self.score;
      }
      self.particles.spawn_burst(self.food, FOOD_COLOR, &mut self.rng);
      self.food = self.random_free_cell();
      self.try_spawn_item();
    }

    if let Some(item) = self.item {
      if candidate == item.cell {
        match item.kind {
          ItemKind::Phase => self.phase_timer = PHASE_DURATION,
          ItemKind::Speed => self.speed_timer = SPEED_DURATION,
        }
        let color = match item.kind {
          ItemKind::Phase => PHASE_COLOR,
          ItemKind::Speed => SPEED_COLOR,
        };
        self.particles.spawn_burst(item.cell, color, &mut self.rng);
        self.item = None;
        debug!(kind = ?item.kind, "power-up collected");
      }
    }
  }

  fn game_over(&mut self, cause: &'static str) {
    self.state = GameState::GameOver;
    info!(cause, score = self.score, high_score = self.high_score, "game over");
  }

  /// Uniformly resample until a cell free of snake, obstacles and the active
  /// item comes up. Unbounded by design; the grid is never close to full.
  pub(crate) fn random_free_cell(&mut self) -> Cell {
    loop {
      let cell = Cell {
        x: self.rng.gen_range(0..GRID_W),
        y: self.rng.gen_range(0..GRID_H),
      };
      if self.snake.contains(cell) {
        continue;
      }
      if self.obstacles.is_blocked(cell) {
        continue;
      }
      if self.item.map_or(false, |item| item.cell == cell) {
        continue;
      }
      return cell;
    }
  }

  // At most one item exists at a time; the probability gate is rolled every
  // time food is eaten while no item is active.
  fn try_spawn_item(&mut self) {
    if self.item.is_some() {
      return;
    }
    if !self.rng.gen_bool(POWERUP_PROBABILITY) {
      return;
    }
    let kind = if self.rng.gen_bool(0.5) {
      ItemKind::Phase
    } else {
      ItemKind::Speed
    };
    let cell = self.random_free_cell();
    self.item = Some(Item { kind, cell });
    debug!(?kind, x = cell.x, y = cell.y, "power-up spawned");
  }
}

fn in_bounds(cell: Cell) -> bool {
  cell.x >= 0 && cell.x < GRID_W && cell.y >= 0 && cell.y < GRID_H
}

fn wrap_candidate(mut cell: Cell) -> Cell {
  if cell.x < 0 {
    cell.x = GRID_W - 1;
  }
  if cell.x >= GRID_W {
    cell.x = 0;
  }
  if cell.y < 0 {
    cell.y = GRID_H - 1;
  }
  if cell.y >= GRID_H {
    cell.y = 0;
  }
  cell
}
