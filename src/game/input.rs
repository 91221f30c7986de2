use super::types::{Direction, GameState};
use super::world::World;
use tracing::debug;

/// Raw button levels for one frame, as reported by the host. The core does
/// its own edge detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonInput {
  pub up: bool,
  pub down: bool,
  pub left: bool,
  pub right: bool,
  pub start: bool,
  pub select: bool,
}

/// Remembers last frame's start/select levels so the state transitions fire
/// once per press, not once per frame held.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputTracker {
  prev_start: bool,
  prev_select: bool,
}

impl InputTracker {
  pub fn new() -> Self {
    InputTracker::default()
  }

  pub fn apply(&mut self, world: &mut World, buttons: ButtonInput) {
    let start_edge = buttons.start && !self.prev_start;
    self.prev_start = buttons.start;
    if start_edge {
      match world.state {
        GameState::Title => {
          world.state = GameState::Playing;
          world.reset();
          debug!("game started");
        }
        GameState::Playing => {
          world.state = GameState::Paused;
          debug!("paused");
        }
        GameState::Paused => {
          world.state = GameState::Playing;
          debug!("resumed");
        }
        GameState::GameOver => {
          world.state = GameState::Playing;
          world.reset();
          debug!("game restarted");
        }
      }
    }

    let select_edge = buttons.select && !self.prev_select;
    self.prev_select = buttons.select;
    if select_edge && world.state == GameState::Title {
      world.high_score = 0;
      debug!("high score cleared");
    }

    // Turning only buffers the pending direction, never the live one, and a
    // requested direction is rejected when it reverses either the current or
    // the already-buffered direction.
    if world.state == GameState::Playing {
      let current = world.direction;
      let pending = world.pending_direction;
      if buttons.up && current != Direction::Down && pending != Direction::Down {
        world.pending_direction = Direction::Up;
      } else if buttons.down && current != Direction::Up && pending != Direction::Up {
        world.pending_direction = Direction::Down;
      } else if buttons.left && current != Direction::Right && pending != Direction::Right {
        world.pending_direction = Direction::Left;
      } else if buttons.right && current != Direction::Left && pending != Direction::Left {
        world.pending_direction = Direction::Right;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pressed(start: bool, select: bool) -> ButtonInput {
    ButtonInput {
      start,
      select,
      ..ButtonInput::default()
    }
  }

  #[test]
  fn start_edge_walks_the_state_machine() {
    let mut world = World::with_seed(1);
    let mut tracker = InputTracker::new();
    assert_eq!(world.state, GameState::Title);

    tracker.apply(&mut world, pressed(true, false));
    assert_eq!(world.state, GameState::Playing);

    tracker.apply(&mut world, pressed(false, false));
    tracker.apply(&mut world, pressed(true, false));
    assert_eq!(world.state, GameState::Paused);

    tracker.apply(&mut world, pressed(false, false));
    tracker.apply(&mut world, pressed(true, false));
    assert_eq!(world.state, GameState::Playing);
  }

  #[test]
  fn held_start_fires_only_once() {
    let mut world = World::with_seed(2);
    let mut tracker = InputTracker::new();

    tracker.apply(&mut world, pressed(true, false));
    assert_eq!(world.state, GameState::Playing);
    for _ in 0..10 {
      tracker.apply(&mut world, pressed(true, false));
    }
    assert_eq!(world.state, GameState::Playing);
  }

  #[test]
  fn start_after_game_over_resets_the_run() {
    let mut world = World::with_seed(3);
    let mut tracker = InputTracker::new();
    world.state = GameState::GameOver;
    world.score = 50;
    world.high_score = 50;

    tracker.apply(&mut world, pressed(true, false));

    assert_eq!(world.state, GameState::Playing);
    assert_eq!(world.score, 0);
    assert_eq!(world.high_score, 50);
    assert_eq!(world.snake.len(), 3);
  }

  #[test]
  fn select_clears_high_score_only_on_title() {
    let mut world = World::with_seed(4);
    let mut tracker = InputTracker::new();
    world.high_score = 120;

    tracker.apply(&mut world, pressed(false, true));
    assert_eq!(world.high_score, 0);

    world.high_score = 120;
    world.state = GameState::Playing;
    tracker.apply(&mut world, pressed(false, false));
    tracker.apply(&mut world, pressed(false, true));
    assert_eq!(world.high_score, 120);
  }

  #[test]
  fn reverse_direction_is_rejected() {
    let mut world = World::with_seed(5);
    let mut tracker = InputTracker::new();
    world.state = GameState::Playing;
    assert_eq!(world.direction, Direction::Right);

    tracker.apply(
      &mut world,
      ButtonInput {
        left: true,
        ..ButtonInput::default()
      },
    );

    assert_eq!(world.pending_direction, Direction::Right);
  }

  #[test]
  fn reversing_the_buffered_direction_is_rejected() {
    let mut world = World::with_seed(6);
    let mut tracker = InputTracker::new();
    world.state = GameState::Playing;

    // Moving right, buffer a turn up; a down press must not sneak a reversal
    // in behind it.
    tracker.apply(
      &mut world,
      ButtonInput {
        up: true,
        ..ButtonInput::default()
      },
    );
    assert_eq!(world.pending_direction, Direction::Up);

    tracker.apply(
      &mut world,
      ButtonInput {
        down: true,
        ..ButtonInput::default()
      },
    );
    assert_eq!(world.pending_direction, Direction::Up);
  }

  #[test]
  fn directions_are_ignored_outside_play() {
    let mut world = World::with_seed(7);
    let mut tracker = InputTracker::new();
    assert_eq!(world.state, GameState::Title);

    tracker.apply(
      &mut world,
      ButtonInput {
        up: true,
        ..ButtonInput::default()
      },
    );

    assert_eq!(world.pending_direction, Direction::Right);
  }
}
