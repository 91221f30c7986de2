pub mod framebuffer;
pub mod hud;
pub mod palette;
pub mod sprites;
pub mod text;

use crate::game::constants::{EFFECT_BLINK_FRAMES, FB_HEIGHT};
use crate::game::types::GameState;
use crate::game::world::World;
use framebuffer::Framebuffer;
use palette::{lerp_color, Color, BG_COLOR_BOTTOM, BG_COLOR_TOP, PHASE_COLOR, SNAKE_BODY_COLOR, SNAKE_HEAD_COLOR, SPEED_COLOR};

/// Paint one frame of the current state, back to front: background wash,
/// particles, snake, food, item, obstacles, HUD, then the state overlay.
/// Pure function of the world; rendering never mutates simulation state and
/// never fails.
pub fn draw_frame(frame: &mut Framebuffer, world: &World) {
  draw_background(frame);

  for particle in world.particles.active() {
    frame.put(particle.x as i32, particle.y as i32, particle.color);
  }

  draw_snake(frame, world);
  sprites::draw_food(frame, world.food);
  if let Some(item) = world.item {
    sprites::draw_item(frame, item);
  }
  for cell in world.obstacles.blocked_cells() {
    sprites::draw_obstacle_block(frame, cell);
  }

  hud::draw_scoreboard(frame, world);

  match world.state {
    GameState::GameOver => hud::draw_game_over_overlay(frame),
    GameState::Paused => hud::draw_pause_overlay(frame),
    GameState::Title => hud::draw_title_overlay(frame),
    GameState::Playing => {}
  }
}

fn draw_background(frame: &mut Framebuffer) {
  for y in 0..FB_HEIGHT {
    let t = y as f32 / FB_HEIGHT as f32;
    frame.fill_row(y, lerp_color(BG_COLOR_TOP, BG_COLOR_BOTTOM, t));
  }
}

// The snake tints toward the active effect color; during the final second of
// an expiring effect it blinks back to the default colors on a six-frame
// cadence.
fn draw_snake(frame: &mut Framebuffer, world: &World) {
  let phasing = world.phase_timer > 0;
  let speeding = world.speed_timer > 0;
  let mut head_color: Color = SNAKE_HEAD_COLOR;
  let mut body_color: Color = SNAKE_BODY_COLOR;
  let mut blink = false;
  if phasing {
    head_color = PHASE_COLOR;
    body_color = PHASE_COLOR;
    blink = world.phase_timer <= EFFECT_BLINK_FRAMES && (world.frame_count / 6) % 2 == 0;
  } else if speeding {
    head_color = SPEED_COLOR;
    body_color = SPEED_COLOR;
    blink = world.speed_timer <= EFFECT_BLINK_FRAMES && (world.frame_count / 6) % 2 == 0;
  }
  if blink {
    head_color = SNAKE_HEAD_COLOR;
    body_color = SNAKE_BODY_COLOR;
  }

  let len = world.snake.len();
  for (i, &cell) in world.snake.cells().iter().enumerate() {
    if i == 0 {
      sprites::draw_snake_head(frame, cell, world.direction, head_color, phasing);
    } else {
      let t = if len > 1 { i as f32 / (len - 1) as f32 } else { 0.0 };
      sprites::draw_snake_body(frame, cell, body_color, t, phasing);
    }
  }
}
