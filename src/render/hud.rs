use super::framebuffer::Framebuffer;
use super::palette::{GAME_OVER_COLOR, HUD_TEXT_COLOR, PHASE_COLOR, SPEED_COLOR};
use super::text::{draw_digit, draw_text, GLYPH_ADVANCE};
use crate::game::constants::{FB_HEIGHT, FB_WIDTH};
use crate::game::world::World;

const DIGIT_PITCH: i32 = 24;
const SCORE_DIGITS: i32 = 5;

pub fn draw_scoreboard(frame: &mut Framebuffer, world: &World) {
  draw_text(frame, 8, 16, "SCORE", HUD_TEXT_COLOR);
  let mut score = world.score;
  for i in 0..SCORE_DIGITS {
    let digit = (score % 10) as i32;
    score /= 10;
    let x = 8 + (SCORE_DIGITS - 1 - i) * DIGIT_PITCH;
    draw_digit(frame, x, 32, digit, HUD_TEXT_COLOR);
  }

  let hi_label_x = FB_WIDTH - 8 - 2 * GLYPH_ADVANCE - SCORE_DIGITS * DIGIT_PITCH - 4;
  draw_text(frame, hi_label_x, 16, "HI", HUD_TEXT_COLOR);
  let mut high = world.high_score;
  for i in 0..SCORE_DIGITS {
    let digit = (high % 10) as i32;
    high /= 10;
    let x = FB_WIDTH - 8 - (i + 1) * DIGIT_PITCH;
    draw_digit(frame, x, 32, digit, HUD_TEXT_COLOR);
  }

  draw_effect_icons(frame, world);
}

// Mini icons for active effects, centred above the play field.
fn draw_effect_icons(frame: &mut Framebuffer, world: &World) {
  let icon_y = 8;
  let mut icon_x = FB_WIDTH / 2 - 32;
  if world.phase_timer > 0 {
    for y in 0..12i32 {
      for x in 0..12i32 {
        let dx = (x - 6).abs();
        let dy = (y - 6).abs();
        if dx + dy < 6 {
          frame.put(icon_x + x, icon_y + y, PHASE_COLOR);
        }
      }
    }
    icon_x += 16;
  }
  if world.speed_timer > 0 {
    for y in 0..12 {
      for x in 0..12 {
        let fill = (y < 4 && x > 6) || ((4..8).contains(&y) && x < 6) || (y >= 8 && x > 6);
        if fill {
          frame.put(icon_x + x, icon_y + y, SPEED_COLOR);
        }
      }
    }
  }
}

fn centered_x(text: &str) -> i32 {
  (FB_WIDTH - text.len() as i32 * GLYPH_ADVANCE) / 2
}

pub fn draw_game_over_overlay(frame: &mut Framebuffer) {
  frame.darken(0.4);
  let msg = "GAME OVER";
  let mut y = FB_HEIGHT / 2 - 20;
  draw_text(frame, centered_x(msg), y, msg, GAME_OVER_COLOR);
  let prompt = "PRESS START";
  y += 20;
  draw_text(frame, centered_x(prompt), y, prompt, HUD_TEXT_COLOR);
}

pub fn draw_pause_overlay(frame: &mut Framebuffer) {
  frame.darken(0.4);
  let msg = "PAUSED";
  draw_text(frame, centered_x(msg), FB_HEIGHT / 2 - 4, msg, HUD_TEXT_COLOR);
}

pub fn draw_title_overlay(frame: &mut Framebuffer) {
  let title = "SNAKE";
  let mut y = FB_HEIGHT / 2 - 32;
  draw_text(frame, centered_x(title), y, title, HUD_TEXT_COLOR);
  let prompt = "PRESS START";
  y += 24;
  draw_text(frame, centered_x(prompt), y, prompt, HUD_TEXT_COLOR);
  let hint = "ARROWS TO MOVE";
  y += 16;
  draw_text(frame, centered_x(hint), y, hint, HUD_TEXT_COLOR);
}
