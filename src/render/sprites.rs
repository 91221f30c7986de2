use super::framebuffer::Framebuffer;
use super::palette::{channels, lerp_color, rgb, scale_color, Color, FOOD_COLOR, PHASE_COLOR, SPEED_COLOR};
use crate::game::constants::CELL_SIZE;
use crate::game::types::{Cell, Direction, Item, ItemKind};

/// Rounded head with a vertical shade, directional eyes and a small mouth
/// arc. The circular mask leaves the cell corners showing the background.
pub fn draw_snake_head(frame: &mut Framebuffer, cell: Cell, dir: Direction, base: Color, phasing: bool) {
  let px = cell.x * CELL_SIZE;
  let py = cell.y * CELL_SIZE;
  let half = CELL_SIZE / 2;
  for y in 0..CELL_SIZE {
    for x in 0..CELL_SIZE {
      let dx = x - half;
      let dy = y - half;
      if dx * dx + dy * dy < half * half {
        let t = 0.7 + 0.3 * (half - dy) as f32 / half as f32;
        let mut color = scale_color(base, t);
        if x < half && y < half && dx * dx + dy * dy < (half - 2) * (half - 2) {
          color = lerp_color(color, rgb(255, 255, 255), 0.15);
        }
        if phasing {
          color = lerp_color(color, PHASE_COLOR, 0.2);
        }
        frame.put(px + x, py + y, color);
      }
    }
  }

  let (ex1, ey1, ex2, ey2) = match dir {
    Direction::Up => (
      px + CELL_SIZE / 3,
      py + CELL_SIZE / 4,
      px + 2 * CELL_SIZE / 3,
      py + CELL_SIZE / 4,
    ),
    Direction::Down => (
      px + CELL_SIZE / 3,
      py + 3 * CELL_SIZE / 4,
      px + 2 * CELL_SIZE / 3,
      py + 3 * CELL_SIZE / 4,
    ),
    Direction::Left => (
      px + CELL_SIZE / 4,
      py + CELL_SIZE / 3,
      px + CELL_SIZE / 4,
      py + 2 * CELL_SIZE / 3,
    ),
    Direction::Right => (
      px + 3 * CELL_SIZE / 4,
      py + CELL_SIZE / 3,
      px + 3 * CELL_SIZE / 4,
      py + 2 * CELL_SIZE / 3,
    ),
  };
  for dy in 0..3 {
    for dx in 0..3 {
      frame.put(ex1 + dx - 1, ey1 + dy - 1, rgb(0, 0, 0));
      frame.put(ex2 + dx - 1, ey2 + dy - 1, rgb(0, 0, 0));
    }
  }

  // Mouth: a five-pixel parabola arc below centre.
  let mx = px + half;
  let my = py + half + 3;
  for i in -2..=2 {
    frame.put(mx + i, my + (i * i) / 6, rgb(60, 30, 0));
  }
}

/// Elliptical body segment with a tail-ward darkening gradient, stripe bands
/// and sparse scale speckles. `t` runs 0 at the neck to 1 at the tail.
pub fn draw_snake_body(frame: &mut Framebuffer, cell: Cell, base: Color, t: f32, phasing: bool) {
  let px = cell.x * CELL_SIZE;
  let py = cell.y * CELL_SIZE;
  let half = CELL_SIZE / 2;
  for y in 0..CELL_SIZE {
    for x in 0..CELL_SIZE {
      let dx = x - half;
      let dy = y - half;
      if (dx * dx) * 3 / 4 + dy * dy < half * half {
        let darken = 0.7 + 0.3 * (1.0 - t);
        let mut color = scale_color(base, darken);
        if y % 4 == 0 && x > 2 && x < CELL_SIZE - 2 {
          color = lerp_color(color, rgb(40, 120, 40), 0.3);
        }
        if (x + y) % 7 == 0 {
          color = lerp_color(color, rgb(200, 255, 200), 0.1);
        }
        if phasing {
          color = lerp_color(color, PHASE_COLOR, 0.2);
        }
        frame.put(px + x, py + y, color);
      }
    }
  }
}

/// Shiny apple: shaded sphere, highlight, stem and a leaf.
pub fn draw_food(frame: &mut Framebuffer, cell: Cell) {
  let px = cell.x * CELL_SIZE;
  let py = cell.y * CELL_SIZE;
  let half = CELL_SIZE / 2;
  for y in 0..CELL_SIZE {
    for x in 0..CELL_SIZE {
      let dx = x - half;
      let dy = y - half + 2;
      if dx * dx + dy * dy < (half - 1) * (half - 1) {
        let t = 0.8 + 0.2 * (half - dy) as f32 / half as f32;
        let (r, g, b) = channels(FOOD_COLOR);
        let mut color = rgb(
          (r as f32 * t).clamp(0.0, 255.0) as u8,
          (g as f32 * t * 0.9).clamp(0.0, 255.0) as u8,
          (b as f32 * t * 0.9).clamp(0.0, 255.0) as u8,
        );
        if x < half && y < half && dx * dx + dy * dy < (half - 3) * (half - 3) {
          color = lerp_color(color, rgb(255, 255, 255), 0.18);
        }
        frame.put(px + x, py + y, color);
      }
    }
  }
  for y in 0..3 {
    frame.put(px + half, py + y + 2, rgb(80, 40, 0));
  }
  for y in 0..2 {
    for x in 0..3 {
      frame.put(px + half - 2 + x, py + 2 + y, rgb(40, 180, 40));
    }
  }
}

pub fn draw_item(frame: &mut Framebuffer, item: Item) {
  match item.kind {
    ItemKind::Phase => draw_phase_gem(frame, item.cell),
    ItemKind::Speed => draw_speed_bolt(frame, item.cell),
  }
}

// Gem-like diamond with facet highlights, a central shine and an outer glow.
fn draw_phase_gem(frame: &mut Framebuffer, cell: Cell) {
  let px = cell.x * CELL_SIZE;
  let py = cell.y * CELL_SIZE;
  let half = CELL_SIZE / 2;
  for y in 0..CELL_SIZE {
    for x in 0..CELL_SIZE {
      let dx = x - half;
      let dy = y - half;
      let dist = dx.abs() as f32 + dy.abs() as f32 * 0.9;
      if dist < (half - 1) as f32 {
        let t = 0.7 + 0.3 * (half - dy) as f32 / half as f32;
        let mut color = scale_color(PHASE_COLOR, t);
        if dy < 0 && dx != 0 {
          color = lerp_color(color, rgb(200, 200, 255), 0.18);
        }
        if dx * dx + dy * dy < 9 {
          color = lerp_color(color, rgb(255, 255, 255), 0.25);
        }
        frame.put(px + x, py + y, color);
      } else if dist < (half + 1) as f32 {
        frame.put(px + x, py + y, lerp_color(PHASE_COLOR, rgb(255, 255, 255), 0.2));
      }
    }
  }
}

// Zig-zag lightning bolt with a left-side highlight, axis shine and a sparse
// glow field around it.
fn draw_speed_bolt(frame: &mut Framebuffer, cell: Cell) {
  let px = cell.x * CELL_SIZE;
  let py = cell.y * CELL_SIZE;
  let half = CELL_SIZE / 2;
  for y in 0..CELL_SIZE {
    for x in 0..CELL_SIZE {
      let mut fill = false;
      if y > 2 && y < CELL_SIZE - 2 {
        let relx = x - half;
        let rely = y - 2;
        let upper = rely > 0 && rely < half && relx > -2 && relx < 3 && relx > (rely / 3) - 2;
        let lower = rely >= half && relx > 0 && relx < 5 && relx < (rely / 2) + 2;
        if upper || lower {
          fill = true;
        }
      }
      if fill {
        let t = 0.8 + 0.2 * y as f32 / CELL_SIZE as f32;
        let mut color = scale_color(SPEED_COLOR, t);
        if x < half {
          color = lerp_color(color, rgb(255, 255, 180), 0.18);
        }
        if x == half || y == half {
          color = lerp_color(color, rgb(255, 255, 255), 0.18);
        }
        frame.put(px + x, py + y, color);
      } else if y > 1 && y < CELL_SIZE - 1 && x > 1 && x < CELL_SIZE - 1 && (x + y) % 7 == 0 {
        frame.put(px + x, py + y, lerp_color(SPEED_COLOR, rgb(255, 255, 180), 0.12));
      }
    }
  }
}

/// Stone block: vertical gradient, top/left edge highlight, bottom/right
/// shadow, hashed speckles and a few crack lines.
pub fn draw_obstacle_block(frame: &mut Framebuffer, cell: Cell) {
  let px = cell.x * CELL_SIZE;
  let py = cell.y * CELL_SIZE;
  for y in 0..CELL_SIZE {
    for x in 0..CELL_SIZE {
      let t = y as f32 / CELL_SIZE as f32;
      let mut shade = 110.0 + 30.0 * t;
      if x < 2 || y < 2 {
        shade += 40.0;
      }
      if x > CELL_SIZE - 3 || y > CELL_SIZE - 3 {
        shade *= 0.7;
      }
      if (x * y + cell.x * 13 + cell.y * 7) % 17 == 0 {
        shade *= 0.8;
      }
      if (x == CELL_SIZE / 2 && y > CELL_SIZE / 4) || (y == CELL_SIZE / 2 && x > CELL_SIZE / 4) {
        shade *= 0.4;
      }
      if x == y && x > 3 && x < CELL_SIZE - 3 {
        shade *= 0.5;
      }
      let level = shade.clamp(0.0, 255.0) as u8;
      frame.put(px + x, py + y, rgb(level, level, level));
    }
  }
}
