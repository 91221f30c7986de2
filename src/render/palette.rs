/// XRGB8888; the high byte is ignored by the host.
pub type Color = u32;

pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
  ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

pub const BG_COLOR_TOP: Color = rgb(30, 30, 40);
pub const BG_COLOR_BOTTOM: Color = rgb(10, 10, 20);
pub const SNAKE_HEAD_COLOR: Color = rgb(200, 200, 40);
pub const SNAKE_BODY_COLOR: Color = rgb(80, 200, 80);
pub const FOOD_COLOR: Color = rgb(200, 80, 80);
pub const PHASE_COLOR: Color = rgb(80, 80, 200);
pub const SPEED_COLOR: Color = rgb(200, 160, 40);
pub const HUD_TEXT_COLOR: Color = rgb(240, 240, 240);
pub const GAME_OVER_COLOR: Color = rgb(255, 60, 60);

pub fn channels(color: Color) -> (u8, u8, u8) {
  (
    ((color >> 16) & 0xff) as u8,
    ((color >> 8) & 0xff) as u8,
    (color & 0xff) as u8,
  )
}

/// Per-channel linear interpolation in 8-bit integer space, no gamma.
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
  let (ar, ag, ab) = channels(a);
  let (br, bg, bb) = channels(b);
  let mix = |from: u8, to: u8| ((1.0 - t) * from as f32 + t * to as f32) as u8;
  rgb(mix(ar, br), mix(ag, bg), mix(ab, bb))
}

/// Scale every channel by a factor, saturating at white.
pub fn scale_color(color: Color, factor: f32) -> Color {
  let (r, g, b) = channels(color);
  let scale = |value: u8| (value as f32 * factor).clamp(0.0, 255.0) as u8;
  rgb(scale(r), scale(g), scale(b))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lerp_hits_endpoints() {
    let a = rgb(10, 20, 30);
    let b = rgb(110, 120, 130);
    assert_eq!(lerp_color(a, b, 0.0), a);
    assert_eq!(lerp_color(a, b, 1.0), b);
    assert_eq!(lerp_color(a, b, 0.5), rgb(60, 70, 80));
  }

  #[test]
  fn scale_saturates_instead_of_wrapping() {
    assert_eq!(scale_color(rgb(200, 200, 200), 1.5), rgb(255, 255, 255));
    assert_eq!(scale_color(rgb(100, 50, 20), 0.5), rgb(50, 25, 10));
    assert_eq!(scale_color(rgb(8, 8, 8), 0.0), rgb(0, 0, 0));
  }
}
