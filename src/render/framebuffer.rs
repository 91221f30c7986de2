use super::palette::{scale_color, Color};
use crate::game::constants::{FB_HEIGHT, FB_WIDTH};

/// The host-visible surface: a row-major XRGB8888 buffer of fixed dimensions.
/// Every drawing routine goes through [`Framebuffer::put`], which is where the
/// clipping policy lives; coordinates off the surface are dropped without
/// error.
#[derive(Debug, Clone)]
pub struct Framebuffer {
  pixels: Vec<u32>,
}

impl Framebuffer {
  pub fn new() -> Self {
    Framebuffer {
      pixels: vec![0; (FB_WIDTH * FB_HEIGHT) as usize],
    }
  }

  pub fn put(&mut self, x: i32, y: i32, color: Color) {
    if x < 0 || x >= FB_WIDTH || y < 0 || y >= FB_HEIGHT {
      return;
    }
    self.pixels[(y * FB_WIDTH + x) as usize] = color;
  }

  pub fn get(&self, x: i32, y: i32) -> Option<Color> {
    if x < 0 || x >= FB_WIDTH || y < 0 || y >= FB_HEIGHT {
      return None;
    }
    Some(self.pixels[(y * FB_WIDTH + x) as usize])
  }

  pub fn fill_row(&mut self, y: i32, color: Color) {
    if y < 0 || y >= FB_HEIGHT {
      return;
    }
    let start = (y * FB_WIDTH) as usize;
    self.pixels[start..start + FB_WIDTH as usize].fill(color);
  }

  /// Darken the whole surface, used by the pause and game-over overlays.
  pub fn darken(&mut self, factor: f32) {
    for pixel in self.pixels.iter_mut() {
      *pixel = scale_color(*pixel, factor);
    }
  }

  pub fn pixels(&self) -> &[u32] {
    &self.pixels
  }

  pub fn pitch_bytes() -> usize {
    FB_WIDTH as usize * std::mem::size_of::<u32>()
  }
}

impl Default for Framebuffer {
  fn default() -> Self {
    Framebuffer::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::render::palette::rgb;

  #[test]
  fn put_writes_inside_and_clips_outside() {
    let mut frame = Framebuffer::new();
    frame.put(3, 2, 0x00123456);
    assert_eq!(frame.get(3, 2), Some(0x00123456));

    frame.put(-1, 0, 0x00ffffff);
    frame.put(FB_WIDTH, 0, 0x00ffffff);
    frame.put(0, FB_HEIGHT, 0x00ffffff);
    assert_eq!(frame.get(-1, 0), None);
    assert_eq!(frame.get(0, 0), Some(0));
  }

  #[test]
  fn darken_scales_every_pixel() {
    let mut frame = Framebuffer::new();
    frame.fill_row(0, rgb(100, 200, 50));
    frame.darken(0.5);
    assert_eq!(frame.get(0, 0), Some(rgb(50, 100, 25)));
  }
}
