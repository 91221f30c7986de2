use crate::game::constants::{AUDIO_FRAMES_PER_VIDEO_FRAME, FB_HEIGHT, FB_WIDTH};
use crate::game::input::{ButtonInput, InputTracker};
use crate::game::world::World;
use crate::render;
use crate::render::framebuffer::Framebuffer;
use crate::savestate::{self, SaveStateError};

/// Receives the finished frame once per [`SnekCore::run_frame`]. The buffer
/// is row-major XRGB8888 with a fixed pitch.
pub trait VideoSink {
  fn present_frame(&mut self, pixels: &[u32], width: u32, height: u32, pitch: usize);
}

/// Receives one video frame's worth of interleaved stereo samples per
/// invocation. This core outputs silence; the block keeps host audio timing
/// honest.
pub trait AudioSink {
  fn queue_samples(&mut self, samples: &[i16]);
}

const SILENCE: [i16; AUDIO_FRAMES_PER_VIDEO_FRAME * 2] = [0; AUDIO_FRAMES_PER_VIDEO_FRAME * 2];

/// The whole engine behind a per-frame entry point: input edge detection,
/// simulation, rendering and A/V hand-off, in that order, all on the
/// caller's thread.
pub struct SnekCore {
  world: World,
  input: InputTracker,
  frame: Framebuffer,
}

impl SnekCore {
  pub fn new() -> Self {
    SnekCore {
      world: World::new(),
      input: InputTracker::new(),
      frame: Framebuffer::new(),
    }
  }

  pub fn with_seed(seed: u64) -> Self {
    SnekCore {
      world: World::with_seed(seed),
      input: InputTracker::new(),
      frame: Framebuffer::new(),
    }
  }

  /// Run exactly one frame: translate button levels, advance the simulation
  /// if due, repaint, then push video and audio to the host.
  pub fn run_frame(
    &mut self,
    buttons: ButtonInput,
    video: &mut dyn VideoSink,
    audio: &mut dyn AudioSink,
  ) {
    self.input.apply(&mut self.world, buttons);
    self.world.advance_frame();
    render::draw_frame(&mut self.frame, &self.world);
    video.present_frame(
      self.frame.pixels(),
      FB_WIDTH as u32,
      FB_HEIGHT as u32,
      Framebuffer::pitch_bytes(),
    );
    audio.queue_samples(&SILENCE);
  }

  pub fn reset(&mut self) {
    self.world.reset();
  }

  pub fn serialize_size(&self) -> usize {
    savestate::serialized_size()
  }

  pub fn serialize(&self, out: &mut [u8]) -> Result<(), SaveStateError> {
    savestate::serialize(&self.world, out)
  }

  pub fn unserialize(&mut self, data: &[u8]) -> Result<(), SaveStateError> {
    savestate::deserialize(&mut self.world, data)
  }

  pub fn world(&self) -> &World {
    &self.world
  }

  pub fn world_mut(&mut self) -> &mut World {
    &mut self.world
  }
}

impl Default for SnekCore {
  fn default() -> Self {
    SnekCore::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::game::constants::BASE_MOVE_INTERVAL;
  use crate::game::obstacles::ObstacleGrid;
  use crate::game::types::{Cell, GameState};

  #[derive(Default)]
  struct CapturedVideo {
    frames: usize,
    last_len: usize,
    last_pitch: usize,
  }

  impl VideoSink for CapturedVideo {
    fn present_frame(&mut self, pixels: &[u32], width: u32, height: u32, pitch: usize) {
      self.frames += 1;
      self.last_len = pixels.len();
      self.last_pitch = pitch;
      assert_eq!(width, FB_WIDTH as u32);
      assert_eq!(height, FB_HEIGHT as u32);
    }
  }

  #[derive(Default)]
  struct CapturedAudio {
    blocks: usize,
    last_len: usize,
  }

  impl AudioSink for CapturedAudio {
    fn queue_samples(&mut self, samples: &[i16]) {
      self.blocks += 1;
      self.last_len = samples.len();
      assert!(samples.iter().all(|&sample| sample == 0));
    }
  }

  #[test]
  fn run_frame_delivers_video_and_silent_audio() {
    let mut core = SnekCore::with_seed(1);
    let mut video = CapturedVideo::default();
    let mut audio = CapturedAudio::default();

    core.run_frame(ButtonInput::default(), &mut video, &mut audio);

    assert_eq!(video.frames, 1);
    assert_eq!(video.last_len, (FB_WIDTH * FB_HEIGHT) as usize);
    assert_eq!(video.last_pitch, FB_WIDTH as usize * 4);
    assert_eq!(audio.blocks, 1);
    assert_eq!(audio.last_len, AUDIO_FRAMES_PER_VIDEO_FRAME * 2);
  }

  #[test]
  fn start_then_frames_advance_the_snake() {
    let mut core = SnekCore::with_seed(2);
    let mut video = CapturedVideo::default();
    let mut audio = CapturedAudio::default();

    // Press start on the title screen, then hold still for one move interval.
    core.run_frame(
      ButtonInput {
        start: true,
        ..ButtonInput::default()
      },
      &mut video,
      &mut audio,
    );
    assert_eq!(core.world().state, GameState::Playing);

    // Clear the field so the walk cannot run into a randomly placed block.
    core.world_mut().obstacles = ObstacleGrid::empty();
    core.world_mut().food = Cell { x: 1, y: 1 };

    let head = core.world().snake.head();
    for _ in 0..BASE_MOVE_INTERVAL {
      core.run_frame(ButtonInput::default(), &mut video, &mut audio);
    }
    assert_ne!(core.world().snake.head(), head);
  }

  #[test]
  fn save_and_restore_through_the_core_boundary() {
    let mut core = SnekCore::with_seed(3);
    core.world_mut().state = GameState::Playing;
    core.world_mut().score = 40;
    core.world_mut().high_score = 40;
    core.world_mut().food = Cell { x: 2, y: 2 };

    let mut blob = vec![0u8; core.serialize_size()];
    core.serialize(&mut blob).expect("serialize");

    let mut other = SnekCore::with_seed(4);
    other.unserialize(&blob).expect("unserialize");
    assert_eq!(other.world().score, 40);
    assert_eq!(other.world().food, Cell { x: 2, y: 2 });
    assert_eq!(other.world().state, GameState::Playing);
  }
}
