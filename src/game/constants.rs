pub const GRID_W: i32 = 40;
pub const GRID_H: i32 = 30;
pub const CELL_SIZE: i32 = 16;

pub const FB_WIDTH: i32 = GRID_W * CELL_SIZE;
pub const FB_HEIGHT: i32 = GRID_H * CELL_SIZE;

pub const STARTING_LENGTH: usize = 3;
pub const MAX_SNAKE_LENGTH: usize = (GRID_W * GRID_H) as usize;

pub const MAX_PARTICLES: usize = 128;
pub const PARTICLE_MIN_LIFETIME: i32 = 30;
pub const PARTICLE_LIFETIME_SPREAD: i32 = 30;
pub const PARTICLE_FADE_BASE: f32 = 60.0;

// Power-up durations in frames; 60 frames is one second at 60 Hz.
pub const PHASE_DURATION: i32 = 60 * 5;
pub const SPEED_DURATION: i32 = 60 * 5;
pub const EFFECT_BLINK_FRAMES: i32 = 60;

// The snake advances once every BASE_MOVE_INTERVAL frames; the speed
// boost halves the interval.
pub const BASE_MOVE_INTERVAL: i32 = 8;

pub const POWERUP_PROBABILITY: f64 = 0.5;
pub const SCORE_PER_FOOD: u32 = 10;

pub const INTERIOR_OBSTACLES: usize = (GRID_W * GRID_H / 100) as usize;

pub const FRAME_RATE: u32 = 60;
pub const AUDIO_SAMPLE_RATE: u32 = 48_000;
pub const AUDIO_FRAMES_PER_VIDEO_FRAME: usize = (AUDIO_SAMPLE_RATE / FRAME_RATE) as usize;
