//! A self-contained, deterministic snake arcade engine: grid simulation with
//! power-ups, obstacles and particles, a procedural pixel-art renderer
//! targeting a raw XRGB8888 framebuffer, and a fixed-layout save-state blob.
//!
//! The host drives everything through [`SnekCore::run_frame`], once per video
//! frame: button levels in, a painted framebuffer and a block of silent audio
//! out. There is no internal concurrency and no blocking; every call runs to
//! completion.

pub mod engine;
pub mod game;
pub mod render;
pub mod savestate;

pub use engine::{AudioSink, SnekCore, VideoSink};
pub use game::input::{ButtonInput, InputTracker};
pub use game::types::{Cell, Direction, GameState, Item, ItemKind};
pub use game::world::World;
pub use render::framebuffer::Framebuffer;
pub use savestate::SaveStateError;
