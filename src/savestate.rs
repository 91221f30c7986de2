//! Fixed-layout save-state blob.
//!
//! Little-endian, positional, no version field; the layout is not stable
//! across engine revisions and must not be persisted across builds. Field
//! order:
//!
//! * snake x coordinates, `MAX_SNAKE_LENGTH` i32 slots (unused slots zero)
//! * snake y coordinates, `MAX_SNAKE_LENGTH` i32 slots
//! * snake length (u32)
//! * direction (u8)
//! * food x, y (i32, i32)
//! * item kind (u8, 0 = none), item x, y (i32, i32)
//! * phase timer, speed timer (i32, i32)
//! * score, high score (u32, u32)
//! * top-level state (u8)
//! * move counter (i32)
//! * frame counter (u64)
//!
//! Obstacles, particles, the pending direction and the RNG are deliberately
//! not captured.

use crate::game::constants::MAX_SNAKE_LENGTH;
use crate::game::snake::Snake;
use crate::game::types::{Cell, Direction, GameState, Item, ItemKind};
use crate::game::world::World;
use std::fmt;
use tracing::info;

pub const SERIALIZED_SIZE: usize = 4 * MAX_SNAKE_LENGTH // snake x slots
  + 4 * MAX_SNAKE_LENGTH // snake y slots
  + 4 // length
  + 1 // direction
  + 4 + 4 // food
  + 1 // item kind
  + 4 + 4 // item cell
  + 4 // phase timer
  + 4 // speed timer
  + 4 // score
  + 4 // high score
  + 1 // state
  + 4 // move counter
  + 8; // frame counter

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStateError {
  /// The supplied buffer is smaller than [`SERIALIZED_SIZE`].
  BufferTooSmall,
  /// A decoded field is out of range (unknown enum code, bad length).
  Malformed,
}

impl fmt::Display for SaveStateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SaveStateError::BufferTooSmall => write!(f, "save state buffer too small"),
      SaveStateError::Malformed => write!(f, "malformed save state"),
    }
  }
}

impl std::error::Error for SaveStateError {}

pub fn serialized_size() -> usize {
  SERIALIZED_SIZE
}

pub fn serialize(world: &World, out: &mut [u8]) -> Result<(), SaveStateError> {
  if out.len() < SERIALIZED_SIZE {
    return Err(SaveStateError::BufferTooSmall);
  }

  let mut encoder = Encoder::with_capacity(SERIALIZED_SIZE);
  for slot in 0..MAX_SNAKE_LENGTH {
    encoder.write_i32(world.snake.cells().get(slot).map_or(0, |cell| cell.x));
  }
  for slot in 0..MAX_SNAKE_LENGTH {
    encoder.write_i32(world.snake.cells().get(slot).map_or(0, |cell| cell.y));
  }
  encoder.write_u32(world.snake.len() as u32);
  encoder.write_u8(world.direction.to_u8());
  encoder.write_i32(world.food.x);
  encoder.write_i32(world.food.y);
  match world.item {
    Some(item) => {
      encoder.write_u8(item.kind.to_u8());
      encoder.write_i32(item.cell.x);
      encoder.write_i32(item.cell.y);
    }
    None => {
      encoder.write_u8(0);
      encoder.write_i32(0);
      encoder.write_i32(0);
    }
  }
  encoder.write_i32(world.phase_timer);
  encoder.write_i32(world.speed_timer);
  encoder.write_u32(world.score);
  encoder.write_u32(world.high_score);
  encoder.write_u8(world.state.to_u8());
  encoder.write_i32(world.move_counter);
  encoder.write_u64(world.frame_count);

  let buffer = encoder.into_vec();
  debug_assert_eq!(buffer.len(), SERIALIZED_SIZE);
  out[..SERIALIZED_SIZE].copy_from_slice(&buffer);
  Ok(())
}

/// The exact inverse of [`serialize`]. Every field is decoded and validated
/// before any of the world is touched, so a failed restore leaves the target
/// unchanged.
pub fn deserialize(world: &mut World, data: &[u8]) -> Result<(), SaveStateError> {
  if data.len() < SERIALIZED_SIZE {
    return Err(SaveStateError::BufferTooSmall);
  }

  let mut reader = Reader::new(data);
  let mut xs = [0i32; MAX_SNAKE_LENGTH];
  for slot in xs.iter_mut() {
    *slot = reader.read_i32().ok_or(SaveStateError::Malformed)?;
  }
  let mut ys = [0i32; MAX_SNAKE_LENGTH];
  for slot in ys.iter_mut() {
    *slot = reader.read_i32().ok_or(SaveStateError::Malformed)?;
  }
  let length = reader.read_u32().ok_or(SaveStateError::Malformed)? as usize;
  if length == 0 || length > MAX_SNAKE_LENGTH {
    return Err(SaveStateError::Malformed);
  }
  let direction = reader
    .read_u8()
    .and_then(Direction::from_u8)
    .ok_or(SaveStateError::Malformed)?;
  let food = Cell {
    x: reader.read_i32().ok_or(SaveStateError::Malformed)?,
    y: reader.read_i32().ok_or(SaveStateError::Malformed)?,
  };
  let item_code = reader.read_u8().ok_or(SaveStateError::Malformed)?;
  let item_cell = Cell {
    x: reader.read_i32().ok_or(SaveStateError::Malformed)?,
    y: reader.read_i32().ok_or(SaveStateError::Malformed)?,
  };
  let item = match item_code {
    0 => None,
    code => Some(Item {
      kind: ItemKind::from_u8(code).ok_or(SaveStateError::Malformed)?,
      cell: item_cell,
    }),
  };
  let phase_timer = reader.read_i32().ok_or(SaveStateError::Malformed)?;
  let speed_timer = reader.read_i32().ok_or(SaveStateError::Malformed)?;
  let score = reader.read_u32().ok_or(SaveStateError::Malformed)?;
  let high_score = reader.read_u32().ok_or(SaveStateError::Malformed)?;
  let state = reader
    .read_u8()
    .and_then(GameState::from_u8)
    .ok_or(SaveStateError::Malformed)?;
  let move_counter = reader.read_i32().ok_or(SaveStateError::Malformed)?;
  let frame_count = reader.read_u64().ok_or(SaveStateError::Malformed)?;

  let cells: Vec<Cell> = xs
    .iter()
    .zip(ys.iter())
    .take(length)
    .map(|(&x, &y)| Cell { x, y })
    .collect();

  world.snake = Snake::from_cells(cells);
  world.direction = direction;
  // The pending direction is not part of the blob; realigning it with the
  // restored heading keeps the first tick after a restore from reversing.
  world.pending_direction = direction;
  world.food = food;
  world.item = item;
  world.phase_timer = phase_timer;
  world.speed_timer = speed_timer;
  world.score = score;
  world.high_score = high_score;
  world.state = state;
  world.move_counter = move_counter;
  world.frame_count = frame_count;
  info!(score, frame = frame_count, "save state restored");
  Ok(())
}

struct Encoder {
  buffer: Vec<u8>,
}

impl Encoder {
  fn with_capacity(capacity: usize) -> Self {
    Encoder {
      buffer: Vec::with_capacity(capacity),
    }
  }

  fn into_vec(self) -> Vec<u8> {
    self.buffer
  }

  fn write_u8(&mut self, value: u8) {
    self.buffer.push(value);
  }

  fn write_i32(&mut self, value: i32) {
    self.buffer.extend_from_slice(&value.to_le_bytes());
  }

  fn write_u32(&mut self, value: u32) {
    self.buffer.extend_from_slice(&value.to_le_bytes());
  }

  fn write_u64(&mut self, value: u64) {
    self.buffer.extend_from_slice(&value.to_le_bytes());
  }
}

struct Reader<'a> {
  data: &'a [u8],
  offset: usize,
}

impl<'a> Reader<'a> {
  fn new(data: &'a [u8]) -> Self {
    Reader { data, offset: 0 }
  }

  fn read_u8(&mut self) -> Option<u8> {
    let value = *self.data.get(self.offset)?;
    self.offset += 1;
    Some(value)
  }

  fn read_i32(&mut self) -> Option<i32> {
    let bytes = self.read_bytes::<4>()?;
    Some(i32::from_le_bytes(bytes))
  }

  fn read_u32(&mut self) -> Option<u32> {
    let bytes = self.read_bytes::<4>()?;
    Some(u32::from_le_bytes(bytes))
  }

  fn read_u64(&mut self) -> Option<u64> {
    let bytes = self.read_bytes::<8>()?;
    Some(u64::from_le_bytes(bytes))
  }

  fn read_bytes<const N: usize>(&mut self) -> Option<[u8; N]> {
    if self.offset + N > self.data.len() {
      return None;
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&self.data[self.offset..self.offset + N]);
    self.offset += N;
    Some(out)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::game::types::{GameState, ItemKind};

  fn exercised_world() -> World {
    let mut world = World::with_seed(21);
    world.state = GameState::Playing;
    world.snake = Snake::from_cells(vec![
      Cell { x: 12, y: 9 },
      Cell { x: 11, y: 9 },
      Cell { x: 10, y: 9 },
      Cell { x: 10, y: 10 },
    ]);
    world.direction = Direction::Up;
    world.pending_direction = Direction::Up;
    world.food = Cell { x: 30, y: 22 };
    world.item = Some(Item {
      kind: ItemKind::Speed,
      cell: Cell { x: 7, y: 3 },
    });
    world.phase_timer = 12;
    world.speed_timer = 240;
    world.score = 70;
    world.high_score = 430;
    world.move_counter = 3;
    world.frame_count = 9001;
    world
  }

  #[test]
  fn round_trip_reproduces_every_field() {
    let world = exercised_world();
    let mut blob = vec![0u8; SERIALIZED_SIZE];
    serialize(&world, &mut blob).expect("serialize");

    let mut restored = World::with_seed(99);
    deserialize(&mut restored, &blob).expect("deserialize");

    assert_eq!(restored.snake.cells(), world.snake.cells());
    assert_eq!(restored.direction, world.direction);
    assert_eq!(restored.pending_direction, world.direction);
    assert_eq!(restored.food, world.food);
    assert_eq!(restored.item, world.item);
    assert_eq!(restored.phase_timer, world.phase_timer);
    assert_eq!(restored.speed_timer, world.speed_timer);
    assert_eq!(restored.score, world.score);
    assert_eq!(restored.high_score, world.high_score);
    assert_eq!(restored.state, world.state);
    assert_eq!(restored.move_counter, world.move_counter);
    assert_eq!(restored.frame_count, world.frame_count);
  }

  #[test]
  fn absent_item_round_trips_as_none() {
    let mut world = exercised_world();
    world.item = None;
    let mut blob = vec![0u8; SERIALIZED_SIZE];
    serialize(&world, &mut blob).expect("serialize");

    let mut restored = World::with_seed(1);
    deserialize(&mut restored, &blob).expect("deserialize");
    assert_eq!(restored.item, None);
  }

  #[test]
  fn short_buffer_fails_serialize() {
    let world = exercised_world();
    let mut blob = vec![0u8; SERIALIZED_SIZE - 1];
    assert_eq!(
      serialize(&world, &mut blob),
      Err(SaveStateError::BufferTooSmall)
    );
  }

  #[test]
  fn short_buffer_fails_deserialize_without_mutation() {
    let world = exercised_world();
    let mut blob = vec![0u8; SERIALIZED_SIZE];
    serialize(&world, &mut blob).expect("serialize");

    let mut target = World::with_seed(5);
    let snake_before = target.snake.cells().to_vec();
    let score_before = target.score;
    let state_before = target.state;

    let result = deserialize(&mut target, &blob[..SERIALIZED_SIZE - 1]);

    assert_eq!(result, Err(SaveStateError::BufferTooSmall));
    assert_eq!(target.snake.cells(), snake_before.as_slice());
    assert_eq!(target.score, score_before);
    assert_eq!(target.state, state_before);
  }

  #[test]
  fn unknown_enum_codes_are_rejected() {
    let world = exercised_world();
    let mut blob = vec![0u8; SERIALIZED_SIZE];
    serialize(&world, &mut blob).expect("serialize");

    // Direction byte sits right after both coordinate arrays and the length.
    let direction_offset = 2 * 4 * MAX_SNAKE_LENGTH + 4;
    let mut bad = blob.clone();
    bad[direction_offset] = 9;
    let mut target = World::with_seed(5);
    assert_eq!(
      deserialize(&mut target, &bad),
      Err(SaveStateError::Malformed)
    );

    let mut bad = blob;
    bad[direction_offset + 1 + 8] = 7; // item kind
    assert_eq!(
      deserialize(&mut target, &bad),
      Err(SaveStateError::Malformed)
    );
  }

  #[test]
  fn oversized_length_is_rejected() {
    let world = exercised_world();
    let mut blob = vec![0u8; SERIALIZED_SIZE];
    serialize(&world, &mut blob).expect("serialize");

    let length_offset = 2 * 4 * MAX_SNAKE_LENGTH;
    blob[length_offset..length_offset + 4]
      .copy_from_slice(&((MAX_SNAKE_LENGTH as u32 + 1).to_le_bytes()));
    let mut target = World::with_seed(5);
    assert_eq!(
      deserialize(&mut target, &blob),
      Err(SaveStateError::Malformed)
    );
  }
}
