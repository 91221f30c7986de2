#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
  pub x: i32,
  pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Up,
  Down,
  Left,
  Right,
}

impl Direction {
  pub fn opposite(self) -> Direction {
    match self {
      Direction::Up => Direction::Down,
      Direction::Down => Direction::Up,
      Direction::Left => Direction::Right,
      Direction::Right => Direction::Left,
    }
  }

  pub fn offset(self) -> (i32, i32) {
    match self {
      Direction::Up => (0, -1),
      Direction::Down => (0, 1),
      Direction::Left => (-1, 0),
      Direction::Right => (1, 0),
    }
  }

  pub fn to_u8(self) -> u8 {
    match self {
      Direction::Up => 0,
      Direction::Down => 1,
      Direction::Left => 2,
      Direction::Right => 3,
    }
  }

  pub fn from_u8(code: u8) -> Option<Direction> {
    match code {
      0 => Some(Direction::Up),
      1 => Some(Direction::Down),
      2 => Some(Direction::Left),
      3 => Some(Direction::Right),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
  Phase,
  Speed,
}

impl ItemKind {
  pub fn to_u8(self) -> u8 {
    match self {
      ItemKind::Phase => 1,
      ItemKind::Speed => 2,
    }
  }

  pub fn from_u8(code: u8) -> Option<ItemKind> {
    match code {
      1 => Some(ItemKind::Phase),
      2 => Some(ItemKind::Speed),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
  pub kind: ItemKind,
  pub cell: Cell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
  Title,
  Playing,
  Paused,
  GameOver,
}

impl GameState {
  pub fn to_u8(self) -> u8 {
    match self {
      GameState::Title => 0,
      GameState::Playing => 1,
      GameState::Paused => 2,
      GameState::GameOver => 3,
    }
  }

  pub fn from_u8(code: u8) -> Option<GameState> {
    match code {
      0 => Some(GameState::Title),
      1 => Some(GameState::Playing),
      2 => Some(GameState::Paused),
      3 => Some(GameState::GameOver),
      _ => None,
    }
  }
}
