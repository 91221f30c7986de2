use super::constants::{GRID_H, GRID_W, INTERIOR_OBSTACLES};
use super::types::{Cell, Item};
use rand::rngs::StdRng;
use rand::Rng;

/// Static occupancy grid established at reset: the outer ring is always
/// occupied, plus a handful of interior blocks placed by rejection sampling.
/// Immutable for the rest of the game.
#[derive(Debug, Clone)]
pub struct ObstacleGrid {
  cells: [[bool; GRID_H as usize]; GRID_W as usize],
  count: usize,
}

impl ObstacleGrid {
  pub fn empty() -> Self {
    ObstacleGrid {
      cells: [[false; GRID_H as usize]; GRID_W as usize],
      count: 0,
    }
  }

  pub fn generate(rng: &mut StdRng, head: Cell, food: Cell, item: Option<Item>) -> Self {
    let mut grid = ObstacleGrid::empty();
    for x in 0..GRID_W {
      grid.place(Cell { x, y: 0 });
      grid.place(Cell { x, y: GRID_H - 1 });
    }
    for y in 0..GRID_H {
      grid.place(Cell { x: 0, y });
      grid.place(Cell { x: GRID_W - 1, y });
    }
    grid.count = (2 * (GRID_W + GRID_H) - 4) as usize;

    for _ in 0..INTERIOR_OBSTACLES {
      loop {
        let cell = Cell {
          x: rng.gen_range(0..GRID_W),
          y: rng.gen_range(0..GRID_H),
        };
        if cell == head || cell == food {
          continue;
        }
        if item.map_or(false, |item| item.cell == cell) {
          continue;
        }
        if grid.is_blocked(cell) {
          continue;
        }
        grid.place(cell);
        grid.count += 1;
        break;
      }
    }

    grid
  }

  fn place(&mut self, cell: Cell) {
    self.cells[cell.x as usize][cell.y as usize] = true;
  }

  /// Off-grid coordinates are not obstacles; leaving the grid is wall
  /// handling, decided by the caller.
  pub fn is_blocked(&self, cell: Cell) -> bool {
    if cell.x < 0 || cell.x >= GRID_W || cell.y < 0 || cell.y >= GRID_H {
      return false;
    }
    self.cells[cell.x as usize][cell.y as usize]
  }

  pub fn count(&self) -> usize {
    self.count
  }

  pub fn blocked_cells(&self) -> impl Iterator<Item = Cell> + '_ {
    (0..GRID_W).flat_map(move |x| {
      (0..GRID_H).filter_map(move |y| {
        if self.cells[x as usize][y as usize] {
          Some(Cell { x, y })
        } else {
          None
        }
      })
    })
  }
}
