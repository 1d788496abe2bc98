use rand::Rng;
use rand::seq::IteratorRandom;

use super::error::GameError;
use super::grid::{Grid, Position};

/// Random probes before switching to an explicit scan of free cells
pub const MAX_RANDOM_ATTEMPTS: usize = 1000;

/// A single food item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fruit {
    pub position: Position,
}

impl Fruit {
    /// Place a new fruit on a cell not in `occupied`
    pub fn spawn<R: Rng + ?Sized>(
        grid: Grid,
        occupied: &[Position],
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut fruit = Self {
            position: Position::new(0, 0),
        };
        fruit.randomize(grid, occupied, rng)?;
        Ok(fruit)
    }

    /// Move the fruit to a uniformly random free cell.
    ///
    /// Rejection sampling first; on a crowded board it falls back to picking
    /// among the enumerated free cells. Leaves the position untouched and
    /// returns [`GameError::BoardFull`] when no cell is free.
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        grid: Grid,
        occupied: &[Position],
        rng: &mut R,
    ) -> Result<(), GameError> {
        let n = grid.cell_number() as i32;

        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let pos = Position::new(rng.gen_range(0..n), rng.gen_range(0..n));
            if !occupied.contains(&pos) {
                self.position = pos;
                return Ok(());
            }
        }

        let free = grid.cells().filter(|cell| !occupied.contains(cell));
        match free.choose(rng) {
            Some(pos) => {
                self.position = pos;
                Ok(())
            }
            None => Err(GameError::BoardFull {
                cells: grid.cell_count(),
            }),
        }
    }
}
