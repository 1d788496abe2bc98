use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Component-wise difference `self - other`
    pub fn delta_to(&self, other: Position) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }
}

/// Square board of `cell_number × cell_number` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cell_number: i32,
}

impl Grid {
    pub fn new(cell_number: usize) -> Self {
        Self {
            cell_number: cell_number as i32,
        }
    }

    pub fn cell_number(&self) -> usize {
        self.cell_number as usize
    }

    pub fn cell_count(&self) -> usize {
        self.cell_number() * self.cell_number()
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.cell_number).contains(&pos.x) && (0..self.cell_number).contains(&pos.y)
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cell_number)
            .flat_map(move |y| (0..self.cell_number).map(move |x| Position::new(x, y)))
    }

    /// Top-left screen coordinate of a cell, relative to the board origin
    pub fn cell_origin(pos: Position, cell_width: u16, cell_height: u16) -> (u16, u16) {
        let clamp = |v: i32| u16::try_from(v.max(0)).unwrap_or(u16::MAX);
        let x = clamp(pos.x).saturating_mul(cell_width);
        let y = clamp(pos.y).saturating_mul(cell_height);
        (x, y)
    }
}
