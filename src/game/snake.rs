use super::action::Direction;
use super::grid::Position;

/// Canonical starting body, head first
pub const INITIAL_BODY: [Position; 3] = [
    Position::new(5, 10),
    Position::new(4, 10),
    Position::new(3, 10),
];

pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// The player-controlled snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// When set, the next [`Snake::advance`] keeps the tail
    pub pending_growth: bool,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            body: INITIAL_BODY.to_vec(),
            direction: INITIAL_DIRECTION,
            pending_growth: false,
        }
    }

    /// Create a snake from an explicit body (head first).
    ///
    /// Panics if the body is shorter than the starting snake.
    pub fn from_body(body: Vec<Position>, direction: Direction) -> Self {
        assert!(
            body.len() >= INITIAL_BODY.len(),
            "snake body needs at least {} cells, got {}",
            INITIAL_BODY.len(),
            body.len()
        );
        Self {
            body,
            direction,
            pending_growth: false,
        }
    }

    /// Return to the starting body and heading
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Step one cell in the current direction.
    ///
    /// The tail is dropped unless growth was armed by [`Snake::grow`] on an
    /// earlier tick, in which case the body gets one cell longer and the flag
    /// clears.
    pub fn advance(&mut self) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop();
        }
    }

    /// Arm growth for the next [`Snake::advance`]
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    /// Change heading. A 180-degree turn is ignored and returns false.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Fruits eaten so far
    pub fn score(&self) -> u32 {
        self.body.len().saturating_sub(INITIAL_BODY.len()) as u32
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
