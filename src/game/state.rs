use super::fruit::Fruit;
use super::grid::Grid;
use super::snake::Snake;

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Before the first key press
    Waiting,
    Playing,
    /// Crashed; the next key press starts over
    GameOver,
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub fruit: Fruit,
    pub grid: Grid,
    pub lifecycle: LifecycleState,
    /// Best score of this process; never decreases
    pub high_score: u32,
    /// Ticks of the current game
    pub steps: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, fruit: Fruit, grid: Grid) -> Self {
        Self {
            snake,
            fruit,
            grid,
            lifecycle: LifecycleState::Waiting,
            high_score: 0,
            steps: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    pub fn is_playing(&self) -> bool {
        self.lifecycle == LifecycleState::Playing
    }

    /// Collision of the current head, walls checked first
    pub fn collision(&self) -> Option<CollisionType> {
        let head = self.snake.head();
        if !self.grid.contains(head) {
            Some(CollisionType::Wall)
        } else if self.snake.collides_with_body(head) {
            Some(CollisionType::SelfCollision)
        } else {
            None
        }
    }

    /// Record the end of a game, keeping the best score
    pub fn finish(&mut self) {
        self.high_score = self.high_score.max(self.score());
        self.lifecycle = LifecycleState::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::Direction;
    use crate::game::grid::Position;

    fn state_with(snake: Snake) -> GameState {
        GameState::new(
            snake,
            Fruit {
                position: Position::new(0, 0),
            },
            Grid::new(19),
        )
    }

    #[test]
    fn test_starts_waiting() {
        let state = state_with(Snake::new());
        assert_eq!(state.lifecycle, LifecycleState::Waiting);
        assert_eq!(state.high_score, 0);
        assert_eq!(state.collision(), None);
    }

    #[test]
    fn test_wall_collision() {
        let snake = Snake::from_body(
            vec![Position::new(19, 10), Position::new(18, 10), Position::new(17, 10)],
            Direction::Right,
        );
        assert_eq!(state_with(snake).collision(), Some(CollisionType::Wall));

        let snake = Snake::from_body(
            vec![Position::new(4, -1), Position::new(4, 0), Position::new(4, 1)],
            Direction::Up,
        );
        assert_eq!(state_with(snake).collision(), Some(CollisionType::Wall));
    }

    #[test]
    fn test_self_collision() {
        let snake = Snake::from_body(
            vec![
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(6, 6),
                Position::new(6, 5),
                Position::new(5, 5),
            ],
            Direction::Up,
        );
        assert_eq!(
            state_with(snake).collision(),
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_finish_keeps_best_score() {
        let mut state = state_with(Snake::new());
        state.high_score = 4;
        state.finish();
        assert_eq!(state.lifecycle, LifecycleState::GameOver);
        assert_eq!(state.high_score, 4);

        state.snake.body.extend([Position::new(2, 10); 6]);
        state.finish();
        assert_eq!(state.high_score, 6);
    }
}
