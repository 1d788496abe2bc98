use super::{
    action::Input,
    config::GameConfig,
    error::GameError,
    fruit::Fruit,
    snake::Snake,
    state::{CollisionType, GameState, LifecycleState},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepResult {
    /// Whether the snake ate the fruit this step (the eat sound cue)
    pub ate_fruit: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
}

impl StepResult {
    /// Whether this step ended the game
    pub fn terminated(&self) -> bool {
        self.collision.is_some()
    }
}

/// What a key press did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Waiting -> Playing
    Started,
    /// GameOver -> Playing with a fresh snake and fruit
    Restarted,
    /// Heading changed while playing
    Steered,
    /// Reversal attempt, or a non-directional key while playing
    Ignored,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh state in the Waiting lifecycle, high score zero
    pub fn new_game(&mut self) -> Result<GameState, GameError> {
        let grid = self.config.grid();
        let snake = Snake::new();
        let fruit = Fruit::spawn(grid, &snake.body, &mut self.rng)?;

        Ok(GameState::new(snake, fruit, grid))
    }

    /// Apply a key press according to the lifecycle state
    pub fn handle_input(
        &mut self,
        state: &mut GameState,
        input: Input,
    ) -> Result<InputOutcome, GameError> {
        match state.lifecycle {
            LifecycleState::Waiting => {
                state.lifecycle = LifecycleState::Playing;
                log::info!("game started");
                Ok(InputOutcome::Started)
            }
            LifecycleState::GameOver => {
                self.restart(state)?;
                Ok(InputOutcome::Restarted)
            }
            LifecycleState::Playing => match input {
                Input::Steer(direction) if state.snake.steer(direction) => {
                    Ok(InputOutcome::Steered)
                }
                _ => Ok(InputOutcome::Ignored),
            },
        }
    }

    /// Replace snake and fruit and go straight back to Playing
    pub fn restart(&mut self, state: &mut GameState) -> Result<(), GameError> {
        state.snake.reset();
        state
            .fruit
            .randomize(state.grid, &state.snake.body, &mut self.rng)?;
        state.steps = 0;
        state.lifecycle = LifecycleState::Playing;
        log::info!("game restarted (high score {})", state.high_score);
        Ok(())
    }

    /// Advance the simulation by one tick: move, then eat, then fail.
    ///
    /// Does nothing unless the game is Playing.
    pub fn update(&mut self, state: &mut GameState) -> Result<StepResult, GameError> {
        if !state.is_playing() {
            return Ok(StepResult::default());
        }

        state.snake.advance();
        state.steps += 1;

        let ate_fruit = state.fruit.position == state.snake.head();
        if ate_fruit {
            state
                .fruit
                .randomize(state.grid, &state.snake.body, &mut self.rng)?;
            state.snake.grow();
            log::debug!(
                "fruit eaten at {:?}, next fruit at {:?}, score {}",
                state.snake.head(),
                state.fruit.position,
                state.score() + 1
            );
        }

        let collision = state.collision();
        if let Some(kind) = collision {
            state.finish();
            log::info!(
                "game over: {:?} after {} steps, score {}, high score {}",
                kind,
                state.steps,
                state.score(),
                state.high_score
            );
        }

        Ok(StepResult {
            ate_fruit,
            collision,
        })
    }
}
