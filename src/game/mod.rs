//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The front end feeds it key presses and clock ticks and reads the state back.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod fruit;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Input};
pub use config::GameConfig;
pub use engine::{GameEngine, InputOutcome, StepResult};
pub use error::GameError;
pub use fruit::Fruit;
pub use grid::{Grid, Position};
pub use snake::Snake;
pub use state::{CollisionType, GameState, LifecycleState};
