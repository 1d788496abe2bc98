//! Nokia Snake - the classic grid snake game in the terminal
//!
//! This library provides:
//! - Core game logic: grid, snake, fruit and the lifecycle state machine (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module) and the eat sound (audio module)
//! - The interactive run loop and its clocks (modes and clock modules)

pub mod audio;
pub mod clock;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
