use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::error::GameError;
use super::grid::Grid;
use super::snake::INITIAL_BODY;

/// Largest board side accepted by [`GameConfig::validate`]
pub const MAX_CELL_NUMBER: usize = 255;

/// Configuration for the game
///
/// Fixed for the lifetime of a run; the engine takes a copy at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// The board is `cell_number × cell_number` cells
    pub cell_number: usize,
    /// Terminal columns per cell (display only)
    pub cell_size: u16,
    /// Milliseconds between two simulation ticks
    pub tick_interval_ms: u64,
    /// Render frames per second (display only)
    pub frame_rate: u32,
    /// Ring the terminal bell when fruit is eaten
    pub sound: bool,
    /// Fixed RNG seed for reproducible fruit placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_number: 19,
            cell_size: 2,
            tick_interval_ms: 150,
            frame_rate: 60,
            sound: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(cell_number: usize) -> Self {
        Self {
            cell_number,
            ..Default::default()
        }
    }

    /// Load a YAML config file; fields missing from the file keep their defaults
    pub fn from_yaml_file(path: &Path) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml_ng::from_str(&content).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.cell_number > MAX_CELL_NUMBER {
            return Err(GameError::InvalidConfig(format!(
                "cell_number {} exceeds the maximum of {MAX_CELL_NUMBER}",
                self.cell_number
            )));
        }
        // Board width in columns, border included, must fit a terminal coordinate
        let board_columns = self.cell_number as u64 * self.cell_size as u64 + 2;
        if board_columns > u16::MAX as u64 {
            return Err(GameError::InvalidConfig(format!(
                "a {} cell board with cell_size {} is {board_columns} columns wide",
                self.cell_number, self.cell_size
            )));
        }
        let grid = self.grid();
        if let Some(cell) = INITIAL_BODY.iter().find(|cell| !grid.contains(**cell)) {
            return Err(GameError::InvalidConfig(format!(
                "a {n}x{n} grid cannot hold the starting snake (cell {cell:?} is outside)",
                n = self.cell_number
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidConfig(
                "tick_interval_ms must be positive".into(),
            ));
        }
        if self.frame_rate == 0 {
            return Err(GameError::InvalidConfig("frame_rate must be positive".into()));
        }
        if self.cell_size == 0 {
            return Err(GameError::InvalidConfig("cell_size must be positive".into()));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.cell_number)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }
}
