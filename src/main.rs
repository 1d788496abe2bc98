use anyhow::{Context, Result};
use clap::Parser;
use nokia_snake::game::GameConfig;
use nokia_snake::logging;
use nokia_snake::modes::HumanMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nokia_snake")]
#[command(version, about = "Classic snake game in the terminal")]
struct Cli {
    /// YAML file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of cells along each side of the board
    #[arg(long)]
    grid_size: Option<usize>,

    /// Milliseconds between snake moves
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Screen refreshes per second
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for fruit placement
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the eat sound
    #[arg(long)]
    mute: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_yaml_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(cells) = self.grid_size {
            config.cell_number = cells;
        }
        if let Some(ms) = self.tick_ms {
            config.tick_interval_ms = ms;
        }
        if let Some(fps) = self.fps {
            config.frame_rate = fps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.mute {
            config.sound = false;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;

    let config = cli.game_config().context("Invalid game settings")?;
    log::info!("starting with {:?}", config);

    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await?;

    Ok(())
}
