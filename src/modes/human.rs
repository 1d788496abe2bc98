use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};

use crate::audio::{self, Audio};
use crate::clock::{ClockEvent, Scheduler};
use crate::game::{GameConfig, GameEngine, GameState, Input, InputOutcome, StepResult};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::render::renderer::TITLE;

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: Box<dyn Audio>,
    should_quit: bool,
    /// Set when play (re)starts so the next move is a full tick away
    restart_clock: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let audio = audio::from_config(config.sound);
        Self::with_audio(config, audio)
    }

    pub fn with_audio(config: GameConfig, audio: Box<dyn Audio>) -> Result<Self> {
        let renderer = Renderer::new(config.cell_size);
        let mut engine = GameEngine::new(config);
        let state = engine.new_game().context("Failed to set up the board")?;

        Ok(Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer,
            input_handler: InputHandler::new(),
            audio,
            should_quit: false,
            restart_clock: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, SetTitle(TITLE))
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        log::info!(
            "session ended after {} games, high score {}",
            self.metrics.games_played,
            self.state.high_score
        );
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let config = self.engine.config();
        let mut scheduler = Scheduler::new(config.tick_interval(), config.frame_interval());

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event)?,
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                clock_event = scheduler.next() => {
                    match clock_event {
                        ClockEvent::Tick => {
                            self.update_game()?;
                        }
                        ClockEvent::Frame => {
                            self.metrics.update();
                            terminal.draw(|frame| {
                                self.renderer.render(frame, &self.state, &self.metrics);
                            }).context("Failed to draw frame")?;
                        }
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.restart_clock {
                scheduler.reset_tick();
                self.restart_clock = false;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Game(input) => {
                    self.apply_input(input)?;
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
            }
        }

        Ok(())
    }

    fn apply_input(&mut self, input: Input) -> Result<InputOutcome> {
        let outcome = self
            .engine
            .handle_input(&mut self.state, input)
            .context("Failed to restart the game")?;

        if matches!(outcome, InputOutcome::Started | InputOutcome::Restarted) {
            self.metrics.on_game_start();
            self.restart_clock = true;
        }

        Ok(outcome)
    }

    fn update_game(&mut self) -> Result<StepResult> {
        let result = self.engine.update(&mut self.state).inspect_err(|err| {
            log::error!("simulation stopped: {err}");
        })?;

        if result.ate_fruit {
            self.audio.play_eat_sound();
        }

        if result.terminated() {
            self.metrics.on_game_over();
        }

        Ok(result)
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
