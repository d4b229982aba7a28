use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Interval, interval};

use crate::game::{GameConfig, GameEngine, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::stats::SessionStats;

/// Interactive play: owns the engine, the terminal, and the tick scheduler
pub struct HumanMode {
    engine: GameEngine,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_period: Duration,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let tick_period = config.tick_interval();

        Self {
            engine: GameEngine::new(config),
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_period,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Movement runs on the configured tick period (default 200ms); the
        // interval is dropped with this loop, so no timer can outlive the
        // session it drives.
        let mut tick_timer = interval(self.tick_period);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event, &mut tick_timer);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.engine.tick() == TickOutcome::Died {
                        self.stats.on_game_over(self.engine.state().score);
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.refresh();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state(), &self.stats);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.map_key(key) {
                KeyAction::Turn(direction) => {
                    // Applied immediately; the next tick observes it. The
                    // engine rejects reversals against the direction current
                    // at key time.
                    self.engine.set_direction(direction);
                }
                KeyAction::Restart => {
                    self.reset_game();
                    // A fresh game gets a full first tick period instead of
                    // whatever was left of the old one
                    tick_timer.reset();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn reset_game(&mut self) {
        self.engine.restart();
        self.stats.on_game_start();
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
