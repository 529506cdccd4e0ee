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
use tokio::time::interval;

use crate::game::{ControlSignal, DirectionKeys, GameConfig, GridState, StepController};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Interactive terminal mode. The tick timer paces the simulation at the
/// configured rate; directional keys pressed between ticks accumulate into
/// the key set handed to the controller.
pub struct HumanMode {
    controller: StepController,
    state: GridState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    pressed_keys: DirectionKeys,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut controller = StepController::new(config).context("Invalid game configuration")?;
        let state = controller.reset().context("Failed to initialize game")?;

        Ok(Self {
            controller,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            pressed_keys: DirectionKeys::new(),
        })
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

        // Game ticks at the configured rate
        let tick_rate = self.controller.config().tick_rate.max(1);
        let tick_interval = Duration::from_millis(1000 / u64::from(tick_rate));
        let mut tick_timer = interval(tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.state.is_alive() {
                        self.update_game()?;
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
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

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Press(direction) => {
                    self.pressed_keys.press(direction);
                }
                KeyAction::Restart => {
                    self.reset_game()?;
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn update_game(&mut self) -> Result<()> {
        let signal = ControlSignal::AbsoluteDirection(self.pressed_keys);
        self.pressed_keys.clear();

        let outcome = self
            .controller
            .step(&mut self.state, signal)
            .context("Simulation step failed")?;

        if outcome.game_over && !self.state.is_alive() {
            self.metrics.on_game_over(outcome.score);
        }

        Ok(())
    }

    fn reset_game(&mut self) -> Result<()> {
        self.state = self.controller.reset().context("Failed to restart game")?;
        self.metrics.on_game_start();
        self.pressed_keys.clear();
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default()).unwrap();
        assert!(mode.state.is_alive());
        assert_eq!(mode.state.score(), 0);
    }

    #[test]
    fn test_game_reset() {
        let mut mode = HumanMode::new(GameConfig::default()).unwrap();
        mode.pressed_keys.press(Direction::Down);
        mode.update_game().unwrap();
        assert_eq!(mode.state.frames(), 1);

        mode.reset_game().unwrap();
        assert_eq!(mode.state.frames(), 0);
        assert_eq!(mode.state.score(), 0);
        assert!(mode.state.is_alive());
        assert!(mode.pressed_keys.is_empty());
    }

    #[test]
    fn test_tick_consumes_pressed_keys() {
        let mut mode = HumanMode::new(GameConfig::default()).unwrap();
        mode.pressed_keys.press(Direction::Down);

        mode.update_game().unwrap();

        assert_eq!(mode.state.heading(), Direction::Down);
        assert!(mode.pressed_keys.is_empty());
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(HumanMode::new(GameConfig::new(601, 600, 20)).is_err());
    }
}
