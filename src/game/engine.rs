use rand::rngs::ThreadRng;

use super::{
    action::ControlSignal,
    config::GameConfig,
    error::GameError,
    state::GridState,
};

/// Reward for landing on the food cell.
const FOOD_REWARD: i32 = 10;
/// Reward on any terminal tick (collision or stall).
const DEATH_PENALTY: i32 = -10;
/// Stall budget: the episode ends once the frame counter exceeds this many
/// frames per body segment.
const STALL_FRAMES_PER_SEGMENT: u32 = 100;

/// Outcome of one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub reward: i32,
    pub game_over: bool,
    pub score: u32,
}

/// Drives one tick at a time: resolves the control signal, delegates
/// movement to `GridState`, and computes termination and reward.
pub struct StepController {
    config: GameConfig,
    rng: ThreadRng,
}

impl StepController {
    /// Validates the configuration and builds a controller. Grid dimensions
    /// and tick rate stay fixed for the controller's lifetime.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: rand::thread_rng(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Builds a fresh episode state: body, heading, score, food, and frame
    /// counter all reset.
    pub fn reset(&mut self) -> Result<GridState, GameError> {
        GridState::new(&self.config, &mut self.rng)
    }

    /// Executes one tick.
    ///
    /// An invalid relative-turn signal fails before any mutation, so the
    /// tick is not consumed. A terminated state answers with
    /// `reward = 0, game_over = true` and stays untouched; callers must
    /// `reset` to continue.
    pub fn step(
        &mut self,
        state: &mut GridState,
        signal: ControlSignal,
    ) -> Result<StepOutcome, GameError> {
        if !state.is_alive() {
            return Ok(StepOutcome {
                reward: 0,
                game_over: true,
                score: state.score(),
            });
        }

        // Resolve before mutating anything; InvalidAction propagates here.
        let heading = signal.resolve(state.heading())?;
        state.set_heading(heading);
        state.advance_frame();

        let new_head = state.advance_head(heading);
        state.commit_head(new_head);

        // The stall budget counts the just-committed head. On a terminal
        // tick the over-grown body is left as committed.
        let stalled = state.frames() > STALL_FRAMES_PER_SEGMENT * state.len() as u32;
        if state.is_collision(new_head) || stalled {
            state.terminate();
            return Ok(StepOutcome {
                reward: DEATH_PENALTY,
                game_over: true,
                score: state.score(),
            });
        }

        let reward = if state.eat_food(&mut self.rng)? {
            FOOD_REWARD
        } else {
            state.shrink_tail();
            0
        };

        Ok(StepOutcome {
            reward,
            game_over: false,
            score: state.score(),
        })
    }
}
