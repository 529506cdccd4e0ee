use crate::game::{
    ControlSignal, GameConfig, GameError, GridState, StepController, StepOutcome, TurnSignal,
};

/// Snake environment for external training harnesses.
///
/// Bundles a controller and its state behind the usual reset/step interface.
/// Steps are unpaced; the harness controls throughput. Observations are the
/// caller's business: the snapshot accessors on [`GridState`] expose the
/// body, food, heading, and score each tick.
pub struct SnakeEnv {
    controller: StepController,
    state: GridState,
}

impl SnakeEnv {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let mut controller = StepController::new(config)?;
        let state = controller.reset()?;
        Ok(Self { controller, state })
    }

    /// Starts a new episode and returns the initial state snapshot.
    pub fn reset(&mut self) -> Result<&GridState, GameError> {
        self.state = self.controller.reset()?;
        Ok(&self.state)
    }

    /// Advances one tick with a relative-turn signal.
    ///
    /// A malformed signal fails with `InvalidAction` and consumes nothing.
    pub fn step(&mut self, signal: TurnSignal) -> Result<StepOutcome, GameError> {
        self.controller
            .step(&mut self.state, ControlSignal::RelativeTurn(signal))
    }

    /// Current state snapshot.
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Mutable state access for tests and bespoke harness setups.
    pub fn state_mut(&mut self) -> &mut GridState {
        &mut self.state
    }
}
