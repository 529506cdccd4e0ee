use thiserror::Error;

/// Errors the simulation core can surface. Episode termination (wall hit,
/// self-collision, stall) is never an error; it is reported through
/// `StepOutcome::game_over`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The relative-turn signal was not exactly one-hot. The tick is not
    /// consumed and simulation state is left unchanged.
    #[error("relative-turn signal must be exactly one-hot, got {0:?}")]
    InvalidAction([bool; 3]),

    /// Grid dimensions are not positive multiples of the block size.
    #[error("grid {width}x{height} is not a positive multiple of block size {block_size}")]
    OutOfBoundsConfig {
        width: i32,
        height: i32,
        block_size: i32,
    },

    /// No free cell remains for food placement; the snake fills the grid.
    #[error("no free cell left for food placement")]
    FoodPlacementExhausted,
}
