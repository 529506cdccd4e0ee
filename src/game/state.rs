use rand::Rng;

use super::action::Direction;
use super::config::GameConfig;
use super::error::GameError;

/// Body length at (re-)initialization.
pub const INITIAL_LENGTH: usize = 3;

/// A grid coordinate in pixels, quantized to the block size. Plain value
/// semantics; copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Owns the snake geometry, heading, food, score, and frame counter.
///
/// All mutation goes through the operations here; the step controller never
/// touches the body directly. The body is head-first: index 0 is the head,
/// the last element is the tail, and adjacent elements always differ by
/// exactly one block step.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    width: i32,
    height: i32,
    block: i32,
    body: Vec<Point>,
    heading: Direction,
    food: Point,
    score: u32,
    frames: u32,
    alive: bool,
}

impl GridState {
    /// Builds the initial state: a three-segment snake heading right from
    /// the grid center, with food placed off-body.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self, GameError> {
        config.validate()?;

        let block = config.block_size;
        let head = Point::new(
            config.width / block / 2 * block,
            config.height / block / 2 * block,
        );

        let mut body = Vec::with_capacity(INITIAL_LENGTH);
        for i in 0..INITIAL_LENGTH as i32 {
            body.push(head.offset(-i * block, 0));
        }

        let mut state = Self {
            width: config.width,
            height: config.height,
            block,
            body,
            heading: Direction::Right,
            food: Point::new(0, 0),
            score: 0,
            frames: 0,
            alive: true,
        };
        state.relocate_food(rng)?;
        Ok(state)
    }

    /// Builds a state from explicit geometry. Used by tests and harnesses
    /// that need a specific board; the caller is responsible for supplying a
    /// valid chain.
    pub fn from_parts(
        config: &GameConfig,
        body: Vec<Point>,
        heading: Direction,
        food: Point,
    ) -> Self {
        Self {
            width: config.width,
            height: config.height,
            block: config.block_size,
            body,
            heading,
            food,
            score: 0,
            frames: 0,
            alive: true,
        }
    }

    // Snapshot accessors, consumed by the renderer and training harnesses.

    pub fn body(&self) -> &[Point] {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn block_size(&self) -> i32 {
        self.block
    }

    /// Computes the head position one block step in `direction`. Pure; does
    /// not mutate.
    pub fn advance_head(&self, direction: Direction) -> Point {
        let (dx, dy) = direction.delta(self.block);
        self.head().offset(dx, dy)
    }

    /// Prepends `new_head` to the body, making it the new index-0 element.
    /// No bounds checking; validity is the caller's job via `is_collision`.
    pub fn commit_head(&mut self, new_head: Point) {
        self.body.insert(0, new_head);
    }

    /// True if `point` is outside the playable area or on a body segment at
    /// index >= 1 (the just-committed head is excluded when checking the
    /// head itself).
    pub fn is_collision(&self, point: Point) -> bool {
        if !self.in_bounds(point) {
            return true;
        }
        self.body[1..].contains(&point)
    }

    fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.x < self.width - self.block
            && point.y >= 0
            && point.y < self.height - self.block
    }

    /// If the head sits on the food: bumps the score, relocates the food,
    /// and returns true. Otherwise returns false.
    pub fn eat_food<R: Rng>(&mut self, rng: &mut R) -> Result<bool, GameError> {
        if self.head() != self.food {
            return Ok(false);
        }
        self.score += 1;
        self.relocate_food(rng)?;
        Ok(true)
    }

    /// Removes the tail segment, restoring constant length after a head
    /// commit on a non-food tick.
    pub fn shrink_tail(&mut self) {
        self.body.pop();
    }

    /// Rejection-samples a block-aligned in-bounds cell not occupied by the
    /// body. Fails only when the snake covers every cell.
    pub fn relocate_food<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let cols = self.width / self.block - 1;
        let rows = self.height / self.block - 1;
        let total = (cols as i64) * (rows as i64);
        if total <= 0 || self.body.len() as i64 >= total {
            return Err(GameError::FoodPlacementExhausted);
        }

        loop {
            let candidate = Point::new(
                rng.gen_range(0..cols) * self.block,
                rng.gen_range(0..rows) * self.block,
            );
            if !self.body.contains(&candidate) {
                self.food = candidate;
                return Ok(());
            }
        }
    }

    /// Places the food at an explicit cell. For tests and harnesses.
    pub fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    pub(crate) fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }

    pub(crate) fn advance_frame(&mut self) {
        self.frames += 1;
    }

    pub(crate) fn terminate(&mut self) {
        self.alive = false;
    }
}
