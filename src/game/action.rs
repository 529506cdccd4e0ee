use super::error::GameError;

/// Heading the snake can travel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

/// Clockwise cycle used for relative turns: Right -> Down -> Left -> Up.
const CLOCKWISE: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

/// Fixed resolution order for simultaneously pressed keys. The last pressed
/// entry in this order wins, reproducing the reference tie-break.
const KEY_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Up,
    Direction::Down,
];

impl Direction {
    /// Returns the pixel delta (dx, dy) for one step of `block` in this
    /// direction. Screen coordinates: y grows downward.
    pub fn delta(self, block: i32) -> (i32, i32) {
        match self {
            Direction::Right => (block, 0),
            Direction::Left => (-block, 0),
            Direction::Up => (0, -block),
            Direction::Down => (0, block),
        }
    }

    /// Applies a relative turn by rotating through the clockwise cycle.
    pub fn turned(self, turn: Turn) -> Direction {
        let idx = CLOCKWISE.iter().position(|&d| d == self).unwrap_or(0);
        match turn {
            Turn::Keep => self,
            Turn::Right => CLOCKWISE[(idx + 1) % 4],
            Turn::Left => CLOCKWISE[(idx + 3) % 4],
        }
    }
}

/// A turn relative to the current heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Keep,
    Right,
    Left,
}

/// One-hot 3-element relative-turn signal over [keep, turn-right, turn-left].
///
/// This is the wire form an agent supplies; `decode` validates the one-hot
/// contract and rejects all-zero or multi-hot signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSignal(pub [bool; 3]);

impl TurnSignal {
    pub const KEEP: TurnSignal = TurnSignal([true, false, false]);
    pub const TURN_RIGHT: TurnSignal = TurnSignal([false, true, false]);
    pub const TURN_LEFT: TurnSignal = TurnSignal([false, false, true]);

    /// Builds a signal from a discrete action index (0 = keep, 1 = right,
    /// 2 = left). Out-of-range indices produce an all-zero signal, which
    /// `decode` then rejects.
    pub fn from_index(idx: usize) -> Self {
        let mut hot = [false; 3];
        if idx < 3 {
            hot[idx] = true;
        }
        TurnSignal(hot)
    }

    pub fn decode(self) -> Result<Turn, GameError> {
        match self.0 {
            [true, false, false] => Ok(Turn::Keep),
            [false, true, false] => Ok(Turn::Right),
            [false, false, true] => Ok(Turn::Left),
            hot => Err(GameError::InvalidAction(hot)),
        }
    }
}

/// Bitmask of currently pressed cardinal-direction keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionKeys {
    bits: u8,
}

impl DirectionKeys {
    const fn bit(direction: Direction) -> u8 {
        match direction {
            Direction::Right => 1 << 0,
            Direction::Left => 1 << 1,
            Direction::Up => 1 << 2,
            Direction::Down => 1 << 3,
        }
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, direction: Direction) {
        self.bits |= Self::bit(direction);
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.bits & Self::bit(direction) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Resolves the key set to a heading. Walks the fixed key order and the
    /// last pressed entry wins; an empty set keeps the current heading.
    pub fn resolve(&self, current: Direction) -> Direction {
        let mut heading = current;
        for direction in KEY_ORDER {
            if self.contains(direction) {
                heading = direction;
            }
        }
        heading
    }
}

impl From<Direction> for DirectionKeys {
    fn from(direction: Direction) -> Self {
        let mut keys = DirectionKeys::new();
        keys.press(direction);
        keys
    }
}

/// Control signal for one tick, tagged by driving mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    /// Agent-driven: a one-hot relative-turn selection.
    RelativeTurn(TurnSignal),
    /// Human-driven: the set of directional keys held this tick.
    AbsoluteDirection(DirectionKeys),
}

impl ControlSignal {
    /// Resolves the signal to an absolute heading given the current one.
    /// Fails with `InvalidAction` for a malformed relative-turn signal,
    /// leaving the caller's state untouched.
    pub fn resolve(self, current: Direction) -> Result<Direction, GameError> {
        match self {
            ControlSignal::RelativeTurn(signal) => Ok(current.turned(signal.decode()?)),
            ControlSignal::AbsoluteDirection(keys) => Ok(keys.resolve(current)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Right.delta(20), (20, 0));
        assert_eq!(Direction::Left.delta(20), (-20, 0));
        assert_eq!(Direction::Up.delta(20), (0, -20));
        assert_eq!(Direction::Down.delta(20), (0, 20));
    }

    #[test]
    fn test_keep_never_changes_heading() {
        for direction in CLOCKWISE {
            assert_eq!(direction.turned(Turn::Keep), direction);
        }
    }

    #[test]
    fn test_two_right_turns() {
        // Right -> Down -> Left
        let once = Direction::Right.turned(Turn::Right);
        assert_eq!(once, Direction::Down);
        assert_eq!(once.turned(Turn::Right), Direction::Left);
    }

    #[test]
    fn test_two_left_turns() {
        // Right -> Up -> Left
        let once = Direction::Right.turned(Turn::Left);
        assert_eq!(once, Direction::Up);
        assert_eq!(once.turned(Turn::Left), Direction::Left);
    }

    #[test]
    fn test_full_clockwise_cycle() {
        let mut heading = Direction::Right;
        for _ in 0..4 {
            heading = heading.turned(Turn::Right);
        }
        assert_eq!(heading, Direction::Right);
    }

    #[test]
    fn test_signal_decode() {
        assert_eq!(TurnSignal::KEEP.decode().unwrap(), Turn::Keep);
        assert_eq!(TurnSignal::TURN_RIGHT.decode().unwrap(), Turn::Right);
        assert_eq!(TurnSignal::TURN_LEFT.decode().unwrap(), Turn::Left);
    }

    #[test]
    fn test_signal_rejects_all_zero() {
        let err = TurnSignal([false, false, false]).decode().unwrap_err();
        assert!(matches!(err, GameError::InvalidAction(_)));
    }

    #[test]
    fn test_signal_rejects_multi_hot() {
        let err = TurnSignal([true, true, false]).decode().unwrap_err();
        assert!(matches!(err, GameError::InvalidAction(_)));
    }

    #[test]
    fn test_signal_from_index() {
        assert_eq!(TurnSignal::from_index(0), TurnSignal::KEEP);
        assert_eq!(TurnSignal::from_index(1), TurnSignal::TURN_RIGHT);
        assert_eq!(TurnSignal::from_index(2), TurnSignal::TURN_LEFT);
        assert!(TurnSignal::from_index(3).decode().is_err());
    }

    #[test]
    fn test_empty_keys_keep_heading() {
        let keys = DirectionKeys::new();
        assert!(keys.is_empty());
        assert_eq!(keys.resolve(Direction::Up), Direction::Up);
    }

    #[test]
    fn test_single_key_wins() {
        let keys = DirectionKeys::from(Direction::Left);
        assert_eq!(keys.resolve(Direction::Right), Direction::Left);
    }

    #[test]
    fn test_multi_key_tie_break_is_last_in_order() {
        // Order is Right, Left, Up, Down: Down outranks Right.
        let mut keys = DirectionKeys::new();
        keys.press(Direction::Right);
        keys.press(Direction::Down);
        assert_eq!(keys.resolve(Direction::Up), Direction::Down);

        // Left outranks Right.
        let mut keys = DirectionKeys::new();
        keys.press(Direction::Right);
        keys.press(Direction::Left);
        assert_eq!(keys.resolve(Direction::Up), Direction::Left);
    }

    #[test]
    fn test_control_signal_resolution() {
        let relative = ControlSignal::RelativeTurn(TurnSignal::TURN_RIGHT);
        assert_eq!(relative.resolve(Direction::Right).unwrap(), Direction::Down);

        let absolute = ControlSignal::AbsoluteDirection(DirectionKeys::from(Direction::Up));
        assert_eq!(absolute.resolve(Direction::Right).unwrap(), Direction::Up);

        let invalid = ControlSignal::RelativeTurn(TurnSignal([false; 3]));
        assert!(invalid.resolve(Direction::Right).is_err());
    }
}
