//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimension (the board is GRID_SIZE x GRID_SIZE, toroidal).
pub const GRID_SIZE: i32 = 20;

/// Tick cadence bounds (milliseconds).
pub const TICK_MS_MIN: u64 = 60;
pub const TICK_MS_MAX: u64 = 220;
pub const DEFAULT_TICK_MS: u64 = 140;

/// Cadence adjustment step for the speed keys.
pub const TICK_MS_STEP: u64 = 20;

/// Score awarded per food item.
pub const FOOD_REWARD: u32 = 10;

/// Snake length at session start.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Rejection-sampling attempts before food placement falls back to a scan.
pub const FOOD_SAMPLE_RETRIES: u32 = 64;

/// Movement directions as unit vectors on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector for this direction (y grows downward).
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when `other` is the exact reverse of `self`.
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Abstract commands delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    TogglePause,
    Restart,
}

impl GameCommand {
    /// Directional payload, if this command is a movement command.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameCommand::MoveUp => Some(Direction::Up),
            GameCommand::MoveDown => Some(Direction::Down),
            GameCommand::MoveLeft => Some(Direction::Left),
            GameCommand::MoveRight => Some(Direction::Right),
            GameCommand::TogglePause | GameCommand::Restart => None,
        }
    }
}

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Running,
    Paused,
    GameOver,
}

/// Cosmetic food variant; affects the glyph only, never behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    Apple,
    Cherry,
    Plum,
}

impl FoodKind {
    pub const ALL: [FoodKind; 3] = [FoodKind::Apple, FoodKind::Cherry, FoodKind::Plum];

    pub fn glyph(&self) -> char {
        match self {
            FoodKind::Apple => '@',
            FoodKind::Cherry => '%',
            FoodKind::Plum => '&',
        }
    }
}

/// Clamp a requested tick cadence into the supported range.
pub fn clamp_tick_ms(ms: u64) -> u64 {
    ms.clamp(TICK_MS_MIN, TICK_MS_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_deltas_are_unit_vectors() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn test_opposite_is_involutive() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert!(dir.is_opposite(dir.opposite()));
            assert!(!dir.is_opposite(dir));
        }
    }

    #[test]
    fn test_command_direction_payload() {
        assert_eq!(GameCommand::MoveUp.direction(), Some(Direction::Up));
        assert_eq!(GameCommand::MoveLeft.direction(), Some(Direction::Left));
        assert_eq!(GameCommand::TogglePause.direction(), None);
        assert_eq!(GameCommand::Restart.direction(), None);
    }

    #[test]
    fn test_clamp_tick_ms() {
        assert_eq!(clamp_tick_ms(10), TICK_MS_MIN);
        assert_eq!(clamp_tick_ms(1000), TICK_MS_MAX);
        assert_eq!(clamp_tick_ms(140), 140);
    }
}
