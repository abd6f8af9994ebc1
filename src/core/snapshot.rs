//! Read-only snapshot of a session, consumed by renderers.

use crate::core::engine::Food;
use crate::core::grid::Position;
use crate::types::{Direction, SessionPhase, GRID_SIZE};

/// Everything a renderer needs, detached from the live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Snake segments, head first.
    pub snake: Vec<Position>,
    /// `None` only when the snake covers the whole grid.
    pub food: Option<Food>,
    pub phase: SessionPhase,
    pub score: u32,
    pub high_score: u32,
    /// Direction applied on the most recent tick.
    pub direction: Direction,
    pub grid_size: i32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake: Vec::new(),
            food: None,
            phase: SessionPhase::Running,
            score: 0,
            high_score: 0,
            direction: Direction::Right,
            grid_size: GRID_SIZE,
        }
    }
}
