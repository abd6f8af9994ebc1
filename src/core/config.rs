use serde::{Deserialize, Serialize};

use crate::types::{
    clamp_tick_ms, DEFAULT_TICK_MS, FOOD_REWARD, GRID_SIZE, INITIAL_SNAKE_LENGTH,
};

/// Configuration for a game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square toroidal grid
    pub grid_size: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Tick cadence in milliseconds (clamped to the supported range)
    pub tick_ms: u64,
    /// Score awarded per food item
    pub food_reward: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_snake_length: INITIAL_SNAKE_LENGTH,
            tick_ms: DEFAULT_TICK_MS,
            food_reward: FOOD_REWARD,
        }
    }
}

impl GameConfig {
    /// Config with its tick cadence clamped into the supported range.
    pub fn normalized(mut self) -> Self {
        self.tick_ms = clamp_tick_ms(self.tick_ms);
        self
    }
}
