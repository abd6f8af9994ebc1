//! Core module - pure game logic with no terminal or I/O dependencies
//!
//! This module contains the grid model, the tick engine, and the session
//! controller. The only outward edge is the injected score store.

pub mod config;
pub mod engine;
pub mod grid;
pub mod rng;
pub mod session;
pub mod snake;
pub mod snapshot;

// Re-export commonly used types
pub use config::GameConfig;
pub use engine::{advance, place_food, spawn_food, Food, Outcome};
pub use grid::{Grid, Position};
pub use rng::SimpleRng;
pub use session::{Session, TickOutcome};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
