//! Terminal snake on a bounded toroidal grid.
//!
//! The crate is split the same way the game is:
//!
//! - [`core`]: the deterministic tick-driven engine — grid model, snake,
//!   food placement, and the session state machine. Pure logic, no I/O
//!   beyond the injected score store.
//! - [`store`]: the high-score persistence gateway.
//! - [`input`]: raw key events → abstract game commands.
//! - [`term`]: framebuffer renderer and the snapshot → frame view.
//!
//! # Example
//!
//! ```
//! use tui_snake::core::{GameConfig, Session, TickOutcome};
//! use tui_snake::store::MemoryScoreStore;
//! use tui_snake::types::Direction;
//!
//! let mut session =
//!     Session::new(GameConfig::default(), 12345, MemoryScoreStore::default()).unwrap();
//!
//! session.propose_direction(Direction::Up);
//! let outcome = session.tick().unwrap();
//! assert!(matches!(outcome, TickOutcome::Moved { .. }));
//! assert_eq!(session.committed_direction(), Direction::Up);
//! ```
//!
//! One tick advances the snake exactly one cell; the external scheduler in
//! `main.rs` decides the cadence (clamped to 60–220 ms and adjustable while
//! the game runs).

pub mod core;
pub mod input;
pub mod store;
pub mod term;
pub mod types;
