//! Input module - translates raw key events into abstract game commands.

pub mod map;

pub use map::{handle_key_event, handle_speed_key, should_quit};
