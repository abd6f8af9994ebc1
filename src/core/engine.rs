//! Tick engine: the per-step transition function.
//!
//! [`advance`] consumes the current state plus the committed direction and
//! returns the next state or a collision signal. It performs no I/O and
//! mutates nothing but the injected random source; score, high score, and
//! game-over latching belong to the session controller.

use crate::core::grid::{Grid, Position};
use crate::core::rng::SimpleRng;
use crate::core::snake::Snake;
use crate::types::{Direction, FoodKind, FOOD_SAMPLE_RETRIES};

/// The single food item on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub pos: Position,
    pub kind: FoodKind,
}

/// Result of one tick of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Head advanced. `ate` marks a growth tick; `food` carries the
    /// replacement item, or `None` when the snake now covers the grid.
    Moved {
        snake: Snake,
        ate: bool,
        food: Option<Food>,
    },
    /// The new head landed on the snake's own body. Inputs are untouched.
    Collided,
}

/// Advance the snake one step in `direction`.
///
/// The new head wraps on the torus. The self-collision test skips the tail
/// segment only when the tail vacates this same step, i.e. on non-growth
/// ticks; on a growth tick the tail stays put and counts as a collision
/// target. Moving onto the vacating tail cell is therefore legal exactly
/// when the snake does not grow.
pub fn advance(
    grid: Grid,
    snake: &Snake,
    direction: Direction,
    food: Food,
    rng: &mut SimpleRng,
) -> Outcome {
    let new_head = grid.step(snake.head(), direction);
    let grow = new_head == food.pos;

    let collided = if grow {
        snake.contains(new_head)
    } else {
        snake.contains_excluding_tail(new_head)
    };
    if collided {
        return Outcome::Collided;
    }

    let mut next = snake.clone();
    next.slide(new_head, grow);

    let new_food = if grow { spawn_food(grid, rng, &next) } else { None };

    Outcome::Moved {
        snake: next,
        ate: grow,
        food: new_food,
    }
}

/// Place food on a uniformly random free cell.
///
/// Rejection sampling, bounded; past the retry budget a deterministic
/// row-major scan picks the first free cell so placement terminates even on
/// a nearly full grid. `None` means no free cell exists.
pub fn place_food(grid: Grid, rng: &mut SimpleRng, snake: &Snake) -> Option<Position> {
    if snake.len() >= grid.cell_count() {
        return None;
    }

    let size = grid.size() as u32;
    for _ in 0..FOOD_SAMPLE_RETRIES {
        let pos = Position::new(rng.next_range(size) as i32, rng.next_range(size) as i32);
        if !snake.contains(pos) {
            return Some(pos);
        }
    }

    // Fallback scan for the degenerate near-full grid.
    for y in 0..grid.size() {
        for x in 0..grid.size() {
            let pos = Position::new(x, y);
            if !snake.contains(pos) {
                return Some(pos);
            }
        }
    }
    None
}

/// Place food and draw its cosmetic kind from the same source.
pub fn spawn_food(grid: Grid, rng: &mut SimpleRng, snake: &Snake) -> Option<Food> {
    let pos = place_food(grid, rng, snake)?;
    let kind = FoodKind::ALL[rng.next_range(FoodKind::ALL.len() as u32) as usize];
    Some(Food { pos, kind })
}
