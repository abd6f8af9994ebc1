//! Toroidal grid model: positions and wrap-around arithmetic.
//!
//! Pure data plus pure helpers; the grid has no mutable state of its own.

use crate::types::Direction;

/// A position on the game grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset position by delta (no wrapping; see [`Grid::wrap`]).
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Offset position one step in a direction (no wrapping).
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

/// A square toroidal coordinate space of side `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Grid {
    pub fn new(size: i32) -> Self {
        debug_assert!(size > 0);
        Self { size }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.size * self.size) as usize
    }

    /// Wrap a position onto the torus, modulo size on each axis independently.
    pub fn wrap(&self, pos: Position) -> Position {
        Position {
            x: pos.x.rem_euclid(self.size),
            y: pos.y.rem_euclid(self.size),
        }
    }

    /// One wrapped step from `pos` in `direction`.
    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        self.wrap(pos.step(direction))
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size && pos.y >= 0 && pos.y < self.size
    }

    /// Center cell, used as the spawn point.
    pub fn center(&self) -> Position {
        Position::new(self.size / 2, self.size / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_offset() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.offset(1, 0), Position::new(6, 5));
        assert_eq!(pos.offset(-1, 0), Position::new(4, 5));
        assert_eq!(pos.offset(0, 1), Position::new(5, 6));
        assert_eq!(pos.offset(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_wrap_stays_in_bounds_for_all_edges() {
        let grid = Grid::new(20);
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            for x in 0..20 {
                for y in 0..20 {
                    let next = grid.step(Position::new(x, y), dir);
                    assert!(grid.contains(next), "{:?} from ({x},{y}) left the grid", dir);
                }
            }
        }
    }

    #[test]
    fn test_wrap_high_edge_to_zero() {
        let grid = Grid::new(20);
        assert_eq!(
            grid.step(Position::new(19, 10), Direction::Right),
            Position::new(0, 10)
        );
        assert_eq!(
            grid.step(Position::new(10, 19), Direction::Down),
            Position::new(10, 0)
        );
    }

    #[test]
    fn test_wrap_low_edge_to_high() {
        let grid = Grid::new(20);
        assert_eq!(
            grid.step(Position::new(0, 10), Direction::Left),
            Position::new(19, 10)
        );
        assert_eq!(
            grid.step(Position::new(10, 0), Direction::Up),
            Position::new(10, 19)
        );
    }

    #[test]
    fn test_wrap_is_identity_inside_bounds() {
        let grid = Grid::new(20);
        let pos = Position::new(7, 3);
        assert_eq!(grid.wrap(pos), pos);
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(20).center(), Position::new(10, 10));
        assert_eq!(Grid::new(5).center(), Position::new(2, 2));
    }
}
