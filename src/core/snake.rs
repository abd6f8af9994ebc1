//! The snake entity: an ordered run of grid cells, head first.

use std::collections::VecDeque;

use crate::core::grid::Position;
use crate::types::Direction;

/// Snake body with the head at the front and the tail at the back.
///
/// Invariants (outside the tick engine's transient evaluation):
/// length >= 1 and all segments distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Build a snake of `length` segments with `head` in front, trailing
    /// away opposite to `direction`.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        assert!(length >= 1);
        let (dx, dy) = direction.delta();
        let mut body = VecDeque::with_capacity(length);
        for i in 0..length as i32 {
            body.push_back(head.offset(-dx * i, -dy * i));
        }
        Self { body }
    }

    /// Build directly from head-first segments (test setups, snapshots).
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty());
        Self {
            body: segments.into(),
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        *self.body.back().expect("snake length >= 1")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Head-first iteration over every segment.
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// True when `pos` lies on any segment, head included.
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// True when `pos` lies on any segment except the tail.
    ///
    /// The tail is the one cell that may legally be re-entered on a tick
    /// where it is vacated.
    pub fn contains_excluding_tail(&self, pos: Position) -> bool {
        let len = self.body.len();
        self.body.iter().take(len - 1).any(|&seg| seg == pos)
    }

    /// Advance by prepending `new_head`; keeps the tail when growing.
    pub fn slide(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }
}
