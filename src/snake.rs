//! The snake's body: an ordered segment sequence with head at the front.

use std::collections::VecDeque;

use crate::entities::{Coord, Direction, Grid};

/// Ordered body segments, head first, tail last.  Length is ≥ 1 for the
/// whole lifetime of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeBody {
    segments: VecDeque<Coord>,
}

impl SnakeBody {
    pub fn new(head: Coord) -> Self {
        let mut segments = VecDeque::new();
        segments.push_back(head);
        SnakeBody { segments }
    }

    pub fn head(&self) -> Coord {
        // segments is never empty; new() seeds one segment and advance()
        // only ever adds before removing.
        self.segments.front().copied().unwrap_or(Coord::new(0, 0))
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.segments.iter()
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.segments.iter().any(|&seg| seg == c)
    }

    /// Head position after moving one cell in `direction`.  Pure; the
    /// result may lie outside the grid.
    pub fn peek_next_head(&self, direction: Direction) -> Coord {
        let head = self.head();
        match direction {
            Direction::Up => Coord::new(head.x, head.y - 1),
            Direction::Down => Coord::new(head.x, head.y + 1),
            Direction::Left => Coord::new(head.x - 1, head.y),
            Direction::Right => Coord::new(head.x + 1, head.y),
        }
    }

    /// True if `candidate` is outside the grid or on an existing segment.
    /// O(n) in body length; n is bounded by the grid cell count.
    pub fn would_collide(&self, grid: Grid, candidate: Coord) -> bool {
        !grid.contains(candidate) || self.contains(candidate)
    }

    /// Push `candidate` as the new head.  Normal movement pops the tail;
    /// growth keeps it, so net length changes by 0 or +1.
    pub fn advance(&mut self, candidate: Coord, grows: bool) {
        self.segments.push_front(candidate);
        if !grows {
            self.segments.pop_back();
        }
    }
}
