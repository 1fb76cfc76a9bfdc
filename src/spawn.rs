//! Collision-aware random item placement.
//!
//! All randomness comes through an injected `Rng` handle so tests can use a
//! seeded generator.  Placement samples uniformly from the precomputed set
//! of free cells instead of re-rolling until a free cell turns up, so it
//! terminates even on a nearly-full grid.

use log::warn;
use rand::Rng;

use crate::entities::{Coord, Grid};
use crate::snake::SnakeBody;

/// Chance that the golden apple respawns at all after being consumed (or
/// after an apple-eat event finds its slot empty).
pub const SPECIAL_SPAWN_CHANCE: f64 = 0.5;

/// Same, for the pink apple.
pub const PINK_SPAWN_CHANCE: f64 = 0.2;

/// Every grid cell not occupied by the snake and not in `avoid`.
fn free_cells(grid: Grid, body: &SnakeBody, avoid: &[Coord]) -> Vec<Coord> {
    let mut cells = Vec::with_capacity(grid.cell_count());
    for y in 0..grid.height {
        for x in 0..grid.width {
            let c = Coord::new(x, y);
            if !body.contains(c) && !avoid.contains(&c) {
                cells.push(c);
            }
        }
    }
    cells
}

/// Uniformly random free cell, or `None` when the snake and `avoid` cover
/// the whole grid.
pub fn random_free_cell(
    rng: &mut impl Rng,
    grid: Grid,
    body: &SnakeBody,
    avoid: &[Coord],
) -> Option<Coord> {
    let cells = free_cells(grid, body, avoid);
    if cells.is_empty() {
        return None;
    }
    Some(cells[rng.gen_range(0..cells.len())])
}

/// Place the apple.  Always yields a coordinate: when no free cell exists
/// (snake covers the grid) it degrades to the grid centre.
pub fn place_apple(rng: &mut impl Rng, grid: Grid, body: &SnakeBody) -> Coord {
    match random_free_cell(rng, grid, body, &[]) {
        Some(c) => c,
        None => {
            warn!("no free cell for the apple; falling back to the grid centre");
            grid.center()
        }
    }
}

/// Probability-gated placement shared by the golden and pink apples: with
/// probability `1 - chance` the slot stays empty; otherwise a free cell
/// avoiding the snake and `avoid` is chosen.  An exhausted grid also yields
/// `None` — a recoverable no-op, not an error.
pub fn place_gated(
    rng: &mut impl Rng,
    chance: f64,
    grid: Grid,
    body: &SnakeBody,
    avoid: &[Coord],
) -> Option<Coord> {
    if !rng.gen_bool(chance) {
        return None;
    }
    let cell = random_free_cell(rng, grid, body, avoid);
    if cell.is_none() {
        warn!("no free cell for a bonus item; leaving the slot empty");
    }
    cell
}

/// Golden apple placement — avoids the apple and the pink apple.
pub fn place_special(
    rng: &mut impl Rng,
    grid: Grid,
    body: &SnakeBody,
    apple: Coord,
    pink: Option<Coord>,
) -> Option<Coord> {
    let mut avoid = vec![apple];
    if let Some(p) = pink {
        avoid.push(p);
    }
    place_gated(rng, SPECIAL_SPAWN_CHANCE, grid, body, &avoid)
}

/// Pink apple placement — avoids the apple and the golden apple.
pub fn place_pink(
    rng: &mut impl Rng,
    grid: Grid,
    body: &SnakeBody,
    apple: Coord,
    special: Option<Coord>,
) -> Option<Coord> {
    let mut avoid = vec![apple];
    if let Some(s) = special {
        avoid.push(s);
    }
    place_gated(rng, PINK_SPAWN_CHANCE, grid, body, &avoid)
}
