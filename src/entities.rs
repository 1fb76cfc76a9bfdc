//! All game entity types — pure data, no logic beyond bounds checks.

use std::time::Instant;

use crate::snake::SnakeBody;

/// Maximum number of hearts the player can hold.
pub const MAX_HEARTS: u32 = 3;

// ── Grid geometry ─────────────────────────────────────────────────────────────

/// A position in grid units (cells, not pixels).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The 180°-opposite heading — used to reject instant reversals.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Play-field dimensions and coordinate validity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Grid { width, height }
    }

    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    /// Modular wrap on both axes: an out-of-bounds coordinate teleports to
    /// the opposite edge.
    pub fn wrap(&self, c: Coord) -> Coord {
        Coord {
            x: c.x.rem_euclid(self.width),
            y: c.y.rem_euclid(self.height),
        }
    }

    pub fn center(&self) -> Coord {
        Coord::new(self.width / 2, self.height / 2)
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// Base snake speed: the tick period in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speed {
    Slow,
    Normal,
    Fast,
}

impl Speed {
    pub fn millis(self) -> u64 {
        match self {
            Speed::Slow => 200,
            Speed::Normal => 100,
            Speed::Fast => 50,
        }
    }

    /// Cycle order used by the options menu: Normal → Slow → Fast → Normal.
    pub fn cycled(self) -> Speed {
        match self {
            Speed::Normal => Speed::Slow,
            Speed::Slow => Speed::Fast,
            Speed::Fast => Speed::Normal,
        }
    }
}

/// Selectable play-field sizes.  Switching presets invalidates in-flight
/// state, so the simulation is reset when one is activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridPreset {
    Standard,
    Large,
}

impl GridPreset {
    pub fn grid(self) -> Grid {
        match self {
            GridPreset::Standard => Grid::new(30, 20),
            GridPreset::Large => Grid::new(40, 25),
        }
    }
}

/// Presentation parameters owned by the mode controller and passed by value
/// into the simulation on reset.  Not simulation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub preset: GridPreset,
    pub speed: Speed,
    pub sound: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            preset: GridPreset::Standard,
            speed: Speed::Normal,
            sound: true,
        }
    }
}

// ── Top-level mode ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Playing,
    Paused,
    Options,
    GameOver,
    Exit,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub body: SnakeBody,
    pub direction: Direction,
    /// The apple — always present somewhere on the grid.
    pub apple: Coord,
    /// Golden apple — grants invincibility; probabilistically present.
    pub special: Option<Coord>,
    /// Pink apple — grants an extra heart; probabilistically present.
    pub pink: Option<Coord>,
    pub hearts: u32,
    /// Monotonic deadline while invincibility (golden apple, hit grace
    /// period or superpower) is active.
    pub invincible_until: Option<Instant>,
    /// Set by the superpower purchase; cleared together with invincibility.
    pub speed_boosted: bool,
    /// Derived each tick: body length − 1.
    pub score: u32,
    pub high_score: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameState {
    pub fn invincible(&self, now: Instant) -> bool {
        self.invincible_until.map_or(false, |until| now < until)
    }

    /// Whole seconds of invincibility left, for the HUD.
    pub fn invincible_secs_remaining(&self, now: Instant) -> u64 {
        self.invincible_until
            .map_or(0, |until| until.saturating_duration_since(now).as_secs())
    }
}
