//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle and a monotonic `now`) and
//! returns a brand-new `GameState`.  Side effects are limited to the
//! injected RNG; the clock is read by the caller so tests control time.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::entities::{Config, Direction, GameState, MAX_HEARTS};
use crate::spawn;

/// Invincibility window granted by the golden apple and by the hit grace
/// period, in seconds.
pub const INVINCIBILITY_SECS: u64 = 10;

/// Invincibility window granted by the superpower purchase, in seconds.
pub const SUPERPOWER_SECS: u64 = 20;

/// High-score points one extra heart costs on the pause screen.
pub const LIFE_COST: u32 = 5;

/// Hearts the superpower purchase costs.  The buy is refused unless the
/// player keeps at least one heart afterwards.
pub const SUPERPOWER_HEART_COST: u32 = 1;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh game for the given configuration.  The snake starts as a
/// single segment at the grid centre heading right; the apple is placed,
/// the bonus slots start empty and hearts are full.  `high_score` survives
/// resets — it is session state, not round state.
pub fn init_state(config: Config, high_score: u32, rng: &mut impl Rng) -> GameState {
    let grid = config.preset.grid();
    let body = crate::snake::SnakeBody::new(grid.center());
    let apple = spawn::place_apple(rng, grid, &body);
    GameState {
        grid,
        body,
        direction: Direction::Right,
        apple,
        special: None,
        pink: None,
        hearts: MAX_HEARTS,
        invincible_until: None,
        speed_boosted: false,
        score: 0,
        high_score,
        paused: false,
        game_over: false,
    }
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one tick.  No-op while paused or after game
/// over.
pub fn tick(state: &GameState, rng: &mut impl Rng, now: Instant) -> GameState {
    if state.game_over || state.paused {
        return state.clone();
    }

    let mut next = state.clone();

    // Expired invincibility also ends the superpower speed boost; the two
    // share one deadline so they cannot clobber each other.
    if let Some(until) = next.invincible_until {
        if now >= until {
            next.invincible_until = None;
            next.speed_boosted = false;
        }
    }

    let mut candidate = next.body.peek_next_head(next.direction);

    if next.invincible_until.is_some() {
        // Invincibility changes boundary semantics from collision to wrap,
        // and the snake passes through itself.
        candidate = next.grid.wrap(candidate);
    } else if next.body.would_collide(next.grid, candidate) {
        // Fatal-but-survived hit: the snake does not advance.
        return lose_heart(&next, now);
    }

    let ate_apple = candidate == next.apple;
    let ate_special = Some(candidate) == next.special;
    let ate_pink = Some(candidate) == next.pink;

    // Advance before respawning so placement avoids the new head too
    next.body.advance(candidate, ate_apple);

    if ate_apple {
        next.apple = spawn::place_apple(rng, next.grid, &next.body);
        // A fresh apple gives each *absent* bonus slot one new chance to
        // spawn; a present one is left untouched.
        if next.special.is_none() {
            next.special = spawn::place_special(rng, next.grid, &next.body, next.apple, next.pink);
        }
        if next.pink.is_none() {
            next.pink = spawn::place_pink(rng, next.grid, &next.body, next.apple, next.special);
        }
    } else if ate_special {
        next.invincible_until = Some(now + Duration::from_secs(INVINCIBILITY_SECS));
        next.special = spawn::place_special(rng, next.grid, &next.body, next.apple, next.pink);
    } else if ate_pink {
        if next.hearts < MAX_HEARTS {
            next.hearts += 1;
        }
        next.pink = spawn::place_pink(rng, next.grid, &next.body, next.apple, next.special);
    }

    next.score = next.body.len() as u32 - 1;
    if next.score > next.high_score {
        next.high_score = next.score;
    }

    next
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

/// Change heading, ignoring the 180°-reversal case.
pub fn change_direction(state: &GameState, direction: Direction) -> GameState {
    if direction == state.direction.opposite() {
        return state.clone();
    }
    GameState {
        direction,
        ..state.clone()
    }
}

/// Take one hit.  Invincibility suppresses the loss entirely.  Otherwise a
/// heart goes; at zero hearts the game ends, and any survived hit grants a
/// grace-period invincibility window so the player is not instantly
/// re-punished.
pub fn lose_heart(state: &GameState, now: Instant) -> GameState {
    if state.invincible(now) {
        return state.clone();
    }

    let mut next = state.clone();
    next.hearts = next.hearts.saturating_sub(1);
    if next.hearts == 0 {
        next.game_over = true;
        next.invincible_until = None;
        next.speed_boosted = false;
    } else {
        next.invincible_until = Some(now + Duration::from_secs(INVINCIBILITY_SECS));
    }
    next
}

// ── Pause-screen purchases ───────────────────────────────────────────────────

/// Trade 5 high-score points for one heart.  A no-op when the bank is too
/// small or hearts are already full.
pub fn buy_life(state: &GameState) -> GameState {
    if state.high_score < LIFE_COST || state.hearts >= MAX_HEARTS {
        return state.clone();
    }
    let mut next = state.clone();
    next.hearts += 1;
    next.high_score -= LIFE_COST;
    next
}

/// Trade one heart for a 20-second invincibility-plus-speed superpower.
/// Refused when it would leave the player without hearts.
pub fn buy_super_power(state: &GameState, now: Instant) -> GameState {
    if state.hearts <= SUPERPOWER_HEART_COST {
        return state.clone();
    }
    let mut next = state.clone();
    next.hearts -= SUPERPOWER_HEART_COST;
    next.invincible_until = Some(now + Duration::from_secs(SUPERPOWER_SECS));
    next.speed_boosted = true;
    next
}

// ── Effective speed ──────────────────────────────────────────────────────────

/// The tick period in force right now, derived from the configured base
/// speed and the superpower boost (30% faster while it lasts).  Single
/// source of truth — there is no separately mutated speed field.
pub fn effective_tick_period(config: Config, state: &GameState) -> Duration {
    let base = config.speed.millis();
    let millis = if state.speed_boosted {
        base * 7 / 10
    } else {
        base
    };
    Duration::from_millis(millis)
}
