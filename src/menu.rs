//! Top-level mode state machine and menu handling.
//!
//! Every screen with selectable lines (main menu, options, game over) is
//! the same shape — a label list, a clamped selected index and an
//! enter-to-activate action — so the list handling lives in one small
//! `Menu` type and each screen only interprets the activated index.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::compute;
use crate::entities::{Config, Direction, GameState, GridPreset, Mode};
use crate::input::Key;

/// How long the game-over screen ignores input, so residual key presses
/// from the final moments cannot trigger an accidental instant retry.
pub const GAME_OVER_COOLDOWN: Duration = Duration::from_secs(3);

// ── Generic list menu ────────────────────────────────────────────────────────

/// A label list with a selected index.  Navigation clamps at the list
/// bounds — no wraparound.
#[derive(Clone, Debug)]
pub struct Menu {
    labels: &'static [&'static str],
    pub selected: usize,
}

impl Menu {
    pub fn new(labels: &'static [&'static str]) -> Self {
        Menu { labels, selected: 0 }
    }

    pub fn labels(&self) -> &[&'static str] {
        self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.labels.len() {
            self.selected += 1;
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

pub const MAIN_MENU: &[&str] = &["Start the Game", "Options", "Exit"];
pub const GAME_OVER_MENU: &[&str] = &["Retry", "Back to Menu"];
pub const OPTIONS_MENU: &[&str] = &[
    "Snake Speed",
    "Sound",
    "Grid Size: 30 x 20",
    "Grid Size: 40 x 25",
    "Back",
];

// ── Mode controller ──────────────────────────────────────────────────────────

/// Routes one key per tick to the simulation or to the active menu, and
/// owns the presentation configuration the simulation is reset with.
pub struct ModeController {
    pub mode: Mode,
    pub config: Config,
    pub main_menu: Menu,
    pub options_menu: Menu,
    pub game_over_menu: Menu,
    game_over_at: Option<Instant>,
}

impl ModeController {
    pub fn new(config: Config) -> Self {
        ModeController {
            mode: Mode::Menu,
            config,
            main_menu: Menu::new(MAIN_MENU),
            options_menu: Menu::new(OPTIONS_MENU),
            game_over_menu: Menu::new(GAME_OVER_MENU),
            game_over_at: None,
        }
    }

    /// True once the game-over cooldown has elapsed and the retry menu
    /// accepts input.
    pub fn game_over_menu_active(&self, now: Instant) -> bool {
        self.game_over_at
            .map_or(false, |at| now.saturating_duration_since(at) >= GAME_OVER_COOLDOWN)
    }

    /// Called after each simulation tick; captures the game-over timestamp
    /// for the input cooldown.
    pub fn notice_game_over(&mut self, game: &GameState, now: Instant) {
        if self.mode == Mode::Playing && game.game_over {
            self.mode = Mode::GameOver;
            self.game_over_at = Some(now);
            self.game_over_menu.reset();
        }
    }

    /// Every entry to `Playing` goes through a full reset — the only path
    /// that resumes a game in flight is the pause toggle.
    fn enter_playing(&mut self, game: &mut GameState, rng: &mut impl Rng) {
        *game = compute::init_state(self.config, game.high_score, rng);
        self.mode = Mode::Playing;
    }

    /// Dispatch one input symbol according to the current mode.
    pub fn handle_key(
        &mut self,
        key: Key,
        game: &mut GameState,
        rng: &mut impl Rng,
        now: Instant,
    ) {
        match self.mode {
            Mode::Menu => match key {
                Key::Up => self.main_menu.up(),
                Key::Down => self.main_menu.down(),
                Key::Enter => match self.main_menu.selected {
                    0 => self.enter_playing(game, rng),
                    1 => {
                        self.options_menu.reset();
                        self.mode = Mode::Options;
                    }
                    _ => self.mode = Mode::Exit,
                },
                _ => {}
            },

            Mode::Playing => match key {
                Key::Up => *game = compute::change_direction(game, Direction::Up),
                Key::Down => *game = compute::change_direction(game, Direction::Down),
                Key::Left => *game = compute::change_direction(game, Direction::Left),
                Key::Right => *game = compute::change_direction(game, Direction::Right),
                Key::Space => {
                    game.paused = true;
                    self.mode = Mode::Paused;
                }
                _ => {}
            },

            Mode::Paused => match key {
                Key::Space => {
                    game.paused = false;
                    self.mode = Mode::Playing;
                }
                Key::One => *game = compute::buy_life(game),
                Key::Two => *game = compute::buy_super_power(game, now),
                _ => {}
            },

            Mode::Options => match key {
                Key::Up => self.options_menu.up(),
                Key::Down => self.options_menu.down(),
                Key::Enter => match self.options_menu.selected {
                    0 => self.config.speed = self.config.speed.cycled(),
                    1 => self.config.sound = !self.config.sound,
                    2 => self.apply_preset(GridPreset::Standard, game, rng),
                    3 => self.apply_preset(GridPreset::Large, game, rng),
                    _ => {
                        self.main_menu.reset();
                        self.mode = Mode::Menu;
                    }
                },
                _ => {}
            },

            Mode::GameOver => {
                if !self.game_over_menu_active(now) {
                    return;
                }
                match key {
                    Key::Up => self.game_over_menu.up(),
                    Key::Down => self.game_over_menu.down(),
                    Key::Enter => match self.game_over_menu.selected {
                        0 => self.enter_playing(game, rng),
                        _ => {
                            self.main_menu.reset();
                            self.mode = Mode::Menu;
                        }
                    },
                    _ => {}
                }
            }

            Mode::Exit => {}
        }
    }

    /// Grid-size options reset the simulation in place: a dimension change
    /// invalidates in-flight state.  Mode is unchanged — the player is
    /// still looking at the options screen.
    fn apply_preset(&mut self, preset: GridPreset, game: &mut GameState, rng: &mut impl Rng) {
        self.config.preset = preset;
        *game = compute::init_state(self.config, game.high_score, rng);
    }
}
