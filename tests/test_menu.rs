use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use snake_game::compute;
use snake_game::entities::*;
use snake_game::input::Key;
use snake_game::menu::{Menu, ModeController, GAME_OVER_COOLDOWN, MAIN_MENU, OPTIONS_MENU};

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn fresh() -> (ModeController, GameState, StdRng) {
    let mut rng = seeded_rng();
    let ctrl = ModeController::new(Config::default());
    let game = compute::init_state(ctrl.config, 0, &mut rng);
    (ctrl, game, rng)
}

// ── Menu navigation ───────────────────────────────────────────────────────────

#[test]
fn navigation_clamps_at_both_ends() {
    let mut menu = Menu::new(MAIN_MENU);
    menu.up();
    assert_eq!(menu.selected, 0); // no wraparound at the top
    for _ in 0..10 {
        menu.down();
    }
    assert_eq!(menu.selected, MAIN_MENU.len() - 1); // clamped at the bottom
    menu.down();
    assert_eq!(menu.selected, MAIN_MENU.len() - 1);
}

#[test]
fn controller_starts_in_menu_mode() {
    let (ctrl, _, _) = fresh();
    assert_eq!(ctrl.mode, Mode::Menu);
    assert_eq!(ctrl.main_menu.selected, 0);
}

// ── Menu → Playing / Options / Exit ──────────────────────────────────────────

#[test]
fn start_enters_playing_with_a_reset_game() {
    let (mut ctrl, mut game, mut rng) = fresh();
    // Dirty the game so the reset is observable
    game.hearts = 1;
    game.game_over = true;
    let now = Instant::now();

    ctrl.handle_key(Key::Enter, &mut game, &mut rng, now);
    assert_eq!(ctrl.mode, Mode::Playing);
    assert_eq!(game.hearts, MAX_HEARTS);
    assert!(!game.game_over);
    assert_eq!(game.body.len(), 1);
    assert_eq!(game.body.head(), game.grid.center());
}

#[test]
fn reset_preserves_the_high_score() {
    let (mut ctrl, mut game, mut rng) = fresh();
    game.high_score = 9;
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, Instant::now());
    assert_eq!(game.high_score, 9);
}

#[test]
fn second_entry_selects_options() {
    let (mut ctrl, mut game, mut rng) = fresh();
    let now = Instant::now();
    ctrl.handle_key(Key::Down, &mut game, &mut rng, now);
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, now);
    assert_eq!(ctrl.mode, Mode::Options);
    assert_eq!(ctrl.options_menu.selected, 0);
}

#[test]
fn third_entry_exits() {
    let (mut ctrl, mut game, mut rng) = fresh();
    let now = Instant::now();
    ctrl.handle_key(Key::Down, &mut game, &mut rng, now);
    ctrl.handle_key(Key::Down, &mut game, &mut rng, now);
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, now);
    assert_eq!(ctrl.mode, Mode::Exit);
}

// ── Pause toggle ──────────────────────────────────────────────────────────────

#[test]
fn space_toggles_pause_without_resetting() {
    let (mut ctrl, mut game, mut rng) = fresh();
    let now = Instant::now();
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, now); // start
    game = compute::tick(&game, &mut rng, now);
    let body_before = game.body.clone();

    ctrl.handle_key(Key::Space, &mut game, &mut rng, now);
    assert_eq!(ctrl.mode, Mode::Paused);
    assert!(game.paused);

    ctrl.handle_key(Key::Space, &mut game, &mut rng, now);
    assert_eq!(ctrl.mode, Mode::Playing);
    assert!(!game.paused);
    assert_eq!(game.body, body_before); // pause is the one resume path
}

#[test]
fn pause_screen_routes_purchases() {
    let (mut ctrl, mut game, mut rng) = fresh();
    let now = Instant::now();
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, now);
    ctrl.handle_key(Key::Space, &mut game, &mut rng, now);

    game.high_score = 10;
    game.hearts = 1;
    ctrl.handle_key(Key::One, &mut game, &mut rng, now); // buy a life
    assert_eq!(game.hearts, 2);
    assert_eq!(game.high_score, 5);

    ctrl.handle_key(Key::Two, &mut game, &mut rng, now); // buy a superpower
    assert_eq!(game.hearts, 1);
    assert!(game.speed_boosted);
    assert!(game.invincible(now));
}

#[test]
fn direction_keys_are_ignored_while_paused() {
    let (mut ctrl, mut game, mut rng) = fresh();
    let now = Instant::now();
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, now);
    ctrl.handle_key(Key::Space, &mut game, &mut rng, now);
    ctrl.handle_key(Key::Up, &mut game, &mut rng, now);
    assert_eq!(game.direction, Direction::Right);
}

// ── Playing input routing ─────────────────────────────────────────────────────

#[test]
fn direction_keys_steer_the_snake() {
    let (mut ctrl, mut game, mut rng) = fresh();
    let now = Instant::now();
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, now);
    ctrl.handle_key(Key::Up, &mut game, &mut rng, now);
    assert_eq!(game.direction, Direction::Up);
    // Reversal rejected by the simulation
    ctrl.handle_key(Key::Down, &mut game, &mut rng, now);
    assert_eq!(game.direction, Direction::Up);
}

// ── Options screen ────────────────────────────────────────────────────────────

fn open_options(ctrl: &mut ModeController, game: &mut GameState, rng: &mut StdRng) {
    let now = Instant::now();
    ctrl.handle_key(Key::Down, game, rng, now);
    ctrl.handle_key(Key::Enter, game, rng, now);
    assert_eq!(ctrl.mode, Mode::Options);
}

#[test]
fn speed_cycles_normal_slow_fast() {
    let (mut ctrl, mut game, mut rng) = fresh();
    open_options(&mut ctrl, &mut game, &mut rng);
    let now = Instant::now();

    assert_eq!(ctrl.config.speed, Speed::Normal);
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, now);
    assert_eq!(ctrl.config.speed, Speed::Slow);
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, now);
    assert_eq!(ctrl.config.speed, Speed::Fast);
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, now);
    assert_eq!(ctrl.config.speed, Speed::Normal);
}

#[test]
fn sound_toggles_on_its_line() {
    let (mut ctrl, mut game, mut rng) = fresh();
    open_options(&mut ctrl, &mut game, &mut rng);
    let now = Instant::now();

    ctrl.handle_key(Key::Down, &mut game, &mut rng, now);
    assert!(ctrl.config.sound);
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, now);
    assert!(!ctrl.config.sound);
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, now);
    assert!(ctrl.config.sound);
}

#[test]
fn grid_preset_resets_the_simulation_in_place() {
    let (mut ctrl, mut game, mut rng) = fresh();
    open_options(&mut ctrl, &mut game, &mut rng);
    let now = Instant::now();

    for _ in 0..3 {
        ctrl.handle_key(Key::Down, &mut game, &mut rng, now); // "Grid Size: 40 x 25"
    }
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, now);
    assert_eq!(ctrl.config.preset, GridPreset::Large);
    assert_eq!(game.grid, Grid::new(40, 25));
    assert_eq!(game.body.head(), Coord::new(20, 12));
    assert_eq!(ctrl.mode, Mode::Options); // still on the options screen
}

#[test]
fn back_returns_to_the_main_menu() {
    let (mut ctrl, mut game, mut rng) = fresh();
    open_options(&mut ctrl, &mut game, &mut rng);
    let now = Instant::now();

    for _ in 0..OPTIONS_MENU.len() {
        ctrl.handle_key(Key::Down, &mut game, &mut rng, now);
    }
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, now);
    assert_eq!(ctrl.mode, Mode::Menu);
    assert_eq!(ctrl.main_menu.selected, 0);
}

// ── Game over flow ────────────────────────────────────────────────────────────

fn drive_to_game_over(at: Instant) -> (ModeController, GameState, StdRng) {
    let (mut ctrl, mut game, mut rng) = fresh();
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, at);
    game.game_over = true;
    ctrl.notice_game_over(&game, at);
    assert_eq!(ctrl.mode, Mode::GameOver);
    (ctrl, game, rng)
}

#[test]
fn game_over_ignores_input_during_the_cooldown() {
    let t0 = Instant::now();
    let (mut ctrl, mut game, mut rng) = drive_to_game_over(t0);

    let early = t0 + Duration::from_secs(1);
    assert!(!ctrl.game_over_menu_active(early));
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, early);
    assert_eq!(ctrl.mode, Mode::GameOver); // residual key press discarded
}

#[test]
fn retry_after_the_cooldown_restarts_the_game() {
    let t0 = Instant::now();
    let (mut ctrl, mut game, mut rng) = drive_to_game_over(t0);

    let later = t0 + GAME_OVER_COOLDOWN;
    assert!(ctrl.game_over_menu_active(later));
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, later); // "Retry"
    assert_eq!(ctrl.mode, Mode::Playing);
    assert!(!game.game_over);
    assert_eq!(game.hearts, MAX_HEARTS);
}

#[test]
fn back_to_menu_after_the_cooldown() {
    let t0 = Instant::now();
    let (mut ctrl, mut game, mut rng) = drive_to_game_over(t0);

    let later = t0 + Duration::from_secs(4);
    ctrl.handle_key(Key::Down, &mut game, &mut rng, later);
    ctrl.handle_key(Key::Enter, &mut game, &mut rng, later); // "Back to Menu"
    assert_eq!(ctrl.mode, Mode::Menu);
}

#[test]
fn notice_game_over_only_fires_from_playing() {
    let (mut ctrl, mut game, _) = fresh();
    game.game_over = true;
    ctrl.notice_game_over(&game, Instant::now()); // still in the menu
    assert_eq!(ctrl.mode, Mode::Menu);
}
