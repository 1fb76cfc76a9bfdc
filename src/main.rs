use std::io::{stdout, BufWriter, Write};
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use snake_game::compute;
use snake_game::display;
use snake_game::entities::{Config, Mode};
use snake_game::input;
use snake_game::menu::ModeController;
use snake_game::persistence;

fn main() -> std::io::Result<()> {
    // Logger before raw mode; silent unless RUST_LOG is set
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let result = run(&mut out);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

/// Single-threaded, tick-driven loop: one input poll, one simulation
/// update and one render pass per iteration.  The effective tick period
/// doubles as the input-wait timeout, so a faster snake shortens the
/// input-poll window.
fn run<W: Write>(out: &mut W) -> std::io::Result<()> {
    let mut rng = thread_rng();

    let score_path = persistence::default_path();
    let high_score = persistence::load_high_score(&score_path);

    let mut ctrl = ModeController::new(Config::default());
    let mut game = compute::init_state(ctrl.config, high_score, &mut rng);

    while ctrl.mode != Mode::Exit {
        let period = compute::effective_tick_period(ctrl.config, &game);

        if event::poll(period)? {
            if let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                modifiers,
                ..
            }) = event::read()?
            {
                if code == crossterm::event::KeyCode::Char('c')
                    && modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                if let Some(key) = input::map_key(code) {
                    ctrl.handle_key(key, &mut game, &mut rng, Instant::now());
                }
            }
        }

        if ctrl.mode == Mode::Playing {
            let prev_high = game.high_score;
            game = compute::tick(&game, &mut rng, Instant::now());
            // Write-through: every improvement hits the file immediately
            if game.high_score > prev_high {
                persistence::save_high_score(&score_path, game.high_score);
            }
            ctrl.notice_game_over(&game, Instant::now());
        }

        display::render(out, &game, &ctrl, Instant::now())?;
    }

    Ok(())
}
