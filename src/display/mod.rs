//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game and controller state.  No game logic is performed; this module
//! only translates state into terminal commands.

use std::io::Write;
use std::time::Instant;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::{GameState, Mode, Speed};
use crate::menu::{Menu, ModeController};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HEARTS: Color = Color::Magenta;
const C_SNAKE: Color = Color::Green;
const C_SNAKE_INVINCIBLE: Color = Color::Yellow;
const C_APPLE: Color = Color::Red;
const C_SPECIAL: Color = Color::Yellow;
const C_PINK: Color = Color::Magenta;
const C_SELECTED: Color = Color::Green;
const C_UNSELECTED: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// Screen column/row where grid cell (0, 0) is drawn — leaves room for the
/// HUD row and the top border.
const FIELD_LEFT: u16 = 1;
const FIELD_TOP: u16 = 2;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for the current mode.
pub fn render<W: Write>(
    out: &mut W,
    game: &GameState,
    ctrl: &ModeController,
    now: Instant,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match ctrl.mode {
        Mode::Menu => draw_main_menu(out, ctrl, game)?,
        Mode::Options => draw_options(out, ctrl)?,
        Mode::Playing => {
            draw_play_field(out, game, now)?;
        }
        Mode::Paused => {
            draw_play_field(out, game, now)?;
            draw_pause_overlay(out, game)?;
        }
        Mode::GameOver => {
            draw_game_over(out, game, ctrl, now)?;
        }
        Mode::Exit => {}
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

// ── Play field ────────────────────────────────────────────────────────────────

fn cell_to_screen(x: i32, y: i32) -> (u16, u16) {
    (FIELD_LEFT + x as u16, FIELD_TOP + y as u16)
}

fn draw_play_field<W: Write>(out: &mut W, game: &GameState, now: Instant) -> std::io::Result<()> {
    draw_hud(out, game, now)?;
    draw_border(out, game)?;

    // Apple first so the snake is drawn on top when they overlap
    out.queue(style::SetForegroundColor(C_APPLE))?;
    let (ax, ay) = cell_to_screen(game.apple.x, game.apple.y);
    out.queue(cursor::MoveTo(ax, ay))?;
    out.queue(Print("●"))?;

    if let Some(special) = game.special {
        out.queue(style::SetForegroundColor(C_SPECIAL))?;
        let (sx, sy) = cell_to_screen(special.x, special.y);
        out.queue(cursor::MoveTo(sx, sy))?;
        out.queue(Print("★"))?;
    }

    if let Some(pink) = game.pink {
        out.queue(style::SetForegroundColor(C_PINK))?;
        let (px, py) = cell_to_screen(pink.x, pink.y);
        out.queue(cursor::MoveTo(px, py))?;
        out.queue(Print("♥"))?;
    }

    let snake_color = if game.invincible(now) {
        C_SNAKE_INVINCIBLE
    } else {
        C_SNAKE
    };
    out.queue(style::SetForegroundColor(snake_color))?;
    for (i, segment) in game.body.iter().enumerate() {
        let (sx, sy) = cell_to_screen(segment.x, segment.y);
        out.queue(cursor::MoveTo(sx, sy))?;
        out.queue(Print(if i == 0 { "█" } else { "▓" }))?;
    }

    draw_controls_hint(out, game)?;
    Ok(())
}

fn draw_border<W: Write>(out: &mut W, game: &GameState) -> std::io::Result<()> {
    let w = game.grid.width as usize;
    let top = FIELD_TOP - 1;
    let bottom = FIELD_TOP + game.grid.height as u16;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, top))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in FIELD_TOP..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(FIELD_LEFT + game.grid.width as u16, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, game: &GameState, now: Instant) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", game.score)))?;

    let hearts: String = "♥".repeat(game.hearts as usize);
    let hx = (game.grid.width as u16 / 2).saturating_sub(1);
    out.queue(cursor::MoveTo(hx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HEARTS))?;
    out.queue(Print(&hearts))?;

    let hs_text = format!("Best: {}", game.high_score);
    let rx = (game.grid.width as u16 + 2).saturating_sub(hs_text.chars().count() as u16);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&hs_text))?;

    let remaining = game.invincible_secs_remaining(now);
    if remaining > 0 {
        let row = FIELD_TOP + game.grid.height as u16 + 1;
        out.queue(cursor::MoveTo(1, row))?;
        out.queue(style::SetForegroundColor(C_SNAKE_INVINCIBLE))?;
        out.queue(Print(format!("Invincible: {}s", remaining)))?;
    }

    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, game: &GameState) -> std::io::Result<()> {
    let row = FIELD_TOP + game.grid.height as u16 + 2;
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑ ↓ ← → / W A S D : Steer   SPACE : Pause"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn overlay_lines<W: Write>(
    out: &mut W,
    game: &GameState,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = FIELD_LEFT + game.grid.width as u16 / 2;
    let start = FIELD_TOP + (game.grid.height as u16 / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_pause_overlay<W: Write>(out: &mut W, game: &GameState) -> std::io::Result<()> {
    overlay_lines(
        out,
        game,
        &[
            ("╔═══════════════╗", Color::White),
            ("║     PAUSE     ║", Color::White),
            ("╚═══════════════╝", Color::White),
            ("SPACE - Resume", Color::White),
            ("1 - Buy a Life (5 points)", C_HINT),
            ("2 - Buy a Super Power (1 heart)", C_HINT),
        ],
    )
}

fn draw_game_over<W: Write>(
    out: &mut W,
    game: &GameState,
    ctrl: &ModeController,
    now: Instant,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", game.score);
    overlay_lines(
        out,
        game,
        &[
            ("╔══════════════════╗", Color::Red),
            ("║    GAME  OVER    ║", Color::Red),
            ("╚══════════════════╝", Color::Red),
            (&score_line, Color::Yellow),
        ],
    )?;

    // The retry menu only appears once the input cooldown has elapsed
    if ctrl.game_over_menu_active(now) {
        let start = FIELD_TOP + game.grid.height as u16 / 2 + 3;
        draw_menu_list(out, &ctrl.game_over_menu, FIELD_LEFT + game.grid.width as u16 / 2 - 6, start)?;
    }
    Ok(())
}

// ── Menu screens ──────────────────────────────────────────────────────────────

fn draw_menu_list<W: Write>(out: &mut W, menu: &Menu, col: u16, row: u16) -> std::io::Result<()> {
    for (i, label) in menu.labels().iter().enumerate() {
        let color = if i == menu.selected { C_SELECTED } else { C_UNSELECTED };
        let marker = if i == menu.selected { "▶ " } else { "  " };
        out.queue(cursor::MoveTo(col, row + i as u16))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(format!("{}{}", marker, label)))?;
    }
    Ok(())
}

fn draw_main_menu<W: Write>(
    out: &mut W,
    ctrl: &ModeController,
    game: &GameState,
) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  S N A K E  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    if game.high_score > 0 {
        let hs_str = format!("Best Score: {}", game.high_score);
        out.queue(cursor::MoveTo(
            cx.saturating_sub(hs_str.chars().count() as u16 / 2),
            cy.saturating_sub(4),
        ))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(&hs_str))?;
    }

    draw_menu_list(out, &ctrl.main_menu, cx.saturating_sub(8), cy.saturating_sub(2))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(16), cy + 3))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑ ↓ / W S : Navigate   ENTER : Select"))?;
    Ok(())
}

fn draw_options<W: Write>(out: &mut W, ctrl: &ModeController) -> std::io::Result<()> {
    let col = 4;
    let row = 3;
    draw_menu_list(out, &ctrl.options_menu, col, row)?;

    // Inline value for the speed line
    let speeds: &[(Speed, &str)] = &[
        (Speed::Slow, "Slow"),
        (Speed::Normal, "Normal"),
        (Speed::Fast, "Fast"),
    ];
    let mut x = col + 20;
    for (i, (speed, label)) in speeds.iter().enumerate() {
        if i > 0 {
            out.queue(cursor::MoveTo(x, row))?;
            out.queue(style::SetForegroundColor(C_UNSELECTED))?;
            out.queue(Print("| "))?;
            x += 2;
        }
        let color = if ctrl.config.speed == *speed { C_SELECTED } else { C_UNSELECTED };
        out.queue(cursor::MoveTo(x, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(*label))?;
        x += label.chars().count() as u16 + 1;
    }

    // Inline value for the sound line
    let on_color = if ctrl.config.sound { C_SELECTED } else { C_UNSELECTED };
    let off_color = if ctrl.config.sound { C_UNSELECTED } else { C_SELECTED };
    out.queue(cursor::MoveTo(col + 20, row + 1))?;
    out.queue(style::SetForegroundColor(on_color))?;
    out.queue(Print("On"))?;
    out.queue(cursor::MoveTo(col + 23, row + 1))?;
    out.queue(style::SetForegroundColor(C_UNSELECTED))?;
    out.queue(Print("|"))?;
    out.queue(cursor::MoveTo(col + 25, row + 1))?;
    out.queue(style::SetForegroundColor(off_color))?;
    out.queue(Print("Off"))?;

    out.queue(cursor::MoveTo(col, row + 7))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Grid size changes reset the current game"))?;
    Ok(())
}
