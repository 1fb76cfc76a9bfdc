//! Maps terminal key events onto the game's input symbols.
//!
//! The loop feeds at most one symbol per tick; a poll timeout simply means
//! no symbol this tick, so "no key" never needs a sentinel value here.

use crossterm::event::KeyCode;

/// One discrete input symbol.  Interpretation depends on the current mode:
/// the directional keys steer the snake while playing and navigate lists
/// in the menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    One,
    Two,
}

/// Translate a crossterm key code.  Arrows and WASD are equivalent;
/// unrecognised keys map to `None` and are dropped by the loop.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char('1') => Some(Key::One),
        KeyCode::Char('2') => Some(Key::Two),
        _ => None,
    }
}
