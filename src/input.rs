use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    TogglePause,
    Quit,
}

/// Maps a key press to what the player wants. Unbound keys map to `None`.
pub fn intent(ev: &KeyEvent) -> Option<Intent> {
    if is_ctrl_c(ev) {
        return Some(Intent::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Intent::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Intent::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Intent::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Intent::Turn(Right)),
        KeyCode::Esc => Some(Intent::TogglePause),
        KeyCode::Char('q') => Some(Intent::Quit),
        _ => None,
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
