//! Keyboard input handling for the terminal player.
//!
//! Playback and window controls only; scrubbing is pointer-driven.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::state::{InputResult, PlayerState, TerminalSession};

/// Handle a keyboard event.
pub fn handle_key_event(
    key: KeyEvent,
    state: &mut PlayerState,
    session: &mut TerminalSession,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    // If help is showing, any key closes it
    if state.show_help {
        state.toggle_help();
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Char('?') => {
            state.toggle_help();
            InputResult::Continue
        }
        KeyCode::Char(' ') => {
            session.track_mut().toggle_play();
            state.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}
