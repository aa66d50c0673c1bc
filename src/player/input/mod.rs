//! Input handling for the terminal player.
//!
//! Dispatches crossterm events to the keyboard and mouse handlers, and
//! forwards focus and resize events to the scrubber session.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::Event;

use crate::player::state::{InputResult, PlayerState, TerminalSession};
use crate::track::TrackEvent;

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event(
    event: Event,
    state: &mut PlayerState,
    session: &mut TerminalSession,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, state, session),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state, session),
        Event::FocusGained => {
            session.dispatch(TrackEvent::Focus.into());
            InputResult::Continue
        }
        Event::Resize(new_cols, new_rows) => {
            state.handle_resize(new_cols, new_rows);
            session.geometry_mut().term_cols = new_cols;
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}
