//! Mouse input handling for the terminal player.
//!
//! Translates left-button press, drag and release into timeline pointer
//! events. Only a press on the bar starts a gesture; drags and the release
//! are followed anywhere on screen.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::player::state::{InputResult, PlayerState, TerminalSession, TerminalTimeline};
use crate::scrub::PointerEvent;

/// Map a mouse event to a pointer event, if it is part of a scrub.
pub fn pointer_event(
    mouse: &MouseEvent,
    state: &PlayerState,
    timeline: &TerminalTimeline,
) -> Option<PointerEvent> {
    let x = TerminalTimeline::pointer_x(mouse.column);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left)
            if mouse.row == state.timeline_row() && timeline.contains_column(mouse.column) =>
        {
            Some(PointerEvent::Down { x })
        }
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Move { x }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up { x }),
        _ => None,
    }
}

/// Handle a mouse event.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    state: &mut PlayerState,
    session: &mut TerminalSession,
) -> InputResult {
    if let Some(event) = pointer_event(&mouse, state, session.geometry()) {
        session.dispatch(event.into());
        state.needs_render = true;
    }
    InputResult::Continue
}
