//! Rendering components for the terminal player.
//!
//! Timeline bar, status bar and help overlay.

mod help;
mod progress;
mod status;

pub use help::render_help;
pub use progress::{build_timeline_chars, format_timecode, playhead_cell, render_timeline};
pub use status::{
    build_status_text, render_separator_line, render_status_bar, visible_width, StatusLine,
};
