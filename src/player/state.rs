//! Player state management
//!
//! Contains the terminal-side `PlayerState`, the `TerminalTimeline`
//! geometry and shared types used across player modules.

use crate::display::Readouts;
use crate::scrub::{Bounds, ScrubSession, TimelineGeometry};
use crate::track::SimulatedTrack;

/// The scrubber session as wired up by the terminal player.
pub type TerminalSession = ScrubSession<SimulatedTrack, Readouts, TerminalTimeline>;

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the player
    Quit,
}

/// Layout of the one-row timeline bar.
///
/// The bar starts after one column of padding and leaves room on the right
/// for the frame counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalTimeline {
    /// Current terminal width
    pub term_cols: u16,
}

impl TerminalTimeline {
    /// First column of the bar (0-indexed)
    pub const BAR_START: u16 = 1;
    /// Columns reserved for padding and the counter
    pub const RESERVED_COLS: u16 = 16;

    pub fn new(term_cols: u16) -> Self {
        Self { term_cols }
    }

    /// Width of the bar in cells.
    pub fn bar_width(&self) -> usize {
        self.term_cols.saturating_sub(Self::RESERVED_COLS) as usize
    }

    /// Whether `column` lies on the bar.
    pub fn contains_column(&self, column: u16) -> bool {
        column >= Self::BAR_START && ((column - Self::BAR_START) as usize) < self.bar_width()
    }

    /// Pointer x for a terminal cell: the middle of the cell.
    pub fn pointer_x(column: u16) -> f64 {
        column as f64 + 0.5
    }
}

impl TimelineGeometry for TerminalTimeline {
    fn bounds(&self) -> Bounds {
        Bounds::new(Self::BAR_START as f64, self.bar_width() as f64)
    }
}

/// Terminal-side state of the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// Whether help overlay is visible
    pub show_help: bool,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl PlayerState {
    /// Rows used below the content area (separator + timeline + status)
    pub const STATUS_LINES: u16 = 3;

    pub fn new(term_cols: u16, term_rows: u16) -> Self {
        Self {
            term_cols,
            term_rows,
            show_help: false,
            needs_render: true,
        }
    }

    /// Row of the timeline bar (0-indexed).
    pub fn timeline_row(&self) -> u16 {
        self.term_rows.saturating_sub(2)
    }

    /// Row of the status bar (0-indexed).
    pub fn status_row(&self) -> u16 {
        self.term_rows.saturating_sub(1)
    }

    /// Row of the separator above the timeline (0-indexed).
    pub fn separator_row(&self) -> u16 {
        self.term_rows.saturating_sub(Self::STATUS_LINES)
    }

    /// Handle terminal resize event.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.needs_render = true;
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }
}
