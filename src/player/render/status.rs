//! Status bar rendering for the terminal player.
//!
//! Shows play state and the four scrubber readouts.

use std::io::Write;

use anyhow::Result;

use crate::display::{Readout, Readouts};

/// Everything the status bar shows.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine<'a> {
    pub readouts: &'a Readouts,
    pub paused: bool,
    pub seeking: bool,
    pub scrubbing: bool,
    /// Timecode of the current frame, if known
    pub timecode: Option<String>,
}

/// Build the visible text of the status bar (no colors).
pub fn build_status_text(status: &StatusLine<'_>) -> String {
    let readout = |r: Readout| status.readouts.get(r).unwrap_or("-");

    // ▶ and ⏸ are double-width unicode
    let mut text = String::from(if status.paused { " ▶  " } else { " ⏸  " });
    text.push_str(&format!(
        "frame {}/{}",
        readout(Readout::Frame),
        readout(Readout::TotalFrames)
    ));
    if let Some(timecode) = &status.timecode {
        text.push_str(&format!("  {}", timecode));
    }
    text.push_str(&format!(
        "  ptr x {} → {}",
        readout(Readout::PointerX),
        readout(Readout::PointerFrame)
    ));
    if status.scrubbing {
        text.push_str("  [scrub]");
    }
    if status.seeking {
        text.push_str("  [seek]");
    }
    text
}

/// Visible width of status text, counting the play icon as two cells.
pub fn visible_width(text: &str) -> usize {
    text.chars().count() + 1
}

/// Render a separator line.
pub fn render_separator_line(out: &mut impl Write, width: u16, row: u16) -> Result<()> {
    // Build line as string to minimize syscalls
    let mut output = String::with_capacity(width as usize * 3 + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1)); // Move + dark gray
    output.push_str(&"─".repeat(width as usize));
    output.push_str("\x1b[0m"); // Reset
    write!(out, "{}", output)?;
    Ok(())
}

/// Render the status bar.
pub fn render_status_bar(
    out: &mut impl Write,
    width: u16,
    row: u16,
    status: &StatusLine<'_>,
) -> Result<()> {
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const RESET: &str = "\x1b[0m";

    let text = build_status_text(status);
    let hint = "  ?:help q:quit";

    let mut output = String::with_capacity(256);
    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str(WHITE);
    output.push_str(&text);
    output.push_str(DARK_GREY);

    let mut used = visible_width(&text);
    if used + hint.len() <= width as usize {
        output.push_str(hint);
        used += hint.len();
    }
    output.push_str(&" ".repeat((width as usize).saturating_sub(used)));
    output.push_str(RESET);

    write!(out, "{}", output)?;
    Ok(())
}
