//! Timeline bar rendering for the terminal player.
//!
//! Draws the scrubbable bar with the playhead on the current frame,
//! followed by a `frame/total` counter.

use std::io::Write;

use anyhow::Result;

/// Format a 1-indexed frame as an `MM:SS:FF` timecode.
///
/// `FF` is the frame within its second, counted from 0. Non-integer frame
/// rates are rounded to the nearest whole rate.
pub fn format_timecode(frame: u32, fps: f64) -> String {
    let rate = (fps.round() as u32).max(1);
    let index = frame.saturating_sub(1);
    let total_secs = index / rate;
    format!(
        "{:02}:{:02}:{:02}",
        total_secs / 60,
        total_secs % 60,
        index % rate
    )
}

/// Cell holding the playhead for `frame` out of `total_frames`.
///
/// Returns `None` when there is nothing to draw (no cells, no frames, or
/// frame 0).
pub fn playhead_cell(bar_width: usize, frame: u32, total_frames: u32) -> Option<usize> {
    if bar_width == 0 || total_frames == 0 || frame == 0 {
        return None;
    }
    let center = (frame.min(total_frames) as f64 - 0.5) / total_frames as f64;
    Some(((center * bar_width as f64) as usize).min(bar_width - 1))
}

/// Build the timeline bar characters.
///
/// Cells before the playhead are filled, the playhead cell shows `⏺`
/// and the rest are empty track.
///
/// # Returns
/// A tuple of (bar_chars, playhead) where playhead is the playhead cell.
pub fn build_timeline_chars(
    bar_width: usize,
    frame: u32,
    total_frames: u32,
) -> (Vec<char>, Option<usize>) {
    let playhead = playhead_cell(bar_width, frame, total_frames);
    let bar = (0..bar_width)
        .map(|i| match playhead {
            Some(p) if i < p => '━',
            Some(p) if i == p => '⏺',
            _ => '─',
        })
        .collect();
    (bar, playhead)
}

/// Render the timeline bar and frame counter.
///
/// # Arguments
/// * `out` - Where to write
/// * `width` - Terminal width
/// * `bar_width` - Width of the bar in cells
/// * `row` - Row to render at (0-indexed)
/// * `frame` - Current frame (0 if unknown)
/// * `total_frames` - Total frame count (0 before metadata loads)
pub fn render_timeline(
    out: &mut impl Write,
    width: u16,
    bar_width: usize,
    row: u16,
    frame: u32,
    total_frames: u32,
) -> Result<()> {
    let (bar, playhead) = build_timeline_chars(bar_width, frame, total_frames);
    let counter = format!(" {}/{}", frame, total_frames);

    const GREEN: &str = "\x1b[32m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1)); // Move cursor
    output.push_str("\x1b[48;5;236m "); // Dark gray background + padding

    output.push_str(GREEN);
    for (i, &c) in bar.iter().enumerate() {
        match playhead {
            Some(p) if i == p => {
                output.push_str(WHITE);
                output.push(c);
                output.push_str(DARK_GREY);
            }
            Some(p) if i < p => output.push(c),
            _ => {
                output.push_str(DARK_GREY);
                output.push(c);
            }
        }
    }

    output.push_str(GREY);
    output.push_str(&counter);

    let used_width = 1 + bar_width + counter.len();
    let remaining = (width as usize).saturating_sub(used_width);
    output.push_str(&" ".repeat(remaining));

    output.push_str("\x1b[0m"); // Reset
    write!(out, "{}", output)?;
    Ok(())
}
