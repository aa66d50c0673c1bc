//! Help overlay listing the scrubber controls.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

const HELP_LINES: &[&str] = &[
    "",
    "  ╔═══════════════════════════════════════════╗",
    "  ║            framescrub controls            ║",
    "  ╠═══════════════════════════════════════════╣",
    "  ║                                           ║",
    "  ║  Scrubbing                                ║",
    "  ║    Drag       Press on the timeline and   ║",
    "  ║               drag to seek frame by frame ║",
    "  ║    Click      Seek to the clicked frame   ║",
    "  ║                                           ║",
    "  ║  Playback                                 ║",
    "  ║    Space      Play / Pause                ║",
    "  ║                                           ║",
    "  ║  General                                  ║",
    "  ║    ?          Show this help              ║",
    "  ║    q / Esc    Quit                        ║",
    "  ║                                           ║",
    "  ║         Press any key to close            ║",
    "  ╚═══════════════════════════════════════════╝",
    "",
];

/// Top-left cell of the help box when centered on a `width` x `height`
/// terminal.
fn help_origin(width: u16, height: u16) -> (u16, u16) {
    let box_width = HELP_LINES.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let col = (width as usize).saturating_sub(box_width) / 2;
    let row = height.saturating_sub(HELP_LINES.len() as u16) / 2;
    (col as u16, row)
}

/// Clear the screen and draw the help box.
pub fn render_help(out: &mut impl Write, width: u16, height: u16) -> Result<()> {
    let (col, top) = help_origin(width, height);

    execute!(out, Clear(ClearType::All), SetForegroundColor(Color::Green))?;
    for (row, line) in (top..).zip(HELP_LINES) {
        execute!(out, MoveTo(col, row), Print(line))?;
    }
    execute!(out, ResetColor)?;
    Ok(())
}
