//! Interactive terminal scrubber
//!
//! Drives a [`SimulatedTrack`] from a repaint tick and lets the user scrub
//! it by dragging the mouse across a one-row timeline.
//!
//! # Architecture
//!
//! - `state`: `PlayerState`, the `TerminalTimeline` geometry and shared types
//! - `input/`: keyboard and mouse handling
//! - `render/`: timeline bar, status bar and help overlay
//!
//! # Usage
//!
//! ```no_run
//! use framescrub::player::run_scrubber;
//! use framescrub::Config;
//!
//! run_scrubber(&Config::default(), 10.0).unwrap();
//! ```

pub(crate) mod input;
pub mod render;
pub mod state;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    },
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use crate::config::Config;
use crate::display::Readouts;
use crate::scrub::{ScrubEvent, ScrubSession};
use crate::track::{SimulatedTrack, Track};

pub use input::handle_event;
pub use state::{InputResult, PlayerState, TerminalSession, TerminalTimeline};

/// Build the session the terminal player runs.
///
/// The track starts without metadata, so the session goes through the
/// deferred initialization path.
pub fn build_session(config: &Config, duration: f64, term_cols: u16) -> TerminalSession {
    let track = SimulatedTrack::new(duration, config.player.seek_latency_ticks());
    let mut session = ScrubSession::new(
        track,
        Readouts::new(),
        TerminalTimeline::new(term_cols),
        &config.scrub,
    );
    session.init();
    session
}

/// Feed every pending track notification into the session.
pub fn pump_track_events(session: &mut TerminalSession) {
    while let Some(event) = session.track_mut().poll_event() {
        tracing::trace!(?event, "track event");
        session.dispatch(event.into());
    }
}

/// Advance the track by one repaint tick and run the sync loop if it wants
/// the tick.
pub fn tick(session: &mut TerminalSession, dt: f64) {
    session.track_mut().advance(dt);
    pump_track_events(session);
    if session.wants_repaint() {
        session.dispatch(ScrubEvent::Repaint);
    }
}

/// Run the interactive scrubber until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run_scrubber(config: &Config, duration: f64) -> Result<()> {
    config.validate()?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        Hide
    )?;

    let result = run_loop(&mut stdout, config, duration);

    // Always restore the terminal, even if the loop failed
    let _ = execute!(
        stdout,
        Show,
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = disable_raw_mode();

    result
}

#[cfg(not(tarpaulin_include))]
fn run_loop(stdout: &mut io::Stdout, config: &Config, duration: f64) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut state = PlayerState::new(cols, rows);
    let mut session = build_session(config, duration, cols);
    let tick_interval = Duration::from_secs_f64(1.0 / config.player.repaint_hz as f64);
    let mut last_tick = Instant::now();

    tracing::debug!(duration, fps = config.scrub.fps, "scrubber started");

    loop {
        pump_track_events(&mut session);

        if session.display_mut().take_dirty() {
            state.needs_render = true;
        }
        if state.needs_render {
            render(stdout, &state, &session)?;
            state.needs_render = false;
        }

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let event = event::read()?;
            if handle_event(event, &mut state, &mut session) == InputResult::Quit {
                break;
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_interval {
            last_tick = Instant::now();
            tick(&mut session, elapsed.as_secs_f64());
        }
    }

    tracing::debug!("scrubber stopped");
    Ok(())
}

/// Draw the whole screen.
pub fn render(out: &mut impl Write, state: &PlayerState, session: &TerminalSession) -> Result<()> {
    if state.show_help {
        render::render_help(out, state.term_cols, state.term_rows)?;
        out.flush()?;
        return Ok(());
    }

    execute!(out, Clear(ClearType::All))?;

    let readouts = session.display();
    let frame = readouts.frame_property.unwrap_or(0);
    let total = readouts.frames_property.unwrap_or(0);
    let timecode = session
        .mapper()
        .filter(|_| frame > 0)
        .map(|mapper| render::format_timecode(frame, mapper.fps()));

    let status = render::StatusLine {
        readouts,
        paused: session.track().paused(),
        seeking: session.track().seeking(),
        scrubbing: session.is_scrubbing(),
        timecode,
    };

    render::render_separator_line(out, state.term_cols, state.separator_row())?;
    render::render_timeline(
        out,
        state.term_cols,
        session.geometry().bar_width(),
        state.timeline_row(),
        frame,
        total,
    )?;
    render::render_status_bar(out, state.term_cols, state.status_row(), &status)?;
    out.flush()?;
    Ok(())
}
