//! Playback sync loop.
//!
//! Keeps the display on the track's current frame while it plays. The loop
//! is driven by repaint ticks and only runs between a `Play` notification
//! and the first tick that observes the track paused.

use crate::display::{FrameDisplay, Readout, TimelineProperty};
use crate::scrub::mapper::FrameMapper;
use crate::track::Track;

/// State of the sync loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    /// No ticks wanted
    #[default]
    Idle,
    /// Wants a repaint tick
    Running,
}

/// Repaint-driven loop that mirrors the track's position onto the display.
#[derive(Debug, Clone, Default)]
pub struct PlaybackSync {
    state: SyncState,
}

impl PlaybackSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SyncState::Running
    }

    /// Handle the track's `Play` notification.
    ///
    /// Starts the loop if idle. Playing while already running keeps the
    /// single existing loop.
    pub fn on_play(&mut self) {
        if self.state == SyncState::Idle {
            tracing::debug!("playback sync started");
            self.state = SyncState::Running;
        }
    }

    /// Handle one repaint tick.
    ///
    /// Renders the current frame, then stops the loop if the track has
    /// paused, so the final paused frame is still drawn once. Ticks while
    /// idle do nothing.
    pub fn tick<T, D>(&mut self, mapper: &FrameMapper, track: &T, display: &mut D) -> SyncState
    where
        T: Track + ?Sized,
        D: FrameDisplay + ?Sized,
    {
        if self.state == SyncState::Idle {
            return self.state;
        }
        sync_display(mapper, track, display);
        if track.paused() {
            tracing::debug!("playback sync stopped");
            self.state = SyncState::Idle;
        }
        self.state
    }
}

/// Push the track's current frame to the display.
///
/// Returns the frame that was shown.
pub fn sync_display<T, D>(mapper: &FrameMapper, track: &T, display: &mut D) -> u32
where
    T: Track + ?Sized,
    D: FrameDisplay + ?Sized,
{
    let frame = mapper.frame_from_time(track.current_time());
    display.set_property(TimelineProperty::Frame, frame);
    display.show(Readout::Frame, &frame.to_string());
    tracing::trace!(frame, "display synced");
    frame
}
