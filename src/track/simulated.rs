//! In-process track with asynchronous seeking.
//!
//! Time only moves when [`SimulatedTrack::advance`] is called, which makes
//! the track deterministic for tests and lets the terminal player drive it
//! from its repaint tick.

use std::collections::VecDeque;

use super::{Track, TrackEvent};

/// Number of recent seek requests kept for inspection.
const SEEK_HISTORY_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingSeek {
    target: f64,
    remaining_ticks: u32,
}

/// A track that behaves like a media element without decoding anything.
///
/// - Metadata is unavailable until [`Track::load`] is called (unless built
///   with [`SimulatedTrack::loaded`]).
/// - A seek completes after `seek_latency_ticks` calls to `advance`, then
///   emits [`TrackEvent::Seeked`]. Playback does not progress meanwhile.
/// - Seeking to or past the duration resets the position to 0.
/// - Reaching the end pauses playback.
#[derive(Debug, Clone)]
pub struct SimulatedTrack {
    media_duration: f64,
    metadata_loaded: bool,
    current_time: f64,
    paused: bool,
    pending_seek: Option<PendingSeek>,
    seek_latency_ticks: u32,
    events: VecDeque<TrackEvent>,
    seek_requests: Vec<f64>,
}

impl SimulatedTrack {
    /// Create a track whose metadata has not been loaded yet.
    pub fn new(duration: f64, seek_latency_ticks: u32) -> Self {
        Self {
            media_duration: duration,
            metadata_loaded: false,
            current_time: 0.0,
            paused: true,
            pending_seek: None,
            seek_latency_ticks: seek_latency_ticks.max(1),
            events: VecDeque::new(),
            seek_requests: Vec::new(),
        }
    }

    /// Create a track with metadata already available.
    pub fn loaded(duration: f64, seek_latency_ticks: u32) -> Self {
        let mut track = Self::new(duration, seek_latency_ticks);
        track.metadata_loaded = true;
        track
    }

    /// Start playback. Playing from the end restarts at 0.
    pub fn play(&mut self) {
        if !self.paused {
            return;
        }
        if self.current_time >= self.media_duration {
            self.current_time = 0.0;
        }
        self.paused = false;
        self.events.push_back(TrackEvent::Play);
    }

    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        self.events.push_back(TrackEvent::Pause);
    }

    pub fn toggle_play(&mut self) {
        if self.paused {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Advance the track by one tick of `dt` seconds.
    ///
    /// Progresses an in-flight seek if there is one, otherwise advances the
    /// playback position while playing.
    pub fn advance(&mut self, dt: f64) {
        if let Some(seek) = self.pending_seek.as_mut() {
            seek.remaining_ticks = seek.remaining_ticks.saturating_sub(1);
            if seek.remaining_ticks == 0 {
                self.current_time = seek.target;
                self.pending_seek = None;
                self.events.push_back(TrackEvent::Seeked);
            }
            return;
        }

        if self.paused || !self.metadata_loaded {
            return;
        }
        self.current_time += dt;
        if self.current_time >= self.media_duration {
            self.current_time = self.media_duration;
            self.pause();
        }
    }

    /// Take the next pending notification.
    pub fn poll_event(&mut self) -> Option<TrackEvent> {
        self.events.pop_front()
    }

    /// Emit a control-surface focus notification.
    pub fn focus(&mut self) {
        self.events.push_back(TrackEvent::Focus);
    }

    /// The most recent times written through [`Track::set_current_time`],
    /// oldest first. Only the last 64 are kept.
    pub fn seek_requests(&self) -> &[f64] {
        &self.seek_requests
    }

    /// Number of ticks a seek takes to complete.
    pub fn seek_latency_ticks(&self) -> u32 {
        self.seek_latency_ticks
    }
}

impl Track for SimulatedTrack {
    fn duration(&self) -> Option<f64> {
        self.metadata_loaded.then_some(self.media_duration)
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, time: f64) {
        if self.seek_requests.len() == SEEK_HISTORY_LEN {
            self.seek_requests.remove(0);
        }
        self.seek_requests.push(time);
        if !self.metadata_loaded {
            tracing::warn!(time, "seek requested before metadata loaded, ignoring");
            return;
        }
        let target = if time >= self.media_duration || time < 0.0 || time.is_nan() {
            0.0
        } else {
            time
        };
        // A newer request replaces whatever was in flight
        self.pending_seek = Some(PendingSeek {
            target,
            remaining_ticks: self.seek_latency_ticks,
        });
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn seeking(&self) -> bool {
        self.pending_seek.is_some()
    }

    fn load(&mut self) {
        if self.metadata_loaded {
            return;
        }
        self.metadata_loaded = true;
        self.events.push_back(TrackEvent::MetadataLoaded);
    }
}
