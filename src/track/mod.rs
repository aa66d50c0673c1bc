//! Media track abstraction.
//!
//! The scrubber drives a track through the [`Track`] trait and reacts to
//! the [`TrackEvent`] notifications the track emits.
//!
//! - `simulated`: an in-process track with asynchronous seeks, used by the
//!   terminal player and the tests

mod simulated;

pub use simulated::SimulatedTrack;

/// A continuous-time media track.
///
/// Writing a new time starts an asynchronous seek: `seeking()` stays true
/// until the track emits [`TrackEvent::Seeked`]. Writing again while a seek
/// is in flight has no defined outcome, so callers must not rely on it.
pub trait Track {
    /// Track length in seconds, or `None` until metadata has loaded.
    fn duration(&self) -> Option<f64>;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Request a seek to `time` seconds.
    fn set_current_time(&mut self, time: f64);

    fn paused(&self) -> bool;

    /// Whether a requested time has not yet taken effect.
    fn seeking(&self) -> bool;

    /// Ask the track to load its metadata. A [`TrackEvent::MetadataLoaded`]
    /// notification follows once it is available.
    fn load(&mut self) {}
}

/// Notifications emitted by a track (and its control surface).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackEvent {
    /// Playback started
    Play,
    /// Playback paused
    Pause,
    /// A seek completed; `current_time()` reflects the new position
    Seeked,
    /// Duration is now known
    MetadataLoaded,
    /// The control surface regained interaction focus
    Focus,
}
