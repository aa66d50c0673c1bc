//! framescrub - frame-accurate scrubbing over a continuous-time media track
//!
//! Maps pointer positions on a timeline to 1-indexed frames, sequences
//! seeks so at most one is in flight, and keeps the display on the
//! track's current frame during playback.
//!
//! - `scrub`: the scrubbing core (mapper, seek controller, sync loop, session)
//! - `track`: the `Track` trait and a simulated track
//! - `display`: the `FrameDisplay` sink and in-memory readouts
//! - `player`: interactive terminal scrubber built on crossterm
//! - `config`: TOML configuration

pub mod config;
pub mod display;
pub mod error;
pub mod player;
pub mod scrub;
pub mod track;

pub use config::Config;
pub use display::{FrameDisplay, Readout, Readouts, TimelineProperty};
pub use error::ScrubError;
pub use scrub::{Bounds, FrameMapper, ScrubEvent, ScrubSession, SeekController};
pub use track::{SimulatedTrack, Track, TrackEvent};
