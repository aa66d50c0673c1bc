//! Frame-accurate scrubbing core
//!
//! # Architecture
//!
//! - `mapper`: frame/time and pointer/frame conversions
//! - `sync`: repaint-driven loop mirroring playback onto the display
//! - `controller`: desired-frame state and single in-flight seek sequencing
//! - `gesture`: pointer press/drag/release binding for the timeline
//! - `session`: `ScrubSession`, which owns all of the above and dispatches events
//!
//! # Usage
//!
//! ```
//! use framescrub::config::ScrubConfig;
//! use framescrub::display::{Readout, Readouts};
//! use framescrub::scrub::{Bounds, PointerEvent, ScrubSession};
//! use framescrub::track::SimulatedTrack;
//!
//! let track = SimulatedTrack::loaded(10.0, 1);
//! let mut session = ScrubSession::new(
//!     track,
//!     Readouts::new(),
//!     Bounds::new(0.0, 240.0),
//!     &ScrubConfig::default(),
//! );
//! session.init();
//!
//! session.dispatch(PointerEvent::Down { x: 0.0 }.into());
//! session.dispatch(PointerEvent::Up { x: 121.0 }.into());
//! assert_eq!(session.display().get(Readout::PointerFrame), Some("121"));
//! ```

pub mod controller;
pub mod gesture;
pub mod mapper;
pub mod session;
pub mod sync;

pub use controller::{SeekController, SeekOutcome};
pub use gesture::{PointerEvent, PointerGesture, TimelineGeometry};
pub use mapper::{frame_from_pointer_x, Bounds, FrameMapper};
pub use session::{ScrubEvent, ScrubSession};
pub use sync::{sync_display, PlaybackSync, SyncState};
