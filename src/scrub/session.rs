//! Scrubber session.
//!
//! `ScrubSession` owns everything one scrubber needs: the track, the
//! display, the timeline geometry, the frame mapper and the seek and sync
//! state machines. Every notification enters through [`ScrubSession::dispatch`].

use crate::config::ScrubConfig;
use crate::display::{FrameDisplay, Readout, TimelineProperty};
use crate::scrub::controller::SeekController;
use crate::scrub::gesture::{PointerEvent, PointerGesture, TimelineGeometry};
use crate::scrub::mapper::{frame_from_pointer_x, FrameMapper};
use crate::scrub::sync::PlaybackSync;
use crate::track::{Track, TrackEvent};

/// Input to a scrubber session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrubEvent {
    /// Notification from the track or its control surface
    Track(TrackEvent),
    /// Pointer input on the timeline
    Pointer(PointerEvent),
    /// A display repaint tick
    Repaint,
}

impl From<TrackEvent> for ScrubEvent {
    fn from(event: TrackEvent) -> Self {
        Self::Track(event)
    }
}

impl From<PointerEvent> for ScrubEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}

/// One scrubber bound to one track.
#[derive(Debug)]
pub struct ScrubSession<T, D, G> {
    track: T,
    display: D,
    geometry: G,
    settings: ScrubConfig,
    mapper: Option<FrameMapper>,
    controller: SeekController,
    sync: PlaybackSync,
    gesture: PointerGesture,
    awaiting_metadata: bool,
}

impl<T, D, G> ScrubSession<T, D, G>
where
    T: Track,
    D: FrameDisplay,
    G: TimelineGeometry,
{
    pub fn new(track: T, display: D, geometry: G, settings: &ScrubConfig) -> Self {
        Self {
            track,
            display,
            geometry,
            settings: settings.clone(),
            mapper: None,
            controller: SeekController::with_tolerance(settings.seek_tolerance),
            sync: PlaybackSync::new(),
            gesture: PointerGesture::new(),
            awaiting_metadata: false,
        }
    }

    /// Set up frame math from the track's metadata.
    ///
    /// If the duration is not known yet, asks the track to load and waits
    /// for its `MetadataLoaded` notification instead.
    pub fn init(&mut self) {
        if self.track.duration().is_some() {
            self.apply_metadata();
        } else {
            tracing::debug!("metadata not loaded yet, deferring init");
            self.awaiting_metadata = true;
            self.track.load();
        }
    }

    /// Feed one event into the session.
    pub fn dispatch(&mut self, event: ScrubEvent) {
        match event {
            ScrubEvent::Track(event) => self.handle_track_event(event),
            ScrubEvent::Pointer(event) => {
                if let Some(x) = self.gesture.handle(event) {
                    self.scrub_to(x);
                }
            }
            ScrubEvent::Repaint => self.repaint(),
        }
    }

    /// Whether the sync loop wants another repaint tick.
    pub fn wants_repaint(&self) -> bool {
        self.sync.is_running()
    }

    pub fn track(&self) -> &T {
        &self.track
    }

    pub fn track_mut(&mut self) -> &mut T {
        &mut self.track
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    /// Frame math, once metadata is loaded.
    pub fn mapper(&self) -> Option<&FrameMapper> {
        self.mapper.as_ref()
    }

    pub fn controller(&self) -> &SeekController {
        &self.controller
    }

    pub fn sync(&self) -> &PlaybackSync {
        &self.sync
    }

    pub fn is_scrubbing(&self) -> bool {
        self.gesture.is_active()
    }

    /// Total frame count, 0 before metadata is loaded.
    pub fn total_frames(&self) -> u32 {
        self.mapper.map_or(0, |mapper| mapper.total_frames())
    }

    /// Frame at the track's current position, once metadata is loaded.
    pub fn current_frame(&self) -> Option<u32> {
        self.mapper
            .map(|mapper| mapper.frame_from_time(self.track.current_time()))
    }

    fn handle_track_event(&mut self, event: TrackEvent) {
        match event {
            TrackEvent::MetadataLoaded => self.apply_metadata(),
            TrackEvent::Play => {
                self.sync.on_play();
                self.repaint();
            }
            // The sync loop notices the pause on its next tick
            TrackEvent::Pause => {}
            TrackEvent::Seeked => {
                if let Some(mapper) = self.mapper {
                    self.controller
                        .seek_completed(&mapper, &mut self.track, &mut self.display);
                }
            }
            TrackEvent::Focus => self.controller.focus(),
        }
    }

    fn apply_metadata(&mut self) {
        let Some(duration) = self.track.duration() else {
            tracing::warn!("metadata notification without a duration");
            return;
        };
        self.awaiting_metadata = false;

        match FrameMapper::with_end_epsilon(self.settings.fps, duration, self.settings.end_epsilon)
        {
            Ok(mapper) => {
                let total = mapper.total_frames();
                tracing::debug!(duration, total, "metadata loaded");
                self.display.set_property(TimelineProperty::Frames, total);
                self.display.show(Readout::TotalFrames, &total.to_string());
                self.mapper = Some(mapper);
            }
            Err(e) => {
                tracing::warn!(error = %e, "track duration unusable, scrubbing disabled");
                self.mapper = None;
            }
        }
    }

    fn repaint(&mut self) {
        if let Some(mapper) = self.mapper {
            self.sync.tick(&mapper, &self.track, &mut self.display);
        }
    }

    fn scrub_to(&mut self, x: f64) {
        let frame = frame_from_pointer_x(x, self.geometry.bounds(), self.total_frames());
        match self.mapper {
            Some(mapper) => {
                self.controller.request_seek(frame, &mapper, &mut self.track);
            }
            None => self.controller.focus(),
        }
        self.display.show(Readout::PointerX, &x.to_string());
        self.display.show(Readout::PointerFrame, &frame.to_string());
    }

    /// True while init is waiting for the track's metadata.
    pub fn awaiting_metadata(&self) -> bool {
        self.awaiting_metadata
    }
}
