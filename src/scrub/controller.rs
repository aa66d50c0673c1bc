//! Seek controller.
//!
//! Turns a stream of desired frames into at most one in-flight seek on the
//! track. Frames requested while a seek is running are not queued: only the
//! latest one is looked at once the running seek completes.

use crate::display::FrameDisplay;
use crate::scrub::mapper::FrameMapper;
use crate::scrub::sync::sync_display;
use crate::track::Track;

/// What a call to [`SeekController::settle_seek`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekOutcome {
    /// A seek to this time was written to the track
    Issued(f64),
    /// A seek is already in flight; the desired frame waits for it
    Busy,
    /// Nothing is pending
    Idle,
    /// The track is already positioned on the target
    InPlace,
}

/// Owns the desired frame and sequences seeks against the track.
#[derive(Debug, Clone, Default)]
pub struct SeekController {
    desired_frame: Option<u32>,
    seek_tolerance: f64,
    seeks_issued: u64,
}

impl SeekController {
    /// Controller comparing seek targets with the current time exactly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller treating targets within `seek_tolerance` seconds of the
    /// current time as already reached. `0.0` means exact comparison.
    pub fn with_tolerance(seek_tolerance: f64) -> Self {
        Self {
            seek_tolerance: seek_tolerance.max(0.0),
            ..Self::default()
        }
    }

    /// Frame waiting to be applied, if any.
    pub fn desired_frame(&self) -> Option<u32> {
        self.desired_frame
    }

    /// Total number of seeks written to the track.
    pub fn seeks_issued(&self) -> u64 {
        self.seeks_issued
    }

    /// Record `frame` as the desired frame and try to apply it.
    ///
    /// Frame 0 means "no frame" and clears any pending request.
    pub fn request_seek<T>(&mut self, frame: u32, mapper: &FrameMapper, track: &mut T) -> SeekOutcome
    where
        T: Track + ?Sized,
    {
        self.desired_frame = (frame != 0).then_some(frame);
        self.settle_seek(mapper, track)
    }

    /// Apply the desired frame if the track is free to seek.
    ///
    /// The desired frame is consumed once it has been written or found
    /// already in place. While the track is seeking it stays pending.
    pub fn settle_seek<T>(&mut self, mapper: &FrameMapper, track: &mut T) -> SeekOutcome
    where
        T: Track + ?Sized,
    {
        if track.seeking() {
            return SeekOutcome::Busy;
        }
        let Some(frame) = self.desired_frame.take() else {
            return SeekOutcome::Idle;
        };

        let target = mapper.time_from_frame(frame);
        if !self.needs_seek(target, track.current_time()) {
            tracing::trace!(frame, target, "already on desired frame");
            return SeekOutcome::InPlace;
        }

        tracing::debug!(frame, target, "seeking");
        track.set_current_time(target);
        self.seeks_issued += 1;
        SeekOutcome::Issued(target)
    }

    /// Handle the track's `Seeked` notification.
    ///
    /// Refreshes the display from the new position before settling again,
    /// so the display never lags a completed seek while the next one starts.
    pub fn seek_completed<T, D>(
        &mut self,
        mapper: &FrameMapper,
        track: &mut T,
        display: &mut D,
    ) -> SeekOutcome
    where
        T: Track + ?Sized,
        D: FrameDisplay + ?Sized,
    {
        sync_display(mapper, track, display);
        self.settle_seek(mapper, track)
    }

    /// Handle the control surface regaining focus: drop any stale request.
    pub fn focus(&mut self) {
        if let Some(frame) = self.desired_frame.take() {
            tracing::debug!(frame, "dropped pending seek on focus");
        }
    }

    fn needs_seek(&self, target: f64, current: f64) -> bool {
        if self.seek_tolerance > 0.0 {
            (target - current).abs() > self.seek_tolerance
        } else {
            target != current
        }
    }
}
