//! Frame/time mapping.
//!
//! Pure conversions between 1-indexed frames, track timestamps and pointer
//! positions on the timeline. Nothing here holds mutable state.

use crate::error::{Result, ScrubError};

/// Horizontal bounds of the timeline widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge, in the same coordinate space as pointer x values
    pub left: f64,
    /// Width of the widget
    pub width: f64,
}

impl Bounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Fractional position of `x` across the bounds (0.0 at `left`,
    /// 1.0 at the right edge). Non-finite for zero-width bounds.
    pub fn fraction(&self, x: f64) -> f64 {
        (x - self.left) / self.width
    }
}

/// Frame math for one loaded track.
///
/// Built once the track's duration is known; rebuilt if the track reloads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMapper {
    fps: f64,
    duration: f64,
    end_epsilon: f64,
}

impl FrameMapper {
    /// Default margin kept between a seek target and the track's end.
    pub const DEFAULT_END_EPSILON: f64 = 1e-6;

    /// Largest frame count a track may have. One below `u32::MAX` so the
    /// frame shown at the very end (`total + 1` at most) still fits.
    pub const MAX_TOTAL_FRAMES: u32 = u32::MAX - 1;

    /// Create a mapper for a track of `duration` seconds.
    ///
    /// # Errors
    /// `InvalidDuration` if the duration is negative, NaN or infinite.
    /// `TooManyFrames` if the track holds more than [`Self::MAX_TOTAL_FRAMES`].
    pub fn new(fps: f64, duration: f64) -> Result<Self> {
        Self::with_end_epsilon(fps, duration, Self::DEFAULT_END_EPSILON)
    }

    /// Create a mapper with a custom end-of-track margin.
    pub fn with_end_epsilon(fps: f64, duration: f64, end_epsilon: f64) -> Result<Self> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(ScrubError::InvalidDuration(duration));
        }
        if !fps.is_finite() || fps <= 0.0 {
            return Err(ScrubError::InvalidConfig {
                field: "fps",
                reason: format!("must be a positive number, got {}", fps),
            });
        }
        if (duration * fps).ceil() > Self::MAX_TOTAL_FRAMES as f64 {
            return Err(ScrubError::TooManyFrames { duration, fps });
        }
        Ok(Self {
            fps,
            duration,
            end_epsilon,
        })
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of frames in the track: `ceil(duration * fps)`.
    pub fn total_frames(&self) -> u32 {
        (self.duration * self.fps).ceil() as u32
    }

    /// Frame displayed at time `t`: `floor(t * fps) + 1`.
    ///
    /// Negative or NaN times map to frame 1. Times far past the end
    /// saturate at `u32::MAX`.
    pub fn frame_from_time(&self, t: f64) -> u32 {
        let t = if t.is_nan() { 0.0 } else { t.max(0.0) };
        ((t * self.fps).floor() as u32).saturating_add(1)
    }

    /// Seek target for `frame`: the midpoint of the frame's display interval.
    ///
    /// Landing on a frame boundary can read back as the next frame, so the
    /// target sits half a frame in. The result is kept strictly below the
    /// duration because seeking to or past the end resets some tracks to 0.
    pub fn time_from_frame(&self, frame: u32) -> f64 {
        let half_frame = 0.5 / self.fps;
        let max_time = self.duration - self.end_epsilon;
        (frame as f64 / self.fps - half_frame).min(max_time).max(0.0)
    }

    /// Frame under a pointer at `x`.
    ///
    /// Rounds up so that the leftmost pixel of a frame's span selects that
    /// frame, then clamps to `[1, total_frames]`. Zero-width bounds select
    /// frame 1. With no frames (metadata not loaded) the result is 0.
    pub fn frame_from_pointer_x(&self, x: f64, bounds: Bounds) -> u32 {
        frame_from_pointer_x(x, bounds, self.total_frames())
    }
}

/// Frame under a pointer at `x` for a timeline of `total_frames` frames.
///
/// See [`FrameMapper::frame_from_pointer_x`].
pub fn frame_from_pointer_x(x: f64, bounds: Bounds, total_frames: u32) -> u32 {
    if total_frames == 0 {
        return 0;
    }
    let position = bounds.fraction(x) * total_frames as f64;
    if !position.is_finite() {
        return 1;
    }
    // Saturating float->int cast handles far-out-of-range pointers
    let frame = position.ceil().max(1.0) as u32;
    frame.min(total_frames)
}
