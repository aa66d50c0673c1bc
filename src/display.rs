//! Display sink for scrubber output.
//!
//! The core only ever writes values here; how they are drawn is up to the
//! implementor.

/// Text readout slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readout {
    /// Frame currently shown by the track
    Frame,
    /// Total number of frames in the track
    TotalFrames,
    /// Last pointer x coordinate seen during a gesture
    PointerX,
    /// Frame under the pointer
    PointerFrame,
}

/// Numeric properties consumed by whatever draws the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineProperty {
    /// Current frame (the playhead position)
    Frame,
    /// Total frame count
    Frames,
}

/// Receives display updates from the scrubbing core.
pub trait FrameDisplay {
    /// Render `text` in the given readout slot.
    fn show(&mut self, readout: Readout, text: &str);

    /// Update a numeric timeline property.
    fn set_property(&mut self, property: TimelineProperty, value: u32);
}

/// In-memory display that keeps the latest value of every slot.
///
/// Used by the terminal renderer as its model, and handy in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readouts {
    pub frame: Option<String>,
    pub total_frames: Option<String>,
    pub pointer_x: Option<String>,
    pub pointer_frame: Option<String>,
    /// Value of [`TimelineProperty::Frame`]
    pub frame_property: Option<u32>,
    /// Value of [`TimelineProperty::Frames`]
    pub frames_property: Option<u32>,
    /// Number of updates received since the last [`Readouts::take_dirty`]
    updates: usize,
}

impl Readouts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of a readout slot.
    pub fn get(&self, readout: Readout) -> Option<&str> {
        match readout {
            Readout::Frame => self.frame.as_deref(),
            Readout::TotalFrames => self.total_frames.as_deref(),
            Readout::PointerX => self.pointer_x.as_deref(),
            Readout::PointerFrame => self.pointer_frame.as_deref(),
        }
    }

    /// Returns true if anything changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        let dirty = self.updates > 0;
        self.updates = 0;
        dirty
    }
}

impl FrameDisplay for Readouts {
    fn show(&mut self, readout: Readout, text: &str) {
        let slot = match readout {
            Readout::Frame => &mut self.frame,
            Readout::TotalFrames => &mut self.total_frames,
            Readout::PointerX => &mut self.pointer_x,
            Readout::PointerFrame => &mut self.pointer_frame,
        };
        *slot = Some(text.to_string());
        self.updates += 1;
    }

    fn set_property(&mut self, property: TimelineProperty, value: u32) {
        match property {
            TimelineProperty::Frame => self.frame_property = Some(value),
            TimelineProperty::Frames => self.frames_property = Some(value),
        }
        self.updates += 1;
    }
}
