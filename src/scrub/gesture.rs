//! Pointer gesture binding for the timeline.
//!
//! A press on the timeline arms the gesture; moves and the final release
//! while armed produce scrub positions. Anything else is ignored.

use crate::scrub::mapper::Bounds;

/// Pointer input with its horizontal coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pressed on the timeline
    Down { x: f64 },
    /// Moved anywhere
    Move { x: f64 },
    /// Released anywhere
    Up { x: f64 },
}

/// Source of the timeline's current bounds.
///
/// Queried on every scrub position so resizes are picked up immediately.
pub trait TimelineGeometry {
    fn bounds(&self) -> Bounds;
}

impl TimelineGeometry for Bounds {
    fn bounds(&self) -> Bounds {
        *self
    }
}

/// Tracks whether a scrub gesture is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerGesture {
    armed: bool,
}

impl PointerGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.armed
    }

    /// Feed a pointer event; returns the x coordinate to scrub to, if any.
    ///
    /// The release performs one last scrub and then ends the gesture.
    pub fn handle(&mut self, event: PointerEvent) -> Option<f64> {
        match event {
            PointerEvent::Down { .. } => {
                self.armed = true;
                None
            }
            PointerEvent::Move { x } if self.armed => Some(x),
            PointerEvent::Up { x } if self.armed => {
                self.armed = false;
                Some(x)
            }
            PointerEvent::Move { .. } | PointerEvent::Up { .. } => None,
        }
    }
}
