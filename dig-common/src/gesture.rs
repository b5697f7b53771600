//! Pointer drag tracking for swipe navigation

/// Horizontal distance a drag must exceed to count as a swipe
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 80.0;

/// Navigation a completed swipe asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Dragged right past the threshold
    Prev,
    /// Dragged left past the threshold
    Next,
}

/// Idle/Dragging state of a single pointer interaction.
///
/// The offset only drives the visual transform while dragging; navigation is
/// decided once, on release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragGesture {
    dragging: bool,
    start_x: f64,
    offset_x: f64,
}

impl DragGesture {
    pub fn start(&mut self, x: f64) {
        self.dragging = true;
        self.start_x = x;
        self.offset_x = 0.0;
    }

    /// Track the pointer. Ignored unless a drag is in progress.
    pub fn update(&mut self, x: f64) -> bool {
        if !self.dragging {
            return false;
        }
        self.offset_x = x - self.start_x;
        true
    }

    /// End the drag and report which way it swiped, if far enough.
    /// The gesture is back to neutral afterwards whatever the outcome.
    pub fn finish(&mut self, threshold: f64) -> Option<SwipeDirection> {
        if !self.dragging {
            return None;
        }
        let offset = self.offset_x;
        self.reset();

        if offset > threshold {
            Some(SwipeDirection::Prev)
        } else if offset < -threshold {
            Some(SwipeDirection::Next)
        } else {
            None
        }
    }

    /// Abandon the drag without navigating
    pub fn cancel(&mut self) {
        self.reset();
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn offset(&self) -> f64 {
        self.offset_x
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
