//! The scrollable element a drag engine drives.

use crate::gesture_constants::OVERFLOW_EPSILON;
use crate::input::PointerId;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureError {
    /// The platform does not know this pointer (already released, never pressed).
    InvalidPointer(PointerId),
    /// Release was requested for a pointer the element does not hold.
    NotCaptured(PointerId),
    /// Pointer capture is not available on this element.
    Unsupported,
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::InvalidPointer(id) => write!(f, "pointer {id} is not active"),
            CaptureError::NotCaptured(id) => write!(f, "pointer {id} is not captured"),
            CaptureError::Unsupported => write!(f, "pointer capture is not supported"),
        }
    }
}

impl std::error::Error for CaptureError {}

/// Horizontal scroll surface owned by the host.
///
/// Methods take `&self`; implementations keep their state behind interior
/// mutability, the way DOM elements do. Geometry is always read live.
pub trait ScrollContainer {
    /// Current horizontal scroll offset.
    fn scroll_left(&self) -> f32;

    /// Writes the horizontal scroll offset.
    fn set_scroll_left(&self, value: f32);

    /// Total content width.
    fn scroll_width(&self) -> f32;

    /// Visible width.
    fn client_width(&self) -> f32;

    fn set_pointer_capture(&self, _pointer: PointerId) -> Result<(), CaptureError> {
        Err(CaptureError::Unsupported)
    }

    fn release_pointer_capture(&self, _pointer: PointerId) -> Result<(), CaptureError> {
        Err(CaptureError::Unsupported)
    }

    /// Toggles the "grabbing" cursor affordance. Cosmetic.
    fn set_grabbing(&self, _grabbing: bool) {}

    fn max_scroll_left(&self) -> f32 {
        self.scroll_width() - self.client_width()
    }

    fn has_horizontal_overflow(&self) -> bool {
        self.scroll_width() > self.client_width() + OVERFLOW_EPSILON
    }
}

/// Snapshot of a container's horizontal geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollGeometry {
    pub scroll_width: f32,
    pub client_width: f32,
}

impl ScrollGeometry {
    pub fn new(scroll_width: f32, client_width: f32) -> Self {
        Self {
            scroll_width,
            client_width,
        }
    }

    pub fn of(container: &(impl ScrollContainer + ?Sized)) -> Self {
        Self::new(container.scroll_width(), container.client_width())
    }

    /// `scroll_width - client_width`; zero or negative means nothing to scroll.
    pub fn max_offset(&self) -> f32 {
        self.scroll_width - self.client_width
    }
}
