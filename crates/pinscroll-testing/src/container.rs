//! In-memory [`ScrollContainer`] that behaves like a DOM scroll element.

use pinscroll_foundation::{CaptureError, PointerId, ScrollContainer};
use std::cell::{Cell, RefCell};

/// Scroll container with fixed geometry and a log of every offset write.
///
/// Stored offsets are clamped into `[0, scroll_width - client_width]` the way
/// a browser clamps `scrollLeft`; [`TestContainer::writes`] keeps the raw
/// values the engine asked for.
#[derive(Debug, Default)]
pub struct TestContainer {
    client_width: Cell<f32>,
    scroll_width: Cell<f32>,
    scroll_left: Cell<f32>,
    writes: RefCell<Vec<f32>>,
    captured: Cell<Option<PointerId>>,
    capture_requests: Cell<usize>,
    fail_capture: Cell<bool>,
    grabbing: Cell<bool>,
}

impl TestContainer {
    pub fn new(client_width: f32, scroll_width: f32) -> Self {
        Self {
            client_width: Cell::new(client_width),
            scroll_width: Cell::new(scroll_width),
            ..Self::default()
        }
    }

    /// Same as [`TestContainer::new`] but starting at `scroll_left`.
    pub fn scrolled_to(client_width: f32, scroll_width: f32, scroll_left: f32) -> Self {
        let container = Self::new(client_width, scroll_width);
        container.scroll_left.set(container.clamp(scroll_left));
        container
    }

    pub fn set_client_width(&self, width: f32) {
        self.client_width.set(width);
    }

    pub fn set_scroll_width(&self, width: f32) {
        self.scroll_width.set(width);
    }

    /// Every value passed to `set_scroll_left`, unclamped, in order.
    pub fn writes(&self) -> Vec<f32> {
        self.writes.borrow().clone()
    }

    pub fn clear_writes(&self) {
        self.writes.borrow_mut().clear();
    }

    /// Makes `set_pointer_capture` fail, like a stale pointer id would.
    pub fn fail_capture(&self, fail: bool) {
        self.fail_capture.set(fail);
    }

    pub fn captured_pointer(&self) -> Option<PointerId> {
        self.captured.get()
    }

    pub fn capture_requests(&self) -> usize {
        self.capture_requests.get()
    }

    pub fn is_grabbing(&self) -> bool {
        self.grabbing.get()
    }

    fn clamp(&self, value: f32) -> f32 {
        let max = (self.scroll_width.get() - self.client_width.get()).max(0.0);
        value.clamp(0.0, max)
    }
}

impl ScrollContainer for TestContainer {
    fn scroll_left(&self) -> f32 {
        self.scroll_left.get()
    }

    fn set_scroll_left(&self, value: f32) {
        self.writes.borrow_mut().push(value);
        self.scroll_left.set(self.clamp(value));
    }

    fn scroll_width(&self) -> f32 {
        self.scroll_width.get()
    }

    fn client_width(&self) -> f32 {
        self.client_width.get()
    }

    fn set_pointer_capture(&self, pointer: PointerId) -> Result<(), CaptureError> {
        self.capture_requests.set(self.capture_requests.get() + 1);
        if self.fail_capture.get() {
            return Err(CaptureError::InvalidPointer(pointer));
        }
        self.captured.set(Some(pointer));
        Ok(())
    }

    fn release_pointer_capture(&self, pointer: PointerId) -> Result<(), CaptureError> {
        if self.captured.get() != Some(pointer) {
            return Err(CaptureError::NotCaptured(pointer));
        }
        self.captured.set(None);
        Ok(())
    }

    fn set_grabbing(&self, grabbing: bool) {
        self.grabbing.set(grabbing);
    }
}
