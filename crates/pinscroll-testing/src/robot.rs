//! Robot-style driver for drag gesture handlers.
//!
//! The robot owns a handler, feeds it pointer events at a steady cadence,
//! and pumps the runtime's frame callbacks so momentum can be observed
//! deterministically.
//!
//! # Example
//!
//! ```ignore
//! let runtime = Runtime::default();
//! let clock = Rc::new(ManualClock::new(0.0));
//! let mut robot = GestureRobot::new(engine, runtime.handle(), clock);
//!
//! robot.press(200.0, 20.0);
//! robot.move_to(140.0, 20.0);
//! robot.release();
//! robot.run_until_idle(500);
//! ```

use crate::clock::ManualClock;
use pinscroll_core::RuntimeHandle;
use pinscroll_foundation::{
    ClickEvent, DragGestureHandler, Point, PointerButton, PointerDisposition, PointerEvent,
    PointerId, PointerType, TargetElement,
};
use std::rc::Rc;

/// Milliseconds between simulated frames.
pub const FRAME_MS: f64 = 16.0;
/// Milliseconds between simulated pointer moves.
pub const MOVE_INTERVAL_MS: f64 = 8.0;

pub struct GestureRobot<H: DragGestureHandler> {
    handler: H,
    runtime: RuntimeHandle,
    clock: Rc<ManualClock>,
    frame_time_nanos: u64,
    pointer_id: PointerId,
    pointer_type: PointerType,
    button: PointerButton,
    position: Point,
    history: Vec<PointerDisposition>,
}

impl<H: DragGestureHandler> GestureRobot<H> {
    pub fn new(handler: H, runtime: RuntimeHandle, clock: Rc<ManualClock>) -> Self {
        Self {
            handler,
            runtime,
            clock,
            frame_time_nanos: 0,
            pointer_id: 1,
            pointer_type: PointerType::Mouse,
            button: PointerButton::Primary,
            position: Point::ZERO,
            history: Vec::new(),
        }
    }

    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Every disposition the handler returned, oldest first.
    pub fn history(&self) -> &[PointerDisposition] {
        &self.history
    }

    /// Uses `button` for subsequent presses.
    pub fn set_button(&mut self, button: PointerButton) {
        self.button = button;
    }

    /// Starts a new gesture with a fresh pointer id.
    pub fn press(&mut self, x: f32, y: f32) -> PointerDisposition {
        self.press_on(x, y, std::iter::empty())
    }

    /// Presses on an element; `target` runs innermost first.
    pub fn press_on(
        &mut self,
        x: f32,
        y: f32,
        target: impl IntoIterator<Item = TargetElement>,
    ) -> PointerDisposition {
        self.pointer_id += 1;
        self.position = Point::new(x, y);
        let event = PointerEvent::down(self.pointer_id, self.pointer_type, self.position)
            .with_button(self.button)
            .with_target(target);
        let disposition = self.handler.on_pointer_down(&event);
        self.record(disposition)
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> PointerDisposition {
        self.clock.advance(MOVE_INTERVAL_MS);
        self.position = Point::new(x, y);
        let event = PointerEvent::moved(self.pointer_id, self.pointer_type, self.position);
        let disposition = self.handler.on_pointer_move(&event);
        self.record(disposition)
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) -> PointerDisposition {
        let Point { x, y } = self.position;
        self.move_to(x + dx, y + dy)
    }

    /// Moves from the current position to `(x, y)` in `steps` equal moves.
    pub fn glide_to(&mut self, x: f32, y: f32, steps: usize) -> PointerDisposition {
        let from = self.position;
        let steps = steps.max(1);
        let mut last = PointerDisposition::Ignored;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            last = self.move_to(from.x + (x - from.x) * t, from.y + (y - from.y) * t);
        }
        last
    }

    pub fn release(&mut self) -> PointerDisposition {
        let event = PointerEvent::up(self.pointer_id, self.pointer_type, self.position);
        let disposition = self.handler.on_pointer_up(&event);
        self.record(disposition)
    }

    pub fn cancel(&mut self) -> PointerDisposition {
        let event = PointerEvent::cancel(self.pointer_id, self.pointer_type, self.position);
        let disposition = self.handler.on_pointer_cancel(&event);
        self.record(disposition)
    }

    /// Press, glide in `steps` moves, release. Returns the release disposition.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32), steps: usize) -> PointerDisposition {
        self.press(from.0, from.1);
        self.glide_to(to.0, to.1, steps);
        self.release()
    }

    /// Delivers a click the way a host's click-capture listener would.
    pub fn click(&self) -> ClickEvent {
        let click = ClickEvent::new();
        self.handler.stop_click_if_dragged(&click);
        click
    }

    /// Advances time by one frame and runs pending frame callbacks.
    pub fn advance_frame(&mut self) {
        self.clock.advance(FRAME_MS);
        self.frame_time_nanos += (FRAME_MS * 1_000_000.0) as u64;
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
    }

    pub fn has_pending_frames(&self) -> bool {
        self.runtime.has_frame_callbacks()
    }

    /// Runs up to `count` frames, stopping early once nothing is queued.
    /// Returns how many frames ran.
    pub fn run_frames(&mut self, count: usize) -> usize {
        let mut ran = 0;
        while ran < count && self.has_pending_frames() {
            self.advance_frame();
            ran += 1;
        }
        ran
    }

    /// Pumps frames until nothing is queued. Panics after `max_frames`.
    pub fn run_until_idle(&mut self, max_frames: usize) -> usize {
        let ran = self.run_frames(max_frames);
        assert!(
            !self.has_pending_frames(),
            "frame callbacks still pending after {} frames",
            max_frames
        );
        ran
    }

    fn record(&mut self, disposition: PointerDisposition) -> PointerDisposition {
        self.history.push(disposition);
        disposition
    }
}
