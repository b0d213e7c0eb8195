use crate::input::{ClickEvent, PointerEvent, PointerEventKind};

/// What a gesture handler did with a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerDisposition {
    /// Not interesting to the handler; native behavior proceeds untouched.
    Ignored,
    /// Gesture is tracked but not yet classified.
    Pending,
    /// Horizontal drag confirmed on this event; the pointer was captured.
    Captured,
    /// Active drag moved the container.
    Dragged,
    /// Vertical movement won; the handler let go of the gesture.
    PassedThrough,
    /// Gesture ended and inertial scrolling took over.
    MomentumStarted,
    /// Gesture ended with nothing left running.
    Released,
}

impl PointerDisposition {
    /// True when the handler is driving the gesture after this event.
    pub fn is_dragging(self) -> bool {
        matches!(self, PointerDisposition::Captured | PointerDisposition::Dragged)
    }
}

/// Pointer-event entry points a host widget forwards to a drag engine.
pub trait DragGestureHandler {
    fn on_pointer_down(&self, event: &PointerEvent) -> PointerDisposition;

    fn on_pointer_move(&self, event: &PointerEvent) -> PointerDisposition;

    fn on_pointer_up(&self, event: &PointerEvent) -> PointerDisposition;

    fn on_pointer_cancel(&self, event: &PointerEvent) -> PointerDisposition;

    /// Called from a click-capture handler; returns true if the click was suppressed.
    fn stop_click_if_dragged(&self, click: &ClickEvent) -> bool;

    fn destroy(&self);

    /// Routes `event` to the matching entry point.
    fn dispatch(&self, event: &PointerEvent) -> PointerDisposition {
        match event.kind {
            PointerEventKind::Down => self.on_pointer_down(event),
            PointerEventKind::Move => self.on_pointer_move(event),
            PointerEventKind::Up => self.on_pointer_up(event),
            PointerEventKind::Cancel => self.on_pointer_cancel(event),
        }
    }
}
