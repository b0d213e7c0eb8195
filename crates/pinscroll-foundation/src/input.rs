use crate::geometry::Point;
use crate::target::{TargetElement, TargetPath};
use std::cell::Cell;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerType {
    Mouse,
    Touch,
    Pen,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

/// Answer to the platform query "is the primary pointer a fine pointer"
/// (`(pointer: fine)` on the web).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrimaryPointer {
    #[default]
    Fine,
    Coarse,
}

impl PrimaryPointer {
    pub fn is_fine(self) -> bool {
        matches!(self, PrimaryPointer::Fine)
    }
}

/// A native pointer event as forwarded by the host widget.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub pointer_type: PointerType,
    /// Button that changed state. Only meaningful for mouse presses.
    pub button: PointerButton,
    /// Client coordinates.
    pub position: Point,
    /// Originating target followed by its ancestors.
    pub target: TargetPath,
}

impl PointerEvent {
    pub fn new(
        kind: PointerEventKind,
        id: PointerId,
        pointer_type: PointerType,
        position: Point,
    ) -> Self {
        Self {
            id,
            kind,
            pointer_type,
            button: PointerButton::Primary,
            position,
            target: TargetPath::new(),
        }
    }

    pub fn down(id: PointerId, pointer_type: PointerType, position: Point) -> Self {
        Self::new(PointerEventKind::Down, id, pointer_type, position)
    }

    pub fn moved(id: PointerId, pointer_type: PointerType, position: Point) -> Self {
        Self::new(PointerEventKind::Move, id, pointer_type, position)
    }

    pub fn up(id: PointerId, pointer_type: PointerType, position: Point) -> Self {
        Self::new(PointerEventKind::Up, id, pointer_type, position)
    }

    pub fn cancel(id: PointerId, pointer_type: PointerType, position: Point) -> Self {
        Self::new(PointerEventKind::Cancel, id, pointer_type, position)
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_target(mut self, target: impl IntoIterator<Item = TargetElement>) -> Self {
        self.target = target.into_iter().collect();
        self
    }
}

/// Click observed in the capture phase.
///
/// Handlers mark it; the host is responsible for honoring the flags.
#[derive(Debug, Default)]
pub struct ClickEvent {
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }

    /// True when the click should not reach its target.
    pub fn is_suppressed(&self) -> bool {
        self.is_default_prevented() && self.is_propagation_stopped()
    }
}
