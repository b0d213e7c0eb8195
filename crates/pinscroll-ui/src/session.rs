use pinscroll_core::FrameCallbackRegistration;
use pinscroll_foundation::{Point, PointerId, SmoothedVelocity};

/// Axis classification of the current gesture. Decided once per gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    #[default]
    Undecided,
    Horizontal,
    Vertical,
}

/// Externally visible state of the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    PendingAxis,
    DraggingHorizontal,
    /// Vertical movement won; reported until the pointer lifts. The engine
    /// handles nothing in this phase.
    PassthroughVertical,
    Momentum,
}

/// Per-engine mutable state. Never handed out to callers.
pub(crate) struct Session {
    pub pointer_active: bool,
    pub pointer_id: Option<PointerId>,
    pub captured_pointer: Option<PointerId>,
    pub axis: Axis,
    pub dragging: bool,
    pub start_position: Point,
    pub start_scroll_offset: f32,
    pub moved_past_click_threshold: bool,
    pub velocity: SmoothedVelocity,
    pub momentum: Option<FrameCallbackRegistration>,
    /// Bumped whenever a momentum run is started or superseded so stale
    /// frame callbacks can tell they lost.
    pub momentum_generation: u64,
    pub destroyed: bool,
}

impl Session {
    pub fn new(max_velocity: f32) -> Self {
        Self {
            pointer_active: false,
            pointer_id: None,
            captured_pointer: None,
            axis: Axis::Undecided,
            dragging: false,
            start_position: Point::ZERO,
            start_scroll_offset: 0.0,
            moved_past_click_threshold: false,
            velocity: SmoothedVelocity::new(max_velocity),
            momentum: None,
            momentum_generation: 0,
            destroyed: false,
        }
    }

    /// Resets per-gesture fields for a new press.
    pub fn begin(&mut self, pointer: PointerId, position: Point, scroll_offset: f32, now_ms: f64) {
        self.pointer_active = true;
        self.pointer_id = Some(pointer);
        self.captured_pointer = None;
        self.axis = Axis::Undecided;
        self.dragging = false;
        self.start_position = position;
        self.start_scroll_offset = scroll_offset;
        self.moved_past_click_threshold = false;
        self.velocity.seed(position.x, now_ms);
    }

    /// True when `pointer` belongs to the gesture in progress.
    pub fn owns(&self, pointer: PointerId) -> bool {
        self.pointer_id == Some(pointer)
    }

    /// Drops the pending momentum frame, if any.
    pub fn cancel_momentum(&mut self) -> bool {
        self.momentum_generation = self.momentum_generation.wrapping_add(1);
        match self.momentum.take() {
            Some(registration) => {
                let was_active = registration.is_active();
                registration.cancel();
                was_active
            }
            None => false,
        }
    }

    pub fn is_momentum_running(&self) -> bool {
        self.momentum
            .as_ref()
            .is_some_and(FrameCallbackRegistration::is_active)
    }

    pub fn phase(&self) -> GesturePhase {
        if self.destroyed {
            GesturePhase::Idle
        } else if self.is_momentum_running() {
            GesturePhase::Momentum
        } else if self.pointer_active && self.dragging {
            GesturePhase::DraggingHorizontal
        } else if self.pointer_active {
            GesturePhase::PendingAxis
        } else if self.axis == Axis::Vertical && self.pointer_id.is_some() {
            GesturePhase::PassthroughVertical
        } else {
            GesturePhase::Idle
        }
    }
}
