//! Drag-to-scroll engine for horizontally scrolling rows.
//!
//! A host widget attaches one [`DragScroll`] per scroll container and
//! forwards its raw pointer events. Per gesture the engine decides whether to
//! take over (horizontal drag) or stay out of the way (vertical page scroll,
//! taps, presses on buttons and links). Releases with enough velocity hand
//! off to a self-scheduling momentum loop on the runtime's frame clock.
//!
//! ```text
//! Idle ──press──▶ PendingAxis ──|dx| > |dy| + 2──▶ DraggingHorizontal ──release──▶ Momentum ──▶ Idle
//!                     │                                    │
//!                     └──vertical──▶ PassthroughVertical   └──slow release──▶ Idle
//! ```
//!
//! Handlers never fail and never panic: capture errors are logged and
//! ignored, and a container that has gone away turns every call into a no-op.

use crate::config::DragScrollConfig;
use crate::momentum::{schedule_momentum_frame, MomentumRun};
use crate::physics::{edge_resistance, friction_for_width};
use crate::session::{Axis, GesturePhase, Session};
use pinscroll_core::{FrameClock, MonotonicClock, RuntimeHandle, SystemClock};
use pinscroll_foundation::gesture_constants::{
    CLICK_SLOP, HORIZONTAL_BIAS, MIN_MOMENTUM_VELOCITY,
};
use pinscroll_foundation::{
    ClickEvent, DragGestureHandler, PointerButton, PointerDisposition, PointerEvent, PointerId,
    PointerType, PrimaryPointer, ScrollContainer, ScrollGeometry,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Drag-scroll engine bound to one scroll container.
///
/// Holds the container weakly; the host keeps it alive. Dropping the engine
/// tears it down like [`DragScroll::destroy`].
///
/// Container methods are never called with engine state borrowed, so a
/// container may query the engine (`phase`, `velocity`) from inside them.
pub struct DragScroll {
    session: Rc<RefCell<Session>>,
    container: Weak<dyn ScrollContainer>,
    frame_clock: FrameClock,
    clock: Rc<dyn MonotonicClock>,
    primary_pointer: PrimaryPointer,
    config: DragScrollConfig,
}

impl DragScroll {
    /// Attaches an engine to `container`, scheduling momentum frames on `runtime`.
    pub fn attach<C>(container: &Rc<C>, runtime: &RuntimeHandle, config: DragScrollConfig) -> Self
    where
        C: ScrollContainer + 'static,
    {
        let container: Rc<dyn ScrollContainer> = container.clone();
        Self {
            session: Rc::new(RefCell::new(Session::new(config.max_velocity))),
            container: Rc::downgrade(&container),
            frame_clock: runtime.frame_clock(),
            clock: Rc::new(SystemClock::new()),
            primary_pointer: PrimaryPointer::Fine,
            config,
        }
    }

    /// Replaces the time source used for velocity sampling.
    pub fn with_clock(mut self, clock: Rc<dyn MonotonicClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Sets the platform's answer to "is the primary pointer fine".
    pub fn with_primary_pointer(mut self, primary_pointer: PrimaryPointer) -> Self {
        self.primary_pointer = primary_pointer;
        self
    }

    pub fn config(&self) -> &DragScrollConfig {
        &self.config
    }

    pub fn phase(&self) -> GesturePhase {
        self.session.borrow().phase()
    }

    pub fn axis(&self) -> Axis {
        self.session.borrow().axis
    }

    /// Smoothed pointer velocity in px/ms.
    pub fn velocity(&self) -> f32 {
        self.session.borrow().velocity.value()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.borrow().dragging
    }

    /// True when the next click should be swallowed.
    pub fn click_suppression_pending(&self) -> bool {
        self.session.borrow().moved_past_click_threshold
    }

    pub fn is_destroyed(&self) -> bool {
        self.session.borrow().destroyed
    }

    fn accepts_pointer(&self, event: &PointerEvent) -> bool {
        if self.config.restrict_to_fine_pointers
            && (!self.primary_pointer.is_fine() || event.pointer_type == PointerType::Touch)
        {
            return false;
        }
        !(event.pointer_type == PointerType::Mouse && event.button != PointerButton::Primary)
    }

    fn handle_down(&self, event: &PointerEvent) -> PointerDisposition {
        {
            let mut session = self.session.borrow_mut();
            if session.destroyed {
                return PointerDisposition::Ignored;
            }
            // Any press spends the previous gesture's click flag, ignored or not.
            session.moved_past_click_threshold = false;
        }
        if !self.accepts_pointer(event) {
            return PointerDisposition::Ignored;
        }
        if let Some(element) = self.config.ignored_targets.closest(&event.target) {
            log::trace!("press on <{}> ignored for drag", element.tag());
            return PointerDisposition::Ignored;
        }
        let Some(container) = self.container.upgrade() else {
            return PointerDisposition::Ignored;
        };
        if !container.has_horizontal_overflow() {
            return PointerDisposition::Ignored;
        }

        let now = self.clock.now_millis();
        let scroll_left = container.scroll_left();
        let stale_capture = {
            let mut session = self.session.borrow_mut();
            if session.cancel_momentum() {
                log::debug!("momentum interrupted by new press");
            }
            let previous = session.captured_pointer.take();
            session.begin(event.id, event.position, scroll_left, now);
            previous
        };
        if let Some(previous) = stale_capture {
            release_capture(container.as_ref(), previous);
            container.set_grabbing(false);
        }
        PointerDisposition::Pending
    }

    fn handle_move(&self, event: &PointerEvent) -> PointerDisposition {
        let Some(container) = self.container.upgrade() else {
            return PointerDisposition::Ignored;
        };
        let (dx, start_scroll_offset, just_locked) = {
            let mut session = self.session.borrow_mut();
            if session.destroyed || !session.pointer_active || !session.owns(event.id) {
                return PointerDisposition::Ignored;
            }

            let dx = event.position.x - session.start_position.x;
            let dy = event.position.y - session.start_position.y;
            let mut just_locked = false;

            if session.axis == Axis::Undecided {
                if self.config.lock_axis {
                    let (adx, ady) = (dx.abs(), dy.abs());
                    let threshold = self.config.axis_lock_threshold;
                    if adx < threshold && ady < threshold {
                        return PointerDisposition::Pending;
                    }
                    if adx <= ady + HORIZONTAL_BIAS {
                        log::debug!(
                            "gesture locked vertical (dx={dx:.1}, dy={dy:.1}); passing through"
                        );
                        session.axis = Axis::Vertical;
                        session.pointer_active = false;
                        session.dragging = false;
                        return PointerDisposition::PassedThrough;
                    }
                }
                log::debug!("gesture locked horizontal (dx={dx:.1}, dy={dy:.1})");
                session.axis = Axis::Horizontal;
                session.dragging = true;
                just_locked = true;
            }

            if session.axis != Axis::Horizontal {
                return PointerDisposition::Ignored;
            }
            if dx.abs() > CLICK_SLOP {
                session.moved_past_click_threshold = true;
            }
            (dx, session.start_scroll_offset, just_locked)
        };

        if just_locked {
            self.take_capture(container.as_ref(), event.id);
        }

        let resistance = edge_resistance(
            ScrollGeometry::of(container.as_ref()),
            start_scroll_offset - dx,
            self.config.rubber_band(),
        );
        container.set_scroll_left(resistance.offset);

        let now = self.clock.now_millis();
        let velocity = self
            .session
            .borrow_mut()
            .velocity
            .add_sample(event.position.x, now, resistance.factor);
        log::trace!(
            "drag offset={:.1} factor={:.2} velocity={velocity:.4}",
            resistance.offset,
            resistance.factor
        );
        if just_locked {
            PointerDisposition::Captured
        } else {
            PointerDisposition::Dragged
        }
    }

    /// Best-effort capture plus the grabbing affordance for a gesture that
    /// just locked horizontal. The session is not borrowed across container calls.
    fn take_capture(&self, container: &dyn ScrollContainer, pointer: PointerId) {
        let captured = match container.set_pointer_capture(pointer) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("pointer capture unavailable: {err}");
                false
            }
        };
        container.set_grabbing(true);
        if !captured {
            return;
        }
        let mut session = self.session.borrow_mut();
        if session.dragging && session.owns(pointer) {
            session.captured_pointer = Some(pointer);
        } else {
            drop(session);
            release_capture(container, pointer);
        }
    }

    fn handle_release(&self, event: &PointerEvent, cancelled: bool) -> PointerDisposition {
        let (was_active, was_dragging, captured, velocity) = {
            let mut session = self.session.borrow_mut();
            if session.destroyed || !session.owns(event.id) {
                return PointerDisposition::Ignored;
            }
            let was_active = session.pointer_active;
            let was_dragging = session.dragging;
            session.pointer_active = false;
            session.dragging = false;
            session.pointer_id = None;
            if cancelled {
                // No click follows a cancelled pointer.
                session.moved_past_click_threshold = false;
            }
            (
                was_active,
                was_dragging,
                session.captured_pointer.take(),
                session.velocity.value(),
            )
        };

        let Some(container) = self.container.upgrade() else {
            return PointerDisposition::Ignored;
        };
        if !was_active {
            return PointerDisposition::Ignored;
        }

        if let Some(pointer) = captured {
            release_capture(container.as_ref(), pointer);
        }
        if was_dragging {
            container.set_grabbing(false);
        }

        if !(self.config.momentum_enabled && was_dragging)
            || velocity.abs() < MIN_MOMENTUM_VELOCITY
        {
            if was_dragging {
                log::debug!(
                    "drag {} without momentum (velocity={velocity:.4})",
                    if cancelled { "cancelled" } else { "released" }
                );
            }
            return PointerDisposition::Released;
        }

        let run = MomentumRun {
            friction: friction_for_width(container.client_width(), self.config.base_friction),
            rubber_band: self.config.rubber_band(),
        };
        let mut session = self.session.borrow_mut();
        if session.destroyed || session.pointer_active {
            return PointerDisposition::Released;
        }
        session.cancel_momentum();
        let generation = session.momentum_generation;
        log::debug!(
            "momentum started (velocity={velocity:.4}, friction={:.4})",
            run.friction
        );
        let registration = schedule_momentum_frame(
            Rc::downgrade(&self.session),
            self.container.clone(),
            self.frame_clock.clone(),
            run,
            generation,
        );
        session.momentum = Some(registration);
        PointerDisposition::MomentumStarted
    }

    fn handle_click(&self, click: &ClickEvent) -> bool {
        let mut session = self.session.borrow_mut();
        if !session.moved_past_click_threshold {
            return false;
        }
        click.prevent_default();
        click.stop_propagation();
        session.moved_past_click_threshold = false;
        log::trace!("click after drag suppressed");
        true
    }

    fn teardown(&self) {
        let (captured, was_dragging) = {
            let Ok(mut session) = self.session.try_borrow_mut() else {
                return;
            };
            if session.destroyed {
                return;
            }
            session.destroyed = true;
            session.cancel_momentum();

            let was_dragging = session.dragging;
            session.pointer_active = false;
            session.dragging = false;
            session.pointer_id = None;
            session.moved_past_click_threshold = false;
            session.velocity.reset();
            (session.captured_pointer.take(), was_dragging)
        };

        if let Some(container) = self.container.upgrade() {
            if let Some(pointer) = captured {
                release_capture(container.as_ref(), pointer);
            }
            if was_dragging {
                container.set_grabbing(false);
            }
        }
        log::debug!("drag scroll engine destroyed");
    }
}

fn release_capture(container: &dyn ScrollContainer, pointer: PointerId) {
    if let Err(err) = container.release_pointer_capture(pointer) {
        log::debug!("pointer capture release failed: {err}");
    }
}

impl DragGestureHandler for DragScroll {
    /// `Idle → PendingAxis` when the pointer is accepted, the target is not
    /// an ignored interactive element, and the container overflows.
    fn on_pointer_down(&self, event: &PointerEvent) -> PointerDisposition {
        self.handle_down(event)
    }

    fn on_pointer_move(&self, event: &PointerEvent) -> PointerDisposition {
        self.handle_move(event)
    }

    fn on_pointer_up(&self, event: &PointerEvent) -> PointerDisposition {
        self.handle_release(event, false)
    }

    fn on_pointer_cancel(&self, event: &PointerEvent) -> PointerDisposition {
        self.handle_release(event, true)
    }

    /// Suppresses exactly one click after a drag, then clears the flag.
    fn stop_click_if_dragged(&self, click: &ClickEvent) -> bool {
        self.handle_click(click)
    }

    /// Idempotent.
    fn destroy(&self) {
        self.teardown();
    }
}

impl Drop for DragScroll {
    fn drop(&mut self) {
        self.teardown();
    }
}
