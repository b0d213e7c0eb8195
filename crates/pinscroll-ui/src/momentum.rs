//! Momentum loop for drag rows.
//!
//! After a release with enough velocity the engine schedules one frame
//! callback at a time; each frame moves the container, decays velocity, and
//! reschedules itself only while there is velocity and overflow left.

use crate::physics::{edge_resistance, momentum_decay};
use crate::session::Session;
use pinscroll_core::{FrameCallbackRegistration, FrameClock};
use pinscroll_foundation::gesture_constants::{FRAME_INTERVAL_MS, MOMENTUM_STOP_VELOCITY};
use pinscroll_foundation::{ScrollContainer, ScrollGeometry, SmoothedVelocity};
use std::cell::RefCell;
use std::rc::Weak;

/// Parameters fixed for one momentum run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentumRun {
    /// Friction from the container width at release.
    pub friction: f32,
    pub rubber_band: Option<f32>,
}

/// Advances one momentum frame on `container`.
///
/// Returns true when another frame should follow. Velocity is the pointer's
/// (positive = content dragged right), so the offset moves against it.
pub fn step_momentum(
    container: &dyn ScrollContainer,
    velocity: &mut SmoothedVelocity,
    run: MomentumRun,
) -> bool {
    let geometry = ScrollGeometry::of(container);
    if geometry.max_offset() <= 0.0 {
        velocity.reset();
        return false;
    }

    let next = container.scroll_left() - velocity.value() * FRAME_INTERVAL_MS;
    let resistance = edge_resistance(geometry, next, run.rubber_band);
    container.set_scroll_left(resistance.offset);

    let remaining = velocity.decay(momentum_decay(run.friction, resistance.factor));
    remaining.abs() > MOMENTUM_STOP_VELOCITY
}

/// Schedules the next momentum frame for `session`.
///
/// The callback bails out if the session was destroyed, superseded by a newer
/// run (`generation` mismatch), or the container went away.
pub(crate) fn schedule_momentum_frame(
    session: Weak<RefCell<Session>>,
    container: Weak<dyn ScrollContainer>,
    frame_clock: FrameClock,
    run: MomentumRun,
    generation: u64,
) -> FrameCallbackRegistration {
    let clock_for_next = frame_clock.clone();
    frame_clock.with_frame_nanos(move |frame_time_nanos| {
        let Some(session_rc) = session.upgrade() else {
            return;
        };
        let is_current =
            |state: &Session| !state.destroyed && state.momentum_generation == generation;

        let mut velocity = {
            let Ok(state) = session_rc.try_borrow() else {
                return;
            };
            if !is_current(&*state) {
                return;
            }
            state.velocity
        };
        let Some(container_rc) = container.upgrade() else {
            log::debug!("momentum stopped: container unmounted");
            if let Ok(mut state) = session_rc.try_borrow_mut() {
                if is_current(&*state) {
                    state.momentum = None;
                }
            }
            return;
        };

        // The container may call back into the engine here.
        let keep_going = step_momentum(container_rc.as_ref(), &mut velocity, run);
        let offset = container_rc.scroll_left();
        log::trace!(
            "momentum frame at {frame_time_nanos}ns: offset={offset:.1} velocity={:.4}",
            velocity.value()
        );

        let Ok(mut state) = session_rc.try_borrow_mut() else {
            return;
        };
        if !is_current(&*state) {
            return;
        }
        state.velocity = velocity;
        if keep_going {
            state.momentum = Some(schedule_momentum_frame(
                session.clone(),
                container.clone(),
                clock_for_next,
                run,
                generation,
            ));
        } else {
            log::debug!("momentum settled at offset {offset:.1}");
            state.momentum = None;
        }
    })
}
