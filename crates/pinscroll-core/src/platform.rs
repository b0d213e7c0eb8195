//! Platform abstraction traits for pinscroll runtime services.
//!
//! The host owns the real animation loop (`requestAnimationFrame`, a winit
//! redraw, a test pump). These traits let the runtime ask for frames and
//! read time without depending on any particular environment.

use web_time::Instant;

/// Asks the host to schedule a new frame.
///
/// Called whenever a frame callback is registered. Hosts that already run a
/// continuous frame loop can ignore it.
pub trait FrameScheduler {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultScheduler;

impl FrameScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

/// Monotonic time source in fractional milliseconds.
///
/// Mirrors `performance.now()`: only differences between readings are
/// meaningful.
pub trait MonotonicClock {
    fn now_millis(&self) -> f64;
}

/// Wall clock backed by [`web_time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now_millis(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
