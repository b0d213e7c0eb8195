//! Core runtime for pinscroll: a frame-callback queue driven by the host's
//! animation loop, plus the clocks gesture code samples time from.

mod frame_clock;
pub mod platform;
mod runtime;


pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{DefaultScheduler, FrameScheduler, MonotonicClock, SystemClock};
pub use runtime::{Runtime, RuntimeHandle};

pub type FrameCallbackId = u64;
