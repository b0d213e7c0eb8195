//! Shared gesture constants for drag-to-scroll rows.
//!
//! Distances are in logical pixels, velocities in pixels per millisecond.

/// Movement (on either axis) a pending gesture needs before its axis is decided.
pub const AXIS_LOCK_THRESHOLD: f32 = 6.0;

/// `|dx|` must beat `|dy|` by this margin for a gesture to lock horizontal.
///
/// Diagonal swipes fall through to native vertical scrolling.
pub const HORIZONTAL_BIAS: f32 = 2.0;

/// Horizontal travel after which the release no longer counts as a tap.
pub const CLICK_SLOP: f32 = 3.0;

/// Overflow at or below this is treated as "nothing to scroll".
pub const OVERFLOW_EPSILON: f32 = 2.0;

/// Weight of the newest sample in the exponential velocity blend.
pub const VELOCITY_SMOOTHING: f32 = 0.2;

/// Shortest time step used when sampling velocity, so bursts of events
/// delivered in the same millisecond do not divide by zero.
pub const MIN_SAMPLE_INTERVAL_MS: f64 = 1.0;

/// Release velocity needed to start momentum.
pub const MIN_MOMENTUM_VELOCITY: f32 = 0.05;

/// Momentum stops once velocity decays to this.
pub const MOMENTUM_STOP_VELOCITY: f32 = 0.02;

/// Milliseconds of travel applied per momentum frame.
pub const FRAME_INTERVAL_MS: f32 = 16.0;

/// Default clamp for drag velocity.
pub const DEFAULT_MAX_VELOCITY: f32 = 3.2;

/// Default base friction blended with the width-adaptive friction.
pub const DEFAULT_BASE_FRICTION: f32 = 0.935;

/// Default edge-resistance strength.
pub const DEFAULT_RUBBER_BAND_STRENGTH: f32 = 0.42;
