//! Drag-to-scroll for horizontally overflowing rows.
//!
//! [`DragScroll`] turns raw pointer events into horizontal scrolling with
//! axis locking, inertial momentum, and rubber-band edge resistance, while
//! leaving vertical page scrolls and clicks on interactive children alone.

mod config;
mod drag_scroll;
mod momentum;
mod physics;
mod session;

#[cfg(test)]
mod tests;

pub use config::DragScrollConfig;
pub use drag_scroll::DragScroll;
pub use momentum::{step_momentum, MomentumRun};
pub use physics::{edge_resistance, friction_for_width, momentum_decay, Resistance};
pub use session::{Axis, GesturePhase};

pub mod prelude {
    pub use crate::config::DragScrollConfig;
    pub use crate::drag_scroll::DragScroll;
    pub use crate::session::{Axis, GesturePhase};
    pub use pinscroll_foundation::{DragGestureHandler, PointerDisposition};
}
