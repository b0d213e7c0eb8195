//! Testing utilities for pinscroll: an in-memory scroll container, a manual
//! clock, and a robot that drives gesture handlers frame by frame.

pub mod clock;
pub mod container;
pub mod robot;
pub mod robot_assertions;

pub use clock::ManualClock;
pub use container::TestContainer;
pub use robot::*;

pub mod prelude {
    pub use crate::clock::ManualClock;
    pub use crate::container::TestContainer;
    pub use crate::robot::*;
    pub use crate::robot_assertions::*;
}
