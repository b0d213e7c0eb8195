//! Foundation types for pinscroll: pointer input, event targets, the scroll
//! container seam, and the small pieces of gesture math shared by engines.

pub mod container;
pub mod geometry;
pub mod gesture_constants;
pub mod handler;
pub mod input;
pub mod target;
pub mod velocity;


pub use container::{CaptureError, ScrollContainer, ScrollGeometry};
pub use geometry::Point;
pub use handler::{DragGestureHandler, PointerDisposition};
pub use input::{
    ClickEvent, PointerButton, PointerEvent, PointerEventKind, PointerId, PointerType,
    PrimaryPointer,
};
pub use target::{SelectorError, TargetElement, TargetPath, TargetSelector};
pub use velocity::SmoothedVelocity;

pub mod prelude {
    pub use crate::container::*;
    pub use crate::geometry::Point;
    pub use crate::gesture_constants::*;
    pub use crate::handler::*;
    pub use crate::input::*;
    pub use crate::target::*;
    pub use crate::velocity::*;
}
