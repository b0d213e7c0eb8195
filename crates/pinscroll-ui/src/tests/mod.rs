use crate::{DragScroll, DragScrollConfig};
use pinscroll_core::{MonotonicClock, Runtime};
use pinscroll_testing::{GestureRobot, ManualClock, TestContainer};
use std::rc::Rc;

mod drag_scroll_tests;

/// Engine wired to an in-memory container, a manual clock, and a runtime
/// the robot pumps by hand.
struct Harness {
    robot: GestureRobot<DragScroll>,
    container: Rc<TestContainer>,
    runtime: Runtime,
}

fn harness(container: TestContainer, config: DragScrollConfig) -> Harness {
    harness_with(container, config, |engine| engine)
}

/// Like [`harness`], letting the test finish configuring the engine.
fn harness_with(
    container: TestContainer,
    config: DragScrollConfig,
    customize: impl FnOnce(DragScroll) -> DragScroll,
) -> Harness {
    let runtime = Runtime::default();
    let container = Rc::new(container);
    let clock = Rc::new(ManualClock::new(1_000.0));
    let engine = DragScroll::attach(&container, &runtime.handle(), config)
        .with_clock(clock.clone() as Rc<dyn MonotonicClock>);
    let engine = customize(engine);
    Harness {
        robot: GestureRobot::new(engine, runtime.handle(), clock),
        container,
        runtime,
    }
}

/// 400px viewport over 1000px of content.
fn chip_row() -> Harness {
    harness(TestContainer::new(400.0, 1000.0), DragScrollConfig::default())
}
