use super::{chip_row, harness, harness_with};
use crate::{Axis, DragScrollConfig, GesturePhase};
use pinscroll_foundation::{
    DragGestureHandler, Point, PointerButton, PointerDisposition, PointerEvent, PointerType,
    PrimaryPointer, ScrollContainer, TargetElement,
};
use pinscroll_testing::robot_assertions::assert_approx_eq;
use pinscroll_testing::TestContainer;

#[test]
fn small_moves_stay_pending() {
    let mut h = chip_row();
    assert_eq!(h.robot.press(200.0, 50.0), PointerDisposition::Pending);
    assert_eq!(h.robot.move_to(197.0, 51.0), PointerDisposition::Pending);
    assert_eq!(h.robot.move_to(203.0, 45.5), PointerDisposition::Pending);

    assert!(h.container.writes().is_empty());
    assert_eq!(h.container.capture_requests(), 0);
    assert_eq!(h.robot.handler().phase(), GesturePhase::PendingAxis);
    assert_eq!(h.robot.handler().axis(), Axis::Undecided);
}

#[test]
fn horizontal_drag_scrolls_by_pointer_delta() {
    let mut h = chip_row();
    h.robot.press(200.0, 50.0);
    assert_eq!(h.robot.move_to(190.0, 50.0), PointerDisposition::Captured);
    assert_eq!(h.container.scroll_left(), 10.0);
    assert_eq!(h.robot.move_to(140.0, 50.0), PointerDisposition::Dragged);
    assert_eq!(h.container.scroll_left(), 60.0);

    let engine = h.robot.handler();
    assert_eq!(engine.phase(), GesturePhase::DraggingHorizontal);
    assert_eq!(engine.axis(), Axis::Horizontal);
    assert!(engine.is_dragging());
    assert!(engine.velocity() < 0.0);
    assert!(h.container.is_grabbing());
    assert!(h.container.captured_pointer().is_some());
}

#[test]
fn no_overflow_never_starts_a_gesture() {
    // 402 <= 400 + 2
    let mut h = harness(TestContainer::new(400.0, 402.0), DragScrollConfig::default());
    assert_eq!(h.robot.press(200.0, 50.0), PointerDisposition::Ignored);
    assert_eq!(h.robot.move_to(100.0, 50.0), PointerDisposition::Ignored);
    assert_eq!(h.robot.release(), PointerDisposition::Ignored);
    assert!(h.container.writes().is_empty());
    assert_eq!(h.robot.handler().phase(), GesturePhase::Idle);

    let mut h = harness(TestContainer::new(400.0, 403.0), DragScrollConfig::default());
    assert_eq!(h.robot.press(200.0, 50.0), PointerDisposition::Pending);
}

#[test]
fn right_edge_clamps_and_damps_velocity() {
    let mut h = harness(
        TestContainer::scrolled_to(400.0, 1000.0, 600.0),
        DragScrollConfig::default(),
    );
    h.robot.press(200.0, 50.0);
    assert_eq!(h.robot.move_to(150.0, 50.0), PointerDisposition::Captured);

    assert_eq!(h.container.writes(), vec![600.0]);
    assert_eq!(h.container.scroll_left(), 600.0);

    // 50px over, span 140: factor = 1 - (50 / 140) * 0.42 = 0.85
    // instantaneous -50px / 8ms, damped and blended at 0.2
    let expected = 0.2 * (-50.0 / 8.0) * 0.85;
    assert_approx_eq(h.robot.handler().velocity(), expected, 1e-4, "edge velocity");
}

#[test]
fn left_edge_never_goes_negative() {
    let mut h = chip_row();
    h.robot.press(100.0, 50.0);
    h.robot.glide_to(400.0, 50.0, 6);
    assert!(h.container.writes().iter().all(|offset| *offset == 0.0));
}

#[test]
fn ignored_targets_never_drag() {
    let mut h = chip_row();
    let path = [
        TargetElement::new("span"),
        TargetElement::new("button").with_attribute("type"),
        TargetElement::new("div"),
    ];
    assert_eq!(h.robot.press_on(200.0, 50.0, path), PointerDisposition::Ignored);
    assert_eq!(h.robot.move_to(120.0, 50.0), PointerDisposition::Ignored);
    assert_eq!(h.robot.release(), PointerDisposition::Ignored);
    assert!(h.container.writes().is_empty());

    let opted_out = [TargetElement::new("div").with_attribute("data-no-drag")];
    assert_eq!(
        h.robot.press_on(200.0, 50.0, opted_out),
        PointerDisposition::Ignored
    );

    let plain = [TargetElement::new("span"), TargetElement::new("div")];
    assert_eq!(h.robot.press_on(200.0, 50.0, plain), PointerDisposition::Pending);
}

#[test]
fn custom_ignore_selector_replaces_default() {
    let config = DragScrollConfig::new()
        .with_ignore_selector("[data-chip-close]")
        .unwrap();
    let mut h = harness(TestContainer::new(400.0, 1000.0), config);

    let link = [TargetElement::new("a")];
    assert_eq!(h.robot.press_on(200.0, 50.0, link), PointerDisposition::Pending);
    h.robot.release();

    let close = [TargetElement::new("span").with_attribute("data-chip-close")];
    assert_eq!(h.robot.press_on(200.0, 50.0, close), PointerDisposition::Ignored);
}

#[test]
fn vertical_gesture_passes_through_without_capture() {
    let mut h = chip_row();
    h.robot.press(200.0, 50.0);
    assert_eq!(h.robot.move_to(205.0, 70.0), PointerDisposition::PassedThrough);

    let engine = h.robot.handler();
    assert_eq!(engine.axis(), Axis::Vertical);
    assert_eq!(engine.phase(), GesturePhase::PassthroughVertical);
    assert!(!engine.is_dragging());
    assert_eq!(h.container.capture_requests(), 0);
    assert!(!h.container.is_grabbing());

    // The axis never flips back, whatever the pointer does next.
    assert_eq!(h.robot.move_to(100.0, 70.0), PointerDisposition::Ignored);
    assert!(h.container.writes().is_empty());

    assert_eq!(h.robot.release(), PointerDisposition::Ignored);
    assert_eq!(h.robot.handler().phase(), GesturePhase::Idle);
    assert!(!h.robot.has_pending_frames());
}

#[test]
fn diagonal_within_bias_counts_as_vertical() {
    let mut h = chip_row();
    h.robot.press(200.0, 50.0);
    // |dx| = 8 is not greater than |dy| + 2 = 8
    assert_eq!(h.robot.move_to(192.0, 56.0), PointerDisposition::PassedThrough);
}

#[test]
fn axis_lock_off_decides_horizontal_on_first_move() {
    let config = DragScrollConfig::new().with_axis_lock(false);
    let mut h = harness(TestContainer::new(400.0, 1000.0), config);
    h.robot.press(200.0, 50.0);
    assert_eq!(h.robot.move_to(199.0, 60.0), PointerDisposition::Captured);
    assert_eq!(h.robot.handler().axis(), Axis::Horizontal);
    assert_eq!(h.container.scroll_left(), 1.0);
}

#[test]
fn click_after_drag_is_suppressed_once() {
    let mut h = chip_row();
    h.robot.press(200.0, 50.0);
    h.robot.move_to(190.0, 50.0);
    h.robot.move_to(140.0, 50.0);
    for _ in 0..20 {
        h.robot.move_to(140.0, 50.0);
    }
    assert_eq!(h.robot.release(), PointerDisposition::Released);
    assert!(h.robot.handler().click_suppression_pending());

    let first = h.robot.click();
    assert!(first.is_default_prevented());
    assert!(first.is_propagation_stopped());

    let second = h.robot.click();
    assert!(!second.is_suppressed());
    assert!(!h.robot.handler().click_suppression_pending());
}

#[test]
fn taps_keep_their_clicks() {
    let mut h = chip_row();
    h.robot.press(200.0, 50.0);
    h.robot.move_to(202.0, 51.0);
    assert_eq!(h.robot.release(), PointerDisposition::Released);
    assert!(!h.robot.click().is_suppressed());
}

#[test]
fn drag_within_click_slop_keeps_click() {
    let config = DragScrollConfig::new().with_axis_lock(false);
    let mut h = harness(TestContainer::new(400.0, 1000.0), config);
    h.robot.press(200.0, 50.0);
    assert_eq!(h.robot.move_to(197.0, 50.0), PointerDisposition::Captured);
    h.robot.release();
    assert!(!h.robot.click().is_suppressed());
}

#[test]
fn new_press_clears_stale_click_flag() {
    let mut h = chip_row();
    h.robot.drag((200.0, 50.0), (100.0, 50.0), 5);
    h.robot.run_until_idle(1_000);
    assert!(h.robot.handler().click_suppression_pending());

    h.robot.press(200.0, 50.0);
    assert!(!h.robot.handler().click_suppression_pending());
}

#[test]
fn cancelled_drag_does_not_swallow_next_button_click() {
    let mut h = chip_row();
    h.robot.press(200.0, 50.0);
    h.robot.move_to(190.0, 50.0);
    h.robot.move_to(140.0, 50.0);
    h.robot.cancel();
    assert!(!h.robot.handler().click_suppression_pending());
    h.robot.run_until_idle(1_000);

    let button = [TargetElement::new("button")];
    assert_eq!(h.robot.press_on(300.0, 50.0, button), PointerDisposition::Ignored);
    h.robot.release();
    assert!(!h.robot.click().is_suppressed());
}

#[test]
fn ignored_press_spends_stale_click_flag() {
    let mut h = chip_row();
    h.robot.drag((200.0, 50.0), (100.0, 50.0), 5);
    h.robot.run_until_idle(1_000);
    assert!(h.robot.handler().click_suppression_pending());

    let link = [TargetElement::new("a")];
    assert_eq!(h.robot.press_on(300.0, 50.0, link), PointerDisposition::Ignored);
    assert!(!h.robot.handler().click_suppression_pending());
    h.robot.release();
    assert!(!h.robot.click().is_suppressed());
}

#[test]
fn fresh_press_resets_decided_axis() {
    let mut h = chip_row();
    h.robot.press(200.0, 50.0);
    h.robot.move_to(205.0, 70.0);
    assert_eq!(h.robot.handler().axis(), Axis::Vertical);
    h.robot.release();

    h.robot.press(200.0, 50.0);
    assert_eq!(h.robot.handler().axis(), Axis::Undecided);
    h.robot.move_to(150.0, 50.0);
    assert_eq!(h.robot.handler().axis(), Axis::Horizontal);
    h.robot.release();
    h.robot.run_until_idle(1_000);

    h.robot.press(200.0, 50.0);
    assert_eq!(h.robot.handler().axis(), Axis::Undecided);
    assert_eq!(h.robot.handler().phase(), GesturePhase::PendingAxis);
}

#[test]
fn release_clears_capture_and_grabbing() {
    let mut h = chip_row();
    h.robot.press(200.0, 50.0);
    h.robot.move_to(180.0, 50.0);
    assert!(h.container.is_grabbing());
    h.robot.release();
    assert!(!h.container.is_grabbing());
    assert_eq!(h.container.captured_pointer(), None);
    assert!(!h.robot.handler().is_dragging());
}

#[test]
fn capture_failure_is_tolerated() {
    let mut h = chip_row();
    h.container.fail_capture(true);
    h.robot.press(200.0, 50.0);
    assert_eq!(h.robot.move_to(180.0, 50.0), PointerDisposition::Captured);
    assert_eq!(h.robot.move_to(150.0, 50.0), PointerDisposition::Dragged);
    assert_eq!(h.container.scroll_left(), 50.0);
    assert_eq!(h.container.capture_requests(), 1);

    h.robot.release();
    assert!(!h.container.is_grabbing());
    h.robot.run_until_idle(1_000);
}

#[test]
fn secondary_mouse_button_is_ignored() {
    let mut h = chip_row();
    h.robot.set_button(PointerButton::Secondary);
    assert_eq!(h.robot.press(200.0, 50.0), PointerDisposition::Ignored);
    h.robot.set_button(PointerButton::Middle);
    assert_eq!(h.robot.press(200.0, 50.0), PointerDisposition::Ignored);
}

#[test]
fn coarse_primary_pointer_disables_engine() {
    let mut h = harness_with(
        TestContainer::new(400.0, 1000.0),
        DragScrollConfig::default(),
        |engine| engine.with_primary_pointer(PrimaryPointer::Coarse),
    );
    assert_eq!(h.robot.press(200.0, 50.0), PointerDisposition::Ignored);
    assert_eq!(h.robot.move_to(100.0, 50.0), PointerDisposition::Ignored);
    assert!(h.container.writes().is_empty());

    let mut h = harness_with(
        TestContainer::new(400.0, 1000.0),
        DragScrollConfig::new().with_fine_pointers_only(false),
        |engine| engine.with_primary_pointer(PrimaryPointer::Coarse),
    );
    assert_eq!(h.robot.press(200.0, 50.0), PointerDisposition::Pending);
}

#[test]
fn touch_presses_are_left_to_native_scrolling() {
    let h = chip_row();
    let touch = PointerEvent::down(7, PointerType::Touch, Point::new(200.0, 50.0));
    assert_eq!(
        h.robot.handler().on_pointer_down(&touch),
        PointerDisposition::Ignored
    );

    let h = harness(
        TestContainer::new(400.0, 1000.0),
        DragScrollConfig::new().with_fine_pointers_only(false),
    );
    assert_eq!(
        h.robot.handler().on_pointer_down(&touch),
        PointerDisposition::Pending
    );
}

#[test]
fn pens_drag_like_mice() {
    let h = chip_row();
    let mut robot = h.robot.with_pointer_type(PointerType::Pen);
    robot.press(200.0, 50.0);
    assert_eq!(robot.move_to(170.0, 50.0), PointerDisposition::Captured);
    assert_eq!(h.container.scroll_left(), 30.0);
}

#[test]
fn other_pointers_cannot_hijack_a_drag() {
    let mut h = chip_row();
    h.robot.press(200.0, 50.0);
    h.robot.move_to(180.0, 50.0);

    let intruder = 99;
    let engine = h.robot.handler();
    let stray_move = PointerEvent::moved(intruder, PointerType::Mouse, Point::new(0.0, 50.0));
    assert_eq!(engine.on_pointer_move(&stray_move), PointerDisposition::Ignored);
    let stray_up = PointerEvent::up(intruder, PointerType::Mouse, Point::new(0.0, 50.0));
    assert_eq!(engine.on_pointer_up(&stray_up), PointerDisposition::Ignored);

    assert!(engine.is_dragging());
    assert_eq!(h.container.scroll_left(), 20.0);
}

#[test]
fn stray_release_before_press_is_ignored() {
    let h = chip_row();
    let up = PointerEvent::up(1, PointerType::Mouse, Point::new(0.0, 0.0));
    assert_eq!(h.robot.handler().on_pointer_up(&up), PointerDisposition::Ignored);
    assert_eq!(h.robot.handler().phase(), GesturePhase::Idle);
}

#[test]
fn dispatch_routes_by_event_kind() {
    let h = chip_row();
    let engine = h.robot.handler();
    let down = PointerEvent::down(3, PointerType::Mouse, Point::new(200.0, 50.0));
    let moved = PointerEvent::moved(3, PointerType::Mouse, Point::new(150.0, 50.0));
    let cancel = PointerEvent::cancel(3, PointerType::Mouse, Point::new(150.0, 50.0));
    assert_eq!(engine.dispatch(&down), PointerDisposition::Pending);
    assert_eq!(engine.dispatch(&moved), PointerDisposition::Captured);
    assert!(!engine.dispatch(&cancel).is_dragging());
    assert!(!engine.is_dragging());
}

#[test]
fn destroy_is_idempotent_and_final() {
    let mut h = chip_row();
    h.robot.press(200.0, 50.0);
    h.robot.move_to(180.0, 50.0);

    h.robot.handler().destroy();
    assert!(h.robot.handler().is_destroyed());
    assert!(!h.container.is_grabbing());
    assert_eq!(h.container.captured_pointer(), None);

    h.robot.handler().destroy();
    assert_eq!(h.robot.handler().phase(), GesturePhase::Idle);

    let writes = h.container.writes().len();
    assert_eq!(h.robot.move_to(100.0, 50.0), PointerDisposition::Ignored);
    assert_eq!(h.robot.release(), PointerDisposition::Ignored);
    assert_eq!(h.robot.press(200.0, 50.0), PointerDisposition::Ignored);
    assert_eq!(h.container.writes().len(), writes);
    assert!(!h.robot.click().is_suppressed());
}

#[test]
fn unmounted_container_turns_handlers_into_no_ops() {
    let h = chip_row();
    let mut robot = h.robot;
    drop(h.container);
    assert_eq!(robot.press(200.0, 50.0), PointerDisposition::Ignored);
    assert_eq!(robot.move_to(100.0, 50.0), PointerDisposition::Ignored);
    assert_eq!(robot.release(), PointerDisposition::Ignored);
}

#[test]
fn config_is_exposed_unchanged() {
    let config = DragScrollConfig::new().with_max_velocity(2.0).with_momentum(false);
    let h = harness(TestContainer::new(400.0, 1000.0), config.clone());
    assert_eq!(h.robot.handler().config(), &config);
}
