mod chip_row;

use anyhow::ensure;
use chip_row::ChipRow;
use pinscroll_core::{FrameScheduler, MonotonicClock, Runtime};
use pinscroll_foundation::{Point, PointerDisposition, PointerEvent, PointerType, ScrollContainer};
use std::cell::Cell;
use std::rc::Rc;

const VIEWPORT_WIDTH: f32 = 360.0;
const FRAME_MS: f64 = 16.0;
const MOVE_MS: f64 = 8.0;

const CLIENTS: &[&str] = &[
    "Northwind",
    "Acme Studio",
    "Globex",
    "Initech",
    "Umbrella Events",
    "Hooli",
    "Stark Weddings",
    "Wayne Portraits",
];

/// Scripted time: advances only when the demo says so.
#[derive(Default)]
struct ScriptClock {
    now_ms: Cell<f64>,
}

impl ScriptClock {
    fn advance(&self, delta_ms: f64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }
}

impl MonotonicClock for ScriptClock {
    fn now_millis(&self) -> f64 {
        self.now_ms.get()
    }
}

/// Counts frame requests the way a host would coalesce them into
/// `requestAnimationFrame`.
#[derive(Default)]
struct CountingScheduler {
    requests: Cell<usize>,
}

impl FrameScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

struct Script<'a> {
    row: &'a ChipRow,
    clock: &'a ScriptClock,
    runtime: &'a Runtime,
    pointer: u64,
    frame_nanos: u64,
}

impl Script<'_> {
    fn press(&mut self, x: f32, y: f32) -> PointerDisposition {
        self.pointer += 1;
        self.row.pointer_event(PointerEvent::down(
            self.pointer,
            PointerType::Mouse,
            Point::new(x, y),
        ))
    }

    fn move_to(&mut self, x: f32, y: f32) -> PointerDisposition {
        self.clock.advance(MOVE_MS);
        self.row.pointer_event(PointerEvent::moved(
            self.pointer,
            PointerType::Mouse,
            Point::new(x, y),
        ))
    }

    fn release(&mut self, x: f32, y: f32) -> PointerDisposition {
        self.row.pointer_event(PointerEvent::up(
            self.pointer,
            PointerType::Mouse,
            Point::new(x, y),
        ))
    }

    fn pump_until_idle(&mut self, max_frames: usize) -> usize {
        let handle = self.runtime.handle();
        let mut frames = 0;
        while handle.has_frame_callbacks() && frames < max_frames {
            self.clock.advance(FRAME_MS);
            self.frame_nanos += (FRAME_MS * 1_000_000.0) as u64;
            handle.drain_frame_callbacks(self.frame_nanos);
            frames += 1;
        }
        frames
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format_timestamp_millis()
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn main() -> anyhow::Result<()> {
    init_logging();

    println!("=== pinscroll chip row ===");
    println!("Scripted gestures against a {VIEWPORT_WIDTH}px client-chip row:");
    println!("  - tap a chip to select it");
    println!("  - fling the row, then watch the click after the drag get swallowed");
    println!("  - swipe vertically and see the row stay put");
    println!();

    let scheduler = Rc::new(CountingScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let clock = Rc::new(ScriptClock::default());
    let row = ChipRow::new(
        CLIENTS,
        VIEWPORT_WIDTH,
        &runtime.handle(),
        clock.clone() as Rc<dyn MonotonicClock>,
    )?;
    let mut script = Script {
        row: &row,
        clock: &clock,
        runtime: &runtime,
        pointer: 0,
        frame_nanos: 0,
    };

    // Tap: press and release on a chip without moving.
    let globex = row
        .chip_center("Globex")
        .ok_or_else(|| anyhow::anyhow!("no Globex chip"))?;
    script.press(globex, 20.0);
    script.release(globex, 20.0);
    let selected = row.click(globex);
    ensure!(selected.as_deref() == Some("Globex"), "tap did not select Globex");

    // Fling: drag 240px to the left in quick steps, then let momentum run.
    let start = 300.0;
    script.press(start, 20.0);
    for step in 1..=12 {
        script.move_to(start - 20.0 * step as f32, 21.0);
    }
    let released_at = row.surface().scroll_left();
    let disposition = script.release(start - 240.0, 21.0);
    ensure!(
        disposition == PointerDisposition::MomentumStarted,
        "expected momentum after fling, got {disposition:?}"
    );
    let frames = script.pump_until_idle(1_000);
    println!(
        "fling: released at {released_at:.1}px, settled at {:.1}px after {frames} frames",
        row.surface().scroll_left()
    );
    ensure!(row.surface().scroll_left() > released_at, "momentum did not glide");
    ensure!(!row.surface().is_grabbing(), "grabbing cursor left on");

    // The click that follows the drag must not change the selection.
    ensure!(row.click(start - 240.0).is_none(), "click after drag was not suppressed");
    ensure!(row.active() == "Globex", "selection changed by a drag");

    // Vertical swipe: the page scrolls, the row does not.
    let before = row.surface().scroll_left();
    script.press(180.0, 20.0);
    let disposition = script.move_to(184.0, 60.0);
    ensure!(
        disposition == PointerDisposition::PassedThrough,
        "vertical swipe was not passed through, got {disposition:?}"
    );
    script.move_to(120.0, 90.0);
    script.release(120.0, 90.0);
    ensure!(
        row.surface().scroll_left() == before,
        "vertical swipe moved the row"
    );

    println!(
        "active client: {}; frame requests: {}",
        row.active(),
        scheduler.requests.get()
    );
    Ok(())
}
