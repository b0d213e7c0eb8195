//! Client-chip row: a horizontally scrolling strip of pill buttons.
//!
//! Chips are laid out from their labels, "All" first. The row owns a
//! [`DragScroll`] engine, hit-tests presses to build the target path, and
//! routes chip clicks through click suppression so a drag never selects.

use pinscroll_core::{MonotonicClock, RuntimeHandle};
use pinscroll_foundation::{
    CaptureError, ClickEvent, DragGestureHandler, PointerDisposition, PointerEvent,
    PointerEventKind, PointerId, ScrollContainer, TargetElement,
};
use pinscroll_ui::{DragScroll, DragScrollConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const ROW_PADDING: f32 = 16.0;
const CHIP_GAP: f32 = 8.0;
const CHIP_PADDING: f32 = 32.0;
const CHIP_MAX_WIDTH: f32 = 200.0;
const GLYPH_WIDTH: f32 = 7.5;

pub const ALL_CLIENTS: &str = "All";

/// Chips themselves are buttons, so buttons stay draggable here.
const CHIP_ROW_IGNORE_SELECTOR: &str = "input,textarea,select,a,[data-no-drag]";

#[derive(Clone, Debug, PartialEq)]
pub struct Chip {
    pub label: String,
    /// Left edge in content coordinates.
    pub x: f32,
    pub width: f32,
}

impl Chip {
    fn contains(&self, content_x: f32) -> bool {
        content_x >= self.x && content_x < self.x + self.width
    }
}

fn layout_chips(labels: impl IntoIterator<Item = String>) -> Vec<Chip> {
    let mut x = ROW_PADDING;
    labels
        .into_iter()
        .map(|label| {
            let width = (label.chars().count() as f32 * GLYPH_WIDTH + CHIP_PADDING)
                .min(CHIP_MAX_WIDTH);
            let chip = Chip { label, x, width };
            x += width + CHIP_GAP;
            chip
        })
        .collect()
}

/// Scroll surface backing the row.
///
/// Only a pointer that is currently pressed can be captured, like the DOM.
pub struct ChipRowSurface {
    client_width: f32,
    content_width: f32,
    scroll_left: Cell<f32>,
    pressed: Cell<Option<PointerId>>,
    captured: Cell<Option<PointerId>>,
    grabbing: Cell<bool>,
}

impl ChipRowSurface {
    fn new(client_width: f32, chips: &[Chip]) -> Self {
        let content_width = chips
            .last()
            .map(|chip| chip.x + chip.width + ROW_PADDING)
            .unwrap_or(ROW_PADDING * 2.0);
        Self {
            client_width,
            content_width,
            scroll_left: Cell::new(0.0),
            pressed: Cell::new(None),
            captured: Cell::new(None),
            grabbing: Cell::new(false),
        }
    }

    pub fn is_grabbing(&self) -> bool {
        self.grabbing.get()
    }
}

impl ScrollContainer for ChipRowSurface {
    fn scroll_left(&self) -> f32 {
        self.scroll_left.get()
    }

    fn set_scroll_left(&self, value: f32) {
        let max = (self.content_width - self.client_width).max(0.0);
        self.scroll_left.set(value.clamp(0.0, max));
    }

    fn scroll_width(&self) -> f32 {
        self.content_width.max(self.client_width)
    }

    fn client_width(&self) -> f32 {
        self.client_width
    }

    fn set_pointer_capture(&self, pointer: PointerId) -> Result<(), CaptureError> {
        if self.pressed.get() != Some(pointer) {
            return Err(CaptureError::InvalidPointer(pointer));
        }
        self.captured.set(Some(pointer));
        Ok(())
    }

    fn release_pointer_capture(&self, pointer: PointerId) -> Result<(), CaptureError> {
        if self.captured.get() != Some(pointer) {
            return Err(CaptureError::NotCaptured(pointer));
        }
        self.captured.set(None);
        Ok(())
    }

    fn set_grabbing(&self, grabbing: bool) {
        self.grabbing.set(grabbing);
    }
}

pub struct ChipRow {
    chips: Vec<Chip>,
    surface: Rc<ChipRowSurface>,
    drag: DragScroll,
    active: RefCell<String>,
}

impl ChipRow {
    pub fn new(
        clients: &[&str],
        viewport_width: f32,
        runtime: &RuntimeHandle,
        clock: Rc<dyn MonotonicClock>,
    ) -> anyhow::Result<Self> {
        let labels = std::iter::once(ALL_CLIENTS)
            .chain(clients.iter().copied())
            .map(str::to_owned);
        let chips = layout_chips(labels);
        let surface = Rc::new(ChipRowSurface::new(viewport_width, &chips));
        let config = DragScrollConfig::new()
            .with_base_friction(0.94)
            .with_ignore_selector(CHIP_ROW_IGNORE_SELECTOR)?;
        let drag = DragScroll::attach(&surface, runtime, config).with_clock(clock);
        log::info!(
            "chip row: {} chips, content {:.0}px in {:.0}px viewport",
            chips.len(),
            surface.scroll_width(),
            viewport_width
        );
        Ok(Self {
            chips,
            surface,
            drag,
            active: RefCell::new(ALL_CLIENTS.to_owned()),
        })
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    pub fn surface(&self) -> &ChipRowSurface {
        &self.surface
    }

    pub fn drag(&self) -> &DragScroll {
        &self.drag
    }

    pub fn active(&self) -> String {
        self.active.borrow().clone()
    }

    /// Chip under viewport coordinate `x`, if any.
    pub fn chip_at(&self, x: f32) -> Option<&Chip> {
        let content_x = x + self.surface.scroll_left();
        self.chips.iter().find(|chip| chip.contains(content_x))
    }

    /// Viewport x of the centre of the chip labelled `label`.
    pub fn chip_center(&self, label: &str) -> Option<f32> {
        self.chips
            .iter()
            .find(|chip| chip.label == label)
            .map(|chip| chip.x + chip.width / 2.0 - self.surface.scroll_left())
    }

    /// Forwards a pointer event from the row element to the engine.
    pub fn pointer_event(&self, event: PointerEvent) -> PointerDisposition {
        match event.kind {
            PointerEventKind::Down => self.surface.pressed.set(Some(event.id)),
            PointerEventKind::Up | PointerEventKind::Cancel => self.surface.pressed.set(None),
            PointerEventKind::Move => {}
        }
        let event = if event.kind == PointerEventKind::Down {
            let path = self.target_path(event.position.x);
            event.with_target(path)
        } else {
            event
        };
        self.drag.dispatch(&event)
    }

    /// Delivers a click at viewport `x`. Returns the chip it activated.
    pub fn click(&self, x: f32) -> Option<String> {
        let click = ClickEvent::new();
        if self.drag.stop_click_if_dragged(&click) {
            log::info!("click swallowed after drag");
            return None;
        }
        let chip = self.chip_at(x)?;
        self.active.replace(chip.label.clone());
        log::info!("active client: {}", chip.label);
        Some(chip.label.clone())
    }

    fn target_path(&self, x: f32) -> Vec<TargetElement> {
        let row = TargetElement::new("div");
        match self.chip_at(x) {
            Some(_) => vec![
                TargetElement::new("button").with_attribute("type"),
                TargetElement::new("div"),
                row,
            ],
            None => vec![row],
        }
    }
}

impl Drop for ChipRow {
    fn drop(&mut self) {
        self.drag.destroy();
    }
}
