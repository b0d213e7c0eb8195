use pinscroll_foundation::gesture_constants::{
    AXIS_LOCK_THRESHOLD, DEFAULT_BASE_FRICTION, DEFAULT_MAX_VELOCITY,
    DEFAULT_RUBBER_BAND_STRENGTH,
};
use pinscroll_foundation::{SelectorError, TargetSelector};

/// Bounds kept on `base_friction` so momentum always decays.
const MIN_BASE_FRICTION: f32 = 0.01;
const MAX_BASE_FRICTION: f32 = 0.999;

/// Tuning for a [`DragScroll`](crate::DragScroll) engine. Immutable once attached.
#[derive(Clone, Debug, PartialEq)]
pub struct DragScrollConfig {
    /// Exclude touch and coarse primary pointers.
    pub restrict_to_fine_pointers: bool,
    pub momentum_enabled: bool,
    /// Wait for `axis_lock_threshold` of movement before deciding the axis.
    pub lock_axis: bool,
    pub axis_lock_threshold: f32,
    /// Base momentum friction in (0, 1); blended with the width-adaptive value.
    pub base_friction: f32,
    /// Velocity clamp in px/ms.
    pub max_velocity: f32,
    pub rubber_band_enabled: bool,
    /// Edge-resistance strength in [0, 1].
    pub rubber_band_strength: f32,
    /// Press targets that never start a drag.
    pub ignored_targets: TargetSelector,
}

impl Default for DragScrollConfig {
    fn default() -> Self {
        Self {
            restrict_to_fine_pointers: true,
            momentum_enabled: true,
            lock_axis: true,
            axis_lock_threshold: AXIS_LOCK_THRESHOLD,
            base_friction: DEFAULT_BASE_FRICTION,
            max_velocity: DEFAULT_MAX_VELOCITY,
            rubber_band_enabled: true,
            rubber_band_strength: DEFAULT_RUBBER_BAND_STRENGTH,
            ignored_targets: TargetSelector::default(),
        }
    }
}

impl DragScrollConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fine_pointers_only(mut self, restrict: bool) -> Self {
        self.restrict_to_fine_pointers = restrict;
        self
    }

    pub fn with_momentum(mut self, enabled: bool) -> Self {
        self.momentum_enabled = enabled;
        self
    }

    pub fn with_axis_lock(mut self, enabled: bool) -> Self {
        self.lock_axis = enabled;
        self
    }

    pub fn with_axis_lock_threshold(mut self, threshold: f32) -> Self {
        if threshold.is_finite() {
            self.axis_lock_threshold = threshold.max(0.0);
        }
        self
    }

    pub fn with_base_friction(mut self, friction: f32) -> Self {
        if friction.is_finite() {
            self.base_friction = friction.clamp(MIN_BASE_FRICTION, MAX_BASE_FRICTION);
        }
        self
    }

    pub fn with_max_velocity(mut self, max_velocity: f32) -> Self {
        if max_velocity.is_finite() {
            self.max_velocity = max_velocity.abs();
        }
        self
    }

    pub fn with_rubber_band(mut self, enabled: bool) -> Self {
        self.rubber_band_enabled = enabled;
        self
    }

    pub fn with_rubber_band_strength(mut self, strength: f32) -> Self {
        if strength.is_finite() {
            self.rubber_band_strength = strength.clamp(0.0, 1.0);
        }
        self
    }

    pub fn with_ignored_targets(mut self, selector: TargetSelector) -> Self {
        self.ignored_targets = selector;
        self
    }

    /// Parses a selector list such as `"button,a,[data-no-drag]"`.
    pub fn with_ignore_selector(self, selector: &str) -> Result<Self, SelectorError> {
        Ok(self.with_ignored_targets(TargetSelector::parse(selector)?))
    }

    /// Edge-resistance strength, or `None` when resistance is off.
    pub fn rubber_band(&self) -> Option<f32> {
        self.rubber_band_enabled.then_some(self.rubber_band_strength)
    }
}
