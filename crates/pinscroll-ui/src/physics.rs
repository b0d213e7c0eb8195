//! Pure physics for drag rows: edge resistance and width-adaptive friction.

use pinscroll_foundation::ScrollGeometry;

/// Overshoot is normalized against this share of the visible width.
const RESISTANCE_SPAN: f32 = 0.35;
/// Smallest width used when normalizing overshoot.
const MIN_RESISTANCE_WIDTH: f32 = 240.0;
const MIN_RESISTANCE_FACTOR: f32 = 0.25;

/// Width at which friction is lowest (short glide).
const NARROW_WIDTH: f32 = 320.0;
/// Width at which friction is highest (long glide).
const WIDE_WIDTH: f32 = 1400.0;
const NARROW_FRICTION: f32 = 0.90;
const WIDE_FRICTION: f32 = 0.965;
const MIN_FRICTION: f32 = 0.88;
const MAX_FRICTION: f32 = 0.975;

/// Share of per-frame decay that is always applied; the rest scales with
/// the resistance factor.
const EDGE_DECAY_BASE: f32 = 0.92;
const EDGE_DECAY_SPAN: f32 = 0.08;

/// Offset to write and the damping to apply to velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resistance {
    pub offset: f32,
    /// 1 inside bounds, in [0.25, 1) past an edge, 0 when nothing scrolls.
    pub factor: f32,
}

impl Resistance {
    pub fn is_resisting(&self) -> bool {
        self.factor < 1.0
    }
}

/// Applies rubber-band resistance to a desired scroll offset.
///
/// `rubber_band` is the resistance strength, or `None` to hard-clamp. The
/// returned offset is always within `[0, max]`: overscroll is never
/// rendered, it only damps velocity.
pub fn edge_resistance(
    geometry: ScrollGeometry,
    desired: f32,
    rubber_band: Option<f32>,
) -> Resistance {
    let max = geometry.max_offset();
    if max <= 0.0 || max.is_nan() {
        return Resistance {
            offset: 0.0,
            factor: 0.0,
        };
    }

    let desired = if desired.is_nan() { 0.0 } else { desired };

    let Some(strength) = rubber_band else {
        return Resistance {
            offset: desired.clamp(0.0, max),
            factor: 1.0,
        };
    };

    if (0.0..=max).contains(&desired) {
        return Resistance {
            offset: desired,
            factor: 1.0,
        };
    }

    let overshoot = if desired < 0.0 { -desired } else { desired - max };
    let span = geometry.client_width.max(MIN_RESISTANCE_WIDTH) * RESISTANCE_SPAN;
    let normalized = (overshoot / span).clamp(0.0, 1.0);
    let factor = (1.0 - normalized * strength).clamp(MIN_RESISTANCE_FACTOR, 1.0);

    Resistance {
        offset: desired.clamp(0.0, max),
        factor,
    }
}

/// Momentum friction for a row `client_width` wide.
///
/// Maps 320px..1400px linearly onto 0.90..0.965, averages that with
/// `base_friction`, and clamps into [0.88, 0.975]. Wider rows glide longer.
pub fn friction_for_width(client_width: f32, base_friction: f32) -> f32 {
    let width = client_width.max(NARROW_WIDTH);
    let t = ((width - NARROW_WIDTH) / (WIDE_WIDTH - NARROW_WIDTH)).clamp(0.0, 1.0);
    let width_friction = NARROW_FRICTION + t * (WIDE_FRICTION - NARROW_FRICTION);
    (base_friction * 0.5 + width_friction * 0.5).clamp(MIN_FRICTION, MAX_FRICTION)
}

/// Per-frame velocity multiplier; decays harder while resisting at an edge.
pub fn momentum_decay(friction: f32, resistance_factor: f32) -> f32 {
    friction * (EDGE_DECAY_BASE + resistance_factor * EDGE_DECAY_SPAN)
}
