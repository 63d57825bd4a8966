//! Per-stop visual parameters derived from the two scroll signals.
//!
//! Horizontal entrance and opacity follow the immediate signal across the
//! breakpoints `(i-1)·H, i·H, (i+1)·H`.  Vertical drift follows the damped
//! signal across `i·H, (i+½)·H, (i+1)·H`, so it trails the entrance by the
//! easing delay.  All curves clamp at their ends.

use std::ops::Range;

use super::interpolate::interpolate;
use crate::constants::{DRIFT_STOPS, ENTRY_OFFSET_X, ITEM_HEIGHT, OPACITY_STOPS};

/// Which element of a stop is being animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualRole {
    /// The number badge, entering from the left.
    Label,
    /// The venue card, entering from the right.
    Detail,
}

impl VisualRole {
    fn entry_x(self) -> f64 {
        match self {
            VisualRole::Label => -ENTRY_OFFSET_X,
            VisualRole::Detail => ENTRY_OFFSET_X,
        }
    }
}

/// Transform and opacity for one element of one stop, in layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualParams {
    pub translate_x: f64,
    pub translate_y: f64,
    /// Always within `[0, 1]`.
    pub opacity: f64,
}

impl VisualParams {
    /// No transform, fully opaque.
    pub const IDENTITY: VisualParams = VisualParams {
        translate_x: 0.0,
        translate_y: 0.0,
        opacity: 1.0,
    };
}

/// Pure mapping from a stop's position and the two signals to its params.
pub fn compute_visual_params(
    role: VisualRole,
    record_index: usize,
    immediate: f64,
    damped: f64,
) -> VisualParams {
    let i = record_index as f64;
    let h = ITEM_HEIGHT;

    let horizontal = [(i - 1.0) * h, i * h, (i + 1.0) * h];
    let translate_x = interpolate(immediate, &horizontal, &[role.entry_x(), 0.0, 0.0]);
    let opacity = interpolate(immediate, &horizontal, &OPACITY_STOPS);

    let vertical = [i * h, (i + 0.5) * h, (i + 1.0) * h];
    let translate_y = interpolate(damped, &vertical, &DRIFT_STOPS);

    VisualParams {
        translate_x,
        translate_y,
        opacity: opacity.clamp(0.0, 1.0),
    }
}

// ───────────────────────────────────────── cache ─────────────

/// Badge and card params for one stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopParams {
    pub index: usize,
    pub label: VisualParams,
    pub detail: VisualParams,
}

/// Memoised params for the stops currently eligible for rendering.
///
/// Recomputes only when a signal or the eligible range changes; since the
/// mapping is pure, a hit returns exactly what a recompute would.
#[derive(Debug, Default)]
pub struct ParamsCache {
    key: Option<(u64, u64, Range<usize>, bool)>,
    stops: Vec<StopParams>,
    recomputes: u64,
}

impl ParamsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Params for every stop in `eligible`.  `static_layout` forces the
    /// identity transform (compact mode).
    pub fn get(
        &mut self,
        immediate: f64,
        damped: f64,
        eligible: Range<usize>,
        static_layout: bool,
    ) -> &[StopParams] {
        let key = (
            immediate.to_bits(),
            damped.to_bits(),
            eligible.clone(),
            static_layout,
        );
        if self.key.as_ref() != Some(&key) {
            self.stops.clear();
            self.stops.extend(eligible.clone().map(|index| {
                if static_layout {
                    StopParams {
                        index,
                        label: VisualParams::IDENTITY,
                        detail: VisualParams::IDENTITY,
                    }
                } else {
                    StopParams {
                        index,
                        label: compute_visual_params(VisualRole::Label, index, immediate, damped),
                        detail: compute_visual_params(VisualRole::Detail, index, immediate, damped),
                    }
                }
            }));
            self.key = Some(key);
            self.recomputes += 1;
        }
        &self.stops
    }

    /// How many times the params were actually recomputed.
    #[cfg(test)]
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [VisualRole; 2] = [VisualRole::Label, VisualRole::Detail];

    #[test]
    fn centred_stop_is_settled_and_opaque() {
        for i in 0..13 {
            for role in ROLES {
                let p = compute_visual_params(role, i, i as f64 * ITEM_HEIGHT, 0.0);
                assert_eq!(p.translate_x, 0.0);
                assert_eq!(p.opacity, 1.0);
            }
        }
    }

    #[test]
    fn before_entry_is_invisible_and_offset() {
        for i in 0..13 {
            let before = (i as f64 - 1.0) * ITEM_HEIGHT;
            for offset in [before, before - 1.0, before - 10_000.0] {
                let label = compute_visual_params(VisualRole::Label, i, offset, 0.0);
                let detail = compute_visual_params(VisualRole::Detail, i, offset, 0.0);
                assert_eq!(label.opacity, 0.0);
                assert_eq!(label.translate_x, -300.0);
                assert_eq!(detail.translate_x, 300.0);
            }
        }
    }

    #[test]
    fn after_exit_fades_to_thirty_percent() {
        for i in 0..13 {
            let after = (i as f64 + 1.0) * ITEM_HEIGHT;
            for offset in [after, after + 1.0, after + 10_000.0] {
                let p = compute_visual_params(VisualRole::Detail, i, offset, 0.0);
                assert_eq!(p.opacity, 0.3);
                assert_eq!(p.translate_x, 0.0);
            }
        }
    }

    #[test]
    fn halfway_in_is_halfway_across() {
        let p = compute_visual_params(VisualRole::Label, 2, 900.0, 0.0);
        assert_eq!(p.translate_x, -150.0);
        assert_eq!(p.opacity, 0.5);
    }

    #[test]
    fn vertical_drift_follows_damped_signal_only() {
        let i = 3;
        let base = i as f64 * ITEM_HEIGHT;
        // Immediate far ahead, damped still at the start: no drift yet.
        let p = compute_visual_params(VisualRole::Detail, i, base + 600.0, base);
        assert_eq!(p.translate_y, 0.0);
        let p = compute_visual_params(VisualRole::Detail, i, base, base + 300.0);
        assert_eq!(p.translate_y, -50.0);
        let p = compute_visual_params(VisualRole::Detail, i, base, base + 5000.0);
        assert_eq!(p.translate_y, -150.0);
    }

    #[test]
    fn identical_inputs_give_bit_identical_output() {
        let a = compute_visual_params(VisualRole::Label, 5, 3123.456, 2987.001);
        let b = compute_visual_params(VisualRole::Label, 5, 3123.456, 2987.001);
        assert_eq!(a.translate_x.to_bits(), b.translate_x.to_bits());
        assert_eq!(a.translate_y.to_bits(), b.translate_y.to_bits());
        assert_eq!(a.opacity.to_bits(), b.opacity.to_bits());
    }

    #[test]
    fn cache_recomputes_only_on_signal_change() {
        let mut cache = ParamsCache::new();
        let first = cache.get(650.0, 600.0, 0..3, false).to_vec();
        assert_eq!(first.len(), 3);
        assert_eq!(cache.get(650.0, 600.0, 0..3, false), &first[..]);
        assert_eq!(cache.recomputes(), 1);

        cache.get(650.0, 610.0, 0..3, false);
        assert_eq!(cache.recomputes(), 2);
        cache.get(650.0, 610.0, 1..4, false);
        assert_eq!(cache.recomputes(), 3);
    }

    #[test]
    fn cache_matches_direct_computation() {
        let mut cache = ParamsCache::new();
        for stop in cache.get(1800.0, 1500.0, 2..5, false) {
            assert_eq!(
                stop.detail,
                compute_visual_params(VisualRole::Detail, stop.index, 1800.0, 1500.0)
            );
        }
    }

    #[test]
    fn static_layout_uses_identity() {
        let mut cache = ParamsCache::new();
        let stops = cache.get(0.0, 0.0, 0..13, true);
        assert!(stops.iter().all(|s| s.label == VisualParams::IDENTITY));
    }
}
