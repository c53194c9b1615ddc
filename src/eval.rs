//! Rollout decisions built on top of stickiness bucketing.
//!
//! Strategy evaluation proper (constraint matching, toggle lookup) lives in the SDKs; these are
//! the two bucketing decisions every strategy layer shares. Both are pure functions of their
//! inputs, so repeated evaluations for the same identity are sticky by construction.

use serde::{Deserialize, Serialize};

use crate::stickiness::StickinessCalculator;

/// One of several named payload options a toggle can serve, selected by weighted bucketing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Name of the variant.
    pub name: String,
    /// Weight of the variant's share of `[1, totalWeight]`.
    pub weight: u32,
}

impl Variant {
    /// Create a variant with the given name and weight.
    pub fn new(name: impl Into<String>, weight: u32) -> Variant {
        Variant {
            name: name.into(),
            weight,
        }
    }
}

/// Returns whether a gradual rollout at `rollout_percentage` enables the toggle for `identity`.
///
/// The identity buckets into `[1, 100]` under `group_id`; the toggle is enabled iff the bucket is
/// at or below the percentage. `rollout_percentage` of 0 never enables, 100 always enables.
pub fn is_enabled(
    calculator: &impl StickinessCalculator,
    identity: &str,
    group_id: &str,
    rollout_percentage: u32,
) -> bool {
    let bucket = calculator.calculate(identity, group_id, 100);
    let enabled = bucket <= rollout_percentage;
    log::trace!(target: "toggle",
                identity,
                group_id,
                bucket,
                enabled;
                "evaluated gradual rollout");
    enabled
}

/// Selects the variant whose weight range contains the identity's bucket.
///
/// Variants own disjoint contiguous sub-ranges of `[1, totalWeight]` in declared order, so
/// reordering the list reshuffles assignments. Returns `None` when the set is empty or the total
/// weight is 0.
pub fn select_variant<'a>(
    calculator: &impl StickinessCalculator,
    identity: &str,
    group_id: &str,
    variants: &'a [Variant],
) -> Option<&'a Variant> {
    let total_weight: u32 = variants.iter().map(|variant| variant.weight).sum();
    if total_weight == 0 {
        return None;
    }

    let bucket = calculator.calculate(identity, group_id, total_weight);

    let mut upper_bound = 0;
    for variant in variants {
        upper_bound += variant.weight;
        if bucket <= upper_bound {
            log::trace!(target: "toggle",
                        identity,
                        group_id,
                        bucket,
                        variant = variant.name;
                        "selected variant");
            return Some(variant);
        }
    }

    // bucket <= total_weight and the ranges cover [1, total_weight], so this is unreachable
    None
}
