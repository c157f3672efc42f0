#[cfg(test)]
#[path = "../../tests/unit/selection/greedy_test.rs"]
mod greedy_test;

use crate::models::{Asset, SelectionResult};
use crate::selection::{INSUFFICIENT_ASSETS, SelectionEngine, validate_candidates};
use crate::utils::compare_floats;
use std::sync::Arc;

/// A fast heuristic solver which prioritizes speed (O(N log N)) over optimality.
///
/// It works in two phases: accumulation picks assets in cost-efficiency order until the
/// target is met, refinement then discards the most expensive assets which turned out to be
/// redundant once overshoot is accounted for. The produced cost can be strictly worse than
/// the dynamic programming one on adversarial inputs, which is expected behavior.
#[derive(Default)]
pub struct GreedyEngine {}

impl SelectionEngine for GreedyEngine {
    fn select_assets(&self, target_volume: usize, candidates: &[Arc<Asset>]) -> SelectionResult {
        if let Some(failure) = validate_candidates(target_volume, candidates) {
            return failure;
        }

        let (selected, current_volume) = accumulate(target_volume, candidates);
        if current_volume < target_volume {
            return SelectionResult::make_validation_failure(INSUFFICIENT_ASSETS);
        }

        SelectionResult::make_success(trim_redundant(selected, current_volume, target_volume))
    }
}

/// Picks assets in ascending cost-efficiency order, stopping right after the asset which
/// reaches or passes the target. Returns the selection with its accumulated volume, which
/// stays below the target when candidates cannot cover it.
pub(crate) fn accumulate(target_volume: usize, candidates: &[Arc<Asset>]) -> (Vec<Arc<Asset>>, usize) {
    let mut sorted = candidates.to_vec();
    sorted.sort_by(|a, b| compare_floats(a.cost_efficiency(), b.cost_efficiency()));

    let mut selected = Vec::new();
    let mut current_volume = 0;

    for asset in sorted {
        current_volume += asset.volume;
        selected.push(asset);
        if current_volume >= target_volume {
            break;
        }
    }

    (selected, current_volume)
}

/// Drops assets which became redundant due to overshoot, most expensive first, keeping the
/// accumulated volume at or above the target.
pub(crate) fn trim_redundant(
    mut selected: Vec<Arc<Asset>>,
    mut current_volume: usize,
    target_volume: usize,
) -> Vec<Arc<Asset>> {
    selected.sort_by(|a, b| compare_floats(b.activation_cost, a.activation_cost));

    selected.retain(|asset| {
        if current_volume - asset.volume >= target_volume {
            current_volume -= asset.volume;
            false
        } else {
            true
        }
    });

    selected
}
