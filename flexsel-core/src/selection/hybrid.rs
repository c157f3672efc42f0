#[cfg(test)]
#[path = "../../tests/unit/selection/hybrid_test.rs"]
mod hybrid_test;

use crate::models::{Asset, SelectionResult};
use crate::selection::{SelectionEngine, validate_candidates};
use crate::selection::dynamic_prog::select_minimal_cost;
use crate::selection::greedy::{accumulate, trim_redundant};
use crate::utils::Environment;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// If the target volume exceeds this threshold, the greedy reduction path is taken.
const HYBRID_THRESHOLD: usize = 100_000;

/// A volume amount left to the dynamic programming phase after the greedy reduction, which
/// bounds the dp table size no matter how large the original target is.
const DP_REDUCTION_TARGET: usize = 50_000;

/// An engine which dispatches on target scale: small targets go straight to the exact
/// dynamic programming solver, large targets are first reduced by the greedy heuristic and
/// only the remaining gap is solved exactly.
///
/// The combined selection is re-trimmed against the full target and finally compared with a
/// pure greedy run, keeping whichever is cheaper. That safety net bounds the worst-case cost
/// by the plain greedy cost, while the reduction bounds memory: a small amount of optimality
/// is traded for a dp table limited by [`DP_REDUCTION_TARGET`].
pub struct HybridEngine {
    environment: Arc<Environment>,
}

impl HybridEngine {
    /// Creates a new instance of `HybridEngine`.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment }
    }
}

impl Default for HybridEngine {
    fn default() -> Self {
        Self::new(Arc::new(Environment::default()))
    }
}

impl SelectionEngine for HybridEngine {
    fn select_assets(&self, target_volume: usize, candidates: &[Arc<Asset>]) -> SelectionResult {
        if let Some(failure) = validate_candidates(target_volume, candidates) {
            return failure;
        }

        if target_volume <= HYBRID_THRESHOLD {
            return select_minimal_cost(target_volume, candidates);
        }

        let logger = &self.environment.logger;

        let greedy_target = target_volume - DP_REDUCTION_TARGET;
        let preliminary = {
            let (selected, volume) = accumulate(greedy_target, candidates);
            trim_redundant(selected, volume, greedy_target)
        };
        let preliminary_volume = preliminary.iter().map(|asset| asset.volume).sum::<usize>();

        if preliminary_volume >= target_volume {
            (logger)("hybrid: greedy reduction met the full target, skipping dp refinement");
            return SelectionResult::make_success(preliminary);
        }

        let dp_target = target_volume - preliminary_volume;
        (logger)(format!("hybrid: greedy reduction reached {preliminary_volume} units, dp target is {dp_target}").as_str());

        let used_codes = preliminary.iter().map(|asset| asset.code.as_str()).collect::<FxHashSet<_>>();
        let remaining = candidates
            .iter()
            .filter(|asset| !used_codes.contains(asset.code.as_str()))
            .cloned()
            .collect::<Vec<_>>();

        let combined = match select_minimal_cost(dp_target, &remaining) {
            SelectionResult::Success(success) => {
                preliminary.into_iter().chain(success.assets).collect::<Vec<_>>()
            }
            failure @ SelectionResult::Failure(_) => return failure,
        };

        let combined_volume = combined.iter().map(|asset| asset.volume).sum::<usize>();
        let refined = trim_redundant(combined, combined_volume, target_volume);

        // an independent pure greedy run bounds the worst case cost of the composition
        let fallback = {
            let (selected, volume) = accumulate(target_volume, candidates);
            trim_redundant(selected, volume, target_volume)
        };

        let refined_cost = refined.iter().map(|asset| asset.activation_cost).sum::<f64>();
        let fallback_cost = fallback.iter().map(|asset| asset.activation_cost).sum::<f64>();

        if fallback_cost < refined_cost {
            (logger)("hybrid: pure greedy run is cheaper than the composed selection, keeping it");
            SelectionResult::make_success(fallback)
        } else {
            SelectionResult::make_success(refined)
        }
    }
}
