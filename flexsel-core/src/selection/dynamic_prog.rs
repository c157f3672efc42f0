#[cfg(test)]
#[path = "../../tests/unit/selection/dynamic_prog_test.rs"]
mod dynamic_prog_test;

use crate::models::{Asset, SelectionResult};
use crate::selection::{INSUFFICIENT_ASSETS, SelectionEngine, validate_candidates};
use std::sync::Arc;

/// An exact solver which picks an optimal combination of assets to meet a target volume at
/// minimum cost using a 0/1 knapsack-style dynamic programming approach.
///
/// The algorithm builds a cost table where each index represents an achieved volume, storing
/// the minimum activation cost found so far to reach at least that volume. Time complexity is
/// O(assets * target volume) and space is O(target volume), so the target volume is the main
/// memory driver: very large targets can exhaust memory, which is a known accepted limitation.
/// Callers operating at such scale should prefer [`crate::selection::HybridEngine`].
#[derive(Default)]
pub struct DynamicProgEngine {}

impl SelectionEngine for DynamicProgEngine {
    fn select_assets(&self, target_volume: usize, candidates: &[Arc<Asset>]) -> SelectionResult {
        if let Some(failure) = validate_candidates(target_volume, candidates) {
            return failure;
        }

        select_minimal_cost(target_volume, candidates)
    }
}

/// Keeps an asset chained to the solution of its predecessor volume index. Nodes live in a
/// flat arena addressed by integer index, so reconstruction needs no per-node heap allocation.
struct ChainNode {
    asset_idx: usize,
    parent: Option<usize>,
}

/// Runs the dynamic programming selection. Shared with the hybrid engine which applies it
/// to a reduced target.
pub(crate) fn select_minimal_cost(target_volume: usize, candidates: &[Arc<Asset>]) -> SelectionResult {
    // dp[v] stores the minimum cost found so far to achieve at least v volume units,
    // where the last index collapses all overshoot: solutions exceeding the target
    // are equivalent as the overshoot amount is cost-irrelevant.
    let mut dp = vec![f64::INFINITY; target_volume + 1];
    dp[0] = 0.;

    let mut arena: Vec<ChainNode> = Vec::new();
    let mut tracker: Vec<Option<usize>> = vec![None; target_volume + 1];

    for (asset_idx, asset) in candidates.iter().enumerate() {
        let volume = asset.volume;
        let cost = asset.activation_cost;

        // iterate backwards so that each asset is used at most once within the pass
        for v in (0..target_volume).rev() {
            if dp[v].is_infinite() {
                continue;
            }

            let next_v = (v + volume).min(target_volume);
            let next_cost = dp[v] + cost;

            // strict comparison keeps the earlier found solution on cost ties
            if next_cost < dp[next_v] {
                dp[next_v] = next_cost;
                arena.push(ChainNode { asset_idx, parent: tracker[v] });
                tracker[next_v] = Some(arena.len() - 1);
            }
        }
    }

    if dp[target_volume].is_infinite() {
        return SelectionResult::make_validation_failure(INSUFFICIENT_ASSETS);
    }

    // walk the chain backwards to collect assets of the cheapest solution
    let mut assets = Vec::new();
    let mut node_idx = tracker[target_volume];
    while let Some(idx) = node_idx {
        let node = &arena[idx];
        assets.push(candidates[node.asset_idx].clone());
        node_idx = node.parent;
    }

    SelectionResult::make_success(assets)
}
