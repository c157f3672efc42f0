//! Contains interchangeable selection engines which pick a minimum-cost subset of assets
//! covering a target volume: an exact dynamic programming solver, a fast cost-efficiency
//! heuristic and a hybrid which composes the two for large targets.

mod dynamic_prog;
pub use self::dynamic_prog::*;

mod greedy;
pub use self::greedy::*;

mod hybrid;
pub use self::hybrid::*;

use crate::models::{Asset, SelectionResult};
use std::sync::Arc;

pub(crate) const NO_ASSETS_AVAILABLE: &str = "No assets available";
pub(crate) const INSUFFICIENT_ASSETS: &str = "Insufficient assets to meet target volume";

/// Selects assets which together meet or exceed a target volume at minimal activation cost.
///
/// Implementations are pure, synchronous and stateless between calls: each invocation works
/// on its own candidate snapshot, so concurrent calls need no coordination. Expected failures
/// (validation, insufficiency) are returned as values, never raised.
pub trait SelectionEngine {
    /// Selects assets from candidates to cover the target volume.
    fn select_assets(&self, target_volume: usize, candidates: &[Arc<Asset>]) -> SelectionResult;
}

/// Checks preconditions shared by all engines: a zero target or an empty candidate set is
/// rejected before any algorithmic work.
pub(crate) fn validate_candidates(target_volume: usize, candidates: &[Arc<Asset>]) -> Option<SelectionResult> {
    if target_volume == 0 || candidates.is_empty() {
        Some(SelectionResult::make_validation_failure(NO_ASSETS_AVAILABLE))
    } else {
        None
    }
}
