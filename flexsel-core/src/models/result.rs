use crate::models::Asset;
use crate::models::common::Cost;
use std::sync::Arc;

/// A classification code for semantic failures: invalid request shape or a candidate set
/// which cannot cover the target.
pub const VALIDATION_FAILURE_CODE: i32 = 422;

/// A classification code for unexpected internal failures assigned at the orchestration boundary.
pub const INTERNAL_FAILURE_CODE: i32 = 500;

/// Specifies a selection result variant. A failure is terminal for the call: engines never
/// retry and never return partial selections.
pub enum SelectionResult {
    /// Successful selection result.
    Success(SelectionSuccess),
    /// Selection failure.
    Failure(SelectionFailure),
}

/// Specifies a successful selection: assets which together meet or exceed the target volume.
pub struct SelectionSuccess {
    /// Selected assets. No specific order is guaranteed.
    pub assets: Vec<Arc<Asset>>,
}

/// Specifies a selection failure.
pub struct SelectionFailure {
    /// A human readable reason.
    pub reason: String,
    /// A numeric classification code used by a boundary layer to choose a transport status.
    pub code: i32,
}

impl SelectionResult {
    /// Creates a successful selection result from selected assets.
    pub fn make_success(assets: Vec<Arc<Asset>>) -> Self {
        Self::Success(SelectionSuccess { assets })
    }

    /// Creates a failure classified as a validation (or insufficiency) issue.
    pub fn make_validation_failure(reason: &str) -> Self {
        Self::Failure(SelectionFailure { reason: reason.to_string(), code: VALIDATION_FAILURE_CODE })
    }

    /// Creates a failure classified as an unexpected internal error.
    pub fn make_internal_failure(reason: &str) -> Self {
        Self::Failure(SelectionFailure { reason: reason.to_string(), code: INTERNAL_FAILURE_CODE })
    }
}

impl SelectionSuccess {
    /// Returns a total activation cost of the selected assets.
    pub fn total_cost(&self) -> Cost {
        self.assets.iter().map(|asset| asset.activation_cost).sum()
    }

    /// Returns a total volume of the selected assets.
    pub fn total_volume(&self) -> usize {
        self.assets.iter().map(|asset| asset.volume).sum()
    }
}
