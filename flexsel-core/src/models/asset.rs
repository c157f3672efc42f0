#[cfg(test)]
#[path = "../../tests/unit/models/asset_test.rs"]
mod asset_test;

use crate::models::common::Cost;
use chrono::NaiveDate;

/// Represents a flexibility asset: a discrete resource which can be activated on specific
/// calendar dates to contribute its full volume towards a demand-response target.
///
/// An asset is immutable once constructed: selection engines only share references to it,
/// they never mutate or deduplicate assets. Activation is all-or-nothing, so the cost is
/// incurred fully no matter how much of the volume is actually needed.
#[derive(Clone, Debug)]
pub struct Asset {
    /// A unique stable identifier within a candidate set.
    pub code: String,
    /// A display label with no semantic role in selection.
    pub name: String,
    /// A non-negative cost incurred if the asset is selected.
    pub activation_cost: Cost,
    /// Calendar dates on which the asset can be activated.
    pub availability: Vec<NaiveDate>,
    /// A positive capacity contributed if selected, in the same unit as the target volume.
    pub volume: usize,
}

impl Asset {
    /// Creates a new instance of `Asset`.
    pub fn new(code: &str, name: &str, activation_cost: Cost, availability: Vec<NaiveDate>, volume: usize) -> Self {
        Self { code: code.to_string(), name: name.to_string(), activation_cost, availability, volume }
    }

    /// Returns cost per volume unit which is used as the greedy sort key.
    pub fn cost_efficiency(&self) -> Cost {
        self.activation_cost / self.volume as f64
    }

    /// Checks whether the asset can be activated at the given date.
    pub fn is_available_at(&self, date: NaiveDate) -> bool {
        self.availability.contains(&date)
    }
}
