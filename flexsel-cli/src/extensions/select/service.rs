#[cfg(test)]
#[path = "../../../tests/unit/extensions/select/service_test.rs"]
mod service_test;

use chrono::NaiveDate;
use flexsel_core::models::{Asset, SelectionResult};
use flexsel_core::selection::SelectionEngine;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// Runs asset selection against a catalog: validates the requested volume, filters assets by
/// the requested date and delegates to the configured engine.
pub struct SelectionService {
    catalog: Vec<Arc<Asset>>,
    engine: Arc<dyn SelectionEngine + Send + Sync>,
}

impl SelectionService {
    /// Creates a new instance of `SelectionService`.
    pub fn new(catalog: Vec<Arc<Asset>>, engine: Arc<dyn SelectionEngine + Send + Sync>) -> Self {
        Self { catalog, engine }
    }

    /// Finds assets which cover the given volume at the given date. Engines are expected to
    /// be total functions over valid input; anything unexpected is contained here and
    /// reported as an internal failure instead of unwinding further.
    pub fn find_assets(&self, date: NaiveDate, volume: i64) -> SelectionResult {
        if volume <= 0 {
            return SelectionResult::make_validation_failure("Invalid volume");
        }

        let candidates =
            self.catalog.iter().filter(|asset| asset.is_available_at(date)).cloned().collect::<Vec<_>>();

        if candidates.is_empty() {
            return SelectionResult::make_validation_failure("No assets available");
        }

        let engine = self.engine.clone();
        catch_unwind(AssertUnwindSafe(move || engine.select_assets(volume as usize, &candidates)))
            .unwrap_or_else(|_| SelectionResult::make_internal_failure("Error processing assets"))
    }
}
