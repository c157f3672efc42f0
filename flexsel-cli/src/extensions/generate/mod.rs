//! Generate command helpers which create synthetic asset catalogs for testing and benchmarking.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate_test.rs"]
mod generate_test;

use chrono::{Duration, NaiveDate};
use flexsel_core::models::Asset;
use flexsel_core::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Keeps parameters of synthetic catalog generation.
#[derive(Clone, Debug)]
pub struct CatalogPrototype {
    /// Amount of assets to generate.
    pub count: usize,
    /// A base date used to spread availability.
    pub today: NaiveDate,
    /// A total volume which the generated catalog should approximate.
    pub total_volume_target: usize,
    /// A seed for random generation to get reproducible catalogs.
    pub seed: u64,
    /// A factor applied to the scaled volume to get a base price.
    pub base_price_factor: f64,
}

/// Generates a synthetic asset catalog from the prototype.
///
/// One third of assets ends up available at the prototype date, the rest the day before or
/// after. Before scaling, 50% of assets are small (10-100), 45% are medium (101-1000) and 5%
/// are large (1001-5000) volume units; the individual volumes are then scaled so that the
/// whole catalog approximates the requested total, which means a higher count produces
/// smaller assets. Prices follow the scaled volume with +/- 50% evenly distributed noise,
/// rounded to cents and kept at 1.0 minimum.
pub fn generate_catalog(prototype: &CatalogPrototype) -> Vec<Arc<Asset>> {
    let random = DefaultRandom::new_with_seed(prototype.seed);

    let drafts = (0..prototype.count)
        .map(|index| {
            let volume_roll = random.uniform_int(0, 99);
            let volume = match volume_roll {
                0..=49 => random.uniform_int(10, 100),
                50..=94 => random.uniform_int(101, 1000),
                _ => random.uniform_int(1001, 5000),
            } as usize;

            let day = prototype.today + Duration::days(random.uniform_int(-1, 1) as i64);

            (index, day, volume)
        })
        .collect::<Vec<_>>();

    let total = drafts.iter().map(|(_, _, volume)| volume).sum::<usize>();
    let factor = prototype.total_volume_target as f64 / total as f64;

    drafts
        .into_iter()
        .map(|(index, day, volume)| {
            let scaled = volume as f64 * factor;
            let volume = (scaled.round() as usize).max(1);
            let noise = 0.5 + random.uniform_real(0., 1.);
            let activation_cost = ((scaled * prototype.base_price_factor * noise * 100.).round() / 100.).max(1.);

            Arc::new(Asset::new(
                &format!("ASSET-{index}"),
                &format!("Generated Asset {index}"),
                activation_cost,
                vec![day],
                volume,
            ))
        })
        .collect()
}
