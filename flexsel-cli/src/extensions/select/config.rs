//! Selection tooling configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/select/config_test.rs"]
mod config_test;

use flexsel_core::selection::{DynamicProgEngine, GreedyEngine, HybridEngine, SelectionEngine};
use flexsel_core::utils::{Environment, GenericResult};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A selection tooling configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies which engine backs the selection. Default is hybrid.
    pub engine: Option<EngineType>,
    /// Specifies synthetic catalog generation parameters.
    pub generator: Option<GeneratorConfig>,
}

/// Specifies a selection engine implementation type.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum EngineType {
    /// An exact dynamic programming engine.
    DynamicProg,
    /// A fast cost-efficiency heuristic engine.
    Greedy,
    /// A scale dispatching engine which combines greedy and dynamic programming.
    Hybrid,
}

/// Specifies synthetic catalog generation parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Amount of assets to generate. Default is 1500.
    pub count: Option<usize>,
    /// A total volume which the generated catalog should approximate. Default is 1000000.
    pub total_volume_target: Option<usize>,
    /// A seed for reproducible generation. Default is 0.
    pub seed: Option<u64>,
    /// A factor applied to the scaled volume to get a base price. Default is 2.0.
    pub base_price_factor: Option<f64>,
}

/// Reads config from json reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a selection engine specified by the config, the hybrid one if not set.
pub fn create_engine(config: &Config, environment: Arc<Environment>) -> Arc<dyn SelectionEngine + Send + Sync> {
    match config.engine.unwrap_or(EngineType::Hybrid) {
        EngineType::DynamicProg => Arc::new(DynamicProgEngine::default()),
        EngineType::Greedy => Arc::new(GreedyEngine::default()),
        EngineType::Hybrid => Arc::new(HybridEngine::new(environment)),
    }
}
