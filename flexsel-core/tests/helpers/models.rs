use crate::models::common::Cost;
use crate::models::{Asset, SelectionFailure, SelectionResult, SelectionSuccess};
use crate::utils::{DefaultRandom, Environment, InfoLogger};
use std::sync::Arc;

pub fn test_logger() -> InfoLogger {
    Arc::new(|_| ())
}

pub fn create_test_environment() -> Arc<Environment> {
    Arc::new(Environment::new(Arc::new(DefaultRandom::default()), test_logger()))
}

pub fn create_asset(code: &str, activation_cost: Cost, volume: usize) -> Arc<Asset> {
    Arc::new(Asset::new(code, code, activation_cost, vec![], volume))
}

pub fn create_assets(data: &[(&str, f64, usize)]) -> Vec<Arc<Asset>> {
    data.iter().map(|(code, cost, volume)| create_asset(code, *cost, *volume)).collect()
}

pub fn get_success(result: SelectionResult) -> SelectionSuccess {
    match result {
        SelectionResult::Success(success) => success,
        SelectionResult::Failure(failure) => panic!("expected success, got failure: '{}'", failure.reason),
    }
}

pub fn get_failure(result: SelectionResult) -> SelectionFailure {
    match result {
        SelectionResult::Success(_) => panic!("expected failure, got success"),
        SelectionResult::Failure(failure) => failure,
    }
}

pub fn get_codes(success: &SelectionSuccess) -> Vec<String> {
    success.assets.iter().map(|asset| asset.code.clone()).collect()
}

pub fn get_sorted_codes(success: &SelectionSuccess) -> Vec<String> {
    let mut codes = get_codes(success);
    codes.sort();
    codes
}
