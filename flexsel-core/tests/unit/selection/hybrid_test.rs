use super::*;
use crate::generator::generate_assets;
use crate::helpers::models::*;
use crate::models::VALIDATION_FAILURE_CODE;
use crate::selection::{DynamicProgEngine, GreedyEngine};
use chrono::NaiveDate;
use rayon::prelude::*;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()
}

fn create_engine() -> HybridEngine {
    HybridEngine::new(create_test_environment())
}

parameterized_test! {can_select_expected_assets, (target_volume, assets, expected), {
    can_select_expected_assets_impl(target_volume, create_assets(assets), expected);
}}

can_select_expected_assets! {
    case_01_all_assets_needed: (150, &[("A", 10., 100), ("B", 10., 100)], &["A", "B"]),
    case_02_non_optimal_sub_solution_required: (5, &[("A", 2.44, 2), ("B", 2.19, 3), ("C", 1.17, 2), ("D", 1., 1)], &["B", "C"]),
    case_03_cheaper_combination_preferred: (16, &[("A", 5., 5), ("B", 4., 5), ("E", 3., 7), ("F", 3., 5)], &["B", "E", "F"]),
    case_04_single_asset_list: (100, &[("A", 10., 150)], &["A"]),
    case_05_cheapest_of_two_options: (100, &[("EXPENSIVE", 1000., 100), ("CHEAP", 100., 100)], &["CHEAP"]),
    case_06_small_asset_beats_huge_one: (50, &[("SMALL", 10., 60), ("HUGE", 100., 1000)], &["SMALL"]),
    case_07_long_list_of_assets: (150,
        &[("A", 10., 100), ("B", 10., 10), ("C", 10., 10), ("G", 100., 50), ("H", 100., 1000),
          ("I", 100., 10000), ("J", 100., 100000), ("D", 10., 10), ("E", 10., 10), ("F", 10., 10)],
        &["A", "B", "C", "D", "E", "F"]),
    case_08_equal_assets_kept_once: (15, &[("A", 1., 5), ("B", 1., 5), ("E", 1., 5), ("C", 10., 9), ("D", 100., 10)], &["A", "B", "E"]),
    case_09_overshoot_and_backtrack: (50_000,
        &[("A", 23270., 16129), ("B", 30671., 50000), ("E", 29743., 43011), ("C", 397110., 404839), ("D", 381613., 486022)],
        &["B"]),
    case_10_above_threshold_composition: (150_000,
        &[("A", 100., 50000), ("B", 120., 60000), ("C", 90., 50000), ("D", 200., 100000)],
        &["A", "B", "C"]),
}

fn can_select_expected_assets_impl(target_volume: usize, assets: Vec<Arc<Asset>>, expected: &[&str]) {
    let result = create_engine().select_assets(target_volume, &assets);

    let success = get_success(result);
    assert_eq!(get_sorted_codes(&success), expected);
    assert!(success.total_volume() >= target_volume);
}

#[test]
fn can_reject_empty_candidates() {
    let failure = get_failure(create_engine().select_assets(8, &[]));

    assert_eq!(failure.code, VALIDATION_FAILURE_CODE);
}

#[test]
fn can_reject_zero_target_volume() {
    let assets = create_assets(&[("A", 10., 100)]);

    let failure = get_failure(create_engine().select_assets(0, &assets));

    assert_eq!(failure.code, VALIDATION_FAILURE_CODE);
}

#[test]
fn can_detect_insufficient_candidates_above_threshold() {
    let assets = create_assets(&[("A", 10., 60000)]);

    let failure = get_failure(create_engine().select_assets(150_000, &assets));

    assert_eq!(failure.code, VALIDATION_FAILURE_CODE);
    assert!(failure.reason.contains("Insufficient"));
}

#[test]
fn can_skip_dp_refinement_when_greedy_meets_target() {
    let assets = create_assets(&[("A", 100., 200_000), ("B", 500., 100_000)]);

    let success = get_success(create_engine().select_assets(150_000, &assets));

    assert_eq!(get_sorted_codes(&success), &["A"]);
}

#[test]
fn can_perform_not_worse_than_greedy() {
    let hybrid = create_engine();
    let greedy = GreedyEngine::default();
    let target_volume = 150_000;

    (0..1000_u64).into_par_iter().for_each(|seed| {
        let assets = generate_assets(20, test_date(), 200_000, seed, 1.);

        let hybrid_cost = get_success(hybrid.select_assets(target_volume, &assets)).total_cost();
        let greedy_cost = get_success(greedy.select_assets(target_volume, &assets)).total_cost();

        assert!(
            hybrid_cost <= greedy_cost + 1e-6,
            "hybrid cost {hybrid_cost} above greedy cost {greedy_cost} at seed {seed}"
        );
    });
}

#[test]
fn can_match_dynamic_prog_below_threshold() {
    let hybrid = create_engine();
    let dynamic_prog = DynamicProgEngine::default();
    let target_volume = 10_000;

    (0..300_u64).into_par_iter().for_each(|seed| {
        let assets = generate_assets(15, test_date(), 50_000, seed, 1.);

        let hybrid_cost = get_success(hybrid.select_assets(target_volume, &assets)).total_cost();
        let dp_cost = get_success(dynamic_prog.select_assets(target_volume, &assets)).total_cost();

        assert!((hybrid_cost - dp_cost).abs() < 1e-9, "hybrid cost {hybrid_cost} differs from dp cost {dp_cost} at seed {seed}");
    });
}

#[test]
fn can_produce_identical_output_for_identical_input() {
    let assets = generate_assets(20, test_date(), 200_000, 42, 2.);
    let engine = create_engine();

    let first = get_success(engine.select_assets(150_000, &assets));
    let second = get_success(engine.select_assets(150_000, &assets));

    assert_eq!(get_codes(&first), get_codes(&second));
}
