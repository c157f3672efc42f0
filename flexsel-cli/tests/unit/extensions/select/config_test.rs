use super::*;
use flexsel_core::models::{Asset, SelectionResult};

#[test]
fn can_read_engine_type_from_config() {
    let json = r#"{"engine":"dynamicProg"}"#;

    let config = read_config(BufReader::new(json.as_bytes())).unwrap();

    assert_eq!(config.engine, Some(EngineType::DynamicProg));
}

#[test]
fn can_read_generator_parameters() {
    let json = r#"{"engine":"greedy","generator":{"count":100,"totalVolumeTarget":50000,"seed":7,"basePriceFactor":1.5}}"#;

    let config = read_config(BufReader::new(json.as_bytes())).unwrap();

    assert_eq!(config.engine, Some(EngineType::Greedy));
    let generator = config.generator.unwrap();
    assert_eq!(generator.count, Some(100));
    assert_eq!(generator.total_volume_target, Some(50_000));
    assert_eq!(generator.seed, Some(7));
    assert_eq!(generator.base_price_factor, Some(1.5));
}

#[test]
fn can_reject_unknown_engine_type() {
    let json = r#"{"engine":"simplex"}"#;

    assert!(read_config(BufReader::new(json.as_bytes())).is_err());
}

#[test]
fn can_create_engine_for_each_type() {
    let assets = vec![Arc::new(Asset::new("A-1", "Asset 1", 10., vec![], 150))];
    let engine_types = [None, Some(EngineType::DynamicProg), Some(EngineType::Greedy), Some(EngineType::Hybrid)];

    engine_types.into_iter().for_each(|engine| {
        let config = Config { engine, generator: None };

        let result = create_engine(&config, Arc::new(Environment::default())).select_assets(100, &assets);

        assert!(matches!(result, SelectionResult::Success(_)));
    });
}
