use super::*;

#[test]
fn can_calculate_cost_efficiency() {
    let asset = Asset::new("A-1", "Asset 1", 50., vec![], 100);

    assert!((asset.cost_efficiency() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn can_check_availability_at_date() {
    let date = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
    let asset = Asset::new("A-1", "Asset 1", 50., vec![date], 100);

    assert!(asset.is_available_at(date));
    assert!(!asset.is_available_at(date.succ_opt().unwrap()));
}
