use super::*;

#[test]
fn can_require_mandatory_args() {
    let result = get_select_command().try_get_matches_from(vec!["select", "catalog.json"]);

    assert!(result.is_err());
}

#[test]
fn can_parse_request_args() {
    let matches = get_select_command()
        .try_get_matches_from(vec!["select", "catalog.json", "--date", "2025-12-25", "--volume", "500"])
        .unwrap();

    let request = parse_request(&matches).unwrap();

    assert_eq!(request.date, NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
    assert_eq!(request.volume, 500);
}

#[test]
fn can_reject_malformed_date() {
    let matches = get_select_command()
        .try_get_matches_from(vec!["select", "catalog.json", "--date", "25/12/2025", "--volume", "500"])
        .unwrap();

    assert!(parse_request(&matches).is_err());
}
