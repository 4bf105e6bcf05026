use river_crossing::scenario::SearchError;
use river_crossing::scenarios;

#[test]
fn built_in_cases_validate_except_the_unsafe_four() {
    let invalid: Vec<&str> = scenarios::battery()
        .iter()
        .filter(|s| s.validate().is_err())
        .map(|s| s.name)
        .collect();
    assert_eq!(
        invalid,
        vec!["left_heavy_c", "few_m", "near_goal_mix_a", "near_goal_mix_b"]
    );

    scenarios::classic_default()
        .validate()
        .expect("classic_default must validate");
}

#[test]
fn unknown_case_is_reported_by_name() {
    let err = scenarios::by_name("upstream").unwrap_err();
    assert!(matches!(err, SearchError::UnknownName { kind: "case", .. }));
    assert_eq!(err.to_string(), "unknown case: upstream");
}
