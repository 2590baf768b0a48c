//! Tests for the driver and coverage reconstruction through the public API

use mcdc_decision::{
    Backend, Condition, CoverageReport, Driver, DriverConfig, DriverError, IndependencePair,
};

#[test]
fn test_linked_run() {
    let mut out = Vec::new();
    let outcomes = Driver::new(Backend::Linked).run(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Test 1: decision(true, true, false) = 1",
            "Test 2: decision(false, true, false) = 0",
            "Test 3: decision(true, false, false) = 0",
            "Test 4: decision(false, false, true) = 1",
            "Test 5: decision(false, false, false) = 0",
        ]
    );

    let numbers: Vec<_> = outcomes.iter().map(|o| o.case.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_verify_passes_for_both_backends() {
    for backend in [Backend::Linked, Backend::Reference] {
        let outcomes = Driver::new(backend).verify().unwrap();
        assert_eq!(outcomes.len(), 5);
    }
}

#[test]
fn test_mcdc_pairs_from_linked_decision() {
    let config = DriverConfig::new();
    let report = CoverageReport::from_outcomes(&config.driver().evaluate());

    assert!(report.is_satisfied());
    assert_eq!(
        report.pair_for(Condition::A),
        Some(&IndependencePair {
            condition: Condition::A,
            baseline: 1,
            flipped: 2,
        })
    );
    assert_eq!(
        report.pair_for(Condition::B),
        Some(&IndependencePair {
            condition: Condition::B,
            baseline: 1,
            flipped: 3,
        })
    );
    assert_eq!(
        report.pair_for(Condition::C),
        Some(&IndependencePair {
            condition: Condition::C,
            baseline: 4,
            flipped: 5,
        })
    );
}

#[test]
fn test_and_instead_of_or_is_detected() {
    // (a && b) && c
    let wrong = |a: bool, b: bool, c: bool| a && b && c;
    let driver = Driver::new(wrong);

    let err = driver.verify().unwrap_err();
    assert!(matches!(err, DriverError::OutcomeMismatch { case: 1, .. }));

    let outcomes = driver.evaluate();
    let mismatched: Vec<_> = outcomes
        .iter()
        .filter(|o| !o.matches_expected())
        .map(|o| o.case.number)
        .collect();
    assert_eq!(mismatched, vec![1, 4]);

    let report = CoverageReport::from_outcomes(&outcomes);
    assert!(!report.is_satisfied());
}
