//! Tests for the weight engine.

use std::sync::Mutex;

use clinorm_normalization::{
    Diagnostic, ErrorKind, NormalizeError, NullSink, WeightOptions, parse_weight_safe,
    parse_weight_to_pounds, parse_weight_to_pounds_with,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

fn error_kind(input: &str) -> ErrorKind {
    parse_weight_to_pounds(input)
        .expect_err("expected failure")
        .kind()
}

// =========================================================================
// Metric and imperial units
// =========================================================================

#[test]
fn kilogram_variants() {
    for input in ["70kg", "70 kgs", "70 KG", "70 kilograms", "weighs 70kg"] {
        assert_close(parse_weight_to_pounds(input).unwrap(), 154.32);
    }
}

#[test]
fn spaced_and_misspelled_kilograms() {
    assert_close(parse_weight_to_pounds("70.5 kilo grams").unwrap(), 155.43);
    assert_close(parse_weight_to_pounds("70 killograms").unwrap(), 154.32);
}

#[test]
fn bare_number_is_pounds() {
    assert_eq!(parse_weight_to_pounds("150").unwrap(), 150.0);
    assert_eq!(parse_weight_to_pounds("150 lbs").unwrap(), 150.0);
    assert_eq!(parse_weight_to_pounds("about 150").unwrap(), 150.0);
}

#[test]
fn typed_numbers_are_returned_unchanged() {
    assert_eq!(parse_weight_to_pounds(154.5).unwrap(), 154.5);
    assert_eq!(parse_weight_to_pounds(70).unwrap(), 70.0);
}

// =========================================================================
// Stone composites
// =========================================================================

#[test]
fn stone_composites() {
    for input in ["11st 6lb", "11-6", "11 stone 6", "11 stones 6 pounds", "11s6"] {
        assert_eq!(parse_weight_to_pounds(input).unwrap(), 160.0, "{input}");
    }
}

#[test]
fn stone_without_pounds_is_simple_stone() {
    assert_eq!(parse_weight_to_pounds("11st").unwrap(), 154.0);
    assert_eq!(parse_weight_to_pounds("11 stone").unwrap(), 154.0);
}

#[test]
fn composite_overflow_exceeds_one_stone() {
    let error = parse_weight_to_pounds("11st 15lb").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::CompositeOverflow);
    insta::assert_snapshot!(error.to_string(), @"invalid composite weight: 15 lbs exceeds 1 stone");

    assert_eq!(error_kind("11-14"), ErrorKind::CompositeOverflow);
    assert_close(parse_weight_to_pounds("11-13.9").unwrap(), 167.9);
}

// =========================================================================
// East Asian and Iberian units
// =========================================================================

#[test]
fn jin_and_catty_are_equivalent() {
    let latin = parse_weight_to_pounds("100 jin").unwrap();
    assert_close(latin, 110.23);
    assert_eq!(parse_weight_to_pounds("100斤").unwrap(), latin);
    assert_eq!(parse_weight_to_pounds("100 catty").unwrap(), latin);
}

#[test]
fn kan_and_arroba() {
    assert_close(parse_weight_to_pounds("10貫").unwrap(), 82.67);
    assert_close(parse_weight_to_pounds("10 kan").unwrap(), 82.67);
    assert_close(parse_weight_to_pounds("6@").unwrap(), 152.12);
    assert_close(parse_weight_to_pounds("6 arrobas").unwrap(), 152.12);
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn negative_weight_is_rejected() {
    let error = parse_weight_to_pounds("-50kg").unwrap_err();
    assert_eq!(error, NormalizeError::NegativeValue { value: -50.0 });
    insta::assert_snapshot!(error.to_string(), @"weight cannot be negative: -50");
    assert_eq!(
        parse_weight_to_pounds(-3.0).unwrap_err().kind(),
        ErrorKind::NegativeValue
    );
}

#[test]
fn unknown_unit_is_rejected() {
    let error = parse_weight_to_pounds("150 pizzas").unwrap_err();
    insta::assert_snapshot!(error.to_string(), @"unknown unit: pizzas");
}

#[test]
fn empty_input_is_invalid() {
    assert_eq!(error_kind(""), ErrorKind::InvalidInput);
    assert_eq!(error_kind("   "), ErrorKind::InvalidInput);
    assert_eq!(
        parse_weight_to_pounds(f64::NAN).unwrap_err(),
        NormalizeError::InvalidInput
    );
}

#[test]
fn garbage_is_unparseable() {
    let error = parse_weight_to_pounds("Heavy-ish").unwrap_err();
    insta::assert_snapshot!(error.to_string(), @"unparseable weight format: Heavy-ish");
    assert_eq!(error_kind("70 kg."), ErrorKind::UnparseableFormat);
    assert_eq!(error_kind("70kg 5"), ErrorKind::UnparseableFormat);
}

#[test]
fn numbers_too_large_for_f64_are_unparseable() {
    let ones = "1".repeat(400);
    let inputs = [
        format!("{ones}kg"),
        ones.clone(),
        format!("{ones}st 6"),
        format!("{}kg", "9".repeat(308)),
    ];
    for input in inputs {
        assert_eq!(error_kind(&input), ErrorKind::UnparseableFormat, "{input}");
    }
    assert_eq!(
        parse_weight_to_pounds(f64::INFINITY).unwrap_err(),
        NormalizeError::InvalidInput
    );
}

#[test]
fn negative_zero_reads_as_zero() {
    let pounds = parse_weight_to_pounds("-0kg").unwrap();
    assert!(pounds.is_sign_positive());
    assert_eq!(format!("{pounds:.2}"), "0.00");
    assert!(parse_weight_to_pounds(-0.0).unwrap().is_sign_positive());
}

// =========================================================================
// Lenient wrapper and advisories
// =========================================================================

#[test]
fn safe_wrapper_swallows_failures() {
    assert_eq!(parse_weight_safe("garbage"), None);
    assert_eq!(parse_weight_safe("-50kg"), None);
    assert_eq!(parse_weight_safe("11st 15lb"), None);
    assert_eq!(parse_weight_safe(""), None);
    assert_close(parse_weight_safe("70kg").unwrap(), 154.3236);
}

#[test]
fn high_weight_emits_advisory_without_changing_result() {
    let seen = Mutex::new(Vec::new());
    let sink = |diagnostic: &Diagnostic| seen.lock().unwrap().push(diagnostic.clone());

    let pounds = parse_weight_to_pounds_with("1000kg", &WeightOptions::default(), &sink).unwrap();
    assert_close(pounds, 2204.62);

    let seen = seen.into_inner().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(matches!(
        seen[0],
        Diagnostic::UnusuallyHighWeight { threshold, .. } if threshold == 1500.0
    ));
}

#[test]
fn advisory_threshold_is_configurable() {
    let seen = Mutex::new(0usize);
    let sink = |_: &Diagnostic| *seen.lock().unwrap() += 1;
    let options = WeightOptions::new().with_high_weight_threshold(300.0);

    parse_weight_to_pounds_with("250", &options, &sink).unwrap();
    parse_weight_to_pounds_with("350", &options, &sink).unwrap();
    parse_weight_to_pounds_with("25st 6", &options, &sink).unwrap();
    assert_eq!(*seen.lock().unwrap(), 2);
}

#[test]
fn null_sink_still_returns_value() {
    let pounds = parse_weight_to_pounds_with("2000", &WeightOptions::default(), &NullSink).unwrap();
    assert_eq!(pounds, 2000.0);
}
