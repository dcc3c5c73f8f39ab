//! Tests for the height engine and formatter.

use clinorm_normalization::{
    ErrorKind, Height, HeightBand, HeightMatch, LengthUnit, classify_height, format_height,
    parse_height_safe, parse_height_to_us,
};

fn parse(input: &str) -> (u32, f64) {
    parse_height_to_us(input)
        .unwrap_or_else(|error| panic!("{input}: {error}"))
        .into()
}

fn assert_height(input: &str, feet: u32, inches: f64) {
    let (actual_feet, actual_inches) = parse(input);
    assert_eq!(actual_feet, feet, "{input}");
    assert!(
        (actual_inches - inches).abs() < 0.01,
        "{input}: expected {inches} inches, got {actual_inches}"
    );
}

// =========================================================================
// Composite feet/inches
// =========================================================================

#[test]
fn composite_feet_inches() {
    assert_eq!(parse("5'11"), (5, 11.0));
    assert_eq!(parse("5'10"), (5, 10.0));
    assert_eq!(parse("5' 10\""), (5, 10.0));
    assert_eq!(parse("5ft 10"), (5, 10.0));
    assert_eq!(parse("5-10"), (5, 10.0));
    assert_eq!(parse("6 foot 2"), (6, 2.0));
    assert_eq!(parse("5 feet 10.5 inches"), (5, 10.5));
    assert_eq!(parse("Height: 5'11"), (5, 11.0));
}

#[test]
fn composite_inches_must_stay_below_twelve() {
    let error = parse_height_to_us("5'12").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidComposite);
    insta::assert_snapshot!(error.to_string(), @"invalid composite height: 12 inches exceeds 11.99");
    assert_eq!(parse("5'11.99"), (5, 11.99));
}

// =========================================================================
// Decimal feet trap
// =========================================================================

#[test]
fn decimal_feet_fraction_is_a_fraction_of_a_foot() {
    assert_eq!(parse("5.5 ft"), (5, 6.0));
    assert_ne!(parse("5.5 ft"), (5, 5.0));
    assert_height("5.1 ft", 5, 1.2);
    assert_height("5.9 feet", 5, 10.8);
    assert_eq!(parse("6'"), (6, 0.0));
}

#[test]
fn composite_wins_over_decimal_feet() {
    assert_eq!(
        classify_height("5'5"),
        Ok(HeightMatch::Composite {
            feet: 5,
            inches: 5.0
        })
    );
    assert_eq!(classify_height("5.5ft"), Ok(HeightMatch::DecimalFeet(5.5)));
}

// =========================================================================
// Metric and inches
// =========================================================================

#[test]
fn centimeters() {
    assert_height("180cm", 5, 10.87);
    assert_height("175 cms", 5, 8.90);
    assert_height("180 centimeters", 5, 10.87);
}

#[test]
fn meters() {
    assert_height("1.75m", 5, 8.90);
    assert_height("1.8 meters", 5, 10.87);
    assert_eq!(
        classify_height("2 meter"),
        Ok(HeightMatch::Metric {
            value: 2.0,
            unit: LengthUnit::Meter
        })
    );
}

#[test]
fn inches_only() {
    assert_eq!(parse("70 inches"), (5, 10.0));
    assert_eq!(parse("70\""), (5, 10.0));
    assert_eq!(parse("72in"), (6, 0.0));
}

// =========================================================================
// Unitless heuristic
// =========================================================================

#[test]
fn unitless_bands() {
    assert_height("180", 5, 10.87);
    assert_height("1.8", 5, 10.87);
    assert_eq!(parse("6"), (6, 0.0));
    assert_eq!(
        classify_height("180"),
        Ok(HeightMatch::Unitless {
            value: 180.0,
            band: HeightBand::Centimeters
        })
    );
}

#[test]
fn typed_numbers_use_bands() {
    let height = parse_height_to_us(180).unwrap();
    assert_eq!(height.feet, 5);
    assert!((height.inches - 10.866).abs() < 0.01);
    assert_eq!(parse_height_to_us(6.0).unwrap(), Height::new(6, 0.0));
    assert_eq!(
        parse_height_to_us(20).unwrap_err().kind(),
        ErrorKind::UnparseableFormat
    );
}

#[test]
fn out_of_band_numbers_are_unparseable() {
    for input in ["20", "0.2", "9", "301", "-180"] {
        assert_eq!(
            parse_height_to_us(input).unwrap_err().kind(),
            ErrorKind::UnparseableFormat,
            "{input}"
        );
    }
}

#[test]
fn oversized_numbers_are_unparseable() {
    let ones = "1".repeat(400);
    let inputs = [
        format!("{ones}cm"),
        format!("{ones}m"),
        format!("{ones} inches"),
        "99999999999999999999cm".to_string(),
        "99999999999999 ft".to_string(),
    ];
    for input in inputs {
        let error = parse_height_to_us(input.as_str()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnparseableFormat, "{input}");
    }
}

#[test]
fn large_but_representable_values_keep_inches_in_range() {
    let height = parse_height_to_us("9999999999cm").unwrap();
    assert_eq!(height.feet, 328_083_989);
    assert!((0.0..12.0).contains(&height.inches));
    assert!(!height.to_string().contains("NaN"));
}

#[test]
fn garbage_and_empty() {
    let error = parse_height_to_us("Tall").unwrap_err();
    insta::assert_snapshot!(error.to_string(), @"unparseable height format: Tall");
    assert_eq!(
        parse_height_to_us("").unwrap_err().kind(),
        ErrorKind::InvalidInput
    );
    assert_eq!(parse_height_safe("Tall"), None);
    assert_eq!(parse_height_safe("6"), Some(Height::new(6, 0.0)));
}

// =========================================================================
// Formatter
// =========================================================================

#[test]
fn formatter() {
    assert_eq!(format_height(5, 10.866), "5' 10.87\"");
    assert_eq!(format_height(5, 11.999), "6' 0\"");
    assert_eq!(format_height(5, 0.0), "5' 0.00\"");
}

#[test]
fn formatted_output_parses_back() {
    assert_eq!(parse(&format_height(5, 10.5)), (5, 10.5));
    assert_eq!(parse(&format_height(5, 11.999)), (6, 0.0));
}

#[test]
fn formatted_output_without_symbols_is_a_composite() {
    let stripped = format_height(5, 10.5).replace('\'', " ft").replace('"', "");
    assert_eq!(stripped, "5 ft 10.50");
    assert_eq!(
        classify_height(&stripped),
        Ok(HeightMatch::Composite {
            feet: 5,
            inches: 10.5
        })
    );
}
