//! Height engine: free text or numbers to feet and inches.
//!
//! Strategies, in priority order:
//! 1. feet/inches composite (`5'11`, `5ft 10`, `6 foot 2"`, `5-10`)
//! 2. centimeters (`180cm`)
//! 3. meters (`1.8 m`)
//! 4. inches only (`70"`, `70 inches`)
//! 5. decimal feet (`5.5 ft`, which is 5' 6", not 5' 5")
//! 6. unitless number, unit inferred from magnitude (`180`, `1.8`, `6`)
//!
//! The composite rule runs first so that an apostrophe or `ft` followed by a
//! second number is never read as decimal feet.

use std::sync::LazyLock;

use clinorm_model::{
    Height, INCHES_PER_FOOT, LengthUnit, MeasurementKind, NormalizeError, RawMeasurement, Result,
};
use regex::Regex;

use crate::heuristic::HeightBand;
use crate::rules::{Rule, first_match};
use crate::text::{clean, number};

pub use clinorm_model::format_height;

static LABEL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:height|ht|h)[.:]?\s*").expect("Invalid height prefix regex")
});

static FEET_INCHES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^([0-9]+)\s*(?:'|ft|feet|foot|-)\s*([0-9]+(?:\.[0-9]+)?)\s*(?:"|''|in|ins|inch|inches)?$"#,
    )
    .expect("Invalid feet/inches regex")
});

static CENTIMETERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?)\s*(?:cm|cms|centimeters?)$")
        .expect("Invalid centimeter regex")
});

static METERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?)\s*(?:m|meters?)$").expect("Invalid meter regex")
});

static INCHES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([0-9]+(?:\.[0-9]+)?)\s*(?:"|''|in|ins|inch|inches)$"#)
        .expect("Invalid inches regex")
});

static DECIMAL_FEET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?)\s*(?:'|ft|feet|foot)$").expect("Invalid feet regex")
});

/// A recognized height before conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeightMatch {
    /// Whole feet and an inch remainder below twelve.
    Composite { feet: u32, inches: f64 },
    /// Centimeters or meters.
    Metric { value: f64, unit: LengthUnit },
    /// Total inches.
    Inches(f64),
    /// Feet with a fractional part meaning a fraction of a foot.
    DecimalFeet(f64),
    /// A bare number and the unit inferred for it.
    Unitless { value: f64, band: HeightBand },
}

impl HeightMatch {
    /// Convert to feet and inches. `None` when the magnitude is too large
    /// for a [`Height`].
    #[must_use]
    pub fn to_height(&self) -> Option<Height> {
        match *self {
            Self::Composite { feet, inches } => Some(Height::new(feet, inches)),
            Self::Metric { value, unit } => {
                Height::from_total_inches(value * unit.inches_per_unit())
            }
            Self::Inches(value) => Height::from_total_inches(value),
            Self::DecimalFeet(value) => Height::from_decimal_feet(value),
            Self::Unitless { value, band } => band.to_height(value),
        }
    }
}

/// Strategy chain in priority order.
pub const HEIGHT_RULES: &[Rule<HeightMatch>] = &[
    Rule::new("feet_inches", feet_inches),
    Rule::new("centimeters", centimeters),
    Rule::new("meters", meters),
    Rule::new("inches", inches_only),
    Rule::new("decimal_feet", decimal_feet),
    Rule::new("unitless", unitless),
];

fn feet_inches(text: &str) -> Option<Result<HeightMatch>> {
    let captures = FEET_INCHES.captures(text)?;
    let feet = number(&captures, 1)?;
    let inches = number(&captures, 2)?;
    if inches >= INCHES_PER_FOOT {
        return Some(Err(NormalizeError::InvalidComposite { inches }));
    }
    Some(Ok(HeightMatch::Composite { feet, inches }))
}

fn metric(pattern: &Regex, unit: LengthUnit, text: &str) -> Option<Result<HeightMatch>> {
    let captures = pattern.captures(text)?;
    let value = number(&captures, 1)?;
    Some(Ok(HeightMatch::Metric { value, unit }))
}

fn centimeters(text: &str) -> Option<Result<HeightMatch>> {
    metric(&CENTIMETERS, LengthUnit::Centimeter, text)
}

fn meters(text: &str) -> Option<Result<HeightMatch>> {
    metric(&METERS, LengthUnit::Meter, text)
}

fn inches_only(text: &str) -> Option<Result<HeightMatch>> {
    let captures = INCHES.captures(text)?;
    Some(Ok(HeightMatch::Inches(number(&captures, 1)?)))
}

fn decimal_feet(text: &str) -> Option<Result<HeightMatch>> {
    let captures = DECIMAL_FEET.captures(text)?;
    Some(Ok(HeightMatch::DecimalFeet(number(&captures, 1)?)))
}

fn unitless(text: &str) -> Option<Result<HeightMatch>> {
    let value: f64 = text.parse().ok()?;
    let band = HeightBand::infer(value)?;
    Some(Ok(HeightMatch::Unitless { value, band }))
}

/// Run the strategy chain on already-cleaned text.
///
/// # Errors
///
/// Returns the first matching rule's error, or
/// [`NormalizeError::UnparseableFormat`] when no rule matches.
pub fn classify_height(cleaned: &str) -> Result<HeightMatch> {
    match first_match(HEIGHT_RULES, cleaned) {
        Some((_, outcome)) => outcome,
        None => Err(NormalizeError::unparseable(MeasurementKind::Height, cleaned)),
    }
}

/// Parse a height into US customary feet and inches.
///
/// Text is cleaned of a leading label (`height`, `ht:`, `h:`) and run through
/// [`HEIGHT_RULES`]. Typed numbers go straight to the unitless heuristic.
///
/// # Errors
///
/// - [`NormalizeError::InvalidInput`] for blank text or a non-finite number
/// - [`NormalizeError::InvalidComposite`] when a composite has 12 or more inches
/// - [`NormalizeError::UnparseableFormat`] when nothing matches, or the value
///   is too large to express in feet and inches
pub fn parse_height_to_us<'a>(input: impl Into<RawMeasurement<'a>>) -> Result<Height> {
    let text = match input.into() {
        RawMeasurement::Number(value) => return typed_height(value),
        RawMeasurement::Text(text) => text,
    };
    if text.trim().is_empty() {
        return Err(NormalizeError::InvalidInput);
    }

    let cleaned = clean(text, &LABEL_PREFIX);
    match first_match(HEIGHT_RULES, &cleaned) {
        Some((_, outcome)) => outcome?
            .to_height()
            .ok_or_else(|| NormalizeError::unparseable(MeasurementKind::Height, text)),
        None => Err(NormalizeError::unparseable(MeasurementKind::Height, text)),
    }
}

fn typed_height(value: f64) -> Result<Height> {
    if !value.is_finite() {
        return Err(NormalizeError::InvalidInput);
    }
    HeightBand::infer(value)
        .and_then(|band| band.to_height(value))
        .ok_or_else(|| NormalizeError::unparseable(MeasurementKind::Height, value.to_string()))
}

/// Lenient variant for batch use: every failure becomes `None`.
pub fn parse_height_safe<'a>(input: impl Into<RawMeasurement<'a>>) -> Option<Height> {
    match parse_height_to_us(input) {
        Ok(height) => Some(height),
        Err(error) => {
            tracing::debug!(kind = %error.kind(), "height discarded");
            None
        }
    }
}
