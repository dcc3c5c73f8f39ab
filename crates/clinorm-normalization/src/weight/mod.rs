//! Weight engine: free text or numbers to pounds.
//!
//! Strategies, in priority order:
//! 1. stone composite (`11st 6lb`, `11 stone 6`, `11-6`)
//! 2. value with optional unit (`70kg`, `100 斤`, `150`)
//!
//! Typed numbers skip the chain and are taken as pounds.

mod units;

use std::sync::LazyLock;

use clinorm_model::{
    MeasurementKind, NormalizeError, POUNDS_PER_STONE, RawMeasurement, Result, WeightUnit,
};
use regex::Regex;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::heuristic::DEFAULT_WEIGHT_UNIT;
use crate::options::WeightOptions;
use crate::rules::{Rule, first_match};
use crate::text::{clean, number};

pub use units::{WEIGHT_UNIT_ALIASES, aliases_for, canonicalize_weight_unit};

static NOISE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:weight|weighs?|about|approx(?:imately)?|~|wt)[.:]?\s*")
        .expect("Invalid weight prefix regex")
});

static STONE_COMPOSITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]+(?:\.[0-9]+)?)\s*(?:stones?|st|s|-)\s*([0-9]+(?:\.[0-9]+)?)(?:\s*(?:lbs?|pounds?))?$",
    )
    .expect("Invalid stone composite regex")
});

static VALUE_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?[0-9]+(?:\.[0-9]+)?)\s*([a-zA-Z斤貫@\s]+)?$")
        .expect("Invalid weight value regex")
});

/// A recognized weight before conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightMatch {
    /// Stones plus a pound remainder below one stone.
    Composite { stones: f64, pounds: f64 },
    /// A non-negative magnitude in a resolved unit.
    Simple { value: f64, unit: WeightUnit },
}

impl WeightMatch {
    #[must_use]
    pub fn pounds(&self) -> f64 {
        match *self {
            Self::Composite { stones, pounds } => stones * POUNDS_PER_STONE + pounds,
            Self::Simple { value, unit } => unit.to_pounds(value),
        }
    }
}

/// Strategy chain in priority order. The composite rule must precede the
/// simple rule, which would otherwise reject `11st 6` as unparseable.
pub const WEIGHT_RULES: &[Rule<WeightMatch>] = &[
    Rule::new("stone_composite", stone_composite),
    Rule::new("value_with_unit", value_with_unit),
];

fn stone_composite(text: &str) -> Option<Result<WeightMatch>> {
    let captures = STONE_COMPOSITE.captures(text)?;
    let stones = number(&captures, 1)?;
    let pounds = number(&captures, 2)?;
    if pounds >= POUNDS_PER_STONE {
        return Some(Err(NormalizeError::CompositeOverflow { pounds }));
    }
    Some(Ok(WeightMatch::Composite { stones, pounds }))
}

fn value_with_unit(text: &str) -> Option<Result<WeightMatch>> {
    let captures = VALUE_WITH_UNIT.captures(text)?;
    let value: f64 = number(&captures, 1)?;
    if value < 0.0 {
        return Some(Err(NormalizeError::NegativeValue { value }));
    }
    // `-0` passes the sign check; report it as plain zero.
    let value = value + 0.0;
    let unit = resolve_unit(captures.get(2).map(|token| token.as_str()));
    Some(unit.map(|unit| WeightMatch::Simple { value, unit }))
}

/// Absent or blank unit text means pounds; any other unrecognized text is an
/// error rather than a silent default.
fn resolve_unit(token: Option<&str>) -> Result<WeightUnit> {
    match token {
        None => Ok(DEFAULT_WEIGHT_UNIT),
        Some(token) if token.trim().is_empty() => Ok(DEFAULT_WEIGHT_UNIT),
        Some(token) => {
            canonicalize_weight_unit(token).ok_or_else(|| NormalizeError::UnknownUnit {
                unit: token.trim().to_string(),
            })
        }
    }
}

/// Run the strategy chain on already-cleaned text.
///
/// # Errors
///
/// Returns the first matching rule's error, or
/// [`NormalizeError::UnparseableFormat`] when no rule matches.
pub fn classify_weight(cleaned: &str) -> Result<WeightMatch> {
    match first_match(WEIGHT_RULES, cleaned) {
        Some((_, outcome)) => outcome,
        None => Err(NormalizeError::unparseable(MeasurementKind::Weight, cleaned)),
    }
}

/// Parse a weight to pounds, logging advisories through `tracing`.
///
/// # Errors
///
/// See [`parse_weight_to_pounds_with`].
pub fn parse_weight_to_pounds<'a>(input: impl Into<RawMeasurement<'a>>) -> Result<f64> {
    parse_weight_to_pounds_with(input, &WeightOptions::default(), &TracingSink)
}

/// Parse a weight to pounds with explicit options and advisory sink.
///
/// Typed numbers are returned unchanged. Text is cleaned of a leading noise
/// phrase, then run through [`WEIGHT_RULES`]. A result above
/// `options.high_weight_threshold_lbs` is reported to `sink` and still
/// returned.
///
/// # Errors
///
/// - [`NormalizeError::InvalidInput`] for blank text or a non-finite number
/// - [`NormalizeError::NegativeValue`] for a negative magnitude
/// - [`NormalizeError::CompositeOverflow`] when a stone composite has 14 or more pounds
/// - [`NormalizeError::UnknownUnit`] for unit text outside the vocabulary
/// - [`NormalizeError::UnparseableFormat`] when nothing matches, or the
///   result is too large to represent
pub fn parse_weight_to_pounds_with<'a>(
    input: impl Into<RawMeasurement<'a>>,
    options: &WeightOptions,
    sink: &dyn DiagnosticSink,
) -> Result<f64> {
    let text = match input.into() {
        RawMeasurement::Number(value) => return typed_pounds(value),
        RawMeasurement::Text(text) => text,
    };
    if text.trim().is_empty() {
        return Err(NormalizeError::InvalidInput);
    }

    let cleaned = clean(text, &NOISE_PREFIX);
    let pounds = match first_match(WEIGHT_RULES, &cleaned) {
        Some((_, outcome)) => outcome?.pounds(),
        None => return Err(NormalizeError::unparseable(MeasurementKind::Weight, text)),
    };
    // Digit runs long enough to overflow `f64` parse as infinity.
    if !pounds.is_finite() {
        return Err(NormalizeError::unparseable(MeasurementKind::Weight, text));
    }

    if pounds > options.high_weight_threshold_lbs {
        sink.emit(&Diagnostic::UnusuallyHighWeight {
            pounds,
            threshold: options.high_weight_threshold_lbs,
        });
    }
    Ok(pounds)
}

fn typed_pounds(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(NormalizeError::InvalidInput);
    }
    if value < 0.0 {
        return Err(NormalizeError::NegativeValue { value });
    }
    Ok(value + 0.0)
}

/// Lenient variant for batch use: every failure becomes `None`.
pub fn parse_weight_safe<'a>(input: impl Into<RawMeasurement<'a>>) -> Option<f64> {
    match parse_weight_to_pounds(input) {
        Ok(pounds) => Some(pounds),
        Err(error) => {
            tracing::debug!(kind = %error.kind(), "weight discarded");
            None
        }
    }
}
