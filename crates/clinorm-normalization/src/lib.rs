//! Clinical measurement normalization.
//!
//! Two stateless engines turn hand-typed measurements into canonical values:
//!
//! - **Weight**: [`parse_weight_to_pounds`] accepts metric, imperial, stone
//!   composites, and East Asian or Iberian units, and returns pounds.
//! - **Height**: [`parse_height_to_us`] accepts feet/inches composites,
//!   centimeters, meters, inches, decimal feet, and bare numbers, and returns
//!   a [`Height`] in feet and inches.
//!
//! # Example
//!
//! ```
//! use clinorm_normalization::{format_height, parse_height_to_us, parse_weight_to_pounds};
//!
//! let pounds = parse_weight_to_pounds("11st 6lb").unwrap();
//! assert_eq!(pounds, 160.0);
//!
//! let height = parse_height_to_us("5.5 ft").unwrap();
//! assert_eq!((height.feet, height.inches), (5, 6.0));
//! assert_eq!(format_height(height.feet, height.inches), "5' 6.00\"");
//! ```
//!
//! # Design
//!
//! - **Explicit rule chains**: each engine is an ordered slice of
//!   [`Rule`]s; the first rule that recognizes the text decides the outcome.
//! - **Immutable tables**: unit factors are `const`; the alias table is built
//!   once behind a `LazyLock`.
//! - **Side-channel advisories**: implausible-but-valid results are reported
//!   to a [`DiagnosticSink`] and never alter the returned value.
//! - **Thread-safe**: no call observes state left by another.

mod diagnostics;
mod height;
mod heuristic;
mod options;
mod rules;
mod text;
mod weight;

pub use clinorm_model::{
    ErrorKind, Height, LengthUnit, MeasurementKind, NormalizeError, RawMeasurement, Result,
    WeightUnit,
};

pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use height::{
    HEIGHT_RULES, HeightMatch, classify_height, format_height, parse_height_safe,
    parse_height_to_us,
};
pub use heuristic::{
    CENTIMETER_BAND, DECIMAL_FEET_BAND, DEFAULT_WEIGHT_UNIT, HIGH_WEIGHT_ADVISORY_LBS, HeightBand,
    METER_BAND,
};
pub use options::WeightOptions;
pub use rules::{Rule, first_match};
pub use weight::{
    WEIGHT_RULES, WEIGHT_UNIT_ALIASES, WeightMatch, aliases_for, canonicalize_weight_unit,
    classify_weight, parse_weight_safe, parse_weight_to_pounds, parse_weight_to_pounds_with,
};
