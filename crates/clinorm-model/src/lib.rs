//! Shared types for clinical measurement normalization.
//!
//! Holds the unit tables, the height value type, the caller-facing input
//! enum, and the error taxonomy used by both engines.

pub mod error;
pub mod height;
pub mod input;
pub mod units;

pub use error::{ErrorKind, MeasurementKind, NormalizeError, Result};
pub use height::{Height, format_height};
pub use input::RawMeasurement;
pub use units::{
    CM_TO_INCH, INCHES_PER_FOOT, LengthUnit, M_TO_INCH, POUNDS_PER_STONE, UnknownUnitKey,
    WeightUnit,
};
