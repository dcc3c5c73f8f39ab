//! Magnitude-based unit inference and plausibility limits.
//!
//! Height accepts bare numbers and guesses the unit from the value; weight
//! does not guess and treats a missing unit as pounds.

use std::ops::{Range, RangeInclusive};

use clinorm_model::{CM_TO_INCH, Height, M_TO_INCH, WeightUnit};

/// Unit assumed for a weight with no unit text at all.
pub const DEFAULT_WEIGHT_UNIT: WeightUnit = WeightUnit::Pound;

/// Pounds above which a parsed weight triggers an advisory.
pub const HIGH_WEIGHT_ADVISORY_LBS: f64 = 1500.0;

/// Bare numbers in this range are read as centimeters.
pub const CENTIMETER_BAND: RangeInclusive<f64> = 50.0..=300.0;

/// Bare numbers in this range are read as meters.
pub const METER_BAND: Range<f64> = 0.5..3.0;

/// Bare numbers in this range are read as decimal feet.
pub const DECIMAL_FEET_BAND: Range<f64> = 3.0..8.5;

/// Unit inferred for a unitless height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightBand {
    Centimeters,
    Meters,
    DecimalFeet,
}

impl HeightBand {
    /// Pick the band containing `value`, or `None` when it is outside every
    /// plausible human height.
    #[must_use]
    pub fn infer(value: f64) -> Option<Self> {
        if CENTIMETER_BAND.contains(&value) {
            Some(Self::Centimeters)
        } else if METER_BAND.contains(&value) {
            Some(Self::Meters)
        } else if DECIMAL_FEET_BAND.contains(&value) {
            Some(Self::DecimalFeet)
        } else {
            None
        }
    }

    /// Convert `value` in this band's unit. `None` only for values no band
    /// would accept.
    #[must_use]
    pub fn to_height(self, value: f64) -> Option<Height> {
        match self {
            Self::Centimeters => Height::from_total_inches(value * CM_TO_INCH),
            Self::Meters => Height::from_total_inches(value * M_TO_INCH),
            Self::DecimalFeet => Height::from_decimal_feet(value),
        }
    }
}
