//! Canonical units and their fixed conversion factors.
//!
//! Factors follow the international avoirdupois pound and the customary
//! trade definitions of the East Asian and Iberian units. They are compiled
//! in as `const` data and cannot change at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pounds in one stone; also the exclusive upper bound for the pound part
/// of a stone composite.
pub const POUNDS_PER_STONE: f64 = 14.0;

/// Inches in one foot; also the exclusive upper bound for the inch part of a
/// feet/inches composite.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Centimeters to inches.
pub const CM_TO_INCH: f64 = 0.393_700_787_4;

/// Meters to inches.
pub const M_TO_INCH: f64 = 39.370_078_74;

/// Canonical weight units understood by the weight engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "st")]
    Stone,
    Jin,
    Kan,
    Arroba,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 6] = [
        WeightUnit::Kilogram,
        WeightUnit::Pound,
        WeightUnit::Stone,
        WeightUnit::Jin,
        WeightUnit::Kan,
        WeightUnit::Arroba,
    ];

    /// Canonical key (`kg`, `lb`, `st`, `jin`, `kan`, `arroba`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Kilogram => "kg",
            Self::Pound => "lb",
            Self::Stone => "st",
            Self::Jin => "jin",
            Self::Kan => "kan",
            Self::Arroba => "arroba",
        }
    }

    /// Multiplier converting one of this unit into pounds.
    #[must_use]
    pub const fn pounds_per_unit(self) -> f64 {
        match self {
            Self::Kilogram => 2.204_622_621_8,
            Self::Pound => 1.0,
            Self::Stone => POUNDS_PER_STONE,
            // Mainland China standard (500 g).
            Self::Jin => 1.102_311_31,
            Self::Kan => 8.267_328,
            Self::Arroba => 25.353_16,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Kilogram => "Kilogram",
            Self::Pound => "Pound",
            Self::Stone => "Stone",
            Self::Jin => "Jin (catty)",
            Self::Kan => "Kan",
            Self::Arroba => "Arroba",
        }
    }

    /// Convert a magnitude in this unit to pounds.
    #[must_use]
    pub fn to_pounds(self, value: f64) -> f64 {
        value * self.pounds_per_unit()
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a string is not a canonical unit key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a canonical weight unit key: {0}")]
pub struct UnknownUnitKey(pub String);

impl FromStr for WeightUnit {
    type Err = UnknownUnitKey;

    /// Accepts canonical keys only. Free text goes through the alias
    /// canonicalizer in the normalization crate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeightUnit::ALL
            .into_iter()
            .find(|unit| unit.key() == s)
            .ok_or_else(|| UnknownUnitKey(s.to_string()))
    }
}

/// Metric length units recognized by the height engine. Inches and decimal
/// feet have dedicated conversions on [`crate::Height`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Centimeter,
    Meter,
}

impl LengthUnit {
    #[must_use]
    pub const fn inches_per_unit(self) -> f64 {
        match self {
            Self::Centimeter => CM_TO_INCH,
            Self::Meter => M_TO_INCH,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Centimeter => "cm",
            Self::Meter => "m",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
