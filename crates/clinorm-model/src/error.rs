//! Failure taxonomy shared by the weight and height engines.

use std::fmt;

use thiserror::Error;

/// Which measurement a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementKind {
    Weight,
    Height,
}

impl MeasurementKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while normalizing a measurement.
///
/// Every variant carries enough of the offending input to produce a
/// human-readable message. None of them are recovered internally; callers
/// that need to keep going use the lenient `*_safe` entry points instead.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum NormalizeError {
    /// Empty, blank, or non-finite input.
    #[error("input cannot be empty")]
    InvalidInput,

    /// No parsing rule accepted the input.
    #[error("unparseable {kind} format: {input}")]
    UnparseableFormat {
        /// Measurement being parsed.
        kind: MeasurementKind,
        /// Input as supplied by the caller.
        input: String,
    },

    /// Weight magnitude below zero.
    #[error("weight cannot be negative: {value}")]
    NegativeValue {
        /// The rejected magnitude.
        value: f64,
    },

    /// Pound part of a stone composite is 14 or more.
    #[error("invalid composite weight: {pounds} lbs exceeds 1 stone")]
    CompositeOverflow {
        /// The pound sub-part.
        pounds: f64,
    },

    /// Inch part of a feet/inches composite is 12 or more.
    #[error("invalid composite height: {inches} inches exceeds 11.99")]
    InvalidComposite {
        /// The inch sub-part.
        inches: f64,
    },

    /// A unit token was present but is not in the vocabulary.
    #[error("unknown unit: {unit}")]
    UnknownUnit {
        /// The unit text as it appeared after cleaning.
        unit: String,
    },
}

/// Fieldless mirror of [`NormalizeError`] for matching and tallying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    InvalidInput,
    UnparseableFormat,
    NegativeValue,
    CompositeOverflow,
    InvalidComposite,
    UnknownUnit,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid input",
            Self::UnparseableFormat => "unparseable format",
            Self::NegativeValue => "negative value",
            Self::CompositeOverflow => "composite overflow",
            Self::InvalidComposite => "invalid composite",
            Self::UnknownUnit => "unknown unit",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NormalizeError {
    /// Build an [`NormalizeError::UnparseableFormat`] for the given input.
    pub fn unparseable(kind: MeasurementKind, input: impl Into<String>) -> Self {
        Self::UnparseableFormat {
            kind,
            input: input.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput => ErrorKind::InvalidInput,
            Self::UnparseableFormat { .. } => ErrorKind::UnparseableFormat,
            Self::NegativeValue { .. } => ErrorKind::NegativeValue,
            Self::CompositeOverflow { .. } => ErrorKind::CompositeOverflow,
            Self::InvalidComposite { .. } => ErrorKind::InvalidComposite,
            Self::UnknownUnit { .. } => ErrorKind::UnknownUnit,
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
