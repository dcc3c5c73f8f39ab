//! Raw caller input: free text or an already-typed number.

/// A measurement as handed to an engine entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawMeasurement<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> From<&'a str> for RawMeasurement<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for RawMeasurement<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<f64> for RawMeasurement<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for RawMeasurement<'_> {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for RawMeasurement<'_> {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for RawMeasurement<'_> {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for RawMeasurement<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}
