//! US customary height value and its display form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::INCHES_PER_FOOT;

/// A completed height in whole feet plus inches.
///
/// Constructors keep `inches` within `[0, 12)` and refuse totals whose foot
/// count would not fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Height {
    pub feet: u32,
    pub inches: f64,
}

impl Height {
    #[must_use]
    pub const fn new(feet: u32, inches: f64) -> Self {
        Self { feet, inches }
    }

    /// Split a total inch count into feet and remaining inches.
    ///
    /// Returns `None` for a negative or non-finite total, or one whose foot
    /// count does not fit in a `u32`.
    #[must_use]
    pub fn from_total_inches(total: f64) -> Option<Self> {
        if !total.is_finite() || total < 0.0 {
            return None;
        }
        // Adding zero turns a negative zero into a positive one.
        let total = total + 0.0;
        let inches = total.rem_euclid(INCHES_PER_FOOT);
        Some(Self {
            feet: whole_feet(((total - inches) / INCHES_PER_FOOT).round())?,
            inches,
        })
    }

    /// Interpret `value` as decimal feet: the fractional part is a fraction
    /// of a foot, so `5.5` is five feet six inches.
    ///
    /// Returns `None` under the same conditions as [`Height::from_total_inches`].
    #[must_use]
    pub fn from_decimal_feet(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let value = value + 0.0;
        let whole = value.trunc();
        let feet = whole_feet(whole)?;
        let inches = (value - whole) * INCHES_PER_FOOT;
        // A fraction a hair below one can round up to a full foot.
        if inches >= INCHES_PER_FOOT {
            return Some(Self::new(feet.checked_add(1)?, 0.0));
        }
        Some(Self { feet, inches })
    }

    #[must_use]
    pub fn total_inches(&self) -> f64 {
        f64::from(self.feet) * INCHES_PER_FOOT + self.inches
    }
}

/// Convert a non-negative whole number of feet, refusing values past `u32::MAX`.
fn whole_feet(feet: f64) -> Option<u32> {
    if feet <= f64::from(u32::MAX) {
        Some(feet as u32)
    } else {
        None
    }
}

impl From<Height> for (u32, f64) {
    fn from(height: Height) -> Self {
        (height.feet, height.inches)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_height(self.feet, self.inches))
    }
}

/// Render a height as `<feet>' <inches>"` with inches to two decimals.
///
/// The carry check runs on the rendered digits, so `11.999` becomes the next
/// whole foot (`6' 0"`) rather than an impossible `12.00` inches.
#[must_use]
pub fn format_height(feet: u32, inches: f64) -> String {
    let rendered = format!("{inches:.2}");
    match rendered.as_str() {
        "12.00" => format!("{}' 0\"", feet.saturating_add(1)),
        "-0.00" => format!("{feet}' 0.00\""),
        _ => format!("{feet}' {rendered}\""),
    }
}
