use crate::heuristic::HIGH_WEIGHT_ADVISORY_LBS;

/// Options for the weight engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightOptions {
    /// Pounds above which an [`crate::Diagnostic::UnusuallyHighWeight`] is emitted.
    pub high_weight_threshold_lbs: f64,
}

impl Default for WeightOptions {
    fn default() -> Self {
        Self {
            high_weight_threshold_lbs: HIGH_WEIGHT_ADVISORY_LBS,
        }
    }
}

impl WeightOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_high_weight_threshold(mut self, pounds: f64) -> Self {
        self.high_weight_threshold_lbs = pounds;
        self
    }
}
