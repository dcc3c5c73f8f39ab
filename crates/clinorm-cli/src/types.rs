use clinorm_normalization::Height;
use serde::Serialize;

/// Result of `clinorm convert`, printed as text or JSON.
#[derive(Debug, Serialize)]
pub struct ConvertOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_lbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Height>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_display: Option<String>,
}
