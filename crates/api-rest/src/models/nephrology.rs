//! Request/response models for the nephrology and acid-base calculators.

use crate::extract::{FieldError, ValidateRequest};
use crate::validation::{optional_range_f64, range_f64};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Winters' formula inputs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WintersFormulaRequest {
    /// Serum bicarbonate in mEq/L.
    #[schema(minimum = 5, maximum = 35)]
    pub bicarbonate: f64,
    /// Measured arterial pCO₂ in mmHg, if available.
    #[schema(minimum = 10, maximum = 80)]
    #[serde(default)]
    pub measured_pco2: Option<f64>,
}

impl ValidateRequest for WintersFormulaRequest {
    fn validate(&self) -> Result<(), FieldError> {
        range_f64("bicarbonate", self.bicarbonate, 5.0, 35.0)?;
        optional_range_f64("measured_pco2", self.measured_pco2, 10.0, 80.0)
    }
}

/// The ±2 mmHg band around the expected pCO₂.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExpectedRange {
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WintersFormulaResponse {
    /// Expected arterial pCO₂ in mmHg.
    pub result: f64,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
    pub expected_range: ExpectedRange,
}

/// Serum anion gap inputs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SerumAnionGapRequest {
    /// Serum sodium in mEq/L.
    #[schema(minimum = 100, maximum = 180)]
    pub sodium: f64,
    /// Serum chloride in mEq/L.
    #[schema(minimum = 60, maximum = 140)]
    pub chloride: f64,
    /// Serum bicarbonate in mEq/L.
    #[schema(minimum = 5, maximum = 45)]
    pub bicarbonate: f64,
    /// Serum albumin in g/dL, enabling the hypoalbuminemia correction.
    #[schema(minimum = 0.5, maximum = 7)]
    #[serde(default)]
    pub albumin: Option<f64>,
}

impl ValidateRequest for SerumAnionGapRequest {
    fn validate(&self) -> Result<(), FieldError> {
        range_f64("sodium", self.sodium, 100.0, 180.0)?;
        range_f64("chloride", self.chloride, 60.0, 140.0)?;
        range_f64("bicarbonate", self.bicarbonate, 5.0, 45.0)?;
        optional_range_f64("albumin", self.albumin, 0.5, 7.0)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SerumAnionGapResponse {
    /// Uncorrected anion gap in mEq/L.
    pub result: f64,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub albumin_corrected_gap: Option<f64>,
}
