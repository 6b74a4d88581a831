//! Request/response models for the neurology calculators.

use crate::extract::{FieldError, ValidateRequest};
use crate::validation::{range_f64, range_i64};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Glasgow Coma Scale component ratings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GlasgowComaScaleRequest {
    /// 1 (none) to 4 (spontaneous).
    #[schema(minimum = 1, maximum = 4)]
    pub eye_opening: i64,
    /// 1 (none) to 5 (oriented).
    #[schema(minimum = 1, maximum = 5)]
    pub verbal_response: i64,
    /// 1 (none) to 6 (obeys commands).
    #[schema(minimum = 1, maximum = 6)]
    pub motor_response: i64,
}

impl ValidateRequest for GlasgowComaScaleRequest {
    fn validate(&self) -> Result<(), FieldError> {
        range_i64("eye_opening", self.eye_opening, 1, 4)?;
        range_i64("verbal_response", self.verbal_response, 1, 5)?;
        range_i64("motor_response", self.motor_response, 1, 6)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GcsComponents {
    pub eye_opening: i64,
    pub verbal_response: i64,
    pub motor_response: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GlasgowComaScaleResponse {
    /// Total GCS, 3-15.
    pub result: i64,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
    pub component_breakdown: GcsComponents,
}

/// Cerebral perfusion pressure inputs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CerebralPerfusionPressureRequest {
    /// Mean arterial pressure in mmHg.
    #[schema(minimum = 0, maximum = 250)]
    pub mean_arterial_pressure: f64,
    /// Intracranial pressure in mmHg.
    #[schema(minimum = 0, maximum = 120)]
    pub intracranial_pressure: f64,
}

impl ValidateRequest for CerebralPerfusionPressureRequest {
    fn validate(&self) -> Result<(), FieldError> {
        range_f64(
            "mean_arterial_pressure",
            self.mean_arterial_pressure,
            0.0,
            250.0,
        )?;
        range_f64(
            "intracranial_pressure",
            self.intracranial_pressure,
            0.0,
            120.0,
        )
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CerebralPerfusionPressureResponse {
    /// CPP in mmHg; may be negative when ICP exceeds MAP.
    pub result: f64,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
}
