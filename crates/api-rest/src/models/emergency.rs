//! Request/response models for the emergency medicine calculators.

use super::common::{Sex, YesNo};
use crate::extract::{FieldError, ValidateRequest};
use crate::validation::range_i64;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// EDACS chest-pain inputs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EdacsRequest {
    #[schema(minimum = 18, maximum = 120)]
    pub age: i64,
    pub sex: Sex,
    /// Known coronary artery disease or three or more risk factors; scored
    /// only for ages 18-50.
    pub known_cad_or_three_risk_factors: YesNo,
    pub diaphoresis: YesNo,
    pub radiates_to_arm_or_shoulder: YesNo,
    pub pain_worse_with_inspiration: YesNo,
    pub pain_reproduced_by_palpation: YesNo,
}

impl ValidateRequest for EdacsRequest {
    fn validate(&self) -> Result<(), FieldError> {
        range_i64("age", self.age, 18, 120)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EdacsResponse {
    /// Total EDACS; may be negative.
    pub result: i64,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
}
