//! Request/response models for the pulmonology calculators.

use super::common::{Sex, YesNo};
use crate::extract::{FieldError, ValidateRequest};
use crate::validation::range_i64;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pulmonary Embolism Severity Index inputs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PesiRequest {
    /// Patient age in years; contributes its value in points.
    #[schema(minimum = 18, maximum = 120)]
    pub age: i64,
    pub sex: Sex,
    pub cancer_history: YesNo,
    pub heart_failure_history: YesNo,
    pub chronic_lung_disease_history: YesNo,
    pub heart_rate_110_or_higher: YesNo,
    pub systolic_bp_less_than_100: YesNo,
    pub respiratory_rate_30_or_higher: YesNo,
    pub temperature_less_than_36: YesNo,
    pub altered_mental_status: YesNo,
    pub oxygen_saturation_less_than_90: YesNo,
}

impl ValidateRequest for PesiRequest {
    fn validate(&self) -> Result<(), FieldError> {
        range_i64("age", self.age, 18, 120)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PesiResponse {
    /// Total PESI score in points.
    pub result: i64,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
}

/// CURB-65 pneumonia severity inputs, one criterion per field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Curb65Request {
    pub confusion: YesNo,
    /// Blood urea nitrogen above 7 mmol/L (19 mg/dL).
    pub urea_over_7_mmol: YesNo,
    pub respiratory_rate_30_or_higher: YesNo,
    /// Systolic BP below 90 mmHg or diastolic BP of 60 mmHg or less.
    pub low_systolic_or_diastolic_bp: YesNo,
    pub age_65_or_older: YesNo,
}

impl ValidateRequest for Curb65Request {
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Curb65Response {
    pub result: i64,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
}

/// Extended MRC dyspnoea scale category for the DECAF score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmrcdDyspnea {
    /// Not too dyspneic to leave the house (0 points).
    NotTooDyspneic,
    /// Housebound but independent in washing/dressing (1 point).
    TooDyspneicIndependent,
    /// Housebound and requiring help with washing/dressing (2 points).
    TooDyspneicDependent,
}

/// DECAF score inputs for acute COPD exacerbation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DecafScoreRequest {
    pub emrcd_dyspnea: EmrcdDyspnea,
    /// Eosinophil count below 0.05×10⁹/L.
    pub eosinopenia: YesNo,
    /// Consolidation on chest radiograph.
    pub consolidation: YesNo,
    /// Arterial pH below 7.30.
    pub acidemia: YesNo,
    pub atrial_fibrillation: YesNo,
}

impl ValidateRequest for DecafScoreRequest {
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DecafScoreResponse {
    pub result: i64,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
}
