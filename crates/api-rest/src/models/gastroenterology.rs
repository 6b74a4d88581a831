//! Request/response models for the gastroenterology calculators.

use crate::extract::{FieldError, ValidateRequest};
use crate::validation::range_f64;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Ascites {
    Absent,
    Slight,
    Moderate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Encephalopathy {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "grade_1_2")]
    Grade1Or2,
    #[serde(rename = "grade_3_4")]
    Grade3Or4,
}

/// Child-Pugh inputs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChildPughRequest {
    /// Total bilirubin in mg/dL.
    #[schema(minimum = 0.1, maximum = 50)]
    pub total_bilirubin: f64,
    /// Serum albumin in g/dL.
    #[schema(minimum = 0.5, maximum = 7)]
    pub serum_albumin: f64,
    #[schema(minimum = 0.5, maximum = 10)]
    pub inr: f64,
    pub ascites: Ascites,
    pub encephalopathy: Encephalopathy,
}

impl ValidateRequest for ChildPughRequest {
    fn validate(&self) -> Result<(), FieldError> {
        range_f64("total_bilirubin", self.total_bilirubin, 0.1, 50.0)?;
        range_f64("serum_albumin", self.serum_albumin, 0.5, 7.0)?;
        range_f64("inr", self.inr, 0.5, 10.0)
    }
}

/// Nested Child-Pugh result: numeric total plus letter grade.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChildPughResult {
    pub total_score: i64,
    pub grade: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChildPughResponse {
    pub result: ChildPughResult,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
}
