//! Request/response models for the cardiology calculators.

use super::common::{Sex, YesNo};
use crate::extract::{FieldError, ValidateRequest};
use crate::validation::range_i64;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// CHADS₂ stroke-risk inputs for non-valvular atrial fibrillation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Chads2Request {
    pub congestive_heart_failure: YesNo,
    pub hypertension: YesNo,
    pub age_75_or_older: YesNo,
    pub diabetes: YesNo,
    /// Prior stroke, TIA, or thromboembolism; worth two points.
    pub stroke_or_tia_history: YesNo,
}

impl ValidateRequest for Chads2Request {
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Chads2Response {
    pub result: i64,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CreatinineClearance {
    #[serde(rename = "greater_than_85")]
    GreaterThan85,
    #[serde(rename = "51_to_85")]
    Between51And85,
    #[serde(rename = "50_or_less")]
    FiftyOrLess,
    #[serde(rename = "on_dialysis")]
    OnDialysis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NyhaClass {
    Class1,
    Class2,
    Class3,
    Class4,
}

/// Left ventricular function category (ejection fraction band).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LvFunction {
    /// LVEF above 50%.
    Good,
    /// LVEF 31-50%.
    Moderate,
    /// LVEF 21-30%.
    Poor,
    /// LVEF 20% or less.
    VeryPoor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SurgeryUrgency {
    Elective,
    Urgent,
    Emergency,
    Salvage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WeightOfIntervention {
    IsolatedCabg,
    SingleNonCabg,
    TwoProcedures,
    ThreeOrMoreProcedures,
}

/// EuroSCORE II inputs: 18 patient, cardiac, and operative factors.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EuroScoreIIRequest {
    #[schema(minimum = 18, maximum = 110)]
    pub age_years: i64,
    pub sex: Sex,
    pub insulin_dependent_diabetes: YesNo,
    /// Long-term bronchodilator or steroid use for lung disease.
    pub chronic_pulmonary_dysfunction: YesNo,
    /// Neurological or musculoskeletal dysfunction severely affecting
    /// mobility.
    pub mobility_dysfunction: YesNo,
    pub creatinine_clearance: CreatinineClearance,
    /// Mechanical ventilation, inotropes, IABP, or acute renal failure
    /// preoperatively.
    pub critical_preoperative_state: YesNo,
    pub nyha_class: NyhaClass,
    pub ccs_class_4: YesNo,
    pub extracardiac_arteriopathy: YesNo,
    /// Previous surgery requiring opening of the pericardium.
    pub previous_cardiac_surgery: YesNo,
    pub active_endocarditis: YesNo,
    pub lv_function: LvFunction,
    /// Myocardial infarction within 90 days.
    pub recent_mi: YesNo,
    /// Systolic pulmonary artery pressure above 31 mmHg.
    pub pulmonary_hypertension: YesNo,
    pub urgency: SurgeryUrgency,
    pub weight_of_intervention: WeightOfIntervention,
    pub thoracic_aorta_surgery: YesNo,
}

impl ValidateRequest for EuroScoreIIRequest {
    fn validate(&self) -> Result<(), FieldError> {
        range_i64("age_years", self.age_years, 18, 110)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EuroScoreIIResponse {
    /// Predicted in-hospital mortality as a percentage.
    pub result: f64,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
}
