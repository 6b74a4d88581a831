//! Request/response models for the infectious disease calculators.

use super::common::YesNo;
use crate::extract::{FieldError, ValidateRequest};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// VIRSTA endocarditis-risk inputs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VirstaRequest {
    /// Confirmed Staphylococcus aureus bacteremia; the score is only
    /// validated in this population.
    pub staph_aureus_bacteremia: YesNo,
    pub cerebral_or_peripheral_emboli: YesNo,
    pub meningitis: YesNo,
    /// Permanent pacemaker, defibrillator, or other intracardiac device.
    pub permanent_intracardiac_device: YesNo,
    pub iv_drug_use: YesNo,
    pub preexisting_native_valve_disease: YesNo,
    pub persistent_bacteremia_over_48h: YesNo,
    pub community_or_healthcare_acquisition: YesNo,
    pub temperature_over_38c: YesNo,
    pub wbc_over_11000: YesNo,
    pub severe_sepsis_or_shock: YesNo,
}

impl ValidateRequest for VirstaRequest {
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VirstaResponse {
    pub result: i64,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
}

/// Revised Jones criteria inputs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JonesCriteriaRequest {
    /// Positive throat culture, rapid antigen test, or rising ASO titre.
    pub evidence_of_preceding_strep_infection: YesNo,
    pub carditis: YesNo,
    pub polyarthritis: YesNo,
    pub chorea: YesNo,
    pub erythema_marginatum: YesNo,
    pub subcutaneous_nodules: YesNo,
    pub arthralgia: YesNo,
    pub fever: YesNo,
    pub elevated_esr_or_crp: YesNo,
    pub prolonged_pr_interval: YesNo,
}

impl ValidateRequest for JonesCriteriaRequest {
    fn validate(&self) -> Result<(), FieldError> {
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CriteriaBreakdown {
    pub major_count: i64,
    pub minor_count: i64,
    pub strep_evidence: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct JonesCriteriaResponse {
    /// `"Criteria Met"` or `"Criteria Not Met"`.
    pub result: String,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
    pub criteria_breakdown: CriteriaBreakdown,
}
