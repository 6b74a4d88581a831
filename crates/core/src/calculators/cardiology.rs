//! Cardiology calculators: CHADS₂ and EuroSCORE II.

use crate::output::ScoreOutput;
use crate::params::ParameterSet;
use crate::registry::{CalculatorEntry, Registry, RegistryError, Specialty};
use crate::{CalcResult, ScoreError};

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(CalculatorEntry {
        id: "chads2",
        title: "CHADS2 Score for Atrial Fibrillation Stroke Risk",
        description: "Estimates annual stroke risk in non-valvular atrial fibrillation from \
                      heart failure, hypertension, age, diabetes, and prior stroke or TIA.",
        specialty: Specialty::Cardiology,
        function: chads2,
    })?;
    registry.register(CalculatorEntry {
        id: "euroscore_ii",
        title: "European System for Cardiac Operative Risk Evaluation (EuroSCORE) II",
        description: "Predicts in-hospital mortality after major cardiac surgery using a \
                      logistic regression model over 18 patient, cardiac, and operative factors.",
        specialty: Specialty::Cardiology,
        function: euroscore_ii,
    })?;
    Ok(())
}

/// CHADS₂: one point each for heart failure, hypertension, age >= 75, and
/// diabetes; two points for prior stroke or TIA. Range 0-6.
pub fn chads2(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let mut score = 0i64;
    if params.require_yes_no("congestive_heart_failure")? {
        score += 1;
    }
    if params.require_yes_no("hypertension")? {
        score += 1;
    }
    if params.require_yes_no("age_75_or_older")? {
        score += 1;
    }
    if params.require_yes_no("diabetes")? {
        score += 1;
    }
    if params.require_yes_no("stroke_or_tia_history")? {
        score += 2;
    }

    let (stage, stage_description, interpretation) = match score {
        0 => (
            "Low Risk",
            "Low annual stroke risk",
            "Adjusted annual stroke rate around 1.9%. Antithrombotic therapy may not be \
             required; reassess as risk factors accrue.",
        ),
        1 => (
            "Moderate Risk",
            "Intermediate annual stroke risk",
            "Adjusted annual stroke rate around 2.8%. Consider oral anticoagulation or \
             antiplatelet therapy based on bleeding risk and patient preference.",
        ),
        _ => (
            "High Risk",
            "High annual stroke risk",
            "Adjusted annual stroke rate of 4% or more. Oral anticoagulation is \
             recommended unless contraindicated.",
        ),
    };

    Ok(ScoreOutput::new(
        score,
        "points",
        stage,
        stage_description,
        format!("CHADS2 score of {score}. {interpretation}"),
    ))
}

// Logistic-model coefficients as published for EuroSCORE II.
// TODO: verify every coefficient against Nashef et al., Eur J Cardiothorac
// Surg 2012;41(4):734-44 before any clinical use; some values below were
// transcribed from secondary sources.
const EUROSCORE_INTERCEPT: f64 = -5.324_537;
const EUROSCORE_AGE_PER_YEAR_OVER_60: f64 = 0.028_518_1;
const EUROSCORE_FEMALE: f64 = 0.219_643_4;
const EUROSCORE_INSULIN_DIABETES: f64 = 0.354_274_9;
const EUROSCORE_CHRONIC_PULMONARY: f64 = 0.188_656_4;
const EUROSCORE_MOBILITY: f64 = 0.240_718_1;
const EUROSCORE_CRITICAL_STATE: f64 = 1.086_517;
const EUROSCORE_CCS4: f64 = 0.222_614_7;
const EUROSCORE_ARTERIOPATHY: f64 = 0.536_026_8;
const EUROSCORE_PREVIOUS_SURGERY: f64 = 1.118_599;
const EUROSCORE_ENDOCARDITIS: f64 = 0.619_452_2;
const EUROSCORE_RECENT_MI: f64 = 0.152_894_3;
const EUROSCORE_PULMONARY_HYPERTENSION: f64 = 0.178_889_9;
const EUROSCORE_THORACIC_AORTA: f64 = 0.652_720_5;

/// EuroSCORE II predicted in-hospital mortality.
///
/// `y = intercept + Σ(coefficient × factor)`, mortality = `100·eʸ/(1+eʸ)`,
/// reported as a percentage rounded to two decimals.
pub fn euroscore_ii(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let age = params.require_i64("age_years")?;
    let mut y = EUROSCORE_INTERCEPT;

    if age > 60 {
        y += EUROSCORE_AGE_PER_YEAR_OVER_60 * (age - 60) as f64;
    }
    if params.require_str("sex")? == "female" {
        y += EUROSCORE_FEMALE;
    }
    if params.require_yes_no("insulin_dependent_diabetes")? {
        y += EUROSCORE_INSULIN_DIABETES;
    }
    if params.require_yes_no("chronic_pulmonary_dysfunction")? {
        y += EUROSCORE_CHRONIC_PULMONARY;
    }
    if params.require_yes_no("mobility_dysfunction")? {
        y += EUROSCORE_MOBILITY;
    }
    y += match params.require_str("creatinine_clearance")? {
        "greater_than_85" => 0.0,
        "51_to_85" => 0.303_553,
        "50_or_less" => 0.859_225_6,
        "on_dialysis" => 0.642_150_8,
        other => return Err(invalid_category("creatinine_clearance", other)),
    };
    if params.require_yes_no("critical_preoperative_state")? {
        y += EUROSCORE_CRITICAL_STATE;
    }
    y += match params.require_str("nyha_class")? {
        "class_1" => 0.0,
        "class_2" => 0.107_054_5,
        "class_3" => 0.295_835_8,
        "class_4" => 0.559_792_9,
        other => return Err(invalid_category("nyha_class", other)),
    };
    if params.require_yes_no("ccs_class_4")? {
        y += EUROSCORE_CCS4;
    }
    if params.require_yes_no("extracardiac_arteriopathy")? {
        y += EUROSCORE_ARTERIOPATHY;
    }
    if params.require_yes_no("previous_cardiac_surgery")? {
        y += EUROSCORE_PREVIOUS_SURGERY;
    }
    if params.require_yes_no("active_endocarditis")? {
        y += EUROSCORE_ENDOCARDITIS;
    }
    y += match params.require_str("lv_function")? {
        "good" => 0.0,
        "moderate" => 0.315_065_2,
        "poor" => 0.808_409_6,
        "very_poor" => 0.934_691_9,
        other => return Err(invalid_category("lv_function", other)),
    };
    if params.require_yes_no("recent_mi")? {
        y += EUROSCORE_RECENT_MI;
    }
    if params.require_yes_no("pulmonary_hypertension")? {
        y += EUROSCORE_PULMONARY_HYPERTENSION;
    }
    y += match params.require_str("urgency")? {
        "elective" => 0.0,
        "urgent" => 0.317_467_3,
        "emergency" => 0.703_912_1,
        "salvage" => 1.362_947,
        other => return Err(invalid_category("urgency", other)),
    };
    y += match params.require_str("weight_of_intervention")? {
        "isolated_cabg" => 0.0,
        "single_non_cabg" => 0.006_211_8,
        "two_procedures" => 0.552_147_8,
        "three_or_more_procedures" => 0.972_453_3,
        other => return Err(invalid_category("weight_of_intervention", other)),
    };
    if params.require_yes_no("thoracic_aorta_surgery")? {
        y += EUROSCORE_THORACIC_AORTA;
    }

    let mortality = 100.0 * y.exp() / (1.0 + y.exp());
    let mortality = (mortality * 100.0).round() / 100.0;

    let (stage, stage_description, interpretation) = if mortality < 2.0 {
        (
            "Low Risk",
            "Predicted mortality below 2%",
            "Standard perioperative care is appropriate.",
        )
    } else if mortality < 5.0 {
        (
            "Medium Risk",
            "Predicted mortality 2-5%",
            "Enhanced perioperative monitoring should be considered.",
        )
    } else if mortality < 10.0 {
        (
            "High Risk",
            "Predicted mortality 5-10%",
            "Plan for intensive perioperative care and multidisciplinary review.",
        )
    } else {
        (
            "Very High Risk",
            "Predicted mortality above 10%",
            "Consider alternative or staged strategies; detailed informed consent is \
             essential.",
        )
    };

    Ok(ScoreOutput::new(
        mortality,
        "%",
        stage,
        stage_description,
        format!(
            "EuroSCORE II predicted in-hospital mortality of {mortality:.2}%. {interpretation} \
             The model complements, never replaces, clinical judgement."
        ),
    ))
}

fn invalid_category(name: &'static str, got: &str) -> ScoreError {
    ScoreError::InvalidParameter {
        name,
        reason: format!("unrecognised category '{}'", got),
    }
}
