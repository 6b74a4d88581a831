//! Pulmonology calculators: PESI, CURB-65, and the DECAF score.

use crate::output::ScoreOutput;
use crate::params::ParameterSet;
use crate::registry::{CalculatorEntry, Registry, RegistryError, Specialty};
use crate::CalcResult;

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(CalculatorEntry {
        id: "pesi",
        title: "Pulmonary Embolism Severity Index (PESI)",
        description: "Predicts 30-day mortality in acute pulmonary embolism from eleven \
                      clinical variables, stratifying patients into risk classes I-V.",
        specialty: Specialty::Pulmonology,
        function: pesi,
    })?;
    registry.register(CalculatorEntry {
        id: "curb_65",
        title: "CURB-65 Score for Pneumonia Severity",
        description: "Estimates mortality in community-acquired pneumonia from confusion, \
                      urea, respiratory rate, blood pressure, and age.",
        specialty: Specialty::Pulmonology,
        function: curb_65,
    })?;
    registry.register(CalculatorEntry {
        id: "decaf_score",
        title: "DECAF Score for Acute Exacerbation of COPD",
        description: "Predicts in-hospital mortality in acute COPD exacerbation from \
                      dyspnoea, eosinopenia, consolidation, acidaemia, and atrial fibrillation.",
        specialty: Specialty::Pulmonology,
        function: decaf_score,
    })?;
    Ok(())
}

/// Pulmonary Embolism Severity Index.
///
/// Age contributes its value in points; male sex adds 10; comorbidities and
/// exam findings add fixed weights. Risk classes: I <=65, II 66-85,
/// III 86-105, IV 106-125, V >=126.
pub fn pesi(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let age = params.require_i64("age")?;
    let male = params.require_str("sex")? == "male";

    let mut score = age;
    if male {
        score += 10;
    }
    if params.require_yes_no("cancer_history")? {
        score += 30;
    }
    if params.require_yes_no("heart_failure_history")? {
        score += 10;
    }
    if params.require_yes_no("chronic_lung_disease_history")? {
        score += 10;
    }
    if params.require_yes_no("heart_rate_110_or_higher")? {
        score += 20;
    }
    if params.require_yes_no("systolic_bp_less_than_100")? {
        score += 30;
    }
    if params.require_yes_no("respiratory_rate_30_or_higher")? {
        score += 20;
    }
    if params.require_yes_no("temperature_less_than_36")? {
        score += 20;
    }
    if params.require_yes_no("altered_mental_status")? {
        score += 60;
    }
    if params.require_yes_no("oxygen_saturation_less_than_90")? {
        score += 20;
    }

    let (stage, stage_description, interpretation) = if score <= 65 {
        (
            "Class I",
            "Very low risk",
            "Very low 30-day mortality risk (0.0-1.6%). Outpatient management may be \
             appropriate if no other contraindications exist.",
        )
    } else if score <= 85 {
        (
            "Class II",
            "Low risk",
            "Low 30-day mortality risk (1.7-3.5%). Outpatient management may still be \
             considered in selected patients.",
        )
    } else if score <= 105 {
        (
            "Class III",
            "Moderate risk",
            "Moderate 30-day mortality risk (3.2-7.1%). Inpatient management is generally \
             recommended.",
        )
    } else if score <= 125 {
        (
            "Class IV",
            "High risk",
            "High 30-day mortality risk (4.0-11.4%). Inpatient management with close \
             monitoring is recommended.",
        )
    } else {
        (
            "Class V",
            "Very high risk",
            "Very high 30-day mortality risk (10.0-24.5%). Consider higher-level or \
             intensive care monitoring.",
        )
    };

    Ok(ScoreOutput::new(
        score,
        "points",
        stage,
        stage_description,
        format!("PESI score of {score} points. {interpretation}"),
    ))
}

/// CURB-65 pneumonia severity score: one point per criterion, 0-5.
pub fn curb_65(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let criteria = [
        "confusion",
        "urea_over_7_mmol",
        "respiratory_rate_30_or_higher",
        "low_systolic_or_diastolic_bp",
        "age_65_or_older",
    ];
    let mut score = 0i64;
    for criterion in criteria {
        if params.require_yes_no(criterion)? {
            score += 1;
        }
    }

    let (stage, stage_description, interpretation) = match score {
        0 | 1 => (
            "Low Risk",
            "Low severity",
            "30-day mortality below 3%. Outpatient treatment is usually appropriate.",
        ),
        2 => (
            "Moderate Risk",
            "Moderate severity",
            "30-day mortality around 9%. Consider hospital admission or supervised \
             outpatient treatment.",
        ),
        _ => (
            "High Risk",
            "High severity",
            "30-day mortality of 15-40%. Hospitalize and assess for intensive care \
             admission, particularly with a score of 4 or 5.",
        ),
    };

    Ok(ScoreOutput::new(
        score,
        "points",
        stage,
        stage_description,
        format!("CURB-65 score of {score}. {interpretation}"),
    ))
}

/// DECAF score: extended MRC dyspnoea scale (0-2) plus four one-point
/// criteria, 0-6 total.
pub fn decaf_score(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let dyspnea_points = match params.require_str("emrcd_dyspnea")? {
        "not_too_dyspneic" => 0,
        "too_dyspneic_independent" => 1,
        "too_dyspneic_dependent" => 2,
        other => {
            return Err(crate::ScoreError::InvalidParameter {
                name: "emrcd_dyspnea",
                reason: format!("unrecognised dyspnoea category '{}'", other),
            })
        }
    };

    let mut score = dyspnea_points;
    for criterion in [
        "eosinopenia",
        "consolidation",
        "acidemia",
        "atrial_fibrillation",
    ] {
        if params.require_yes_no(criterion)? {
            score += 1;
        }
    }

    let (stage, stage_description, interpretation) = match score {
        0 | 1 => (
            "Low Risk",
            "Low in-hospital mortality risk",
            "In-hospital mortality around 1.4%. Routine ward care is usually sufficient; \
             early discharge may be considered.",
        ),
        2 => (
            "Intermediate Risk",
            "Intermediate in-hospital mortality risk",
            "In-hospital mortality around 8.4%. Use clinical judgement regarding level of \
             care and escalation planning.",
        ),
        _ => (
            "High Risk",
            "High in-hospital mortality risk",
            "In-hospital mortality around 34.6%. Consider higher-level care and early \
             discussion of treatment escalation or palliation preferences.",
        ),
    };

    Ok(ScoreOutput::new(
        score,
        "points",
        stage,
        stage_description,
        format!("DECAF score of {score}. {interpretation}"),
    ))
}
