//! Gastroenterology calculators: Child-Pugh.

use crate::output::ScoreOutput;
use crate::params::ParameterSet;
use crate::registry::{CalculatorEntry, Registry, RegistryError, Specialty};
use crate::{CalcResult, ScoreError};
use serde_json::json;

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(CalculatorEntry {
        id: "child_pugh",
        title: "Child-Pugh Score for Cirrhosis Severity",
        description: "Grades cirrhosis severity (A-C) from bilirubin, albumin, INR, \
                      ascites, and hepatic encephalopathy.",
        specialty: Specialty::Gastroenterology,
        function: child_pugh,
    })?;
    Ok(())
}

/// Child-Pugh score: five components each worth 1-3 points, total 5-15.
///
/// The result is a nested structure carrying both the numeric total and the
/// letter grade.
pub fn child_pugh(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let bilirubin = params.require_f64("total_bilirubin")?;
    let albumin = params.require_f64("serum_albumin")?;
    let inr = params.require_f64("inr")?;

    let bilirubin_points = if bilirubin < 2.0 {
        1
    } else if bilirubin <= 3.0 {
        2
    } else {
        3
    };
    let albumin_points = if albumin > 3.5 {
        1
    } else if albumin >= 2.8 {
        2
    } else {
        3
    };
    let inr_points = if inr < 1.7 {
        1
    } else if inr <= 2.3 {
        2
    } else {
        3
    };
    let ascites_points = match params.require_str("ascites")? {
        "absent" => 1,
        "slight" => 2,
        "moderate" => 3,
        other => return Err(invalid_category("ascites", other)),
    };
    let encephalopathy_points = match params.require_str("encephalopathy")? {
        "none" => 1,
        "grade_1_2" => 2,
        "grade_3_4" => 3,
        other => return Err(invalid_category("encephalopathy", other)),
    };

    let total =
        bilirubin_points + albumin_points + inr_points + ascites_points + encephalopathy_points;

    let (grade, stage, stage_description, interpretation) = if total <= 6 {
        (
            "A",
            "Grade A",
            "Well-compensated cirrhosis",
            "One-year survival around 100% and two-year survival around 85%. Generally \
             a good operative candidate.",
        )
    } else if total <= 9 {
        (
            "B",
            "Grade B",
            "Significant functional compromise",
            "One-year survival around 80%. Elevated operative risk; consider transplant \
             evaluation.",
        )
    } else {
        (
            "C",
            "Grade C",
            "Decompensated cirrhosis",
            "One-year survival around 45%. High operative risk; prioritize transplant \
             evaluation where eligible.",
        )
    };

    Ok(ScoreOutput::new(
        json!({ "total_score": total, "grade": grade }),
        "points",
        stage,
        stage_description,
        format!("Child-Pugh score of {total} (Grade {grade}). {interpretation}"),
    ))
}

fn invalid_category(name: &'static str, got: &str) -> ScoreError {
    ScoreError::InvalidParameter {
        name,
        reason: format!("unrecognised category '{}'", got),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(value: serde_json::Value) -> ParameterSet {
        ParameterSet::from_value(value).unwrap()
    }

    #[test]
    fn test_best_case_is_grade_a() {
        let output = child_pugh(&params(json!({
            "total_bilirubin": 1.0,
            "serum_albumin": 4.0,
            "inr": 1.1,
            "ascites": "absent",
            "encephalopathy": "none",
        })))
        .unwrap();
        assert_eq!(output.result["total_score"], json!(5));
        assert_eq!(output.result["grade"], json!("A"));
        assert_eq!(output.stage, "Grade A");
    }

    #[test]
    fn test_decompensated_patient_is_grade_c() {
        let output = child_pugh(&params(json!({
            "total_bilirubin": 4.2,
            "serum_albumin": 2.5,
            "inr": 2.5,
            "ascites": "moderate",
            "encephalopathy": "grade_1_2",
        })))
        .unwrap();
        assert_eq!(output.result["total_score"], json!(14));
        assert_eq!(output.result["grade"], json!("C"));
    }

    #[test]
    fn test_component_thresholds_are_inclusive() {
        // bilirubin 3.0 and INR 2.3 sit on the upper edge of the 2-point band.
        let output = child_pugh(&params(json!({
            "total_bilirubin": 3.0,
            "serum_albumin": 2.8,
            "inr": 2.3,
            "ascites": "slight",
            "encephalopathy": "none",
        })))
        .unwrap();
        assert_eq!(output.result["total_score"], json!(9));
        assert_eq!(output.result["grade"], json!("B"));
    }
}
