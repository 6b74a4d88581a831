//! Infectious disease calculators: VIRSTA and the Jones criteria.

use crate::output::ScoreOutput;
use crate::params::ParameterSet;
use crate::registry::{CalculatorEntry, Registry, RegistryError, Specialty};
use crate::{CalcResult, ScoreError};
use serde_json::json;

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(CalculatorEntry {
        id: "virsta",
        title: "VIRSTA Score for Infective Endocarditis Risk",
        description: "Stratifies the risk of infective endocarditis in Staphylococcus \
                      aureus bacteremia to guide echocardiography.",
        specialty: Specialty::InfectiousDisease,
        function: virsta,
    })?;
    registry.register(CalculatorEntry {
        id: "jones_criteria",
        title: "Jones Criteria for Acute Rheumatic Fever",
        description: "Applies the revised Jones major and minor criteria, with evidence of \
                      preceding streptococcal infection, to the diagnosis of acute \
                      rheumatic fever.",
        specialty: Specialty::InfectiousDisease,
        function: jones_criteria,
    })?;
    Ok(())
}

// Weighted criteria; a total below 3 makes endocarditis unlikely (<1%).
const VIRSTA_CRITERIA: [(&str, i64); 10] = [
    ("cerebral_or_peripheral_emboli", 5),
    ("meningitis", 5),
    ("permanent_intracardiac_device", 4),
    ("iv_drug_use", 4),
    ("preexisting_native_valve_disease", 3),
    ("persistent_bacteremia_over_48h", 3),
    ("community_or_healthcare_acquisition", 2),
    ("temperature_over_38c", 2),
    ("wbc_over_11000", 2),
    ("severe_sepsis_or_shock", 1),
];

/// VIRSTA endocarditis risk score.
///
/// The score is only validated in confirmed S. aureus bacteremia; requests
/// without it are rejected as a business-rule violation.
pub fn virsta(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    if !params.require_yes_no("staph_aureus_bacteremia")? {
        return Err(ScoreError::invalid_input(
            "VIRSTA is only validated for patients with confirmed Staphylococcus aureus \
             bacteremia",
        ));
    }

    let mut score = 0i64;
    for (criterion, weight) in VIRSTA_CRITERIA {
        if params.require_yes_no(criterion)? {
            score += weight;
        }
    }

    let (stage, stage_description, interpretation) = if score < 3 {
        (
            "Lower Risk",
            "Infective endocarditis risk below 1%",
            "With a VIRSTA score below 3 the pre-test probability of infective \
             endocarditis is very low; echocardiography may be deferred in selected \
             patients with an otherwise clear source.",
        )
    } else {
        (
            "Higher Risk",
            "Infective endocarditis cannot be ruled out",
            "A VIRSTA score of 3 or more does not exclude infective endocarditis; \
             echocardiography (transthoracic, then transesophageal if needed) is \
             recommended.",
        )
    };

    Ok(ScoreOutput::new(
        score,
        "points",
        stage,
        stage_description,
        format!("VIRSTA score of {score}. {interpretation}"),
    ))
}

const JONES_MAJOR: [&str; 5] = [
    "carditis",
    "polyarthritis",
    "chorea",
    "erythema_marginatum",
    "subcutaneous_nodules",
];

/// Revised Jones criteria for acute rheumatic fever.
///
/// Requires evidence of preceding streptococcal infection plus two major
/// criteria, or one major and two minor. A manifestation cannot count twice:
/// arthralgia is ignored when polyarthritis is major, and a prolonged PR
/// interval is ignored when carditis is major.
pub fn jones_criteria(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let strep_evidence = params.require_yes_no("evidence_of_preceding_strep_infection")?;

    let mut major_count = 0i64;
    for criterion in JONES_MAJOR {
        if params.require_yes_no(criterion)? {
            major_count += 1;
        }
    }

    let carditis = params.require_yes_no("carditis")?;
    let polyarthritis = params.require_yes_no("polyarthritis")?;

    let mut minor_count = 0i64;
    if params.require_yes_no("arthralgia")? && !polyarthritis {
        minor_count += 1;
    }
    if params.require_yes_no("fever")? {
        minor_count += 1;
    }
    if params.require_yes_no("elevated_esr_or_crp")? {
        minor_count += 1;
    }
    if params.require_yes_no("prolonged_pr_interval")? && !carditis {
        minor_count += 1;
    }

    let met = strep_evidence && (major_count >= 2 || (major_count == 1 && minor_count >= 2));

    let (result, stage, stage_description, interpretation) = if met {
        (
            "Criteria Met",
            "Criteria Met",
            "Diagnostic criteria for acute rheumatic fever are satisfied",
            format!(
                "{major_count} major and {minor_count} minor criteria with evidence of \
                 preceding group A streptococcal infection. The presentation satisfies \
                 the revised Jones criteria; initiate management for acute rheumatic \
                 fever."
            ),
        )
    } else if !strep_evidence {
        (
            "Criteria Not Met",
            "Criteria Not Met",
            "Diagnostic criteria for acute rheumatic fever are not satisfied",
            format!(
                "{major_count} major and {minor_count} minor criteria, but no supporting \
                 evidence of preceding streptococcal infection. The Jones criteria \
                 require microbiological or serological confirmation; consider repeat \
                 serology."
            ),
        )
    } else {
        (
            "Criteria Not Met",
            "Criteria Not Met",
            "Diagnostic criteria for acute rheumatic fever are not satisfied",
            format!(
                "{major_count} major and {minor_count} minor criteria. The combination \
                 does not satisfy the revised Jones criteria (two major, or one major \
                 plus two minor, are required); continue evaluation for alternative \
                 diagnoses."
            ),
        )
    };

    Ok(ScoreOutput::new(
        result,
        "criteria",
        stage,
        stage_description,
        interpretation,
    )
    .with_extra(
        "criteria_breakdown",
        json!({
            "major_count": major_count,
            "minor_count": minor_count,
            "strep_evidence": strep_evidence,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    fn params(value: Value) -> ParameterSet {
        ParameterSet::from_value(value).unwrap()
    }

    fn virsta_all_no() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("staph_aureus_bacteremia".into(), json!("yes"));
        for (criterion, _) in VIRSTA_CRITERIA {
            map.insert(criterion.to_owned(), json!("no"));
        }
        map
    }

    #[test]
    fn test_virsta_fever_and_leukocytosis_is_higher_risk() {
        let mut fields = virsta_all_no();
        fields.insert("temperature_over_38c".into(), json!("yes"));
        fields.insert("wbc_over_11000".into(), json!("yes"));
        let output = virsta(&params(Value::Object(fields))).unwrap();
        assert_eq!(output.result, json!(4));
        assert_eq!(output.stage, "Higher Risk");
    }

    #[test]
    fn test_virsta_all_negative_is_lower_risk() {
        let output = virsta(&params(Value::Object(virsta_all_no()))).unwrap();
        assert_eq!(output.result, json!(0));
        assert_eq!(output.stage, "Lower Risk");
    }

    #[test]
    fn test_virsta_requires_staph_bacteremia() {
        let mut fields = virsta_all_no();
        fields.insert("staph_aureus_bacteremia".into(), json!("no"));
        let err = virsta(&params(Value::Object(fields))).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidInput(_)));
    }

    fn jones_base() -> Map<String, Value> {
        let mut map = Map::new();
        for field in [
            "evidence_of_preceding_strep_infection",
            "carditis",
            "polyarthritis",
            "chorea",
            "erythema_marginatum",
            "subcutaneous_nodules",
            "arthralgia",
            "fever",
            "elevated_esr_or_crp",
            "prolonged_pr_interval",
        ] {
            map.insert(field.to_owned(), json!("no"));
        }
        map
    }

    #[test]
    fn test_jones_two_major_with_strep_evidence_meets_criteria() {
        let mut fields = jones_base();
        fields.insert("evidence_of_preceding_strep_infection".into(), json!("yes"));
        fields.insert("carditis".into(), json!("yes"));
        fields.insert("chorea".into(), json!("yes"));
        let output = jones_criteria(&params(Value::Object(fields))).unwrap();
        assert_eq!(output.result, json!("Criteria Met"));
        assert_eq!(output.extra["criteria_breakdown"]["major_count"], json!(2));
    }

    #[test]
    fn test_jones_arthralgia_not_counted_with_polyarthritis() {
        let mut fields = jones_base();
        fields.insert("evidence_of_preceding_strep_infection".into(), json!("yes"));
        fields.insert("polyarthritis".into(), json!("yes"));
        fields.insert("arthralgia".into(), json!("yes"));
        fields.insert("fever".into(), json!("yes"));
        let output = jones_criteria(&params(Value::Object(fields))).unwrap();
        // One major plus one counted minor: not met.
        assert_eq!(output.stage, "Criteria Not Met");
        assert_eq!(output.extra["criteria_breakdown"]["minor_count"], json!(1));
    }

    #[test]
    fn test_jones_requires_strep_evidence() {
        let mut fields = jones_base();
        fields.insert("carditis".into(), json!("yes"));
        fields.insert("chorea".into(), json!("yes"));
        let output = jones_criteria(&params(Value::Object(fields))).unwrap();
        assert_eq!(output.stage, "Criteria Not Met");
    }
}
