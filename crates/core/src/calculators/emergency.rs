//! Emergency medicine calculators: EDACS.

use crate::output::ScoreOutput;
use crate::params::ParameterSet;
use crate::registry::{CalculatorEntry, Registry, RegistryError, Specialty};
use crate::CalcResult;

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(CalculatorEntry {
        id: "edacs",
        title: "Emergency Department Assessment of Chest Pain Score (EDACS)",
        description: "Identifies chest-pain patients at low risk of major adverse cardiac \
                      events from age, sex, risk factors, and pain characteristics.",
        specialty: Specialty::Emergency,
        function: edacs,
    })?;
    Ok(())
}

/// EDACS chest-pain score.
///
/// Age banding in five-year steps (+2 to +20), male sex +6, known coronary
/// artery disease or three or more risk factors +4 (scored only for ages
/// 18-50), plus symptom modifiers. Palpation and inspiration findings
/// subtract points, so the total may be negative. A score below 16, combined
/// with non-ischaemic ECG and negative serial troponins, marks low risk.
pub fn edacs(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let age = params.require_i64("age")?;
    let male = params.require_str("sex")? == "male";

    let mut score = match age {
        18..=45 => 2,
        46..=50 => 4,
        51..=55 => 6,
        56..=60 => 8,
        61..=65 => 10,
        66..=70 => 12,
        71..=75 => 14,
        76..=80 => 16,
        81..=85 => 18,
        _ => 20,
    };
    if male {
        score += 6;
    }
    // The risk-factor item only applies to the 18-50 band.
    if (18..=50).contains(&age) && params.require_yes_no("known_cad_or_three_risk_factors")? {
        score += 4;
    }
    if params.require_yes_no("diaphoresis")? {
        score += 3;
    }
    if params.require_yes_no("radiates_to_arm_or_shoulder")? {
        score += 5;
    }
    if params.require_yes_no("pain_worse_with_inspiration")? {
        score -= 4;
    }
    if params.require_yes_no("pain_reproduced_by_palpation")? {
        score -= 6;
    }

    let (stage, stage_description, interpretation) = if score < 16 {
        (
            "Low Risk",
            "Low risk of major adverse cardiac events",
            "EDACS below 16. Combined with a non-ischaemic ECG and negative troponins at \
             0 and 2 hours, the patient is low risk and may be suitable for early \
             discharge with outpatient follow-up.",
        )
    } else {
        (
            "Higher Risk",
            "Not low risk for major adverse cardiac events",
            "EDACS of 16 or more. The patient does not qualify for the low-risk \
             accelerated pathway; proceed with standard chest-pain evaluation and serial \
             troponin testing.",
        )
    };

    Ok(ScoreOutput::new(
        score,
        "points",
        stage,
        stage_description,
        format!("EDACS of {score}. {interpretation}"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: serde_json::Value) -> ParameterSet {
        ParameterSet::from_value(value).unwrap()
    }

    fn patient(age: i64, sex: &str) -> serde_json::Value {
        json!({
            "age": age,
            "sex": sex,
            "known_cad_or_three_risk_factors": "no",
            "diaphoresis": "no",
            "radiates_to_arm_or_shoulder": "no",
            "pain_worse_with_inspiration": "no",
            "pain_reproduced_by_palpation": "no",
        })
    }

    #[test]
    fn test_youngest_female_scores_two() {
        let output = edacs(&params(patient(18, "female"))).unwrap();
        assert_eq!(output.result, json!(2));
        assert_eq!(output.stage, "Low Risk");
    }

    #[test]
    fn test_oldest_male_is_higher_risk() {
        let output = edacs(&params(patient(120, "male"))).unwrap();
        assert_eq!(output.result, json!(26));
        assert_eq!(output.stage, "Higher Risk");
    }

    #[test]
    fn test_score_can_go_negative() {
        let mut p = patient(18, "female");
        p["pain_worse_with_inspiration"] = json!("yes");
        p["pain_reproduced_by_palpation"] = json!("yes");
        let output = edacs(&params(p)).unwrap();
        assert_eq!(output.result, json!(-8));
    }

    #[test]
    fn test_risk_factor_item_ignored_over_age_50() {
        let mut p = patient(51, "female");
        p["known_cad_or_three_risk_factors"] = json!("yes");
        let output = edacs(&params(p)).unwrap();
        assert_eq!(output.result, json!(6));
    }
}
