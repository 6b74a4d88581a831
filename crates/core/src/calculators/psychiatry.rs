//! Psychiatry and addiction-medicine calculators: GAD-7, CIWA-Ar, and COWS.

use crate::output::ScoreOutput;
use crate::params::ParameterSet;
use crate::registry::{CalculatorEntry, Registry, RegistryError, Specialty};
use crate::{CalcResult, ScoreError};

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(CalculatorEntry {
        id: "gad_7",
        title: "Generalized Anxiety Disorder 7-item Scale (GAD-7)",
        description: "Screens for generalized anxiety disorder severity from seven \
                      self-reported items scored 0-3 over the last two weeks.",
        specialty: Specialty::Psychiatry,
        function: gad_7,
    })?;
    registry.register(CalculatorEntry {
        id: "ciwa_ar",
        title: "CIWA-Ar for Alcohol Withdrawal",
        description: "Quantifies alcohol withdrawal severity from ten clinician-rated \
                      symptom domains to guide symptom-triggered therapy.",
        specialty: Specialty::Psychiatry,
        function: ciwa_ar,
    })?;
    registry.register(CalculatorEntry {
        id: "cows",
        title: "Clinical Opiate Withdrawal Scale (COWS)",
        description: "Rates opioid withdrawal severity from eleven clinician-observed \
                      items, each with a fixed set of allowed point values.",
        specialty: Specialty::Psychiatry,
        function: cows,
    })?;
    Ok(())
}

const GAD_7_ITEMS: [&str; 7] = [
    "feeling_nervous",
    "not_able_to_stop_worrying",
    "worrying_too_much",
    "trouble_relaxing",
    "restlessness",
    "easily_annoyed",
    "feeling_afraid",
];

/// GAD-7 anxiety screen: seven items scored 0-3, total 0-21.
pub fn gad_7(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let mut score = 0i64;
    for item in GAD_7_ITEMS {
        score += params.require_i64(item)?;
    }

    let (stage, stage_description, interpretation) = match score {
        0..=4 => (
            "Minimal Anxiety",
            "Minimal anxiety symptoms",
            "Symptoms are minimal; no intervention indicated. Rescreen if clinically \
             warranted.",
        ),
        5..=9 => (
            "Mild Anxiety",
            "Mild anxiety symptoms",
            "Mild symptoms; monitor and repeat the GAD-7 at follow-up.",
        ),
        10..=14 => (
            "Moderate Anxiety",
            "Moderate anxiety symptoms",
            "A score of 10 or more warrants further evaluation for generalized anxiety \
             disorder and consideration of treatment.",
        ),
        _ => (
            "Severe Anxiety",
            "Severe anxiety symptoms",
            "Severe symptoms; active treatment and specialist referral are recommended.",
        ),
    };

    Ok(ScoreOutput::new(
        score,
        "points",
        stage,
        stage_description,
        format!("GAD-7 score of {score} out of 21. {interpretation}"),
    ))
}

// (item, maximum) pairs; each item is rated 0..=max by the assessor.
const CIWA_ITEMS: [(&str, i64); 10] = [
    ("nausea_vomiting", 7),
    ("tremor", 7),
    ("paroxysmal_sweats", 7),
    ("anxiety", 7),
    ("agitation", 7),
    ("tactile_disturbances", 7),
    ("auditory_disturbances", 7),
    ("visual_disturbances", 7),
    ("headache", 7),
    ("orientation_clouding", 4),
];

/// CIWA-Ar alcohol withdrawal assessment: ten items, total 0-67.
pub fn ciwa_ar(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let mut score = 0i64;
    for (item, _max) in CIWA_ITEMS {
        score += params.require_i64(item)?;
    }

    let (stage, stage_description, interpretation) = if score <= 8 {
        (
            "Absent or Minimal Withdrawal",
            "No or minimal withdrawal symptoms",
            "Pharmacotherapy is usually unnecessary; continue scheduled reassessment.",
        )
    } else if score <= 19 {
        (
            "Mild to Moderate Withdrawal",
            "Mild to moderate withdrawal symptoms",
            "Symptom-triggered benzodiazepine therapy is typically indicated; reassess \
             every 1-2 hours.",
        )
    } else {
        (
            "Severe Withdrawal",
            "Severe withdrawal symptoms",
            "High risk of seizures and delirium tremens. Aggressive pharmacotherapy and \
             close monitoring are required.",
        )
    };

    Ok(ScoreOutput::new(
        score,
        "points",
        stage,
        stage_description,
        format!("CIWA-Ar score of {score} out of 67. {interpretation}"),
    ))
}

// Allowed point values per COWS item; the published scale skips values, so
// set membership is a business rule on top of the static 0..=max schema.
const COWS_ITEMS: [(&str, &[i64]); 11] = [
    ("resting_pulse", &[0, 1, 2, 4]),
    ("sweating", &[0, 1, 2, 3, 4]),
    ("restlessness", &[0, 1, 3, 5]),
    ("pupil_size", &[0, 1, 2, 5]),
    ("bone_joint_aches", &[0, 1, 2, 4]),
    ("runny_nose_tearing", &[0, 1, 2, 4]),
    ("gi_upset", &[0, 1, 2, 3, 5]),
    ("tremor", &[0, 1, 2, 4]),
    ("yawning", &[0, 1, 2, 4]),
    ("anxiety_irritability", &[0, 1, 2, 4]),
    ("gooseflesh_skin", &[0, 3, 5]),
];

/// COWS opioid withdrawal assessment: eleven items, total 0-48.
pub fn cows(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let mut score = 0i64;
    for (item, allowed) in COWS_ITEMS {
        let value = params.require_i64(item)?;
        if !allowed.contains(&value) {
            return Err(ScoreError::invalid_input(format!(
                "{item} must be one of {allowed:?}, got {value}"
            )));
        }
        score += value;
    }

    let (stage, stage_description, interpretation) = match score {
        0..=4 => (
            "Minimal or No Withdrawal",
            "No clinically significant withdrawal",
            "Withdrawal is not active; reassess before initiating agonist therapy.",
        ),
        5..=12 => (
            "Mild Withdrawal",
            "Mild opioid withdrawal",
            "Mild withdrawal; supportive care and reassessment are appropriate.",
        ),
        13..=24 => (
            "Moderate Withdrawal",
            "Moderate opioid withdrawal",
            "Moderate withdrawal; buprenorphine induction can generally be started \
             safely at this severity.",
        ),
        25..=36 => (
            "Moderately Severe Withdrawal",
            "Moderately severe opioid withdrawal",
            "Moderately severe withdrawal; initiate treatment and monitor closely.",
        ),
        _ => (
            "Severe Withdrawal",
            "Severe opioid withdrawal",
            "Severe withdrawal; treat promptly and evaluate for complicating illness.",
        ),
    };

    Ok(ScoreOutput::new(
        score,
        "points",
        stage,
        stage_description,
        format!("COWS score of {score} out of 48. {interpretation}"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn params(value: Value) -> ParameterSet {
        ParameterSet::from_value(value).unwrap()
    }

    fn gad_items(values: [i64; 7]) -> ParameterSet {
        let mut map = Map::new();
        for (item, value) in GAD_7_ITEMS.iter().zip(values) {
            map.insert((*item).to_owned(), json!(value));
        }
        params(Value::Object(map))
    }

    #[test]
    fn test_gad_7_five_ones_and_two_twos_is_mild() {
        let output = gad_7(&gad_items([1, 1, 1, 1, 1, 2, 2])).unwrap();
        assert_eq!(output.result, json!(9));
        assert_eq!(output.stage, "Mild Anxiety");
    }

    #[test]
    fn test_gad_7_band_edges() {
        assert_eq!(gad_7(&gad_items([1, 1, 1, 1, 0, 0, 0])).unwrap().stage, "Minimal Anxiety");
        assert_eq!(gad_7(&gad_items([2, 2, 2, 2, 2, 0, 0])).unwrap().stage, "Moderate Anxiety");
        assert_eq!(gad_7(&gad_items([3, 3, 3, 3, 3, 0, 0])).unwrap().stage, "Severe Anxiety");
        assert_eq!(gad_7(&gad_items([3, 3, 3, 3, 3, 3, 3])).unwrap().result, json!(21));
    }

    fn ciwa_zeroes() -> Map<String, Value> {
        let mut map = Map::new();
        for (item, _) in CIWA_ITEMS {
            map.insert(item.to_owned(), json!(0));
        }
        map
    }

    #[test]
    fn test_ciwa_severe_threshold() {
        let mut items = ciwa_zeroes();
        items.insert("agitation".into(), json!(7));
        items.insert("tremor".into(), json!(7));
        items.insert("anxiety".into(), json!(6));
        let output = ciwa_ar(&params(Value::Object(items))).unwrap();
        assert_eq!(output.result, json!(20));
        assert_eq!(output.stage, "Severe Withdrawal");
    }

    #[test]
    fn test_ciwa_all_zero_is_minimal() {
        let output = ciwa_ar(&params(Value::Object(ciwa_zeroes()))).unwrap();
        assert_eq!(output.result, json!(0));
        assert_eq!(output.stage, "Absent or Minimal Withdrawal");
    }

    fn cows_zeroes() -> Map<String, Value> {
        let mut map = Map::new();
        for (item, _) in COWS_ITEMS {
            map.insert(item.to_owned(), json!(0));
        }
        map
    }

    #[test]
    fn test_cows_moderate_band() {
        let mut items = cows_zeroes();
        items.insert("resting_pulse".into(), json!(4));
        items.insert("restlessness".into(), json!(5));
        items.insert("gi_upset".into(), json!(5));
        let output = cows(&params(Value::Object(items))).unwrap();
        assert_eq!(output.result, json!(14));
        assert_eq!(output.stage, "Moderate Withdrawal");
    }

    #[test]
    fn test_cows_rejects_disallowed_point_value() {
        // 2 is within the 0-5 numeric range for restlessness but is not an
        // allowed value on the published scale.
        let mut items = cows_zeroes();
        items.insert("restlessness".into(), json!(2));
        let err = cows(&params(Value::Object(items))).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidInput(_)));
    }
}
