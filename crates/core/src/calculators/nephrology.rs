//! Nephrology and acid-base calculators: Winters' formula and the serum
//! anion gap.

use crate::output::ScoreOutput;
use crate::params::ParameterSet;
use crate::registry::{CalculatorEntry, Registry, RegistryError, Specialty};
use crate::CalcResult;
use serde_json::json;

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(CalculatorEntry {
        id: "winters_formula",
        title: "Winters' Formula for Metabolic Acidosis Compensation",
        description: "Calculates the expected arterial pCO2 compensation in pure metabolic \
                      acidosis and grades the adequacy of respiratory compensation.",
        specialty: Specialty::Nephrology,
        function: winters_formula,
    })?;
    registry.register(CalculatorEntry {
        id: "serum_anion_gap",
        title: "Serum Anion Gap",
        description: "Computes the serum anion gap from sodium, chloride, and bicarbonate, \
                      with optional albumin correction.",
        specialty: Specialty::Nephrology,
        function: serum_anion_gap,
    })?;
    Ok(())
}

// Expected pCO2 = 1.5 × HCO3 + 8, tolerance ± 2 mmHg.
const WINTERS_TOLERANCE_MMHG: f64 = 2.0;

/// Winters' formula for respiratory compensation in metabolic acidosis.
///
/// Without a measured pCO₂ the output is the expected compensation; with one,
/// the measured value is graded against the ±2 mmHg tolerance band.
pub fn winters_formula(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let bicarbonate = params.require_f64("bicarbonate")?;
    let measured_pco2 = params.optional_f64("measured_pco2")?;

    let expected = round1(1.5 * bicarbonate + 8.0);
    let lower = round1(expected - WINTERS_TOLERANCE_MMHG);
    let upper = round1(expected + WINTERS_TOLERANCE_MMHG);

    let (stage, stage_description, interpretation) = match measured_pco2 {
        None => (
            "Expected Compensation".to_owned(),
            "Calculated expected respiratory compensation".to_owned(),
            format!(
                "For a serum bicarbonate of {bicarbonate} mEq/L the expected arterial \
                 pCO2 is {expected:.1} mmHg (range {lower:.1}-{upper:.1} mmHg) if \
                 respiratory compensation is appropriate. Obtain an arterial blood gas \
                 to assess actual compensation, and confirm this is a pure metabolic \
                 acidosis before applying the formula."
            ),
        ),
        Some(measured) => {
            let difference = measured - expected;
            if difference < -WINTERS_TOLERANCE_MMHG {
                (
                    "Overcompensation".to_owned(),
                    "Respiratory overcompensation".to_owned(),
                    format!(
                        "Measured pCO2 of {measured} mmHg is {:.1} mmHg below the expected \
                         {expected:.1} mmHg, suggesting a concurrent primary respiratory \
                         alkalosis or mixed acid-base disorder.",
                        difference.abs()
                    ),
                )
            } else if difference > WINTERS_TOLERANCE_MMHG {
                (
                    "Undercompensation".to_owned(),
                    "Inadequate respiratory compensation".to_owned(),
                    format!(
                        "Measured pCO2 of {measured} mmHg is {difference:.1} mmHg above the \
                         expected {expected:.1} mmHg, suggesting respiratory impairment or a \
                         concurrent primary respiratory acidosis. Evaluate respiratory \
                         function and consider ventilatory support if severe."
                    ),
                )
            } else {
                (
                    "Appropriate Compensation".to_owned(),
                    "Expected respiratory compensation".to_owned(),
                    format!(
                        "Measured pCO2 of {measured} mmHg falls within the expected range \
                         ({lower:.1}-{upper:.1} mmHg), indicating appropriate respiratory \
                         compensation. Focus on treating the underlying metabolic acidosis."
                    ),
                )
            }
        }
    };

    Ok(
        ScoreOutput::new(expected, "mmHg", stage, stage_description, interpretation)
            .with_extra("expected_range", json!({ "lower": lower, "upper": upper })),
    )
}

/// Serum anion gap: `Na − (Cl + HCO₃)`, with the optional albumin correction
/// `gap + 2.5 × (4.0 − albumin)`.
pub fn serum_anion_gap(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let sodium = params.require_f64("sodium")?;
    let chloride = params.require_f64("chloride")?;
    let bicarbonate = params.require_f64("bicarbonate")?;
    let albumin = params.optional_f64("albumin")?;

    let gap = round1(sodium - (chloride + bicarbonate));
    let assessed = match albumin {
        Some(albumin) => round1(gap + 2.5 * (4.0 - albumin)),
        None => gap,
    };

    let (stage, stage_description, interpretation) = if assessed < 8.0 {
        (
            "Low Anion Gap",
            "Anion gap below the reference range",
            "A low anion gap is uncommon and most often reflects hypoalbuminemia or a \
             laboratory artefact; consider paraproteinemia if persistent.",
        )
    } else if assessed <= 12.0 {
        (
            "Normal Anion Gap",
            "Anion gap within the reference range (8-12 mEq/L)",
            "If metabolic acidosis is present, it is a normal anion gap (hyperchloremic) \
             acidosis; consider diarrhea or renal tubular acidosis.",
        )
    } else {
        (
            "Elevated Anion Gap",
            "Anion gap above the reference range",
            "An elevated anion gap suggests unmeasured anions; consider ketoacidosis, \
             lactic acidosis, renal failure, or toxin ingestion.",
        )
    };

    let mut output = ScoreOutput::new(
        gap,
        "mEq/L",
        stage,
        stage_description,
        format!("Serum anion gap of {gap:.1} mEq/L. {interpretation}"),
    );
    if albumin.is_some() {
        output = output.with_extra("albumin_corrected_gap", json!(assessed));
    }
    Ok(output)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: serde_json::Value) -> ParameterSet {
        ParameterSet::from_value(value).unwrap()
    }

    #[test]
    fn test_winters_expected_pco2_matches_published_formula() {
        for bicarbonate in [5.0, 12.0, 24.0, 35.0] {
            let output =
                winters_formula(&params(json!({ "bicarbonate": bicarbonate }))).unwrap();
            let expected = 1.5 * bicarbonate + 8.0;
            let got = output.result.as_f64().unwrap();
            assert!(
                (got - expected).abs() <= 2.0,
                "bicarbonate {bicarbonate}: got {got}, published {expected}"
            );
            assert_eq!(output.stage, "Expected Compensation");
        }
    }

    #[test]
    fn test_winters_reports_expected_range() {
        let output = winters_formula(&params(json!({ "bicarbonate": 12.0 }))).unwrap();
        assert_eq!(output.result, json!(26.0));
        assert_eq!(output.extra["expected_range"], json!({ "lower": 24.0, "upper": 28.0 }));
    }

    #[test]
    fn test_winters_grades_measured_pco2() {
        let appropriate = winters_formula(&params(
            json!({ "bicarbonate": 12.0, "measured_pco2": 27.0 }),
        ))
        .unwrap();
        assert_eq!(appropriate.stage, "Appropriate Compensation");

        let under = winters_formula(&params(
            json!({ "bicarbonate": 12.0, "measured_pco2": 35.0 }),
        ))
        .unwrap();
        assert_eq!(under.stage, "Undercompensation");

        let over = winters_formula(&params(
            json!({ "bicarbonate": 12.0, "measured_pco2": 20.0 }),
        ))
        .unwrap();
        assert_eq!(over.stage, "Overcompensation");
    }

    #[test]
    fn test_anion_gap_normal_and_elevated() {
        let normal = serum_anion_gap(&params(
            json!({ "sodium": 140.0, "chloride": 104.0, "bicarbonate": 26.0 }),
        ))
        .unwrap();
        assert_eq!(normal.result, json!(10.0));
        assert_eq!(normal.stage, "Normal Anion Gap");

        let elevated = serum_anion_gap(&params(
            json!({ "sodium": 140.0, "chloride": 100.0, "bicarbonate": 12.0 }),
        ))
        .unwrap();
        assert_eq!(elevated.result, json!(28.0));
        assert_eq!(elevated.stage, "Elevated Anion Gap");
    }

    #[test]
    fn test_anion_gap_albumin_correction() {
        let output = serum_anion_gap(&params(json!({
            "sodium": 140.0,
            "chloride": 104.0,
            "bicarbonate": 26.0,
            "albumin": 2.0,
        })))
        .unwrap();
        // gap 10 + 2.5 × (4.0 − 2.0) = 15 → elevated once corrected.
        assert_eq!(output.extra["albumin_corrected_gap"], json!(15.0));
        assert_eq!(output.stage, "Elevated Anion Gap");
    }
}
