//! Neurology and neurocritical-care calculators: Glasgow Coma Scale and
//! cerebral perfusion pressure.

use crate::output::ScoreOutput;
use crate::params::ParameterSet;
use crate::registry::{CalculatorEntry, Registry, RegistryError, Specialty};
use crate::CalcResult;
use serde_json::json;

pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(CalculatorEntry {
        id: "glasgow_coma_scale",
        title: "Glasgow Coma Scale (GCS)",
        description: "Grades impaired consciousness from eye opening, verbal response, and \
                      motor response.",
        specialty: Specialty::Neurology,
        function: glasgow_coma_scale,
    })?;
    registry.register(CalculatorEntry {
        id: "cerebral_perfusion_pressure",
        title: "Cerebral Perfusion Pressure (CPP)",
        description: "Computes cerebral perfusion pressure as mean arterial pressure minus \
                      intracranial pressure.",
        specialty: Specialty::Neurology,
        function: cerebral_perfusion_pressure,
    })?;
    Ok(())
}

/// GCS total: eye opening (1-4) + verbal response (1-5) + motor response
/// (1-6), range 3-15.
pub fn glasgow_coma_scale(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let eye = params.require_i64("eye_opening")?;
    let verbal = params.require_i64("verbal_response")?;
    let motor = params.require_i64("motor_response")?;
    let total = eye + verbal + motor;

    let (stage, stage_description, interpretation) = if total <= 8 {
        (
            "Severe",
            "Severe brain injury",
            "GCS of 8 or less indicates severe impairment; assess the need for airway \
             protection and urgent neurological evaluation.",
        )
    } else if total <= 12 {
        (
            "Moderate",
            "Moderate brain injury",
            "Moderate impairment of consciousness; monitor closely for deterioration.",
        )
    } else {
        (
            "Mild",
            "Mild brain injury",
            "Mild or no impairment of consciousness; observe and reassess as indicated.",
        )
    };

    Ok(ScoreOutput::new(
        total,
        "points",
        stage,
        stage_description,
        format!("GCS {total} (E{eye} V{verbal} M{motor}). {interpretation}"),
    )
    .with_extra(
        "component_breakdown",
        json!({ "eye_opening": eye, "verbal_response": verbal, "motor_response": motor }),
    ))
}

/// CPP = MAP − ICP, in mmHg. A negative value is possible when ICP exceeds
/// MAP and is graded as critical.
pub fn cerebral_perfusion_pressure(params: &ParameterSet) -> CalcResult<ScoreOutput> {
    let map = params.require_f64("mean_arterial_pressure")?;
    let icp = params.require_f64("intracranial_pressure")?;
    let cpp = ((map - icp) * 10.0).round() / 10.0;

    let (stage, stage_description, interpretation) = if cpp < 50.0 {
        (
            "Critical",
            "Critically low cerebral perfusion",
            "Cerebral perfusion pressure below 50 mmHg risks ischemia and secondary brain \
             injury. Immediate intervention to raise MAP or lower ICP is required.",
        )
    } else if cpp < 60.0 {
        (
            "Compromised",
            "Below the usual therapeutic target",
            "Cerebral perfusion pressure of 50-59 mmHg is below the commonly targeted \
             60-70 mmHg range; optimize hemodynamics and ICP control.",
        )
    } else if cpp <= 100.0 {
        (
            "Adequate",
            "Within the adequate perfusion range",
            "Cerebral perfusion pressure is adequate; continue current management and \
             monitoring.",
        )
    } else {
        (
            "Elevated",
            "Above the usual perfusion range",
            "Cerebral perfusion pressure above 100 mmHg may worsen cerebral edema or \
             hyperemia; review blood pressure targets.",
        )
    };

    Ok(ScoreOutput::new(
        cpp,
        "mmHg",
        stage,
        stage_description,
        format!("CPP of {cpp:.1} mmHg. {interpretation}"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(value: serde_json::Value) -> ParameterSet {
        ParameterSet::from_value(value).unwrap()
    }

    #[test]
    fn test_gcs_fully_oriented_patient() {
        let output = glasgow_coma_scale(&params(json!({
            "eye_opening": 4,
            "verbal_response": 5,
            "motor_response": 6,
        })))
        .unwrap();
        assert_eq!(output.result, json!(15));
        assert_eq!(output.stage, "Mild");
    }

    #[test]
    fn test_gcs_eight_is_severe() {
        let output = glasgow_coma_scale(&params(json!({
            "eye_opening": 2,
            "verbal_response": 2,
            "motor_response": 4,
        })))
        .unwrap();
        assert_eq!(output.result, json!(8));
        assert_eq!(output.stage, "Severe");
    }

    #[test]
    fn test_cpp_subtraction_and_bands() {
        let adequate = cerebral_perfusion_pressure(&params(
            json!({ "mean_arterial_pressure": 90.0, "intracranial_pressure": 15.0 }),
        ))
        .unwrap();
        assert_eq!(adequate.result, json!(75.0));
        assert_eq!(adequate.stage, "Adequate");

        let critical = cerebral_perfusion_pressure(&params(
            json!({ "mean_arterial_pressure": 60.0, "intracranial_pressure": 40.0 }),
        ))
        .unwrap();
        assert_eq!(critical.result, json!(20.0));
        assert_eq!(critical.stage, "Critical");
    }

    #[test]
    fn test_cpp_can_be_negative_when_icp_exceeds_map() {
        let output = cerebral_perfusion_pressure(&params(
            json!({ "mean_arterial_pressure": 40.0, "intracranial_pressure": 55.0 }),
        ))
        .unwrap();
        assert_eq!(output.result, json!(-15.0));
        assert_eq!(output.stage, "Critical");
    }
}
