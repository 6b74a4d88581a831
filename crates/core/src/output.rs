//! Structured score results produced by scoring functions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The result of one scoring-function invocation.
///
/// Serializes to the uniform wire shape shared by every calculator:
/// `result`, `unit`, `interpretation`, `stage`, `stage_description`, plus any
/// calculator-specific extra keys flattened alongside them (for example a
/// component breakdown or an expected range). Produced once per invocation
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutput {
    /// Numeric, string, or nested score value depending on the calculator.
    pub result: Value,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
    #[serde(flatten, skip_serializing_if = "Map::is_empty", default)]
    pub extra: Map<String, Value>,
}

impl ScoreOutput {
    pub fn new(
        result: impl Into<Value>,
        unit: impl Into<String>,
        stage: impl Into<String>,
        stage_description: impl Into<String>,
        interpretation: impl Into<String>,
    ) -> Self {
        Self {
            result: result.into(),
            unit: unit.into(),
            interpretation: interpretation.into(),
            stage: stage.into(),
            stage_description: stage_description.into(),
            extra: Map::new(),
        }
    }

    /// Attaches a calculator-specific extra key to the response.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extras_flatten_into_top_level_keys() {
        let output = ScoreOutput::new(4, "points", "Higher Risk", "desc", "interp")
            .with_extra("component_breakdown", json!({ "a": 2, "b": 2 }));
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["result"], json!(4));
        assert_eq!(value["component_breakdown"]["a"], json!(2));
    }

    #[test]
    fn test_empty_extra_map_is_omitted() {
        let output = ScoreOutput::new(1, "points", "s", "d", "i");
        let value = serde_json::to_value(&output).unwrap();
        assert!(value.get("extra").is_none());
        assert_eq!(value.as_object().unwrap().len(), 5);
    }
}
