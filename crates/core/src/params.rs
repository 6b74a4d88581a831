//! Validated parameter mappings handed to scoring functions.

use crate::{CalcResult, ScoreError};
use serde::Serialize;
use serde_json::{Map, Value};

/// One calculator's input: an ordered mapping from field name to scalar value.
///
/// A `ParameterSet` is constructed fresh per request from a typed request
/// model that has already passed schema validation (required fields present,
/// enumerations constrained, numeric ranges satisfied). Scoring functions may
/// therefore assume the static schema holds and limit themselves to
/// cross-field business-rule checks. It is never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet(Map<String, Value>);

impl ParameterSet {
    /// Builds a parameter set from any serializable request model.
    ///
    /// Fails if the model does not serialize to a JSON object.
    pub fn from_request<T: Serialize>(request: &T) -> CalcResult<Self> {
        let value = serde_json::to_value(request).map_err(ScoreError::Serialization)?;
        Self::from_value(value)
    }

    /// Wraps a JSON value, which must be an object.
    pub fn from_value(value: Value) -> CalcResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ScoreError::InvalidParameter {
                name: "<root>",
                reason: format!("must be a JSON object, got {}", type_name(&other)),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Required numeric field. Integers are widened to `f64`.
    pub fn require_f64(&self, name: &'static str) -> CalcResult<f64> {
        match self.0.get(name) {
            Some(Value::Number(n)) => n.as_f64().ok_or_else(|| ScoreError::InvalidParameter {
                name,
                reason: "is not representable as a 64-bit float".into(),
            }),
            Some(other) => Err(ScoreError::InvalidParameter {
                name,
                reason: format!("must be a number, got {}", type_name(other)),
            }),
            None => Err(ScoreError::MissingParameter(name)),
        }
    }

    /// Required integer field.
    pub fn require_i64(&self, name: &'static str) -> CalcResult<i64> {
        match self.0.get(name) {
            Some(Value::Number(n)) => n.as_i64().ok_or_else(|| ScoreError::InvalidParameter {
                name,
                reason: "must be an integer".into(),
            }),
            Some(other) => Err(ScoreError::InvalidParameter {
                name,
                reason: format!("must be an integer, got {}", type_name(other)),
            }),
            None => Err(ScoreError::MissingParameter(name)),
        }
    }

    /// Required string field.
    pub fn require_str(&self, name: &'static str) -> CalcResult<&str> {
        match self.0.get(name) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(ScoreError::InvalidParameter {
                name,
                reason: format!("must be a string, got {}", type_name(other)),
            }),
            None => Err(ScoreError::MissingParameter(name)),
        }
    }

    /// Required `"yes"`/`"no"` field, returned as a boolean.
    pub fn require_yes_no(&self, name: &'static str) -> CalcResult<bool> {
        match self.require_str(name)? {
            "yes" => Ok(true),
            "no" => Ok(false),
            other => Err(ScoreError::InvalidParameter {
                name,
                reason: format!("must be 'yes' or 'no', got '{}'", other),
            }),
        }
    }

    /// Optional numeric field; absent or `null` yields `None`.
    pub fn optional_f64(&self, name: &'static str) -> CalcResult<Option<f64>> {
        match self.0.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.require_f64(name).map(Some),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = ParameterSet::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidParameter { .. }));
    }

    #[test]
    fn test_require_f64_widens_integers() {
        let params = ParameterSet::from_value(json!({ "age": 65 })).unwrap();
        assert_eq!(params.require_f64("age").unwrap(), 65.0);
    }

    #[test]
    fn test_require_yes_no() {
        let params = ParameterSet::from_value(json!({ "a": "yes", "b": "no" })).unwrap();
        assert!(params.require_yes_no("a").unwrap());
        assert!(!params.require_yes_no("b").unwrap());
        assert!(matches!(
            params.require_yes_no("c").unwrap_err(),
            ScoreError::MissingParameter("c")
        ));
    }

    #[test]
    fn test_optional_f64_treats_null_as_absent() {
        let params = ParameterSet::from_value(json!({ "x": null, "y": 1.5 })).unwrap();
        assert_eq!(params.optional_f64("x").unwrap(), None);
        assert_eq!(params.optional_f64("y").unwrap(), Some(1.5));
        assert_eq!(params.optional_f64("z").unwrap(), None);
    }
}
