//! End-to-end orchestration of one scoring request.

use crate::output::ScoreOutput;
use crate::params::ParameterSet;
use crate::registry::Registry;
use crate::ScoreError;
use std::sync::Arc;

/// Failure classification for one dispatch.
///
/// `NotFound` marks a deployment/registration bug (a routed identifier with
/// no registered function), not a user error. `Validation` carries a
/// business-rule rejection raised by the scoring function itself. Everything
/// else is `Internal`.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no calculator registered for '{0}'")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Internal(String),
}

/// Stateless dispatch over the shared read-only registry.
///
/// Cheap to clone; every call is independent. No retries, no caching, no
/// cross-request coordination.
#[derive(Clone)]
pub struct DispatchService {
    registry: Arc<Registry>,
}

impl DispatchService {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolves the identifier and invokes the scoring function.
    pub fn calculate(
        &self,
        id: &str,
        params: &ParameterSet,
    ) -> Result<ScoreOutput, DispatchError> {
        let entry = self
            .registry
            .resolve(id)
            .ok_or_else(|| DispatchError::NotFound(id.to_owned()))?;

        (entry.function)(params).map_err(|err| match err {
            ScoreError::InvalidInput(message) => DispatchError::Validation(message),
            other => DispatchError::Internal(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::bootstrap;
    use serde_json::json;

    fn service() -> DispatchService {
        DispatchService::new(bootstrap().unwrap())
    }

    fn params(value: serde_json::Value) -> ParameterSet {
        ParameterSet::from_value(value).unwrap()
    }

    #[test]
    fn test_unknown_identifier_is_not_found() {
        let err = service()
            .calculate("no_such_score", &params(json!({})))
            .unwrap_err();
        assert!(matches!(err, DispatchError::NotFound(_)));
    }

    #[test]
    fn test_business_rule_rejection_is_classified_as_validation() {
        let mut fields = serde_json::Map::new();
        for name in [
            "staph_aureus_bacteremia",
            "cerebral_or_peripheral_emboli",
            "meningitis",
            "permanent_intracardiac_device",
            "iv_drug_use",
            "preexisting_native_valve_disease",
            "persistent_bacteremia_over_48h",
            "community_or_healthcare_acquisition",
            "temperature_over_38c",
            "wbc_over_11000",
            "severe_sepsis_or_shock",
        ] {
            fields.insert(name.to_owned(), json!("no"));
        }
        let err = service()
            .calculate("virsta", &ParameterSet::from_value(json!(fields)).unwrap())
            .unwrap_err();
        assert!(matches!(err, DispatchError::Validation(_)));
    }

    #[test]
    fn test_missing_parameter_is_classified_as_internal() {
        // Schema validation lives upstream, so a malformed parameter set
        // reaching a scoring function is an internal fault.
        let err = service()
            .calculate("gad_7", &params(json!({})))
            .unwrap_err();
        assert!(matches!(err, DispatchError::Internal(_)));
    }
}
