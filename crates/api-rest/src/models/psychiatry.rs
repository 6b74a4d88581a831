//! Request/response models for the psychiatry and addiction-medicine
//! calculators.

use crate::extract::{FieldError, ValidateRequest};
use crate::validation::range_i64;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// GAD-7 items, each rated 0 (not at all) to 3 (nearly every day) over the
/// last two weeks.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Gad7Request {
    #[schema(minimum = 0, maximum = 3)]
    pub feeling_nervous: i64,
    #[schema(minimum = 0, maximum = 3)]
    pub not_able_to_stop_worrying: i64,
    #[schema(minimum = 0, maximum = 3)]
    pub worrying_too_much: i64,
    #[schema(minimum = 0, maximum = 3)]
    pub trouble_relaxing: i64,
    #[schema(minimum = 0, maximum = 3)]
    pub restlessness: i64,
    #[schema(minimum = 0, maximum = 3)]
    pub easily_annoyed: i64,
    #[schema(minimum = 0, maximum = 3)]
    pub feeling_afraid: i64,
}

impl ValidateRequest for Gad7Request {
    fn validate(&self) -> Result<(), FieldError> {
        for (field, value) in [
            ("feeling_nervous", self.feeling_nervous),
            ("not_able_to_stop_worrying", self.not_able_to_stop_worrying),
            ("worrying_too_much", self.worrying_too_much),
            ("trouble_relaxing", self.trouble_relaxing),
            ("restlessness", self.restlessness),
            ("easily_annoyed", self.easily_annoyed),
            ("feeling_afraid", self.feeling_afraid),
        ] {
            range_i64(field, value, 0, 3)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Gad7Response {
    /// Total GAD-7 score, 0-21.
    pub result: i64,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
}

/// CIWA-Ar items; nine domains rated 0-7 plus orientation rated 0-4.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CiwaArRequest {
    #[schema(minimum = 0, maximum = 7)]
    pub nausea_vomiting: i64,
    #[schema(minimum = 0, maximum = 7)]
    pub tremor: i64,
    #[schema(minimum = 0, maximum = 7)]
    pub paroxysmal_sweats: i64,
    #[schema(minimum = 0, maximum = 7)]
    pub anxiety: i64,
    #[schema(minimum = 0, maximum = 7)]
    pub agitation: i64,
    #[schema(minimum = 0, maximum = 7)]
    pub tactile_disturbances: i64,
    #[schema(minimum = 0, maximum = 7)]
    pub auditory_disturbances: i64,
    #[schema(minimum = 0, maximum = 7)]
    pub visual_disturbances: i64,
    #[schema(minimum = 0, maximum = 7)]
    pub headache: i64,
    #[schema(minimum = 0, maximum = 4)]
    pub orientation_clouding: i64,
}

impl ValidateRequest for CiwaArRequest {
    fn validate(&self) -> Result<(), FieldError> {
        for (field, value, max) in [
            ("nausea_vomiting", self.nausea_vomiting, 7),
            ("tremor", self.tremor, 7),
            ("paroxysmal_sweats", self.paroxysmal_sweats, 7),
            ("anxiety", self.anxiety, 7),
            ("agitation", self.agitation, 7),
            ("tactile_disturbances", self.tactile_disturbances, 7),
            ("auditory_disturbances", self.auditory_disturbances, 7),
            ("visual_disturbances", self.visual_disturbances, 7),
            ("headache", self.headache, 7),
            ("orientation_clouding", self.orientation_clouding, 4),
        ] {
            range_i64(field, value, 0, max)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CiwaArResponse {
    /// Total CIWA-Ar score, 0-67.
    pub result: i64,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
}

/// COWS items. Numeric bounds are checked here; the published scale skips
/// some point values, and exact set membership is enforced by the scoring
/// function.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CowsRequest {
    #[schema(minimum = 0, maximum = 4)]
    pub resting_pulse: i64,
    #[schema(minimum = 0, maximum = 4)]
    pub sweating: i64,
    #[schema(minimum = 0, maximum = 5)]
    pub restlessness: i64,
    #[schema(minimum = 0, maximum = 5)]
    pub pupil_size: i64,
    #[schema(minimum = 0, maximum = 4)]
    pub bone_joint_aches: i64,
    #[schema(minimum = 0, maximum = 4)]
    pub runny_nose_tearing: i64,
    #[schema(minimum = 0, maximum = 5)]
    pub gi_upset: i64,
    #[schema(minimum = 0, maximum = 4)]
    pub tremor: i64,
    #[schema(minimum = 0, maximum = 4)]
    pub yawning: i64,
    #[schema(minimum = 0, maximum = 4)]
    pub anxiety_irritability: i64,
    #[schema(minimum = 0, maximum = 5)]
    pub gooseflesh_skin: i64,
}

impl ValidateRequest for CowsRequest {
    fn validate(&self) -> Result<(), FieldError> {
        for (field, value, max) in [
            ("resting_pulse", self.resting_pulse, 4),
            ("sweating", self.sweating, 4),
            ("restlessness", self.restlessness, 5),
            ("pupil_size", self.pupil_size, 5),
            ("bone_joint_aches", self.bone_joint_aches, 4),
            ("runny_nose_tearing", self.runny_nose_tearing, 4),
            ("gi_upset", self.gi_upset, 5),
            ("tremor", self.tremor, 4),
            ("yawning", self.yawning, 4),
            ("anxiety_irritability", self.anxiety_irritability, 4),
            ("gooseflesh_skin", self.gooseflesh_skin, 5),
        ] {
            range_i64(field, value, 0, max)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CowsResponse {
    /// Total COWS score, 0-48.
    pub result: i64,
    pub unit: String,
    pub interpretation: String,
    pub stage: String,
    pub stage_description: String,
}
