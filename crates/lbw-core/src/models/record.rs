use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::assessment::AssessmentType;
use crate::error::CoreError;

/// One answered question as stored alongside a completed assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordedResponse {
    pub question_id: String,
    pub value: i32,
    pub answered_at: jiff::Timestamp,
}

/// A completed assessment as handed to the persistence service.
/// Every field is produced by the scoring engine except the ids and
/// timestamps, which the caller supplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_id: String,
    pub assessment_type: AssessmentType,
    pub responses: Vec<RecordedResponse>,
    pub score: i32,
    pub category: String,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub completed_at: jiff::Timestamp,
}

impl AssessmentRecord {
    /// Parse a JSON array of records, e.g. an export from the persistence layer.
    pub fn parse_many(json: &str) -> Result<Vec<AssessmentRecord>, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}
