use lbw_core::models::record::{AssessmentRecord, RecordedResponse};
use uuid::Uuid;

use crate::definition::{AssessmentDefinition, ResponseSet};
use crate::scoring::ScoringResult;

/// Package a scored assessment for the persistence service.
///
/// Responses are listed in question order; answers to ids the definition
/// does not know follow in key order. The engine owns no clock, so the
/// completion time is supplied by the caller and stamped on every response.
pub fn build_record(
    user_id: Uuid,
    definition: &AssessmentDefinition,
    responses: &ResponseSet,
    result: &ScoringResult,
    completed_at: jiff::Timestamp,
) -> AssessmentRecord {
    let known = definition
        .questions
        .iter()
        .filter_map(|q| responses.get_key_value(&q.id));
    let unknown = responses
        .iter()
        .filter(|(id, _)| definition.question(id).is_none());

    let recorded = known
        .chain(unknown)
        .map(|(question_id, &value)| RecordedResponse {
            question_id: question_id.clone(),
            value,
            answered_at: completed_at,
        })
        .collect();

    AssessmentRecord {
        id: Uuid::new_v4(),
        user_id,
        assessment_id: definition.id.clone(),
        assessment_type: definition.assessment_type,
        responses: recorded,
        score: result.score,
        category: result.category.clone(),
        insights: result.insights.clone(),
        recommendations: result.recommendations.clone(),
        completed_at,
    }
}
