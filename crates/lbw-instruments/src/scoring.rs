use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::definition::{AssessmentDefinition, CategoryBand, Question, ResponseSet};
use crate::error::InstrumentError;
use crate::insights::insights;
use crate::recommendations::recommendations;
use crate::validation::{validate_definition, validate_responses};

/// Category reported when a definition declares no bands at all.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// The outcome of scoring one set of responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringResult {
    pub score: i32,
    pub category: String,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Contribution of a single answered question to the total.
///
/// Reverse-scored questions (negative weight) contribute
/// `(scale_max - response) * |weight|`. Arithmetic saturates instead of
/// overflowing.
pub fn question_contribution(question: &Question, response: i32) -> i32 {
    let weight = question.weight();
    if weight < 0 {
        question
            .scale_max_or_default()
            .saturating_sub(response)
            .saturating_mul(weight.saturating_abs())
    } else {
        response.saturating_mul(weight)
    }
}

/// Sum the weighted contributions of every answered question, in
/// definition order. Unanswered questions contribute nothing and responses
/// for unknown question ids are ignored. No clamping to `max_score`.
pub fn score(definition: &AssessmentDefinition, responses: &ResponseSet) -> i32 {
    definition
        .questions
        .iter()
        .filter_map(|q| responses.get(&q.id).map(|&r| question_contribution(q, r)))
        .fold(0, i32::saturating_add)
}

/// Find the first band containing `total`.
///
/// A score outside every band falls back to the first declared band. This
/// masks authoring mistakes in the band table, so the fallback is logged.
/// Returns `None` only when the definition has no bands.
pub fn classify(definition: &AssessmentDefinition, total: i32) -> Option<&CategoryBand> {
    let categories = &definition.scoring.categories;
    if let Some(band) = categories.iter().find(|c| c.range.contains(total)) {
        return Some(band);
    }

    let fallback = categories.first();
    if let Some(band) = fallback {
        warn!(
            assessment_id = %definition.id,
            score = total,
            fallback = %band.name,
            "score outside every category band, using first band"
        );
    }
    fallback
}

/// Score, classify and annotate a response set. Total: never fails, and
/// identical inputs always produce identical results.
pub fn evaluate(definition: &AssessmentDefinition, responses: &ResponseSet) -> ScoringResult {
    let total = score(definition, responses);
    let category = classify(definition, total)
        .map(|band| band.name.clone())
        .unwrap_or_else(|| UNCATEGORIZED.to_string());

    debug!(
        assessment_id = %definition.id,
        answered = responses.len(),
        score = total,
        category = %category,
        "assessment scored"
    );

    ScoringResult {
        score: total,
        insights: insights(
            definition.assessment_type,
            total,
            definition.scoring.max_score,
        ),
        recommendations: recommendations(
            definition.assessment_type,
            &category.to_lowercase(),
        ),
        category,
    }
}

/// Like [`evaluate`], but refuses malformed definitions and responses that
/// are unanswered, out of range, or aimed at unknown questions.
pub fn evaluate_strict(
    definition: &AssessmentDefinition,
    responses: &ResponseSet,
) -> Result<ScoringResult, InstrumentError> {
    let definition_errors = validate_definition(definition);
    if !definition_errors.is_empty() {
        return Err(InstrumentError::InvalidDefinition {
            assessment_id: definition.id.clone(),
            errors: definition_errors,
        });
    }

    let response_errors = validate_responses(definition, responses);
    if !response_errors.is_empty() {
        return Err(InstrumentError::InvalidResponses {
            assessment_id: definition.id.clone(),
            errors: response_errors,
        });
    }

    Ok(evaluate(definition, responses))
}
