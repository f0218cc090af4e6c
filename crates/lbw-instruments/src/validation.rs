//! Opt-in checks for definitions and responses.
//!
//! Scoring itself never rejects input. These functions report what the
//! total scoring path would otherwise silently absorb: unanswered required
//! questions, out-of-range answers, and band tables that leave scores
//! unclassified.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::definition::{AssessmentDefinition, QuestionKind, ResponseSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationKind {
    OutOfRange { value: i32, min: i32, max: i32 },
    UnknownQuestion { value: i32 },
    Unanswered,
}

/// A problem with one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: String,
    pub kind: ValidationKind,
    pub message: String,
}

/// A structural problem with an assessment definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum DefinitionError {
    #[error("duplicate question id '{question_id}'")]
    DuplicateQuestion { question_id: String },

    #[error("question '{question_id}' has scale_min {min} above scale_max {max}")]
    InvertedScale {
        question_id: String,
        min: i32,
        max: i32,
    },

    #[error("no category bands defined")]
    NoCategories,

    #[error("band '{name}' has min {min} above max {max}")]
    InvertedBand { name: String, min: i32, max: i32 },

    #[error("first band '{name}' starts at {min}, not 0")]
    DoesNotStartAtZero { name: String, min: i32 },

    #[error("scores {} to {} fall between '{previous}' and '{next}'", .previous_max + 1, .next_min - 1)]
    Gap {
        previous: String,
        next: String,
        previous_max: i32,
        next_min: i32,
    },

    #[error("band '{next}' (from {next_min}) overlaps or precedes '{previous}' (to {previous_max})")]
    Overlap {
        previous: String,
        next: String,
        previous_max: i32,
        next_min: i32,
    },

    #[error("last band '{name}' ends at {max}, not max score {max_score}")]
    DoesNotReachMax {
        name: String,
        max: i32,
        max_score: i32,
    },
}

/// Check a response set against the questions it answers.
///
/// Reports unknown question ids, values outside a question's bounds, and
/// required questions left unanswered. Results follow question order, with
/// unknown ids last.
pub fn validate_responses(
    definition: &AssessmentDefinition,
    responses: &ResponseSet,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for question in &definition.questions {
        let Some(&value) = responses.get(&question.id) else {
            if question.required {
                errors.push(ValidationError {
                    question_id: question.id.clone(),
                    kind: ValidationKind::Unanswered,
                    message: format!("{}: required question '{}' was not answered", definition.title, question.id),
                });
            }
            continue;
        };

        if let Some((min, max)) = question.response_bounds()
            && !(min..=max).contains(&value)
        {
            let what = match question.kind {
                QuestionKind::MultipleChoice => "option index",
                _ => "response",
            };
            errors.push(ValidationError {
                question_id: question.id.clone(),
                kind: ValidationKind::OutOfRange { value, min, max },
                message: format!(
                    "{}: {what} {value} for '{}' is outside range [{min}, {max}]",
                    definition.title, question.id,
                ),
            });
        }
    }

    for (question_id, &value) in responses {
        if definition.question(question_id).is_none() {
            errors.push(ValidationError {
                question_id: question_id.clone(),
                kind: ValidationKind::UnknownQuestion { value },
                message: format!("{}: no question with id '{question_id}'", definition.title),
            });
        }
    }

    errors
}

/// Check that question ids are unique, scales are not inverted, and the
/// category bands partition `[0, max_score]` in ascending order.
pub fn validate_definition(definition: &AssessmentDefinition) -> Vec<DefinitionError> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for question in &definition.questions {
        if !seen.insert(question.id.as_str()) {
            errors.push(DefinitionError::DuplicateQuestion {
                question_id: question.id.clone(),
            });
        }
        if question.kind == QuestionKind::Scale
            && question.scale_min_or_default() > question.scale_max_or_default()
        {
            errors.push(DefinitionError::InvertedScale {
                question_id: question.id.clone(),
                min: question.scale_min_or_default(),
                max: question.scale_max_or_default(),
            });
        }
    }

    let categories = &definition.scoring.categories;
    let (Some(first), Some(last)) = (categories.first(), categories.last()) else {
        errors.push(DefinitionError::NoCategories);
        return errors;
    };

    for band in categories {
        if band.range.min > band.range.max {
            errors.push(DefinitionError::InvertedBand {
                name: band.name.clone(),
                min: band.range.min,
                max: band.range.max,
            });
        }
    }

    if first.range.min != 0 {
        errors.push(DefinitionError::DoesNotStartAtZero {
            name: first.name.clone(),
            min: first.range.min,
        });
    }

    for pair in categories.windows(2) {
        let [previous, next] = pair else { continue };
        let (previous_max, next_min) = (previous.range.max, next.range.min);
        if next_min <= previous_max {
            errors.push(DefinitionError::Overlap {
                previous: previous.name.clone(),
                next: next.name.clone(),
                previous_max,
                next_min,
            });
        } else if next_min > previous_max + 1 {
            errors.push(DefinitionError::Gap {
                previous: previous.name.clone(),
                next: next.name.clone(),
                previous_max,
                next_min,
            });
        }
    }

    if last.range.max != definition.scoring.max_score {
        errors.push(DefinitionError::DoesNotReachMax {
            name: last.name.clone(),
            max: last.range.max,
            max_score: definition.scoring.max_score,
        });
    }

    errors
}
