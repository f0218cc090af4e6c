//! Command implementations. Each returns a serializable value; printing
//! is left to `main`.

use lbw_core::models::assessment::AssessmentType;
use lbw_core::models::record::AssessmentRecord;
use lbw_instruments::definition::{AssessmentDefinition, ResponseSet};
use lbw_instruments::fitness::{self, AreaRecommendation, FitnessBreakdown};
use lbw_instruments::record::build_record;
use lbw_instruments::scoring::{ScoringResult, evaluate, evaluate_strict};
use lbw_instruments::validation::{DefinitionError, validate_definition, validate_responses};
use lbw_instruments::{all_assessments, require_assessment};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub assessment_type: AssessmentType,
    pub title: String,
    pub questions: usize,
    pub estimated_minutes: u32,
}

pub fn list() -> Vec<CatalogEntry> {
    all_assessments()
        .into_iter()
        .map(|a| CatalogEntry {
            id: a.id.clone(),
            assessment_type: a.assessment_type,
            title: a.title.clone(),
            questions: a.questions.len(),
            estimated_minutes: a.estimated_minutes,
        })
        .collect()
}

pub fn show(id: &str) -> eyre::Result<&'static AssessmentDefinition> {
    Ok(require_assessment(id)?)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreOptions {
    pub strict: bool,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ScoreOutput {
    Result(ScoringResult),
    Record(Box<AssessmentRecord>),
}

/// Score a JSON object of question id → response.
///
/// Without `strict`, validation findings are logged and the best-effort
/// result is returned anyway. With a user id, the result is packaged as a
/// record stamped with the current time.
pub fn score(id: &str, responses_json: &str, options: ScoreOptions) -> eyre::Result<ScoreOutput> {
    let definition = require_assessment(id)?;
    let responses: ResponseSet = serde_json::from_str(responses_json)
        .map_err(|e| eyre::eyre!("responses must be a JSON object of question id to integer: {e}"))?;

    let result = if options.strict {
        evaluate_strict(definition, &responses)?
    } else {
        for problem in validate_responses(definition, &responses) {
            tracing::warn!(question_id = %problem.question_id, "{problem}");
        }
        evaluate(definition, &responses)
    };

    Ok(match options.user_id {
        Some(user_id) => {
            let record = build_record(user_id, definition, &responses, &result, jiff::Timestamp::now());
            tracing::info!(record_id = %record.id, %user_id, assessment_id = %definition.id, "record built");
            ScoreOutput::Record(Box::new(record))
        }
        None => ScoreOutput::Result(result),
    })
}

#[derive(Debug, Serialize)]
pub struct DefinitionReport {
    pub id: String,
    pub errors: Vec<DefinitionError>,
}

/// Check one assessment's definition, or every built-in one.
pub fn validate(id: Option<&str>) -> eyre::Result<Vec<DefinitionReport>> {
    let definitions = match id {
        Some(id) => vec![require_assessment(id)?],
        None => all_assessments(),
    };

    Ok(definitions
        .into_iter()
        .map(|d| DefinitionReport {
            id: d.id.clone(),
            errors: validate_definition(d),
        })
        .collect())
}

#[derive(Debug, Serialize)]
pub struct AreaScore {
    pub score: u32,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FitnessReport {
    pub breakdown: FitnessBreakdown,
    pub overall: AreaScore,
    pub focus: AreaScore,
    pub memory: AreaScore,
    pub mood: AreaScore,
    pub stress: AreaScore,
    pub recommendations: Vec<AreaRecommendation>,
}

fn area(score: u32) -> AreaScore {
    AreaScore {
        score,
        description: fitness::describe(score),
    }
}

/// Aggregate a JSON array of saved records into a fitness report.
pub fn fitness(records_json: &str, previous: &FitnessBreakdown) -> eyre::Result<FitnessReport> {
    let records = AssessmentRecord::parse_many(records_json)?;
    let breakdown = fitness::aggregate(&records, previous);
    tracing::debug!(records = records.len(), overall = breakdown.overall, "fitness aggregated");

    Ok(FitnessReport {
        overall: area(breakdown.overall),
        focus: area(breakdown.focus),
        memory: area(breakdown.memory),
        mood: area(breakdown.mood),
        stress: area(breakdown.stress),
        recommendations: fitness::area_recommendations(&breakdown),
        breakdown,
    })
}
