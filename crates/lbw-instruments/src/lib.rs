//! lbw-instruments
//!
//! Self-report assessment definitions and the scoring engine that turns a
//! set of responses into a score, a severity category, and curated insight
//! and recommendation text. Pure data and pure functions: no I/O, no clock,
//! no shared mutable state.

pub mod definition;
pub mod error;
pub mod fitness;
pub mod insights;
pub mod instruments;
pub mod recommendations;
pub mod record;
pub mod scoring;
pub mod validation;

use definition::AssessmentDefinition;
use error::InstrumentError;

/// All built-in assessments, in display order.
pub fn all_assessments() -> Vec<&'static AssessmentDefinition> {
    vec![
        instruments::adhd::definition(),
        instruments::gad7::definition(),
        instruments::pss::definition(),
        instruments::memory::definition(),
        instruments::mood::definition(),
    ]
}

/// Look up an assessment by ID.
pub fn get_assessment(id: &str) -> Option<&'static AssessmentDefinition> {
    all_assessments().into_iter().find(|a| a.id == id)
}

pub fn require_assessment(id: &str) -> Result<&'static AssessmentDefinition, InstrumentError> {
    get_assessment(id).ok_or_else(|| InstrumentError::UnknownAssessment(id.to_string()))
}
