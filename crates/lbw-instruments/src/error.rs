use thiserror::Error;

use crate::validation::{DefinitionError, ValidationError};

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown assessment: {0}")]
    UnknownAssessment(String),

    #[error("assessment '{assessment_id}' is malformed ({} problem(s))", .errors.len())]
    InvalidDefinition {
        assessment_id: String,
        errors: Vec<DefinitionError>,
    },

    #[error("responses for '{assessment_id}' failed validation ({} problem(s))", .errors.len())]
    InvalidResponses {
        assessment_id: String,
        errors: Vec<ValidationError>,
    },
}
