use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The kind of self-report assessment. Used as the key into insight and
/// recommendation tables and to route results into brain fitness areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentType {
    /// Adult ADHD self-report rating scale.
    Adhd,
    /// Generalized Anxiety Disorder 7-item scale.
    Gad7,
    /// Perceived Stress Scale, 10 items.
    Pss,
    Memory,
    Mood,
    /// General stress check. No built-in definition ships for it.
    Stress,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 6] = [
        AssessmentType::Adhd,
        AssessmentType::Gad7,
        AssessmentType::Pss,
        AssessmentType::Memory,
        AssessmentType::Mood,
        AssessmentType::Stress,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssessmentType::Adhd => "adhd",
            AssessmentType::Gad7 => "gad7",
            AssessmentType::Pss => "pss",
            AssessmentType::Memory => "memory",
            AssessmentType::Mood => "mood",
            AssessmentType::Stress => "stress",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssessmentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownAssessmentType(s.to_string()))
    }
}
