use std::collections::BTreeMap;

use lbw_core::models::assessment::AssessmentType;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A user's answers for one assessment, keyed by question id.
///
/// Scale questions store the chosen point on the scale; multiple-choice
/// questions store the index of the chosen option.
pub type ResponseSet = BTreeMap<String, i32>;

/// How a question is presented and answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    Scale,
    MultipleChoice,
    Boolean,
    Text,
}

/// Anchor text shown at either end of a scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleLabels {
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// Unique within its assessment.
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub scale_min: Option<i32>,
    #[serde(default)]
    pub scale_max: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_labels: Option<ScaleLabels>,
    /// Advisory only. Scoring never enforces it; see `validation`.
    pub required: bool,
    /// Negative weights mark reverse-scored items. Missing means 1.
    #[serde(default)]
    pub weight: Option<i32>,
}

impl Question {
    pub const DEFAULT_WEIGHT: i32 = 1;
    pub const DEFAULT_SCALE_MIN: i32 = 0;
    /// Upper bound assumed when a scale question leaves `scale_max` unset.
    pub const DEFAULT_SCALE_MAX: i32 = 5;

    pub fn weight(&self) -> i32 {
        self.weight.unwrap_or(Self::DEFAULT_WEIGHT)
    }

    pub fn is_reverse_scored(&self) -> bool {
        self.weight() < 0
    }

    pub fn scale_min_or_default(&self) -> i32 {
        self.scale_min.unwrap_or(Self::DEFAULT_SCALE_MIN)
    }

    pub fn scale_max_or_default(&self) -> i32 {
        self.scale_max.unwrap_or(Self::DEFAULT_SCALE_MAX)
    }

    /// Inclusive bounds a response must fall within, when the question has any.
    pub fn response_bounds(&self) -> Option<(i32, i32)> {
        match self.kind {
            QuestionKind::Scale => Some((self.scale_min_or_default(), self.scale_max_or_default())),
            QuestionKind::MultipleChoice => self
                .options
                .as_ref()
                .map(|options| (0, options.len() as i32 - 1)),
            QuestionKind::Boolean => Some((0, 1)),
            QuestionKind::Text => None,
        }
    }
}

/// Display tag attached to a category band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ColorTag {
    Green,
    Yellow,
    Orange,
    Red,
    Gray,
}

/// Inclusive integer score range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BandRange {
    pub min: i32,
    pub max: i32,
}

impl BandRange {
    pub fn contains(&self, score: i32) -> bool {
        self.min <= score && score <= self.max
    }
}

/// A named severity tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryBand {
    pub name: String,
    pub range: BandRange,
    pub description: String,
    pub color: ColorTag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringConfig {
    pub max_score: i32,
    /// Ascending, contiguous bands covering `[0, max_score]`. Lookup is
    /// first match in declared order.
    pub categories: Vec<CategoryBand>,
}

/// A complete, static assessment: its questions in display order and the
/// bands used to classify the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub assessment_type: AssessmentType,
    pub estimated_minutes: u32,
    pub questions: Vec<Question>,
    pub scoring: ScoringConfig,
}

impl AssessmentDefinition {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}
