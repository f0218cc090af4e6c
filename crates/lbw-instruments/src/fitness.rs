//! Brain fitness breakdown derived from completed assessments.
//!
//! Each record is mapped onto a 0–100 style scale (`100 - 2 * score`,
//! floored at 0) and averaged per area. Areas without records keep their
//! previous value.

use lbw_core::models::assessment::AssessmentType;
use lbw_core::models::record::AssessmentRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::definition::ColorTag;

/// Below this an area gets a recommendation.
const ATTENTION_THRESHOLD: u32 = 70;
/// Below this a recommendation is high priority for areas that grade it.
const HIGH_PRIORITY_THRESHOLD: u32 = 60;
const MAINTENANCE_THRESHOLD: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FitnessArea {
    Focus,
    Memory,
    Mood,
    Stress,
}

impl FitnessArea {
    /// The area an assessment type feeds, if any.
    pub fn for_assessment(assessment_type: AssessmentType) -> Option<FitnessArea> {
        match assessment_type {
            AssessmentType::Adhd => Some(FitnessArea::Focus),
            AssessmentType::Memory => Some(FitnessArea::Memory),
            AssessmentType::Mood => Some(FitnessArea::Mood),
            AssessmentType::Gad7 | AssessmentType::Pss => Some(FitnessArea::Stress),
            AssessmentType::Stress => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FitnessBreakdown {
    pub focus: u32,
    pub memory: u32,
    pub mood: u32,
    pub stress: u32,
    pub overall: u32,
}

impl FitnessBreakdown {
    fn get(&self, area: FitnessArea) -> u32 {
        match area {
            FitnessArea::Focus => self.focus,
            FitnessArea::Memory => self.memory,
            FitnessArea::Mood => self.mood,
            FitnessArea::Stress => self.stress,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AreaRecommendation {
    pub area: String,
    pub suggestion: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Direction {
    Up,
    Down,
    Same,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreChange {
    pub value: u32,
    pub direction: Direction,
    /// Change relative to the previous value. Zero when there was none.
    pub percentage: f64,
}

/// Map a raw assessment score onto the fitness scale.
pub fn normalize(score: i32) -> u32 {
    100i32.saturating_sub(score.saturating_mul(2)).max(0) as u32
}

fn rounded_mean(values: &[u32]) -> Option<u32> {
    if values.is_empty() {
        return None;
    }
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    Some((sum as f64 / values.len() as f64).round() as u32)
}

/// Fold completed assessments into a breakdown.
pub fn aggregate(records: &[AssessmentRecord], previous: &FitnessBreakdown) -> FitnessBreakdown {
    let mut focus = Vec::new();
    let mut memory = Vec::new();
    let mut mood = Vec::new();
    let mut stress = Vec::new();

    for record in records {
        let bucket = match FitnessArea::for_assessment(record.assessment_type) {
            Some(FitnessArea::Focus) => &mut focus,
            Some(FitnessArea::Memory) => &mut memory,
            Some(FitnessArea::Mood) => &mut mood,
            Some(FitnessArea::Stress) => &mut stress,
            None => continue,
        };
        bucket.push(normalize(record.score));
    }

    let focus = rounded_mean(&focus).unwrap_or(previous.focus);
    let memory = rounded_mean(&memory).unwrap_or(previous.memory);
    let mood = rounded_mean(&mood).unwrap_or(previous.mood);
    let stress = rounded_mean(&stress).unwrap_or(previous.stress);
    let overall = rounded_mean(&[focus, memory, mood, stress]).unwrap_or_default();

    FitnessBreakdown {
        focus,
        memory,
        mood,
        stress,
        overall,
    }
}

pub fn describe(score: u32) -> &'static str {
    match score {
        90.. => "Excellent",
        80..=89 => "Good",
        70..=79 => "Fair",
        60..=69 => "Needs Work",
        _ => "Needs Attention",
    }
}

pub fn color_tag(score: u32) -> ColorTag {
    match score {
        80.. => ColorTag::Green,
        60..=79 => ColorTag::Yellow,
        _ => ColorTag::Red,
    }
}

/// Suggestions for weak areas, plus a maintenance note when overall is high.
pub fn area_recommendations(breakdown: &FitnessBreakdown) -> Vec<AreaRecommendation> {
    // (area, label, suggestion, graded): graded areas drop to medium
    // priority between the two thresholds.
    let rules = [
        (
            FitnessArea::Focus,
            "Focus & Attention",
            "Consider ADHD-focused exercises and mindfulness training",
            false,
        ),
        (
            FitnessArea::Memory,
            "Memory & Cognitive Function",
            "Try memory training games and cognitive exercises",
            true,
        ),
        (
            FitnessArea::Stress,
            "Stress Management",
            "Practice stress reduction techniques and breathing exercises",
            false,
        ),
        (
            FitnessArea::Mood,
            "Mood & Emotional Regulation",
            "Consider mood tracking and emotional wellness activities",
            true,
        ),
    ];

    let mut out: Vec<AreaRecommendation> = rules
        .iter()
        .filter_map(|&(area, label, suggestion, graded)| {
            let value = breakdown.get(area);
            if value >= ATTENTION_THRESHOLD {
                return None;
            }
            let priority = if graded && value >= HIGH_PRIORITY_THRESHOLD {
                Priority::Medium
            } else {
                Priority::High
            };
            Some(AreaRecommendation {
                area: label.to_string(),
                suggestion: suggestion.to_string(),
                priority,
            })
        })
        .collect();

    if breakdown.overall >= MAINTENANCE_THRESHOLD {
        out.push(AreaRecommendation {
            area: "Maintenance".to_string(),
            suggestion: "Keep up the great work! Focus on maintaining your current routine"
                .to_string(),
            priority: Priority::Low,
        });
    }

    out
}

pub fn score_change(current: u32, previous: u32) -> ScoreChange {
    let change = i64::from(current) - i64::from(previous);
    let direction = match change {
        c if c > 0 => Direction::Up,
        c if c < 0 => Direction::Down,
        _ => Direction::Same,
    };
    let percentage = if previous > 0 {
        let raw = (change as f64 / f64::from(previous) * 100.0).abs();
        (raw * 10.0).round() / 10.0
    } else {
        0.0
    };

    ScoreChange {
        value: change.unsigned_abs() as u32,
        direction,
        percentage,
    }
}
