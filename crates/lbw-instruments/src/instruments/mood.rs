use std::sync::LazyLock;

use lbw_core::models::assessment::AssessmentType;

use super::{band, scale_question};
use crate::definition::{AssessmentDefinition, ColorTag, ScoringConfig};

/// Mood and emotional regulation. Mixed scales; emotional stability
/// (1–5) is reverse scored.
pub fn definition() -> &'static AssessmentDefinition {
    static DEFINITION: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let questions = vec![
            scale_question(
                "mood_1",
                "Over the past two weeks, how often have you been bothered by little interest or pleasure in doing things?",
                (0, 3),
                ("Not at all", "Nearly every day"),
                1,
            ),
            scale_question(
                "mood_2",
                "Over the past two weeks, how often have you been bothered by feeling down, depressed, or hopeless?",
                (0, 3),
                ("Not at all", "Nearly every day"),
                1,
            ),
            scale_question(
                "mood_3",
                "How often do you experience sudden mood changes that feel difficult to control?",
                (0, 4),
                ("Never", "Very Often"),
                1,
            ),
            scale_question(
                "mood_4",
                "How would you rate your overall emotional stability?",
                (1, 5),
                ("Very Unstable", "Very Stable"),
                -1,
            ),
            scale_question(
                "mood_5",
                "How often do you feel overwhelmed by your emotions?",
                (0, 4),
                ("Never", "Very Often"),
                1,
            ),
        ];

        AssessmentDefinition {
            id: "mood-assessment".to_string(),
            title: "Mood & Emotional Regulation Assessment".to_string(),
            description: "Comprehensive mood evaluation including depression and emotional regulation".to_string(),
            assessment_type: AssessmentType::Mood,
            estimated_minutes: 12,
            questions,
            scoring: ScoringConfig {
                max_score: 20,
                categories: vec![
                    band("Stable", (0, 5), "Stable mood and emotional regulation", ColorTag::Green),
                    band("Mild Concerns", (6, 10), "Mild mood concerns", ColorTag::Yellow),
                    band(
                        "Moderate Concerns",
                        (11, 15),
                        "Moderate mood concerns requiring attention",
                        ColorTag::Orange,
                    ),
                    band(
                        "Significant Concerns",
                        (16, 20),
                        "Significant mood concerns requiring professional support",
                        ColorTag::Red,
                    ),
                ],
            },
        }
    });
    &DEFINITION
}
