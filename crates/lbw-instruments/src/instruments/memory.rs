use std::sync::LazyLock;

use lbw_core::models::assessment::AssessmentType;

use super::{band, scale_question};
use crate::definition::{AssessmentDefinition, ColorTag, ScoringConfig};

/// Memory and cognitive self-report. 6 items rated 1–5; the two
/// self-rated ability items are reverse scored.
///
/// The bands start at 6 although totals of 4 and 5 are reachable; those
/// scores take the first-band fallback.
pub fn definition() -> &'static AssessmentDefinition {
    static DEFINITION: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let frequency = ("Never", "Very Often");
        let ability = ("Very Poor", "Excellent");
        let items = [
            ("How often do you forget where you put something like keys, wallet, or important documents?", frequency, 1),
            ("How often do you forget appointments, meetings, or important dates?", frequency, 1),
            ("How often do you have trouble remembering names of people you meet?", frequency, 1),
            ("How often do you walk into a room and forget why you went there?", frequency, 1),
            ("How would you rate your ability to remember details from conversations?", ability, -1),
            ("How would you rate your ability to learn new information quickly?", ability, -1),
        ];

        let questions = items
            .iter()
            .enumerate()
            .map(|(i, &(text, labels, weight))| {
                scale_question(&format!("memory_{}", i + 1), text, (1, 5), labels, weight)
            })
            .collect();

        AssessmentDefinition {
            id: "memory-assessment".to_string(),
            title: "Memory & Cognitive Assessment".to_string(),
            description: "Evaluate your working memory, recall abilities, and cognitive processing speed".to_string(),
            assessment_type: AssessmentType::Memory,
            estimated_minutes: 20,
            questions,
            scoring: ScoringConfig {
                max_score: 30,
                categories: vec![
                    band("Excellent", (6, 12), "Excellent memory function", ColorTag::Green),
                    band("Good", (13, 18), "Good memory function", ColorTag::Yellow),
                    band(
                        "Fair",
                        (19, 24),
                        "Fair memory function - room for improvement",
                        ColorTag::Orange,
                    ),
                    band(
                        "Needs Improvement",
                        (25, 30),
                        "Memory function could benefit from training",
                        ColorTag::Red,
                    ),
                ],
            },
        }
    });
    &DEFINITION
}
