use std::sync::LazyLock;

use lbw_core::models::assessment::AssessmentType;

use super::{band, scale_question};
use crate::definition::{AssessmentDefinition, ColorTag, ScoringConfig};

/// GAD-7: Generalized Anxiety Disorder scale. 7 items rated 0–3, total 0–21.
pub fn definition() -> &'static AssessmentDefinition {
    static DEFINITION: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let items = [
            "Feeling nervous, anxious, or on edge",
            "Not being able to stop or control worrying",
            "Worrying too much about different things",
            "Trouble relaxing",
            "Being so restless that it's hard to sit still",
            "Becoming easily annoyed or irritable",
            "Feeling afraid as if something awful might happen",
        ];

        let questions = items
            .iter()
            .enumerate()
            .map(|(i, text)| {
                scale_question(
                    &format!("gad7_{}", i + 1),
                    text,
                    (0, 3),
                    ("Not at all", "Nearly every day"),
                    1,
                )
            })
            .collect();

        AssessmentDefinition {
            id: "gad-7".to_string(),
            title: "GAD-7 Anxiety Scale".to_string(),
            description: "Generalized Anxiety Disorder scale to assess anxiety symptoms and severity".to_string(),
            assessment_type: AssessmentType::Gad7,
            estimated_minutes: 5,
            questions,
            scoring: ScoringConfig {
                max_score: 21,
                categories: vec![
                    band("Minimal", (0, 4), "Minimal anxiety symptoms", ColorTag::Green),
                    band("Mild", (5, 9), "Mild anxiety symptoms", ColorTag::Yellow),
                    band("Moderate", (10, 14), "Moderate anxiety symptoms", ColorTag::Orange),
                    band("Severe", (15, 21), "Severe anxiety symptoms", ColorTag::Red),
                ],
            },
        }
    });
    &DEFINITION
}
