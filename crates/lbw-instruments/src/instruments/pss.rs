use std::sync::LazyLock;

use lbw_core::models::assessment::AssessmentType;

use super::{band, scale_question};
use crate::definition::{AssessmentDefinition, ColorTag, ScoringConfig};

/// PSS-10: Perceived Stress Scale. 10 items rated 0–4, total 0–40.
/// Items 4, 5, 7 and 8 are positively worded and reverse scored.
pub fn definition() -> &'static AssessmentDefinition {
    static DEFINITION: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let items = [
            ("In the last month, how often have you been upset because of something that happened unexpectedly?", 1),
            ("In the last month, how often have you felt that you were unable to control the important things in your life?", 1),
            ("In the last month, how often have you felt nervous and stressed?", 1),
            ("In the last month, how often have you felt confident about your ability to handle your personal problems?", -1),
            ("In the last month, how often have you felt that things were going your way?", -1),
            ("In the last month, how often have you found that you could not cope with all the things that you had to do?", 1),
            ("In the last month, how often have you been able to control irritations in your life?", -1),
            ("In the last month, how often have you felt that you were on top of things?", -1),
            ("In the last month, how often have you been angered because of things that happened that were outside of your control?", 1),
            ("In the last month, how often have you felt difficulties were piling up so high that you could not overcome them?", 1),
        ];

        let questions = items
            .iter()
            .enumerate()
            .map(|(i, &(text, weight))| {
                scale_question(
                    &format!("pss_{}", i + 1),
                    text,
                    (0, 4),
                    ("Never", "Very Often"),
                    weight,
                )
            })
            .collect();

        AssessmentDefinition {
            id: "pss-10".to_string(),
            title: "Perceived Stress Scale (PSS-10)".to_string(),
            description: "Measures your stress levels and coping mechanisms over the past month".to_string(),
            assessment_type: AssessmentType::Pss,
            estimated_minutes: 10,
            questions,
            scoring: ScoringConfig {
                max_score: 40,
                categories: vec![
                    band("Low Stress", (0, 13), "Low perceived stress levels", ColorTag::Green),
                    band("Moderate Stress", (14, 26), "Moderate perceived stress levels", ColorTag::Yellow),
                    band(
                        "High Stress",
                        (27, 40),
                        "High perceived stress levels requiring attention",
                        ColorTag::Red,
                    ),
                ],
            },
        }
    });
    &DEFINITION
}
