use std::sync::LazyLock;

use lbw_core::models::assessment::AssessmentType;

use super::{band, scale_question};
use crate::definition::{AssessmentDefinition, ColorTag, ScoringConfig};

/// Adult ADHD rating scale. 18 items rated 0–3, total 0–54.
pub fn definition() -> &'static AssessmentDefinition {
    static DEFINITION: LazyLock<AssessmentDefinition> = LazyLock::new(|| {
        let items = [
            "How often do you have trouble wrapping up the final details of a project, once the challenging parts have been done?",
            "How often do you have difficulty getting things in order when you have to do a task that requires organization?",
            "How often do you have problems remembering appointments or obligations?",
            "When you have a task that requires a lot of thought, how often do you avoid or delay getting started?",
            "How often do you fidget or squirm with your hands or feet when you have to sit down for a long time?",
            "How often do you feel overly active and compelled to do things, like you were driven by a motor?",
            "How often do you make careless mistakes when you have to work on a boring or difficult project?",
            "How often do you have difficulty keeping your attention when you are doing boring or repetitive work?",
            "How often do you have difficulty concentrating on what people say to you, even when they are speaking to you directly?",
            "How often do you misplace or have difficulty finding things at home or at work?",
            "How often are you distracted by activity or noise around you?",
            "How often do you leave your seat in meetings or other situations where you are expected to remain seated?",
            "How often do you feel restless or fidgety?",
            "How often do you have difficulty unwinding and relaxing when you have time to yourself?",
            "How often do you find yourself talking too much when you are in social situations?",
            "When you're in a conversation, how often do you find yourself finishing the sentences of the people you are talking to, before they can finish them themselves?",
            "How often do you have difficulty waiting your turn in situations when turn taking is required?",
            "How often do you interrupt others when they are busy?",
        ];

        let questions = items
            .iter()
            .enumerate()
            .map(|(i, text)| {
                scale_question(
                    &format!("adhd_{}", i + 1),
                    text,
                    (0, 3),
                    ("Never", "Very Often"),
                    1,
                )
            })
            .collect();

        AssessmentDefinition {
            id: "adhd-rating-scale".to_string(),
            title: "ADHD Rating Scale".to_string(),
            description: "Comprehensive evaluation of attention, hyperactivity, and executive function symptoms".to_string(),
            assessment_type: AssessmentType::Adhd,
            estimated_minutes: 15,
            questions,
            scoring: ScoringConfig {
                max_score: 54,
                categories: vec![
                    band("Minimal", (0, 13), "Minimal likelihood of ADHD symptoms", ColorTag::Green),
                    band("Mild", (14, 23), "Mild ADHD symptoms present", ColorTag::Yellow),
                    band(
                        "Moderate",
                        (24, 35),
                        "Moderate ADHD symptoms that may benefit from intervention",
                        ColorTag::Orange,
                    ),
                    band(
                        "Severe",
                        (36, 54),
                        "Significant ADHD symptoms requiring professional evaluation",
                        ColorTag::Red,
                    ),
                ],
            },
        }
    });
    &DEFINITION
}
