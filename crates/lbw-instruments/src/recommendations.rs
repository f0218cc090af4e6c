//! Category-keyed recommendation text.
//!
//! Keys are lowercased category names. Any assessment type or category
//! without an entry gets [`GENERIC`].

use lbw_core::models::assessment::AssessmentType;
use tracing::warn;

type Table = &'static [(&'static str, &'static [&'static str])];

pub const GENERIC: [&str; 3] = [
    "Complete your assessment to receive personalized recommendations",
    "Work with our brain wellness coaches for personalized guidance",
    "Continue to track your progress over time",
];

const ADHD: Table = &[
    (
        "minimal",
        &[
            "Continue maintaining good organizational habits",
            "Consider time management techniques to optimize productivity",
            "Regular exercise can help maintain focus and attention",
        ],
    ),
    (
        "mild",
        &[
            "Implement daily planning and organization systems",
            "Try mindfulness meditation for improved focus",
            "Consider cognitive behavioral strategies for executive function",
            "Regular exercise and adequate sleep are crucial",
        ],
    ),
    (
        "moderate",
        &[
            "Work with a brain wellness coach for personalized strategies",
            "Consider QEEG brain mapping for detailed insights",
            "Implement structured daily routines and organization systems",
            "Cognitive training exercises may be beneficial",
            "Consult with a healthcare provider about treatment options",
        ],
    ),
    (
        "severe",
        &[
            "Professional evaluation by a qualified healthcare provider is recommended",
            "Consider comprehensive QEEG brain mapping",
            "Work with specialized ADHD coaches and therapists",
            "Medication evaluation may be appropriate",
            "Implement comprehensive life management strategies",
        ],
    ),
];

const GAD7: Table = &[
    (
        "minimal",
        &[
            "Continue current stress management practices",
            "Maintain regular exercise and healthy sleep habits",
            "Practice gratitude and mindfulness regularly",
        ],
    ),
    (
        "mild",
        &[
            "Learn and practice relaxation techniques",
            "Consider mindfulness-based stress reduction",
            "Regular exercise and good sleep hygiene",
            "Limit caffeine and practice deep breathing",
        ],
    ),
    (
        "moderate",
        &[
            "Work with a nervous system coach",
            "Consider cognitive behavioral therapy techniques",
            "Practice daily meditation and breathwork",
            "Professional counseling may be beneficial",
        ],
    ),
    (
        "severe",
        &[
            "Seek professional mental health support immediately",
            "Consider therapy and possible medication evaluation",
            "Learn crisis management techniques",
            "Build a strong support network",
        ],
    ),
];

const PSS: Table = &[
    (
        "low stress",
        &[
            "Maintain current healthy coping strategies",
            "Continue regular self-care practices",
            "Share your successful stress management with others",
        ],
    ),
    (
        "moderate stress",
        &[
            "Implement stress reduction techniques like meditation",
            "Improve time management and organization",
            "Regular physical activity and relaxation",
            "Consider stress management coaching",
        ],
    ),
    (
        "high stress",
        &[
            "Priority focus on stress reduction is essential",
            "Professional stress management support recommended",
            "Learn and practice daily stress reduction techniques",
            "Consider nervous system coaching and therapy",
        ],
    ),
];

const MEMORY: Table = &[
    (
        "excellent",
        &[
            "Continue current brain-healthy habits",
            "Maintain challenging cognitive activities",
            "Regular exercise and good nutrition support memory",
        ],
    ),
    (
        "good",
        &[
            "Practice memory enhancement techniques",
            "Engage in regular cognitive challenges",
            "Maintain brain-healthy lifestyle habits",
        ],
    ),
    (
        "fair",
        &[
            "Start cognitive training and memory exercises",
            "Consider brain nutrition optimization",
            "Practice memory techniques like memory palace",
            "Regular exercise improves cognitive function",
        ],
    ),
    (
        "needs improvement",
        &[
            "Comprehensive cognitive training program recommended",
            "Consider working with a brain wellness coach",
            "Optimize nutrition for brain health",
            "Rule out underlying causes with healthcare provider",
        ],
    ),
];

const MOOD: Table = &[
    (
        "stable",
        &[
            "Continue current emotional wellness practices",
            "Maintain healthy relationships and social connections",
            "Regular self-care and stress management",
        ],
    ),
    (
        "mild concerns",
        &[
            "Practice mood regulation techniques",
            "Regular exercise and good sleep hygiene",
            "Consider mindfulness and emotional intelligence training",
        ],
    ),
    (
        "moderate concerns",
        &[
            "Work with a mental health professional",
            "Learn emotional regulation strategies",
            "Consider mood tracking and lifestyle modifications",
            "Build strong social support networks",
        ],
    ),
    (
        "significant concerns",
        &[
            "Seek professional mental health support immediately",
            "Consider therapy and possible medication evaluation",
            "Develop crisis management plans",
            "Work with specialized mood disorder professionals",
        ],
    ),
];

fn table(assessment_type: AssessmentType) -> Table {
    match assessment_type {
        AssessmentType::Adhd => ADHD,
        AssessmentType::Gad7 => GAD7,
        AssessmentType::Pss => PSS,
        AssessmentType::Memory => MEMORY,
        AssessmentType::Mood => MOOD,
        AssessmentType::Stress => &[],
    }
}

/// Recommendations for a category of an assessment type. `category` is
/// matched case-insensitively.
pub fn recommendations(assessment_type: AssessmentType, category: &str) -> Vec<String> {
    let key = category.to_lowercase();
    match table(assessment_type).iter().find(|(name, _)| *name == key) {
        Some((_, lines)) => lines.iter().map(|s| s.to_string()).collect(),
        None => {
            warn!(%assessment_type, category = %key, "no recommendations for category, using generic set");
            GENERIC.iter().map(|s| s.to_string()).collect()
        }
    }
}
