//! Percentage-banded insight text.
//!
//! Each assessment type owns an ordered list of bands. A band applies when
//! the score percentage is strictly below its cut-off; the last band has no
//! cut-off and catches everything else. A zero `max_score` yields NaN or
//! positive infinity, which land in the last band, or negative infinity for
//! a negative score, which lands in the first.

use lbw_core::models::assessment::AssessmentType;
use tracing::warn;

/// Returned for assessment types that have no insight table.
pub const COMPLETED_FALLBACK: &str = "Assessment completed successfully";

struct InsightBand {
    below: Option<f64>,
    lines: [&'static str; 3],
}

const ADHD: &[InsightBand] = &[
    InsightBand {
        below: Some(25.0),
        lines: [
            "Your responses suggest minimal ADHD-related symptoms",
            "You appear to have good attention and focus abilities",
            "Executive function seems to be functioning well",
        ],
    },
    InsightBand {
        below: Some(50.0),
        lines: [
            "You show some mild ADHD-related symptoms",
            "Focus and organization may occasionally be challenging",
            "Some executive function areas could benefit from support",
        ],
    },
    InsightBand {
        below: Some(75.0),
        lines: [
            "Moderate ADHD symptoms are present in your responses",
            "Attention, focus, and organization are significant challenges",
            "Executive function difficulties are impacting daily life",
        ],
    },
    InsightBand {
        below: None,
        lines: [
            "Your responses indicate significant ADHD-related symptoms",
            "Attention, hyperactivity, and executive function are major challenges",
            "Professional evaluation and support would be highly beneficial",
        ],
    },
];

const GAD7: &[InsightBand] = &[
    InsightBand {
        below: Some(25.0),
        lines: [
            "Minimal anxiety symptoms detected",
            "You appear to manage stress and worry effectively",
            "Anxiety does not seem to significantly impact your daily life",
        ],
    },
    InsightBand {
        below: Some(50.0),
        lines: [
            "Mild anxiety symptoms are present",
            "Some worry and nervousness may affect your daily activities",
            "Stress management techniques could be helpful",
        ],
    },
    InsightBand {
        below: Some(75.0),
        lines: [
            "Moderate anxiety levels detected",
            "Worry and anxiety are significantly impacting your life",
            "Professional support and coping strategies would be beneficial",
        ],
    },
    InsightBand {
        below: None,
        lines: [
            "High levels of anxiety symptoms",
            "Anxiety is severely impacting your daily functioning",
            "Professional help is strongly recommended",
        ],
    },
];

const PSS: &[InsightBand] = &[
    InsightBand {
        below: Some(35.0),
        lines: [
            "Low perceived stress levels",
            "You handle life's challenges effectively",
            "Good stress management and coping skills",
        ],
    },
    InsightBand {
        below: Some(65.0),
        lines: [
            "Moderate stress levels detected",
            "Some challenges in managing life's demands",
            "Stress reduction techniques could be helpful",
        ],
    },
    InsightBand {
        below: None,
        lines: [
            "High perceived stress levels",
            "Significant difficulty managing life's demands",
            "Stress is likely impacting your health and well-being",
        ],
    },
];

const MEMORY: &[InsightBand] = &[
    InsightBand {
        below: Some(40.0),
        lines: [
            "Excellent memory and cognitive function",
            "Strong recall and retention abilities",
            "Cognitive processing appears to be functioning well",
        ],
    },
    InsightBand {
        below: Some(60.0),
        lines: [
            "Good memory function with minor concerns",
            "Some occasional memory lapses are normal",
            "Overall cognitive function is healthy",
        ],
    },
    InsightBand {
        below: Some(80.0),
        lines: [
            "Fair memory function with room for improvement",
            "Memory challenges may be affecting daily activities",
            "Cognitive training could be beneficial",
        ],
    },
    InsightBand {
        below: None,
        lines: [
            "Memory function shows significant challenges",
            "Memory difficulties are impacting daily life",
            "Cognitive enhancement strategies are recommended",
        ],
    },
];

const MOOD: &[InsightBand] = &[
    InsightBand {
        below: Some(25.0),
        lines: [
            "Stable mood and emotional regulation",
            "Good emotional resilience and coping skills",
            "Mental health appears to be in good condition",
        ],
    },
    InsightBand {
        below: Some(50.0),
        lines: [
            "Mild mood concerns detected",
            "Some emotional regulation challenges may be present",
            "Mood management techniques could be helpful",
        ],
    },
    InsightBand {
        below: Some(75.0),
        lines: [
            "Moderate mood concerns requiring attention",
            "Emotional regulation is challenging",
            "Professional support would be beneficial",
        ],
    },
    InsightBand {
        below: None,
        lines: [
            "Significant mood and emotional concerns",
            "Emotional regulation is severely impacted",
            "Professional mental health support is strongly recommended",
        ],
    },
];

fn table(assessment_type: AssessmentType) -> Option<&'static [InsightBand]> {
    match assessment_type {
        AssessmentType::Adhd => Some(ADHD),
        AssessmentType::Gad7 => Some(GAD7),
        AssessmentType::Pss => Some(PSS),
        AssessmentType::Memory => Some(MEMORY),
        AssessmentType::Mood => Some(MOOD),
        AssessmentType::Stress => None,
    }
}

/// Score as a percentage of the maximum. Not clamped.
pub fn percentage(score: i32, max_score: i32) -> f64 {
    f64::from(score) / f64::from(max_score) * 100.0
}

/// Index of the band a percentage falls into, for types that have a table.
pub fn band_index(assessment_type: AssessmentType, percentage: f64) -> Option<usize> {
    let bands = table(assessment_type)?;
    bands
        .iter()
        .position(|band| band.below.is_none_or(|cutoff| percentage < cutoff))
}

/// The three insight sentences for a score.
pub fn insights(assessment_type: AssessmentType, score: i32, max_score: i32) -> Vec<String> {
    let pct = percentage(score, max_score);
    if !pct.is_finite() {
        warn!(%assessment_type, score, max_score, percentage = pct, "non-finite score percentage");
    }

    let Some(bands) = table(assessment_type) else {
        return vec![COMPLETED_FALLBACK.to_string()];
    };

    band_index(assessment_type, pct)
        .and_then(|i| bands.get(i))
        .map(|band| band.lines.iter().map(|s| s.to_string()).collect())
        .unwrap_or_else(|| vec![COMPLETED_FALLBACK.to_string()])
}
