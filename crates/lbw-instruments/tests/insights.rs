use lbw_core::models::assessment::AssessmentType;
use lbw_instruments::all_assessments;
use lbw_instruments::insights::{COMPLETED_FALLBACK, band_index, insights, percentage};
use lbw_instruments::recommendations::{GENERIC, recommendations};

fn generic() -> Vec<String> {
    GENERIC.iter().map(|s| s.to_string()).collect()
}

#[test]
fn percentage_is_unclamped() {
    assert_eq!(percentage(27, 54), 50.0);
    assert_eq!(percentage(-10, 40), -25.0);
    assert_eq!(percentage(80, 40), 200.0);
}

#[test]
fn band_cut_offs_are_exclusive() {
    assert_eq!(band_index(AssessmentType::Adhd, 24.9), Some(0));
    assert_eq!(band_index(AssessmentType::Adhd, 25.0), Some(1));
    assert_eq!(band_index(AssessmentType::Adhd, 74.9), Some(2));
    assert_eq!(band_index(AssessmentType::Adhd, 75.0), Some(3));
}

#[test]
fn pss_uses_three_bands() {
    assert_eq!(band_index(AssessmentType::Pss, 34.0), Some(0));
    assert_eq!(band_index(AssessmentType::Pss, 35.0), Some(1));
    assert_eq!(band_index(AssessmentType::Pss, 65.0), Some(2));
    assert_eq!(band_index(AssessmentType::Pss, 1000.0), Some(2));
}

#[test]
fn memory_uses_shifted_cut_offs() {
    assert_eq!(band_index(AssessmentType::Memory, 39.0), Some(0));
    assert_eq!(band_index(AssessmentType::Memory, 40.0), Some(1));
    assert_eq!(band_index(AssessmentType::Memory, 60.0), Some(2));
    assert_eq!(band_index(AssessmentType::Memory, 80.0), Some(3));
}

#[test]
fn insights_follow_score_percentage() {
    assert_eq!(
        insights(AssessmentType::Gad7, 0, 21),
        vec![
            "Minimal anxiety symptoms detected",
            "You appear to manage stress and worry effectively",
            "Anxiety does not seem to significantly impact your daily life",
        ]
    );
    assert_eq!(
        insights(AssessmentType::Adhd, 27, 54)[0],
        "Moderate ADHD symptoms are present in your responses"
    );
    assert_eq!(
        insights(AssessmentType::Memory, 12, 30)[0],
        "Good memory function with minor concerns"
    );
    assert_eq!(
        insights(AssessmentType::Mood, 10, 20)[0],
        "Moderate mood concerns requiring attention"
    );
}

#[test]
fn every_typed_table_yields_three_sentences() {
    for definition in all_assessments() {
        for score in 0..=definition.scoring.max_score {
            let lines = insights(definition.assessment_type, score, definition.scoring.max_score);
            assert_eq!(lines.len(), 3, "{} at {score}", definition.id);
        }
    }
}

#[test]
fn negative_scores_land_in_the_first_band() {
    assert_eq!(
        insights(AssessmentType::Pss, -4, 40)[0],
        "Low perceived stress levels"
    );
}

#[test]
fn zero_max_score_lands_in_the_last_band() {
    assert_eq!(band_index(AssessmentType::Adhd, f64::NAN), Some(3));
    assert_eq!(
        insights(AssessmentType::Adhd, 0, 0)[0],
        "Your responses indicate significant ADHD-related symptoms"
    );
    assert_eq!(
        insights(AssessmentType::Gad7, 3, 0)[0],
        "High levels of anxiety symptoms"
    );
}

#[test]
fn negative_score_over_zero_max_lands_in_the_first_band() {
    assert_eq!(band_index(AssessmentType::Gad7, f64::NEG_INFINITY), Some(0));
    assert_eq!(
        insights(AssessmentType::Gad7, -3, 0)[0],
        "Minimal anxiety symptoms detected"
    );
}

#[test]
fn stress_type_has_no_insight_table() {
    assert_eq!(band_index(AssessmentType::Stress, 10.0), None);
    assert_eq!(
        insights(AssessmentType::Stress, 10, 40),
        vec![COMPLETED_FALLBACK.to_string()]
    );
}

#[test]
fn unknown_category_gets_generic_recommendations() {
    assert_eq!(
        recommendations(AssessmentType::Adhd, "unknown-category"),
        generic()
    );
}

#[test]
fn stress_type_gets_generic_recommendations() {
    assert_eq!(recommendations(AssessmentType::Stress, "moderate"), generic());
}

#[test]
fn category_lookup_ignores_case() {
    let lower = recommendations(AssessmentType::Pss, "moderate stress");
    assert_eq!(lower.len(), 4);
    assert_eq!(recommendations(AssessmentType::Pss, "Moderate Stress"), lower);
}

#[test]
fn recommendation_keys_are_not_shared_across_types() {
    assert_eq!(recommendations(AssessmentType::Mood, "severe"), generic());
    assert_eq!(
        recommendations(AssessmentType::Gad7, "severe")[0],
        "Seek professional mental health support immediately"
    );
}

#[test]
fn every_catalog_band_has_curated_recommendations() {
    for definition in all_assessments() {
        for band in &definition.scoring.categories {
            let lines = recommendations(definition.assessment_type, &band.name);
            assert_ne!(lines, generic(), "{} / {}", definition.id, band.name);
            assert!((3..=5).contains(&lines.len()));
        }
    }
}
