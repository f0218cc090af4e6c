use lbw_core::models::assessment::AssessmentType;
use lbw_core::models::record::AssessmentRecord;
use lbw_instruments::definition::ColorTag;
use lbw_instruments::fitness::{
    Direction, FitnessArea, FitnessBreakdown, Priority, aggregate, area_recommendations,
    color_tag, describe, normalize, score_change,
};
use uuid::Uuid;

fn record(assessment_type: AssessmentType, score: i32) -> AssessmentRecord {
    AssessmentRecord {
        id: Uuid::new_v4(),
        user_id: Uuid::nil(),
        assessment_id: assessment_type.as_str().to_string(),
        assessment_type,
        responses: vec![],
        score,
        category: String::new(),
        insights: vec![],
        recommendations: vec![],
        completed_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

fn breakdown(focus: u32, memory: u32, mood: u32, stress: u32, overall: u32) -> FitnessBreakdown {
    FitnessBreakdown {
        focus,
        memory,
        mood,
        stress,
        overall,
    }
}

#[test]
fn normalize_doubles_and_floors_at_zero() {
    assert_eq!(normalize(0), 100);
    assert_eq!(normalize(10), 80);
    assert_eq!(normalize(50), 0);
    assert_eq!(normalize(60), 0);
    assert_eq!(normalize(-5), 110);
}

#[test]
fn areas_map_from_assessment_types() {
    assert_eq!(FitnessArea::for_assessment(AssessmentType::Adhd), Some(FitnessArea::Focus));
    assert_eq!(FitnessArea::for_assessment(AssessmentType::Gad7), Some(FitnessArea::Stress));
    assert_eq!(FitnessArea::for_assessment(AssessmentType::Pss), Some(FitnessArea::Stress));
    assert_eq!(FitnessArea::for_assessment(AssessmentType::Stress), None);
}

#[test]
fn aggregate_averages_each_area_and_keeps_previous_for_empty_ones() {
    let records = vec![
        record(AssessmentType::Adhd, 10),
        record(AssessmentType::Adhd, 20),
        record(AssessmentType::Gad7, 5),
        record(AssessmentType::Pss, 20),
        record(AssessmentType::Stress, 40),
    ];
    let previous = breakdown(1, 78, 92, 2, 0);

    let result = aggregate(&records, &previous);
    assert_eq!(result, breakdown(70, 78, 92, 75, 79));
}

#[test]
fn aggregate_rounds_area_means() {
    let records = vec![
        record(AssessmentType::Memory, 10),
        record(AssessmentType::Memory, 10),
        record(AssessmentType::Memory, 11),
    ];
    // (80 + 80 + 78) / 3 = 79.33
    assert_eq!(aggregate(&records, &FitnessBreakdown::default()).memory, 79);
}

#[test]
fn aggregate_without_records_returns_previous_areas() {
    let previous = breakdown(85, 78, 92, 74, 0);
    assert_eq!(aggregate(&[], &previous), breakdown(85, 78, 92, 74, 82));
}

#[test]
fn descriptions_follow_thresholds() {
    assert_eq!(describe(95), "Excellent");
    assert_eq!(describe(90), "Excellent");
    assert_eq!(describe(89), "Good");
    assert_eq!(describe(70), "Fair");
    assert_eq!(describe(60), "Needs Work");
    assert_eq!(describe(59), "Needs Attention");
}

#[test]
fn color_tags_follow_thresholds() {
    assert_eq!(color_tag(80), ColorTag::Green);
    assert_eq!(color_tag(79), ColorTag::Yellow);
    assert_eq!(color_tag(60), ColorTag::Yellow);
    assert_eq!(color_tag(59), ColorTag::Red);
}

#[test]
fn weak_areas_get_prioritised_recommendations() {
    let recs = area_recommendations(&breakdown(65, 65, 55, 75, 65));
    let summary: Vec<_> = recs.iter().map(|r| (r.area.as_str(), r.priority)).collect();
    assert_eq!(
        summary,
        vec![
            ("Focus & Attention", Priority::High),
            ("Memory & Cognitive Function", Priority::Medium),
            ("Mood & Emotional Regulation", Priority::High),
        ]
    );
}

#[test]
fn strong_profile_only_gets_maintenance() {
    let recs = area_recommendations(&breakdown(85, 80, 90, 82, 84));
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].area, "Maintenance");
    assert_eq!(recs[0].priority, Priority::Low);
}

#[test]
fn score_change_reports_direction_and_percentage() {
    let up = score_change(82, 76);
    assert_eq!(up.value, 6);
    assert_eq!(up.direction, Direction::Up);
    assert_eq!(up.percentage, 7.9);

    let down = score_change(70, 80);
    assert_eq!(down.direction, Direction::Down);
    assert!((down.percentage - 12.5).abs() < 1e-9);

    assert_eq!(score_change(70, 70).direction, Direction::Same);

    let from_zero = score_change(50, 0);
    assert_eq!(from_zero.value, 50);
    assert_eq!(from_zero.percentage, 0.0);
}
