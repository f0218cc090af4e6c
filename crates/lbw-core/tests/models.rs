use lbw_core::error::CoreError;
use lbw_core::models::assessment::AssessmentType;
use lbw_core::models::record::{AssessmentRecord, RecordedResponse};
use uuid::Uuid;

#[test]
fn assessment_type_parses_every_tag() {
    for t in AssessmentType::ALL {
        let parsed: AssessmentType = t.as_str().parse().unwrap();
        assert_eq!(parsed, t);
    }
}

#[test]
fn assessment_type_rejects_unknown_tag() {
    let err = "anxiety".parse::<AssessmentType>().unwrap_err();
    assert!(matches!(err, CoreError::UnknownAssessmentType(ref s) if s == "anxiety"));
}

#[test]
fn assessment_type_serializes_as_snake_case() {
    assert_eq!(serde_json::to_string(&AssessmentType::Gad7).unwrap(), "\"gad7\"");
    let t: AssessmentType = serde_json::from_str("\"pss\"").unwrap();
    assert_eq!(t, AssessmentType::Pss);
}

#[test]
fn records_parse_from_exported_array() {
    let completed: jiff::Timestamp = "2026-03-01T12:00:00Z".parse().unwrap();
    let record = AssessmentRecord {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        assessment_id: "gad-7".to_string(),
        assessment_type: AssessmentType::Gad7,
        responses: vec![RecordedResponse {
            question_id: "gad7_1".to_string(),
            value: 2,
            answered_at: completed,
        }],
        score: 2,
        category: "Minimal".to_string(),
        insights: vec!["Minimal anxiety symptoms detected".to_string()],
        recommendations: vec![],
        completed_at: completed,
    };

    let json = format!("[{}]", record.to_json().unwrap());
    let parsed = AssessmentRecord::parse_many(&json).unwrap();
    assert_eq!(parsed, vec![record]);
}

#[test]
fn malformed_records_are_a_serialization_error() {
    let err = AssessmentRecord::parse_many("{\"not\": \"an array\"}").unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}
