use lbw_core::models::assessment::AssessmentType;
use lbw_instruments::definition::{
    AssessmentDefinition, BandRange, CategoryBand, ColorTag, Question, QuestionKind, ResponseSet,
    ScoringConfig,
};
use lbw_instruments::validation::{
    DefinitionError, ValidationKind, validate_definition, validate_responses,
};
use lbw_instruments::{all_assessments, get_assessment};

fn responses(pairs: &[(&str, i32)]) -> ResponseSet {
    pairs.iter().map(|(id, v)| (id.to_string(), *v)).collect()
}

fn band(name: &str, min: i32, max: i32) -> CategoryBand {
    CategoryBand {
        name: name.to_string(),
        range: BandRange { min, max },
        description: String::new(),
        color: ColorTag::Gray,
    }
}

fn question(id: &str, kind: QuestionKind) -> Question {
    Question {
        id: id.to_string(),
        text: String::new(),
        kind,
        options: None,
        scale_min: None,
        scale_max: None,
        scale_labels: None,
        required: false,
        weight: None,
    }
}

fn definition(questions: Vec<Question>, max_score: i32, categories: Vec<CategoryBand>) -> AssessmentDefinition {
    AssessmentDefinition {
        id: "check".to_string(),
        title: "Check".to_string(),
        description: String::new(),
        assessment_type: AssessmentType::Mood,
        estimated_minutes: 1,
        questions,
        scoring: ScoringConfig {
            max_score,
            categories,
        },
    }
}

#[test]
fn built_in_band_tables_are_well_formed_except_memory() {
    for def in all_assessments() {
        let errors = validate_definition(def);
        if def.id == "memory-assessment" {
            assert_eq!(
                errors,
                vec![DefinitionError::DoesNotStartAtZero {
                    name: "Excellent".to_string(),
                    min: 6,
                }]
            );
        } else {
            assert!(errors.is_empty(), "{}: {errors:?}", def.id);
        }
    }
}

#[test]
fn complete_in_range_responses_pass() {
    let pss = get_assessment("pss-10").unwrap();
    let all: ResponseSet = pss.questions.iter().map(|q| (q.id.clone(), 2)).collect();
    assert!(validate_responses(pss, &all).is_empty());
}

#[test]
fn response_problems_are_reported_in_question_order() {
    let gad7 = get_assessment("gad-7").unwrap();
    let mut r: ResponseSet = gad7.questions.iter().map(|q| (q.id.clone(), 1)).collect();
    r.insert("gad7_2".to_string(), 4);
    r.remove("gad7_5");
    r.insert("gad7_99".to_string(), 1);

    let errors = validate_responses(gad7, &r);
    let kinds: Vec<_> = errors.iter().map(|e| (e.question_id.as_str(), &e.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            ("gad7_2", &ValidationKind::OutOfRange { value: 4, min: 0, max: 3 }),
            ("gad7_5", &ValidationKind::Unanswered),
            ("gad7_99", &ValidationKind::UnknownQuestion { value: 1 }),
        ]
    );
    assert_eq!(
        errors[0].to_string(),
        "GAD-7 Anxiety Scale: response 4 for 'gad7_2' is outside range [0, 3]"
    );
}

#[test]
fn optional_questions_may_be_skipped() {
    let def = definition(vec![question("q", QuestionKind::Scale)], 5, vec![band("All", 0, 5)]);
    assert!(validate_responses(&def, &ResponseSet::new()).is_empty());
}

#[test]
fn scale_bounds_default_to_zero_and_five() {
    let def = definition(vec![question("q", QuestionKind::Scale)], 5, vec![band("All", 0, 5)]);
    assert!(validate_responses(&def, &responses(&[("q", 5)])).is_empty());
    assert_eq!(
        validate_responses(&def, &responses(&[("q", -1)]))[0].kind,
        ValidationKind::OutOfRange { value: -1, min: 0, max: 5 }
    );
}

#[test]
fn multiple_choice_index_must_name_an_option() {
    let mut choice = question("pick", QuestionKind::MultipleChoice);
    choice.options = Some(vec!["a".into(), "b".into(), "c".into()]);
    let def = definition(vec![choice], 2, vec![band("All", 0, 2)]);

    assert!(validate_responses(&def, &responses(&[("pick", 2)])).is_empty());
    let errors = validate_responses(&def, &responses(&[("pick", 3)]));
    assert_eq!(errors[0].kind, ValidationKind::OutOfRange { value: 3, min: 0, max: 2 });
    assert!(errors[0].message.contains("option index 3"));
}

#[test]
fn text_questions_have_no_bounds() {
    let def = definition(vec![question("note", QuestionKind::Text)], 5, vec![band("All", 0, 5)]);
    assert!(validate_responses(&def, &responses(&[("note", 9000)])).is_empty());
}

#[test]
fn gaps_and_overlaps_are_reported() {
    let def = definition(
        vec![],
        20,
        vec![band("Low", 0, 4), band("Mid", 7, 12), band("High", 10, 20)],
    );
    let errors = validate_definition(&def);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].to_string(), "scores 5 to 6 fall between 'Low' and 'Mid'");
    assert!(matches!(errors[1], DefinitionError::Overlap { next_min: 10, previous_max: 12, .. }));
}

#[test]
fn descending_bands_count_as_overlap() {
    let def = definition(vec![], 10, vec![band("High", 6, 10), band("Low", 0, 5)]);
    let errors = validate_definition(&def);
    assert!(errors.iter().any(|e| matches!(e, DefinitionError::Overlap { .. })));
    assert!(errors.iter().any(|e| matches!(e, DefinitionError::DoesNotStartAtZero { .. })));
    assert!(errors.iter().any(|e| matches!(e, DefinitionError::DoesNotReachMax { max: 5, .. })));
}

#[test]
fn inverted_band_and_scale_are_reported() {
    let mut q = question("q", QuestionKind::Scale);
    q.scale_min = Some(4);
    q.scale_max = Some(1);
    let def = definition(vec![q], 10, vec![band("Odd", 0, 10), band("Backwards", 12, 11)]);

    let errors = validate_definition(&def);
    assert!(errors.contains(&DefinitionError::InvertedScale {
        question_id: "q".to_string(),
        min: 4,
        max: 1,
    }));
    assert!(errors.contains(&DefinitionError::InvertedBand {
        name: "Backwards".to_string(),
        min: 12,
        max: 11,
    }));
}

#[test]
fn duplicate_question_ids_are_reported() {
    let def = definition(
        vec![question("q", QuestionKind::Scale), question("q", QuestionKind::Scale)],
        5,
        vec![band("All", 0, 5)],
    );
    assert_eq!(
        validate_definition(&def),
        vec![DefinitionError::DuplicateQuestion { question_id: "q".to_string() }]
    );
}

#[test]
fn empty_band_table_is_reported() {
    let def = definition(vec![], 5, vec![]);
    assert_eq!(validate_definition(&def), vec![DefinitionError::NoCategories]);
}
