//! Built-in assessment definitions.
//!
//! Each definition is built once on first use and shared for the life of
//! the process.

pub mod adhd;
pub mod gad7;
pub mod memory;
pub mod mood;
pub mod pss;

use crate::definition::{BandRange, CategoryBand, ColorTag, Question, QuestionKind, ScaleLabels};

fn scale_question(
    id: &str,
    text: &str,
    (min, max): (i32, i32),
    (min_label, max_label): (&str, &str),
    weight: i32,
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        kind: QuestionKind::Scale,
        options: None,
        scale_min: Some(min),
        scale_max: Some(max),
        scale_labels: Some(ScaleLabels {
            min: min_label.to_string(),
            max: max_label.to_string(),
        }),
        required: true,
        weight: Some(weight),
    }
}

fn band(name: &str, (min, max): (i32, i32), description: &str, color: ColorTag) -> CategoryBand {
    CategoryBand {
        name: name.to_string(),
        range: BandRange { min, max },
        description: description.to_string(),
        color,
    }
}
