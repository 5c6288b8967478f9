use std::sync::Arc;

use chrono::NaiveDate;

use crate::screening::catalog::{CatalogVersion, QuestionCatalog};
use crate::screening::domain::{
    AnswerValue, Answers, DiseaseFactors, Prompt, Question, QuestionId, QuestionKind,
};
use crate::screening::evaluation::{PredictionResult, ScoringEngine};
use crate::screening::intake::AnswerIntake;

pub(super) const EPSILON: f64 = 1e-9;

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

pub(super) fn intake() -> AnswerIntake {
    AnswerIntake::new(QuestionCatalog::standard())
}

pub(super) fn value(raw: u8) -> AnswerValue {
    AnswerValue::new(raw).expect("value within 0..=3")
}

pub(super) fn answers(pairs: &[(u32, u8)]) -> Answers {
    pairs
        .iter()
        .map(|(id, raw)| (QuestionId(*id), value(*raw)))
        .collect()
}

pub(super) fn all_answered_at(raw: u8) -> Answers {
    QuestionCatalog::standard()
        .ids()
        .map(|id| (id, value(raw)))
        .collect()
}

pub(super) fn result(
    chronic_cough: f64,
    asthma: f64,
    copd: f64,
    respiratory_infection: f64,
) -> PredictionResult {
    PredictionResult::from_categories(chronic_cough, asthma, copd, respiratory_infection)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

/// Two-question catalog where asthma has no raising question.
pub(super) fn lopsided_catalog() -> Arc<QuestionCatalog> {
    let version = CatalogVersion {
        label: "lopsided".to_string(),
        published_on: NaiveDate::from_ymd_opt(2025, 2, 1).expect("valid date"),
    };
    let questions = vec![
        Question {
            id: QuestionId(1),
            prompt: Prompt {
                indonesian: "Batuk?".to_string(),
                english: "Cough?".to_string(),
            },
            kind: QuestionKind::YesNo,
            weight: 2.0,
            disease_factors: DiseaseFactors::new(1.0, 0.0, 0.5, 0.5),
        },
        Question {
            id: QuestionId(2),
            prompt: Prompt {
                indonesian: "Olahraga?".to_string(),
                english: "Exercise?".to_string(),
            },
            kind: QuestionKind::Scale,
            weight: 1.0,
            disease_factors: DiseaseFactors::new(-0.5, -0.5, 0.0, 0.0),
        },
    ];
    Arc::new(QuestionCatalog::new(version, questions).expect("valid catalog"))
}
