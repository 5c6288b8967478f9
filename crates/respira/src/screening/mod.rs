//! Respiratory screening questionnaire: catalog, boundary validation, scoring, and reporting.
//!
//! Answers on a 0..=3 scale are combined with per-question weights and signed disease
//! factors, then normalised per category against that category's achievable maximum.

pub mod advice;
pub mod batch;
pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod report;

#[cfg(test)]
mod tests;

pub use advice::{health_tips, recommended_tips, HealthTip};
pub use batch::{read_submissions, score_batch, BatchError, BatchReport, BatchSubmission};
pub use catalog::{CatalogError, CatalogVersion, QuestionCatalog};
pub use domain::{
    AnswerOutOfRange, AnswerValue, Answers, DiseaseCategory, DiseaseFactors, Locale, Prompt,
    Question, QuestionId, QuestionKind, YesNo,
};
pub use evaluation::{
    compute_prediction, CategoryBreakdown, PredictionResult, RiskLevel, ScoringEngine,
};
pub use intake::{AnswerIntake, IntakeError, IntakeOutcome};
pub use report::{Completeness, PredictionReport, PredictionSummary};
