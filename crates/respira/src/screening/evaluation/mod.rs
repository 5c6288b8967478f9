mod risk;
mod rules;

pub use risk::RiskLevel;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::QuestionCatalog;
use super::domain::{Answers, DiseaseCategory};

/// Stateless scorer bound to a read-only catalog. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<QuestionCatalog>,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }

    /// Engine over the built-in questionnaire.
    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard())
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Convert answers into per-category risk percentages.
    ///
    /// Unanswered questions count as 0 and unknown ids are ignored, so this never fails.
    /// Each category is normalised against its own achievable maximum, which only
    /// includes questions with a positive factor for that category.
    pub fn compute_prediction(&self, answers: &Answers) -> PredictionResult {
        let tallies = rules::tally(&self.catalog, answers);
        let [chronic_cough, asthma, copd, respiratory_infection] =
            tallies.map(|tally| rules::normalize(tally.score, tally.max_possible));

        let result = PredictionResult::from_categories(
            chronic_cough,
            asthma,
            copd,
            respiratory_infection,
        );

        debug!(
            catalog = %self.catalog.version().label,
            answered = answers.len(),
            total_score = result.total_score,
            "computed prediction"
        );

        result
    }

    /// Audit trail of the raw sums behind each percentage.
    pub fn breakdown(&self, answers: &Answers) -> Vec<CategoryBreakdown> {
        let tallies = rules::tally(&self.catalog, answers);

        DiseaseCategory::ALL
            .into_iter()
            .zip(tallies)
            .map(|(category, tally)| CategoryBreakdown {
                category,
                score: tally.score,
                max_possible: tally.max_possible,
                percentage: rules::normalize(tally.score, tally.max_possible),
            })
            .collect()
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Score `answers` against the built-in questionnaire.
pub fn compute_prediction(answers: &Answers) -> PredictionResult {
    ScoringEngine::standard().compute_prediction(answers)
}

/// Four risk percentages in 0..=100 plus their mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub chronic_cough: f64,
    pub asthma: f64,
    pub copd: f64,
    pub respiratory_infection: f64,
    pub total_score: f64,
}

impl PredictionResult {
    pub fn from_categories(
        chronic_cough: f64,
        asthma: f64,
        copd: f64,
        respiratory_infection: f64,
    ) -> Self {
        let total_score = (chronic_cough + asthma + copd + respiratory_infection) / 4.0;
        Self {
            chronic_cough,
            asthma,
            copd,
            respiratory_infection,
            total_score,
        }
    }

    pub fn category(&self, category: DiseaseCategory) -> f64 {
        match category {
            DiseaseCategory::ChronicCough => self.chronic_cough,
            DiseaseCategory::Asthma => self.asthma,
            DiseaseCategory::Copd => self.copd,
            DiseaseCategory::RespiratoryInfection => self.respiratory_infection,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DiseaseCategory, f64)> + '_ {
        DiseaseCategory::ALL
            .into_iter()
            .map(move |category| (category, self.category(category)))
    }

    /// Category with the largest percentage; the earlier category wins ties.
    pub fn highest(&self) -> (DiseaseCategory, f64) {
        self.iter().fold(
            (DiseaseCategory::ChronicCough, self.chronic_cough),
            |best, candidate| if candidate.1 > best.1 { candidate } else { best },
        )
    }

    pub fn risk_level(&self, category: DiseaseCategory) -> RiskLevel {
        RiskLevel::from_percentage(self.category(category))
    }

    pub fn overall_risk(&self) -> RiskLevel {
        RiskLevel::from_percentage(self.total_score)
    }
}

/// Raw and normalised values for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: DiseaseCategory,
    pub score: f64,
    pub max_possible: f64,
    pub percentage: f64,
}
