use std::collections::BTreeMap;

use serde::Serialize;

use super::advice::health_tips;
use super::catalog::{CatalogVersion, QuestionCatalog};
use super::domain::{Answers, DiseaseCategory, Locale};
use super::evaluation::{PredictionResult, RiskLevel};

/// How much of the questionnaire was actually answered. Purely informational.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Completeness {
    pub answered: usize,
    pub total: usize,
    pub progress_percent: f64,
}

impl Completeness {
    pub fn of(catalog: &QuestionCatalog, answers: &Answers) -> Self {
        let total = catalog.len();
        let answered = catalog.ids().filter(|id| answers.contains(*id)).count();
        let progress_percent = if total == 0 {
            0.0
        } else {
            answered as f64 / total as f64 * 100.0
        };

        Self {
            answered,
            total,
            progress_percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }
}

/// Presentation bundle for a single scored submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    pub catalog_version: CatalogVersion,
    pub locale: Locale,
    pub result: PredictionResult,
    pub risk_levels: BTreeMap<DiseaseCategory, RiskLevel>,
    pub overall_risk: RiskLevel,
    pub highest_category: DiseaseCategory,
    pub completeness: Completeness,
    pub tips: Vec<&'static str>,
}

impl PredictionReport {
    pub fn build(
        catalog: &QuestionCatalog,
        answers: &Answers,
        result: PredictionResult,
        locale: Locale,
    ) -> Self {
        let risk_levels = DiseaseCategory::ALL
            .into_iter()
            .map(|category| (category, result.risk_level(category)))
            .collect();
        let (highest_category, _) = result.highest();

        Self {
            catalog_version: catalog.version().clone(),
            locale,
            result,
            risk_levels,
            overall_risk: result.overall_risk(),
            highest_category,
            completeness: Completeness::of(catalog, answers),
            tips: health_tips(&result, locale),
        }
    }
}

/// Aggregate view over many results, as shown on history and admin dashboards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    pub count: usize,
    pub average: PredictionResult,
    /// Results bucketed by the band of their total score.
    pub distribution: BTreeMap<RiskLevel, usize>,
}

impl PredictionSummary {
    pub fn from_results(results: &[PredictionResult]) -> Self {
        let mut distribution: BTreeMap<RiskLevel, usize> =
            RiskLevel::ALL.into_iter().map(|level| (level, 0)).collect();

        if results.is_empty() {
            return Self {
                count: 0,
                average: PredictionResult::from_categories(0.0, 0.0, 0.0, 0.0),
                distribution,
            };
        }

        let mut sums = [0.0_f64; 4];
        for result in results {
            for (category, value) in result.iter() {
                sums[category.index()] += value;
            }
            *distribution.entry(result.overall_risk()).or_default() += 1;
        }

        let count = results.len() as f64;
        let [chronic_cough, asthma, copd, respiratory_infection] = sums.map(|sum| sum / count);

        Self {
            count: results.len(),
            average: PredictionResult::from_categories(
                chronic_cough,
                asthma,
                copd,
                respiratory_infection,
            ),
            distribution,
        }
    }
}
