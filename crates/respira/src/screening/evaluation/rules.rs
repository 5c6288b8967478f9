use super::super::catalog::QuestionCatalog;
use super::super::domain::{AnswerValue, Answers, DiseaseCategory};

/// Raw accumulation for one category before normalisation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct CategoryTally {
    pub score: f64,
    pub max_possible: f64,
}

/// Single pass over the catalog. Ids present in `answers` but absent from the catalog are never read.
pub(crate) fn tally(catalog: &QuestionCatalog, answers: &Answers) -> [CategoryTally; 4] {
    let mut tallies = [CategoryTally::default(); 4];
    let top = AnswerValue::MAX.as_f64();

    for question in catalog {
        let value = answers.value_or_zero(question.id).as_f64();

        for category in DiseaseCategory::ALL {
            let factor = question.disease_factors.get(category);
            let tally = &mut tallies[category.index()];

            tally.score += value * question.weight * factor;
            if factor > 0.0 {
                tally.max_possible += top * question.weight * factor;
            }
        }
    }

    tallies
}

/// Percentage of the achievable maximum, clamped to 0..=100. A category nothing can raise scores 0.
pub(crate) fn normalize(score: f64, max_possible: f64) -> f64 {
    if max_possible <= 0.0 {
        return 0.0;
    }

    ((score / max_possible) * 100.0).clamp(0.0, 100.0)
}
