use super::common::*;
use crate::screening::domain::{Answers, DiseaseCategory, QuestionId};
use crate::screening::evaluation::{compute_prediction, RiskLevel, ScoringEngine};

#[test]
fn empty_answers_score_zero_everywhere() {
    let outcome = engine().compute_prediction(&Answers::new());

    for (category, percentage) in outcome.iter() {
        assert_eq!(percentage, 0.0, "{category} should be 0");
    }
    assert_eq!(outcome.total_score, 0.0);
}

#[test]
fn explicit_zero_answers_match_empty_map() {
    let engine = engine();
    assert_eq!(
        engine.compute_prediction(&all_answered_at(0)),
        engine.compute_prediction(&Answers::new())
    );
}

#[test]
fn long_cough_alone_raises_chronic_cough_partially() {
    let outcome = engine().compute_prediction(&answers(&[(1, 3)]));

    assert!(outcome.chronic_cough > 0.0 && outcome.chronic_cough < 100.0);
    assert_close(outcome.chronic_cough, 5.4 / 45.12 * 100.0);
    assert_close(outcome.asthma, 1.8 / 57.18 * 100.0);
    assert_close(outcome.copd, 2.4 / 58.245 * 100.0);
    assert_close(outcome.respiratory_infection, 1.8 / 42.15 * 100.0);
}

#[test]
fn exercise_alone_is_clamped_at_zero() {
    let outcome = engine().compute_prediction(&answers(&[(13, 3)]));

    assert_eq!(outcome.chronic_cough, 0.0);
    assert_eq!(outcome.total_score, 0.0);
}

#[test]
fn exercise_lowers_an_otherwise_positive_score() {
    let engine = engine();
    let without = engine.compute_prediction(&answers(&[(1, 3)]));
    let with = engine.compute_prediction(&answers(&[(1, 3), (13, 3)]));

    for category in DiseaseCategory::ALL {
        assert!(with.category(category) < without.category(category));
    }
    assert_close(with.chronic_cough, 4.8 / 45.12 * 100.0);
}

#[test]
fn every_answer_at_top_stays_below_full_because_of_exercise() {
    let outcome = engine().compute_prediction(&all_answered_at(3));

    assert_close(outcome.chronic_cough, 98.670212765957);
    assert_close(outcome.asthma, 99.475341028332);
    assert_close(outcome.copd, 98.969868658254);
    assert_close(outcome.respiratory_infection, 97.864768683274);
    assert_close(outcome.total_score, 98.745047783954);
    assert_eq!(outcome.overall_risk(), RiskLevel::VeryHigh);
}

#[test]
fn every_risk_answer_at_top_without_exercise_reaches_full() {
    let mut answers = all_answered_at(3);
    answers.insert(QuestionId(13), value(0));

    let outcome = engine().compute_prediction(&answers);

    for (category, percentage) in outcome.iter() {
        assert_eq!(percentage, 100.0, "{category} should saturate");
    }
    assert_eq!(outcome.total_score, 100.0);
}

#[test]
fn unknown_question_ids_are_inert() {
    let engine = engine();
    let base = answers(&[(2, 2), (5, 1)]);
    let noisy = base.clone().with(QuestionId(999), value(3));

    assert_eq!(engine.compute_prediction(&base), engine.compute_prediction(&noisy));
}

#[test]
fn total_is_mean_of_categories() {
    let outcome = engine().compute_prediction(&answers(&[(3, 3), (6, 3), (2, 2)]));

    let mean = (outcome.chronic_cough
        + outcome.asthma
        + outcome.copd
        + outcome.respiratory_infection)
        / 4.0;
    assert!((outcome.total_score - mean).abs() < EPSILON);
    assert_close(outcome.total_score, 16.214723343977);
}

#[test]
fn free_function_uses_standard_catalog() {
    let answers = answers(&[(9, 3), (16, 3)]);
    assert_eq!(
        compute_prediction(&answers),
        ScoringEngine::standard().compute_prediction(&answers)
    );
}

#[test]
fn degenerate_category_scores_zero_without_dividing() {
    let engine = ScoringEngine::new(lopsided_catalog());
    let outcome = engine.compute_prediction(&answers(&[(1, 3), (2, 3)]));

    assert_close(outcome.chronic_cough, 75.0);
    assert_eq!(outcome.asthma, 0.0);
    assert_close(outcome.copd, 100.0);
    assert_close(outcome.respiratory_infection, 100.0);
    assert_close(outcome.total_score, 68.75);
}

#[test]
fn breakdown_exposes_raw_sums() {
    let engine = ScoringEngine::new(lopsided_catalog());
    let breakdown = engine.breakdown(&answers(&[(1, 3), (2, 3)]));

    assert_eq!(breakdown.len(), 4);
    let cough = &breakdown[0];
    assert_eq!(cough.category, DiseaseCategory::ChronicCough);
    assert_close(cough.score, 4.5);
    assert_close(cough.max_possible, 6.0);
    assert_close(cough.percentage, 75.0);

    let asthma = &breakdown[1];
    assert_close(asthma.score, -1.5);
    assert_eq!(asthma.max_possible, 0.0);
    assert_eq!(asthma.percentage, 0.0);
}

#[test]
fn highest_prefers_earlier_category_on_ties() {
    let tied = result(40.0, 40.0, 10.0, 0.0);
    assert_eq!(tied.highest(), (DiseaseCategory::ChronicCough, 40.0));

    let copd_led = result(10.0, 20.0, 60.0, 59.0);
    assert_eq!(copd_led.highest().0, DiseaseCategory::Copd);
}

#[test]
fn result_serializes_with_wire_names() {
    let json = serde_json::to_value(result(10.0, 20.0, 30.0, 40.0)).expect("serializes");
    assert_eq!(json["chronicCough"], 10.0);
    assert_eq!(json["respiratoryInfection"], 40.0);
    assert_eq!(json["totalScore"], 25.0);
}

#[test]
fn engine_leaves_input_untouched() {
    let answers = answers(&[(1, 3), (13, 2)]);
    let snapshot = answers.clone();

    let _ = engine().compute_prediction(&answers);

    assert_eq!(answers, snapshot);
}
