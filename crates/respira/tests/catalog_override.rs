use std::fs;
use std::sync::Arc;

use respira::screening::{
    AnswerIntake, CatalogError, DiseaseCategory, Locale, PredictionReport, QuestionCatalog,
    QuestionId, ScoringEngine,
};
use serde_json::json;

const PILOT_CATALOG: &str = r#"{
    "version": { "label": "pilot-clinic", "publishedOn": "2025-09-01" },
    "questions": [
        {
            "id": 1,
            "prompt": { "id": "Batuk lebih dari 3 minggu?", "en": "Cough for more than 3 weeks?" },
            "kind": "yes_no",
            "weight": 2.0,
            "diseaseFactors": { "chronicCough": 1.0, "asthma": 0.5, "copd": 0.5, "respiratoryInfection": 0.5 }
        },
        {
            "id": 2,
            "prompt": { "id": "Olahraga rutin?", "en": "Regular exercise?" },
            "kind": "scale",
            "weight": 1.0,
            "diseaseFactors": { "chronicCough": -0.5, "asthma": -0.5, "copd": -0.5, "respiratoryInfection": -0.5 }
        }
    ]
}"#;

fn write_catalog(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("respira-{}-{name}.json", std::process::id()));
    fs::write(&path, contents).expect("write temp catalog");
    path
}

#[test]
fn catalog_loaded_from_disk_drives_scoring() {
    let path = write_catalog("pilot", PILOT_CATALOG);
    let catalog = Arc::new(QuestionCatalog::from_path(&path).expect("catalog loads"));
    fs::remove_file(&path).ok();

    let intake = AnswerIntake::new(catalog.clone());
    let outcome = intake
        .validate_json(&json!({ "1": 3, "2": 1, "25": 3 }))
        .expect("valid submission");
    assert_eq!(outcome.ignored, vec![QuestionId(25)]);

    let engine = ScoringEngine::new(catalog.clone());
    let result = engine.compute_prediction(&outcome.answers);

    // cough: (6.0 - 0.5) / 6.0
    assert!((result.chronic_cough - 5.5 / 6.0 * 100.0).abs() < 1e-9);
    // asthma: (3.0 - 0.5) / 3.0
    assert!((result.asthma - 2.5 / 3.0 * 100.0).abs() < 1e-9);

    let report = PredictionReport::build(&catalog, &outcome.answers, result, Locale::En);
    assert_eq!(report.catalog_version.label, "pilot-clinic");
    assert_eq!(report.highest_category, DiseaseCategory::ChronicCough);
    assert!(report.completeness.is_complete());
}

#[test]
fn malformed_catalog_is_rejected() {
    let duplicated = PILOT_CATALOG.replace("\"id\": 2,", "\"id\": 1,");
    let err = QuestionCatalog::from_json_str(&duplicated).expect_err("duplicate ids");
    assert!(matches!(err, CatalogError::DuplicateQuestion(QuestionId(1))));

    let err = QuestionCatalog::from_json_str("{ \"questions\": [] }").expect_err("no version");
    assert!(matches!(err, CatalogError::Parse(_)));
}
