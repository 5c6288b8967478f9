use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{
    AnswerValue, DiseaseCategory, DiseaseFactors, Prompt, Question, QuestionId, QuestionKind,
};

/// Errors raised while building or loading a question catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog contains no questions")]
    Empty,
    #[error("question id 0 is reserved; ids must be positive")]
    ZeroQuestionId,
    #[error("question {0} is defined more than once")]
    DuplicateQuestion(QuestionId),
    #[error("question {question} has invalid weight {weight} (must be finite and > 0)")]
    InvalidWeight { question: QuestionId, weight: f64 },
    #[error("question {question} has invalid {category} factor {factor} (must lie in [-1, 1])")]
    InvalidFactor {
        question: QuestionId,
        category: DiseaseCategory,
        factor: f64,
    },
    #[error("failed to read catalog from {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Identifies which revision of the questionnaire produced a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogVersion {
    pub label: String,
    pub published_on: NaiveDate,
}

/// Fixed, ordered set of questions the engine scores against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionCatalog {
    version: CatalogVersion,
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    version: CatalogVersion,
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(version: CatalogVersion, questions: Vec<Question>) -> Result<Self, CatalogError> {
        validate(&questions)?;
        Ok(Self { version, questions })
    }

    /// The built-in questionnaire, shared process-wide.
    pub fn standard() -> Arc<QuestionCatalog> {
        static STANDARD: OnceLock<Arc<QuestionCatalog>> = OnceLock::new();
        STANDARD
            .get_or_init(|| {
                Arc::new(Self {
                    version: standard_version(),
                    questions: standard_questions(),
                })
            })
            .clone()
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        let catalog = Self::new(document.version, document.questions)?;

        for category in catalog.degenerate_categories() {
            warn!(
                catalog = %catalog.version.label,
                %category,
                "no question raises this category; its percentage will always be 0"
            );
        }

        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            version = %catalog.version.label,
            questions = catalog.len(),
            "loaded question catalog"
        );
        Ok(catalog)
    }

    pub fn version(&self) -> &CatalogVersion {
        &self.version
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.iter().map(|question| question.id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Highest score a category can reach: every raising question answered at the top of the scale.
    pub fn max_possible(&self, category: DiseaseCategory) -> f64 {
        self.questions
            .iter()
            .map(|question| (question.weight, question.disease_factors.get(category)))
            .filter(|(_, factor)| *factor > 0.0)
            .map(|(weight, factor)| AnswerValue::MAX.as_f64() * weight * factor)
            .sum()
    }

    /// Categories no question can raise. Their percentage is pinned at 0.
    pub fn degenerate_categories(&self) -> Vec<DiseaseCategory> {
        DiseaseCategory::ALL
            .into_iter()
            .filter(|category| self.max_possible(*category) <= 0.0)
            .collect()
    }
}

impl<'a> IntoIterator for &'a QuestionCatalog {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate(questions: &[Question]) -> Result<(), CatalogError> {
    if questions.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = BTreeSet::new();
    for question in questions {
        if question.id.0 == 0 {
            return Err(CatalogError::ZeroQuestionId);
        }
        if !seen.insert(question.id) {
            return Err(CatalogError::DuplicateQuestion(question.id));
        }
        if !question.weight.is_finite() || question.weight <= 0.0 {
            return Err(CatalogError::InvalidWeight {
                question: question.id,
                weight: question.weight,
            });
        }
        for (category, factor) in question.disease_factors.iter() {
            if !factor.is_finite() || !(-1.0..=1.0).contains(&factor) {
                return Err(CatalogError::InvalidFactor {
                    question: question.id,
                    category,
                    factor,
                });
            }
        }
    }

    Ok(())
}

fn standard_version() -> CatalogVersion {
    CatalogVersion {
        label: "respiratory-screening-v1".to_string(),
        published_on: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default(),
    }
}

fn question(
    id: u32,
    kind: QuestionKind,
    weight: f64,
    factors: [f64; 4],
    indonesian: &str,
    english: &str,
) -> Question {
    let [chronic_cough, asthma, copd, respiratory_infection] = factors;
    Question {
        id: QuestionId(id),
        prompt: Prompt {
            indonesian: indonesian.to_string(),
            english: english.to_string(),
        },
        kind,
        weight,
        disease_factors: DiseaseFactors::new(chronic_cough, asthma, copd, respiratory_infection),
    }
}

// Factor order: chronic cough, asthma, COPD, respiratory infection.
fn standard_questions() -> Vec<Question> {
    use QuestionKind::{Scale, YesNo};

    vec![
        question(
            1,
            YesNo,
            2.0,
            [0.9, 0.3, 0.4, 0.3],
            "Apakah Anda mengalami batuk yang berlangsung lebih dari 3 minggu?",
            "Do you experience cough lasting more than 3 weeks?",
        ),
        question(
            2,
            Scale,
            1.8,
            [0.2, 0.8, 0.7, 0.3],
            "Apakah Anda sering mengalami sesak napas?",
            "Do you often experience shortness of breath?",
        ),
        question(
            3,
            YesNo,
            2.5,
            [0.6, 0.4, 0.95, 0.2],
            "Apakah Anda perokok aktif atau tidak merokok?",
            "Are you an active or former smoker?",
        ),
        question(
            4,
            YesNo,
            1.5,
            [0.1, 0.9, 0.1, 0.0],
            "Apakah ada riwayat asma dalam keluarga?",
            "Is there a family history of asthma?",
        ),
        question(
            5,
            Scale,
            1.7,
            [0.5, 0.6, 0.5, 0.4],
            "Seberapa sering Anda terpapar polusi udara (kendaraan, industri)?",
            "How often are you exposed to air pollution (vehicles, industry)?",
        ),
        question(
            6,
            YesNo,
            2.0,
            [0.1, 0.95, 0.6, 0.2],
            "Apakah Anda mengalami mengi (bunyi \"ngik-ngik\" saat bernapas)?",
            "Do you experience wheezing (whistling sound when breathing)?",
        ),
        question(
            7,
            Scale,
            1.5,
            [0.4, 0.5, 0.4, 0.2],
            "Apakah Anda sering terpapar asap rokok (perokok pasif)?",
            "Are you often exposed to secondhand smoke?",
        ),
        question(
            8,
            YesNo,
            1.6,
            [0.5, 0.4, 0.7, 0.2],
            "Apakah Anda bekerja di lingkungan berdebu atau bahan kimia?",
            "Do you work in a dusty or chemical environment?",
        ),
        question(
            9,
            YesNo,
            1.4,
            [0.8, 0.2, 0.8, 0.6],
            "Apakah Anda mengalami batuk berdahak?",
            "Do you experience cough with phlegm?",
        ),
        question(
            10,
            Scale,
            1.2,
            [0.2, 0.3, 0.1, 0.9],
            "Seberapa sering Anda mengalami pilek atau flu dalam 6 bulan terakhir?",
            "How often have you had colds or flu in the last 6 months?",
        ),
        question(
            11,
            YesNo,
            1.7,
            [0.2, 0.3, 0.3, 0.8],
            "Apakah Anda mengalami nyeri dada saat bernapas?",
            "Do you experience chest pain when breathing?",
        ),
        question(
            12,
            YesNo,
            1.5,
            [0.3, 0.9, 0.1, 0.2],
            "Apakah Anda memiliki alergi terhadap debu, tungau, atau serbuk sari?",
            "Do you have allergies to dust, mites, or pollen?",
        ),
        // Protective: frequent exercise lowers every category.
        question(
            13,
            Scale,
            1.0,
            [-0.2, -0.1, -0.2, -0.3],
            "Seberapa sering Anda berolahraga per minggu?",
            "How often do you exercise per week?",
        ),
        question(
            14,
            Scale,
            1.1,
            [0.3, 0.3, 0.6, 0.5],
            "Apakah Anda mengalami kelelahan yang tidak biasa?",
            "Do you experience unusual fatigue?",
        ),
        question(
            15,
            YesNo,
            1.2,
            [0.2, 0.1, 0.8, 0.1],
            "Apakah Anda berusia di atas 40 tahun?",
            "Are you over 40 years old?",
        ),
        question(
            16,
            YesNo,
            1.8,
            [0.1, 0.1, 0.1, 0.95],
            "Apakah Anda mengalami demam dalam 2 minggu terakhir?",
            "Have you had a fever in the last 2 weeks?",
        ),
        question(
            17,
            YesNo,
            2.5,
            [0.5, 0.5, 0.8, 0.3],
            "Apakah Anda memiliki riwayat penyakit paru-paru?",
            "Do you have a history of lung disease?",
        ),
        question(
            18,
            Scale,
            1.6,
            [0.4, 0.6, 0.7, 0.5],
            "Seberapa parah gejala Anda mempengaruhi aktivitas sehari-hari?",
            "How severely do your symptoms affect daily activities?",
        ),
        question(
            19,
            YesNo,
            1.3,
            [0.7, 0.3, 0.8, 0.5],
            "Apakah Anda mengalami produksi lendir berlebih?",
            "Do you experience excessive mucus production?",
        ),
        question(
            20,
            YesNo,
            1.4,
            [0.4, 0.85, 0.4, 0.2],
            "Apakah gejala Anda memburuk di malam hari atau pagi hari?",
            "Do your symptoms worsen at night or morning?",
        ),
        question(
            21,
            Scale,
            1.1,
            [0.3, 0.6, 0.1, 0.4],
            "Seberapa sering Anda terpapar AC atau perubahan suhu mendadak?",
            "How often are you exposed to AC or sudden temperature changes?",
        ),
        question(
            22,
            YesNo,
            1.8,
            [0.3, 0.7, 0.7, 0.2],
            "Apakah Anda mengonsumsi obat pernapasan secara rutin?",
            "Do you regularly take respiratory medication?",
        ),
        question(
            23,
            YesNo,
            1.2,
            [0.5, 0.1, 0.1, 0.6],
            "Apakah Anda mengalami suara serak atau perubahan suara?",
            "Do you experience hoarseness or voice changes?",
        ),
        // Answered as degree of sleep disturbance: 0 = undisturbed, 3 = severely disturbed.
        question(
            24,
            Scale,
            1.0,
            [0.3, 0.5, 0.4, 0.3],
            "Seberapa baik kualitas tidur Anda?",
            "How good is your sleep quality?",
        ),
        question(
            25,
            YesNo,
            1.5,
            [0.5, 0.6, 0.5, 0.3],
            "Apakah Anda tinggal di area dengan kualitas udara buruk?",
            "Do you live in an area with poor air quality?",
        ),
    ]
}
