use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::catalog::QuestionCatalog;
use super::domain::{AnswerValue, Answers, QuestionId, QuestionKind};

/// Reasons a raw submission is rejected before scoring.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("answers are not valid JSON: {0}")]
    Malformed(String),
    #[error("answers must be a JSON object keyed by question id")]
    NotAnObject,
    #[error("'{0}' is not a question id")]
    InvalidQuestionKey(String),
    #[error("answer to {question} must be an integer (found {raw})")]
    NotAnInteger { question: QuestionId, raw: String },
    #[error("{0} is answered more than once")]
    DuplicateQuestion(QuestionId),
    #[error("answer to {question} must lie in 0..=3 (found {value})")]
    OutOfRange { question: QuestionId, value: i64 },
    #[error("{question} is a yes/no question and only accepts 0 or 3 (found {value})")]
    NotBinary { question: QuestionId, value: u8 },
}

/// Validated answers plus the ids that were dropped because the catalog does not know them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeOutcome {
    pub answers: Answers,
    pub ignored: Vec<QuestionId>,
}

/// Boundary validator that turns raw submissions into engine-ready `Answers`.
#[derive(Debug, Clone)]
pub struct AnswerIntake {
    catalog: Arc<QuestionCatalog>,
    strict_yes_no: bool,
}

impl AnswerIntake {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self {
            catalog,
            strict_yes_no: false,
        }
    }

    /// Only accept 0 or 3 for yes/no questions.
    pub fn strict_yes_no(mut self, enabled: bool) -> Self {
        self.strict_yes_no = enabled;
        self
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn validate_raw(&self, raw: &BTreeMap<u32, i64>) -> Result<IntakeOutcome, IntakeError> {
        let mut outcome = IntakeOutcome::default();

        for (&id, &value) in raw {
            let question = QuestionId(id);
            if let Some(kind) = self.kind_of(question) {
                let value = self.admit(question, kind, value)?;
                outcome.answers.insert(question, value);
            } else {
                outcome.ignored.push(question);
            }
        }

        self.log_ignored(&outcome);
        Ok(outcome)
    }

    pub fn validate_str(&self, raw: &str) -> Result<IntakeOutcome, IntakeError> {
        let document: Value =
            serde_json::from_str(raw).map_err(|err| IntakeError::Malformed(err.to_string()))?;
        self.validate_json(&document)
    }

    pub fn validate_json(&self, raw: &Value) -> Result<IntakeOutcome, IntakeError> {
        let object = raw.as_object().ok_or(IntakeError::NotAnObject)?;
        let mut outcome = IntakeOutcome::default();
        let mut seen = BTreeSet::new();

        for (key, value) in object {
            let question = key
                .trim()
                .parse::<u32>()
                .map(QuestionId)
                .map_err(|_| IntakeError::InvalidQuestionKey(key.clone()))?;

            // "1", "01" and " 1" all name the same question.
            if !seen.insert(question) {
                return Err(IntakeError::DuplicateQuestion(question));
            }

            let Some(kind) = self.kind_of(question) else {
                outcome.ignored.push(question);
                continue;
            };

            let number = match (value.as_i64(), value.as_u64()) {
                (Some(number), _) => number,
                (None, Some(_)) => {
                    return Err(IntakeError::OutOfRange {
                        question,
                        value: i64::MAX,
                    })
                }
                (None, None) => {
                    return Err(IntakeError::NotAnInteger {
                        question,
                        raw: value.to_string(),
                    })
                }
            };
            let value = self.admit(question, kind, number)?;
            outcome.answers.insert(question, value);
        }

        outcome.ignored.sort();
        self.log_ignored(&outcome);
        Ok(outcome)
    }

    fn kind_of(&self, question: QuestionId) -> Option<QuestionKind> {
        self.catalog.get(question).map(|entry| entry.kind)
    }

    fn admit(
        &self,
        question: QuestionId,
        kind: QuestionKind,
        value: i64,
    ) -> Result<AnswerValue, IntakeError> {
        let answer = AnswerValue::try_from(value)
            .map_err(|_| IntakeError::OutOfRange { question, value })?;

        if self.strict_yes_no
            && kind == QuestionKind::YesNo
            && answer != AnswerValue::MIN
            && answer != AnswerValue::MAX
        {
            return Err(IntakeError::NotBinary {
                question,
                value: answer.get(),
            });
        }

        Ok(answer)
    }

    fn log_ignored(&self, outcome: &IntakeOutcome) {
        if !outcome.ignored.is_empty() {
            debug!(
                catalog = %self.catalog.version().label,
                ignored = ?outcome.ignored,
                "dropped answers for questions outside the catalog"
            );
        }
    }
}
