use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use serde::Serialize;
use tracing::info;

use super::domain::Answers;
use super::evaluation::{PredictionResult, ScoringEngine};
use super::intake::{AnswerIntake, IntakeError};
use super::report::PredictionSummary;

const ID_COLUMN: &str = "submission_id";

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("header must start with 'submission_id'")]
    MissingIdColumn,
    #[error("column '{0}' is not of the form q<id>")]
    InvalidColumn(String),
    #[error("column '{0}' repeats a question already in the header")]
    DuplicateColumn(String),
    #[error("row {row}: '{raw}' in column {column} is not an integer")]
    InvalidCell {
        row: usize,
        column: String,
        raw: String,
    },
    #[error("row {row}: {source}")]
    Intake { row: usize, source: IntakeError },
}

/// One CSV row after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSubmission {
    pub submission_id: String,
    pub answers: Answers,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSubmission {
    pub submission_id: String,
    pub result: PredictionResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub submissions: Vec<ScoredSubmission>,
    pub summary: PredictionSummary,
}

/// Parse `submission_id,q1,q2,...` rows. Blank cells are unanswered; rows are numbered from 1.
pub fn read_submissions<R: Read>(
    reader: R,
    intake: &AnswerIntake,
) -> Result<Vec<BatchSubmission>, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut columns = headers.iter();
    if columns.next() != Some(ID_COLUMN) {
        return Err(BatchError::MissingIdColumn);
    }
    let mut seen = BTreeSet::new();
    let mut question_columns = Vec::new();
    for header in columns {
        let question = parse_question_column(header)?;
        if !seen.insert(question) {
            return Err(BatchError::DuplicateColumn(header.to_string()));
        }
        question_columns.push(question);
    }

    let mut submissions = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = index + 1;
        let submission_id = record.get(0).unwrap_or_default().to_string();

        let mut raw = BTreeMap::new();
        for (cell, question) in record.iter().skip(1).zip(&question_columns) {
            if cell.is_empty() {
                continue;
            }
            let value = cell.parse::<i64>().map_err(|_| BatchError::InvalidCell {
                row,
                column: format!("q{question}"),
                raw: cell.to_string(),
            })?;
            raw.insert(*question, value);
        }

        let outcome = intake
            .validate_raw(&raw)
            .map_err(|source| BatchError::Intake { row, source })?;

        submissions.push(BatchSubmission {
            submission_id,
            answers: outcome.answers,
        });
    }

    Ok(submissions)
}

pub fn score_batch(engine: &ScoringEngine, submissions: &[BatchSubmission]) -> BatchReport {
    let submissions: Vec<ScoredSubmission> = submissions
        .iter()
        .map(|submission| ScoredSubmission {
            submission_id: submission.submission_id.clone(),
            result: engine.compute_prediction(&submission.answers),
        })
        .collect();

    let results: Vec<PredictionResult> = submissions.iter().map(|scored| scored.result).collect();
    let summary = PredictionSummary::from_results(&results);

    info!(
        submissions = summary.count,
        average_total = summary.average.total_score,
        "scored batch"
    );

    BatchReport {
        submissions,
        summary,
    }
}

fn parse_question_column(header: &str) -> Result<u32, BatchError> {
    header
        .strip_prefix('q')
        .or_else(|| header.strip_prefix('Q'))
        .and_then(|digits| digits.parse::<u32>().ok())
        .ok_or_else(|| BatchError::InvalidColumn(header.to_string()))
}
