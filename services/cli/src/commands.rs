use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::Args;
use respira::error::AppError;
use respira::screening::{
    read_submissions, score_batch, BatchReport, DiseaseFactors, Locale, PredictionReport, QuestionCatalog,
    QuestionId, QuestionKind,
};
use serde::Serialize;
use tracing::info;

use crate::infra::{parse_locale, Session};

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    /// Prompt language (id or en). Defaults to RESPIRA_LOCALE.
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file mapping question ids to answers, e.g. {"1": 3, "13": 2}
    #[arg(long, conflicts_with = "inline", required_unless_present = "inline")]
    pub(crate) answers: Option<PathBuf>,
    /// Answers passed directly as a JSON object
    #[arg(long)]
    pub(crate) inline: Option<String>,
    /// Language for advice in the report (id or en). Defaults to RESPIRA_LOCALE.
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
    /// Reject yes/no answers other than 0 or 3
    #[arg(long)]
    pub(crate) strict_yes_no: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV with a submission_id column followed by q<id> columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Reject yes/no answers other than 0 or 3
    #[arg(long)]
    pub(crate) strict_yes_no: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionView<'a> {
    id: QuestionId,
    kind: QuestionKind,
    prompt: &'a str,
    weight: f64,
    disease_factors: DiseaseFactors,
}

#[derive(Debug, Serialize)]
struct CatalogView<'a> {
    version: &'a str,
    locale: Locale,
    questions: Vec<QuestionView<'a>>,
}

fn catalog_view(catalog: &QuestionCatalog, locale: Locale) -> CatalogView<'_> {
    CatalogView {
        version: &catalog.version().label,
        locale,
        questions: catalog
            .iter()
            .map(|question| QuestionView {
                id: question.id,
                kind: question.kind,
                prompt: question.prompt.text(locale),
                weight: question.weight,
                disease_factors: question.disease_factors,
            })
            .collect(),
    }
}

pub(crate) fn run_questions(session: &Session, args: QuestionsArgs) -> Result<(), AppError> {
    let locale = args.locale.unwrap_or(session.locale);
    render_json(&mut io::stdout().lock(), &catalog_view(&session.catalog, locale))
}

pub(crate) fn run_score(session: &Session, args: ScoreArgs) -> Result<(), AppError> {
    let raw = match (&args.answers, &args.inline) {
        (Some(path), _) => std::fs::read_to_string(path)?,
        (None, Some(inline)) => inline.clone(),
        (None, None) => "{}".to_string(),
    };
    let locale = args.locale.unwrap_or(session.locale);

    let report = score_document(session, &raw, locale, args.strict_yes_no)?;
    render_json(&mut io::stdout().lock(), &report)
}

pub(crate) fn run_batch(session: &Session, args: BatchArgs) -> Result<(), AppError> {
    let report = score_csv(session, &args)?;
    render_json(&mut io::stdout().lock(), &report)
}

fn score_csv(session: &Session, args: &BatchArgs) -> Result<BatchReport, AppError> {
    let reader = BufReader::new(File::open(&args.csv)?);
    let intake = session.intake(args.strict_yes_no);
    let submissions = read_submissions(reader, &intake)?;
    info!(path = %args.csv.display(), rows = submissions.len(), "read batch");

    Ok(score_batch(&session.engine(), &submissions))
}

fn score_document(
    session: &Session,
    raw: &str,
    locale: Locale,
    strict_yes_no: bool,
) -> Result<PredictionReport, AppError> {
    let outcome = session.intake(strict_yes_no).validate_str(raw)?;

    let result = session.engine().compute_prediction(&outcome.answers);
    let report = PredictionReport::build(&session.catalog, &outcome.answers, result, locale);

    info!(
        answered = report.completeness.answered,
        ignored = outcome.ignored.len(),
        total_score = result.total_score,
        overall = report.overall_risk.label(),
        "scored submission"
    );

    Ok(report)
}

fn render_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
