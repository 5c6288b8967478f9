use std::path::PathBuf;
use std::sync::Arc;

use respira::config::AppConfig;
use respira::error::AppError;
use respira::screening::{AnswerIntake, Locale, QuestionCatalog, ScoringEngine};
use tracing::info;

/// Resolved catalog and defaults shared by every subcommand.
pub(crate) struct Session {
    pub(crate) catalog: Arc<QuestionCatalog>,
    pub(crate) locale: Locale,
}

impl Session {
    /// The `--catalog` flag wins over `RESPIRA_CATALOG_PATH`; otherwise the built-in catalog is used.
    pub(crate) fn open(config: &AppConfig, catalog_flag: Option<PathBuf>) -> Result<Self, AppError> {
        let catalog = match catalog_flag.or_else(|| config.screening.catalog_path.clone()) {
            Some(path) => Arc::new(QuestionCatalog::from_path(path)?),
            None => QuestionCatalog::standard(),
        };

        info!(
            catalog = %catalog.version().label,
            questions = catalog.len(),
            "question catalog ready"
        );

        Ok(Self {
            catalog,
            locale: config.screening.locale,
        })
    }

    pub(crate) fn engine(&self) -> ScoringEngine {
        ScoringEngine::new(self.catalog.clone())
    }

    pub(crate) fn intake(&self, strict_yes_no: bool) -> AnswerIntake {
        AnswerIntake::new(self.catalog.clone()).strict_yes_no(strict_yes_no)
    }
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    Locale::parse(raw).ok_or_else(|| format!("unsupported locale '{raw}' (expected 'id' or 'en')"))
}
