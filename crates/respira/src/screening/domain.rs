use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a catalog question, also used as the answer-map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Answer style presented to the respondent. Both kinds share the 0..=3 domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    YesNo,
    Scale,
}

/// The four tracked respiratory conditions, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiseaseCategory {
    ChronicCough,
    Asthma,
    Copd,
    RespiratoryInfection,
}

impl DiseaseCategory {
    pub const ALL: [DiseaseCategory; 4] = [
        DiseaseCategory::ChronicCough,
        DiseaseCategory::Asthma,
        DiseaseCategory::Copd,
        DiseaseCategory::RespiratoryInfection,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            DiseaseCategory::ChronicCough => "chronicCough",
            DiseaseCategory::Asthma => "asthma",
            DiseaseCategory::Copd => "copd",
            DiseaseCategory::RespiratoryInfection => "respiratoryInfection",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            DiseaseCategory::ChronicCough => 0,
            DiseaseCategory::Asthma => 1,
            DiseaseCategory::Copd => 2,
            DiseaseCategory::RespiratoryInfection => 3,
        }
    }
}

impl fmt::Display for DiseaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Signed per-category coefficients. Negative values mark protective behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseFactors {
    pub chronic_cough: f64,
    pub asthma: f64,
    pub copd: f64,
    pub respiratory_infection: f64,
}

impl DiseaseFactors {
    pub const fn new(chronic_cough: f64, asthma: f64, copd: f64, respiratory_infection: f64) -> Self {
        Self {
            chronic_cough,
            asthma,
            copd,
            respiratory_infection,
        }
    }

    pub fn get(&self, category: DiseaseCategory) -> f64 {
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
            .map(move |category| (category, self.get(category)))
    }
}

/// Display language for prompts and advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Id,
    En,
}

impl Locale {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "id" | "id-id" => Some(Self::Id),
            "en" | "en-us" | "en-gb" => Some(Self::En),
            _ => None,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Locale::Id => "id",
            Locale::En => "en",
        }
    }
}

/// Question text in both supported languages. Not used for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    #[serde(rename = "id")]
    pub indonesian: String,
    #[serde(rename = "en")]
    pub english: String,
}

impl Prompt {
    pub fn text(&self, locale: Locale) -> &str {
        match locale {
            Locale::Id => &self.indonesian,
            Locale::En => &self.english,
        }
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub prompt: Prompt,
    pub kind: QuestionKind,
    pub weight: f64,
    pub disease_factors: DiseaseFactors,
}

/// Answer value out of the 0..=3 domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("answer value {0} is outside 0..=3")]
pub struct AnswerOutOfRange(pub i64);

/// Validated answer on the shared 0..=3 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct AnswerValue(u8);

impl AnswerValue {
    pub const MIN: AnswerValue = AnswerValue(0);
    pub const MAX: AnswerValue = AnswerValue(3);

    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<i64> for AnswerValue {
    type Error = AnswerOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(AnswerValue::new)
            .ok_or(AnswerOutOfRange(value))
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

/// Binary answer. "Yes" counts at full scale so it weighs like a top scale answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    No,
    Yes,
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

impl From<YesNo> for AnswerValue {
    fn from(value: YesNo) -> Self {
        match value {
            YesNo::No => AnswerValue::MIN,
            YesNo::Yes => AnswerValue::MAX,
        }
    }
}

/// Sparse answer map. Missing entries count as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<QuestionId, AnswerValue>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question: QuestionId, value: AnswerValue) -> Option<AnswerValue> {
        self.0.insert(question, value)
    }

    pub fn with(mut self, question: QuestionId, value: AnswerValue) -> Self {
        self.0.insert(question, value);
        self
    }

    pub fn get(&self, question: QuestionId) -> Option<AnswerValue> {
        self.0.get(&question).copied()
    }

    pub fn value_or_zero(&self, question: QuestionId) -> AnswerValue {
        self.get(question).unwrap_or_default()
    }

    pub fn contains(&self, question: QuestionId) -> bool {
        self.0.contains_key(&question)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, AnswerValue)> + '_ {
        self.0.iter().map(|(id, value)| (*id, *value))
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for Answers {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_value_rejects_out_of_domain() {
        assert_eq!(AnswerValue::try_from(3_i64).map(AnswerValue::get), Ok(3));
        assert_eq!(AnswerValue::try_from(4_i64), Err(AnswerOutOfRange(4)));
        assert_eq!(AnswerValue::try_from(-1_i64), Err(AnswerOutOfRange(-1)));
        assert_eq!(AnswerValue::new(7), None);
    }

    #[test]
    fn yes_no_maps_to_scale_extremes() {
        assert_eq!(AnswerValue::from(YesNo::from(true)), AnswerValue::MAX);
        assert_eq!(AnswerValue::from(YesNo::from(false)), AnswerValue::MIN);
    }

    #[test]
    fn answers_deserialize_from_string_keyed_object() {
        let answers: Answers =
            serde_json::from_str(r#"{"1": 3, "13": 2}"#).expect("answers parse");
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get(QuestionId(13)).map(AnswerValue::get), Some(2));
        assert_eq!(answers.value_or_zero(QuestionId(2)), AnswerValue::MIN);

        let rejected = serde_json::from_str::<Answers>(r#"{"1": 5}"#);
        assert!(rejected.is_err());
    }

    #[test]
    fn locale_parse_is_case_insensitive() {
        assert_eq!(Locale::parse(" EN "), Some(Locale::En));
        assert_eq!(Locale::parse("id"), Some(Locale::Id));
        assert_eq!(Locale::parse("fr"), None);
    }
}
